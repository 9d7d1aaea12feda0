// gldispatch/src/platform/unix/egl.rs
//
//! OpenGL and OpenGL ES through EGL.
//!
//! EGL before 1.5 only promises `eglGetProcAddress` for extension functions. Some
//! implementations return null for core functions, and others return non-null garbage for
//! names they don't know. Core functions are therefore looked up directly in the API's own
//! library, and only extension functions go through `eglGetProcAddress`.

use crate::config::LoaderConfig;
use crate::egl::Egl;
use crate::error::Error;
use crate::info::{GLApi, GLVersion};
use crate::platform::library::SharedLibrary;
use crate::platform::ProcResolver;

use std::ffi::CString;
use std::mem;
use std::os::raw::c_void;
use std::path::PathBuf;
use std::ptr;

#[cfg(android)]
static EGL_SONAMES: [&str; 1] = ["libEGL.so"];
#[cfg(not(android))]
static EGL_SONAMES: [&str; 2] = ["libEGL.so.1", "libEGL.so"];

#[cfg(android)]
static GLES1_SONAMES: [&str; 1] = ["libGLESv1_CM.so"];
#[cfg(not(android))]
static GLES1_SONAMES: [&str; 2] = ["libGLESv1_CM.so.1", "libGLESv1_CM.so"];

#[cfg(android)]
static GLES2_SONAMES: [&str; 1] = ["libGLESv2.so"];
#[cfg(not(android))]
static GLES2_SONAMES: [&str; 2] = ["libGLESv2.so.2", "libGLESv2.so"];

// libOpenGL is the GLVND library that carries GL without any window-system bindings.
static GL_SONAMES: [&str; 3] = ["libOpenGL.so.0", "libGL.so.1", "libGL.so"];

pub struct EglResolver {
    api: GLApi,
    egl: Egl,
    // Keeps libEGL mapped for as long as `egl` points into it.
    #[allow(dead_code)]
    egl_library: SharedLibrary,
    api_library: SharedLibrary,
}

unsafe impl Send for EglResolver {}
unsafe impl Sync for EglResolver {}

impl EglResolver {
    pub fn new(config: &LoaderConfig, api: GLApi) -> Result<EglResolver, Error> {
        let egl_library = SharedLibrary::open(None, &EGL_SONAMES).ok_or_else(|| {
            error!("couldn't load libEGL");
            Error::NoGLLibraryFound
        })?;
        let egl = Egl::load_with(|symbol_name| egl_library.symbol(symbol_name));
        if !egl.GetProcAddress.is_loaded() {
            error!("libEGL doesn't export eglGetProcAddress");
            return Err(Error::GLFunctionNotFound);
        }

        let sonames: &[&str] = match api {
            GLApi::GL => &GL_SONAMES,
            GLApi::GLES1 => &GLES1_SONAMES,
            GLApi::GLES2 => &GLES2_SONAMES,
        };
        let api_library = SharedLibrary::open(config.library_for(api).map(PathBuf::as_path),
                                              sonames)
            .ok_or_else(|| {
                error!("couldn't load the {:?} library", api);
                Error::NoGLLibraryFound
            })?;

        Ok(EglResolver { api, egl, egl_library, api_library })
    }

    fn egl_get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        unsafe { mem::transmute(self.egl.GetProcAddress(symbol_name.as_ptr())) }
    }
}

impl ProcResolver for EglResolver {
    fn get_core_proc(&self, name: &str, _: GLVersion) -> *const c_void {
        match self.api {
            GLApi::GLES1 | GLApi::GLES2 => self.api_library.symbol(name),
            // Desktop GL over EGL is at least EGL 1.5 in practice, which does hand out core
            // functions. Fall back to the library for older stacks.
            GLApi::GL => {
                let address = self.egl_get_proc_address(name);
                if address.is_null() {
                    self.api_library.symbol(name)
                } else {
                    address
                }
            }
        }
    }

    #[inline]
    fn get_ext_proc(&self, name: &str) -> *const c_void {
        self.egl_get_proc_address(name)
    }
}
