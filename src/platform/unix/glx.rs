// gldispatch/src/platform/unix/glx.rs
//
//! Desktop GL through GLX.
//!
//! `glXGetProcAddress` serves core and extension functions alike, so both entry points of the
//! adapter go through it.

use crate::config::LoaderConfig;
use crate::error::Error;
use crate::glx::Glx;
use crate::info::{GLApi, GLVersion};
use crate::platform::library::SharedLibrary;
use crate::platform::ProcResolver;

use std::ffi::CString;
use std::mem;
use std::os::raw::c_void;
use std::path::PathBuf;
use std::ptr;

static GL_SONAMES: [&str; 2] = ["libGL.so.1", "libGL.so"];

pub struct GlxResolver {
    glx: Glx,
    // Keeps libGL mapped for as long as `glx` points into it.
    #[allow(dead_code)]
    library: SharedLibrary,
}

// The function pointers in `glx` are never written after loading.
unsafe impl Send for GlxResolver {}
unsafe impl Sync for GlxResolver {}

impl GlxResolver {
    pub fn new(config: &LoaderConfig) -> Result<GlxResolver, Error> {
        let library = SharedLibrary::open(config.library_for(GLApi::GL).map(PathBuf::as_path),
                                          &GL_SONAMES)
            .ok_or(Error::NoGLLibraryFound)?;
        let glx = Glx::load_with(|symbol_name| library.symbol(symbol_name));
        if !glx.GetProcAddress.is_loaded() {
            error!("libGL doesn't export glXGetProcAddress");
            return Err(Error::GLFunctionNotFound);
        }
        Ok(GlxResolver { glx, library })
    }

    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        unsafe {
            mem::transmute(self.glx.GetProcAddress(symbol_name.as_ptr() as *const u8))
        }
    }
}

impl ProcResolver for GlxResolver {
    #[inline]
    fn get_core_proc(&self, name: &str, _: GLVersion) -> *const c_void {
        self.get_proc_address(name)
    }

    #[inline]
    fn get_ext_proc(&self, name: &str) -> *const c_void {
        self.get_proc_address(name)
    }
}
