// gldispatch/src/platform/macos/mod.rs
//
//! Desktop GL through the OpenGL framework.
//!
//! One library serves core and extension functions uniformly.

use crate::config::LoaderConfig;
use crate::error::Error;
use crate::info::{GLApi, GLVersion};
use crate::platform::library::SharedLibrary;
use crate::platform::ProcResolver;

use std::os::raw::c_void;
use std::path::PathBuf;

static OPENGL_FRAMEWORK_PATHS: [&str; 1] = ["/System/Library/Frameworks/OpenGL.framework/OpenGL"];

pub struct CglResolver {
    framework: SharedLibrary,
}

impl CglResolver {
    pub fn new(config: &LoaderConfig) -> Result<CglResolver, Error> {
        let framework = SharedLibrary::open(config.library_for(GLApi::GL).map(PathBuf::as_path),
                                            &OPENGL_FRAMEWORK_PATHS)
            .ok_or(Error::NoGLLibraryFound)?;
        Ok(CglResolver { framework })
    }
}

impl ProcResolver for CglResolver {
    #[inline]
    fn get_core_proc(&self, name: &str, _: GLVersion) -> *const c_void {
        self.framework.symbol(name)
    }

    #[inline]
    fn get_ext_proc(&self, name: &str) -> *const c_void {
        self.framework.symbol(name)
    }
}
