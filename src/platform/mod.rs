// gldispatch/src/platform/mod.rs
//
//! Platform-specific resolver adapters.
//!
//! Every adapter turns a function name into an address through one of two uniform entry
//! points, so the dispatcher never needs to know which window system it is running on.

use crate::config::{LoaderConfig, Platform};
use crate::error::Error;
use crate::info::{GLApi, GLVersion};

use std::os::raw::c_void;
use std::sync::Arc;

pub mod generic;
pub use self::generic::FnResolver;

#[cfg(unix)]
pub(crate) mod library;

#[cfg(macos)]
pub mod macos;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

/// Looks up function addresses for the current context.
///
/// Both methods return null when the symbol can't be found. Repeated calls with the same name
/// must return the same address for the lifetime of the process. Resolvers are shared by every
/// thread that dispatches GL calls.
pub trait ProcResolver: Send + Sync {
    /// Looks up a function that the context offers as part of its core API. `version` is the
    /// context's active version.
    fn get_core_proc(&self, name: &str, version: GLVersion) -> *const c_void;

    /// Looks up a function that the context offers through an extension.
    fn get_ext_proc(&self, name: &str) -> *const c_void;
}

/// Creates the adapter that `config` selects for `api`.
pub fn create_resolver(config: &LoaderConfig, api: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    let platform = config.platform_for(api);
    debug!("creating {} resolver for {:?}", platform, api);
    match platform {
        Platform::Glx => create_glx_resolver(config, api),
        Platform::Egl => create_egl_resolver(config, api),
        Platform::Wgl => create_wgl_resolver(api),
        Platform::Cgl => create_cgl_resolver(config, api),
        Platform::OSMesa => create_osmesa_resolver(api),
    }
}

#[cfg(linux)]
fn create_glx_resolver(config: &LoaderConfig, api: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    if api != GLApi::GL {
        return Err(Error::UnsupportedGLType);
    }
    Ok(Arc::new(unix::glx::GlxResolver::new(config)?))
}

#[cfg(not(linux))]
fn create_glx_resolver(_: &LoaderConfig, _: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    Err(Error::UnsupportedOnThisPlatform)
}

#[cfg(any(linux, android))]
fn create_egl_resolver(config: &LoaderConfig, api: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    Ok(Arc::new(unix::egl::EglResolver::new(config, api)?))
}

#[cfg(not(any(linux, android)))]
fn create_egl_resolver(_: &LoaderConfig, _: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    Err(Error::UnsupportedOnThisPlatform)
}

#[cfg(windows)]
fn create_wgl_resolver(api: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    if api != GLApi::GL {
        return Err(Error::UnsupportedGLType);
    }
    Ok(Arc::new(windows::WglResolver::new()?))
}

#[cfg(not(windows))]
fn create_wgl_resolver(_: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    Err(Error::UnsupportedOnThisPlatform)
}

#[cfg(macos)]
fn create_cgl_resolver(config: &LoaderConfig, api: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    if api != GLApi::GL {
        return Err(Error::UnsupportedGLType);
    }
    Ok(Arc::new(macos::CglResolver::new(config)?))
}

#[cfg(not(macos))]
fn create_cgl_resolver(_: &LoaderConfig, _: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    Err(Error::UnsupportedOnThisPlatform)
}

#[cfg(osmesa)]
fn create_osmesa_resolver(api: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    if api != GLApi::GL {
        return Err(Error::UnsupportedGLType);
    }
    Ok(Arc::new(generic::osmesa::OSMesaResolver))
}

#[cfg(not(osmesa))]
fn create_osmesa_resolver(_: GLApi) -> Result<Arc<dyn ProcResolver>, Error> {
    Err(Error::UnsupportedOnThisPlatform)
}
