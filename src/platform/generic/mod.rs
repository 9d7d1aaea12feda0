// gldispatch/src/platform/generic/mod.rs
//
//! Adapters that are not specific to any operating system.

use crate::info::GLVersion;
use crate::platform::ProcResolver;

use std::os::raw::c_void;

#[cfg(osmesa)]
pub mod osmesa;

type CoreLookup = Box<dyn Fn(&str, GLVersion) -> *const c_void + Send + Sync>;
type ExtensionLookup = Box<dyn Fn(&str) -> *const c_void + Send + Sync>;

/// An adapter backed by caller-supplied lookup functions.
///
/// This is how a cross-platform windowing library (glutin, SDL, GLFW, ...) plugs its own
/// `get_proc_address` in place of the native adapters:
///
/// ```ignore
/// let resolver = FnResolver::uniform(move |name| window.get_proc_address(name));
/// dispatch::init(GLApi::GL, Arc::new(resolver), Hooks::default())?;
/// ```
pub struct FnResolver {
    core: CoreLookup,
    ext: ExtensionLookup,
}

impl FnResolver {
    pub fn new<C, E>(core: C, ext: E) -> FnResolver
                     where C: Fn(&str, GLVersion) -> *const c_void + Send + Sync + 'static,
                           E: Fn(&str) -> *const c_void + Send + Sync + 'static {
        FnResolver { core: Box::new(core), ext: Box::new(ext) }
    }

    /// One lookup function for both core and extension functions.
    pub fn uniform<F>(lookup: F) -> FnResolver
                      where F: Fn(&str) -> *const c_void + Clone + Send + Sync + 'static {
        let core = lookup.clone();
        FnResolver::new(move |name, _| core(name), lookup)
    }
}

impl ProcResolver for FnResolver {
    #[inline]
    fn get_core_proc(&self, name: &str, version: GLVersion) -> *const c_void {
        (self.core)(name, version)
    }

    #[inline]
    fn get_ext_proc(&self, name: &str) -> *const c_void {
        (self.ext)(name)
    }
}
