// gldispatch/src/gate.rs
//
//! The version/extension gate: decides whether a context offers a function, and which
//! resolver should look it up.

use crate::error::DispatchError;
use crate::gl::types::{GLenum, GLint, GLubyte, GLuint};
use crate::gl::{EXTENSIONS, NUM_EXTENSIONS};
use crate::info::{GLApi, GLVersion};
use crate::platform::ProcResolver;
use crate::registry::{FunctionSpec, Requirement};

use fnv::FnvHashSet;
use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_char, c_void};

pub(crate) type GetStringFn = extern "system" fn(name: GLenum) -> *const GLubyte;
type GetStringiFn = extern "system" fn(name: GLenum, index: GLuint) -> *const GLubyte;
type GetIntegervFn = extern "system" fn(pname: GLenum, data: *mut GLint);

/// How a function that passed the gate is looked up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvePath {
    /// Through the core resolver.
    Core,
    /// Through the extension resolver, on behalf of the named extension.
    Extension(&'static str),
}

/// Picks the first requirement of `spec` that the context satisfies.
///
/// `has_extension` is only consulted once an extension requirement is reached, so a context
/// that satisfies a version requirement first never has its extension list queried. An error
/// from `has_extension` ends the search.
pub fn select_path<F, E>(spec: &FunctionSpec,
                         api: GLApi,
                         version: GLVersion,
                         mut has_extension: F)
                         -> Result<Option<ResolvePath>, E>
                         where F: FnMut(&str) -> Result<bool, E> {
    if spec.requirements.is_empty() {
        return Ok(Some(ResolvePath::Core));
    }

    for requirement in &spec.requirements {
        match *requirement {
            Requirement::Version { api: required_api, version: required_version } => {
                if required_api == api && version >= required_version {
                    return Ok(Some(ResolvePath::Core));
                }
            }
            Requirement::Extension(extension) => {
                if has_extension(extension)? {
                    return Ok(Some(ResolvePath::Extension(extension)));
                }
            }
        }
    }
    Ok(None)
}

/// The extensions a context advertises.
#[derive(Clone, Debug, Default)]
pub struct ExtensionSet {
    names: FnvHashSet<String>,
}

impl ExtensionSet {
    /// Splits a space-separated `GL_EXTENSIONS` string.
    pub fn from_extension_string(string: &str) -> ExtensionSet {
        ExtensionSet { names: string.split_whitespace().map(str::to_owned).collect() }
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Asks the current context for its extensions.
    ///
    /// Desktop GL 3.0 and later enumerate them with `glGetStringi`, since `GL_EXTENSIONS` is not
    /// a valid `glGetString` query in core profiles. Everything else splits the
    /// `glGetString(GL_EXTENSIONS)` string. The query functions come straight from the core
    /// resolver so that this never re-enters dispatch. A query function the context must have
    /// but the resolver can't find is a lookup failure, not an empty extension list.
    ///
    /// # Safety
    ///
    /// A context of `api` must be current, and `resolver` must hand out addresses that belong
    /// to it.
    pub(crate) unsafe fn query(api: GLApi, version: GLVersion, resolver: &dyn ProcResolver)
                               -> Result<ExtensionSet, DispatchError> {
        if api == GLApi::GL && version >= GLVersion::new(3, 0) {
            let get_integerv: GetIntegervFn =
                mem::transmute(core_proc(resolver, "glGetIntegerv", version)?);
            let get_stringi: GetStringiFn =
                mem::transmute(core_proc(resolver, "glGetStringi", version)?);

            let mut count = 0;
            get_integerv(NUM_EXTENSIONS, &mut count);
            let names = (0..count.max(0) as GLuint)
                .filter_map(|index| gl_string(get_stringi(EXTENSIONS, index)))
                .collect();
            return Ok(ExtensionSet { names });
        }

        let get_string: GetStringFn = mem::transmute(core_proc(resolver, "glGetString", version)?);
        match gl_string(get_string(EXTENSIONS)) {
            Some(string) => Ok(ExtensionSet::from_extension_string(&string)),
            None => Ok(ExtensionSet::default()),
        }
    }
}

fn core_proc(resolver: &dyn ProcResolver, name: &str, version: GLVersion)
             -> Result<*const c_void, DispatchError> {
    let address = resolver.get_core_proc(name, version);
    if address.is_null() {
        error!("couldn't resolve {} to query the context's extensions", name);
        return Err(DispatchError::LookupFailed(name.to_owned()));
    }
    Ok(address)
}

/// Copies a string returned by `glGetString` or `glGetStringi`.
pub(crate) unsafe fn gl_string(string: *const GLubyte) -> Option<String> {
    if string.is_null() {
        return None;
    }
    Some(CStr::from_ptr(string as *const c_char).to_string_lossy().into_owned())
}
