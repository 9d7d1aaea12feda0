// gldispatch/src/error.rs
//
//! Various errors that initialization and resolution can produce.

use std::error;
use std::fmt::{self, Display, Formatter};

/// Errors raised while setting up dispatch: selecting a platform, loading its libraries, or
/// bootstrapping the context's version.
#[derive(Debug)]
pub enum Error {
    /// The platform backend is not compiled in for this target.
    UnsupportedOnThisPlatform,
    /// The platform backend can't serve the requested API (OpenGL, OpenGL ES 1 or OpenGL ES 2).
    UnsupportedGLType,
    /// The system OpenGL library couldn't be located.
    NoGLLibraryFound,
    /// Looking up a function needed to bootstrap the context failed.
    GLFunctionNotFound,
    /// The context's version string couldn't be parsed, or names a different API.
    InvalidVersionString(String),
    /// The configured platform name isn't one we know.
    UnknownPlatform(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            Error::UnsupportedOnThisPlatform => {
                write!(f, "the selected platform is not available on this target")
            }
            Error::UnsupportedGLType => {
                write!(f, "the selected platform does not support the requested GL API")
            }
            Error::NoGLLibraryFound => write!(f, "no GL library could be loaded"),
            Error::GLFunctionNotFound => {
                write!(f, "a function needed to bootstrap the loader could not be resolved")
            }
            Error::InvalidVersionString(ref version) => {
                write!(f, "unexpected GL version string {:?}", version)
            }
            Error::UnknownPlatform(ref name) => write!(f, "unknown platform {:?}", name),
        }
    }
}

impl error::Error for Error {}

/// The outcome of a failed resolution attempt.
///
/// Resolution never hands these back to GL call sites. The dispatcher routes `UnknownFunction`
/// and `Unsupported` to the `on_unsupported` hook and `LookupFailed` to the
/// `on_resolution_failure` hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchError {
    /// The name isn't in the function registry at all.
    UnknownFunction(String),
    /// The function is known, but neither the context's version nor its extensions offer it.
    Unsupported(String),
    /// The context offers the function, but the platform returned a null address for it.
    LookupFailed(String),
}

impl DispatchError {
    /// The function name the error refers to.
    pub fn function_name(&self) -> &str {
        match *self {
            DispatchError::UnknownFunction(ref name) |
            DispatchError::Unsupported(ref name) |
            DispatchError::LookupFailed(ref name) => name,
        }
    }

    /// Whether this outcome should skip the test rather than fail it.
    #[inline]
    pub fn is_unsupported(&self) -> bool {
        !matches!(*self, DispatchError::LookupFailed(_))
    }
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match *self {
            DispatchError::UnknownFunction(ref name) => {
                write!(f, "function \"{}\" is not in the dispatch table", name)
            }
            DispatchError::Unsupported(ref name) => {
                write!(f, "function \"{}\" not supported on this implementation", name)
            }
            DispatchError::LookupFailed(ref name) => {
                write!(f, "failed to get address of function \"{}\"", name)
            }
        }
    }
}

impl error::Error for DispatchError {}
