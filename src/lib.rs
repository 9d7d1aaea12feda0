// gldispatch/src/lib.rs
//
//! Lazy OpenGL and OpenGL ES function dispatch for conformance tests.
//!
//! Test programs call GL entry points such as [`gl::glClearColor`] as if they were linked
//! against a driver. Every entry point starts out bound to a stub. The first call looks the
//! function up in the function registry, checks that the current context's version or
//! extension set offers it, asks a platform resolver for the address and patches the shared
//! dispatch slot. Every later call, through any alias of the same operation, goes straight to
//! the driver.
//!
//! A function the context does not offer ends the test with a SKIP result. A function the
//! context claims to offer but the platform cannot find ends it with a FAIL result. Both
//! outcomes are routed through replaceable, non-returning [`Hooks`].
//!
//! ```ignore
//! use gldispatch::{dispatch, gl, platform, GLApi, Hooks, LoaderConfig};
//!
//! // After the windowing code has made a context current:
//! let config = LoaderConfig::from_env()?;
//! let resolver = platform::create_resolver(&config, GLApi::GL)?;
//! dispatch::init(GLApi::GL, resolver, Hooks::default())?;
//!
//! unsafe {
//!     gl::glClearColor(0.0, 1.0, 0.0, 1.0);
//!     gl::glClear(gl::COLOR_BUFFER_BIT);
//! }
//! ```

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod config;
pub use crate::config::{LoaderConfig, Platform};

pub mod dispatch;
pub use crate::dispatch::{Dispatcher, Hooks};

pub mod error;
pub use crate::error::{DispatchError, Error};

pub mod gate;
pub mod gl;
pub mod harness;
pub use crate::harness::TestResult;

mod info;
pub use crate::info::{GLApi, GLVersion};

pub mod platform;
pub use crate::platform::ProcResolver;

pub mod registry;
pub use crate::registry::{FunctionRegistry, FunctionSpec, Requirement};

pub mod slots;
pub use crate::slots::SlotId;

#[cfg(any(linux, android))]
#[allow(non_camel_case_types, clippy::all)]
mod egl {
    use std::os::raw::{c_long, c_void};
    pub type khronos_utime_nanoseconds_t = khronos_uint64_t;
    pub type khronos_uint64_t = u64;
    pub type khronos_ssize_t = c_long;
    pub type EGLint = i32;
    pub type EGLNativeDisplayType = *const c_void;
    pub type EGLNativePixmapType = *const c_void;
    pub type EGLNativeWindowType = *const c_void;
    pub type NativeDisplayType = EGLNativeDisplayType;
    pub type NativePixmapType = EGLNativePixmapType;
    pub type NativeWindowType = EGLNativeWindowType;
    include!(concat!(env!("OUT_DIR"), "/egl_bindings.rs"));
}

#[cfg(linux)]
#[allow(non_camel_case_types, clippy::all)]
mod glx {
    include!(concat!(env!("OUT_DIR"), "/glx_bindings.rs"));
}

#[cfg(test)]
mod tests;
