// gldispatch/src/gl/mod.rs
//
//! OpenGL and OpenGL ES entry points, types and enumerants.
//!
//! Every `gl*` function here is a dispatch stub: calling it resolves the function against the
//! dispatcher's current context on first use and forwards the call to the driver.

use crate::registry::FunctionRegistry;

use std::sync::LazyLock;

#[allow(clippy::all, non_upper_case_globals, dead_code, unused_imports)]
mod bindings {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

pub use self::bindings::*;

mod functions;
pub use self::functions::*;

/// Every function name the dispatcher knows about.
pub static GL_REGISTRY: LazyLock<FunctionRegistry> =
    LazyLock::new(|| FunctionRegistry::new(functions::function_specs()));
