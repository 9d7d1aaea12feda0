// gldispatch/src/platform/unix/mod.rs
//
//! Resolver adapters for Unix window systems.

#[cfg(any(linux, android))]
pub mod egl;

#[cfg(linux)]
pub mod glx;
