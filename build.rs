// gldispatch/build.rs
//
//! The `gldispatch` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::generators::{gen_enum_item, gen_types};
use gl_generator::{Api, Fallbacks, Generator, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/// Emits the GL scalar types and enumerants only.
///
/// Entry points are bound by the dispatch table instead of a generated loader.
struct ConstantsGenerator;

impl Generator for ConstantsGenerator {
    fn write<W>(&self, registry: &Registry, dest: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        writeln!(
            dest,
            "mod __gl_imports {{
                pub use std::mem;
                pub use std::os::raw;
            }}"
        )?;

        writeln!(
            dest,
            "pub mod types {{
                #![allow(non_camel_case_types, non_snake_case, dead_code, missing_copy_implementations)]"
        )?;
        gen_types(registry.api, dest)?;
        writeln!(dest, "}}")?;

        for enm in &registry.enums {
            gen_enum_item(enm, "types::", dest)?;
        }
        Ok(())
    }
}

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        windows: { target_os = "windows" },
        macos: { target_os = "macos" },
        android: { target_os = "android" },
        linux: { all(unix, not(any(macos, android))) },

        // Features
        osmesa: { feature = "osmesa" },
    }

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    let target_family = env::var("CARGO_CFG_TARGET_FAMILY").ok();
    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());
    let free_unix = target_family.as_deref() == Some("unix") && target_os != "macos";

    // GL types and enumerants. The compatibility profile keeps the fixed-function
    // enumerants that GLES1 tests use.
    let mut file = File::create(dest.join("gl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Gl, (4, 6), Profile::Compatibility, Fallbacks::All, []);
    registry.write_bindings(ConstantsGenerator, &mut file).unwrap();

    // EGL bindings, used to look up extension entry points on GLES.
    if free_unix {
        let mut file = File::create(dest.join("egl_bindings.rs")).unwrap();
        let registry = Registry::new(Api::Egl, (1, 5), Profile::Core, Fallbacks::All, []);
        registry.write_bindings(StructGenerator, &mut file).unwrap();
    }

    // GLX bindings, used to look up desktop GL entry points on X11.
    if free_unix && target_os != "android" {
        let mut file = File::create(dest.join("glx_bindings.rs")).unwrap();
        let registry = Registry::new(Api::Glx, (1, 4), Profile::Core, Fallbacks::All, []);
        registry.write_bindings(StructGenerator, &mut file).unwrap();
    }
}
