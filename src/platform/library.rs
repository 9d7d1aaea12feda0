// gldispatch/src/platform/library.rs
//
//! Shared libraries opened with `dlopen`.

use libc::{dlopen, dlsym, RTLD_GLOBAL, RTLD_LAZY};
use std::ffi::CString;
use std::os::raw::c_void;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// A library handle that is never closed.
///
/// Addresses resolved from it are cached in dispatch slots for the rest of the process, so the
/// library must stay mapped.
pub(crate) struct SharedLibrary {
    handle: *mut c_void,
}

// dlopen handles are process-global and dlsym is thread-safe.
unsafe impl Send for SharedLibrary {}
unsafe impl Sync for SharedLibrary {}

impl SharedLibrary {
    /// Opens the first library that loads: the configured override if there is one, otherwise
    /// each of `sonames` in turn.
    pub(crate) fn open(override_path: Option<&Path>, sonames: &[&str]) -> Option<SharedLibrary> {
        if let Some(path) = override_path {
            let library = CString::new(path.as_os_str().as_bytes())
                .ok()
                .and_then(|path| SharedLibrary::open_c(&path));
            if library.is_none() {
                error!("couldn't load the configured library {}", path.display());
            }
            return library;
        }

        for soname in sonames {
            let library = CString::new(*soname)
                .ok()
                .and_then(|soname| SharedLibrary::open_c(&soname));
            if library.is_some() {
                debug!("loaded {}", soname);
                return library;
            }
        }
        None
    }

    fn open_c(name: &CString) -> Option<SharedLibrary> {
        unsafe {
            let handle = dlopen(name.as_ptr(), RTLD_LAZY | RTLD_GLOBAL);
            if handle.is_null() {
                None
            } else {
                Some(SharedLibrary { handle })
            }
        }
    }

    /// Looks `symbol_name` up in this library's symbol table. Returns null if it's absent.
    pub(crate) fn symbol(&self, symbol_name: &str) -> *const c_void {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return std::ptr::null(),
        };
        unsafe { dlsym(self.handle, symbol_name.as_ptr()).cast_const() }
    }
}
