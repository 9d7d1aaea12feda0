// gldispatch/src/platform/windows/mod.rs
//
//! Desktop GL through WGL.
//!
//! `wglGetProcAddress` only knows functions beyond OpenGL 1.1; the 1.1 entry points are plain
//! exports of `opengl32.dll`. Core lookups try WGL first and fall back to the DLL.

use crate::error::Error;
use crate::info::GLVersion;
use crate::platform::ProcResolver;

use std::ffi::CString;
use std::os::raw::c_void;
use std::ptr;
use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi;
use winapi::um::wingdi;

pub struct WglResolver {
    opengl32: HMODULE,
}

unsafe impl Send for WglResolver {}
unsafe impl Sync for WglResolver {}

impl WglResolver {
    pub fn new() -> Result<WglResolver, Error> {
        unsafe {
            let opengl32 = libloaderapi::LoadLibraryA(c"opengl32.dll".as_ptr());
            if opengl32.is_null() {
                error!("couldn't load opengl32.dll");
                return Err(Error::NoGLLibraryFound);
            }
            Ok(WglResolver { opengl32 })
        }
    }

    fn wgl_get_proc_address(&self, symbol_name: &CString) -> *const c_void {
        unsafe {
            let address = wingdi::wglGetProcAddress(symbol_name.as_ptr()) as isize;
            // Some drivers signal failure with small sentinels instead of null.
            match address {
                -1 | 0 | 1 | 2 | 3 => ptr::null(),
                address => address as *const c_void,
            }
        }
    }
}

impl ProcResolver for WglResolver {
    fn get_core_proc(&self, name: &str, _: GLVersion) -> *const c_void {
        let symbol_name = match CString::new(name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        let address = self.wgl_get_proc_address(&symbol_name);
        if !address.is_null() {
            return address;
        }
        unsafe { libloaderapi::GetProcAddress(self.opengl32, symbol_name.as_ptr()) as *const c_void }
    }

    fn get_ext_proc(&self, name: &str) -> *const c_void {
        match CString::new(name) {
            Ok(symbol_name) => self.wgl_get_proc_address(&symbol_name),
            Err(_) => ptr::null(),
        }
    }
}
