// gldispatch/src/platform/generic/osmesa.rs
//
//! OpenGL function lookup for OSMesa.

use crate::info::GLVersion;
use crate::platform::ProcResolver;

use osmesa_sys::OSMesaGetProcAddress;
use std::ffi::CString;
use std::os::raw::{c_char, c_void};
use std::ptr;

pub struct OSMesaResolver;

impl OSMesaResolver {
    fn get_proc_address(&self, symbol_name: &str) -> *const c_void {
        let symbol_name = match CString::new(symbol_name) {
            Ok(symbol_name) => symbol_name,
            Err(_) => return ptr::null(),
        };
        unsafe {
            match OSMesaGetProcAddress(symbol_name.as_ptr() as *const c_char) {
                Some(pointer) => pointer as *const c_void,
                None => ptr::null(),
            }
        }
    }
}

impl ProcResolver for OSMesaResolver {
    #[inline]
    fn get_core_proc(&self, name: &str, _: GLVersion) -> *const c_void {
        self.get_proc_address(name)
    }

    #[inline]
    fn get_ext_proc(&self, name: &str) -> *const c_void {
        self.get_proc_address(name)
    }
}
