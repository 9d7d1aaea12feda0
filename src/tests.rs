// gldispatch/src/tests.rs
//
//! Unit tests, run against a fake driver.

use crate::dispatch::{self, Dispatcher, Hooks};
use crate::error::{DispatchError, Error};
use crate::gl::types::{GLenum, GLfloat, GLint, GLsizei, GLubyte, GLuint};
use crate::gl::{self, Slot};
use crate::info::{GLApi, GLVersion};
use crate::platform::generic::FnResolver;
use crate::platform::ProcResolver;
use crate::registry::{FunctionRegistry, FunctionSpec, Requirement};
use crate::slots::{SlotId, SlotState};

use fnv::FnvHashMap;
use serial_test::serial;
use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_void;
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::sync::{Arc, Mutex};
use std::thread;

// The fake driver

struct FakeDriver {
    version: CString,
    extensions: CString,
    extension_list: Vec<CString>,
    clear_colors: Vec<[u32; 4]>,
    frobnications: u32,
}

impl FakeDriver {
    fn new(version: &str, extensions: &[&str]) -> FakeDriver {
        FakeDriver {
            version: CString::new(version).unwrap(),
            extensions: CString::new(extensions.join(" ")).unwrap(),
            extension_list: extensions.iter().map(|name| CString::new(*name).unwrap()).collect(),
            clear_colors: vec![],
            frobnications: 0,
        }
    }
}

thread_local! {
    static DRIVER: RefCell<FakeDriver> = RefCell::new(FakeDriver::new("1.0", &[]));
    static UNSUPPORTED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static UNRESOLVED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

fn install_driver(version: &str, extensions: &[&str]) {
    DRIVER.with(|driver| *driver.borrow_mut() = FakeDriver::new(version, extensions));
    UNSUPPORTED.with(|names| names.borrow_mut().clear());
    UNRESOLVED.with(|names| names.borrow_mut().clear());
}

extern "system" fn fake_get_string(name: GLenum) -> *const GLubyte {
    DRIVER.with(|driver| {
        let driver = driver.borrow();
        match name {
            gl::VERSION => driver.version.as_ptr() as *const GLubyte,
            gl::EXTENSIONS => driver.extensions.as_ptr() as *const GLubyte,
            _ => ptr::null(),
        }
    })
}

extern "system" fn fake_get_integerv(pname: GLenum, data: *mut GLint) {
    if pname == gl::NUM_EXTENSIONS {
        let count = DRIVER.with(|driver| driver.borrow().extension_list.len());
        unsafe { *data = count as GLint }
    }
}

extern "system" fn fake_get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    DRIVER.with(|driver| {
        let driver = driver.borrow();
        match driver.extension_list.get(index as usize) {
            Some(extension) if name == gl::EXTENSIONS => extension.as_ptr() as *const GLubyte,
            _ => ptr::null(),
        }
    })
}

extern "system" fn fake_frobnicate() {
    DRIVER.with(|driver| driver.borrow_mut().frobnications += 1);
}

extern "system" fn fake_clear_color(red: GLfloat, green: GLfloat, blue: GLfloat, alpha: GLfloat) {
    let color = [red.to_bits(), green.to_bits(), blue.to_bits(), alpha.to_bits()];
    DRIVER.with(|driver| driver.borrow_mut().clear_colors.push(color));
}

extern "system" fn fake_gen_vertex_arrays(n: GLsizei, arrays: *mut GLuint) {
    for index in 0..n {
        unsafe { *arrays.offset(index as isize) = 100 + index as GLuint }
    }
}

// A resolver that counts its lookups

#[derive(Default)]
struct CountingResolver {
    core: FnvHashMap<&'static str, *const c_void>,
    ext: FnvHashMap<&'static str, *const c_void>,
    core_lookups: Mutex<Vec<(String, GLVersion)>>,
    ext_lookups: Mutex<Vec<String>>,
}

// The addresses are fake driver functions, which may be called from any thread.
unsafe impl Send for CountingResolver {}
unsafe impl Sync for CountingResolver {}

impl CountingResolver {
    /// A resolver that knows the functions dispatch needs to read the version and
    /// extensions.
    fn new() -> CountingResolver {
        CountingResolver::default()
            .with_core("glGetString", fake_get_string as *const c_void)
            .with_core("glGetIntegerv", fake_get_integerv as *const c_void)
            .with_core("glGetStringi", fake_get_stringi as *const c_void)
    }

    fn with_core(mut self, name: &'static str, address: *const c_void) -> CountingResolver {
        self.core.insert(name, address);
        self
    }

    fn with_ext(mut self, name: &'static str, address: *const c_void) -> CountingResolver {
        self.ext.insert(name, address);
        self
    }

    fn core_lookups(&self, name: &str) -> usize {
        self.core_lookups.lock().unwrap().iter().filter(|(lookup, _)| lookup == name).count()
    }

    fn ext_lookups(&self, name: &str) -> usize {
        self.ext_lookups.lock().unwrap().iter().filter(|lookup| *lookup == name).count()
    }

    fn total_lookups(&self) -> usize {
        self.core_lookups.lock().unwrap().len() + self.ext_lookups.lock().unwrap().len()
    }
}

impl ProcResolver for CountingResolver {
    fn get_core_proc(&self, name: &str, version: GLVersion) -> *const c_void {
        self.core_lookups.lock().unwrap().push((name.to_owned(), version));
        self.core.get(name).cloned().unwrap_or(ptr::null())
    }

    fn get_ext_proc(&self, name: &str) -> *const c_void {
        self.ext_lookups.lock().unwrap().push(name.to_owned());
        self.ext.get(name).cloned().unwrap_or(ptr::null())
    }
}

// Hooks that record the name and unwind instead of ending the process

fn record_unsupported(name: &str) -> ! {
    UNSUPPORTED.with(|names| names.borrow_mut().push(name.to_owned()));
    panic!("unsupported: {}", name)
}

fn record_unresolved(name: &str) -> ! {
    UNRESOLVED.with(|names| names.borrow_mut().push(name.to_owned()));
    panic!("unresolved: {}", name)
}

fn recording_hooks() -> Hooks {
    Hooks { on_unsupported: record_unsupported, on_resolution_failure: record_unresolved }
}

fn unsupported_names() -> Vec<String> {
    UNSUPPORTED.with(|names| names.borrow().clone())
}

fn unresolved_names() -> Vec<String> {
    UNRESOLVED.with(|names| names.borrow().clone())
}

/// Runs `f`, expecting one of the recording hooks to unwind out of it.
fn expect_hook<F, R>(f: F) where F: FnOnce() -> R {
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    assert!(result.is_err(), "no hook fired");
}

fn frobnicate_registry() -> FunctionRegistry {
    FunctionRegistry::new(vec![
        FunctionSpec::new("glGetString", 0, vec![]),
        FunctionSpec::new("glFrobnicate", 7, vec![
            Requirement::version(GLApi::GL, GLVersion::new(3, 0)),
            Requirement::version(GLApi::GLES1, GLVersion::new(1, 1)),
        ]),
        FunctionSpec::new("glFrobnicateEXT", 7, vec![Requirement::extension("GL_FOO_frob")]),
        FunctionSpec::new("glFrobnicateOES", 7, vec![Requirement::extension("GL_OES_frob")]),
    ])
}

fn frob_resolver() -> Arc<CountingResolver> {
    let frobnicate = fake_frobnicate as *const c_void;
    Arc::new(CountingResolver::new()
        .with_core("glFrobnicate", frobnicate)
        .with_ext("glFrobnicateEXT", frobnicate)
        .with_ext("glFrobnicateOES", frobnicate))
}

#[test]
fn test_resolution_is_idempotent() {
    install_driver("3.3.0 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    assert_eq!(dispatcher.slot_state(7), SlotState::Unresolved);
    let first = dispatcher.resolve_by_name("glFrobnicate");
    let second = dispatcher.resolve_by_name("glFrobnicate");
    assert_eq!(first, fake_frobnicate as *const c_void);
    assert_eq!(first, second);
    assert_eq!(resolver.core_lookups("glFrobnicate"), 1);
    match dispatcher.slot_state(7) {
        SlotState::Resolved(address) => assert_eq!(address.as_ptr() as *const c_void, first),
        SlotState::Unresolved => panic!("slot not patched"),
    }
}

#[test]
fn test_aliases_share_one_lookup() {
    install_driver("3.3.0 Fake", &["GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    let core = dispatcher.resolve_by_name("glFrobnicate");
    let ext = dispatcher.resolve_by_name("glFrobnicateEXT");
    let oes = dispatcher.try_resolve("glFrobnicateOES");
    assert_eq!(core, ext);
    assert_eq!(oes, Ok(core));
    assert_eq!(resolver.core_lookups("glFrobnicate"), 1);
    assert_eq!(resolver.ext_lookups("glFrobnicateEXT"), 0);
    assert_eq!(resolver.ext_lookups("glFrobnicateOES"), 0);
}

#[test]
fn test_gate_rejects_functions_above_the_context_version() {
    install_driver("2.1 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    assert_eq!(dispatcher.try_resolve("glFrobnicate"),
               Err(DispatchError::Unsupported("glFrobnicate".to_owned())));
    expect_hook(|| dispatcher.resolve_by_name("glFrobnicate"));
    assert_eq!(unsupported_names(), ["glFrobnicate"]);
    assert_eq!(resolver.core_lookups("glFrobnicate"), 0);
    assert_eq!(dispatcher.slot_state(7), SlotState::Unresolved);
}

#[test]
fn test_gate_passes_the_active_version_to_the_core_resolver() {
    install_driver("3.0 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    dispatcher.resolve_by_name("glFrobnicate");
    let lookups = resolver.core_lookups.lock().unwrap();
    let (name, version) = lookups.last().unwrap();
    assert_eq!(name, "glFrobnicate");
    assert_eq!(*version, GLVersion::new(3, 0));
}

#[test]
fn test_unknown_names_are_unsupported() {
    install_driver("4.6 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    let lookups_before = resolver.total_lookups();
    expect_hook(|| dispatcher.resolve_by_name("glThisDoesNotExist"));
    assert_eq!(unsupported_names(), ["glThisDoesNotExist"]);
    assert!(unresolved_names().is_empty());
    assert_eq!(resolver.total_lookups(), lookups_before);

    let error = dispatcher.try_resolve("glThisDoesNotExist").unwrap_err();
    assert_eq!(error, DispatchError::UnknownFunction("glThisDoesNotExist".to_owned()));
    assert!(error.is_unsupported());
}

#[test]
fn test_failed_lookups_leave_the_slot_unresolved() {
    install_driver("3.3 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = Arc::new(CountingResolver::new());
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    expect_hook(|| dispatcher.resolve_by_name("glFrobnicate"));
    assert_eq!(unresolved_names(), ["glFrobnicate"]);
    assert!(unsupported_names().is_empty());
    assert_eq!(dispatcher.slot_state(7), SlotState::Unresolved);

    let error = dispatcher.try_resolve("glFrobnicate").unwrap_err();
    assert_eq!(error, DispatchError::LookupFailed("glFrobnicate".to_owned()));
    assert!(!error.is_unsupported());
    assert_eq!(resolver.core_lookups("glFrobnicate"), 2);
}

#[test]
fn test_reinitialization_resets_slots() {
    install_driver("3.0 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };
    dispatcher.resolve_by_name("glFrobnicate");
    assert_eq!(resolver.core_lookups("glFrobnicate"), 1);

    // Same API and version: nothing changes.
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };
    assert_ne!(dispatcher.slot_state(7), SlotState::Unresolved);

    install_driver("4.5 Fake", &[]);
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };
    assert_eq!(dispatcher.version(), Some(GLVersion::new(4, 5)));
    assert_eq!(dispatcher.slot_state(7), SlotState::Unresolved);
    dispatcher.resolve_by_name("glFrobnicate");
    assert_eq!(resolver.core_lookups("glFrobnicate"), 2);

    dispatcher.reset();
    assert!(!dispatcher.is_initialized());
    assert_eq!(dispatcher.slot_state(7), SlotState::Unresolved);
}

#[test]
#[should_panic(expected = "before initialization")]
fn test_dispatch_before_initialization_panics() {
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let _ = dispatcher.try_resolve("glFrobnicate");
}

#[test]
fn test_initialization_needs_get_string() {
    install_driver("3.3 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = Arc::new(CountingResolver::default());
    match unsafe { dispatcher.init(GLApi::GL, resolver, recording_hooks()) } {
        Err(Error::GLFunctionNotFound) => {}
        _ => panic!(),
    }
    assert!(!dispatcher.is_initialized());
}

#[test]
fn test_initialization_rejects_the_wrong_api() {
    install_driver("OpenGL ES 3.0 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    match unsafe { dispatcher.init(GLApi::GL, frob_resolver(), recording_hooks()) } {
        Err(Error::InvalidVersionString(string)) => assert_eq!(string, "OpenGL ES 3.0 Fake"),
        _ => panic!(),
    }
}

#[test]
fn test_extensions_come_from_get_stringi_on_gl_3() {
    install_driver("4.6.0 Fake", &["GL_ARB_sync", "GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    assert!(dispatcher.is_extension_supported("GL_FOO_frob"));
    assert!(dispatcher.is_extension_supported("GL_ARB_sync"));
    assert!(!dispatcher.is_extension_supported("GL_ARB"));
    assert_eq!(resolver.core_lookups("glGetStringi"), 1);
    assert_eq!(resolver.core_lookups("glGetIntegerv"), 1);
    // Only the version query.
    assert_eq!(resolver.core_lookups("glGetString"), 1);
}

#[test]
fn test_extensions_come_from_get_string_before_gl_3() {
    install_driver("2.1 Fake", &["GL_ARB_sync", "GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    assert!(dispatcher.is_extension_supported("GL_ARB_sync"));
    assert_eq!(resolver.core_lookups("glGetStringi"), 0);
    assert_eq!(resolver.core_lookups("glGetString"), 2);
}

#[test]
fn test_extension_set_is_cached_until_reinitialization() {
    install_driver("3.2 Fake", &["GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    assert!(dispatcher.is_extension_supported("GL_FOO_frob"));
    assert!(dispatcher.is_extension_supported("GL_FOO_frob"));
    assert_eq!(resolver.core_lookups("glGetIntegerv"), 1);

    install_driver("3.3 Fake", &[]);
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };
    assert!(!dispatcher.is_extension_supported("GL_FOO_frob"));
    assert_eq!(resolver.core_lookups("glGetIntegerv"), 2);
}

#[test]
fn test_frobnicate_through_its_extension_alias() {
    install_driver("2.1 Fake", &["GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    // The core name needs 3.0 and has no extension path of its own.
    expect_hook(|| dispatcher.resolve_by_name("glFrobnicate"));
    assert_eq!(unsupported_names(), ["glFrobnicate"]);
    assert_eq!(resolver.core_lookups("glFrobnicate"), 0);

    let ext = dispatcher.resolve_by_name("glFrobnicateEXT");
    assert_eq!(resolver.ext_lookups("glFrobnicateEXT"), 1);
    assert_eq!(dispatcher.slot_state(7), SlotState::Resolved(ptr::NonNull::new(ext as *mut _)
                                                                 .unwrap()));

    // Now that slot 7 is patched, the core name short-circuits to the same address.
    assert_eq!(dispatcher.resolve_by_name("glFrobnicate"), ext);
    assert_eq!(resolver.core_lookups("glFrobnicate"), 0);
    assert_eq!(unsupported_names().len(), 1);

    let frobnicate: extern "system" fn() = unsafe { std::mem::transmute(ext) };
    frobnicate();
    assert_eq!(DRIVER.with(|driver| driver.borrow().frobnications), 1);
}

#[test]
fn test_gles1_contexts_use_gles1_paths() {
    install_driver("OpenGL ES-CM 1.1 Fake", &[]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GLES1, resolver.clone(), recording_hooks()).unwrap() };
    assert_eq!(dispatcher.api(), Some(GLApi::GLES1));
    assert_eq!(dispatcher.try_resolve("glFrobnicate"), Ok(fake_frobnicate as *const c_void));

    install_driver("OpenGL ES 3.2 Fake", &["GL_OES_frob"]);
    unsafe { dispatcher.init(GLApi::GLES2, resolver.clone(), recording_hooks()).unwrap() };
    assert_eq!(dispatcher.try_resolve("glFrobnicate"),
               Err(DispatchError::Unsupported("glFrobnicate".to_owned())));
    assert_eq!(dispatcher.try_resolve("glFrobnicateOES"), Ok(fake_frobnicate as *const c_void));
    assert_eq!(resolver.ext_lookups("glFrobnicateOES"), 1);
}

#[test]
fn test_fn_resolver_uses_separate_lookups() {
    install_driver("2.0 Fake", &["GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = FnResolver::new(|name, _| match name {
        "glGetString" => fake_get_string as *const c_void,
        _ => ptr::null(),
    }, |name| match name {
        "glFrobnicateEXT" => fake_frobnicate as *const c_void,
        _ => ptr::null(),
    });
    unsafe { dispatcher.init(GLApi::GL, Arc::new(resolver), recording_hooks()).unwrap() };
    assert_eq!(dispatcher.try_resolve("glFrobnicateEXT"), Ok(fake_frobnicate as *const c_void));
}

#[test]
fn test_fn_resolver_uniform_serves_both_lookups() {
    install_driver("2.0 Fake", &["GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = FnResolver::uniform(|name| match name {
        "glGetString" => fake_get_string as *const c_void,
        "glFrobnicateEXT" => fake_frobnicate as *const c_void,
        _ => ptr::null(),
    });
    assert_eq!(resolver.get_core_proc("glFrobnicateEXT", GLVersion::new(2, 0)),
               resolver.get_ext_proc("glFrobnicateEXT"));
    assert!(resolver.get_ext_proc("glFrobnicate").is_null());

    unsafe { dispatcher.init(GLApi::GL, Arc::new(resolver), recording_hooks()).unwrap() };
    assert_eq!(dispatcher.version(), Some(GLVersion::new(2, 0)));
    assert_eq!(dispatcher.try_resolve("glFrobnicateEXT"), Ok(fake_frobnicate as *const c_void));
}

fn resolver_without_get_stringi() -> Arc<CountingResolver> {
    Arc::new(CountingResolver::default()
        .with_core("glGetString", fake_get_string as *const c_void)
        .with_core("glGetIntegerv", fake_get_integerv as *const c_void)
        .with_core("glFrobnicate", fake_frobnicate as *const c_void)
        .with_ext("glFrobnicateEXT", fake_frobnicate as *const c_void))
}

#[test]
fn test_unresolvable_extension_queries_are_lookup_failures() {
    install_driver("3.3 Fake", &["GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = resolver_without_get_stringi();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    assert_eq!(dispatcher.try_resolve("glFrobnicateEXT"),
               Err(DispatchError::LookupFailed("glGetStringi".to_owned())));
    expect_hook(|| dispatcher.resolve_by_name("glFrobnicateEXT"));
    assert_eq!(unresolved_names(), ["glGetStringi"]);
    assert!(unsupported_names().is_empty());
    assert_eq!(resolver.ext_lookups("glFrobnicateEXT"), 0);
    assert_eq!(dispatcher.slot_state(7), SlotState::Unresolved);

    expect_hook(|| dispatcher.is_extension_supported("GL_FOO_frob"));
    assert_eq!(unresolved_names(), ["glGetStringi", "glGetStringi"]);
    // Failed queries aren't cached.
    assert_eq!(resolver.core_lookups("glGetStringi"), 3);

    // Version paths don't need the extension list.
    assert_eq!(dispatcher.try_resolve("glFrobnicate"), Ok(fake_frobnicate as *const c_void));
}

#[test]
fn test_proc_address_patches_the_slot_then_reads_it() {
    install_driver("3.0 Fake", &["GL_FOO_frob"]);
    let registry = frobnicate_registry();
    let dispatcher = Dispatcher::new(&registry);
    let resolver = frob_resolver();
    unsafe { dispatcher.init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };

    let address = dispatcher.proc_address(7, "glFrobnicate");
    assert_eq!(address, fake_frobnicate as *const c_void);
    assert_eq!(dispatcher.proc_address(7, "glFrobnicateEXT"), address);
    assert_eq!(dispatcher.proc_address(7, "glFrobnicate"), address);
    assert_eq!(resolver.total_lookups(), resolver.core_lookups("glGetString") + 1);
}

// The global dispatcher and the generated entry points

fn stub_resolver() -> Arc<CountingResolver> {
    Arc::new(CountingResolver::new()
        .with_core("glClearColor", fake_clear_color as *const c_void)
        .with_ext("glGenVertexArrays", fake_gen_vertex_arrays as *const c_void))
}

#[test]
#[serial]
fn test_stubs_forward_arguments_unchanged() {
    install_driver("2.1 Fake", &["GL_ARB_vertex_array_object"]);
    dispatch::reset();
    let resolver = stub_resolver();
    unsafe { dispatch::init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };
    assert_eq!(dispatch::context_version(), Some((GLApi::GL, GLVersion::new(2, 1))));

    let color = [0.25, -0.0, f32::MAX, f32::MIN_POSITIVE];
    unsafe {
        gl::glClearColor(color[0], color[1], color[2], color[3]);
        gl::glClearColor(color[0], color[1], color[2], color[3]);
    }
    let expected = color.map(f32::to_bits);
    DRIVER.with(|driver| assert_eq!(driver.borrow().clear_colors, [expected, expected]));
    assert_eq!(resolver.core_lookups("glClearColor"), 1);

    dispatch::reset();
    assert_eq!(dispatch::context_version(), None);
}

#[test]
#[serial]
fn test_stubs_take_the_extension_path() {
    install_driver("2.1 Fake", &["GL_ARB_vertex_array_object"]);
    dispatch::reset();
    let resolver = stub_resolver();
    unsafe { dispatch::init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };
    assert!(dispatch::is_extension_supported("GL_ARB_vertex_array_object"));

    let mut arrays = [0; 2];
    unsafe { gl::glGenVertexArrays(2, arrays.as_mut_ptr()) };
    assert_eq!(arrays, [100, 101]);
    assert_eq!(resolver.ext_lookups("glGenVertexArrays"), 1);

    // The APPLE name isn't advertised, but its slot is already patched.
    let mut array = 0;
    unsafe { gl::glGenVertexArraysAPPLE(1, &mut array) };
    assert_eq!(array, 100);
    assert_eq!(resolver.total_lookups(), resolver.core_lookups("glGetString") + 1);

    let slot = Slot::GenVertexArrays as SlotId;
    assert_ne!(dispatch::gl_dispatcher().slot_state(slot), SlotState::Unresolved);

    dispatch::reset();
}

#[test]
#[serial]
fn test_stubs_report_unsupported_functions() {
    install_driver("2.1 Fake", &[]);
    dispatch::reset();
    unsafe { dispatch::init(GLApi::GL, stub_resolver(), recording_hooks()).unwrap() };

    expect_hook(|| unsafe { gl::glDispatchCompute(1, 1, 1) });
    assert_eq!(unsupported_names(), ["glDispatchCompute"]);
    assert_eq!(dispatch::try_resolve("glDispatchCompute"),
               Err(DispatchError::Unsupported("glDispatchCompute".to_owned())));

    dispatch::reset();
}

#[test]
#[serial]
fn test_stubs_share_one_dispatcher_across_threads() {
    install_driver("2.1 Fake", &["GL_ARB_vertex_array_object"]);
    dispatch::reset();
    let resolver = stub_resolver();
    unsafe { dispatch::init(GLApi::GL, resolver.clone(), recording_hooks()).unwrap() };
    unsafe { gl::glClearColor(1.0, 0.0, 0.0, 1.0) };
    assert!(dispatch::is_extension_supported("GL_ARB_vertex_array_object"));

    // The fake driver's state is per thread; the dispatcher's isn't.
    let (version, colors, arrays) = thread::spawn(|| {
        let version = dispatch::context_version();
        unsafe { gl::glClearColor(0.0, 1.0, 0.0, 1.0) };
        let mut arrays = [0; 1];
        unsafe { gl::glGenVertexArrays(1, arrays.as_mut_ptr()) };
        let colors = DRIVER.with(|driver| driver.borrow().clear_colors.clone());
        (version, colors, arrays)
    }).join().unwrap();

    assert_eq!(version, Some((GLApi::GL, GLVersion::new(2, 1))));
    assert_eq!(colors, [[0.0f32, 1.0, 0.0, 1.0].map(f32::to_bits)]);
    assert_eq!(arrays, [100]);
    assert_eq!(resolver.core_lookups("glClearColor"), 1);
    assert_eq!(resolver.ext_lookups("glGenVertexArrays"), 1);
    assert_eq!(resolver.core_lookups("glGetString"), 2);

    dispatch::reset();
}

#[test]
fn test_global_dispatcher_covers_the_gl_table() {
    let dispatcher = dispatch::gl_dispatcher();
    assert_eq!(dispatcher.slot_count(), gl::SLOT_COUNT);
    assert_eq!(dispatcher.registry().len(), gl::GL_REGISTRY.len());
}
