// gldispatch/src/dispatch.rs
//
//! The dispatch controller.
//!
//! A [`Dispatcher`] owns one slot per operation of a [`FunctionRegistry`] and the state of the
//! context those slots resolve against: its API and version, the platform resolver, and the
//! two hooks that end a test when a function can't be dispatched. The process has one
//! dispatcher over the built-in GL table, which is what the generated `gl::gl*` stubs call
//! through; the free functions in this module operate on it.

use crate::error::{DispatchError, Error};
use crate::gate::{self, ExtensionSet, GetStringFn, ResolvePath};
use crate::gl::{GL_REGISTRY, VERSION};
use crate::harness;
use crate::info::{GLApi, GLVersion};
use crate::platform::ProcResolver;
use crate::registry::{FunctionRegistry, FunctionSpec};
use crate::slots::{SlotId, SlotState, SlotTable};

use std::mem;
use std::os::raw::c_void;
use std::ptr::NonNull;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

static GL_DISPATCH: LazyLock<Dispatcher<'static>> = LazyLock::new(|| Dispatcher::new(&GL_REGISTRY));

/// The callbacks that end a test when a function can't be dispatched.
///
/// Neither may return: there is no value a GL call site could be handed instead of the
/// function it asked for.
#[derive(Clone, Copy)]
pub struct Hooks {
    /// Called when a function is unknown or the context doesn't offer it.
    pub on_unsupported: fn(&str) -> !,
    /// Called when the context offers a function but the platform returned no address.
    pub on_resolution_failure: fn(&str) -> !,
}

impl Default for Hooks {
    /// Skip on unsupported functions, fail on lookup failures.
    fn default() -> Hooks {
        Hooks {
            on_unsupported: harness::skip_unsupported,
            on_resolution_failure: harness::fail_unresolved,
        }
    }
}

#[derive(Clone)]
struct ContextState {
    api: GLApi,
    version: GLVersion,
    resolver: Arc<dyn ProcResolver>,
    hooks: Hooks,
}

/// Lazily resolves the functions of one registry against one context.
///
/// The dispatcher is shared between threads. Resolved calls only touch the slot table; the
/// locks are taken on the slow path and never held while a hook runs.
pub struct Dispatcher<'r> {
    registry: &'r FunctionRegistry,
    slots: SlotTable,
    state: RwLock<Option<ContextState>>,
    // Cleared whenever the slots are.
    extensions: RwLock<Option<Arc<ExtensionSet>>>,
}

impl<'r> Dispatcher<'r> {
    pub fn new(registry: &'r FunctionRegistry) -> Dispatcher<'r> {
        Dispatcher {
            registry,
            slots: SlotTable::new(registry.slot_count()),
            state: RwLock::new(None),
            extensions: RwLock::new(None),
        }
    }

    #[inline]
    pub fn registry(&self) -> &'r FunctionRegistry {
        self.registry
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Binds the dispatcher to the current context.
    ///
    /// The context's version is read right away with a `glGetString` fetched straight from
    /// `resolver`. If the dispatcher is already bound to a context with the same API and
    /// version, nothing changes. Otherwise every slot is reset, since addresses resolved
    /// against another context or driver can't be reused, and the new resolver and hooks take
    /// over.
    ///
    /// # Safety
    ///
    /// A context of `api` must be current on every thread that dispatches functions, and
    /// `resolver` must return addresses that are valid for it.
    pub unsafe fn init(&self, api: GLApi, resolver: Arc<dyn ProcResolver>, hooks: Hooks)
                       -> Result<(), Error> {
        let version = query_version(api, &*resolver)?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let reinitializing = match *state {
            Some(ref state) if state.api == api && state.version == version => {
                debug!("dispatch already initialized for {:?} {}", api, version);
                return Ok(());
            }
            Some(_) => true,
            None => false,
        };

        self.slots.reset();
        *self.extensions.write().unwrap_or_else(PoisonError::into_inner) = None;
        *state = Some(ContextState { api, version, resolver, hooks });

        if reinitializing {
            info!("dispatch reinitialized for {:?} {}; all slots reset", api, version);
        } else {
            info!("dispatch initialized for {:?} {}", api, version);
        }
        Ok(())
    }

    /// Unbinds the dispatcher from its context and resets every slot.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        self.slots.reset();
        *self.extensions.write().unwrap_or_else(PoisonError::into_inner) = None;
        *state = None;
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.read_state(|state| state.is_some())
    }

    #[inline]
    pub fn api(&self) -> Option<GLApi> {
        self.read_state(|state| state.as_ref().map(|state| state.api))
    }

    #[inline]
    pub fn version(&self) -> Option<GLVersion> {
        self.read_state(|state| state.as_ref().map(|state| state.version))
    }

    /// Whether the current context advertises `name`.
    ///
    /// The extension list is fetched on first use and cached until the next reset. If the
    /// functions that list it can't be resolved, the resolution-failure hook is invoked.
    pub fn is_extension_supported(&self, name: &str) -> bool {
        let context = self.context();
        match self.extensions(&context) {
            Ok(extensions) => extensions.contains(name),
            Err(error) => self.fail(error),
        }
    }

    #[inline]
    pub fn slot_state(&self, slot: SlotId) -> SlotState {
        self.slots.state(slot)
    }

    /// Resolves `name` without invoking any hook.
    ///
    /// On success the operation's slot is patched, so every alias of `name` resolves to the
    /// same address from then on without consulting the resolver again.
    pub fn try_resolve(&self, name: &str) -> Result<*const c_void, DispatchError> {
        let context = self.context();
        let spec = self
            .registry
            .lookup(name)
            .ok_or_else(|| DispatchError::UnknownFunction(name.to_owned()))?;
        self.resolve_spec(&context, spec).map(|address| address.as_ptr() as *const c_void)
    }

    /// Resolves `name`, invoking the matching hook on failure.
    pub fn resolve_by_name(&self, name: &str) -> *const c_void {
        match self.try_resolve(name) {
            Ok(address) => address,
            Err(error) => self.fail(error),
        }
    }

    /// The address to call for `name`, whose operation lives in `slot`.
    ///
    /// This is the path every generated stub takes, so the resolved case is a single slot
    /// check. `slot` must be the slot the registry assigns to `name`.
    #[inline]
    pub(crate) fn proc_address(&self, slot: SlotId, name: &str) -> *const c_void {
        if let Some(address) = self.slots.get(slot) {
            return address.as_ptr();
        }
        debug_assert_eq!(self.registry.lookup(name).map(|spec| spec.slot), Some(slot));
        self.resolve_by_name(name)
    }

    fn resolve_spec(&self, context: &ContextState, spec: &FunctionSpec)
                    -> Result<NonNull<c_void>, DispatchError> {
        if let Some(address) = self.slots.get(spec.slot) {
            return Ok(address);
        }

        let path = gate::select_path(spec, context.api, context.version, |extension| {
            self.extensions(context).map(|extensions| extensions.contains(extension))
        })?;
        let address = match path {
            None => return Err(DispatchError::Unsupported(spec.name.to_owned())),
            Some(ResolvePath::Core) => context.resolver.get_core_proc(spec.name, context.version),
            Some(ResolvePath::Extension(_)) => context.resolver.get_ext_proc(spec.name),
        };
        let address = NonNull::new(address as *mut c_void)
            .ok_or_else(|| DispatchError::LookupFailed(spec.name.to_owned()))?;

        match path {
            Some(ResolvePath::Extension(extension)) => {
                debug!("resolved {} via {} to {:p}", spec.name, extension, address)
            }
            _ => debug!("resolved {} via core {} to {:p}", spec.name, context.version, address),
        }
        self.slots.store(spec.slot, address);
        Ok(address)
    }

    fn extensions(&self, context: &ContextState) -> Result<Arc<ExtensionSet>, DispatchError> {
        let cached = self.extensions.read().unwrap_or_else(PoisonError::into_inner).clone();
        if let Some(extensions) = cached {
            return Ok(extensions);
        }

        // The query reaches the driver through the resolver directly, never through a slot.
        let extensions = unsafe {
            Arc::new(ExtensionSet::query(context.api, context.version, &*context.resolver)?)
        };
        debug!("context advertises {} extensions", extensions.len());
        *self.extensions.write().unwrap_or_else(PoisonError::into_inner) = Some(extensions.clone());
        Ok(extensions)
    }

    fn read_state<F, R>(&self, f: F) -> R where F: FnOnce(&Option<ContextState>) -> R {
        f(&self.state.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn context(&self) -> ContextState {
        match self.read_state(|state| state.clone()) {
            Some(state) => state,
            None => panic!("GL function dispatched before initialization"),
        }
    }

    fn fail(&self, error: DispatchError) -> ! {
        let hooks = self.context().hooks;
        match error {
            DispatchError::UnknownFunction(ref name) | DispatchError::Unsupported(ref name) => {
                (hooks.on_unsupported)(name)
            }
            DispatchError::LookupFailed(ref name) => (hooks.on_resolution_failure)(name),
        }
    }
}

/// Reads the context's version through a `glGetString` fetched directly from the resolver.
unsafe fn query_version(api: GLApi, resolver: &dyn ProcResolver) -> Result<GLVersion, Error> {
    let get_string = resolver.get_core_proc("glGetString", api.baseline_version());
    if get_string.is_null() {
        error!("couldn't resolve glGetString to query the context version");
        return Err(Error::GLFunctionNotFound);
    }
    let get_string: GetStringFn = mem::transmute(get_string);

    let version_string = gate::gl_string(get_string(VERSION))
        .ok_or_else(|| Error::InvalidVersionString(String::new()))?;
    GLVersion::parse(api, &version_string).ok_or(Error::InvalidVersionString(version_string))
}

/// Binds the process's GL dispatcher to the current context. See [`Dispatcher::init`].
///
/// # Safety
///
/// As for [`Dispatcher::init`].
pub unsafe fn init(api: GLApi, resolver: Arc<dyn ProcResolver>, hooks: Hooks) -> Result<(), Error> {
    GL_DISPATCH.init(api, resolver, hooks)
}

/// Unbinds the GL dispatcher and resets its slots.
pub fn reset() {
    GL_DISPATCH.reset()
}

/// Looks `name` up in the GL dispatcher, invoking a hook on failure.
pub fn resolve_by_name(name: &str) -> *const c_void {
    GL_DISPATCH.resolve_by_name(name)
}

/// Looks `name` up in the GL dispatcher without invoking any hook.
pub fn try_resolve(name: &str) -> Result<*const c_void, DispatchError> {
    GL_DISPATCH.try_resolve(name)
}

pub fn is_extension_supported(name: &str) -> bool {
    GL_DISPATCH.is_extension_supported(name)
}

/// The API and version the GL dispatcher is bound to.
pub fn context_version() -> Option<(GLApi, GLVersion)> {
    GL_DISPATCH.read_state(|state| state.as_ref().map(|state| (state.api, state.version)))
}

/// The dispatcher behind the `gl::gl*` entry points.
#[inline]
pub fn gl_dispatcher() -> &'static Dispatcher<'static> {
    &GL_DISPATCH
}

#[inline]
pub(crate) fn proc_address(slot: SlotId, name: &str) -> *const c_void {
    GL_DISPATCH.proc_address(slot, name)
}

/// Wraps the GL dispatcher in a [`glow::Context`].
///
/// Names the context doesn't offer load as null instead of ending the test, so glow can check
/// for optional functions.
///
/// # Safety
///
/// [`init`] must have bound the dispatcher to the current context.
#[cfg(feature = "glow")]
pub unsafe fn glow_context() -> glow::Context {
    glow::Context::from_loader_function(|name| try_resolve(name).unwrap_or(std::ptr::null()))
}
