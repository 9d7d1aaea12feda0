// gldispatch/src/macros.rs
//
//! Macros that turn the function table into registry entries and dispatch stubs.

/// Declares the dispatch table.
///
/// Each operation names its slot, its argument list and its return type, followed by every
/// name it can be called by and the requirements under which that name is available:
///
/// ```ignore
/// gl_functions! {
///     ActiveTexture(texture: GLenum) {
///         glActiveTexture: [gl(1, 3), gles1(1, 0), gles2(2, 0)],
///         glActiveTextureARB: [ext("GL_ARB_multitexture")],
///     }
/// }
/// ```
///
/// This expands to a `Slot` enum with one variant per operation, `SLOT_COUNT`,
/// `function_specs()` for the registry, and one `pub unsafe fn` per name that forwards its
/// arguments to whatever the operation's slot resolves to.
macro_rules! gl_functions {
    (
        $(
            $slot:ident ( $($arg:ident : $ty:ty),* $(,)? ) $(-> $ret:ty)? {
                $( $name:ident : [ $( $kind:ident $version:tt ),* $(,)? ] ),* $(,)?
            }
        )*
    ) => {
        /// One dispatch slot per operation.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(usize)]
        pub enum Slot {
            $($slot,)*
        }

        /// The number of operations in the table.
        pub const SLOT_COUNT: usize = [$(stringify!($slot)),*].len();

        pub(crate) fn function_specs() -> Vec<$crate::registry::FunctionSpec> {
            vec![
                $($(
                    $crate::registry::FunctionSpec::new(
                        stringify!($name),
                        Slot::$slot as $crate::slots::SlotId,
                        vec![$(gl_requirement!($kind $version)),*],
                    ),
                )*)*
            ]
        }

        $(
            gl_stubs!($slot; ($($arg: $ty),*); [$($ret)?]; $($name),*);
        )*
    };
}

macro_rules! gl_stubs {
    ($slot:ident; $args:tt; $ret:tt; $($name:ident),*) => {
        $(
            gl_stub!($slot; $name; $args; $ret);
        )*
    };
}

macro_rules! gl_stub {
    ($slot:ident; $name:ident; ($($arg:ident : $ty:ty),*); []) => {
        gl_stub!($slot; $name; ($($arg: $ty),*); [()]);
    };
    ($slot:ident; $name:ident; ($($arg:ident : $ty:ty),*); [$ret:ty]) => {
        #[allow(non_snake_case, clippy::too_many_arguments, clippy::missing_safety_doc)]
        #[inline]
        pub unsafe fn $name($($arg: $ty),*) -> $ret {
            let address = $crate::dispatch::proc_address(Slot::$slot as $crate::slots::SlotId,
                                                         stringify!($name));
            let function: extern "system" fn($($ty),*) -> $ret = ::std::mem::transmute(address);
            function($($arg),*)
        }
    };
}

macro_rules! gl_requirement {
    (gl ($major:literal, $minor:literal)) => {
        $crate::registry::Requirement::version($crate::info::GLApi::GL,
                                               $crate::info::GLVersion::new($major, $minor))
    };
    (gles1 ($major:literal, $minor:literal)) => {
        $crate::registry::Requirement::version($crate::info::GLApi::GLES1,
                                               $crate::info::GLVersion::new($major, $minor))
    };
    (gles2 ($major:literal, $minor:literal)) => {
        $crate::registry::Requirement::version($crate::info::GLApi::GLES2,
                                               $crate::info::GLVersion::new($major, $minor))
    };
    (ext ($extension:literal)) => {
        $crate::registry::Requirement::extension($extension)
    };
}
