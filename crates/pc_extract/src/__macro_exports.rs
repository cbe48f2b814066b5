//! Items used by exported macros. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::DerefRegistry;

    /// One `register_pointer!` submission.
    pub struct AutoRegisterFn(pub fn(&mut DerefRegistry));

    inventory::collect!(AutoRegisterFn);

    pub(crate) fn register_all(registry: &mut DerefRegistry) {
        for submitted in inventory::iter::<AutoRegisterFn> {
            (submitted.0)(registry);
        }
    }
}

/// Registers reference types with every [`DerefRegistry`] that calls
/// [`auto_register`](crate::DerefRegistry::auto_register).
///
/// Expands to nothing without the `auto_register` feature.
///
/// [`DerefRegistry`]: crate::DerefRegistry
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! register_pointer {
    ($($ty:ty),+ $(,)?) => {
        $crate::__macro_exports::auto_register::inventory::submit! {
            $crate::__macro_exports::auto_register::AutoRegisterFn(
                |registry: &mut $crate::DerefRegistry| {
                    $( registry.register::<$ty>(); )+
                }
            )
        }
    };
}

/// Registers reference types with every `DerefRegistry` that calls
/// `auto_register`.
///
/// Expands to nothing without the `auto_register` feature.
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! register_pointer {
    ($($ty:ty),+ $(,)?) => {};
}
