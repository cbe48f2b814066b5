//! Unwrapping chains whose types are only known at runtime.
//!
//! A `&dyn Any` carries no information about whether it is a reference. The
//! [`DerefRegistry`] records which `'static` types are, and how to step
//! through one level of each, keyed by [`TypeId`](core::any::TypeId).
//! Unwrapping looks up the runtime type of the current level, steps through
//! it, and repeats until it reaches a type that is not registered.
//!
//! Types are registered explicitly with [`DerefRegistry::register`] and
//! [`DerefRegistry::register_chain`], or statically with
//! [`register_pointer!`](crate::register_pointer) and collected by
//! [`DerefRegistry::auto_register`].

// -----------------------------------------------------------------------------
// Modules

mod deref_registry;
mod indirect;

// -----------------------------------------------------------------------------
// Exports

pub use deref_registry::DerefRegistry;
pub use indirect::Indirect;
