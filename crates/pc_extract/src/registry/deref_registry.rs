use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::{Any, TypeId, type_name};
use core::fmt;

use pc_utils::TypeIdMap;

use crate::{DerefError, Indirect};

// -----------------------------------------------------------------------------
// DerefStep

/// Outcome of stepping through one registered level.
enum Step<'a> {
    Next(&'a dyn Any),
    Absent,
    /// The value did not have the type the entry was registered for.
    Stop,
}

#[derive(Clone, Copy)]
struct DerefStep {
    type_name: &'static str,
    step: fn(&dyn Any) -> Step<'_>,
}

fn step_through<P: Indirect>(value: &dyn Any) -> Step<'_> {
    let Some(ptr) = value.downcast_ref::<P>() else {
        return Step::Stop;
    };
    match ptr.pointee() {
        Some(next) => Step::Next(next),
        None => Step::Absent,
    }
}

// -----------------------------------------------------------------------------
// DerefRegistry

/// The set of types treated as references when unwrapping a `&dyn Any`.
///
/// A value whose runtime type is not registered is a terminal value and is
/// returned unchanged.
///
/// The registry is only mutated through `&mut self`; a populated registry is
/// `Send + Sync` and can be shared for lookups.
///
/// # Examples
///
/// ```
/// use core::any::Any;
/// use pc_extract::{DerefError, DerefRegistry};
///
/// let mut registry = DerefRegistry::new();
/// registry.register_chain::<Box<i32>>();
///
/// let chain: Box<Box<i32>> = Box::new(Box::new(1));
/// let value = registry.extract_pointer(&chain).unwrap();
/// assert_eq!(value.downcast_ref::<i32>(), Some(&1));
///
/// let null: Option<Box<Box<i32>>> = None;
/// assert!(registry.extract_pointer(&null).is_none());
///
/// // Not a registered reference type: returned as is.
/// let plain: &dyn Any = &"text";
/// assert!(!registry.is_reference(plain));
/// assert_eq!(registry.extract_as::<&str>(plain), Ok(&"text"));
///
/// assert_eq!(
///     registry.extract_as::<u8>(&chain),
///     Err(DerefError::Mismatched { expected: "u8", found: "i32" }),
/// );
/// ```
pub struct DerefRegistry {
    steps: TypeIdMap<DerefStep>,
    // Names of every type reachable through a registered step, used to
    // describe terminals in errors.
    names: TypeIdMap<&'static str>,
}

impl Default for DerefRegistry {
    /// See [`DerefRegistry::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl DerefRegistry {
    /// Creates a registry with no reference types.
    ///
    /// Every value is terminal for an empty registry.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            steps: TypeIdMap::new(),
            names: TypeIdMap::new(),
        }
    }

    /// Creates a registry with one level of every standard reference kind
    /// around the primitive types.
    ///
    /// For each of `()` `bool` `char` `i8 - i128` `isize` `u8 - u128` `usize`
    /// `f32` `f64` `String` `&'static str`, this registers the kinds listed
    /// in [`DerefRegistry::register_chain`].
    pub fn new() -> Self {
        let mut registry = Self::empty();

        macro_rules! register_primitives {
            ($($ty:ty),*) => {
                $( registry.register_chain::<$ty>(); )*
            };
        }

        register_primitives!(
            (), bool, char,
            i8, i16, i32, i64, i128, isize,
            u8, u16, u32, u64, u128, usize,
            f32, f64,
            String, &'static str
        );

        registry
    }

    /// Registers `P` as a reference type.
    ///
    /// Returns `false` if `P` was already registered; the first entry is kept.
    pub fn register<P: Indirect>(&mut self) -> bool {
        self.names
            .try_insert(TypeId::of::<P::Pointee>(), type_name::<P::Pointee>);
        self.names.try_insert(TypeId::of::<P>(), type_name::<P>);

        let inserted = self.steps.try_insert(TypeId::of::<P>(), || DerefStep {
            type_name: type_name::<P>(),
            step: step_through::<P>,
        });

        if !inserted {
            log::debug!("`{}` is already registered as a reference", type_name::<P>());
        }
        inserted
    }

    /// Registers every standard reference kind one level around `T`:
    ///
    /// `&'static T`, `Box<T>`, `Rc<T>`, `Arc<T>`, and the `Option` of each.
    ///
    /// Deeper chains are covered by registering around the inner reference
    /// type as well, e.g. `register_chain::<Box<i32>>()` for `Box<Box<i32>>`.
    ///
    /// Returns how many of these were not registered before.
    pub fn register_chain<T: Any>(&mut self) -> usize {
        [
            self.register::<&'static T>(),
            self.register::<Box<T>>(),
            self.register::<Rc<T>>(),
            self.register::<Arc<T>>(),
            self.register::<Option<&'static T>>(),
            self.register::<Option<Box<T>>>(),
            self.register::<Option<Rc<T>>>(),
            self.register::<Option<Arc<T>>>(),
        ]
        .into_iter()
        .filter(|inserted| *inserted)
        .count()
    }

    /// Registers every type submitted with
    /// [`register_pointer!`](crate::register_pointer) in the final binary.
    ///
    /// Returns `true` if automatic registration is available, which
    /// requires the `auto_register` feature and a platform supported by the
    /// `inventory` crate. Without the feature this does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use pc_extract::{DerefRegistry, register_pointer};
    ///
    /// register_pointer!(Box<[u8; 4]>);
    ///
    /// fn main() {
    ///     let mut registry = DerefRegistry::empty();
    ///     if registry.auto_register() {
    ///         assert!(registry.contains::<Box<[u8; 4]>>());
    ///     }
    /// }
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        crate::__macro_exports::auto_register::register_all(self);

        cfg!(feature = "auto_register")
    }

    /// Returns `true` if `T` is registered as a reference type.
    #[inline]
    pub fn contains<T: Any>(&self) -> bool {
        self.steps.contains_type::<T>()
    }

    /// Returns `true` if the runtime type of `value` is a registered
    /// reference type.
    #[inline]
    pub fn is_reference(&self, value: &dyn Any) -> bool {
        self.steps.contains(&value.type_id())
    }

    /// Number of registered reference types.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Follows registered references from `value` and returns the terminal.
    ///
    /// Returns `None` if an absent reference was met.
    ///
    /// The walk stops at the first type that is not registered, so the
    /// result may itself still be a pointer: with [`DerefRegistry::new`],
    /// a `Box<Box<i32>>` comes back unchanged because only `Box<i32>` is
    /// registered. Use [`DerefRegistry::extract_as`] to check the type of
    /// the terminal.
    #[inline]
    pub fn extract_pointer<'a>(&self, value: &'a dyn Any) -> Option<&'a dyn Any> {
        self.try_extract_pointer(value).ok()
    }

    /// Same as [`DerefRegistry::extract_pointer`], reporting the depth of
    /// the absent reference.
    pub fn try_extract_pointer<'a>(&self, value: &'a dyn Any) -> Result<&'a dyn Any, DerefError> {
        let mut current = value;
        let mut depth = 0;

        while let Some(entry) = self.steps.get(&current.type_id()) {
            match (entry.step)(current) {
                Step::Next(next) => {
                    #[cfg(all(debug_assertions, feature = "debug"))]
                    log::trace!("depth {depth}: stepped through `{}`", entry.type_name);

                    current = next;
                    depth += 1;
                }
                Step::Absent => {
                    log::debug!("absent `{}` at depth {depth}", entry.type_name);
                    return Err(DerefError::Absent { depth });
                }
                Step::Stop => break,
            }
        }

        Ok(current)
    }

    /// Follows registered references and downcasts the terminal to `T`.
    pub fn extract_as<'a, T: Any>(&self, value: &'a dyn Any) -> Result<&'a T, DerefError> {
        let terminal = self.try_extract_pointer(value)?;
        terminal
            .downcast_ref::<T>()
            .ok_or_else(|| DerefError::Mismatched {
                expected: type_name::<T>(),
                found: self
                    .names
                    .get(&terminal.type_id())
                    .copied()
                    .unwrap_or("<unknown>"),
            })
    }
}

impl fmt::Debug for DerefRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.steps.values().map(|entry| entry.type_name))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests
