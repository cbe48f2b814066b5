use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;

use crate::{DerefError, ExtractPointer};

// -----------------------------------------------------------------------------
// Pointer

mod sealed {
    pub trait Sealed {}
}

/// The reference kinds that count as one level of a chain.
///
/// Implemented for `&T`, `&mut T`, `Box<T>`, `Rc<T>` and `Arc<T>` only.
/// `Option<P>` is a nullable reference exactly when `P` is one of these,
/// so `Option<i32>` is not treated as a reference.
///
/// ```compile_fail
/// use pc_extract::extract_pointer;
///
/// // `Option<i32>` is not a reference and not a declared terminal.
/// let _ = extract_pointer(&Some(5_i32));
/// ```
pub trait Pointer: sealed::Sealed {}

impl<T: ?Sized> sealed::Sealed for &T {}
impl<T: ?Sized> sealed::Sealed for &mut T {}
impl<T: ?Sized> sealed::Sealed for Box<T> {}
impl<T: ?Sized> sealed::Sealed for Rc<T> {}
impl<T: ?Sized> sealed::Sealed for Arc<T> {}

impl<T: ?Sized> Pointer for &T {}
impl<T: ?Sized> Pointer for &mut T {}
impl<T: ?Sized> Pointer for Box<T> {}
impl<T: ?Sized> Pointer for Rc<T> {}
impl<T: ?Sized> Pointer for Arc<T> {}

// -----------------------------------------------------------------------------
// References

/// Adds one level to the depth of an absence found below the current level.
#[inline]
fn one_level_down(err: DerefError) -> DerefError {
    match err {
        DerefError::Absent { depth } => DerefError::Absent { depth: depth + 1 },
        other => other,
    }
}

impl<T: ExtractPointer + ?Sized> ExtractPointer for &T {
    type Target = T::Target;
    const DEPTH: usize = T::DEPTH + 1;

    #[inline]
    fn try_extract_pointer(&self) -> Result<&Self::Target, DerefError> {
        (**self).try_extract_pointer().map_err(one_level_down)
    }
}

impl<T: ExtractPointer + ?Sized> ExtractPointer for &mut T {
    type Target = T::Target;
    const DEPTH: usize = T::DEPTH + 1;

    #[inline]
    fn try_extract_pointer(&self) -> Result<&Self::Target, DerefError> {
        (**self).try_extract_pointer().map_err(one_level_down)
    }
}

impl<T: ExtractPointer + ?Sized> ExtractPointer for Box<T> {
    type Target = T::Target;
    const DEPTH: usize = T::DEPTH + 1;

    #[inline]
    fn try_extract_pointer(&self) -> Result<&Self::Target, DerefError> {
        (**self).try_extract_pointer().map_err(one_level_down)
    }
}

impl<T: ExtractPointer + ?Sized> ExtractPointer for Rc<T> {
    type Target = T::Target;
    const DEPTH: usize = T::DEPTH + 1;

    #[inline]
    fn try_extract_pointer(&self) -> Result<&Self::Target, DerefError> {
        (**self).try_extract_pointer().map_err(one_level_down)
    }
}

impl<T: ExtractPointer + ?Sized> ExtractPointer for Arc<T> {
    type Target = T::Target;
    const DEPTH: usize = T::DEPTH + 1;

    #[inline]
    fn try_extract_pointer(&self) -> Result<&Self::Target, DerefError> {
        (**self).try_extract_pointer().map_err(one_level_down)
    }
}

// `None` is the absent form of `P`'s outermost level, not a level itself.
impl<P: Pointer + ExtractPointer> ExtractPointer for Option<P> {
    type Target = P::Target;
    const DEPTH: usize = P::DEPTH;

    #[inline]
    fn try_extract_pointer(&self) -> Result<&Self::Target, DerefError> {
        match self {
            Some(ptr) => ptr.try_extract_pointer(),
            None => Err(DerefError::Absent { depth: 0 }),
        }
    }
}

// -----------------------------------------------------------------------------
// Terminals

/// Declares types as terminal values: not references, so unwrapping them
/// returns the value itself.
///
/// # Examples
///
/// ```
/// use pc_extract::{ExtractPointer, extract_pointer, impl_terminal};
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f32);
///
/// impl_terminal!(Meters);
///
/// let m = Meters(1.5);
/// let r = Some(&&m);
///
/// assert_eq!(<Option<&&Meters> as ExtractPointer>::DEPTH, 2);
/// assert_eq!(extract_pointer(&r), Some(&Meters(1.5)));
/// ```
#[macro_export]
macro_rules! impl_terminal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::ExtractPointer for $ty {
                type Target = Self;
                const DEPTH: usize = 0;

                #[inline(always)]
                fn try_extract_pointer(
                    &self,
                ) -> ::core::result::Result<&Self, $crate::DerefError> {
                    ::core::result::Result::Ok(self)
                }
            }
        )*
    };
}

crate::impl_terminal!(
    (), bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    str, String,
    core::time::Duration,
);

crate::impl_terminal!(
    core::num::NonZeroI8, core::num::NonZeroI16, core::num::NonZeroI32,
    core::num::NonZeroI64, core::num::NonZeroI128, core::num::NonZeroIsize,
    core::num::NonZeroU8, core::num::NonZeroU16, core::num::NonZeroU32,
    core::num::NonZeroU64, core::num::NonZeroU128, core::num::NonZeroUsize,
);

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::sync::Arc;

    use crate::{DerefError, ExtractPointer, extract_pointer, try_extract_pointer};

    #[test]
    fn depth_three_chain() {
        let a = 1;
        let b = &a;
        let c = &b;
        let d = &c;

        assert_eq!(<&&&i32 as ExtractPointer>::DEPTH, 3);
        assert_eq!(extract_pointer(&d), Some(&1));
    }

    #[test]
    fn depth_zero_is_identity() {
        let value = 42_u64;
        let out = extract_pointer(&value);

        assert_eq!(<u64 as ExtractPointer>::DEPTH, 0);
        assert!(core::ptr::eq(out.unwrap(), &value));
        // Unwrapping the result again changes nothing.
        assert_eq!(extract_pointer(out.unwrap()), Some(&42));
    }

    #[test]
    fn single_level() {
        let value = 'x';
        let r = &value;
        assert_eq!(extract_pointer(&r), Some(&'x'));
    }

    #[test]
    fn null_reference() {
        let b: Option<&i32> = None;
        assert_eq!(extract_pointer(&b), None);
        assert_eq!(try_extract_pointer(&b), Err(DerefError::Absent { depth: 0 }));
    }

    #[test]
    fn null_at_any_depth() {
        let a = 3_i16;

        let inner: Option<&i16> = None;
        let mid = Some(&inner);
        let outer = Some(&mid);
        assert_eq!(extract_pointer(&outer), None);
        assert_eq!(try_extract_pointer(&outer), Err(DerefError::Absent { depth: 2 }));

        let mid: Option<&Option<&i16>> = None;
        let outer = Some(&mid);
        assert_eq!(try_extract_pointer(&outer), Err(DerefError::Absent { depth: 1 }));

        let inner = Some(&a);
        let mid = Some(&inner);
        let outer = Some(&mid);
        assert_eq!(extract_pointer(&outer), Some(&3));
    }

    #[test]
    fn smart_pointers() {
        let boxed: Box<Rc<Arc<u8>>> = Box::new(Rc::new(Arc::new(9)));
        assert_eq!(<Box<Rc<Arc<u8>>> as ExtractPointer>::DEPTH, 3);
        assert_eq!(extract_pointer(&boxed), Some(&9));

        let nullable: Option<Box<Option<Box<u8>>>> = Some(Box::new(None));
        assert_eq!(
            try_extract_pointer(&nullable),
            Err(DerefError::Absent { depth: 1 })
        );
    }

    #[test]
    fn mut_reference_is_read_only() {
        let mut value = 10_i32;
        let r = &mut value;
        let rr = &r;

        assert_eq!(extract_pointer(&rr), Some(&10));
        assert_eq!(*r, 10);
    }

    #[test]
    fn unsized_terminal() {
        let s: &str = "chain";
        let ss = &s;
        assert_eq!(extract_pointer(&ss), Some("chain"));

        let owned = String::from("owned");
        let boxed = Box::new(&owned);
        assert_eq!(extract_pointer(&boxed).map(String::as_str), Some("owned"));
    }

    #[test]
    fn deterministic() {
        let a = 2.5_f64;
        let b = &a;
        let c = Some(&b);

        let first = extract_pointer(&c);
        for _ in 0..4 {
            assert_eq!(extract_pointer(&c), first);
        }
    }

    #[test]
    fn option_needs_a_reference_inside() {
        fn is_pointer<P: super::Pointer>() {}
        is_pointer::<&u8>();
        is_pointer::<Box<Option<&u8>>>();

        // `Option<&Option<&i32>>`: the inner `Option<&i32>` is one
        // nullable level, the outer `Option<&..>` another.
        let five = 5_i32;
        let inner = Some(&five);
        let outer = Some(&inner);
        assert_eq!(<Option<&Option<&i32>> as ExtractPointer>::DEPTH, 2);
        assert_eq!(extract_pointer(&outer), Some(&5));
    }

    #[test]
    fn zero_is_not_absence() {
        let zero = 0_i32;
        let present = Some(&zero);
        let absent: Option<&i32> = None;

        assert_eq!(extract_pointer(&present), Some(&0));
        assert_eq!(extract_pointer(&absent), None);
    }
}
