use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::any::Any;

// -----------------------------------------------------------------------------
// Indirect

/// A `'static` type that is exactly one level of reference.
///
/// Unlike [`ExtractPointer`](crate::ExtractPointer), which walks a whole
/// chain, this only steps through the outermost level. The registry
/// chains the steps together at runtime.
///
/// # Examples
///
/// ```
/// use pc_extract::Indirect;
///
/// let b = Box::new(3_u16);
/// assert_eq!(b.pointee(), Some(&3));
///
/// let none: Option<Box<u16>> = None;
/// assert_eq!(none.pointee(), None);
/// ```
pub trait Indirect: Any {
    /// The type of the next level.
    type Pointee: Any;

    /// Returns the next level, or `None` if this reference is absent.
    fn pointee(&self) -> Option<&Self::Pointee>;
}

impl<T: Any> Indirect for &'static T {
    type Pointee = T;

    #[inline]
    fn pointee(&self) -> Option<&T> {
        Some(*self)
    }
}

impl<T: Any> Indirect for Box<T> {
    type Pointee = T;

    #[inline]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T: Any> Indirect for Rc<T> {
    type Pointee = T;

    #[inline]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<T: Any> Indirect for Arc<T> {
    type Pointee = T;

    #[inline]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }
}

impl<P: Indirect> Indirect for Option<P> {
    type Pointee = P::Pointee;

    #[inline]
    fn pointee(&self) -> Option<&P::Pointee> {
        self.as_ref()?.pointee()
    }
}

// -----------------------------------------------------------------------------
// Tests
