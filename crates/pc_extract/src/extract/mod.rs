//! Compile-time unwrapping of reference chains.
//!
//! The depth of a chain like `&&&i32` is part of its type, so the walk is
//! expressed as trait recursion: every reference kind strips one level and
//! asks its pointee to continue, and terminal types end the recursion by
//! returning themselves.
//!
//! | Type            | `Target`        | `DEPTH`          |
//! |-----------------|-----------------|------------------|
//! | terminal `T`    | `T`             | `0`              |
//! | `&T`, `&mut T`  | `T::Target`     | `T::DEPTH + 1`   |
//! | `Box<T>`, `Rc<T>`, `Arc<T>` | `T::Target` | `T::DEPTH + 1` |
//! | `Option<P>`, `P: Pointer` | `P::Target` | `P::DEPTH`   |
//!
//! `Option` does not add a level of its own: `Option<&T>` is the nullable
//! form of `&T`, and `None` is the absent reference. Only `Option`s around a
//! [`Pointer`] are references; `Option<i32>` is not.

use crate::DerefError;

mod impls;

pub use impls::Pointer;

// -----------------------------------------------------------------------------
// ExtractPointer

/// A value that may be a chain of references.
///
/// Implemented for the reference kinds listed in the [module docs](self) and
/// for primitive terminal types. Other types become terminals with
/// [`impl_terminal!`](crate::impl_terminal).
///
/// # Examples
///
/// ```
/// use pc_extract::ExtractPointer;
///
/// let value = 5_u8;
/// let chain = Box::new(Some(&value));
///
/// assert_eq!(<Box<Option<&u8>> as ExtractPointer>::DEPTH, 2);
/// assert_eq!(chain.extract_pointer(), Some(&5));
/// ```
pub trait ExtractPointer {
    /// The type at the end of the chain.
    type Target: ?Sized;

    /// Number of reference levels between `Self` and [`Self::Target`].
    const DEPTH: usize;

    /// Walks the chain, reporting where it stopped if a level was absent.
    ///
    /// The depth in [`DerefError::Absent`] counts from the outermost level,
    /// which is depth 0.
    fn try_extract_pointer(&self) -> Result<&Self::Target, DerefError>;

    /// Walks the chain, returning `None` if any level was absent.
    #[inline]
    fn extract_pointer(&self) -> Option<&Self::Target> {
        self.try_extract_pointer().ok()
    }
}

/// Follows every reference level of `value` and returns the terminal value.
///
/// A value that is not a reference is returned unchanged. `None` means some
/// reference along the way was absent.
///
/// # Examples
///
/// ```
/// use pc_extract::extract_pointer;
///
/// let a = 1;
/// let b = &a;
/// let c = &b;
/// let d = &c;
/// assert_eq!(extract_pointer(&d), Some(&1));
///
/// assert_eq!(extract_pointer(&7_i64), Some(&7));
///
/// let b: Option<&i32> = None;
/// assert_eq!(extract_pointer(&b), None);
/// ```
#[inline]
pub fn extract_pointer<P: ExtractPointer + ?Sized>(value: &P) -> Option<&P::Target> {
    value.extract_pointer()
}

/// Same as [`extract_pointer`], with absence reported as
/// [`DerefError::Absent`].
///
/// # Examples
///
/// ```
/// use pc_extract::{DerefError, try_extract_pointer};
///
/// let inner: Option<&u32> = None;
/// let outer = Some(&inner);
///
/// assert_eq!(try_extract_pointer(&outer), Err(DerefError::Absent { depth: 1 }));
/// ```
#[inline]
pub fn try_extract_pointer<P: ExtractPointer + ?Sized>(value: &P) -> Result<&P::Target, DerefError> {
    value.try_extract_pointer()
}
