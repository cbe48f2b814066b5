//! Reference chains built at runtime.
//!
//! When the depth is only known during execution, each level is tagged:
//! [`Value::Reference`] is one level of indirection (possibly absent) and
//! [`Value::Scalar`] is the terminal. Unwrapping matches the tag until a
//! scalar or an absent reference is reached.

use core::fmt;

use crate::DerefError;

// -----------------------------------------------------------------------------
// Scalar

/// A terminal value of a [`Value`] chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Unit,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("()"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Char(v) => write!(f, "{v:?}"),
            Self::Str(v) => write!(f, "{v:?}"),
        }
    }
}

macro_rules! impl_scalar_from {
    ($variant:ident($target:ty): $($ty:ty),+) => {
        $(
            impl From<$ty> for Scalar<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }

            impl From<$ty> for Value<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Scalar(Scalar::from(value))
                }
            }
        )+
    };
}

impl_scalar_from!(Bool(bool): bool);
impl_scalar_from!(Char(char): char);
impl_scalar_from!(Int(i64): i8, i16, i32, i64);
impl_scalar_from!(UInt(u64): u8, u16, u32, u64);
impl_scalar_from!(Float(f64): f32, f64);

impl From<()> for Scalar<'_> {
    #[inline]
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Self::Scalar(Scalar::Str(value))
    }
}

impl<'a> From<Scalar<'a>> for Value<'a> {
    #[inline]
    fn from(value: Scalar<'a>) -> Self {
        Self::Scalar(value)
    }
}

crate::impl_terminal!(Scalar<'_>);

// -----------------------------------------------------------------------------
// Value

/// One level of a runtime reference chain.
///
/// # Examples
///
/// ```
/// use pc_extract::{Scalar, Value};
///
/// let a = Value::from(1);
/// let b = Value::to(&a);
/// let c = Value::to(&b);
/// let d = Value::to(&c);
///
/// assert_eq!(d.depth(), 3);
/// assert_eq!(d.extract_pointer(), Some(&Scalar::Int(1)));
///
/// let null = Value::null();
/// let r = Value::to(&null);
/// assert_eq!(r.extract_pointer(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// The end of the chain.
    Scalar(Scalar<'a>),
    /// A reference to the next level; `None` is an absent reference.
    Reference(Option<&'a Value<'a>>),
}

impl<'a> Value<'a> {
    /// A reference to `next`.
    #[inline]
    pub const fn to(next: &'a Value<'a>) -> Self {
        Self::Reference(Some(next))
    }

    /// An absent reference.
    #[inline]
    pub const fn null() -> Self {
        Self::Reference(None)
    }

    /// Returns `true` for [`Value::Reference`], absent or not.
    #[inline]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }

    /// Follows references until a scalar is reached.
    ///
    /// Returns `None` if an absent reference was met first.
    #[inline]
    pub fn extract_pointer(&self) -> Option<&Scalar<'a>> {
        self.try_extract_pointer().ok()
    }

    /// Same as [`Value::extract_pointer`], reporting the depth of the absent
    /// reference.
    pub fn try_extract_pointer(&self) -> Result<&Scalar<'a>, DerefError> {
        let mut current = self;
        let mut depth = 0;
        loop {
            match current {
                Self::Scalar(scalar) => return Ok(scalar),
                Self::Reference(Some(next)) => {
                    current = *next;
                    depth += 1;
                }
                Self::Reference(None) => return Err(DerefError::Absent { depth }),
            }
        }
    }

    /// Number of present references walked before the chain stopped.
    ///
    /// For a chain ending on a scalar this is its indirection depth.
    pub fn depth(&self) -> usize {
        let mut current = self;
        let mut depth = 0;
        while let Self::Reference(Some(next)) = current {
            current = *next;
            depth += 1;
        }
        depth
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Scalar, Value};
    use crate::{DerefError, extract_pointer};
    use alloc::string::ToString;

    #[test]
    fn depth_three_chain() {
        let a = Value::from(1);
        let b = Value::to(&a);
        let c = Value::to(&b);
        let d = Value::to(&c);

        assert_eq!(d.extract_pointer(), Some(&Scalar::Int(1)));
        assert_eq!(d.depth(), 3);
        assert!(d.is_reference());
        assert!(!a.is_reference());
    }

    #[test]
    fn scalar_is_returned_unchanged() {
        let v = Value::from("text");
        assert_eq!(v.extract_pointer(), Some(&Scalar::Str("text")));
        assert_eq!(v.depth(), 0);
    }

    #[test]
    fn null_stops_the_walk() {
        let null = Value::null();
        assert_eq!(null.extract_pointer(), None);
        assert_eq!(null.try_extract_pointer(), Err(DerefError::Absent { depth: 0 }));

        let b = Value::to(&null);
        let c = Value::to(&b);
        assert_eq!(c.extract_pointer(), None);
        assert_eq!(c.try_extract_pointer(), Err(DerefError::Absent { depth: 2 }));
        assert_eq!(c.depth(), 2);
    }

    #[test]
    fn zero_is_present() {
        let zero = Value::from(0_u8);
        let r = Value::to(&zero);
        assert_eq!(r.extract_pointer(), Some(&Scalar::UInt(0)));
    }

    /// Builds `depth` references on top of `base` on the stack and hands the
    /// outermost one to `check`.
    fn with_chain(depth: usize, base: &Value<'_>, check: &dyn Fn(&Value<'_>)) {
        if depth == 0 {
            check(base);
        } else {
            let next = Value::to(base);
            with_chain(depth - 1, &next, check);
        }
    }

    #[test]
    fn deep_chain() {
        let base = Value::from(true);
        with_chain(64, &base, &|top| {
            assert_eq!(top.depth(), 64);
            assert_eq!(top.extract_pointer(), Some(&Scalar::Bool(true)));
        });

        let null = Value::null();
        with_chain(17, &null, &|top| {
            assert_eq!(top.try_extract_pointer(), Err(DerefError::Absent { depth: 17 }));
        });
    }

    #[test]
    fn scalar_through_static_chain() {
        let s = Scalar::Char('z');
        let r = &&s;
        assert_eq!(extract_pointer(&r), Some(&Scalar::Char('z')));
    }

    #[test]
    fn display() {
        assert_eq!(Scalar::Unit.to_string(), "()");
        assert_eq!(Scalar::Int(-3).to_string(), "-3");
        assert_eq!(Scalar::Char('a').to_string(), "'a'");
        assert_eq!(Scalar::Str("s").to_string(), "\"s\"");
        assert_eq!(Scalar::from(1.5_f32).to_string(), "1.5");
    }
}
