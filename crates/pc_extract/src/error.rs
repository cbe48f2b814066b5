use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Why a reference chain did not yield the requested value.
///
/// Absence is an ordinary outcome of walking a chain. The `Option`-returning
/// functions report it as `None`; this type exists for callers who prefer
/// `?` propagation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DerefError {
    /// The reference at `depth` (0 is the outermost level) was absent.
    #[error("absent reference at depth {depth}")]
    Absent { depth: usize },

    /// The chain ended on a value of another type than the one requested.
    #[error("terminal type mismatch: expected `{expected}`, found `{found}`")]
    Mismatched {
        expected: &'static str,
        found: &'static str,
    },
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::DerefError;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(
            DerefError::Absent { depth: 2 }.to_string(),
            "absent reference at depth 2"
        );
        assert_eq!(
            DerefError::Mismatched {
                expected: "i32",
                found: "u8"
            }
            .to_string(),
            "terminal type mismatch: expected `i32`, found `u8`"
        );
    }
}
