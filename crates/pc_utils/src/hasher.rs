use core::hash::{BuildHasher, Hasher};

// -----------------------------------------------------------------------------
// TypeIdHasher

/// Hasher for [`TypeId`](core::any::TypeId) keys.
///
/// A `TypeId` is already a hash of its type, so the `u64` it writes is used
/// as is. Any other input is folded in 8-byte words.
#[derive(Copy, Clone, Default, Debug)]
pub struct TypeIdHasher {
    hash: u64,
}

impl Hasher for TypeIdHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for chunk in bytes.chunks(8) {
            let mut word = [0_u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            self.hash = self.hash.rotate_left(5) ^ u64::from_ne_bytes(word);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`TypeIdHasher`]s.
///
/// # Examples
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use pc_utils::TypeIdHashState;
///
/// let mut hasher = TypeIdHashState.build_hasher();
/// 7_u64.hash(&mut hasher);
///
/// assert_eq!(hasher.finish(), 7);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct TypeIdHashState;

impl BuildHasher for TypeIdHashState {
    type Hasher = TypeIdHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        TypeIdHasher::default()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::TypeIdHashState;
    use core::any::TypeId;
    use core::hash::BuildHasher;

    #[test]
    fn u64_passes_through() {
        assert_eq!(TypeIdHashState.hash_one(42_u64), 42);
    }

    #[test]
    fn distinct_types_hash_apart() {
        let a = TypeIdHashState.hash_one(TypeId::of::<&'static i32>());
        let b = TypeIdHashState.hash_one(TypeId::of::<Option<&'static i32>>());
        assert_ne!(a, b);
        assert_eq!(a, TypeIdHashState.hash_one(TypeId::of::<&'static i32>()));
    }

    #[test]
    fn bytes_are_folded() {
        let short = TypeIdHashState.hash_one([1_u8, 2, 3]);
        let long = TypeIdHashState.hash_one([1_u8, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_ne!(short, 0);
        assert_ne!(short, long);
    }
}
