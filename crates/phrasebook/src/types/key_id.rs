use const_fnv1a_hash::fnv1a_hash_str_64;
use serde::{Deserialize, Serialize};

/// A compact, precomputable identifier for a message key.
///
/// `KeyId` wraps the 64-bit FNV-1a hash of the key string. Because
/// [`from_key`](Self::from_key) is a `const fn`, ids can be computed once at
/// build time and handed to [`Registry::resolve_id`], turning every table
/// scan into integer comparisons instead of string comparisons:
///
/// ```
/// use phrasebook::KeyId;
///
/// const DOG: KeyId = KeyId::from_key("dog");
/// assert_eq!(DOG, KeyId::from_key("dog"));
/// ```
///
/// The same key always hashes to the same id, so ids are stable across
/// builds and safe to serialize. Lookups that accept a `KeyId` still take
/// the key string: it guards against hash collisions and supplies the
/// verbatim fallback text.
///
/// [`Registry::resolve_id`]: crate::Registry::resolve_id
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct KeyId(u64);

impl KeyId {
    /// Hash a message key into its id. Usable in `const` context.
    pub const fn from_key(key: &str) -> Self {
        Self(fnv1a_hash_str_64(key))
    }

    /// The raw hash value.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for KeyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KeyId({:016x})", self.0)
    }
}
