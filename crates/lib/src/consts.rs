//! Protocol and naming constants.

/// Annotation holding the fingerprint of the last applied desired object.
///
/// Objects built by callers must not use this key for anything else.
pub const LAST_APPLIED_HASH_ANNOTATION: &str = "nvidia.com/last-applied-hash";

/// Field that lists of mappings are sorted by during canonicalization.
pub const NAME_FIELD: &str = "name";

/// Alphabet used by [`crate::util::hash::name_hash`]. Vowels and look-alike
/// digits are left out so encoded strings never spell words.
pub const NAME_SAFE_ALPHABET: &[u8] = b"bcdfghjklmnpqrstvwxz2456789";
