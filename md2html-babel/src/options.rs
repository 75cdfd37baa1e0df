//! Conversion options

use crate::inline::HashEncoding;

/// Knobs accepted by [`crate::convert`] and [`crate::transduce`].
///
/// Every field only affects documents that use the corresponding syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Byte encoding applied to `[[...]]` contents before hashing
    pub hash_encoding: HashEncoding,
}

impl ConvertOptions {
    pub fn new(hash_encoding: HashEncoding) -> Self {
        Self { hash_encoding }
    }
}
