use crate::error::{BloomGridError, Result};
use crate::sparse_hash::SparseHash;
use sha2::{Digest, Sha256};
use std::fmt;
use tracing::trace;

/// Bytes in one SHA-256 digest, and so the largest usable hash count.
pub const MAX_NUM_HASHES: usize = 32;

/// Hash count used by the physical models when nothing else is configured.
pub const DEFAULT_NUM_HASHES: usize = 10;

/// A type alias for the hash function used by the Bloom filter.
///
/// **Parameters:**
///
/// - `item: &str`
///   - The item to be hashed.
/// - `num_hashes: usize`
///   - How many byte positions the item should turn on, in `[1, 32]`.
///
/// **Returns:**
///
/// - `Result<SparseHash>`
///   - The distinct byte values for the item. Duplicate bytes collapse, so
///     the set may hold fewer than `num_hashes` values.
///
/// **Usage:**
///
/// Every filter instance keeps one hash function for its whole lifetime;
/// inserting with one function and querying with another gives meaningless
/// answers.
pub type HashFunction = fn(&str, usize) -> Result<SparseHash>;

/// SHA-256 digest of a UTF-8 string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashDigest([u8; 32]);

impl HashDigest {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashDigest({self})")
    }
}

pub fn digest(input: &str) -> HashDigest {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&hasher.finalize());
    HashDigest(bytes)
}

/// Digest raw item bytes, rejecting anything that is not UTF-8.
pub fn digest_bytes(input: &[u8]) -> Result<HashDigest> {
    let text = std::str::from_utf8(input)?;
    Ok(digest(text))
}

pub fn validate_num_hashes(num_hashes: usize) -> Result<usize> {
    if num_hashes == 0 || num_hashes > MAX_NUM_HASHES {
        return Err(BloomGridError::InvalidNumHashes {
            num_hashes,
            max: MAX_NUM_HASHES,
        });
    }
    Ok(num_hashes)
}

/// Take the first `num_hashes` bytes of the item's digest as its positions.
///
/// Each byte of a good digest is uniformly distributed, so every byte
/// position stands in for an independent hash function and one digest
/// serves all of them.
pub fn sparse_hash(input: &str, num_hashes: usize) -> Result<SparseHash> {
    let num_hashes = validate_num_hashes(num_hashes)?;
    let digest = digest(input);
    let hash: SparseHash =
        digest.as_bytes()[..num_hashes].iter().copied().collect();
    trace!(
        item = input,
        num_hashes,
        distinct = hash.len(),
        "computed sparse hash"
    );
    Ok(hash)
}

pub fn sparse_hash_bytes(input: &[u8], num_hashes: usize) -> Result<SparseHash> {
    let text = std::str::from_utf8(input)?;
    sparse_hash(text, num_hashes)
}

pub fn default_hash_function(item: &str, num_hashes: usize) -> Result<SparseHash> {
    sparse_hash(item, num_hashes)
}
