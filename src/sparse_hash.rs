use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The grid positions one item turns on.
///
/// Always built fresh for each call; two hashes of the same item with the
/// same hash count are equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseHash {
    bytes: BTreeSet<u8>,
}

impl SparseHash {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.bytes.contains(&byte)
    }

    /// Bytes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.bytes.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.iter().collect()
    }

    pub fn as_set(&self) -> &BTreeSet<u8> {
        &self.bytes
    }

    pub fn is_subset_of(&self, other: &SparseHash) -> bool {
        self.bytes.is_subset(&other.bytes)
    }

    pub fn is_subset_of_set(&self, set: &BTreeSet<u8>) -> bool {
        self.bytes.is_subset(set)
    }
}

impl FromIterator<u8> for SparseHash {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self {
            bytes: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeSet<u8>> for SparseHash {
    fn from(bytes: BTreeSet<u8>) -> Self {
        Self { bytes }
    }
}
