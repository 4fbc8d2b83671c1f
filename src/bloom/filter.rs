use super::{
    BloomFilterConfig, BloomFilterConfigBuilder, BloomFilterOps,
    BloomFilterStats, BulkBloomFilterOps,
};
use crate::error::{BloomGridError, Result};
use crate::grid::ActiveCells;
use crate::sparse_hash::SparseHash;
use std::collections::BTreeSet;
use tracing::{debug, trace};

const CELL_COUNT: f64 = 256.0;

/// Union of the sparse hashes of every inserted item.
///
/// Elements are never removed. `num_hashes` and the hash function are fixed
/// at construction; querying a filter with a different hash count than the
/// one its items were inserted with is the caller's problem.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    config: BloomFilterConfig,
    elements: BTreeSet<u8>,
    insert_count: usize,
}

impl BloomFilter {
    pub fn new(num_hashes: usize) -> Result<Self> {
        let config = BloomFilterConfigBuilder::default()
            .num_hashes(num_hashes)
            .build()
            .map_err(|e| BloomGridError::InvalidConfig(e.to_string()))?;
        Self::with_config(config)
    }

    pub fn with_config(config: BloomFilterConfig) -> Result<Self> {
        config.validate()?;
        debug!(num_hashes = config.num_hashes, "created bloom filter");
        Ok(Self {
            config,
            elements: BTreeSet::new(),
            insert_count: 0,
        })
    }

    /// Build a filter holding exactly `items`.
    pub fn from_items<I, S>(config: BloomFilterConfig, items: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::with_config(config)?;
        filter.insert_all(items)?;
        Ok(filter)
    }

    pub fn config(&self) -> &BloomFilterConfig {
        &self.config
    }

    pub fn elements(&self) -> &BTreeSet<u8> {
        &self.elements
    }

    /// Copy of the current elements.
    pub fn as_sparse_hash(&self) -> SparseHash {
        SparseHash::from(self.elements.clone())
    }

    /// The item's own positions under this filter's hash scheme, as drawn on
    /// its item card.
    pub fn item_hash(&self, item: &str) -> Result<SparseHash> {
        (self.config.hash_function)(item, self.config.num_hashes)
    }

    pub fn item_hash_bytes(&self, item: &[u8]) -> Result<SparseHash> {
        self.item_hash(std::str::from_utf8(item)?)
    }

    pub fn insert_bytes(&mut self, item: &[u8]) -> Result<()> {
        self.insert(std::str::from_utf8(item)?)
    }

    pub fn contains_bytes(&self, item: &[u8]) -> Result<bool> {
        self.contains(std::str::from_utf8(item)?)
    }
}

impl BloomFilterOps for BloomFilter {
    fn insert(&mut self, item: &str) -> Result<()> {
        let hash = self.item_hash(item)?;
        let before = self.elements.len();
        self.elements.extend(hash.iter());
        self.insert_count += 1;

        debug!(
            item,
            new_cells = self.elements.len() - before,
            active_cells = self.elements.len(),
            "inserted item"
        );
        Ok(())
    }

    fn contains(&self, item: &str) -> Result<bool> {
        let candidate = self.item_hash(item)?;
        let found = candidate.is_subset_of_set(&self.elements);
        trace!(item, found, "queried item");
        Ok(found)
    }
}

impl BulkBloomFilterOps for BloomFilter {
    fn insert_all<I, S>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in items {
            self.insert(item.as_ref())?;
        }
        Ok(())
    }

    fn contains_all<I, S>(&self, items: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        items
            .into_iter()
            .map(|item| self.contains(item.as_ref()))
            .collect()
    }
}

impl BloomFilterStats for BloomFilter {
    fn num_hashes(&self) -> usize {
        self.config.num_hashes
    }

    fn insert_count(&self) -> usize {
        self.insert_count
    }

    fn active_cells(&self) -> usize {
        self.elements.len()
    }

    fn fill_ratio(&self) -> f64 {
        self.elements.len() as f64 / CELL_COUNT
    }
}

impl ActiveCells for BloomFilter {
    fn is_active_byte(&self, byte: u8) -> bool {
        self.elements.contains(&byte)
    }
}
