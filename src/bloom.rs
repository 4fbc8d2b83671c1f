//! Toy Bloom filter: a set of byte values grown by union, queried by subset.
pub mod config;
pub mod filter;
pub mod traits;

pub use config::{BloomFilterConfig, BloomFilterConfigBuilder};
pub use filter::BloomFilter;
pub use traits::{BloomFilterOps, BloomFilterStats, BulkBloomFilterOps};
