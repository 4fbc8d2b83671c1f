//! Toy Bloom filter laid out on a 16x16 grid, for printing physical models.
//!
//! HowTo:
//!    * Hashing: each item is hashed once with SHA-256 and the first
//!      `num_hashes` bytes of the digest are taken as its positions.
//!      Duplicate bytes collapse, so an item turns on at most `num_hashes`
//!      positions.
//!    * Grid: a byte is drawn at column `x = high nibble`, row `y = low nibble`.
//!
//! Insertion:
//!     * The item's positions are unioned into the filter. Nothing is ever
//!       removed.
//! Query:
//!     * An item is "maybe present" when all of its positions are already in
//!       the filter. Inserted items are always found; other items can be
//!       false positives.
//! Rendering:
//!     * A [`CategoryPlan`] holds one filter card for the category and one
//!       item card per member. Turning cards into geometry is left to the
//!       caller.
//!
//! Obvious problems:
//!     * There are only 256 positions, so a filter saturates after a couple
//!       dozen items at the default hash count.
//!     * Querying with a different `num_hashes` than the one used for
//!       insertion gives meaningless answers and is not detected.

pub mod bloom;
pub mod card;
mod error;
pub mod grid;
mod hash;
mod sparse_hash;

pub use bloom::{
    BloomFilter, BloomFilterConfig, BloomFilterConfigBuilder, BloomFilterOps,
    BloomFilterStats, BulkBloomFilterOps,
};
pub use card::{
    Card, CardKind, Category, CategoryPlan, PlanConfig, PlanConfigBuilder,
};
pub use error::{BloomGridError, Result};
pub use grid::{
    ActiveCells, GRID_SIZE, GridCoordinate, all_cells, byte_for_coordinate,
    coordinates_from_byte,
};
pub use hash::{
    DEFAULT_NUM_HASHES, HashDigest, HashFunction, MAX_NUM_HASHES,
    default_hash_function, digest, digest_bytes, sparse_hash, sparse_hash_bytes,
    validate_num_hashes,
};
pub use sparse_hash::SparseHash;
