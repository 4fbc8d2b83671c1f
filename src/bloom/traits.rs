use crate::error::Result;

pub trait BloomFilterOps {
    fn insert(&mut self, item: &str) -> Result<()>;
    fn contains(&self, item: &str) -> Result<bool>;
}

pub trait BulkBloomFilterOps {
    fn insert_all<I, S>(&mut self, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    fn contains_all<I, S>(&self, items: I) -> Result<Vec<bool>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}

pub trait BloomFilterStats {
    fn num_hashes(&self) -> usize;
    fn insert_count(&self) -> usize;
    /// Distinct bytes currently set.
    fn active_cells(&self) -> usize;
    /// Share of the 256 grid cells that are set.
    fn fill_ratio(&self) -> f64;
}
