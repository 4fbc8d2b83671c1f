use crate::error::{BloomGridError, Result};
use crate::hash::{
    DEFAULT_NUM_HASHES, HashFunction, MAX_NUM_HASHES, default_hash_function,
};
use derive_builder::Builder;

pub const NUM_HASHES_ENV: &str = "BLOOM_NUM_HASHES";

#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct BloomFilterConfig {
    /// Byte positions each item turns on, in `[1, 32]`
    #[builder(default = "DEFAULT_NUM_HASHES")]
    pub num_hashes: usize,

    /// Hash function to use
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self {
            num_hashes: DEFAULT_NUM_HASHES,
            hash_function: default_hash_function,
        }
    }
}

impl BloomFilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.num_hashes == 0 || self.num_hashes > MAX_NUM_HASHES {
            return Err(BloomGridError::InvalidNumHashes {
                num_hashes: self.num_hashes,
                max: MAX_NUM_HASHES,
            });
        }
        Ok(())
    }

    /// Read the hash count from `BLOOM_NUM_HASHES`, loading `.env` first if
    /// one exists. Unset means the default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let num_hashes = match std::env::var(NUM_HASHES_ENV) {
            Ok(value) => parse_num_hashes(&value)?,
            Err(_) => DEFAULT_NUM_HASHES,
        };

        let config = BloomFilterConfigBuilder::default()
            .num_hashes(num_hashes)
            .build()
            .map_err(|e| BloomGridError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_num_hashes(value: &str) -> Result<usize> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| BloomGridError::EnvParseError {
            var_name: NUM_HASHES_ENV.to_string(),
            value: value.to_string(),
            error: e.to_string(),
        })
}
