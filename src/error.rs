use thiserror::Error;

pub type Result<T> = std::result::Result<T, BloomGridError>;

#[derive(Error, Debug, PartialEq)]
pub enum BloomGridError {
    #[error("Item is not valid UTF-8: {0}")]
    EncodingError(String),

    #[error("Number of hashes must be between 1 and {max}, got {num_hashes}")]
    InvalidNumHashes { num_hashes: usize, max: usize },

    #[error("Coordinate ({x}, {y}) is outside the {size}x{size} grid")]
    CoordinateOutOfRange { x: u8, y: u8, size: u8 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(
        "Failed to parse environment variable {var_name}: value '{value}' - {error}"
    )]
    EnvParseError {
        var_name: String,
        value: String,
        error: String,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl BloomGridError {
    /// True for the argument errors: a hash count or a grid coordinate
    /// out of range.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            BloomGridError::InvalidNumHashes { .. }
                | BloomGridError::CoordinateOutOfRange { .. }
        )
    }
}

impl From<std::str::Utf8Error> for BloomGridError {
    fn from(err: std::str::Utf8Error) -> Self {
        BloomGridError::EncodingError(err.to_string())
    }
}

impl From<serde_json::Error> for BloomGridError {
    fn from(err: serde_json::Error) -> Self {
        BloomGridError::SerializationError(err.to_string())
    }
}
