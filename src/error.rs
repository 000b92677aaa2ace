//! Error types for geohash operations.

use std::fmt;
use thiserror::Error;

/// Why a bit depth was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitDepthFault {
    /// Not in `1..=MAX_BIT_DEPTH`.
    OutOfRange,
    /// Interleaving needs one longitude and one latitude bit per step.
    Odd,
}

impl fmt::Display for BitDepthFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitDepthFault::OutOfRange => write!(
                f,
                "must be greater than 0 and less than or equal to {}",
                crate::MAX_BIT_DEPTH
            ),
            BitDepthFault::Odd => write!(f, "must be even"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeohashError {
    #[error("bitDepth {reason}, was {bit_depth}")]
    InvalidBitDepth {
        bit_depth: i64,
        reason: BitDepthFault,
    },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeohashError {
    /// True for the bit-depth contract violation.
    pub fn is_invalid_bit_depth(&self) -> bool {
        matches!(self, GeohashError::InvalidBitDepth { .. })
    }
}

pub type Result<T> = std::result::Result<T, GeohashError>;
