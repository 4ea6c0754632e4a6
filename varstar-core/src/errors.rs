//! Error types for variable-star domain values.
//!
//! [`VarStarError`] covers failures constructing or resolving the core types:
//! positions with out-of-range components and constellation tokens that match
//! neither an IAU abbreviation nor a Latin name. Catalog-level failures
//! (I/O, malformed records) live in the `varstar-catalog` crate, which wraps
//! this type.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convenience alias for `Result<T, VarStarError>`.
pub type VarStarResult<T> = Result<T, VarStarError>;

#[derive(Debug, Error)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VarStarError {
    /// Equatorial position component outside its valid range.
    #[error("Invalid position: {message}")]
    InvalidPosition { message: String },

    /// String that resolves to no known constellation.
    #[error("Unknown constellation: {token:?}")]
    UnknownConstellation { token: String },
}

impl VarStarError {
    pub fn invalid_position(message: impl Into<String>) -> Self {
        Self::InvalidPosition {
            message: message.into(),
        }
    }

    pub fn unknown_constellation(token: impl Into<String>) -> Self {
        Self::UnknownConstellation {
            token: token.into(),
        }
    }
}
