//! Error type for catalog lookups.
//!
//! I/O failures on the *search* path are not errors at all: the searchers
//! log them and report a miss, so a missing or truncated data file behaves
//! like an absent star (see the crate docs). What does surface as
//! [`CatalogError`]:
//!
//! - [`Io`](CatalogError::Io) — failures outside the search loop, e.g. when
//!   a found record cannot be read back for parsing.
//! - [`MalformedField`](CatalogError::MalformedField) — a numeric column
//!   that contains non-blank, non-numeric text. These propagate to the
//!   caller rather than being swallowed.
//! - [`Core`](CatalogError::Core) — invalid domain values, e.g. a record
//!   whose position digits decode to an impossible coordinate.

use thiserror::Error;
use varstar_core::VarStarError;

/// Convenience alias for `Result<T, CatalogError>`.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O failure while reading a record for parsing.
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record column that should be numeric holds unparseable text.
    #[error("Malformed {field} field {value:?} in catalog record at line {line}")]
    MalformedField {
        field: &'static str,
        value: String,
        line: u64,
    },

    /// A parsed value violated a core-type invariant.
    #[error(transparent)]
    Core(#[from] VarStarError),
}

impl CatalogError {
    pub fn malformed_field(field: &'static str, value: impl Into<String>, line: u64) -> Self {
        Self::MalformedField {
            field,
            value: value.into(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_field_message() {
        let err = CatalogError::malformed_field("period", "33x.5", 12);
        assert_eq!(
            err.to_string(),
            "Malformed period field \"33x.5\" in catalog record at line 12"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CatalogError::from(io);
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn test_core_conversion_is_transparent() {
        let err = CatalogError::from(VarStarError::invalid_position("bad"));
        assert_eq!(err.to_string(), "Invalid position: bad");
    }
}
