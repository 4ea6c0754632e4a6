//! Binary and sequential search over the record file.
//!
//! Both searchers compare with [`designation_cmp`], so they agree with the
//! data file's ordering convention. The binary search is the fast path
//! (`O(log n)` probes, one seek and one fixed-length read each); the
//! sequential scan exists because a few records violate the convention and
//! can only be found linearly.
//!
//! I/O failures in here are logged and reported as a miss. Callers cannot
//! distinguish "catalog unavailable" from "star not in catalog".

use std::cmp::Ordering;

use tracing::warn;

use super::file::RecordFile;
use super::index::ConstellationRange;
use super::order::{collapse_whitespace, designation_cmp};

/// Which fixed-width column a search probe compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchField {
    /// Zero-padded catalog number, bytes 0..6 of each record.
    CatalogNumber,
    /// Designation name, bytes 8..17 of each record.
    Designation,
}

impl SearchField {
    fn offset(self) -> u64 {
        match self {
            Self::CatalogNumber => 0,
            Self::Designation => 8,
        }
    }

    fn len(self) -> usize {
        match self {
            Self::CatalogNumber => 6,
            Self::Designation => 9,
        }
    }
}

/// Binary search for `key` within `range`, probing one column per step.
///
/// Returns the matching line, or `None` when the key is absent or a probe
/// fails. Termination mirrors the interval arithmetic: the search gives up
/// when the middle pins against either bound without matching.
pub(crate) fn binary_search(
    file: &mut RecordFile,
    range: ConstellationRange,
    key: &str,
    field: SearchField,
) -> Option<u64> {
    if range.is_empty() {
        return None;
    }

    let mut low = range.start;
    let mut high = range.end;
    loop {
        let middle = low + (high - low) / 2;
        let value = match file.read_field(middle, field.offset(), field.len()) {
            Ok(raw) => collapse_whitespace(&raw),
            Err(err) => {
                warn!(line = middle, error = %err, "record read failed during binary search");
                return None;
            }
        };

        match designation_cmp(key, &value) {
            Ordering::Equal => return Some(middle),
            Ordering::Less => {
                if high == middle {
                    return None;
                }
                high = middle;
            }
            Ordering::Greater => {
                if low == middle {
                    return None;
                }
                low = middle;
            }
        }
    }
}

/// Linear fallback scan over the designation column.
///
/// Walks from the last line of `range` down to the first, skipping lines
/// with a blank name, and returns the first exact match. `O(n)`; only
/// invoked after a binary-search miss.
pub(crate) fn sequential_search(
    file: &mut RecordFile,
    range: ConstellationRange,
    key: &str,
) -> Option<u64> {
    let field = SearchField::Designation;
    let mut line = range.end;
    while line > range.start {
        line -= 1;
        let value = match file.read_field(line, field.offset(), field.len()) {
            Ok(raw) => collapse_whitespace(&raw),
            Err(err) => {
                warn!(line, error = %err, "record read failed during sequential search");
                return None;
            }
        };
        if value.is_empty() {
            continue;
        }
        if designation_cmp(key, &value) == Ordering::Equal {
            return Some(line);
        }
    }
    None
}
