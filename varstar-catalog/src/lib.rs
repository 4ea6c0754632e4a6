//! GCVS variable-star catalog lookup.
//!
//! Resolves variable-star designations (`"R Cyg"`, `"V0500 CYG"`) and
//! catalog numbers (`"GCVS 240012"`) against the 4th-edition GCVS flat file:
//! fixed 162-byte records, pipe-delimited fields, grouped by constellation.
//! A lookup binary-searches the constellation's slice of the file using the
//! catalog's own sort convention, falls back to a sequential scan for
//! convention-violating records, and parses the winning record into a
//! [`VariableStarTarget`](varstar_core::VariableStarTarget), following one
//! hop of alias redirection when the record is a cross-reference.
//!
//! # Quick Start
//!
//! ```ignore
//! use varstar_catalog::Gcvs4Catalog;
//!
//! let catalog = Gcvs4Catalog::new("/data/catalogs");
//! if let Some(target) = catalog.get_target("R Cyg")? {
//!     println!("{target}");
//! }
//! ```
//!
//! # Resource model
//!
//! Every lookup opens its own file handle and closes it before returning;
//! nothing is cached and no state is shared between calls. Lookups block on
//! I/O, so callers on an interactive thread should offload them.
//!
//! # Errors
//!
//! "Not in the catalog" and "catalog file unavailable" are both `Ok(None)`;
//! the latter is logged via `tracing`. Malformed numeric fields in a found
//! record surface as [`CatalogError`].
//!
//! # Features
//!
//! - **`cli`** — enables the `query-gcvs` binary.

pub mod errors;
pub mod lookup;

pub use errors::{CatalogError, CatalogResult};
pub use lookup::{ConstellationIndex, ConstellationRange, Gcvs4Catalog, RECORD_SIZE};
