//! Core domain types for variable-star catalog work.
//!
//! `varstar-core` holds the types shared by anything that consumes a
//! variable-star lookup: the 88-constellation table, equatorial positions,
//! and the [`VariableStarTarget`] record a lookup produces. It does no I/O;
//! the catalog engine lives in `varstar-catalog`.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`constellation`] | [`Constellation`] enum, catalog ordering, name/abbreviation resolution |
//! | [`target`] | [`EquPosition`], [`VariableStarTarget`] |
//! | [`errors`] | [`VarStarError`] and [`VarStarResult`] |
//!
//! # Features
//!
//! - **`serde`** — `Serialize`/`Deserialize` derives on the public types.

pub mod constellation;
pub mod errors;
pub mod target;

pub use constellation::{Constellation, ALL_CONSTELLATIONS};
pub use errors::{VarStarError, VarStarResult};
pub use target::{EquPosition, VariableStarTarget};
