//! Variable-star target types.
//!
//! [`VariableStarTarget`] is the output of a catalog lookup: one star, fully
//! parsed and normalized. It is built once per successful lookup and owned by
//! the caller; nothing in this crate keeps a reference to it afterwards.
//!
//! [`EquPosition`] stores an equatorial position in decimal degrees but is
//! constructed from the sexagesimal pieces a catalog record carries
//! ([`EquPosition::from_sexagesimal`]) and displays as HMS/DMS.

use std::fmt;

use crate::constellation::Constellation;
use crate::errors::{VarStarError, VarStarResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Equatorial position (ICRS-style RA/Dec), stored in decimal degrees.
///
/// Invariants: `ra_deg` in `[0, 360)`, `dec_deg` in `[-90, 90]`. Both
/// constructors validate; the fields are only readable through accessors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquPosition {
    ra_deg: f64,
    dec_deg: f64,
}

impl EquPosition {
    /// Creates a position from decimal degrees.
    pub fn new(ra_deg: f64, dec_deg: f64) -> VarStarResult<Self> {
        if !ra_deg.is_finite() || !(0.0..360.0).contains(&ra_deg) {
            return Err(VarStarError::invalid_position(format!(
                "RA {ra_deg} degrees out of range [0, 360)"
            )));
        }
        if !dec_deg.is_finite() || !(-90.0..=90.0).contains(&dec_deg) {
            return Err(VarStarError::invalid_position(format!(
                "Dec {dec_deg} degrees out of range [-90, 90]"
            )));
        }
        Ok(Self { ra_deg, dec_deg })
    }

    /// Creates a position from sexagesimal components as a catalog stores
    /// them: RA as hours/minutes/seconds, Dec as sign plus
    /// degrees/arcminutes/arcseconds.
    pub fn from_sexagesimal(
        ra_hours: u32,
        ra_minutes: u32,
        ra_seconds: f64,
        dec_negative: bool,
        dec_degrees: u32,
        dec_arcminutes: u32,
        dec_arcseconds: f64,
    ) -> VarStarResult<Self> {
        if ra_hours >= 24 || ra_minutes >= 60 || !(0.0..60.0).contains(&ra_seconds) {
            return Err(VarStarError::invalid_position(format!(
                "RA {ra_hours}h{ra_minutes}m{ra_seconds}s has a component out of range"
            )));
        }
        if dec_degrees > 90 || dec_arcminutes >= 60 || !(0.0..60.0).contains(&dec_arcseconds) {
            return Err(VarStarError::invalid_position(format!(
                "Dec {dec_degrees}d{dec_arcminutes}m{dec_arcseconds}s has a component out of range"
            )));
        }

        let ra_deg =
            15.0 * (ra_hours as f64 + ra_minutes as f64 / 60.0 + ra_seconds / 3600.0);
        let dec_abs =
            dec_degrees as f64 + dec_arcminutes as f64 / 60.0 + dec_arcseconds / 3600.0;
        let dec_deg = if dec_negative { -dec_abs } else { dec_abs };

        Self::new(ra_deg, dec_deg)
    }

    /// Right ascension in decimal degrees, `[0, 360)`.
    pub fn ra_deg(&self) -> f64 {
        self.ra_deg
    }

    /// Declination in decimal degrees, `[-90, 90]`.
    pub fn dec_deg(&self) -> f64 {
        self.dec_deg
    }

    /// Right ascension as (hours, minutes, seconds), seconds rounded to 0.1.
    pub fn ra_hms(&self) -> (u32, u32, f64) {
        // Work in tenths of a second so rounding can never display 60.0s.
        let total_tenths = (self.ra_deg / 15.0 * 36_000.0).round() as u64;
        let total_tenths = total_tenths % (24 * 36_000);
        let hours = (total_tenths / 36_000) as u32;
        let rem = total_tenths % 36_000;
        (hours, (rem / 600) as u32, (rem % 600) as f64 / 10.0)
    }

    /// Declination as (negative, degrees, arcminutes, arcseconds), seconds
    /// rounded to the nearest integer.
    pub fn dec_dms(&self) -> (bool, u32, u32, u32) {
        let total_arcsec = (self.dec_deg.abs() * 3600.0).round() as u64;
        let degrees = (total_arcsec / 3600) as u32;
        let rem = total_arcsec % 3600;
        (
            self.dec_deg.is_sign_negative(),
            degrees,
            (rem / 60) as u32,
            (rem % 60) as u32,
        )
    }
}

impl fmt::Display for EquPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s) = self.ra_hms();
        let (neg, d, am, asec) = self.dec_dms();
        let sign = if neg { '-' } else { '+' };
        write!(
            f,
            "{:02}h{:02}m{:04.1}s {}{:02}\u{b0}{:02}'{:02}\"",
            h, m, s, sign, d, am, asec
        )
    }
}

/// One variable star, as resolved by a catalog lookup.
///
/// Immutable after construction. Optional fields are absent when the catalog
/// record leaves the column blank, which is common for epoch and period.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VariableStarTarget {
    /// Primary designation, e.g. `"R CYG"` or `"V0500 CYG"`.
    pub designation: String,
    /// Constellation the star belongs to.
    pub constellation: Constellation,
    /// Equatorial position, when the record carries one.
    pub position: Option<EquPosition>,
    /// GCVS variability type code, e.g. `"M"` or `"EA/SD"`.
    pub variability_type: Option<String>,
    /// Apparent magnitude at maximum brightness (the smaller number).
    pub max_magnitude: Option<f64>,
    /// Apparent magnitude at minimum brightness.
    pub min_magnitude: Option<f64>,
    /// Epoch of maximum light, as JD − 2400000.
    pub epoch: Option<f64>,
    /// Period in days.
    pub period_days: Option<f64>,
    /// Spectral classification string.
    pub spectral_type: Option<String>,
    /// Other names for the same star, including the `"GCVS <number>"` form.
    pub aliases: Vec<String>,
}

impl fmt::Display for VariableStarTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Designation: {}", self.designation)?;
        write!(f, "Constellation: {}", self.constellation)?;
        if let Some(position) = &self.position {
            write!(f, "\nPosition: {}", position)?;
        }
        if let Some(var_type) = &self.variability_type {
            write!(f, "\nType: {}", var_type)?;
        }
        match (self.max_magnitude, self.min_magnitude) {
            (Some(max), Some(min)) => write!(f, "\nMagnitude: {:.1} - {:.1}", max, min)?,
            (Some(max), None) => write!(f, "\nMagnitude: {:.1}", max)?,
            (None, Some(min)) => write!(f, "\nMagnitude: down to {:.1}", min)?,
            (None, None) => {}
        }
        if let Some(epoch) = self.epoch {
            write!(f, "\nEpoch (JD-2400000): {:.4}", epoch)?;
        }
        if let Some(period) = self.period_days {
            write!(f, "\nPeriod: {} d", period)?;
        }
        if let Some(spectral) = &self.spectral_type {
            write!(f, "\nSpectral type: {}", spectral)?;
        }
        if !self.aliases.is_empty() {
            write!(f, "\nAliases: {}", self.aliases.join(", "))?;
        }
        Ok(())
    }
}
