//! Record tokenization and field parsing.
//!
//! A catalog record is pipe-delimited inside its fixed 162-byte frame. The
//! 13 fields, in order: catalog number, designation, position, variability
//! type, max magnitude, min magnitude, epoch, year, period, light-curve
//! shape, spectral type, references, other designations.
//!
//! Parsing policy (see `DESIGN.md`): blank numeric columns are absent
//! values; non-blank text that fails to parse is a
//! [`CatalogError::MalformedField`] and propagates. Magnitude, epoch and
//! period columns may carry the uncertainty markers `: < > ( )`, which are
//! stripped before parsing. `f64` parsing is locale-independent.

use varstar_core::EquPosition;

use crate::errors::{CatalogError, CatalogResult};

/// The fields of one record consumed by target construction, trimmed but
/// otherwise raw. Tokenization still walks all 13 columns in order; the
/// discovery-year, light-curve-shape and references columns are skipped.
#[derive(Debug, Clone, Default)]
pub(crate) struct RawRecord {
    pub number: String,
    pub designation: String,
    pub position: String,
    pub variability_type: String,
    pub mag_max: String,
    pub mag_min: String,
    pub epoch: String,
    pub period: String,
    pub spectral_type: String,
    pub other_designations: String,
}

impl RawRecord {
    /// Tokenizes one record line. Missing trailing fields come out empty.
    pub fn parse(line: &str) -> Self {
        let mut fields = line.split('|').map(str::trim);
        let mut next = || fields.next().unwrap_or("").to_string();

        let number = next();
        let designation = next();
        let position = next();
        let variability_type = next();
        let mag_max = next();
        let mag_min = next();
        let epoch = next();
        let _year = next();
        let period = next();
        let _lightcurve_shape = next();
        let spectral_type = next();
        let _references = next();
        let other_designations = next();

        Self {
            number,
            designation,
            position,
            variability_type,
            mag_max,
            mag_min,
            epoch,
            period,
            spectral_type,
            other_designations,
        }
    }
}

/// Decomposes the packed position column, `HHMMSS.S±DDMMSS`.
///
/// A blank column is an absent position (which is what triggers alias
/// redirection upstream). Anything non-blank must decompose exactly.
pub(crate) fn parse_position(field: &str, line: u64) -> CatalogResult<Option<EquPosition>> {
    let s = field.trim();
    if s.is_empty() {
        return Ok(None);
    }

    let malformed = || CatalogError::malformed_field("position", s, line);

    let ra_hours = substring(s, 0, 2).ok_or_else(malformed)?;
    let ra_minutes = substring(s, 2, 4).ok_or_else(malformed)?;
    let ra_seconds = substring(s, 4, 8).ok_or_else(malformed)?;
    let sign = substring(s, 8, 9).ok_or_else(malformed)?;
    let dec_degrees = substring(s, 9, 11).ok_or_else(malformed)?;
    let dec_arcminutes = substring(s, 11, 13).ok_or_else(malformed)?;
    let dec_arcseconds = substring(s, 13, 15).ok_or_else(malformed)?;

    let dec_negative = match sign {
        "+" => false,
        "-" => true,
        _ => return Err(malformed()),
    };

    let position = EquPosition::from_sexagesimal(
        ra_hours.parse().map_err(|_| malformed())?,
        ra_minutes.parse().map_err(|_| malformed())?,
        ra_seconds.trim().parse().map_err(|_| malformed())?,
        dec_negative,
        dec_degrees.parse().map_err(|_| malformed())?,
        dec_arcminutes.parse().map_err(|_| malformed())?,
        dec_arcseconds.trim().parse().map_err(|_| malformed())?,
    )?;
    Ok(Some(position))
}

/// Strips the uncertainty markers `: < > ( )` from a numeric column and
/// parses what remains. Blank means absent; unparseable means malformed.
pub(crate) fn parse_numeric(
    field: &str,
    name: &'static str,
    line: u64,
) -> CatalogResult<Option<f64>> {
    let cleaned: String = field
        .chars()
        .filter(|c| !matches!(c, ':' | '<' | '>' | '(' | ')'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Ok(None);
    }
    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CatalogError::malformed_field(name, field.trim(), line))
}

fn substring(s: &str, start: usize, end: usize) -> Option<&str> {
    s.get(start..end)
}
