//! The GCVS catalog engine: lookup dispatch and target construction.
//!
//! [`Gcvs4Catalog`] is a thin value: a data-file path plus a constellation
//! index. Every lookup opens its own file handle, runs to completion, and
//! closes it. No state is shared between calls; the only care a caller owes
//! is keeping the blocking I/O off latency-sensitive threads.
//!
//! Lookup dispatch ([`Gcvs4Catalog::get_target`]):
//!
//! 1. Normalize the query (collapse whitespace, upper-case).
//! 2. Queries starting with `"GCVS"` or a digit are catalog-number lookups:
//!    strip the prefix, zero-pad to the 6-byte number column, binary-search
//!    the whole file.
//! 3. Anything else is a name lookup. The trailing token must resolve to a
//!    constellation or the query misses immediately; the constellation
//!    picks the line range, binary search runs first, and a sequential
//!    scan of the same range covers convention-violating records.
//! 4. The found line is parsed into a [`VariableStarTarget`], following at
//!    most one alias redirection.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use varstar_core::{Constellation, VariableStarTarget};

use crate::errors::CatalogResult;

use super::file::RecordFile;
use super::index::{ConstellationIndex, ConstellationRange};
use super::order::collapse_whitespace;
use super::record::{self, RawRecord};
use super::search::{binary_search, sequential_search, SearchField};

/// Catalog abbreviation accepted as a query prefix and used in aliases.
pub const CATALOG_ABBREVIATION: &str = "GCVS";

/// Variable-star lookups over a GCVS 4th-edition data file.
#[derive(Debug, Clone)]
pub struct Gcvs4Catalog {
    data_path: PathBuf,
    index: ConstellationIndex,
}

impl Gcvs4Catalog {
    /// Creates an engine over `<catalog_dir>/variableStars/gcvs4.dat` with
    /// the standard GCVS index.
    pub fn new(catalog_dir: impl AsRef<Path>) -> Self {
        let data_path = catalog_dir
            .as_ref()
            .join("variableStars")
            .join("gcvs4.dat");
        Self::with_index(data_path, ConstellationIndex::gcvs4())
    }

    /// Creates an engine over an explicit data file with the standard index.
    pub fn from_data_file(data_path: impl AsRef<Path>) -> Self {
        Self::with_index(data_path, ConstellationIndex::gcvs4())
    }

    /// Creates an engine with a custom constellation index, for subset
    /// files and fixtures whose layout differs from the published catalog.
    pub fn with_index(data_path: impl AsRef<Path>, index: ConstellationIndex) -> Self {
        Self {
            data_path: data_path.as_ref().to_path_buf(),
            index,
        }
    }

    /// Path of the data file this engine reads.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// The constellation index in use.
    pub fn index(&self) -> &ConstellationIndex {
        &self.index
    }

    /// Number of complete records in the data file.
    pub fn record_count(&self) -> CatalogResult<u64> {
        Ok(RecordFile::open(&self.data_path)?.record_count())
    }

    /// Looks up a variable star by designation or catalog number.
    ///
    /// Returns `Ok(None)` when the star is not in the catalog, and also
    /// when the data file is missing or unreadable; the latter is logged
    /// but not distinguishable from a miss. Malformed numeric fields in a
    /// found record are the one condition that surfaces as an error.
    pub fn get_target(&self, object_name: &str) -> CatalogResult<Option<VariableStarTarget>> {
        let normalized = collapse_whitespace(object_name).to_uppercase();
        if normalized.is_empty() {
            return Ok(None);
        }

        let mut file = match RecordFile::open(&self.data_path) {
            Ok(file) => file,
            Err(err) => {
                warn!(
                    path = %self.data_path.display(),
                    error = %err,
                    "catalog data file unavailable"
                );
                return Ok(None);
            }
        };

        let line = if let Some(key) = catalog_number_key(&normalized) {
            debug!(key = %key, "catalog-number lookup");
            let range = ConstellationRange::new(0, file.record_count());
            binary_search(&mut file, range, &key, SearchField::CatalogNumber)
        } else {
            debug!(designation = %normalized, "name lookup");
            self.search_by_name(&mut file, &normalized)
        };

        match line {
            Some(line) => self.build_target(&mut file, line, true),
            None => Ok(None),
        }
    }

    /// Resolves a designation to a line number: constellation range, binary
    /// search, then the sequential fallback. `None` when the trailing token
    /// is not a constellation; the catalog cannot be searched without one.
    fn search_by_name(&self, file: &mut RecordFile, designation: &str) -> Option<u64> {
        let (name_part, constellation_token) = designation.rsplit_once(' ')?;
        let constellation = Constellation::resolve(constellation_token)?;
        let range = self
            .index
            .range_of(constellation)?
            .clamped_to(file.record_count());

        // The stored name column uses the IAU abbreviation, upper-cased.
        let key = format!(
            "{} {}",
            name_part,
            constellation.abbreviation().to_ascii_uppercase()
        );

        binary_search(file, range, &key, SearchField::Designation)
            .or_else(|| sequential_search(file, range, &key))
    }

    /// Reads and parses the record at `line` into a target.
    ///
    /// `follow_alias` permits one hop of alias redirection: a record with
    /// no position whose other-designations column names another catalog
    /// entry is a pointer to it, and the pointed-to record supplies the
    /// target's data.
    fn build_target(
        &self,
        file: &mut RecordFile,
        line: u64,
        follow_alias: bool,
    ) -> CatalogResult<Option<VariableStarTarget>> {
        let text = match file.read_record(line) {
            Ok(text) => text,
            Err(err) => {
                warn!(line, error = %err, "failed to read record for parsing");
                return Ok(None);
            }
        };
        let raw = RawRecord::parse(&text);

        let designation = collapse_whitespace(&raw.designation);
        let Some(constellation) = designation
            .rsplit_once(' ')
            .and_then(|(_, token)| Constellation::resolve(token))
        else {
            warn!(line, designation = %designation, "record has no resolvable constellation");
            return Ok(None);
        };

        let position = record::parse_position(&raw.position, line)?;
        let max_magnitude = record::parse_numeric(&raw.mag_max, "max magnitude", line)?;
        let min_magnitude = record::parse_numeric(&raw.mag_min, "min magnitude", line)?;
        let epoch = record::parse_numeric(&raw.epoch, "epoch", line)?;
        let period_days = record::parse_numeric(&raw.period, "period", line)?;

        if follow_alias && position.is_none() && is_redirect(&raw.other_designations) {
            let pointer = collapse_whitespace(&raw.other_designations).to_uppercase();
            debug!(from = %designation, to = %pointer, "following alias redirection");
            if let Some(redirected_line) = self.search_by_name(file, &pointer) {
                if redirected_line != line {
                    if let Some(mut target) = self.build_target(file, redirected_line, false)? {
                        for alias in [pointer, designation] {
                            if !target.aliases.contains(&alias) {
                                target.aliases.push(alias);
                            }
                        }
                        return Ok(Some(target));
                    }
                }
            }
        }

        let mut aliases = vec![format!("{} {}", CATALOG_ABBREVIATION, raw.number)];
        if !raw.other_designations.is_empty() {
            aliases.push(collapse_whitespace(&raw.other_designations));
        }

        Ok(Some(VariableStarTarget {
            designation,
            constellation,
            position,
            variability_type: none_if_empty(&raw.variability_type),
            max_magnitude,
            min_magnitude,
            epoch,
            period_days,
            spectral_type: none_if_empty(&raw.spectral_type),
            aliases,
        }))
    }
}

/// Extracts the zero-padded number-column key from a catalog-number query,
/// or `None` when the query is a designation.
fn catalog_number_key(normalized: &str) -> Option<String> {
    let rest = if let Some(stripped) = normalized.strip_prefix(CATALOG_ABBREVIATION) {
        stripped.trim_start()
    } else if normalized.starts_with(|c: char| c.is_ascii_digit()) {
        normalized
    } else {
        return None;
    };
    if rest.is_empty() {
        return None;
    }
    Some(format!("{rest:0>6}"))
}

/// A non-empty other-designations value counts as a redirect pointer unless
/// it names a `HIP` entry or leads with a digit.
fn is_redirect(other_designations: &str) -> bool {
    let other = other_designations.trim();
    !other.is_empty()
        && !other.to_ascii_uppercase().starts_with("HIP")
        && !other.starts_with(|c: char| c.is_ascii_digit())
}

fn none_if_empty(field: &str) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::fixtures::{named, write_fixture, FixtureRecord};

    fn cygnus_index(record_count: u64) -> ConstellationIndex {
        ConstellationIndex::new(vec![(
            Constellation::Cygnus,
            ConstellationRange::new(0, record_count),
        )])
    }

    fn sample_lines() -> Vec<String> {
        vec![
            FixtureRecord {
                number: "240001",
                designation: "R CYG",
                position: "193649.4+501159",
                var_type: "M",
                mag_max: "6.1",
                mag_min: "14.4",
                epoch: "44456.",
                year: "1852",
                period: "426.45",
                spectral: "S2.5,9e-S6,9e(Tc)",
                other: "HD 185456",
                ..Default::default()
            }
            .line(),
            FixtureRecord {
                number: "240002",
                designation: "SS CYG",
                position: "213442.8+433507",
                var_type: "UGSS",
                mag_max: "7.7",
                mag_min: "12.4",
                period: "0.2751300",
                ..Default::default()
            }
            .line(),
            named("240003", "AA CYG"),
        ]
    }

    #[test]
    fn test_get_target_by_name() {
        let fixture = write_fixture(&sample_lines());
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(3));

        let target = catalog.get_target("R Cyg").unwrap().unwrap();
        assert_eq!(target.designation, "R CYG");
        assert_eq!(target.constellation, Constellation::Cygnus);
        assert_eq!(target.max_magnitude, Some(6.1));
        assert_eq!(target.min_magnitude, Some(14.4));
        assert_eq!(target.period_days, Some(426.45));
        assert_eq!(target.spectral_type.as_deref(), Some("S2.5,9e-S6,9e(Tc)"));
        assert!(target.aliases.contains(&"GCVS 240001".to_string()));
        assert!(target.aliases.contains(&"HD 185456".to_string()));
    }

    #[test]
    fn test_get_target_accepts_latin_constellation_name() {
        let fixture = write_fixture(&sample_lines());
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(3));

        let target = catalog.get_target("ss cygnus").unwrap().unwrap();
        assert_eq!(target.designation, "SS CYG");
        assert_eq!(target.variability_type.as_deref(), Some("UGSS"));
    }

    #[test]
    fn test_get_target_by_catalog_number() {
        let fixture = write_fixture(&sample_lines());
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(3));

        let by_number = catalog.get_target("GCVS 240002").unwrap().unwrap();
        assert_eq!(by_number.designation, "SS CYG");

        let bare_digits = catalog.get_target("240002").unwrap().unwrap();
        assert_eq!(bare_digits, by_number);
    }

    #[test]
    fn test_get_target_zero_pads_short_numbers() {
        let lines = vec![named("000007", "T CYG")];
        let fixture = write_fixture(&lines);
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(1));

        let target = catalog.get_target("GCVS 7").unwrap().unwrap();
        assert_eq!(target.designation, "T CYG");
    }

    #[test]
    fn test_get_target_unknown_name_is_none() {
        let fixture = write_fixture(&sample_lines());
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(3));

        assert_eq!(catalog.get_target("ZZ CYG").unwrap(), None);
    }

    #[test]
    fn test_get_target_without_constellation_is_none() {
        let fixture = write_fixture(&sample_lines());
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(3));

        // No trailing constellation token: immediate miss, not an error.
        assert_eq!(catalog.get_target("RCYG").unwrap(), None);
        assert_eq!(catalog.get_target("R NOPE").unwrap(), None);
        assert_eq!(catalog.get_target("").unwrap(), None);
    }

    #[test]
    fn test_get_target_missing_file_is_none() {
        let catalog = Gcvs4Catalog::with_index("/nonexistent/gcvs4.dat", cygnus_index(3));
        assert_eq!(catalog.get_target("R CYG").unwrap(), None);
        // Idempotent: a second call behaves identically.
        assert_eq!(catalog.get_target("R CYG").unwrap(), None);
    }

    #[test]
    fn test_malformed_period_propagates() {
        let lines = vec![FixtureRecord {
            number: "240001",
            designation: "R CYG",
            position: "193649.4+501159",
            period: "42x.0",
            ..Default::default()
        }
        .line()];
        let fixture = write_fixture(&lines);
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(1));

        let err = catalog.get_target("R CYG").unwrap_err();
        assert!(err.to_string().contains("period"));
    }

    #[test]
    fn test_alias_redirection_one_hop() {
        let lines = vec![
            FixtureRecord {
                number: "240001",
                designation: "V0821 CYG",
                position: "203041.9+381427",
                var_type: "M",
                mag_max: "9.1",
                mag_min: "13.8",
                period: "331.5",
                ..Default::default()
            }
            .line(),
            // No position, pointer in the other-designations column.
            FixtureRecord {
                number: "240044",
                designation: "VV CYG",
                other: "V0821 Cyg",
                ..Default::default()
            }
            .line(),
        ];
        let fixture = write_fixture(&lines);
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(2));

        let direct = catalog.get_target("V0821 CYG").unwrap().unwrap();
        let redirected = catalog.get_target("VV CYG").unwrap().unwrap();

        assert_eq!(redirected.designation, "V0821 CYG");
        assert_eq!(redirected.position, direct.position);
        assert_eq!(redirected.max_magnitude, direct.max_magnitude);
        assert_eq!(redirected.period_days, direct.period_days);
        assert!(redirected.aliases.contains(&"VV CYG".to_string()));
        assert!(redirected.aliases.contains(&"V0821 CYG".to_string()));
    }

    #[test]
    fn test_hip_cross_reference_is_not_a_redirect() {
        let lines = vec![FixtureRecord {
            number: "240050",
            designation: "WW CYG",
            other: "HIP 98765",
            ..Default::default()
        }
        .line()];
        let fixture = write_fixture(&lines);
        let catalog = Gcvs4Catalog::with_index(fixture.path(), cygnus_index(1));

        let target = catalog.get_target("WW CYG").unwrap().unwrap();
        assert_eq!(target.designation, "WW CYG");
        assert_eq!(target.position, None);
        assert!(target.aliases.contains(&"HIP 98765".to_string()));
    }

    #[test]
    fn test_catalog_number_key_forms() {
        assert_eq!(catalog_number_key("GCVS 240012").as_deref(), Some("240012"));
        assert_eq!(catalog_number_key("GCVS 7").as_deref(), Some("000007"));
        assert_eq!(catalog_number_key("240012").as_deref(), Some("240012"));
        assert_eq!(catalog_number_key("42").as_deref(), Some("000042"));
        assert_eq!(catalog_number_key("R CYG"), None);
        assert_eq!(catalog_number_key("GCVS"), None);
    }

    #[test]
    fn test_new_derives_data_path() {
        let catalog = Gcvs4Catalog::new("/data/catalogs");
        assert!(catalog
            .data_path()
            .ends_with(Path::new("variableStars").join("gcvs4.dat")));
        assert_eq!(catalog.index().len(), 88);
    }
}
