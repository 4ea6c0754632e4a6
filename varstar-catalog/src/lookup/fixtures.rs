//! Record-line builders shared by the unit tests.
//!
//! A fixture record reproduces the data-file layout exactly: 13
//! pipe-delimited fields packed into 161 characters plus a newline, with
//! the catalog number in bytes 0..6 and the designation name in bytes 8..17.

use std::io::Write;

use tempfile::NamedTempFile;

use super::file::RECORD_SIZE;

#[derive(Default)]
pub(crate) struct FixtureRecord<'a> {
    pub number: &'a str,
    pub designation: &'a str,
    pub position: &'a str,
    pub var_type: &'a str,
    pub mag_max: &'a str,
    pub mag_min: &'a str,
    pub epoch: &'a str,
    pub year: &'a str,
    pub period: &'a str,
    pub shape: &'a str,
    pub spectral: &'a str,
    pub references: &'a str,
    pub other: &'a str,
}

impl FixtureRecord<'_> {
    pub fn line(&self) -> String {
        assert!(self.designation.len() <= 9, "designation too wide");
        let line = format!(
            "{:<6}|{:<10}|{:<16}|{:<10}|{:<8}|{:<10}|{:<11}|{:<4}|{:<16}|{:<5}|{:<17}|{:<5}|{:<31}",
            self.number,
            format!(" {:<9}", self.designation),
            self.position,
            self.var_type,
            self.mag_max,
            self.mag_min,
            self.epoch,
            self.year,
            self.period,
            self.shape,
            self.spectral,
            self.references,
            self.other,
        );
        assert_eq!(line.len(), RECORD_SIZE as usize - 1, "field overflow");
        format!("{line}\n")
    }
}

/// Minimal record carrying only a number and a designation.
pub(crate) fn named(number: &str, designation: &str) -> String {
    FixtureRecord {
        number,
        designation,
        ..Default::default()
    }
    .line()
}

/// Writes records to a temp file in the order given.
pub(crate) fn write_fixture(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for line in lines {
        file.write_all(line.as_bytes()).unwrap();
    }
    file.flush().unwrap();
    file
}
