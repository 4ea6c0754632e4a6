//! Per-operation access to the fixed-width catalog data file.
//!
//! Every record in `gcvs4.dat` occupies exactly [`RECORD_SIZE`] bytes
//! (161 characters plus the newline), so a record's byte offset is
//! `line * RECORD_SIZE` and a column within it is one more addition away.
//! [`RecordFile`] wraps a freshly-opened handle for the duration of a single
//! lookup; it is never cached or shared, and dropping it closes the file on
//! every exit path.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Size of one catalog record in bytes, newline included.
pub const RECORD_SIZE: u64 = 162;

/// An open catalog data file, addressed by record line number.
#[derive(Debug)]
pub(crate) struct RecordFile {
    file: File,
    record_count: u64,
}

impl RecordFile {
    /// Opens the data file and derives the record count from its length.
    ///
    /// A trailing partial record (a truncated file) is not counted.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let len = file.metadata()?.len();
        Ok(Self {
            file,
            record_count: len / RECORD_SIZE,
        })
    }

    /// Number of complete records in the file.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Reads `len` bytes at byte offset `line * RECORD_SIZE + offset`.
    ///
    /// One seek plus one fixed-length read; this is the only I/O a search
    /// probe performs.
    pub fn read_field(&mut self, line: u64, offset: u64, len: usize) -> io::Result<String> {
        let mut buf = vec![0u8; len];
        self.file.seek(SeekFrom::Start(line * RECORD_SIZE + offset))?;
        self.file.read_exact(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Reads the complete record at `line`, without the record terminator.
    pub fn read_record(&mut self, line: u64) -> io::Result<String> {
        self.file.seek(SeekFrom::Start(line * RECORD_SIZE))?;
        let mut buf = Vec::with_capacity(RECORD_SIZE as usize);
        self.file
            .by_ref()
            .take(RECORD_SIZE)
            .read_to_end(&mut buf)?;
        let text = String::from_utf8_lossy(&buf);
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixed_line(content: &str) -> String {
        assert!(content.len() < RECORD_SIZE as usize);
        format!("{:<width$}\n", content, width = RECORD_SIZE as usize - 1)
    }

    fn write_file(lines: &[String]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            file.write_all(line.as_bytes()).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_record_count_from_length() {
        let file = write_file(&[fixed_line("one"), fixed_line("two")]);
        let records = RecordFile::open(file.path()).unwrap();
        assert_eq!(records.record_count(), 2);
    }

    #[test]
    fn test_truncated_tail_not_counted() {
        let mut file = write_file(&[fixed_line("one")]);
        file.write_all(b"partial").unwrap();
        file.flush().unwrap();
        let records = RecordFile::open(file.path()).unwrap();
        assert_eq!(records.record_count(), 1);
    }

    #[test]
    fn test_read_field_at_offset() {
        let file = write_file(&[fixed_line("000001| R CYG"), fixed_line("000002| S CYG")]);
        let mut records = RecordFile::open(file.path()).unwrap();

        assert_eq!(records.read_field(0, 0, 6).unwrap(), "000001");
        assert_eq!(records.read_field(1, 0, 6).unwrap(), "000002");
        assert_eq!(records.read_field(1, 8, 5).unwrap(), "S CYG");
    }

    #[test]
    fn test_read_field_past_eof_errors() {
        let file = write_file(&[fixed_line("only")]);
        let mut records = RecordFile::open(file.path()).unwrap();
        assert!(records.read_field(5, 0, 6).is_err());
    }

    #[test]
    fn test_read_record_strips_newline() {
        let file = write_file(&[fixed_line("000001| R CYG"), fixed_line("000002| S CYG")]);
        let mut records = RecordFile::open(file.path()).unwrap();

        let record = records.read_record(1).unwrap();
        assert!(record.starts_with("000002| S CYG"));
        assert!(!record.ends_with('\n'));
        assert_eq!(record.len(), RECORD_SIZE as usize - 1);
    }

    #[test]
    fn test_open_missing_file_errors() {
        assert!(RecordFile::open(Path::new("/nonexistent/gcvs4.dat")).is_err());
    }
}
