//! Delimiter-sniffing CSV access shared by the readers.

use std::path::{Path, PathBuf};

use csv::StringRecord;
use taborga_table::{Cell, LabelledTable, parse_decimal};
use tracing::debug;

use crate::error::IoError;

/// Picks the field delimiter from a header line: `;` if present, else `,`.
pub fn detect_delimiter(header_line: &str) -> u8 {
    if header_line.contains(';') { b';' } else { b',' }
}

/// An in-memory CSV file with resolved headers.
pub(crate) struct CsvFile {
    path: PathBuf,
    headers: Vec<String>,
    records: Vec<(u64, StringRecord)>,
}

impl CsvFile {
    /// Reads `path`, sniffing the delimiter from the first line.
    pub(crate) fn open(path: &Path) -> Result<Self, IoError> {
        if !path.exists() {
            return Err(IoError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path)?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        let delimiter = detect_delimiter(text.lines().next().unwrap_or_default());

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());
            if record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            records.push((line, record));
        }

        debug!(
            path = %path.display(),
            delimiter = %char::from(delimiter),
            n_columns = headers.len(),
            n_records = records.len(),
            "read csv"
        );
        Ok(Self {
            path: path.to_path_buf(),
            headers,
            records,
        })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records with their one-based line numbers.
    pub(crate) fn records(&self) -> &[(u64, StringRecord)] {
        &self.records
    }

    /// Index of the first column matching any alias (trimmed,
    /// case-insensitive).
    pub(crate) fn find_column(&self, aliases: &[&str]) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| aliases.iter().any(|a| h.eq_ignore_ascii_case(a)))
    }

    /// Like [`find_column`](Self::find_column) but fails with
    /// [`IoError::MissingColumn`] named after the first alias.
    pub(crate) fn require_column(&self, aliases: &[&'static str]) -> Result<usize, IoError> {
        self.find_column(aliases).ok_or_else(|| IoError::MissingColumn {
            name: aliases.first().copied().unwrap_or_default(),
            path: self.path.clone(),
        })
    }

    /// Trimmed text of a field; empty past the end of a short record.
    pub(crate) fn text<'a>(record: &'a StringRecord, column: usize) -> &'a str {
        record.get(column).map_or("", str::trim)
    }

    /// Parses a numeric field with either decimal separator.
    pub(crate) fn number(
        &self,
        line: u64,
        record: &StringRecord,
        column: usize,
    ) -> Result<f64, IoError> {
        let raw = Self::text(record, column);
        parse_decimal(raw).ok_or_else(|| self.invalid(line, column, raw))
    }

    /// Parses an integer field; a decimal with no fractional part is
    /// accepted (`"10.0"`).
    pub(crate) fn integer(
        &self,
        line: u64,
        record: &StringRecord,
        column: usize,
    ) -> Result<u32, IoError> {
        let raw = Self::text(record, column);
        if let Ok(v) = raw.parse::<u32>() {
            return Ok(v);
        }
        match parse_decimal(raw) {
            Some(v) if v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) => {
                Ok(v as u32)
            }
            _ => Err(self.invalid(line, column, raw)),
        }
    }

    fn invalid(&self, line: u64, column: usize, raw: &str) -> IoError {
        IoError::InvalidValue {
            path: self.path.clone(),
            line,
            column: self.headers.get(column).cloned().unwrap_or_default(),
            value: raw.to_string(),
        }
    }
}

/// Reads a depth table (duration rows × return-period columns) as written
/// by [`write_depth_table`](crate::write_depth_table) or by hand.
///
/// Cells are kept as text; blank cells become [`Cell::Empty`]. Reshaping
/// decides which headers and cells are meaningful.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file is missing, or
/// [`IoError::Csv`] / [`IoError::Io`] if it cannot be read.
pub fn read_depth_table(path: &Path) -> Result<LabelledTable, IoError> {
    let file = CsvFile::open(path)?;
    let rows = file
        .records()
        .iter()
        .map(|(_, record)| record.iter().map(|field| Cell::from(field.trim())).collect())
        .collect();
    Ok(LabelledTable::new(file.headers().to_vec(), rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn delimiter_detection() {
        assert_eq!(detect_delimiter("a;b;c"), b';');
        assert_eq!(detect_delimiter("a,b,c"), b',');
        assert_eq!(detect_delimiter("single"), b',');
    }

    #[test]
    fn semicolon_file_with_decimal_commas() {
        let file = write_temp("Zone ; Value\nA;1,5\nB;2\n");
        let csv = CsvFile::open(file.path()).unwrap();
        assert_eq!(csv.headers(), &["Zone", "Value"]);
        let value = csv.find_column(&["value"]).unwrap();

        let (line, record) = &csv.records()[0];
        assert_eq!(*line, 2);
        assert_eq!(csv.number(*line, record, value).unwrap(), 1.5);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let file = write_temp("a,b\n1,2\n,\n3,4\n");
        let csv = CsvFile::open(file.path()).unwrap();
        assert_eq!(csv.records().len(), 2);
    }

    #[test]
    fn integer_accepts_whole_decimals() {
        let file = write_temp("tr\n10\n25.0\n2.5\n");
        let csv = CsvFile::open(file.path()).unwrap();
        let parsed: Vec<_> = csv
            .records()
            .iter()
            .map(|(line, r)| csv.integer(*line, r, 0).ok())
            .collect();
        assert_eq!(parsed, vec![Some(10), Some(25), None]);
    }

    #[test]
    fn missing_column_is_named() {
        let file = write_temp("x,y\n1,2\n");
        let csv = CsvFile::open(file.path()).unwrap();
        let err = csv.require_column(&["isozona", "zone"]).err().unwrap();
        assert!(matches!(err, IoError::MissingColumn { name: "isozona", .. }));
    }

    #[test]
    fn missing_file() {
        let err = CsvFile::open(Path::new("/nonexistent/depths.csv")).err().unwrap();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn depth_table_cells_stay_text() {
        let file = write_temp("Duração;TR 10\n6 min;12,5\n1 h;\n");
        let table = read_depth_table(file.path()).unwrap();
        assert_eq!(table.headers(), &["Duração", "TR 10"]);
        assert_eq!(table.cell(0, 1).as_number(), Some(12.5));
        assert_eq!(table.cell(1, 1), &Cell::Empty);
        assert_eq!(table.duration_column(), Some(0));
    }
}
