//! CSV writers for the depth table and the hyetogram table.

use std::path::Path;

use taborga_table::{Cell, LabelledTable, OutputTable};
use tracing::info;

use crate::error::IoError;

/// Configuration for writing output tables.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Field delimiter.
    delimiter: u8,
    /// Decimal places kept in hyetogram values.
    decimals: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            decimals: 4,
        }
    }
}

impl WriterConfig {
    /// Sets the field delimiter.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the number of decimal places kept in hyetogram values.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Returns the field delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Returns the number of decimal places.
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    fn writer(&self, path: &Path) -> Result<csv::Writer<std::fs::File>, IoError> {
        Ok(csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)?)
    }
}

/// Rounds to `decimals` places; negative zero is written as zero.
fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Writes a depth table with full-precision numbers.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_depth_table(
    path: &Path,
    table: &LabelledTable,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let mut writer = config.writer(path)?;
    writer.write_record(table.headers())?;
    for r in 0..table.rows().len() {
        let record = (0..table.headers().len()).map(|c| match table.cell(r, c) {
            Cell::Number(v) => v.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        });
        writer.write_record(record)?;
    }
    writer.flush()?;
    info!(path = %path.display(), n_rows = table.rows().len(), "wrote depth table");
    Ok(())
}

/// Writes a hyetogram table: the minute index followed by one column per
/// scenario, values rounded to the configured decimals.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or written.
pub fn write_hyetogram_table(
    path: &Path,
    table: &OutputTable,
    config: &WriterConfig,
) -> Result<(), IoError> {
    let mut writer = config.writer(path)?;
    writer.write_record(table.headers())?;
    for (row, minute) in table.minutes().iter().enumerate() {
        let record = std::iter::once(minute.to_string()).chain(
            table
                .columns()
                .iter()
                .map(|c| round_to(c.values()[row], config.decimals).to_string()),
        );
        writer.write_record(record)?;
    }
    writer.flush()?;
    info!(
        path = %path.display(),
        n_rows = table.n_rows(),
        n_columns = table.columns().len(),
        "wrote hyetogram table"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_to(0.123_456, 4), 0.1235);
        assert_eq!(round_to(-0.000_01, 4), 0.0);
        assert!(round_to(-0.000_01, 4).is_sign_positive());
        assert_eq!(round_to(2.5, 0), 3.0);
    }

    #[test]
    fn defaults() {
        let config = WriterConfig::default();
        assert_eq!(config.delimiter(), b';');
        assert_eq!(config.decimals(), 4);
        let config = config.with_decimals(2).with_delimiter(b',');
        assert_eq!(config.delimiter(), b',');
        assert_eq!(config.decimals(), 2);
    }
}
