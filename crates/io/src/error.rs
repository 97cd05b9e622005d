//! Error types for taborga-io.

use std::path::PathBuf;

use taborga_idf::IdfError;

/// Error type for all fallible operations in the taborga-io crate.
///
/// Covers file-system and CSV failures, malformed or missing columns,
/// GeoJSON parsing problems and lookups that find no zone.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating-system I/O failure.
    #[error(transparent)]
    Io {
        /// Underlying failure.
        #[from]
        source: std::io::Error,
    },

    /// Wraps an error originating from the csv library.
    #[error(transparent)]
    Csv {
        /// Underlying failure.
        #[from]
        source: csv::Error,
    },

    /// Returned when a required column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Canonical name of the missing column.
        name: &'static str,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a cell cannot be parsed as the expected type.
    #[error("invalid value '{value}' in column '{column}' at line {line} of {}", path.display())]
    InvalidValue {
        /// Path to the file that was read.
        path: PathBuf,
        /// One-based line number, counting the header.
        line: u64,
        /// Column header.
        column: String,
        /// Raw cell text.
        value: String,
    },

    /// Wraps a rejected record or failed lookup from taborga-idf.
    #[error(transparent)]
    Idf {
        /// Underlying failure.
        #[from]
        source: IdfError,
    },

    /// Returned when a GeoJSON document cannot be parsed or has an
    /// unexpected shape.
    #[error("geojson error: {reason}")]
    GeoJson {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when no zone polygon contains a point.
    #[error("no zone contains lat {lat}, lon {lon}")]
    ZoneNotResolved {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lon: f64,
    },
}

impl From<geojson::Error> for IoError {
    fn from(e: geojson::Error) -> Self {
        IoError::GeoJson {
            reason: e.to_string(),
        }
    }
}
