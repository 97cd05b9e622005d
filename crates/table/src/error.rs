//! Error types for the taborga-table crate.

use taborga_huff::HuffError;

/// Error type for all fallible operations in the taborga-table crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    /// Returned when the table structure cannot be interpreted.
    #[error("format error: {reason}")]
    Format {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps a failure while building a scenario's hyetogram.
    #[error("hyetogram for return period {return_period}, {duration_hours} h")]
    Scenario {
        /// Return period of the failing scenario.
        return_period: u32,
        /// Duration of the failing scenario in hours.
        duration_hours: f64,
        /// Underlying error.
        #[source]
        source: HuffError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let e = TableError::Format {
            reason: "no duration column".to_string(),
        };
        assert_eq!(e.to_string(), "format error: no duration column");
    }

    #[test]
    fn display_scenario() {
        let e = TableError::Scenario {
            return_period: 10,
            duration_hours: 0.0,
            source: HuffError::Domain {
                reason: "duration must be finite and > 0 h, got 0".to_string(),
            },
        };
        assert_eq!(
            e.to_string(),
            "hyetogram for return period 10, 0 h"
        );
    }

    #[test]
    fn scenario_exposes_source() {
        use std::error::Error;
        let e = TableError::Scenario {
            return_period: 2,
            duration_hours: 0.001,
            source: HuffError::InvalidDuration {
                duration_hours: 0.001,
            },
        };
        assert!(e.source().is_some());
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<TableError>();
    }
}
