//! Error types for the taborga-huff crate.

/// Error type for all fallible operations in the taborga-huff crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HuffError {
    /// Returned when a depth or duration is outside its numeric domain.
    #[error("domain error: {reason}")]
    Domain {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a positive duration rounds to zero whole minutes.
    #[error("duration of {duration_hours} h rounds to zero minutes")]
    InvalidDuration {
        /// The offending duration in hours.
        duration_hours: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_domain() {
        let e = HuffError::Domain {
            reason: "depth must be finite and >= 0 mm, got -1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "domain error: depth must be finite and >= 0 mm, got -1"
        );
    }

    #[test]
    fn display_invalid_duration() {
        let e = HuffError::InvalidDuration {
            duration_hours: 0.005,
        };
        assert_eq!(e.to_string(), "duration of 0.005 h rounds to zero minutes");
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<HuffError>();
    }
}
