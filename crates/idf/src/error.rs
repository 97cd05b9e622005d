//! Error types for the taborga-idf crate.

/// Error type for all fallible operations in the taborga-idf crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdfError {
    /// Returned when a numeric argument lies outside the domain of the model
    /// (non-positive anchor or duration, coincident anchors, non-finite value).
    #[error("domain error: {reason}")]
    Domain {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a zone coefficient is outside (0, 100].
    #[error("invalid coefficient {name} for zone '{zone}': {value} (must be in (0, 100])")]
    InvalidCoefficient {
        /// Zone the record belongs to.
        zone: String,
        /// Name of the coefficient.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Returned when a return-period depth record is not usable.
    #[error("invalid depth for return period {return_period}: {reason}")]
    InvalidDepth {
        /// Return period in years.
        return_period: u32,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the same return period is supplied twice.
    #[error("duplicate return period: {return_period}")]
    DuplicateReturnPeriod {
        /// The repeated return period in years.
        return_period: u32,
    },

    /// Returned when the duration list is not strictly ascending.
    #[error("durations must be strictly ascending: {previous} h is followed by {next} h")]
    UnsortedDurations {
        /// Duration preceding the violation (hours).
        previous: f64,
        /// Duration that breaks the ordering (hours).
        next: f64,
    },

    /// Returned when no coefficient record exists for the zone.
    #[error("zone '{zone}' not found (available: {available:?})")]
    ZoneNotFound {
        /// The requested zone identifier.
        zone: String,
        /// Zone identifiers present in the coefficient set.
        available: Vec<String>,
    },

    /// Returned when the zone exists but has no record for the return period.
    #[error("no coefficients for zone '{zone}' and return period {return_period}")]
    ReturnPeriodNotFound {
        /// The requested zone identifier.
        zone: String,
        /// The requested return period in years.
        return_period: u32,
    },
}
