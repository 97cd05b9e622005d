//! Zone coefficient records and the return-period depths they scale.

use tracing::debug;

use crate::error::IdfError;

/// Canonical form of a zone identifier: trimmed and upper-cased.
pub fn normalize_zone(zone: &str) -> String {
    zone.trim().to_uppercase()
}

fn check_percentage(zone: &str, name: &'static str, value: f64) -> Result<(), IdfError> {
    if !value.is_finite() || value <= 0.0 || value > 100.0 {
        return Err(IdfError::InvalidCoefficient {
            zone: zone.to_string(),
            name,
            value,
        });
    }
    Ok(())
}

/// Ratios of the 1 h and 6 min depths to the 24 h depth for one isozone,
/// in percent.
///
/// A record may be restricted to a single return period; otherwise it
/// applies to every return period of the zone.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneCoefficients {
    zone_id: String,
    return_period_years: Option<u32>,
    coef_1h_24h: f64,
    coef_6min_24h: f64,
}

impl ZoneCoefficients {
    /// Creates a zone-wide record.
    ///
    /// # Errors
    ///
    /// Returns [`IdfError::InvalidCoefficient`] if either coefficient lies
    /// outside (0, 100].
    pub fn new(
        zone_id: impl Into<String>,
        coef_1h_24h: f64,
        coef_6min_24h: f64,
    ) -> Result<Self, IdfError> {
        let zone_id = zone_id.into();
        check_percentage(&zone_id, "coef_1h_24h", coef_1h_24h)?;
        check_percentage(&zone_id, "coef_6min_24h", coef_6min_24h)?;
        Ok(Self {
            zone_id,
            return_period_years: None,
            coef_1h_24h,
            coef_6min_24h,
        })
    }

    /// Restricts the record to one return period.
    pub fn with_return_period(mut self, return_period_years: u32) -> Self {
        self.return_period_years = Some(return_period_years);
        self
    }

    /// Returns the zone identifier as supplied.
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    /// Returns the return period this record is restricted to, if any.
    pub fn return_period_years(&self) -> Option<u32> {
        self.return_period_years
    }

    /// Returns the 1 h / 24 h ratio in percent.
    pub fn coef_1h_24h(&self) -> f64 {
        self.coef_1h_24h
    }

    /// Returns the 6 min / 24 h ratio in percent.
    pub fn coef_6min_24h(&self) -> f64 {
        self.coef_6min_24h
    }

    fn is_zone(&self, normalized: &str) -> bool {
        normalize_zone(&self.zone_id) == normalized
    }
}

/// A 24-hour (daily) depth for one return period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReturnPeriodDepth {
    return_period_years: u32,
    depth_24h_mm: f64,
}

impl ReturnPeriodDepth {
    /// Creates a record.
    ///
    /// # Errors
    ///
    /// Returns [`IdfError::InvalidDepth`] if the return period is zero or the
    /// depth is not finite and positive.
    pub fn new(return_period_years: u32, depth_24h_mm: f64) -> Result<Self, IdfError> {
        if return_period_years == 0 {
            return Err(IdfError::InvalidDepth {
                return_period: 0,
                reason: "return period must be at least 1 year".to_string(),
            });
        }
        if !depth_24h_mm.is_finite() || depth_24h_mm <= 0.0 {
            return Err(IdfError::InvalidDepth {
                return_period: return_period_years,
                reason: format!("depth must be finite and > 0 mm, got {depth_24h_mm}"),
            });
        }
        Ok(Self {
            return_period_years,
            depth_24h_mm,
        })
    }

    /// Returns the return period in years.
    pub fn return_period_years(&self) -> u32 {
        self.return_period_years
    }

    /// Returns the uncorrected 24-hour depth (mm).
    pub fn depth_24h_mm(&self) -> f64 {
        self.depth_24h_mm
    }
}

/// All coefficient records available to a run.
#[derive(Clone, Debug, Default)]
pub struct CoefficientSet {
    records: Vec<ZoneCoefficients>,
}

impl CoefficientSet {
    /// Wraps a list of records.
    pub fn new(records: Vec<ZoneCoefficients>) -> Self {
        Self { records }
    }

    /// Returns the records in insertion order.
    pub fn records(&self) -> &[ZoneCoefficients] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct zone identifiers (normalized) in first-seen order.
    pub fn zones(&self) -> Vec<String> {
        let mut zones: Vec<String> = Vec::new();
        for record in &self.records {
            let zone = normalize_zone(&record.zone_id);
            if !zones.contains(&zone) {
                zones.push(zone);
            }
        }
        zones
    }

    /// Finds the coefficients for `zone` and `return_period_years`.
    ///
    /// Zone matching ignores case and surrounding whitespace. A record
    /// restricted to the requested return period wins over a zone-wide one.
    ///
    /// # Errors
    ///
    /// Returns [`IdfError::ZoneNotFound`] if no record names the zone, or
    /// [`IdfError::ReturnPeriodNotFound`] if the zone only has records for
    /// other return periods.
    pub fn lookup(
        &self,
        zone: &str,
        return_period_years: u32,
    ) -> Result<&ZoneCoefficients, IdfError> {
        let wanted = normalize_zone(zone);
        let mut zone_wide = None;
        let mut zone_seen = false;

        for record in self.records.iter().filter(|r| r.is_zone(&wanted)) {
            zone_seen = true;
            match record.return_period_years {
                Some(tr) if tr == return_period_years => {
                    debug!(zone = %wanted, return_period = tr, "matched return-period coefficients");
                    return Ok(record);
                }
                None if zone_wide.is_none() => zone_wide = Some(record),
                _ => {}
            }
        }

        if let Some(record) = zone_wide {
            return Ok(record);
        }
        if zone_seen {
            Err(IdfError::ReturnPeriodNotFound {
                zone: wanted,
                return_period: return_period_years,
            })
        } else {
            Err(IdfError::ZoneNotFound {
                zone: zone.to_string(),
                available: self.zones(),
            })
        }
    }
}
