//! Anchor depths derived from a 24-hour depth and a zone's coefficients.

use crate::coefficients::{ReturnPeriodDepth, ZoneCoefficients};
use crate::error::IdfError;
use crate::interpolate::interpolate_depth;

/// Correction applied to the daily (1-day) depth to obtain the 24-hour depth.
pub const DEPTH_24H_CORRECTION: f64 = 1.14;

/// The 24 h, 1 h and 6 min anchor depths (mm) of one return period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseDepths {
    depth_24h: f64,
    depth_1h: f64,
    depth_6min: f64,
}

impl BaseDepths {
    /// Derives the anchors from a raw daily depth and two percentage
    /// coefficients.
    ///
    /// `depth_24h = raw × 1.14`, `depth_1h = depth_24h × coef_1h_24h / 100`,
    /// `depth_6min = depth_24h × coef_6min_24h / 100`.
    pub fn from_raw(depth_24h_raw: f64, coef_1h_24h: f64, coef_6min_24h: f64) -> Self {
        let depth_24h = depth_24h_raw * DEPTH_24H_CORRECTION;
        Self {
            depth_24h,
            depth_1h: (depth_24h * coef_1h_24h) / 100.0,
            depth_6min: (depth_24h * coef_6min_24h) / 100.0,
        }
    }

    /// Returns the 24-hour depth (mm).
    pub fn depth_24h(&self) -> f64 {
        self.depth_24h
    }

    /// Returns the 1-hour depth (mm).
    pub fn depth_1h(&self) -> f64 {
        self.depth_1h
    }

    /// Returns the 6-minute depth (mm).
    pub fn depth_6min(&self) -> f64 {
        self.depth_6min
    }

    /// Interpolated depth (mm) for a duration in hours.
    ///
    /// # Errors
    ///
    /// Returns [`IdfError::Domain`] if `duration_hours` is not positive.
    pub fn depth_at(&self, duration_hours: f64) -> Result<f64, IdfError> {
        interpolate_depth(
            duration_hours,
            self.depth_6min,
            self.depth_1h,
            self.depth_24h,
        )
    }
}

/// Anchor depths tagged with their return period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReturnPeriodBase {
    return_period_years: u32,
    base: BaseDepths,
}

impl ReturnPeriodBase {
    /// Combines a return-period depth with its zone coefficients.
    pub fn new(depth: &ReturnPeriodDepth, coefficients: &ZoneCoefficients) -> Self {
        Self {
            return_period_years: depth.return_period_years(),
            base: BaseDepths::from_raw(
                depth.depth_24h_mm(),
                coefficients.coef_1h_24h(),
                coefficients.coef_6min_24h(),
            ),
        }
    }

    /// Wraps already computed anchors.
    pub fn from_parts(return_period_years: u32, base: BaseDepths) -> Self {
        Self {
            return_period_years,
            base,
        }
    }

    /// Returns the return period in years.
    pub fn return_period_years(&self) -> u32 {
        self.return_period_years
    }

    /// Returns the anchor depths.
    pub fn base(&self) -> &BaseDepths {
        &self.base
    }
}
