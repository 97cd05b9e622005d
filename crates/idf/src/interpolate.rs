//! Log-linear interpolation between depth anchors.
//!
//! Depths between 6 min and 1 h come from the line through the 6 min and
//! 1 h anchors in `(ln t, P)` space; depths from 1 h upwards come from the
//! line through the 1 h and 24 h anchors.

use crate::error::IdfError;

/// Duration of the short anchor (6 min) in hours.
pub(crate) const SHORT_ANCHOR_HOURS: f64 = 0.1;
/// Duration of the middle anchor in hours.
pub(crate) const HOUR_ANCHOR_HOURS: f64 = 1.0;
/// Duration of the long anchor in hours.
pub(crate) const DAY_ANCHOR_HOURS: f64 = 24.0;

/// A fitted `y = a·ln(x) + b` model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogFit {
    a: f64,
    b: f64,
}

impl LogFit {
    /// Fits the model through `(x1, y1)` and `(x2, y2)`.
    ///
    /// # Errors
    ///
    /// Returns [`IdfError::Domain`] if either abscissa is non-positive or
    /// non-finite, or if the two abscissae coincide.
    pub fn fit(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, IdfError> {
        for x in [x1, x2] {
            if !x.is_finite() || x <= 0.0 {
                return Err(IdfError::Domain {
                    reason: format!("log anchor must be finite and > 0, got {x}"),
                });
            }
        }
        if x1 == x2 {
            return Err(IdfError::Domain {
                reason: format!("log anchors coincide at x = {x1}"),
            });
        }

        let (ln_x1, ln_x2) = (x1.ln(), x2.ln());
        let a = (y2 - y1) / (ln_x2 - ln_x1);
        let b = y1 - a * ln_x1;
        Ok(Self { a, b })
    }

    /// Returns the slope `a`.
    pub fn slope(&self) -> f64 {
        self.a
    }

    /// Returns the intercept `b` (the value at `x = 1`).
    pub fn intercept(&self) -> f64 {
        self.b
    }

    /// Evaluates the model at `x`. The caller guarantees `x > 0`.
    pub fn eval(&self, x: f64) -> f64 {
        self.a * x.ln() + self.b
    }
}

/// Interpolates the depth for `duration_hours` from the three anchors.
///
/// Durations below one hour use the 6 min – 1 h segment, all others the
/// 1 h – 24 h segment (durations above 24 h extrapolate along it).
///
/// # Errors
///
/// Returns [`IdfError::Domain`] if `duration_hours` is not finite and
/// positive.
pub fn interpolate_depth(
    duration_hours: f64,
    depth_6min: f64,
    depth_1h: f64,
    depth_24h: f64,
) -> Result<f64, IdfError> {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(IdfError::Domain {
            reason: format!("duration must be finite and > 0 h, got {duration_hours}"),
        });
    }

    let fit = if duration_hours < HOUR_ANCHOR_HOURS {
        LogFit::fit(SHORT_ANCHOR_HOURS, depth_6min, HOUR_ANCHOR_HOURS, depth_1h)?
    } else {
        LogFit::fit(HOUR_ANCHOR_HOURS, depth_1h, DAY_ANCHOR_HOURS, depth_24h)?
    };
    Ok(fit.eval(duration_hours))
}
