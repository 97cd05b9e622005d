//! Minute-by-minute hyetograms.

use tracing::debug;

use crate::curve::cumulative_percent;
use crate::error::HuffError;

/// Longest storm accepted, in minutes (one year).
pub const MAX_DURATION_MINUTES: usize = 525_600;

/// Number of whole minutes in `duration_hours`, rounding halves to even.
///
/// # Errors
///
/// Returns [`HuffError::Domain`] if the duration is not finite and positive
/// or exceeds [`MAX_DURATION_MINUTES`], or [`HuffError::InvalidDuration`]
/// if it rounds to zero minutes.
pub fn duration_minutes(duration_hours: f64) -> Result<usize, HuffError> {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        return Err(HuffError::Domain {
            reason: format!("duration must be finite and > 0 h, got {duration_hours}"),
        });
    }
    let minutes = (duration_hours * 60.0).round_ties_even();
    if minutes < 1.0 {
        return Err(HuffError::InvalidDuration { duration_hours });
    }
    if minutes > MAX_DURATION_MINUTES as f64 {
        return Err(HuffError::Domain {
            reason: format!(
                "duration of {duration_hours} h exceeds {MAX_DURATION_MINUTES} minutes"
            ),
        });
    }
    Ok(minutes as usize)
}

/// Distributes `total_depth_mm` over `duration_hours`, one value per minute
/// (mm/min).
///
/// Minute `i` of `n` receives the growth of the cumulative Huff depth
/// between `100·(i−1)/n` and `100·i/n` percent of the storm. The last
/// minute reaches exactly 100 %, so the series sums to the total depth up
/// to rounding. Individual minutes can be slightly negative where the curve
/// fit is not monotone.
///
/// # Errors
///
/// Returns [`HuffError::Domain`] for a negative or non-finite depth or a
/// non-positive duration, and [`HuffError::InvalidDuration`] if the duration
/// rounds to zero minutes.
pub fn build_hyetogram(total_depth_mm: f64, duration_hours: f64) -> Result<Vec<f64>, HuffError> {
    if !total_depth_mm.is_finite() || total_depth_mm < 0.0 {
        return Err(HuffError::Domain {
            reason: format!("depth must be finite and >= 0 mm, got {total_depth_mm}"),
        });
    }
    let n = duration_minutes(duration_hours)?;
    let n_f = n as f64;

    let mut intensities = Vec::with_capacity(n);
    let mut previous = 0.0;
    for i in 1..=n {
        let percent_elapsed = (i as f64 / n_f) * 100.0;
        let cumulative = total_depth_mm * cumulative_percent(percent_elapsed, duration_hours) / 100.0;
        intensities.push(cumulative - previous);
        previous = cumulative;
    }
    Ok(intensities)
}

/// Hyetogram of one (return period, duration) scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct HyetogramSeries {
    return_period_years: u32,
    duration_hours: f64,
    intensities: Vec<f64>,
}

impl HyetogramSeries {
    /// Builds the series for a scenario.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`build_hyetogram`].
    pub fn build(
        return_period_years: u32,
        total_depth_mm: f64,
        duration_hours: f64,
    ) -> Result<Self, HuffError> {
        let intensities = build_hyetogram(total_depth_mm, duration_hours)?;
        debug!(
            return_period = return_period_years,
            duration_hours,
            n_minutes = intensities.len(),
            "built hyetogram"
        );
        Ok(Self {
            return_period_years,
            duration_hours,
            intensities,
        })
    }

    /// Returns the return period in years.
    pub fn return_period_years(&self) -> u32 {
        self.return_period_years
    }

    /// Returns the storm duration in hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Returns the per-minute intensities (mm/min).
    pub fn intensities(&self) -> &[f64] {
        &self.intensities
    }

    /// Number of minutes in the series.
    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    /// Always `false`: a series holds at least one minute.
    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    /// Sum of the intensities (mm).
    pub fn total_depth(&self) -> f64 {
        self.intensities.iter().sum()
    }
}
