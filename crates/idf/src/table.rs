//! Duration × return-period depth table.

use tracing::debug;

use crate::base::ReturnPeriodBase;
use crate::coefficients::{CoefficientSet, ReturnPeriodDepth};
use crate::error::IdfError;

/// Interpolated depth for one (duration, return period) pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DurationDepthCell {
    /// Storm duration in hours.
    pub duration_hours: f64,
    /// Return period in years.
    pub return_period_years: u32,
    /// Interpolated depth in mm.
    pub depth_mm: f64,
}

/// Depths for every duration and return period.
///
/// Cells are stored durations-major: all return periods of the first
/// duration, then all of the second, and so on.
#[derive(Clone, Debug, PartialEq)]
pub struct DepthTable {
    durations: Vec<f64>,
    return_periods: Vec<u32>,
    cells: Vec<DurationDepthCell>,
}

impl DepthTable {
    /// Returns the durations (hours) in row order.
    pub fn durations(&self) -> &[f64] {
        &self.durations
    }

    /// Returns the return periods (years) in column order.
    pub fn return_periods(&self) -> &[u32] {
        &self.return_periods
    }

    /// Returns every cell, durations outer and return periods inner.
    pub fn cells(&self) -> &[DurationDepthCell] {
        &self.cells
    }

    /// Returns the cells of one duration row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.durations().len()`.
    pub fn row(&self, row: usize) -> &[DurationDepthCell] {
        let width = self.return_periods.len();
        &self.cells[row * width..(row + 1) * width]
    }

    /// Iterates over the rows in duration order.
    pub fn rows(&self) -> impl Iterator<Item = &[DurationDepthCell]> {
        (0..self.durations.len()).map(|r| self.row(r))
    }

    /// Depth for a duration and return period, if both are in the table.
    pub fn depth(&self, duration_hours: f64, return_period_years: u32) -> Option<f64> {
        self.cells
            .iter()
            .find(|c| {
                c.duration_hours == duration_hours && c.return_period_years == return_period_years
            })
            .map(|c| c.depth_mm)
    }
}

fn validate_durations(durations: &[f64]) -> Result<(), IdfError> {
    if let Some(&bad) = durations.iter().find(|d| !d.is_finite() || **d <= 0.0) {
        return Err(IdfError::Domain {
            reason: format!("duration must be finite and > 0 h, got {bad}"),
        });
    }
    if let Some(w) = durations.windows(2).find(|w| w[1] <= w[0]) {
        return Err(IdfError::UnsortedDurations {
            previous: w[0],
            next: w[1],
        });
    }
    Ok(())
}

/// Builds the depth table for the given anchors and durations.
///
/// Durations are taken in the order supplied and must already be strictly
/// ascending; they are never re-sorted.
///
/// # Errors
///
/// Returns [`IdfError::Domain`] for non-positive durations,
/// [`IdfError::UnsortedDurations`] if the list is out of order, and
/// [`IdfError::DuplicateReturnPeriod`] if a return period repeats.
pub fn build_table(
    bases: &[ReturnPeriodBase],
    durations: &[f64],
) -> Result<DepthTable, IdfError> {
    validate_durations(durations)?;

    let mut return_periods: Vec<u32> = Vec::with_capacity(bases.len());
    for b in bases {
        if return_periods.contains(&b.return_period_years()) {
            return Err(IdfError::DuplicateReturnPeriod {
                return_period: b.return_period_years(),
            });
        }
        return_periods.push(b.return_period_years());
    }

    let mut cells = Vec::with_capacity(durations.len() * bases.len());
    for &duration_hours in durations {
        for b in bases {
            cells.push(DurationDepthCell {
                duration_hours,
                return_period_years: b.return_period_years(),
                depth_mm: b.base().depth_at(duration_hours)?,
            });
        }
    }

    Ok(DepthTable {
        durations: durations.to_vec(),
        return_periods,
        cells,
    })
}

/// Looks up each return period's coefficients for `zone` and builds the
/// depth table.
///
/// # Errors
///
/// Propagates lookup failures ([`IdfError::ZoneNotFound`],
/// [`IdfError::ReturnPeriodNotFound`]) unchanged, plus any error of
/// [`build_table`].
#[tracing::instrument(skip(coefficients, depths, durations), fields(n_return_periods = depths.len()))]
pub fn compute_depth_table(
    zone: &str,
    coefficients: &CoefficientSet,
    depths: &[ReturnPeriodDepth],
    durations: &[f64],
) -> Result<DepthTable, IdfError> {
    let bases = depths
        .iter()
        .map(|d| {
            let coef = coefficients.lookup(zone, d.return_period_years())?;
            let base = ReturnPeriodBase::new(d, coef);
            debug!(
                return_period = d.return_period_years(),
                depth_24h = base.base().depth_24h(),
                depth_1h = base.base().depth_1h(),
                depth_6min = base.base().depth_6min(),
                "anchor depths"
            );
            Ok(base)
        })
        .collect::<Result<Vec<_>, IdfError>>()?;

    build_table(&bases, durations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::BaseDepths;
    use crate::coefficients::ZoneCoefficients;
    use crate::duration::standard_durations;
    use approx::assert_relative_eq;

    fn bases() -> Vec<ReturnPeriodBase> {
        vec![
            ReturnPeriodBase::from_parts(2, BaseDepths::from_raw(80.0, 42.0, 12.0)),
            ReturnPeriodBase::from_parts(10, BaseDepths::from_raw(110.0, 42.0, 12.0)),
        ]
    }

    #[test]
    fn layout_is_durations_outer() {
        let table = build_table(&bases(), &[0.5, 1.0, 2.0]).unwrap();
        assert_eq!(table.cells().len(), 6);
        let order: Vec<(f64, u32)> = table
            .cells()
            .iter()
            .map(|c| (c.duration_hours, c.return_period_years))
            .collect();
        assert_eq!(
            order,
            vec![(0.5, 2), (0.5, 10), (1.0, 2), (1.0, 10), (2.0, 2), (2.0, 10)]
        );
        assert_eq!(table.row(1)[1].return_period_years, 10);
        assert_eq!(table.rows().count(), 3);
    }

    #[test]
    fn one_hour_row_equals_1h_anchor() {
        let b = bases();
        let table = build_table(&b, &standard_durations()).unwrap();
        for base in &b {
            assert_eq!(
                table.depth(1.0, base.return_period_years()),
                Some(base.base().depth_1h())
            );
        }
    }

    #[test]
    fn rejects_unsorted_durations() {
        assert!(matches!(
            build_table(&bases(), &[1.0, 0.5]),
            Err(IdfError::UnsortedDurations { .. })
        ));
        assert!(matches!(
            build_table(&bases(), &[1.0, 1.0]),
            Err(IdfError::UnsortedDurations { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert!(matches!(
            build_table(&bases(), &[0.0, 1.0]),
            Err(IdfError::Domain { .. })
        ));
    }

    #[test]
    fn rejects_duplicate_return_period() {
        let mut b = bases();
        b.push(b[0]);
        assert!(matches!(
            build_table(&b, &[1.0]),
            Err(IdfError::DuplicateReturnPeriod { return_period: 2 })
        ));
    }

    #[test]
    fn compute_depth_table_for_zone_a() {
        let coefficients =
            CoefficientSet::new(vec![ZoneCoefficients::new("A", 65.0, 30.0).unwrap()]);
        let depths = vec![ReturnPeriodDepth::new(100, 150.0).unwrap()];
        let table = compute_depth_table("A", &coefficients, &depths, &standard_durations())
            .unwrap();

        assert_relative_eq!(table.depth(24.0, 100).unwrap(), 171.0, epsilon = 1e-9);
        assert_relative_eq!(table.depth(0.1, 100).unwrap(), 51.3, epsilon = 1e-9);
        let p1h = BaseDepths::from_raw(150.0, 65.0, 30.0).depth_1h();
        assert_eq!(table.depth(1.0, 100).unwrap(), p1h);
    }

    #[test]
    fn compute_depth_table_surfaces_lookup_error() {
        let coefficients =
            CoefficientSet::new(vec![ZoneCoefficients::new("A", 65.0, 30.0).unwrap()]);
        let depths = vec![ReturnPeriodDepth::new(100, 150.0).unwrap()];
        assert!(matches!(
            compute_depth_table("C", &coefficients, &depths, &[1.0]),
            Err(IdfError::ZoneNotFound { .. })
        ));
    }
}
