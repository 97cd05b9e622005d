//! Depth table → hyetogram table.

use taborga_huff::HyetogramSeries;
use tracing::info;

use crate::error::TableError;
use crate::labelled::LabelledTable;
use crate::repack::{OutputTable, repack};
use crate::unpack::{ScenarioDepth, unpack};

/// Builds one hyetogram per scenario, in input order.
///
/// # Errors
///
/// Returns [`TableError::Scenario`] for the first scenario whose depth or
/// duration is rejected.
#[tracing::instrument(skip_all, fields(n_scenarios = scenarios.len()))]
pub fn hyetograms(scenarios: &[ScenarioDepth]) -> Result<Vec<HyetogramSeries>, TableError> {
    scenarios
        .iter()
        .map(|s| {
            HyetogramSeries::build(s.return_period_years, s.depth_mm, s.duration_hours).map_err(
                |source| TableError::Scenario {
                    return_period: s.return_period_years,
                    duration_hours: s.duration_hours,
                    source,
                },
            )
        })
        .collect()
}

/// Unpacks a depth table, disaggregates every scenario and repacks the
/// results into a minute-indexed table.
///
/// # Errors
///
/// Returns [`TableError::Format`] if the table has no duration column and
/// [`TableError::Scenario`] if a scenario cannot be disaggregated.
pub fn distribute(table: &LabelledTable) -> Result<OutputTable, TableError> {
    let scenarios = unpack(table)?;
    let series = hyetograms(&scenarios)?;
    let output = repack(&series);
    info!(
        n_scenarios = output.columns().len(),
        n_minutes = output.n_rows(),
        "hyetogram table assembled"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labelled::Cell;
    use approx::assert_abs_diff_eq;

    #[test]
    fn distribute_small_table() {
        let table = LabelledTable::new(
            vec!["Duration".into(), "TR 10".into(), "TR 2".into()],
            vec![
                vec![Cell::from("6 min"), Cell::from(12.0), Cell::from(9.0)],
                vec![Cell::from("1 h"), Cell::from(40.0), Cell::from(30.0)],
            ],
        );
        let out = distribute(&table).unwrap();
        assert_eq!(
            out.headers(),
            vec!["minute", "2,6min", "2,1h", "10,6min", "10,1h"]
        );
        assert_eq!(out.n_rows(), 60);
        assert_abs_diff_eq!(out.column("10,1h").unwrap().total(), 40.0, epsilon = 1e-6);
        assert_abs_diff_eq!(out.column("2,6min").unwrap().total(), 9.0, epsilon = 1e-6);
    }

    #[test]
    fn oversized_duration_is_an_error() {
        let table = LabelledTable::new(
            vec!["Duration".into(), "TR 2".into()],
            vec![vec![Cell::from("1e20 h"), Cell::from(10.0)]],
        );
        let err = distribute(&table).unwrap_err();
        assert!(matches!(
            err,
            TableError::Scenario {
                return_period: 2,
                source: taborga_huff::HuffError::Domain { .. },
                ..
            }
        ));
    }

    #[test]
    fn negative_depth_reports_scenario() {
        let scenarios = [ScenarioDepth {
            return_period_years: 5,
            duration_hours: 1.0,
            depth_mm: -3.0,
        }];
        let err = hyetograms(&scenarios).unwrap_err();
        assert!(matches!(
            err,
            TableError::Scenario {
                return_period: 5,
                ..
            }
        ));
    }
}
