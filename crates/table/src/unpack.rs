//! Depth table → per-scenario depth records.

use tracing::{debug, warn};

use crate::error::TableError;
use crate::labelled::{Cell, LabelledTable};
use crate::labels::{parse_duration_label, parse_return_period_label};

/// Total depth of one (return period, duration) scenario.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScenarioDepth {
    /// Return period in years.
    pub return_period_years: u32,
    /// Storm duration in hours.
    pub duration_hours: f64,
    /// Total depth in mm.
    pub depth_mm: f64,
}

/// Flattens a depth table into scenario records, rows outer and columns
/// inner.
///
/// The duration column is the first whose header contains `"dura"`
/// (case-insensitive). Rows whose duration label does not parse, columns
/// whose header is not a return period, and blank or non-numeric cells are
/// skipped.
///
/// # Errors
///
/// Returns [`TableError::Format`] if no duration column exists.
#[tracing::instrument(skip_all, fields(n_rows = table.rows().len()))]
pub fn unpack(table: &LabelledTable) -> Result<Vec<ScenarioDepth>, TableError> {
    let duration_col = table.duration_column().ok_or_else(|| TableError::Format {
        reason: format!(
            "no duration column among headers {:?}",
            table.headers()
        ),
    })?;

    let return_period_cols: Vec<(usize, u32)> = table
        .headers()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != duration_col)
        .filter_map(|(i, h)| match parse_return_period_label(h) {
            Some(tr) => Some((i, tr)),
            None => {
                debug!(header = %h, "skipping non return-period column");
                None
            }
        })
        .collect();

    let mut scenarios = Vec::new();
    for (r, _) in table.rows().iter().enumerate() {
        let label = table.cell(r, duration_col);
        let Some(duration_hours) = label.as_text().and_then(parse_duration_label) else {
            debug!(row = r, label = ?label, "skipping row without a duration label");
            continue;
        };

        for &(c, return_period_years) in &return_period_cols {
            let cell = table.cell(r, c);
            let Some(depth_mm) = cell.as_number() else {
                if !matches!(cell, Cell::Empty) {
                    warn!(row = r, column = c, cell = ?cell, "skipping non-numeric depth");
                }
                continue;
            };
            scenarios.push(ScenarioDepth {
                return_period_years,
                duration_hours,
                depth_mm,
            });
        }
    }

    debug!(n_scenarios = scenarios.len(), "unpacked depth table");
    Ok(scenarios)
}
