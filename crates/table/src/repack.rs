//! Per-scenario hyetograms → minute-indexed output table.

use std::collections::BTreeMap;

use taborga_huff::HyetogramSeries;
use tracing::warn;

use crate::labels::ScenarioLabel;

/// Header of the minute index column.
pub const MINUTE_HEADER: &str = "minute";

/// One scenario column of an [`OutputTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct OutputColumn {
    label: ScenarioLabel,
    values: Vec<f64>,
}

impl OutputColumn {
    /// Returns the scenario label.
    pub fn label(&self) -> ScenarioLabel {
        self.label
    }

    /// Returns the intensities, zero-padded to the table length.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sum of the column (mm).
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Largest one-minute intensity (mm/min).
    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

/// Hyetograms of several scenarios on a shared minute index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutputTable {
    minutes: Vec<u32>,
    columns: Vec<OutputColumn>,
}

impl OutputTable {
    /// Minute index, `1..=n_rows`.
    pub fn minutes(&self) -> &[u32] {
        &self.minutes
    }

    /// Scenario columns sorted by return period, then duration.
    pub fn columns(&self) -> &[OutputColumn] {
        &self.columns
    }

    /// Number of rows (minutes).
    pub fn n_rows(&self) -> usize {
        self.minutes.len()
    }

    /// All headers, minute index first.
    pub fn headers(&self) -> Vec<String> {
        std::iter::once(MINUTE_HEADER.to_string())
            .chain(self.columns.iter().map(|c| c.label.to_string()))
            .collect()
    }

    /// Looks up a column by its label text (e.g. `"100,1h"`).
    pub fn column(&self, label: &str) -> Option<&OutputColumn> {
        let wanted = ScenarioLabel::parse(label)?;
        self.columns.iter().find(|c| c.label == wanted)
    }
}

/// Assembles hyetograms into one table.
///
/// The minute index spans the longest series; shorter series are
/// zero-padded at the end. Columns are ordered by return period and then
/// by labelled duration. When two series share a label the later one wins.
#[tracing::instrument(skip_all, fields(n_series = series.len()))]
pub fn repack(series: &[HyetogramSeries]) -> OutputTable {
    let n_rows = series.iter().map(HyetogramSeries::len).max().unwrap_or(0);

    let mut by_label: BTreeMap<ScenarioLabel, Vec<f64>> = BTreeMap::new();
    for s in series {
        let label = ScenarioLabel::new(s.return_period_years(), s.len() as u32);
        let mut values = vec![0.0; n_rows];
        values[..s.len()].copy_from_slice(s.intensities());
        if by_label.insert(label, values).is_some() {
            warn!(label = %label, "duplicate scenario label, keeping the later series");
        }
    }

    OutputTable {
        minutes: (1..=n_rows as u32).collect(),
        columns: by_label
            .into_iter()
            .map(|(label, values)| OutputColumn { label, values })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn series(tr: u32, hours: f64) -> HyetogramSeries {
        HyetogramSeries::build(tr, 50.0, hours).unwrap()
    }

    #[test]
    fn orders_columns_by_return_period_then_duration() {
        let table = repack(&[series(10, 1.0), series(2, 0.1), series(10, 0.1)]);
        assert_eq!(table.headers(), vec!["minute", "2,6min", "10,6min", "10,1h"]);
    }

    #[test]
    fn pads_short_series_with_zeros() {
        let table = repack(&[series(2, 0.1), series(2, 0.5)]);
        assert_eq!(table.n_rows(), 30);
        assert_eq!(table.minutes()[0], 1);
        assert_eq!(table.minutes()[29], 30);

        let short = table.column("2,6min").unwrap();
        assert_eq!(short.values().len(), 30);
        assert!(short.values()[6..].iter().all(|&v| v == 0.0));
        assert_abs_diff_eq!(short.total(), 50.0, epsilon = 1e-6);
        assert!(short.peak() > 50.0 / 6.0);
    }

    #[test]
    fn hour_labels_use_whole_hours() {
        let table = repack(&[series(100, 24.0), series(100, 10.0 / 60.0)]);
        assert_eq!(table.headers(), vec!["minute", "100,10min", "100,24h"]);
        assert_eq!(table.n_rows(), 1440);
    }

    #[test]
    fn duplicate_labels_keep_the_later_series() {
        let first = HyetogramSeries::build(5, 10.0, 1.0).unwrap();
        let second = HyetogramSeries::build(5, 20.0, 1.5).unwrap();
        let table = repack(&[first, second]);
        assert_eq!(table.columns().len(), 1);
        assert_eq!(table.n_rows(), 90);
        assert_abs_diff_eq!(table.columns()[0].total(), 20.0, epsilon = 1e-6);
    }

    #[test]
    fn empty_input() {
        let table = repack(&[]);
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.headers(), vec!["minute"]);
    }
}
