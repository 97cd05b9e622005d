//! Parsing and formatting of row, column and scenario labels.

use std::fmt;

/// Parses a number written with either `.` or `,` as decimal separator.
///
/// Returns `None` for blank text, unparseable text, and non-finite values.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses a duration row label into hours.
///
/// `"<n> min"` (integer minutes) and `"<x> h"` (decimal hours) are
/// accepted; surrounding whitespace is ignored. Returns `None` for anything
/// else and for non-positive durations.
pub fn parse_duration_label(label: &str) -> Option<f64> {
    let label = label.trim();
    let hours = if label.contains("min") {
        let minutes: u32 = label.replace("min", "").trim().parse().ok()?;
        f64::from(minutes) / 60.0
    } else if label.contains('h') {
        label.replace('h', "").trim().parse::<f64>().ok()?
    } else {
        return None;
    };
    (hours.is_finite() && hours > 0.0).then_some(hours)
}

/// Column header for a return period: `"TR <n>"`.
pub fn return_period_label(return_period_years: u32) -> String {
    format!("TR {return_period_years}")
}

/// Parses a return-period column header (`"TR <n>"`, or a bare positive
/// integer).
pub fn parse_return_period_label(label: &str) -> Option<u32> {
    label
        .replace("TR", "")
        .trim()
        .parse()
        .ok()
        .filter(|&tr| tr > 0)
}

/// Identity of a hyetogram column: return period plus duration.
///
/// Durations under an hour are labelled in minutes, longer ones in whole
/// hours, so two durations that fall in the same whole hour share a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScenarioLabel {
    return_period_years: u32,
    label_minutes: u32,
}

impl ScenarioLabel {
    /// Label for a scenario of `duration_minutes` minutes.
    pub fn new(return_period_years: u32, duration_minutes: u32) -> Self {
        let label_minutes = if duration_minutes < 60 {
            duration_minutes
        } else {
            duration_minutes / 60 * 60
        };
        Self {
            return_period_years,
            label_minutes,
        }
    }

    /// Parses `"<tr>,<n>min"` or `"<tr>,<n>h"`.
    pub fn parse(label: &str) -> Option<Self> {
        let (tr, duration) = label.trim().split_once(',')?;
        let return_period_years = tr.trim().parse().ok()?;
        let duration = duration.trim();
        let minutes = if let Some(m) = duration.strip_suffix("min") {
            m.trim().parse().ok()?
        } else if let Some(h) = duration.strip_suffix('h') {
            h.trim().parse::<u32>().ok()?.checked_mul(60)?
        } else {
            return None;
        };
        Some(Self::new(return_period_years, minutes))
    }

    /// Returns the return period in years.
    pub fn return_period_years(&self) -> u32 {
        self.return_period_years
    }

    /// Duration as expressed by the label, in minutes.
    pub fn label_minutes(&self) -> u32 {
        self.label_minutes
    }
}

impl fmt::Display for ScenarioLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label_minutes < 60 {
            write!(f, "{},{}min", self.return_period_years, self.label_minutes)
        } else {
            write!(f, "{},{}h", self.return_period_years, self.label_minutes / 60)
        }
    }
}
