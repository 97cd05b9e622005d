//! Standard storm durations and their table labels.

/// The 16 standard durations, in minutes, from 6 min to 24 h.
pub const STANDARD_DURATIONS_MIN: [u32; 16] = [
    6, 10, 15, 20, 25, 30, 60, 120, 180, 240, 360, 480, 600, 720, 1080, 1440,
];

/// The standard durations in hours, ascending.
pub fn standard_durations() -> Vec<f64> {
    STANDARD_DURATIONS_MIN
        .iter()
        .map(|&m| f64::from(m) / 60.0)
        .collect()
}

/// Row label for a duration: `"<minutes> min"` below one hour, otherwise
/// `"<whole hours> h"`.
pub fn duration_label(duration_hours: f64) -> String {
    if duration_hours < 1.0 {
        format!("{} min", (duration_hours * 60.0).round_ties_even() as u32)
    } else {
        format!("{} h", duration_hours.trunc() as u32)
    }
}
