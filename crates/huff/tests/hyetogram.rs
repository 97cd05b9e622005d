use approx::{assert_abs_diff_eq, assert_relative_eq};
use taborga_huff::{HuffError, HyetogramSeries, build_hyetogram, cumulative_percent};

// ---------------------------------------------------------------------------
// 2 h, 100 mm
// ---------------------------------------------------------------------------
#[test]
fn two_hour_storm() {
    let series = build_hyetogram(100.0, 2.0).unwrap();
    assert_eq!(series.len(), 120);

    let first = 100.0 * cumulative_percent(100.0 / 120.0, 2.0) / 100.0;
    assert_relative_eq!(series[0], first, epsilon = 1e-12);

    let cumulative: f64 = series.iter().sum();
    assert_abs_diff_eq!(cumulative, 100.0, epsilon = 1e-9);
}

#[test]
fn every_quartile_class_conserves_depth() {
    for hours in [0.1, 1.0, 6.0, 6.5, 12.0, 18.0, 24.0, 48.0] {
        let series = HyetogramSeries::build(25, 80.0, hours).unwrap();
        assert_eq!(series.len(), (hours * 60.0_f64).round() as usize);
        assert_abs_diff_eq!(series.total_depth(), 80.0, epsilon = 1e-9);
        assert!(series.intensities().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn cumulative_curve_is_bounded() {
    for hours in [1.0, 8.0, 20.0, 30.0] {
        for step in 0..=100 {
            let p = f64::from(step);
            let c = cumulative_percent(p, hours);
            assert!((0.0..=100.0).contains(&c), "{hours} h at {p}%: {c}");
        }
        assert_eq!(cumulative_percent(0.0, hours), 0.0);
        assert_eq!(cumulative_percent(100.0, hours), 100.0);
    }
}

#[test]
fn depth_scales_linearly() {
    let small = build_hyetogram(10.0, 3.0).unwrap();
    let large = build_hyetogram(30.0, 3.0).unwrap();
    for (s, l) in small.iter().zip(&large) {
        assert_relative_eq!(3.0 * s, *l, epsilon = 1e-12, max_relative = 1e-9);
    }
}

// ---------------------------------------------------------------------------
// Rejections
// ---------------------------------------------------------------------------
#[test]
fn rejects_invalid_inputs() {
    assert!(matches!(
        build_hyetogram(10.0, 0.0),
        Err(HuffError::Domain { .. })
    ));
    assert!(matches!(
        build_hyetogram(-1.0, 1.0),
        Err(HuffError::Domain { .. })
    ));
    assert!(matches!(
        build_hyetogram(10.0, 0.001),
        Err(HuffError::InvalidDuration { .. })
    ));
}

#[test]
fn zero_depth_gives_zero_series() {
    let series = build_hyetogram(0.0, 0.5).unwrap();
    assert_eq!(series.len(), 30);
    assert!(series.iter().all(|&v| v == 0.0));
}
