use approx::assert_relative_eq;
use taborga_idf::{
    BaseDepths, CoefficientSet, IdfError, ReturnPeriodDepth, ZoneCoefficients,
    compute_depth_table, interpolate_depth, standard_durations,
};

fn zone_a() -> CoefficientSet {
    CoefficientSet::new(vec![ZoneCoefficients::new("A", 65.0, 30.0).unwrap()])
}

// ---------------------------------------------------------------------------
// Zone A, TR 100, 150 mm
// ---------------------------------------------------------------------------
#[test]
fn zone_a_anchor_depths() {
    let base = BaseDepths::from_raw(150.0, 65.0, 30.0);
    assert_relative_eq!(base.depth_24h(), 171.0, epsilon = 1e-9);
    assert_relative_eq!(base.depth_1h(), 111.15, epsilon = 1e-9);
    assert_relative_eq!(base.depth_6min(), 51.3, epsilon = 1e-9);

    let at_1h = interpolate_depth(
        1.0,
        base.depth_6min(),
        base.depth_1h(),
        base.depth_24h(),
    )
    .unwrap();
    assert_eq!(at_1h, base.depth_1h());
}

#[test]
fn zone_a_full_table() {
    let depths = vec![ReturnPeriodDepth::new(100, 150.0).unwrap()];
    let table = compute_depth_table("A", &zone_a(), &depths, &standard_durations()).unwrap();

    let expected = [
        (6.0, 51.3),
        (10.0, 64.577_647_664_538_92),
        (30.0, 93.133_354_759_510_71),
        (60.0, 111.15),
        (120.0, 124.203_541_875_334_04),
        (720.0, 157.946_458_124_665_9),
        (1440.0, 171.0),
    ];
    for (minutes, depth) in expected {
        let got = table.depth(minutes / 60.0, 100).unwrap();
        assert_relative_eq!(got, depth, epsilon = 1e-9);
    }
}

#[test]
fn table_is_monotone_in_duration() {
    let depths = vec![
        ReturnPeriodDepth::new(2, 70.0).unwrap(),
        ReturnPeriodDepth::new(100, 150.0).unwrap(),
    ];
    let table = compute_depth_table("a", &zone_a(), &depths, &standard_durations()).unwrap();
    assert_eq!(table.return_periods(), &[2, 100]);

    for tr in [2, 100] {
        let column: Vec<f64> = table
            .durations()
            .iter()
            .map(|&h| table.depth(h, tr).unwrap())
            .collect();
        assert!(column.windows(2).all(|w| w[0] < w[1]), "TR {tr}: {column:?}");
    }
}

// ---------------------------------------------------------------------------
// Lookup failures
// ---------------------------------------------------------------------------
#[test]
fn unknown_zone_is_reported() {
    let depths = vec![ReturnPeriodDepth::new(10, 90.0).unwrap()];
    let err = compute_depth_table("Z", &zone_a(), &depths, &standard_durations()).unwrap_err();
    match err {
        IdfError::ZoneNotFound { zone, available } => {
            assert_eq!(zone, "Z");
            assert_eq!(available, vec!["A".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn per_return_period_records_override_zone_wide() {
    let coefficients = CoefficientSet::new(vec![
        ZoneCoefficients::new("B", 50.0, 20.0).unwrap(),
        ZoneCoefficients::new("B", 60.0, 25.0)
            .unwrap()
            .with_return_period(100),
    ]);
    let depths = vec![
        ReturnPeriodDepth::new(10, 100.0).unwrap(),
        ReturnPeriodDepth::new(100, 100.0).unwrap(),
    ];
    let table = compute_depth_table("B", &coefficients, &depths, &[1.0]).unwrap();
    assert_relative_eq!(table.depth(1.0, 10).unwrap(), 57.0, epsilon = 1e-9);
    assert_relative_eq!(table.depth(1.0, 100).unwrap(), 68.4, epsilon = 1e-9);
}
