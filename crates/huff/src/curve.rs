//! Huff cumulative-percentage curves.
//!
//! Each branch is a least-squares polynomial in the elapsed-time percentage.
//! Coefficients are listed from the highest degree down to the constant term
//! and must be kept exactly as published.

/// Elapsed-time percentage at which the third-quartile curve switches from
/// its lower to its upper branch (inclusive on the lower side).
pub const CLASS_III_BREAK_PERCENT: f64 = 56.0;

/// Elapsed-time percentage at which the fourth-quartile curve switches from
/// its lower to its upper branch (exclusive on the lower side).
pub const CLASS_IV_BREAK_PERCENT: f64 = 78.0;

const CLASS_I_MAX_HOURS: f64 = 6.0;
const CLASS_II_MAX_HOURS: f64 = 12.0;
const CLASS_III_MAX_HOURS: f64 = 24.0;

// Degree 17.
const CLASS_I: [f64; 18] = [
    4.02817498644692E-26,
    -3.52064227661328E-23,
    1.40597068416381E-20,
    -3.39749477703355E-18,
    5.54497997392431E-16,
    -6.45955102401168E-14,
    5.53311153502673E-12,
    -3.53601335024796E-10,
    1.69157185342832E-08,
    -6.01477294241886E-07,
    1.55857516691692E-05,
    -2.82804931812996E-04,
    3.30423804127657E-03,
    -1.95440226611134E-02,
    -1.78285694295392E-02,
    0.843704743033219,
    0.460519860597484,
    0.105509396306812,
];

// Degree 19.
const CLASS_II: [f64; 20] = [
    1.38673921100494E-29,
    -1.21613849024923E-26,
    4.81175587207619E-24,
    -1.13061048055895E-21,
    1.74322289744585E-19,
    -1.82955175694565E-17,
    1.29362605433794E-15,
    -5.57716800214043E-14,
    7.05502076331805E-13,
    8.26435609777427E-11,
    -6.63085914357193E-09,
    2.63606231276545E-07,
    -6.63478625779216E-06,
    1.10122543439505E-04,
    -1.19013879689829E-03,
    8.05401322603745E-03,
    -3.34138101445273E-02,
    0.107328692602926,
    0.434452891319131,
    -9.29064257700887E-03,
];

// Degree 13, elapsed <= 56 %.
const CLASS_III_LOW: [f64; 14] = [
    -7.60644888142597E-19,
    2.26532324896959E-16,
    -2.77322200030732E-14,
    1.74614948354883E-12,
    -5.42723072107129E-11,
    2.88453725150229E-10,
    3.40120100322963E-08,
    -9.87326768780573E-07,
    4.6775676050966E-06,
    2.53896092445158E-04,
    -5.65737144328779E-03,
    5.39029497668964E-02,
    0.359808518609887,
    -5.32553512302088E-12,
];

// Degree 8, elapsed > 56 %.
const CLASS_III_HIGH: [f64; 9] = [
    7.93878771768824E-11,
    -5.24871539129577E-08,
    1.51310191157137E-05,
    -2.48406960877551E-03,
    0.25398132631186,
    -16.5564133934408,
    671.654540274205,
    -15489.8757952666,
    155336.538705823,
];

// Degree 13, elapsed < 78 %.
const CLASS_IV_LOW: [f64; 14] = [
    4.45646156443285E-20,
    -2.22681580593717E-17,
    4.96794969032244E-15,
    -6.5250621619299E-13,
    5.59641539762932E-11,
    -3.28222385169418E-09,
    1.33763527344691E-07,
    -3.76248289158519E-06,
    7.06366898909776E-05,
    -8.12975145227206E-04,
    4.3426645265125E-03,
    1.05914948857879E-02,
    0.30574957410383,
    2.4217656685223E-04,
];

// Degree 8, elapsed >= 78 %.
const CLASS_IV_HIGH: [f64; 9] = [
    4.81964349956249E-10,
    -2.71720789296904E-07,
    6.08665963510088E-05,
    -0.006357548911514,
    0.185523370306902,
    25.3341694344528,
    -2889.70554544436,
    119076.774334982,
    -1835700.24767339,
];

/// Huff quartile class, chosen by total storm duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quartile {
    /// Storms up to 6 h.
    First,
    /// Storms longer than 6 h, up to 12 h.
    Second,
    /// Storms longer than 12 h, up to 24 h.
    Third,
    /// Storms longer than 24 h.
    Fourth,
}

impl Quartile {
    /// Classifies a storm by its duration in hours.
    pub fn for_duration(duration_hours: f64) -> Self {
        if duration_hours <= CLASS_I_MAX_HOURS {
            Self::First
        } else if duration_hours <= CLASS_II_MAX_HOURS {
            Self::Second
        } else if duration_hours <= CLASS_III_MAX_HOURS {
            Self::Third
        } else {
            Self::Fourth
        }
    }
}

/// One polynomial branch of the Huff curve family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HuffCurve {
    /// First quartile.
    ClassI,
    /// Second quartile.
    ClassII,
    /// Third quartile, elapsed ≤ 56 %.
    ClassIIILow,
    /// Third quartile, elapsed > 56 %.
    ClassIIIHigh,
    /// Fourth quartile, elapsed < 78 %.
    ClassIVLow,
    /// Fourth quartile, elapsed ≥ 78 %.
    ClassIVHigh,
}

impl HuffCurve {
    /// Picks the branch for an elapsed-time percentage and storm duration.
    pub fn select(percent_elapsed: f64, duration_hours: f64) -> Self {
        match Quartile::for_duration(duration_hours) {
            Quartile::First => Self::ClassI,
            Quartile::Second => Self::ClassII,
            Quartile::Third if percent_elapsed <= CLASS_III_BREAK_PERCENT => Self::ClassIIILow,
            Quartile::Third => Self::ClassIIIHigh,
            Quartile::Fourth if percent_elapsed < CLASS_IV_BREAK_PERCENT => Self::ClassIVLow,
            Quartile::Fourth => Self::ClassIVHigh,
        }
    }

    /// Returns the quartile class this branch belongs to.
    pub fn quartile(&self) -> Quartile {
        match self {
            Self::ClassI => Quartile::First,
            Self::ClassII => Quartile::Second,
            Self::ClassIIILow | Self::ClassIIIHigh => Quartile::Third,
            Self::ClassIVLow | Self::ClassIVHigh => Quartile::Fourth,
        }
    }

    /// Returns the coefficients, highest degree first.
    pub fn coefficients(&self) -> &'static [f64] {
        match self {
            Self::ClassI => &CLASS_I,
            Self::ClassII => &CLASS_II,
            Self::ClassIIILow => &CLASS_III_LOW,
            Self::ClassIIIHigh => &CLASS_III_HIGH,
            Self::ClassIVLow => &CLASS_IV_LOW,
            Self::ClassIVHigh => &CLASS_IV_HIGH,
        }
    }

    /// Returns the polynomial degree.
    pub fn degree(&self) -> usize {
        self.coefficients().len() - 1
    }

    /// Evaluates the raw, unclamped polynomial at `percent_elapsed`.
    ///
    /// Terms are formed as `c · x^k` and summed from the highest degree
    /// down. The upper branches of classes III and IV cancel large terms, so
    /// the summation order is part of the result.
    pub fn eval(&self, percent_elapsed: f64) -> f64 {
        let degree = self.degree();
        self.coefficients()
            .iter()
            .enumerate()
            .map(|(i, &c)| match degree - i {
                0 => c,
                1 => c * percent_elapsed,
                k => c * percent_elapsed.powf(k as f64),
            })
            .fold(0.0, |acc, term| acc + term)
    }
}

/// Cumulative percentage of storm depth fallen after `percent_elapsed`
/// percent of a storm lasting `duration_hours`.
///
/// Returns exactly 0 for `percent_elapsed <= 0` and exactly 100 for
/// `percent_elapsed >= 100`; elsewhere the selected polynomial is clamped to
/// `[0, 100]`.
pub fn cumulative_percent(percent_elapsed: f64, duration_hours: f64) -> f64 {
    if percent_elapsed <= 0.0 {
        return 0.0;
    }
    if percent_elapsed >= 100.0 {
        return 100.0;
    }
    HuffCurve::select(percent_elapsed, duration_hours)
        .eval(percent_elapsed)
        .clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DURATIONS: [f64; 9] = [0.1, 1.0, 6.0, 6.5, 12.0, 18.0, 24.0, 30.0, 72.0];

    #[test]
    fn quartile_boundaries_are_inclusive_upper() {
        assert_eq!(Quartile::for_duration(0.1), Quartile::First);
        assert_eq!(Quartile::for_duration(6.0), Quartile::First);
        assert_eq!(Quartile::for_duration(6.0001), Quartile::Second);
        assert_eq!(Quartile::for_duration(12.0), Quartile::Second);
        assert_eq!(Quartile::for_duration(12.5), Quartile::Third);
        assert_eq!(Quartile::for_duration(24.0), Quartile::Third);
        assert_eq!(Quartile::for_duration(24.5), Quartile::Fourth);
    }

    #[test]
    fn branch_thresholds() {
        assert_eq!(HuffCurve::select(56.0, 18.0), HuffCurve::ClassIIILow);
        assert_eq!(HuffCurve::select(56.0001, 18.0), HuffCurve::ClassIIIHigh);
        assert_eq!(HuffCurve::select(77.9999, 30.0), HuffCurve::ClassIVLow);
        assert_eq!(HuffCurve::select(78.0, 30.0), HuffCurve::ClassIVHigh);
        assert_eq!(HuffCurve::select(90.0, 3.0), HuffCurve::ClassI);
        assert_eq!(HuffCurve::select(10.0, 8.0), HuffCurve::ClassII);
    }

    #[test]
    fn degrees() {
        assert_eq!(HuffCurve::ClassI.degree(), 17);
        assert_eq!(HuffCurve::ClassII.degree(), 19);
        assert_eq!(HuffCurve::ClassIIILow.degree(), 13);
        assert_eq!(HuffCurve::ClassIIIHigh.degree(), 8);
        assert_eq!(HuffCurve::ClassIVLow.degree(), 13);
        assert_eq!(HuffCurve::ClassIVHigh.degree(), 8);
    }

    #[test]
    fn branch_quartiles() {
        assert_eq!(HuffCurve::ClassIIIHigh.quartile(), Quartile::Third);
        assert_eq!(HuffCurve::ClassIVLow.quartile(), Quartile::Fourth);
    }

    #[test]
    fn eval_at_zero_is_constant_term() {
        assert_eq!(HuffCurve::ClassI.eval(0.0), 0.105509396306812);
        assert_eq!(HuffCurve::ClassIVHigh.eval(0.0), -1835700.24767339);
    }

    #[test]
    fn boundaries_are_exact() {
        for &d in &DURATIONS {
            assert_eq!(cumulative_percent(0.0, d), 0.0);
            assert_eq!(cumulative_percent(-5.0, d), 0.0);
            assert_eq!(cumulative_percent(100.0, d), 100.0);
            assert_eq!(cumulative_percent(140.0, d), 100.0);
        }
    }

    #[test]
    fn output_is_clamped() {
        for &d in &DURATIONS {
            for i in 0..=1000 {
                let p = f64::from(i) / 10.0;
                let v = cumulative_percent(p, d);
                assert!((0.0..=100.0).contains(&v), "p={p} d={d} -> {v}");
            }
        }
    }

    #[test]
    fn curves_rise_overall() {
        for &d in &DURATIONS {
            let early = cumulative_percent(10.0, d);
            let mid = cumulative_percent(50.0, d);
            let late = cumulative_percent(90.0, d);
            assert!(early < mid && mid < late, "d={d}: {early} {mid} {late}");
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        for &d in &DURATIONS {
            for p in [0.8333333333333334, 33.3, 56.0, 78.0, 99.99] {
                let a = cumulative_percent(p, d);
                let b = cumulative_percent(p, d);
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
    }

    #[test]
    fn reference_values() {
        // (elapsed %, duration h, expected cumulative %)
        let cases: &[(f64, f64, f64)] = &[
            (0.8333333333333334, 2.0, 1.0566767953423652),
            (25.0, 2.0, 59.54805941147282),
            (50.0, 2.0, 81.86194430634467),
            (75.0, 2.0, 92.08728563353787),
            (10.0, 8.0, 7.537479134104489),
            (50.0, 8.0, 70.11169690057903),
            (90.0, 8.0, 96.82657294731239),
            (30.0, 18.0, 19.04999999992968),
            (56.0, 18.0, 46.84958505986329),
            (70.0, 18.0, 79.05707825836726),
            (95.0, 18.0, 97.4221110790968),
            (40.0, 48.0, 22.05381533356434),
            (77.0, 48.0, 53.73612736202018),
            (78.0, 48.0, 55.308804294560105),
            (92.0, 48.0, 87.65775506617501),
        ];
        for &(p, d, expected) in cases {
            assert_relative_eq!(
                cumulative_percent(p, d),
                expected,
                epsilon = 1e-8,
                max_relative = 1e-9
            );
        }
    }
}
