// File: crates/easel-core/tests/axis_range.rs
// Purpose: Validate nice axis ranges: worked examples, rejected inputs, and invariants over a sweep.

use easel_core::axis::{nice_range, STEP_MULTIPLIERS, MAX_SEGMENTS};
use easel_core::ChartError;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn zero_to_twenty_three_uses_step_five() {
    // step 2 -> 12 segments, step 2.5 -> 10 segments, step 5 -> 5 segments
    let r = nice_range(0.0, 23.0).expect("valid range");
    assert_eq!(r.segment_count, 5);
    assert!(approx(r.low, 0.0));
    assert!(approx(r.high, 25.0));
    assert!(approx(r.step(), 5.0));
}

#[test]
fn negative_low_expands_downward() {
    // span 11.9 -> magnitude 1; step 2 gives [-4, 10] = 7 segments, step 2.5 gives [-5, 10] = 6
    let r = nice_range(-3.7, 8.2).expect("valid range");
    assert_eq!(r.segment_count, 6);
    assert!(approx(r.low, -5.0));
    assert!(approx(r.high, 10.0));
}

#[test]
fn unit_range_uses_smallest_multiplier() {
    let r = nice_range(0.0, 1.0).expect("valid range");
    assert_eq!(r.segment_count, 5);
    assert!(approx(r.low, 0.0));
    assert!(approx(r.high, 1.0));
    assert!(approx(r.step(), 0.2));
}

#[test]
fn small_fractional_range() {
    // span 0.045 -> magnitude -2; steps 0.002, 0.0025 and 0.005 need more than 6 segments
    let r = nice_range(0.012, 0.057).expect("valid range");
    assert!(r.low <= 0.012 + 1e-12);
    assert!(r.high >= 0.057 - 1e-12);
    assert!(r.segment_count <= MAX_SEGMENTS);
    assert!(approx(r.step(), 0.01));
}

#[test]
fn gridline_values_run_high_to_low() {
    let r = nice_range(0.0, 23.0).unwrap();
    let values = r.gridline_values();
    assert_eq!(values.len(), 6);
    let want = [25.0, 20.0, 15.0, 10.0, 5.0, 0.0];
    for (got, want) in values.iter().zip(want) {
        assert!(approx(*got, want), "{got} != {want}");
    }
}

#[test]
fn equal_bounds_are_rejected() {
    assert_eq!(nice_range(4.0, 4.0), Err(ChartError::DegenerateRange { low: 4.0, high: 4.0 }));
}

#[test]
fn inverted_and_non_finite_bounds_are_rejected() {
    assert!(matches!(nice_range(5.0, 1.0), Err(ChartError::DegenerateRange { .. })));
    assert!(nice_range(f64::NAN, 1.0).is_err());
    assert!(nice_range(0.0, f64::INFINITY).is_err());
}

#[test]
fn invariants_hold_over_sweep() {
    let lows = [-1234.5, -50.0, -3.3, -0.07, 0.0, 0.001, 1.0, 17.0, 999.0, 1.0e6];
    let spans = [0.003, 0.09, 0.5, 1.0, 2.7, 9.99, 10.0, 42.0, 123.4, 5_000.0, 7.5e7];
    for &low in &lows {
        for &span in &spans {
            let high = low + span;
            let r = nice_range(low, high).unwrap();
            let tol = 1e-9 * (span + low.abs() + high.abs());

            assert!(r.low <= low + tol, "low {} > {} for [{low}, {high}]", r.low, low);
            assert!(r.high >= high - tol, "high {} < {} for [{low}, {high}]", r.high, high);

            if r.is_fallback() {
                assert_eq!((r.low, r.high), (low, high));
                continue;
            }
            assert!(r.segment_count >= 1 && r.segment_count <= MAX_SEGMENTS);

            // step must be the first multiplier that fits
            let scale = 10f64.powf((high - low).log10().floor());
            let first_fit = STEP_MULTIPLIERS
                .iter()
                .map(|m| m * scale)
                .find(|step| {
                    let lo = (low / step).floor() * step;
                    let hi = (high / step).ceil() * step;
                    ((hi - lo) / step).round() <= MAX_SEGMENTS as f64
                })
                .expect("some multiplier fits");
            assert!((r.step() - first_fit).abs() <= 1e-6 * first_fit, "step {} != {first_fit} for [{low}, {high}]", r.step());
        }
    }
}
