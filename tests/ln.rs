//! Accuracy tests for the scalar and vector logarithm approximations.
//!
//! The reference is the standard library `f32::ln`. Error bounds were
//! measured over the positive normal range and are pinned here.

use fastlog::{
    approx_log, approx_log_lane, approx_log_vector, approx_log_vector_with, Backend, LANE_COUNT,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Maximum absolute error of the scalar cubic.
const SCALAR_ABS_BOUND: f32 = 2.5e-3;

/// Vector error bound, scaled by `max(1, |ln x|)`.
const VECTOR_REL_BOUND: f32 = 1e-6;

/// Maximum distance between the vector and scalar paths.
const PARITY_BOUND: f32 = 2.5e-3;

/// Inputs spanning every positive normal float: a geometric sweep from
/// `f32::MIN_POSITIVE` to `f32::MAX` plus random normal bit patterns.
fn sample_inputs() -> Vec<f32> {
    let mut inputs = Vec::new();

    let mut x = f32::MIN_POSITIVE;
    while x < f32::MAX / 1.000_7 {
        inputs.push(x);
        x *= 1.000_7;
    }
    inputs.push(f32::MAX);

    // Uniform over bit patterns, so every binade gets the same weight
    let mut rng = StdRng::seed_from_u64(12345);
    let (lo, hi) = (f32::MIN_POSITIVE.to_bits(), f32::MAX.to_bits());
    inputs.extend((0..20_000).map(|_| f32::from_bits(rng.random_range(lo..=hi))));

    inputs
}

fn vector_tolerance(expected: f32) -> f32 {
    VECTOR_REL_BOUND * expected.abs().max(1.0)
}

fn run_lanes(backend: Backend, inputs: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(inputs.len());
    for chunk in inputs.chunks(LANE_COUNT) {
        let mut xs = [1.0f32; LANE_COUNT];
        xs[..chunk.len()].copy_from_slice(chunk);
        out.extend_from_slice(&approx_log_vector_with(backend, xs)[..chunk.len()]);
    }
    out
}

/// Test the scalar approximation against std over a dense sample.
#[test]
fn test_scalar_error_bound() {
    let mut max_abs_error = 0.0f32;
    let mut max_rel_error = 0.0f32;

    for x in sample_inputs() {
        let expected = x.ln();
        let actual = approx_log(x);
        let absolute_error = (actual - expected).abs();

        assert!(
            absolute_error <= SCALAR_ABS_BOUND,
            "Scalar error too large for input {x}: approx={actual}, std={expected}, abs_error={absolute_error:.2e}"
        );

        max_abs_error = max_abs_error.max(absolute_error);
        if expected.abs() >= 1.0 {
            max_rel_error = max_rel_error.max(absolute_error / expected.abs());
        }
    }

    println!("Scalar max absolute error: {max_abs_error:.2e}");
    println!("Scalar max relative error (|ln x| >= 1): {max_rel_error:.2e}");

    assert!(max_rel_error <= SCALAR_ABS_BOUND);
}

#[test]
fn test_scalar_concrete_values() {
    let cases = [
        (1.0f32, 0.0f32),
        (2.718_281_8, 1.0),
        (8.0, 2.0794),
        (0.5, -0.6931),
    ];

    for (input, expected) in cases {
        let result = approx_log(input);
        println!("approx_log({input}) = {result:.6} (expected ~{expected})");
        assert!(
            (result - expected).abs() < SCALAR_ABS_BOUND,
            "approx_log({input}) = {result}, expected ~{expected}"
        );
    }
}

#[test]
fn test_scalar_identity_anchor() {
    assert!(approx_log(1.0).abs() < 1e-6);
}

/// ln(2x) = ln(x) + ln(2): the mantissa is unchanged, only the exponent moves.
#[test]
fn test_scalar_scaling_law() {
    for x in sample_inputs() {
        let doubled = 2.0 * x;
        if !doubled.is_finite() {
            continue;
        }
        let delta = approx_log(doubled) - approx_log(x);
        assert!(
            (delta - std::f32::consts::LN_2).abs() <= 5e-5,
            "Scaling law broken at {x}: delta={delta}"
        );
    }
}

#[test]
fn test_scalar_monotonic_within_bound() {
    let mut inputs = sample_inputs();
    inputs.sort_by(f32::total_cmp);

    for pair in inputs.windows(2) {
        let (lo, hi) = (approx_log(pair[0]), approx_log(pair[1]));
        assert!(
            lo <= hi + SCALAR_ABS_BOUND,
            "Monotonicity broken between {} and {}: {lo} > {hi}",
            pair[0],
            pair[1]
        );
    }
}

/// The lane kernel itself, independent of which hardware is present.
#[test]
fn test_portable_vector_error_bound() {
    let inputs = sample_inputs();
    let results = run_lanes(Backend::Portable, &inputs);

    let mut max_scaled_error = 0.0f32;
    for (&x, &actual) in inputs.iter().zip(results.iter()) {
        let expected = x.ln();
        let error = (actual - expected).abs();
        assert!(
            error <= vector_tolerance(expected),
            "Vector error too large for input {x}: lanes={actual}, std={expected}, error={error:.2e}"
        );
        max_scaled_error = max_scaled_error.max(error / expected.abs().max(1.0));
    }

    println!("Portable lanes max scaled error: {max_scaled_error:.2e}");
}

#[test]
fn test_detected_backend_error_bound() {
    let backend = Backend::detect();
    println!("Detected backend: {backend}");

    let inputs = sample_inputs();
    for &x in &inputs {
        let expected = x.ln();
        let actual = approx_log_vector([x; LANE_COUNT]);

        // Every lane computes the same value for a broadcast input
        assert!(actual.iter().all(|&lane| lane.to_bits() == actual[0].to_bits()));

        let error = (actual[0] - expected).abs();
        let tolerance = if backend == Backend::Fallback {
            SCALAR_ABS_BOUND
        } else {
            vector_tolerance(expected)
        };
        assert!(
            error <= tolerance,
            "{backend} error too large for input {x}: {} vs {expected}",
            actual[0]
        );
    }
}

#[test]
fn test_vector_scalar_parity() {
    let inputs = sample_inputs();

    for backend in [Backend::detect(), Backend::Portable] {
        let results = run_lanes(backend, &inputs);
        for (&x, &lane) in inputs.iter().zip(results.iter()) {
            let scalar = approx_log(x);
            assert!(
                (lane - scalar).abs() <= PARITY_BOUND,
                "{backend}: lanes={lane}, scalar={scalar} for input {x}"
            );
        }
    }
}

#[test]
fn test_fallback_matches_scalar_exactly() {
    let inputs = sample_inputs();
    let results = run_lanes(Backend::Fallback, &inputs);

    for (&x, &lane) in inputs.iter().zip(results.iter()) {
        assert_eq!(
            lane.to_bits(),
            approx_log(x).to_bits(),
            "Fallback differs from scalar for input {x}"
        );
    }
}

#[test]
fn test_unavailable_backend_still_produces_values() {
    // Whichever of these is missing on this machine must degrade, not crash
    let xs = [0.5f32, 1.0, 2.0, 1000.0];
    for backend in [Backend::Sse2, Backend::Neon] {
        let result = approx_log_vector_with(backend, xs);
        for (x, r) in xs.iter().zip(result.iter()) {
            assert!((r - x.ln()).abs() <= SCALAR_ABS_BOUND, "{backend} on {x}: {r}");
        }
    }
}

#[test]
fn test_vector_concrete_values() {
    let result = approx_log_vector_with(Backend::Portable, [1.0, 2.718_281_8, 8.0, 0.5]);
    let expected = [0.0f32, 1.0, 2.079_441_5, -0.693_147_2];

    for (r, e) in result.iter().zip(expected.iter()) {
        assert!((r - e).abs() <= vector_tolerance(*e), "{r} vs {e}");
    }
}

#[test]
fn test_vector_monotonic_within_bound() {
    let mut inputs = sample_inputs();
    inputs.sort_by(f32::total_cmp);
    let results = run_lanes(Backend::Portable, &inputs);

    for pair in results.windows(2) {
        assert!(pair[0] <= pair[1] + 2.0 * vector_tolerance(pair[1]));
    }
}

/// Exponents -126 and 127, where the exponent term dominates the result.
#[test]
fn test_extreme_binades() {
    let lowest = f32::MIN_POSITIVE.to_bits();
    let highest = f32::MAX.to_bits();
    let inputs: Vec<f32> = (lowest..lowest + (1 << 23))
        .step_by(61)
        .chain((highest - (1 << 23) + 1..=highest).step_by(61))
        .map(f32::from_bits)
        .collect();

    let lanes = run_lanes(Backend::Portable, &inputs);
    for (&x, &lane) in inputs.iter().zip(lanes.iter()) {
        let expected = x.ln();
        assert!(
            (lane - expected).abs() <= vector_tolerance(expected),
            "Vector error too large for input {x:e}: lanes={lane}, std={expected}"
        );
        assert!(
            (approx_log(x) - expected).abs() <= SCALAR_ABS_BOUND,
            "Scalar error too large for input {x:e}"
        );
    }
}

#[test]
fn test_lane_entry_point() {
    for &x in &[1.0e-20f32, 0.75, 1.0, 3.0, 1.0e20] {
        let single = approx_log_lane(x);
        assert_eq!(single.to_bits(), approx_log_vector([x; LANE_COUNT])[0].to_bits());
    }
}

#[test]
fn test_domain_violations_are_finite() {
    let specials = [0.0f32, -3.0, f32::INFINITY, f32::NAN];

    for backend in [Backend::detect(), Backend::Portable, Backend::Fallback] {
        let result = approx_log_vector_with(backend, specials);
        assert!(result.iter().all(|r| r.is_finite()), "{backend}: {result:?}");
    }
    assert!(specials.iter().all(|&x| approx_log(x).is_finite()));
}
