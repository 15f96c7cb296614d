//! Testing utilities.
//!
//! Assertion helpers and synthetic datasets shared by unit and integration
//! tests. Kept in the library so `tests/` can use them too.

use ndarray::{Array1, Array2};

/// Default tolerance for floating point comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Assert two prediction slices match element-wise within `tolerance`.
///
/// # Panics
///
/// Panics on length mismatch or when any pair differs by more than
/// `tolerance`.
pub fn assert_all_close(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "prediction length {} != expected length {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            approx::abs_diff_eq!(*a, *e, epsilon = tolerance),
            "index {i}: {a} differs from {e} by more than {tolerance}"
        );
    }
}

/// Single-feature step dataset: `x = 0..n`, `y` jumps from `low` to `high`
/// at the midpoint.
pub fn step_dataset(n: usize, low: f64, high: f64) -> (Array2<f64>, Array1<f64>) {
    let x = Array2::from_shape_fn((n, 1), |(r, _)| r as f64);
    let y = Array1::from_shape_fn(n, |r| if r < n / 2 { low } else { high });
    (x, y)
}
