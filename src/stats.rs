//! Descriptive statistics for repeated lab measurements.
//!
//! # Algorithms
//!
//! - **Mean**: Kahan compensated summation for O(ε) error independent of n.
//! - **Successive-difference mean**: pairs each reading in the first half
//!   with the reading `n/2` places later, cancelling a linear drift.
//! - **Standard deviation**: two-pass, around a caller-supplied mean, with
//!   Bessel's correction.

use crate::error::{LabError, Result};

/// Computes the arithmetic mean using Kahan compensated summation.
///
/// # Errors
/// [`LabError::InsufficientSamples`] if `values` is empty.
///
/// # Examples
/// ```
/// use u_labcalc::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// assert_eq!(mean(&[5.0]).unwrap(), 5.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(LabError::InsufficientSamples {
            required: 1,
            actual: 0,
        });
    }
    Ok(kahan_sum(values) / values.len() as f64)
}

/// Averages readings by the successive-difference method.
///
/// With `half = n / 2`, forms `|values[i + half] − values[i]|` for
/// `i ∈ [0, n − half)` and returns their mean. For a quantity that
/// changes uniformly between readings (a ramped voltage, the positions of
/// equally spaced fringes) each difference spans the same number of
/// steps, so the result is `half` steps' worth of change with a constant
/// offset cancelled.
///
/// Returns `0.0` when there are no differences to average (empty input).
///
/// # Examples
/// ```
/// use u_labcalc::stats::successive_difference_mean;
/// // half = 2: |2 − 1| and |5 − 3|
/// assert_eq!(successive_difference_mean(&[1.0, 3.0, 2.0, 5.0]), 1.5);
/// assert_eq!(successive_difference_mean(&[]), 0.0);
/// ```
pub fn successive_difference_mean(values: &[f64]) -> f64 {
    let n = values.len();
    let half = n / 2;
    let diffs: Vec<f64> = (0..n - half)
        .map(|i| (values[i + half] - values[i]).abs())
        .collect();
    if diffs.is_empty() {
        return 0.0;
    }
    kahan_sum(&diffs) / diffs.len() as f64
}

/// Computes the sample standard deviation around a given mean.
///
/// ```text
/// s = √( Σ (xᵢ − x̄)² / (n − 1) )
/// ```
///
/// The mean is taken as an argument so the same value reported to the
/// student is the one the spread is measured against.
///
/// # Errors
/// [`LabError::InsufficientSamples`] if `values.len() < 2`.
///
/// # Examples
/// ```
/// use u_labcalc::stats::sample_standard_deviation;
/// let s = sample_standard_deviation(&[2.0, 4.0, 6.0], 4.0).unwrap();
/// assert_eq!(s, 2.0);
/// ```
pub fn sample_standard_deviation(values: &[f64], mean: f64) -> Result<f64> {
    let n = values.len();
    if n < 2 {
        return Err(LabError::InsufficientSamples {
            required: 2,
            actual: n,
        });
    }
    let squares: Vec<f64> = values.iter().map(|&x| (x - mean) * (x - mean)).collect();
    Ok((kahan_sum(&squares) / (n - 1) as f64).sqrt())
}

/// Neumaier's variant of Kahan compensated summation.
///
/// Also correct when an addend is larger in magnitude than the running sum.
///
/// # Examples
/// ```
/// use u_labcalc::stats::kahan_sum;
/// assert_eq!(kahan_sum(&[1e16, 1.0, -1e16]), 1.0);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
