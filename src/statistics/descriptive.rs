//! Location and spread reductions (sum, mean, standard deviation)
//!
//! Each function is a single pass (two for the standard deviation) over the
//! group slice and leaves it untouched.

use crate::math;

/// Sum of the group
pub fn sum(data: &[f64]) -> f64 {
    let mut total = 0.0;
    for &x in data {
        total += x;
    }
    total
}

/// Arithmetic mean of the group
///
/// `data` must not be empty; an empty slice yields NaN.
pub fn mean(data: &[f64]) -> f64 {
    sum(data) / data.len() as f64
}

/// Sample standard deviation (Bessel's correction, denominator `n - 1`)
///
/// A group whose values are all identical has a standard deviation of
/// exactly 0. That short-circuit also covers single-element groups, where
/// `n - 1` would be zero.
///
/// # Example
///
/// ```
/// use groupstats::statistics::sd;
///
/// assert_eq!(sd(&[4.0, 4.0, 4.0]), 0.0);
/// assert!((sd(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]) - 2.138).abs() < 1e-3);
/// ```
pub fn sd(data: &[f64]) -> f64 {
    if all_same(data) {
        return 0.0;
    }

    let center = mean(data);
    let mut squares = 0.0;
    for &x in data {
        let d = x - center;
        squares += d * d;
    }

    math::sqrt(squares / (data.len() - 1) as f64)
}

/// Whether every value equals the first one
///
/// Empty and single-element groups are trivially constant. NaN never
/// compares equal, so a group containing NaN is not constant.
pub fn all_same(data: &[f64]) -> bool {
    match data.split_first() {
        Some((&first, rest)) => rest.iter().all(|&x| x == first),
        None => true,
    }
}

/// Whether the group is in non-decreasing order
///
/// Any adjacent pair with the left value greater than the right one breaks
/// the order; pairs involving NaN do not.
pub fn is_sorted(data: &[f64]) -> bool {
    data.windows(2).all(|pair| !(pair[0] > pair[1]))
}
