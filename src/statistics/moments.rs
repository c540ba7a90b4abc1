//! Higher standardized moments (skewness, kurtosis)
//!
//! Both use population central moments (divided by `n`, not `n - 1`) and
//! return [`MISSING`] for constant groups, where the moments vanish.

use super::descriptive::{all_same, mean};
use crate::math;
use crate::missing::MISSING;

/// Population central moments of order 2, 3 and 4
#[derive(Clone, Copy, Debug, PartialEq)]
struct CentralMoments {
    m2: f64,
    m3: f64,
    m4: f64,
}

impl CentralMoments {
    fn of(data: &[f64]) -> Self {
        let center = mean(data);
        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);

        for &x in data {
            let d = x - center;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }

        let n = data.len() as f64;
        Self {
            m2: m2 / n,
            m3: m3 / n,
            m4: m4 / n,
        }
    }
}

/// Skewness, the third standardized moment `m3 / m2^1.5`
///
/// [`MISSING`] for a constant group, or when the second moment underflows
/// to zero.
///
/// # Example
///
/// ```
/// use groupstats::statistics::skewness;
/// use groupstats::MISSING;
///
/// assert_eq!(skewness(&[1.0, 2.0, 3.0]), 0.0);
/// assert!(skewness(&[1.0, 1.0, 1.0, 10.0]) > 0.0);
/// assert_eq!(skewness(&[5.0, 5.0]), MISSING);
/// ```
pub fn skewness(data: &[f64]) -> f64 {
    if all_same(data) {
        return MISSING;
    }

    let moments = CentralMoments::of(data);
    let scale = math::sqrt(moments.m2);
    let denominator = scale * scale * scale;

    if denominator > 0.0 {
        moments.m3 / denominator
    } else {
        MISSING
    }
}

/// Kurtosis, the fourth standardized moment `m4 / m2^2` (not excess)
///
/// [`MISSING`] for a constant group, or when the second moment underflows
/// to zero.
pub fn kurtosis(data: &[f64]) -> f64 {
    if all_same(data) {
        return MISSING;
    }

    let moments = CentralMoments::of(data);
    if moments.m2 > 0.0 {
        moments.m4 / (moments.m2 * moments.m2)
    } else {
        MISSING
    }
}
