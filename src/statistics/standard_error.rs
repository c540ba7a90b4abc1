//! Standard errors of the mean
//!
//! Three models: the sample standard deviation, a binomial proportion and a
//! Poisson count. The binomial and Poisson forms return [`MISSING`] when the
//! group cannot come from that model.

use super::descriptive::{mean, sd, sum};
use crate::math;
use crate::missing::MISSING;

/// Standard error of the mean, `sd / sqrt(n)`
pub fn semean(data: &[f64]) -> f64 {
    sd(data) / math::sqrt(data.len() as f64)
}

/// Binomial standard error, `sqrt(p * (1 - p) / n)` with `p` the mean
///
/// Every value must be exactly 0 or 1, otherwise [`MISSING`].
///
/// # Example
///
/// ```
/// use groupstats::statistics::sebinomial;
/// use groupstats::MISSING;
///
/// let se = sebinomial(&[0.0, 1.0, 1.0, 0.0, 1.0]);
/// assert!((se - (0.6_f64 * 0.4 / 5.0).sqrt()).abs() < 1e-12);
/// assert_eq!(sebinomial(&[0.0, 2.0, 1.0]), MISSING);
/// ```
pub fn sebinomial(data: &[f64]) -> f64 {
    if data.iter().any(|&x| x != 0.0 && x != 1.0) {
        return MISSING;
    }

    let p = mean(data);
    math::sqrt(p * (1.0 - p) / data.len() as f64)
}

/// Poisson standard error, `sqrt(round(sum)) / n`
///
/// The sum is rounded half up to a whole count before the square root.
/// Any negative value gives [`MISSING`].
pub fn sepoisson(data: &[f64]) -> f64 {
    if data.iter().any(|&x| x < 0.0) {
        return MISSING;
    }

    let count = math::floor(sum(data) + 0.5);
    math::sqrt(count) / data.len() as f64
}
