//! Missing-value sentinel
//!
//! Statistics that are undefined for their input (a binomial standard error
//! over non-binary data, skewness of a constant group, ...) return
//! [`MISSING`] instead of NaN or an error.

/// Reserved value meaning "statistic undefined for this input"
///
/// This is `2^1023`, the smallest of the large doubles reserved as
/// missing codes by statistical hosts. It is finite, so it survives
/// comparisons and arithmetic checks that would reject NaN.
pub const MISSING: f64 = f64::from_bits(0x7FE0_0000_0000_0000);

/// Check whether a result is the missing-value sentinel
#[inline]
pub fn is_missing(value: f64) -> bool {
    value == MISSING
}
