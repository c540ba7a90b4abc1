//! Descriptive statistics over one group
//!
//! This module provides the reductions a group summary is made of. All of
//! them take the group as a slice; carve a `[start, end)` range out of a
//! larger vector with `&v[start..end]`, or use [`Group`](crate::Group) for a
//! checked range.
//!
//! | statistic | function | undefined input → [`MISSING`](crate::MISSING) |
//! |-----------|----------|-------------------------|
//! | sum, mean | [`sum`], [`mean`] | |
//! | standard deviation | [`sd`] | |
//! | min, max | [`min`], [`max`] | |
//! | standard errors | [`semean`], [`sebinomial`], [`sepoisson`] | non-binary / negative values |
//! | skewness, kurtosis | [`skewness`], [`kurtosis`] | constant group |
//! | median, IQR | [`median`], [`iqr`] | |
//!
//! Median and IQR select in place and therefore take `&mut [f64]`.
//!
//! # Example
//!
//! ```
//! use groupstats::statistics::{max, mean, median, min, sd, sum};
//!
//! let mut group = [3.0, 7.0, 1.0, 9.0, 2.0];
//!
//! assert_eq!(sum(&group), 22.0);
//! assert!((mean(&group) - 4.4).abs() < 1e-12);
//! assert_eq!(min(&group), 1.0);
//! assert_eq!(max(&group), 9.0);
//! assert!((sd(&group) - 3.435).abs() < 1e-3);
//! assert_eq!(median(&mut group), 3.0);
//! ```

mod descriptive;
mod moments;
mod standard_error;

pub use crate::quantiles::{iqr, max, median, min};
pub use descriptive::{all_same, is_sorted, mean, sd, sum};
pub use moments::{kurtosis, skewness};
pub use standard_error::{sebinomial, semean, sepoisson};
