//! # Groupstats
//!
//! Order statistics and descriptive summaries over one group's observations.
//!
//! A caller that has partitioned its dataset into contiguous group ranges
//! hands each range to this crate and gets a single number back: a sum,
//! mean, standard deviation, min/max, percentile, inter-quartile range,
//! standard error, skewness or kurtosis.
//!
//! ## Features
//!
//! - **Selection**: quickselect of the k-th smallest value, in place, expected O(n)
//! - **Percentiles**: whole-rank averaging and min/max boundaries without a full sort
//! - **Moments**: mean, sample standard deviation, skewness, kurtosis
//! - **Standard errors**: of the mean, binomial, Poisson
//! - **Dispatch**: select a statistic by name (`"sd"`, `"90"`) or numeric code (`-3`, `90`)
//! - **Missing values**: undefined statistics return [`MISSING`], never NaN
//!
//! ## Quick Start
//!
//! ```rust
//! use groupstats::prelude::*;
//!
//! let mut values = [3.0, 7.0, 1.0, 9.0, 2.0];
//!
//! assert_eq!(statistics::sum(&values), 22.0);
//! assert_eq!(quantiles::median(&mut values), 3.0);
//!
//! let mut group = Group::new(&mut values, 0..5).unwrap();
//! assert_eq!(group.evaluate(&Statistic::Max), Outcome::Value(9.0));
//! ```
//!
//! ## Reordering
//!
//! Median, IQR and percentiles partially reorder the slice they are given.
//! Anything that may select takes `&mut [f64]`; copy first, or use
//! [`quantiles::quantile_preserving`], when the original order matters.
//!
//! ## Dispatch
//!
//! ```rust
//! use groupstats::dispatch::{code_of, dispatch_by_code, dispatch_by_name};
//!
//! let mut a = [0.0, 1.0, 1.0, 0.0, 1.0];
//! let mut b = a;
//!
//! assert_eq!(
//!     dispatch_by_name("sebinomial", &mut a),
//!     dispatch_by_code(code_of("sebinomial"), &mut b),
//! );
//! ```
//!
//! ## Feature Flags
//!
//! Components (each implies the ones before it):
//! - `quantiles`: selection and percentiles
//! - `statistics`: descriptive statistics and standard errors
//! - `dispatch` (default): selectors, [`Statistic`], [`Group`]
//! - `full`: everything, including `serde` and `tracing`
//!
//! Platform features:
//! - `std` (default): Standard library support; without it the crate is
//!   `no_std` + `alloc` and uses `libm`
//! - `serde`: Serialize [`Statistic`] and [`Outcome`]
//! - `tracing`: Diagnostic events through the `tracing` crate

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod trace;

mod math;
mod missing;

// Core traits always available
pub mod traits;

#[cfg(feature = "quantiles")]
#[cfg_attr(docsrs, doc(cfg(feature = "quantiles")))]
pub mod quantiles;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "dispatch")]
#[cfg_attr(docsrs, doc(cfg(feature = "dispatch")))]
pub mod dispatch;

#[cfg(feature = "dispatch")]
mod group;

pub mod prelude {
    pub use crate::missing::{is_missing, MISSING};
    pub use crate::traits::*;

    #[cfg(feature = "quantiles")]
    pub use crate::quantiles;

    #[cfg(feature = "statistics")]
    pub use crate::statistics;

    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::{Outcome, Statistic};

    #[cfg(feature = "dispatch")]
    pub use crate::group::Group;
}

pub use missing::{is_missing, MISSING};
pub use traits::{GroupStatistic, ParseStatisticError, RangeError};

#[cfg(feature = "dispatch")]
pub use dispatch::{Outcome, Statistic};

#[cfg(feature = "dispatch")]
pub use group::Group;
