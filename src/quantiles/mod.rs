//! Order statistics and percentiles by in-place selection
//!
//! This module provides the quantile engine:
//!
//! - [`select`]: quickselect of the k-th smallest value of a range
//! - [`quantile`]: percentile of a group, built on [`select`]
//! - [`median`] and [`iqr`]: fixed percentiles
//!
//! Every function that may select takes `&mut [f64]` and leaves the slice
//! partially reordered. Later queries on the same slice stay correct and
//! usually get cheaper, since the earlier partitions are preserved.
//!
//! # Example
//!
//! ```
//! use groupstats::quantiles::{iqr, median, quantile};
//!
//! let mut group = [12.0, 3.0, 7.0, 5.0, 9.0, 1.0, 4.0, 8.0];
//!
//! let p90 = quantile(&mut group, 90.0);
//! let med = median(&mut group);
//! let spread = iqr(&mut group);
//!
//! assert_eq!(p90, 12.0);
//! assert_eq!(med, 6.0);
//! assert_eq!(spread, 5.0);
//! ```

mod estimator;
mod select;

pub use estimator::{iqr, max, median, min, quantile, quantile_preserving, QuantilePosition};
pub use select::{select, select_nth, INSERTION_CUTOFF, NINTHER_CUTOFF};
