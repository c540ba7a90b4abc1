//! Checked view over one group's range of observations
//!
//! The free functions in [`statistics`](crate::statistics) and
//! [`quantiles`](crate::quantiles) treat an empty or out-of-range slice as a
//! caller error. [`Group`] checks the `[start, end)` range once up front and
//! makes the reordering contract visible in its signatures: reductions take
//! `&self`, anything that selects takes `&mut self`.

use core::ops::Range;

use crate::dispatch::{Outcome, Statistic};
use crate::quantiles;
use crate::statistics;
use crate::traits::{GroupStatistic, RangeError};

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// One group's observations, a non-empty range of a caller-owned vector
///
/// # Example
///
/// ```
/// use groupstats::{Group, Outcome, Statistic};
///
/// // Two groups laid out back to back
/// let mut values = [3.0, 7.0, 1.0, 9.0, 2.0, 10.0, 20.0];
///
/// let mut first = Group::new(&mut values, 0..5).unwrap();
/// assert_eq!(first.len(), 5);
/// assert_eq!(first.sum(), 22.0);
/// assert_eq!(first.median(), 3.0);
///
/// let mut second = Group::new(&mut values, 5..7).unwrap();
/// let outcomes = second.summarize(&[Statistic::Mean, Statistic::Count]);
/// assert_eq!(outcomes, [Outcome::Value(15.0), Outcome::Deferred(Statistic::Count)]);
///
/// assert!(Group::new(&mut values, 4..4).is_err());
/// ```
#[derive(Debug)]
pub struct Group<'a> {
    data: &'a mut [f64],
}

impl<'a> Group<'a> {
    /// View `values[range]` as a group
    ///
    /// Fails when the range is inverted, runs past `values`, or is empty.
    pub fn new(values: &'a mut [f64], range: Range<usize>) -> Result<Self, RangeError> {
        let Range { start, end } = range;

        if start > end {
            debug!(start, end, "rejected inverted group range");
            return Err(RangeError::Inverted { start, end });
        }
        if end > values.len() {
            debug!(end, len = values.len(), "rejected group range past vector end");
            return Err(RangeError::OutOfBounds {
                end,
                len: values.len(),
            });
        }
        if start == end {
            debug!(start, "rejected empty group range");
            return Err(RangeError::Empty { at: start });
        }

        Ok(Self {
            data: &mut values[start..end],
        })
    }

    /// View a whole slice as one group
    pub fn whole(values: &'a mut [f64]) -> Result<Self, RangeError> {
        let len = values.len();
        Self::new(values, 0..len)
    }

    /// Number of observations, always at least 1
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false; kept for the `len`/`is_empty` convention
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The observations in their current order
    pub fn as_slice(&self) -> &[f64] {
        self.data
    }

    /// Whether the observations are currently in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        statistics::is_sorted(self.data)
    }

    pub fn sum(&self) -> f64 {
        statistics::sum(self.data)
    }

    pub fn mean(&self) -> f64 {
        statistics::mean(self.data)
    }

    /// Sample standard deviation, see [`statistics::sd`]
    pub fn sd(&self) -> f64 {
        statistics::sd(self.data)
    }

    pub fn min(&self) -> f64 {
        statistics::min(self.data)
    }

    pub fn max(&self) -> f64 {
        statistics::max(self.data)
    }

    pub fn semean(&self) -> f64 {
        statistics::semean(self.data)
    }

    /// Binomial standard error, [`MISSING`](crate::MISSING) unless all values are 0 or 1
    pub fn sebinomial(&self) -> f64 {
        statistics::sebinomial(self.data)
    }

    /// Poisson standard error, [`MISSING`](crate::MISSING) if any value is negative
    pub fn sepoisson(&self) -> f64 {
        statistics::sepoisson(self.data)
    }

    pub fn skewness(&self) -> f64 {
        statistics::skewness(self.data)
    }

    pub fn kurtosis(&self) -> f64 {
        statistics::kurtosis(self.data)
    }

    /// Median; reorders the group
    pub fn median(&mut self) -> f64 {
        quantiles::median(self.data)
    }

    /// Inter-quartile range; reorders the group
    pub fn iqr(&mut self) -> f64 {
        quantiles::iqr(self.data)
    }

    /// The `q`-th percentile; reorders the group
    pub fn quantile(&mut self, q: f64) -> f64 {
        quantiles::quantile(self.data, q)
    }

    /// The `k`-th smallest observation (0-based); reorders the group
    ///
    /// # Panics
    ///
    /// Panics if `k >= self.len()`.
    pub fn select(&mut self, k: usize) -> f64 {
        assert!(k < self.data.len(), "rank {} outside group of {}", k, self.data.len());
        quantiles::select_nth(self.data, k)
    }

    /// Evaluate one statistic
    pub fn evaluate<S: GroupStatistic>(&mut self, statistic: &S) -> S::Output {
        statistic.evaluate(self.data)
    }

    /// Evaluate several statistics, returning outcomes in request order
    ///
    /// Statistics that leave the group untouched run first, so they all see
    /// the caller's original order; selections run afterwards and share
    /// each other's partial ordering.
    pub fn summarize(&mut self, statistics: &[Statistic]) -> Vec<Outcome> {
        let mut outcomes = Vec::with_capacity(statistics.len());
        outcomes.resize(statistics.len(), Outcome::Value(0.0));

        let (selecting, reducing): (Vec<_>, Vec<_>) = statistics
            .iter()
            .enumerate()
            .partition(|(_, stat)| stat.reorders());

        for (slot, stat) in reducing.into_iter().chain(selecting) {
            outcomes[slot] = stat.evaluate(self.data);
        }

        outcomes
    }
}
