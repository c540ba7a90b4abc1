//! Percentiles of a group by partial selection
//!
//! A percentile `q` in `(0, 100]` over `n` observations sits at position
//! `q * n / 100`. When that position is a whole rank the two neighbouring
//! order statistics are averaged; otherwise the order statistic just below
//! it is returned. Positions that touch the ends of the range resolve to
//! the minimum or maximum with a linear scan instead of a selection.
//!
//! The estimators take `&mut [f64]` because the selection reorders the
//! slice. Call [`quantile_preserving`] when the caller's order matters.

use super::select::select;
use crate::math;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Where a percentile falls among the order statistics of a group
///
/// Computed once per query; which order statistics get selected follows
/// from these three fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuantilePosition {
    /// Rank just below the exact position, `floor(q * n / 100)`
    pub lower: usize,
    /// Rank nearest to the exact position, `round(q * n / 100)`
    pub nearest: usize,
    /// `nearest` scales back to exactly `q`, so the position is a whole rank
    pub exact: bool,
}

impl QuantilePosition {
    /// Locate percentile `q` within `n` observations
    ///
    /// When `n` is a multiple of 100 the position is computed as
    /// `q * (n / 100)`, which keeps round group sizes free of the rounding
    /// error `q * n / 100` picks up. The `exact` test is a plain
    /// floating-point equality in both cases.
    pub fn locate(n: usize, q: f64) -> Self {
        let (position, nearest, exact) = if n % 100 != 0 {
            let size = n as f64;
            let position = q * size / 100.0;
            let nearest = math::round(position);
            (position, nearest, nearest * 100.0 / size == q)
        } else {
            let hundredths = (n / 100) as f64;
            let position = q * hundredths;
            let nearest = math::round(position);
            (position, nearest, nearest / hundredths == q)
        };

        // Negative and NaN positions saturate to rank 0.
        Self {
            lower: math::floor(position) as usize,
            nearest: nearest as usize,
            exact,
        }
    }

    /// Whether the percentile lands on, or must be averaged with, the maximum
    ///
    /// Averaging ranks touch the maximum when `nearest` reaches the last
    /// rank. A non-averaging position only does when its own rank is the
    /// last one; `nearest` rounding up to the last rank does not make the
    /// answer the maximum.
    pub fn touches_max(&self, n: usize) -> bool {
        let last = n - 1;
        if self.exact {
            self.lower >= last || self.nearest >= last
        } else {
            self.lower >= last
        }
    }
}

/// The `q`-th percentile of `data`, `q` in `(0, 100]`
///
/// Reorders `data`. Percentiles above 100 are treated as 100.
///
/// | size | result |
/// |------|--------|
/// | 1    | the element |
/// | 2    | min if `q < 50`, max if `q > 50`, their average at 50 |
/// | ≥ 3  | see [`QuantilePosition`] |
///
/// # Preconditions
///
/// `data` must not be empty (checked in debug builds only).
///
/// # Example
///
/// ```
/// use groupstats::quantiles::quantile;
///
/// let mut data = [3.0, 7.0, 1.0, 9.0, 2.0];
/// assert_eq!(quantile(&mut data, 50.0), 3.0);
/// assert_eq!(quantile(&mut data, 100.0), 9.0);
/// assert_eq!(quantile(&mut data, 10.0), 1.0);
/// ```
pub fn quantile(data: &mut [f64], q: f64) -> f64 {
    debug_assert!(!data.is_empty(), "quantile of an empty group");

    let n = data.len();
    match n {
        1 => return data[0],
        2 => {
            let (a, b) = (data[0], data[1]);
            return if q > 50.0 {
                if a > b { a } else { b }
            } else if q < 50.0 {
                if a > b { b } else { a }
            } else {
                (a + b) / 2.0
            };
        }
        _ => {}
    }

    let q = if q > 100.0 { 100.0 } else { q };
    let position = QuantilePosition::locate(n, q);

    if position.lower == 0 {
        trace!(n, q, "percentile resolves to the minimum");
        return min(data);
    }

    let touches_max = position.touches_max(n);
    trace!(
        n,
        q,
        lower = position.lower,
        nearest = position.nearest,
        exact = position.exact,
        touches_max,
        "percentile position"
    );

    match (position.exact, touches_max) {
        (true, true) => (max(data) + select(data, 0, n, position.nearest - 1)) / 2.0,
        (true, false) => {
            let upper = select(data, 0, n, position.nearest);
            // Everything left of `nearest` is now <= upper, so the rank below
            // it is the largest of that prefix.
            let below = max(&data[..position.nearest]);
            (upper + below) / 2.0
        }
        (false, true) => max(data),
        (false, false) => select(data, 0, n, position.lower),
    }
}

/// Median of `data`, the 50th percentile
///
/// Reorders `data`.
pub fn median(data: &mut [f64]) -> f64 {
    quantile(data, 50.0)
}

/// Inter-quartile range of `data`, the 75th minus the 25th percentile
///
/// Reorders `data`.
pub fn iqr(data: &mut [f64]) -> f64 {
    quantile(data, 75.0) - quantile(data, 25.0)
}

/// The `q`-th percentile of a copy of `data`
///
/// Same result as [`quantile`], leaving `data` in its original order.
pub fn quantile_preserving(data: &[f64], q: f64) -> f64 {
    let mut scratch: Vec<f64> = data.to_vec();
    quantile(&mut scratch, q)
}

/// Smallest value of `data`, the rank-0 order statistic
///
/// A linear scan seeded with the first element; `data` must not be empty.
pub fn min(data: &[f64]) -> f64 {
    let mut min = data[0];
    for &x in &data[1..] {
        if min > x {
            min = x;
        }
    }
    min
}

/// Largest value of `data`, the last order statistic
///
/// A linear scan seeded with the first element; `data` must not be empty.
pub fn max(data: &[f64]) -> f64 {
    let mut max = data[0];
    for &x in &data[1..] {
        if max < x {
            max = x;
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Percentile from a sorted copy, following the same whole-rank rule
    /// with exact integer arithmetic.
    fn reference(data: &[f64], q: usize) -> f64 {
        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let n = sorted.len();

        if (q * n) % 100 == 0 {
            let rank = q * n / 100;
            if rank >= n {
                sorted[n - 1]
            } else {
                (sorted[rank - 1] + sorted[rank]) / 2.0
            }
        } else {
            sorted[q * n / 100]
        }
    }

    fn scrambled(n: usize, seed: u64) -> Vec<f64> {
        let mut state = seed | 1;
        (0..n)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                (state % 1_000) as f64
            })
            .collect()
    }

    #[test]
    fn test_single_element() {
        assert_eq!(quantile(&mut [5.0], 1.0), 5.0);
        assert_eq!(quantile(&mut [5.0], 50.0), 5.0);
        assert_eq!(quantile(&mut [5.0], 100.0), 5.0);
    }

    #[test]
    fn test_two_elements() {
        assert_eq!(quantile(&mut [8.0, 2.0], 25.0), 2.0);
        assert_eq!(quantile(&mut [8.0, 2.0], 75.0), 8.0);
        assert_eq!(quantile(&mut [8.0, 2.0], 50.0), 5.0);
        assert_eq!(quantile(&mut [2.0, 8.0], 49.9), 2.0);
        assert_eq!(quantile(&mut [2.0, 8.0], 50.1), 8.0);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&mut [3.0, 7.0, 1.0, 9.0, 2.0]), 3.0);
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&mut [2.0, 3.0, 1.0]), 2.0);
        assert_eq!(median(&mut [6.0, 1.0, 5.0, 2.0, 4.0, 3.0]), 3.5);
    }

    #[test]
    fn test_hundredth_is_max() {
        for n in [3, 4, 5, 99, 100, 101, 200, 333] {
            let mut data = scrambled(n, n as u64);
            let expected = max(&data);
            assert_eq!(quantile(&mut data, 100.0), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_above_hundred_clamps() {
        let mut data = [1.0, 5.0, 3.0, 4.0];
        assert_eq!(quantile(&mut data, 150.0), 5.0);
    }

    #[test]
    fn test_just_below_hundred_is_not_min() {
        for n in [3, 5, 10, 100, 250] {
            let mut data = scrambled(n, 99 + n as u64);
            let lowest = min(&data);
            let highest = max(&data);
            let value = quantile(&mut data, 99.99);
            assert_eq!(value, highest, "n = {}", n);
            assert!(value > lowest || lowest == highest);
        }
    }

    #[test]
    fn test_low_percentile_is_min() {
        let mut data = [9.0, 4.0, 6.0, 1.0, 7.0];
        // 10 * 5 / 100 = 0.5 lands below rank 1
        assert_eq!(quantile(&mut data, 10.0), 1.0);
    }

    #[test]
    fn test_whole_rank_averages_neighbours() {
        // n = 5, q = 40 → position 2, average of ranks 1 and 2
        let mut data = [50.0, 10.0, 40.0, 20.0, 30.0];
        assert_eq!(quantile(&mut data, 40.0), 25.0);
        // q = 80 → position 4 = n - 1, averaged with the maximum
        let mut data = [50.0, 10.0, 40.0, 20.0, 30.0];
        assert_eq!(quantile(&mut data, 80.0), 45.0);
    }

    #[test]
    fn test_rounding_up_to_last_rank_is_not_max() {
        // n = 5, q = 75 → position 3.75: rank 3, although it rounds to rank 4
        let mut data = [50.0, 10.0, 40.0, 20.0, 30.0];
        assert_eq!(quantile(&mut data, 75.0), 40.0);
    }

    #[test]
    fn test_round_group_sizes() {
        let mut data: Vec<f64> = (1..=200).map(|x| x as f64).collect();
        assert_eq!(quantile(&mut data, 50.0), 100.5);
        assert_eq!(quantile(&mut data, 25.0), 50.5);
        assert_eq!(quantile(&mut data, 99.0), 198.5);
        assert_eq!(quantile(&mut data, 100.0), 200.0);
    }

    #[test]
    fn test_position_paths() {
        let p = QuantilePosition::locate(300, 50.0);
        assert_eq!(p, QuantilePosition { lower: 150, nearest: 150, exact: true });

        let p = QuantilePosition::locate(7, 50.0);
        assert_eq!(p, QuantilePosition { lower: 3, nearest: 4, exact: false });

        let p = QuantilePosition::locate(10, -5.0);
        assert_eq!(p.lower, 0);
    }

    #[test]
    fn test_iqr() {
        let mut data: Vec<f64> = (1..=8).map(|x| x as f64).collect();
        // 75th: position 6 → (6 + 7) / 2; 25th: position 2 → (2 + 3) / 2
        assert_eq!(iqr(&mut data), 4.0);
        assert_eq!(iqr(&mut [3.0, 3.0, 3.0]), 0.0);
    }

    #[test]
    fn test_preserving_keeps_order() {
        let data = [3.0, 7.0, 1.0, 9.0, 2.0];
        assert_eq!(quantile_preserving(&data, 50.0), 3.0);
        assert_eq!(data, [3.0, 7.0, 1.0, 9.0, 2.0]);
    }

    #[test]
    fn test_repeated_queries_on_same_slice() {
        let original = scrambled(1_000, 5);
        let mut data = original.clone();
        for q in [10, 25, 50, 75, 90, 25, 50] {
            assert_eq!(quantile(&mut data, q as f64), reference(&original, q), "q = {}", q);
        }
    }

    #[cfg(feature = "std")]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(400))]

            #[test]
            fn integer_percentiles_match_reference(
                data in proptest::collection::vec(-1e4_f64..1e4, 3..450),
                q in 1_usize..=100,
            ) {
                let mut work = data.clone();
                prop_assert_eq!(quantile(&mut work, q as f64), reference(&data, q));
            }

            #[test]
            fn integer_percentiles_match_reference_round_sizes(
                hundreds in 1_usize..=6,
                seed in any::<u64>(),
                q in 1_usize..=100,
            ) {
                let data = scrambled(hundreds * 100, seed);
                let mut work = data.clone();
                prop_assert_eq!(quantile(&mut work, q as f64), reference(&data, q));
            }

            #[test]
            fn median_matches_textbook_definition(
                data in proptest::collection::vec(-1e6_f64..1e6, 1..300),
            ) {
                let mut sorted = data.clone();
                sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
                let n = sorted.len();
                let expected = if n % 2 == 1 {
                    sorted[n / 2]
                } else {
                    (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
                };

                let mut work = data.clone();
                prop_assert_eq!(median(&mut work), expected);
            }

            #[test]
            fn percentile_within_min_max(
                data in proptest::collection::vec(-1e6_f64..1e6, 1..300),
                q in 0.01_f64..=100.0,
            ) {
                let lowest = min(&data);
                let highest = max(&data);
                let mut work = data.clone();
                let value = quantile(&mut work, q);
                prop_assert!(value >= lowest && value <= highest);
            }

            #[test]
            fn iqr_is_nonnegative(
                data in proptest::collection::vec(-1e6_f64..1e6, 2..300),
            ) {
                let mut work = data.clone();
                prop_assert!(iqr(&mut work) >= 0.0);
            }
        }
    }
}
