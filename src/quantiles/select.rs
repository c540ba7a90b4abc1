//! In-place k-th order statistic selection
//!
//! Quickselect with a three-way partition. The range is reordered so the
//! target rank holds the true order statistic, with smaller-or-equal values
//! to its left and greater-or-equal values to its right. Nothing is sorted
//! beyond what the search needs.
//!
//! # Algorithm
//!
//! 1. Pick a pivot: median of three (first, middle, last), or Tukey's
//!    ninther (median of three medians) once the range reaches
//!    [`NINTHER_CUTOFF`] elements.
//! 2. Partition into `< pivot`, `== pivot`, `> pivot` (Dijkstra's
//!    Dutch national flag).
//! 3. Stop if the target falls in the `==` band, otherwise narrow to the
//!    band that holds it.
//! 4. Ranges of at most [`INSERTION_CUTOFF`] elements are finished with an
//!    insertion sort.
//!
//! Expected O(n) time, O(1) extra space.

/// Ranges this small are finished by insertion sort
pub const INSERTION_CUTOFF: usize = 16;

/// Ranges at least this large use the ninther pivot
pub const NINTHER_CUTOFF: usize = 64;

/// Select the `k`-th smallest value of `data[left..right]`
///
/// Reorders `data[left..right]` in place and returns the value that ends up
/// at absolute position `left + k`. That value is the `(k + 1)`-th smallest
/// of the range; every element of `data[left..left + k]` is `<=` it and
/// every element of `data[left + k..right]` is `>=` it.
///
/// # Preconditions
///
/// `left < right <= data.len()` and `k < right - left`. These are checked
/// only in debug builds. In release builds a violation gives an unspecified
/// result, or a panic when a position falls outside `data`. Use
/// [`Group`](crate::Group) for checked ranges.
///
/// NaN values never stall the search, but where they end up is unspecified.
///
/// # Example
///
/// ```
/// use groupstats::quantiles::select;
///
/// let mut data = [9.0, 1.0, 8.0, 2.0, 7.0, 3.0];
/// // third smallest of data[1..5] = {1, 8, 2, 7}
/// assert_eq!(select(&mut data, 1, 5, 2), 7.0);
/// assert_eq!(data[0], 9.0);
/// assert_eq!(data[5], 3.0);
/// ```
pub fn select(data: &mut [f64], left: usize, right: usize, k: usize) -> f64 {
    debug_assert!(left < right, "empty selection range {}..{}", left, right);
    debug_assert!(right <= data.len(), "range end {} past length {}", right, data.len());
    debug_assert!(k < right - left, "rank {} outside range of {}", k, right - left);

    let target = left + k;
    let (mut lo, mut hi) = (left, right);

    loop {
        if hi - lo <= INSERTION_CUTOFF {
            insertion_sort(&mut data[lo..hi]);
            return data[target];
        }

        let pivot = choose_pivot(data, lo, hi);
        let (lt, gt) = partition(data, lo, hi, pivot);

        if target < lt {
            hi = lt;
        } else if target >= gt {
            lo = gt;
        } else {
            return data[target];
        }
    }
}

/// Select the `k`-th smallest value of the whole slice
///
/// Shorthand for `select(data, 0, data.len(), k)`.
pub fn select_nth(data: &mut [f64], k: usize) -> f64 {
    let len = data.len();
    select(data, 0, len, k)
}

/// Three-way partition of `data[lo..hi]` around `pivot`
///
/// Returns `(lt, gt)` such that `data[lo..lt] < pivot`,
/// `data[lt..gt]` is the band of values neither smaller nor larger than
/// `pivot`, and `data[gt..hi] > pivot`. Values that compare unordered with
/// the pivot (NaN) land in the middle band.
fn partition(data: &mut [f64], lo: usize, hi: usize, pivot: f64) -> (usize, usize) {
    let mut lt = lo;
    let mut i = lo;
    let mut gt = hi;

    while i < gt {
        if data[i] < pivot {
            data.swap(lt, i);
            lt += 1;
            i += 1;
        } else if data[i] > pivot {
            gt -= 1;
            data.swap(i, gt);
        } else {
            i += 1;
        }
    }

    (lt, gt)
}

/// Pivot value for `data[lo..hi]`, always one of the range's own elements
fn choose_pivot(data: &[f64], lo: usize, hi: usize) -> f64 {
    let len = hi - lo;
    let mid = lo + len / 2;
    let last = hi - 1;

    if len < NINTHER_CUTOFF {
        return median_of_three(data[lo], data[mid], data[last]);
    }

    let step = len / 8;
    let a = median_of_three(data[lo], data[lo + step], data[lo + 2 * step]);
    let b = median_of_three(data[mid - step], data[mid], data[mid + step]);
    let c = median_of_three(data[last - 2 * step], data[last - step], data[last]);
    median_of_three(a, b, c)
}

#[inline]
fn median_of_three(a: f64, b: f64, c: f64) -> f64 {
    if a < b {
        if b < c {
            b
        } else if a < c {
            c
        } else {
            a
        }
    } else if a < c {
        a
    } else if b < c {
        c
    } else {
        b
    }
}

fn insertion_sort(data: &mut [f64]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}
