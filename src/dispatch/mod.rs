//! Statistic dispatch by name or numeric code
//!
//! A caller describes the statistic it wants either by name (`"sd"`,
//! `"median"`, `"90"`) or by numeric code (`-3`, `50`, `90`). Both resolve
//! to a [`Statistic`] through the same table and evaluate the same
//! function, so for every fixed statistic
//!
//! ```text
//! dispatch_by_name(name, data) == dispatch_by_code(code_of(name), data)
//! ```
//!
//! Selectors that resolve to nothing are not errors: they evaluate to
//! `Outcome::Value(0.0)`. Use `str::parse::<Statistic>()` to reject them
//! instead.
//!
//! # Example
//!
//! ```
//! use groupstats::dispatch::{code_of, dispatch_by_code, dispatch_by_name};
//! use groupstats::Outcome;
//!
//! let mut group = [3.0, 7.0, 1.0, 9.0, 2.0];
//!
//! assert_eq!(dispatch_by_name("sum", &mut group), Outcome::Value(22.0));
//! assert_eq!(code_of("sum"), -1.0);
//! assert_eq!(dispatch_by_code(-1.0, &mut group), Outcome::Value(22.0));
//! assert_eq!(dispatch_by_name("bogus", &mut group), Outcome::Value(0.0));
//! ```

mod statistic;

pub use statistic::{Statistic, MEDIAN_CODE};

use crate::missing;
use crate::traits::GroupStatistic;

/// Result of evaluating a statistic over a group
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// The computed value, possibly [`MISSING`](crate::MISSING)
    Value(f64),
    /// A recognized statistic the caller computes itself
    Deferred(Statistic),
}

impl Outcome {
    /// The computed value, `None` when deferred
    pub fn value(self) -> Option<f64> {
        match self {
            Outcome::Value(v) => Some(v),
            Outcome::Deferred(_) => None,
        }
    }

    /// Whether the value is the missing-value sentinel
    pub fn is_missing(&self) -> bool {
        matches!(self, Outcome::Value(v) if missing::is_missing(*v))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Outcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Outcome::Value(v) => serializer.serialize_f64(*v),
            Outcome::Deferred(stat) => {
                use serde::ser::SerializeStruct;
                let mut state = serializer.serialize_struct("Deferred", 1)?;
                state.serialize_field("deferred", stat)?;
                state.end()
            }
        }
    }
}

/// Evaluate the statistic called `name` over `data`
///
/// Unknown names are read as a percentile; when that is not positive the
/// result is `Outcome::Value(0.0)`. May reorder `data`.
pub fn dispatch_by_name(name: &str, data: &mut [f64]) -> Outcome {
    match Statistic::from_name(name) {
        Some(stat) => stat.evaluate(data),
        None => {
            debug!(selector = name, "unresolved statistic name, returning 0");
            Outcome::Value(0.0)
        }
    }
}

/// Evaluate the statistic with numeric code `code` over `data`
///
/// Positive codes other than [`MEDIAN_CODE`] are percentiles. Non-positive
/// codes outside the table give `Outcome::Value(0.0)`. May reorder `data`.
pub fn dispatch_by_code(code: f64, data: &mut [f64]) -> Outcome {
    match Statistic::from_code(code) {
        Some(stat) => stat.evaluate(data),
        None => {
            debug!(code, "unresolved statistic code, returning 0");
            Outcome::Value(0.0)
        }
    }
}

/// Numeric code for the statistic called `name`
///
/// Unknown names encode as their percentile value, or 0 when that is not
/// positive.
pub fn code_of(name: &str) -> f64 {
    Statistic::from_name(name).map_or(0.0, |stat| stat.code())
}
