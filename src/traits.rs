//! Core traits and error types
//!
//! Statistics are evaluated through the [`GroupStatistic`] trait, which
//! also reports whether evaluation may reorder the group. Range checks and
//! strict selector parsing report failures with the error types below.

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Error building a checked group range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The range holds no observations
    Empty { at: usize },
    /// The range starts after it ends
    Inverted { start: usize, end: usize },
    /// The range ends past the observation vector
    OutOfBounds { end: usize, len: usize },
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RangeError::Empty { at } => write!(f, "empty group range at {}", at),
            RangeError::Inverted { start, end } => {
                write!(f, "inverted group range: start {} > end {}", start, end)
            }
            RangeError::OutOfBounds { end, len } => {
                write!(f, "group range end {} past vector length {}", end, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

/// Error parsing a statistic selector strictly
///
/// Returned when a selector is neither a known name nor a positive
/// percentile. The lenient lookups treat the same input as a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatisticError {
    selector: String,
}

impl ParseStatisticError {
    pub(crate) fn new(selector: &str) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    /// The selector that failed to parse
    pub fn selector(&self) -> &str {
        &self.selector
    }
}

impl core::fmt::Display for ParseStatisticError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "unknown statistic {:?}: not a known name or a positive percentile",
            self.selector
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseStatisticError {}

/// A statistic that can be evaluated over one group
pub trait GroupStatistic: Debug {
    /// What evaluation produces
    type Output;

    /// Whether evaluation may reorder the group's observations
    ///
    /// Callers that evaluate several statistics over the same group run the
    /// non-reordering ones first when the original order matters.
    fn reorders(&self) -> bool;

    /// Evaluate over the group
    ///
    /// `data` is the whole group and must not be empty.
    fn evaluate(&self, data: &mut [f64]) -> Self::Output;
}
