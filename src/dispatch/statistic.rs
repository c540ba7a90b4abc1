//! Statistic selectors: names, numeric codes and their evaluation
//!
//! One static table lists every fixed statistic with its canonical name and
//! numeric code. Name lookup, code lookup and the reverse mappings all read
//! that table, so they cannot drift apart. Anything outside the table is a
//! percentile.

use core::fmt;
use core::str::FromStr;

use super::Outcome;
use crate::quantiles::{iqr, max, median, min, quantile};
use crate::statistics::{kurtosis, mean, sd, sebinomial, semean, sepoisson, skewness, sum};
use crate::traits::{GroupStatistic, ParseStatisticError};

/// Code reserved for the median
pub const MEDIAN_CODE: i32 = 50;

/// A statistic a group can be summarized by
///
/// Fixed statistics have a name and a non-positive code (the median uses
/// [`MEDIAN_CODE`]); [`Statistic::Percentile`] is any other positive value.
///
/// Count, percent, first/last and their non-missing variants are recognized
/// but computed by the caller: evaluating them yields
/// [`Outcome::Deferred`].
///
/// # Example
///
/// ```
/// use groupstats::{GroupStatistic, Outcome, Statistic};
///
/// let stat = Statistic::from_name("p90").or(Statistic::from_name("90"));
/// assert_eq!(stat, Some(Statistic::Percentile(90.0)));
///
/// assert_eq!(Statistic::from_code(-3.0), Some(Statistic::Sd));
/// assert_eq!(Statistic::Sd.name(), Some("sd"));
/// assert_eq!(Statistic::from_code(50.0), Some(Statistic::Median));
///
/// let mut group = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(Statistic::Median.evaluate(&mut group), Outcome::Value(2.5));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Statistic {
    Sum,
    Mean,
    Sd,
    Max,
    Min,
    /// Number of observations (caller-computed)
    Count,
    /// Share of observations (caller-computed)
    Percent,
    Median,
    Iqr,
    /// First observation (caller-computed)
    First,
    /// First non-missing observation (caller-computed)
    FirstNonMissing,
    /// Last observation (caller-computed)
    Last,
    /// Last non-missing observation (caller-computed)
    LastNonMissing,
    SeMean,
    SeBinomial,
    SePoisson,
    Skewness,
    Kurtosis,
    /// Sum under a separate name, for callers that weight `Sum`
    RawSum,
    /// The p-th percentile, p in (0, 100]
    Percentile(f64),
}

struct Entry {
    statistic: Statistic,
    name: &'static str,
    code: i32,
}

const fn entry(statistic: Statistic, name: &'static str, code: i32) -> Entry {
    Entry {
        statistic,
        name,
        code,
    }
}

static TABLE: [Entry; 19] = [
    entry(Statistic::Sum, "sum", -1),
    entry(Statistic::Mean, "mean", -2),
    entry(Statistic::Sd, "sd", -3),
    entry(Statistic::Max, "max", -4),
    entry(Statistic::Min, "min", -5),
    entry(Statistic::Count, "count", -6),
    entry(Statistic::Percent, "percent", -7),
    entry(Statistic::Median, "median", MEDIAN_CODE),
    entry(Statistic::Iqr, "iqr", -9),
    entry(Statistic::First, "first", -10),
    entry(Statistic::FirstNonMissing, "firstnm", -11),
    entry(Statistic::Last, "last", -12),
    entry(Statistic::LastNonMissing, "lastnm", -13),
    entry(Statistic::SeMean, "semean", -15),
    entry(Statistic::SeBinomial, "sebinomial", -16),
    entry(Statistic::SePoisson, "sepoisson", -17),
    entry(Statistic::Skewness, "skewness", -19),
    entry(Statistic::Kurtosis, "kurtosis", -20),
    entry(Statistic::RawSum, "rawsum", -21),
];

impl Statistic {
    /// Every fixed statistic, in code order of the table
    pub fn fixed() -> impl Iterator<Item = Statistic> {
        TABLE.iter().map(|e| e.statistic)
    }

    /// Resolve a selector name
    ///
    /// Known names match exactly (case-sensitive). Anything else is read
    /// as a percentile from its leading number, the way C's `atof` reads
    /// it; `None` when that number is not positive.
    pub fn from_name(name: &str) -> Option<Statistic> {
        if let Some(e) = TABLE.iter().find(|e| e.name == name) {
            return Some(e.statistic);
        }

        let p = leading_number(name);
        if p > 0.0 {
            Some(Statistic::Percentile(p))
        } else {
            None
        }
    }

    /// Resolve a numeric code
    ///
    /// [`MEDIAN_CODE`] is the median and any other positive code a
    /// percentile. Non-positive codes outside the table give `None`.
    pub fn from_code(code: f64) -> Option<Statistic> {
        if code == MEDIAN_CODE as f64 {
            return Some(Statistic::Median);
        }
        if code > 0.0 {
            return Some(Statistic::Percentile(code));
        }

        TABLE
            .iter()
            .find(|e| e.code as f64 == code)
            .map(|e| e.statistic)
    }

    /// Canonical name of a fixed statistic, `None` for percentiles
    pub fn name(&self) -> Option<&'static str> {
        self.entry().map(|e| e.name)
    }

    /// Numeric code; a percentile's code is its value
    pub fn code(&self) -> f64 {
        match self {
            Statistic::Percentile(p) => *p,
            _ => self.entry().map_or(0.0, |e| e.code as f64),
        }
    }

    /// Whether the caller computes this statistic rather than this crate
    pub fn is_deferred(&self) -> bool {
        matches!(
            self,
            Statistic::Count
                | Statistic::Percent
                | Statistic::First
                | Statistic::FirstNonMissing
                | Statistic::Last
                | Statistic::LastNonMissing
        )
    }

    fn entry(&self) -> Option<&'static Entry> {
        TABLE.iter().find(|e| e.statistic == *self)
    }
}

impl GroupStatistic for Statistic {
    type Output = Outcome;

    fn reorders(&self) -> bool {
        matches!(
            self,
            Statistic::Median | Statistic::Iqr | Statistic::Percentile(_)
        )
    }

    fn evaluate(&self, data: &mut [f64]) -> Outcome {
        let value = match self {
            Statistic::Sum | Statistic::RawSum => sum(data),
            Statistic::Mean => mean(data),
            Statistic::Sd => sd(data),
            Statistic::Max => max(data),
            Statistic::Min => min(data),
            Statistic::Median => median(data),
            Statistic::Iqr => iqr(data),
            Statistic::SeMean => semean(data),
            Statistic::SeBinomial => sebinomial(data),
            Statistic::SePoisson => sepoisson(data),
            Statistic::Skewness => skewness(data),
            Statistic::Kurtosis => kurtosis(data),
            Statistic::Percentile(p) => quantile(data, *p),
            Statistic::Count
            | Statistic::Percent
            | Statistic::First
            | Statistic::FirstNonMissing
            | Statistic::Last
            | Statistic::LastNonMissing => {
                trace!(statistic = ?self, "deferred to caller");
                return Outcome::Deferred(*self);
            }
        };
        Outcome::Value(value)
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statistic::Percentile(p) => write!(f, "{}", p),
            _ => f.write_str(self.name().unwrap_or("")),
        }
    }
}

/// Strict parsing: a known name, or a percentile in (0, 100] written as a
/// complete number
impl FromStr for Statistic {
    type Err = ParseStatisticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(e) = TABLE.iter().find(|e| e.name == s) {
            return Ok(e.statistic);
        }

        match s.parse::<f64>() {
            Ok(p) if p > 0.0 && p <= 100.0 => Ok(Statistic::Percentile(p)),
            _ => Err(ParseStatisticError::new(s)),
        }
    }
}

/// Longest numeric prefix of `text`, 0 when there is none
///
/// Accepts leading whitespace, a sign, digits with an optional fraction and
/// an optional exponent; stops at the first character that does not fit.
fn leading_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_until = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integral = end;
    end = digits_until(end);
    let mut mantissa = end - integral;

    if bytes.get(end) == Some(&b'.') {
        let fraction = end + 1;
        end = digits_until(fraction);
        mantissa += end - fraction;
    }
    if mantissa == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_end = digits_until(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }

    text[..end].parse().unwrap_or(0.0)
}

#[cfg(feature = "serde")]
impl serde::Serialize for Statistic {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Statistic::Percentile(p) => serializer.serialize_f64(*p),
            _ => serializer.serialize_str(self.name().unwrap_or("")),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Statistic {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct SelectorVisitor;

        impl<'de> serde::de::Visitor<'de> for SelectorVisitor {
            type Value = Statistic;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a statistic name or numeric code")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Statistic, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_f64<E: serde::de::Error>(self, v: f64) -> Result<Statistic, E> {
                Statistic::from_code(v)
                    .ok_or_else(|| E::custom(format_args!("unknown statistic code {}", v)))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Statistic, E> {
                self.visit_f64(v as f64)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Statistic, E> {
                self.visit_f64(v as f64)
            }
        }

        deserializer.deserialize_any(SelectorVisitor)
    }
}
