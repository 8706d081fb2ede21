//! Duration magnitude classification.
//!
//! A rectified delta in seconds maps onto a ladder of semantic buckets:
//! under a minute the phrase counts seconds, between one and two minutes it
//! says "a minute", and so on up through hours, days, weeks, months, and
//! years. Thresholds are evaluated strictly in ascending order — the first
//! matching rung wins — and classification is total: every `f64` input
//! yields exactly one bucket.

use serde::Serialize;

/// Whether a humanized phrase reads future-relative ("In …") or
/// past-relative ("… ago").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Future,
    Past,
}

const MINUTE: f64 = 60.0;
const HOUR: f64 = 3600.0;
const DAY: f64 = 86400.0;
const WEEK: f64 = 604800.0;
/// Average Gregorian month (30.44 days).
const MONTH: f64 = 2629746.0;
/// Average Gregorian year (365.2425 days).
const YEAR: f64 = 31556952.0;

/// Semantic unit for a duration magnitude.
///
/// Variants carrying a number agree with a numeral in the phrase ("In 3
/// hours"); the rest are invariant ("Tomorrow", "Next week") and never
/// consult the plural selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bucket {
    /// Under five seconds, or any magnitude that cannot be bucketed.
    JustNow,
    Seconds(i64),
    AMinute,
    Minutes(i64),
    AnHour,
    Hours(i64),
    /// "Tomorrow" / "Yesterday".
    ADay,
    Days(i64),
    /// "Next week" / "Last week".
    AWeek,
    Weeks(i64),
    /// "Next month" / "Last month" — a wider window than one average
    /// month: it runs up to 61 days before generic month counting starts.
    AMonth,
    Months(i64),
    /// "Next year" / "Last year".
    AYear,
    Years(i64),
}

impl Bucket {
    /// The numeral this bucket's phrase agrees with, if any.
    pub fn magnitude(&self) -> Option<i64> {
        match self {
            Bucket::Seconds(n)
            | Bucket::Minutes(n)
            | Bucket::Hours(n)
            | Bucket::Days(n)
            | Bucket::Weeks(n)
            | Bucket::Months(n)
            | Bucket::Years(n) => Some(*n),
            _ => None,
        }
    }
}

/// Classify a rectified duration magnitude in seconds.
///
/// Sub-bucket numerals truncate (`floor`) except for `Hours`, which rounds
/// to the nearest hour: 1.9 hours reads as "2 hours" while 1.9 days reads
/// as "1 day". The asymmetry is deliberate and observable at the bucket
/// boundaries, so it is preserved exactly.
///
/// Total over all of `f64`: NaN and infinities collapse to [`Bucket::JustNow`]
/// rather than falling through the comparisons below, and negative inputs
/// land on the first rung.
///
/// # Examples
///
/// ```
/// use chronoglot::{classify, Bucket};
///
/// assert_eq!(classify(4.9), Bucket::JustNow);
/// assert_eq!(classify(5.0), Bucket::Seconds(5));
/// assert_eq!(classify(6840.0), Bucket::Hours(2)); // 1.9 h rounds up
/// assert_eq!(classify(250560.0), Bucket::Days(2)); // 2.9 d floors down
/// ```
pub fn classify(delta_seconds: f64) -> Bucket {
    if !delta_seconds.is_finite() {
        return Bucket::JustNow;
    }

    let d = delta_seconds;
    if d < 5.0 {
        Bucket::JustNow
    } else if d < MINUTE {
        Bucket::Seconds(d.floor() as i64)
    } else if d < MINUTE * 2.0 {
        Bucket::AMinute
    } else if d < HOUR {
        Bucket::Minutes((d / MINUTE).floor() as i64)
    } else if d < HOUR * 1.5 {
        Bucket::AnHour
    } else if d < DAY {
        Bucket::Hours((d / HOUR).round() as i64)
    } else if d < DAY * 2.0 {
        Bucket::ADay
    } else if d < WEEK {
        Bucket::Days((d / DAY).floor() as i64)
    } else if d < WEEK * 2.0 {
        Bucket::AWeek
    } else if d < MONTH {
        Bucket::Weeks((d / WEEK).floor() as i64)
    } else if d < DAY * 61.0 {
        Bucket::AMonth
    } else if d < YEAR {
        Bucket::Months((d / MONTH).floor() as i64)
    } else if d < YEAR * 2.0 {
        Bucket::AYear
    } else {
        Bucket::Years((d / YEAR).floor() as i64)
    }
}
