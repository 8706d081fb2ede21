//! Immutable zone-aware point-in-time values.
//!
//! A [`Moment`] pairs an absolute instant with a timezone and a locale.
//! The zone and locale are display metadata only: comparisons, ordering,
//! and second deltas are computed on the absolute timeline, so two moments
//! denoting the same instant in different zones are equal.

use std::cmp::Ordering;
use std::ops::{Add, Sub};

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::MomentError;
use crate::locale::Locale;

/// An immutable point in time with a timezone for display and a locale
/// for phrase selection.
#[derive(Debug, Clone)]
pub struct Moment {
    instant: DateTime<Utc>,
    zone: Tz,
    locale: Locale,
}

impl Moment {
    /// The current moment, in UTC with the default locale.
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// A moment at an explicit instant, in UTC with the default locale.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant,
            zone: Tz::UTC,
            locale: Locale::default(),
        }
    }

    /// Parse an RFC 3339 datetime string (e.g. `"2026-03-15T14:00:00Z"`).
    ///
    /// The offset in the string fixes the instant; the resulting moment
    /// displays in UTC until re-zoned with [`in_timezone`](Self::in_timezone).
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::InvalidDatetime`] if the string cannot be
    /// parsed.
    pub fn parse_rfc3339(s: &str) -> Result<Self, MomentError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self::new(dt.with_timezone(&Utc)))
            .map_err(|e| MomentError::InvalidDatetime(format!("'{}': {}", s, e)))
    }

    /// Parse an ISO 8601 date (`YYYY-MM-DD`) as start of day in a timezone.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::InvalidDatetime`] for an unparseable date or
    /// a nonexistent local midnight, [`MomentError::InvalidTimezone`] for
    /// an unknown IANA name.
    pub fn parse_date(s: &str, timezone: &str) -> Result<Self, MomentError> {
        let tz = parse_timezone(timezone)?;
        let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| MomentError::InvalidDatetime(format!("'{}': {}", s, e)))?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| MomentError::InvalidDatetime(format!("'{}'", s)))?;
        let local = tz.from_local_datetime(&naive).single().ok_or_else(|| {
            MomentError::InvalidDatetime(format!("'{}': ambiguous or nonexistent local time", s))
        })?;
        Ok(Self {
            instant: local.with_timezone(&Utc),
            zone: tz,
            locale: Locale::default(),
        })
    }

    /// A moment from calendar fields interpreted in a timezone.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::InvalidDatetime`] for out-of-range fields or
    /// a local time that does not exist (DST gap), or
    /// [`MomentError::InvalidTimezone`] for an unknown IANA name.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        timezone: &str,
    ) -> Result<Self, MomentError> {
        let tz = parse_timezone(timezone)?;
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            .ok_or_else(|| {
                MomentError::InvalidDatetime(format!(
                    "'{:04}-{:02}-{:02} {:02}:{:02}:{:02}'",
                    year, month, day, hour, minute, second
                ))
            })?;
        let local = tz.from_local_datetime(&naive).single().ok_or_else(|| {
            MomentError::InvalidDatetime("ambiguous or nonexistent local time".to_string())
        })?;
        Ok(Self {
            instant: local.with_timezone(&Utc),
            zone: tz,
            locale: Locale::default(),
        })
    }

    /// The same instant displayed in another timezone.
    ///
    /// # Errors
    ///
    /// Returns [`MomentError::InvalidTimezone`] for an unknown IANA name.
    pub fn in_timezone(mut self, timezone: &str) -> Result<Self, MomentError> {
        self.zone = parse_timezone(timezone)?;
        Ok(self)
    }

    /// The same moment carrying a different display locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn timezone(&self) -> Tz {
        self.zone
    }

    /// The absolute instant in UTC.
    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    /// Seconds on the Unix timeline, ignoring sub-second precision.
    pub fn unix_timestamp(&self) -> i64 {
        self.instant.timestamp()
    }

    /// Signed seconds from this moment to `other` (positive if `other` is
    /// later), with millisecond precision.
    pub fn seconds_until(&self, other: &Moment) -> f64 {
        (other.instant - self.instant).num_milliseconds() as f64 / 1000.0
    }

    /// Signed seconds from `other` to this moment (positive if this moment
    /// is later).
    pub fn seconds_since(&self, other: &Moment) -> f64 {
        -self.seconds_until(other)
    }

    /// Format with a chrono format string, in this moment's timezone.
    pub fn format(&self, fmt: &str) -> String {
        self.instant.with_timezone(&self.zone).format(fmt).to_string()
    }

    /// RFC 3339 with this moment's zone offset.
    pub fn to_rfc3339(&self) -> String {
        self.instant.with_timezone(&self.zone).to_rfc3339()
    }
}

/// Parse an IANA timezone string into `Tz`.
fn parse_timezone(s: &str) -> Result<Tz, MomentError> {
    s.parse::<Tz>()
        .map_err(|_| MomentError::InvalidTimezone(format!("'{}'", s)))
}

// Equality and ordering compare the absolute instant only; zone and locale
// never participate.

impl PartialEq for Moment {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Moment {}

impl PartialOrd for Moment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Moment {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Add<Duration> for Moment {
    type Output = Moment;

    fn add(mut self, rhs: Duration) -> Moment {
        self.instant = self.instant + rhs;
        self
    }
}

impl Sub<Duration> for Moment {
    type Output = Moment;

    fn sub(mut self, rhs: Duration) -> Moment {
        self.instant = self.instant - rhs;
        self
    }
}

/// The earliest of the given moments, if any.
pub fn minimum(moments: &[Moment]) -> Option<&Moment> {
    moments.iter().min()
}

/// The latest of the given moments, if any.
pub fn maximum(moments: &[Moment]) -> Option<&Moment> {
    moments.iter().max()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> Moment {
        Moment::parse_rfc3339(s).unwrap()
    }

    #[test]
    fn test_parse_rfc3339_normalizes_to_utc() {
        let m = at("2026-06-15T10:00:00-04:00");
        assert_eq!(m.to_rfc3339(), "2026-06-15T14:00:00+00:00");
    }

    #[test]
    fn test_parse_rfc3339_rejects_garbage() {
        let err = Moment::parse_rfc3339("not-a-datetime").unwrap_err();
        assert!(err.to_string().contains("Invalid datetime"), "got: {err}");
    }

    #[test]
    fn test_parse_date_start_of_day_in_zone() {
        let m = Moment::parse_date("2026-03-15", "America/New_York").unwrap();
        // Midnight Eastern on March 15 is 04:00 UTC (EDT)
        assert_eq!(m.instant().to_rfc3339(), "2026-03-15T04:00:00+00:00");
    }

    #[test]
    fn test_parse_date_rejects_unknown_zone() {
        let err = Moment::parse_date("2026-03-15", "Invalid/Zone").unwrap_err();
        assert!(err.to_string().contains("Invalid timezone"), "got: {err}");
    }

    #[test]
    fn test_from_ymd_hms_rejects_out_of_range() {
        let err = Moment::from_ymd_hms(2026, 2, 30, 0, 0, 0, "UTC").unwrap_err();
        assert!(err.to_string().contains("Invalid datetime"), "got: {err}");
    }

    #[test]
    fn test_equality_is_zone_independent() {
        let utc = at("2026-06-15T14:00:00Z");
        let tokyo = at("2026-06-15T23:00:00+09:00")
            .in_timezone("Asia/Tokyo")
            .unwrap();
        assert_eq!(utc, tokyo);
    }

    #[test]
    fn test_ordering_on_absolute_timeline() {
        let earlier = at("2026-06-15T14:00:00Z");
        let later = at("2026-06-15T14:00:01Z");
        assert!(earlier < later);
    }

    #[test]
    fn test_minimum_and_maximum() {
        let pavon = at("1861-09-17T10:30:00-04:00");
        let gettysburg = at("1863-07-01T00:00:00Z");
        let meierskappel = at("1847-11-23T00:00:00Z");
        let moments = [pavon.clone(), gettysburg.clone(), meierskappel.clone()];
        assert_eq!(minimum(&moments), Some(&meierskappel));
        assert_eq!(maximum(&moments), Some(&gettysburg));
        assert_eq!(minimum(&[]), None);
    }

    #[test]
    fn test_duration_arithmetic() {
        let m = at("2026-03-16T10:00:00Z");
        assert_eq!((m.clone() + Duration::days(4)).format("%Y-%m-%d"), "2026-03-20");
        assert_eq!((m - Duration::hours(11)).format("%H:%M"), "23:00");
    }

    #[test]
    fn test_seconds_until_is_signed() {
        let a = at("2026-03-16T10:00:00Z");
        let b = at("2026-03-16T10:00:55Z");
        assert_eq!(a.seconds_until(&b), 55.0);
        assert_eq!(b.seconds_until(&a), -55.0);
        assert_eq!(b.seconds_since(&a), 55.0);
    }

    #[test]
    fn test_seconds_until_has_subsecond_precision() {
        let a = at("2026-03-16T10:00:00Z");
        let b = at("2026-03-16T10:00:00.500Z");
        assert_eq!(a.seconds_until(&b), 0.5);
    }

    #[test]
    fn test_format_uses_display_zone() {
        let m = at("2026-06-15T14:00:00Z").in_timezone("Asia/Tokyo").unwrap();
        assert_eq!(m.format("%Y-%m-%d %H:%M"), "2026-06-15 23:00");
    }

    #[test]
    fn test_with_locale_carries_metadata_only() {
        let plain = at("2026-06-15T14:00:00Z");
        let localized = plain.clone().with_locale(Locale::new("ru"));
        assert_eq!(plain, localized);
        assert_eq!(localized.locale().identifier(), "ru");
    }
}
