//! Relative-time humanization: moments to localized phrases.
//!
//! [`RelativeFormatter`] ties the pure pieces together: it computes a
//! biased magnitude between a moment and a reference, classifies it into a
//! bucket, selects the plural form the moment's locale requires, and
//! resolves the phrase through the injected provider. The two public
//! operations differ only in the sign of the delta they read and the
//! direction their phrases resolve through.

use crate::bucket::{classify, Direction};
use crate::locale::Locale;
use crate::moment::Moment;
use crate::phrase::{resolve, EmbeddedPhrases, PhraseProvider};
use crate::plural::{select, PluralForm};

/// Humanizes the distance between a moment and a reference as a localized
/// phrase.
///
/// The default provider is the embedded en/ru/uk table set; inject any
/// [`PhraseProvider`] for other locales or storage. Formatters are
/// stateless and safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct RelativeFormatter<P = EmbeddedPhrases> {
    provider: P,
}

impl RelativeFormatter<EmbeddedPhrases> {
    /// A formatter over the embedded phrase tables.
    pub fn new() -> Self {
        Self {
            provider: EmbeddedPhrases,
        }
    }
}

impl<P: PhraseProvider> RelativeFormatter<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }

    /// Future-style phrasing ("In 5 minutes") against the current clock.
    pub fn to_now(&self, moment: &Moment) -> String {
        self.to_now_at(moment, &Moment::now())
    }

    /// Future-style phrasing against an explicit reference.
    ///
    /// The magnitude is `(moment − reference) + 1` seconds. The extra
    /// second counters truncation of the fraction that elapses between
    /// capturing a moment and humanizing it, so a moment created 55 s
    /// ahead still reads "In 55 seconds" a beat later. A moment behind
    /// the reference goes negative and reads as "Just now": this
    /// operation only describes forward distances, mirroring its
    /// past-facing twin.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronoglot::{Moment, RelativeFormatter};
    ///
    /// let anchor = Moment::parse_rfc3339("2026-03-16T10:00:00Z").unwrap();
    /// let soon = Moment::parse_rfc3339("2026-03-16T10:00:54Z").unwrap();
    /// assert_eq!(RelativeFormatter::new().to_now_at(&soon, &anchor), "In 55 seconds");
    /// ```
    pub fn to_now_at(&self, moment: &Moment, reference: &Moment) -> String {
        let magnitude = reference.seconds_until(moment) + 1.0;
        self.humanize(magnitude, Direction::Future, moment.locale())
    }

    /// Past-style phrasing ("5 minutes ago") against the current clock.
    pub fn from_now(&self, moment: &Moment) -> String {
        self.from_now_at(moment, &Moment::now())
    }

    /// Past-style phrasing against an explicit reference.
    ///
    /// The magnitude is `(reference − moment) + 1` seconds; a moment ahead
    /// of the reference reads as "Just now".
    ///
    /// # Examples
    ///
    /// ```
    /// use chronoglot::{Moment, RelativeFormatter};
    ///
    /// let anchor = Moment::parse_rfc3339("2026-03-16T10:00:00Z").unwrap();
    /// let earlier = Moment::parse_rfc3339("2026-03-16T08:00:00Z").unwrap();
    /// assert_eq!(RelativeFormatter::new().from_now_at(&earlier, &anchor), "2 hours ago");
    /// ```
    pub fn from_now_at(&self, moment: &Moment, reference: &Moment) -> String {
        let magnitude = moment.seconds_until(reference) + 1.0;
        self.humanize(magnitude, Direction::Past, moment.locale())
    }

    fn humanize(&self, magnitude: f64, direction: Direction, locale: &Locale) -> String {
        let bucket = classify(magnitude);
        let form = match bucket.magnitude() {
            Some(n) => select(locale.plural_class(), n),
            None => PluralForm::Other,
        };
        resolve(bucket, form, direction, locale, &self.provider)
    }
}

impl Moment {
    /// Humanized forward distance from the current clock, with the
    /// embedded phrase tables and this moment's locale.
    pub fn to_now(&self) -> String {
        RelativeFormatter::new().to_now(self)
    }

    /// Humanized backward distance from the current clock.
    pub fn from_now(&self) -> String {
        RelativeFormatter::new().from_now(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phrase::MemoryPhrases;
    use chrono::Duration;

    fn anchor() -> Moment {
        Moment::parse_rfc3339("2026-03-16T10:00:00Z").unwrap()
    }

    fn formatter() -> RelativeFormatter {
        RelativeFormatter::new()
    }

    // Deltas below are chosen with the +1 truncation bias in mind: a
    // moment 54 s ahead of the anchor humanizes as 55 seconds.

    #[test]
    fn test_to_now_seconds() {
        let m = anchor() + Duration::seconds(54);
        assert_eq!(formatter().to_now_at(&m, &anchor()), "In 55 seconds");
    }

    #[test]
    fn test_to_now_just_now_window() {
        let m = anchor() + Duration::seconds(3);
        assert_eq!(formatter().to_now_at(&m, &anchor()), "Just now");
    }

    #[test]
    fn test_to_now_past_moment_collapses_to_just_now() {
        // to_now only describes forward distances; a past moment goes
        // negative and lands on the first rung.
        let m = anchor() - Duration::minutes(30);
        assert_eq!(formatter().to_now_at(&m, &anchor()), "Just now");
    }

    #[test]
    fn test_to_now_hours_round() {
        // 91 minutes is past the 1.5 h cutoff and rounds to 2 hours
        let m = anchor() + Duration::minutes(91);
        assert_eq!(formatter().to_now_at(&m, &anchor()), "In 2 hours");
    }

    #[test]
    fn test_to_now_calendar_buckets() {
        assert_eq!(
            formatter().to_now_at(&(anchor() + Duration::hours(30)), &anchor()),
            "Tomorrow"
        );
        assert_eq!(
            formatter().to_now_at(&(anchor() + Duration::days(10)), &anchor()),
            "Next week"
        );
        assert_eq!(
            formatter().to_now_at(&(anchor() + Duration::days(45)), &anchor()),
            "Next month"
        );
        assert_eq!(
            formatter().to_now_at(&(anchor() + Duration::days(400)), &anchor()),
            "Next year"
        );
    }

    #[test]
    fn test_from_now_months() {
        // 3000 hours ≈ 125 days ≈ 4.1 average months
        let m = anchor() - Duration::hours(3000);
        assert_eq!(formatter().from_now_at(&m, &anchor()), "4 months ago");
    }

    #[test]
    fn test_from_now_future_moment_collapses_to_just_now() {
        let m = anchor() + Duration::hours(2);
        assert_eq!(formatter().from_now_at(&m, &anchor()), "Just now");
    }

    #[test]
    fn test_russian_plural_agreement() {
        let ru = |m: Moment| m.with_locale("ru".into());
        let f = formatter();
        assert_eq!(
            f.to_now_at(&ru(anchor() + Duration::hours(2)), &anchor()),
            "Через 2 часа"
        );
        assert_eq!(
            f.to_now_at(&ru(anchor() + Duration::minutes(21)), &anchor()),
            "Через 21 минуту"
        );
        assert_eq!(
            f.from_now_at(&ru(anchor() - Duration::seconds(25)), &anchor()),
            "26 секунд назад"
        );
        assert_eq!(
            f.to_now_at(&ru(anchor() + Duration::seconds(90)), &anchor()),
            "Через минуту"
        );
    }

    #[test]
    fn test_ukrainian_phrases() {
        let uk = |m: Moment| m.with_locale("uk".into());
        let f = formatter();
        assert_eq!(
            f.from_now_at(&uk(anchor() - Duration::hours(2)), &anchor()),
            "2 години тому"
        );
        assert_eq!(
            f.from_now_at(&uk(anchor() - Duration::seconds(2)), &anchor()),
            "Щойно"
        );
    }

    #[test]
    fn test_region_variant_resolves_base_language() {
        let m = (anchor() + Duration::days(3)).with_locale("ru-UA".into());
        assert_eq!(formatter().to_now_at(&m, &anchor()), "Через 3 дня");
    }

    #[test]
    fn test_unknown_locale_degrades_to_empty_string() {
        let m = (anchor() + Duration::hours(5)).with_locale("tlh".into());
        assert_eq!(formatter().to_now_at(&m, &anchor()), "");
    }

    #[test]
    fn test_directional_symmetry() {
        // Equal absolute deltas select the same bucket either way; only
        // the direction-keyed template differs.
        let f = formatter();
        let ahead = anchor() + Duration::hours(7);
        let behind = anchor() - Duration::hours(7);
        assert_eq!(f.to_now_at(&ahead, &anchor()), "In 7 hours");
        assert_eq!(f.from_now_at(&behind, &anchor()), "7 hours ago");
    }

    #[test]
    fn test_custom_provider_is_consulted() {
        let provider = MemoryPhrases::new().with_phrase("eo", "hours.future", "Post %d horoj");
        let f = RelativeFormatter::with_provider(provider);
        let m = (anchor() + Duration::hours(7)).with_locale("eo".into());
        assert_eq!(f.to_now_at(&m, &anchor()), "Post 7 horoj");
    }
}
