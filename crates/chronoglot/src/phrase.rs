//! Localized phrase templates and the resolver that fills them in.
//!
//! Phrase storage is an injected capability: the resolver only depends on
//! [`PhraseProvider::lookup`], so hosts can back it with the embedded
//! tables, an in-memory map, or anything else. Lookup failure is never an
//! error — the resolver degrades to an empty string, because a humanized
//! timestamp must not take down a caller's rendering path.
//!
//! # Key grammar
//!
//! Every bucket/direction pair maps to a stable base key:
//!
//! - numeric buckets: `seconds.future`, `minutes.past`, `hours.future`, …
//! - single-unit buckets: `minute.future` ("In a minute"), `hour.past`
//!   ("An hour ago"), `now.future` / `now.past` ("Just now")
//! - calendar buckets: `tomorrow`, `yesterday`, `next.week`, `last.week`,
//!   `next.month`, `last.month`, `next.year`, `last.year`
//!
//! For numeric buckets the plural-form marker is appended to the base key
//! before lookup (`seconds.future__` is the singular-agreement Russian
//! template), and the returned template's `%d` placeholder is replaced
//! with the magnitude.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::bucket::{Bucket, Direction};
use crate::locale::Locale;
use crate::plural::PluralForm;

/// Source of localized phrase templates.
///
/// Implementations resolve a key for a locale, trying the exact identifier
/// first and falling back to the base language code. `None` means the
/// phrase is unavailable at every level; the resolver turns that into an
/// empty string.
///
/// Implementations must be safe to call concurrently. A provider that
/// loads lazily may race duplicate loads on first use, as long as every
/// racer converges to the same template set.
pub trait PhraseProvider {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<String>;
}

/// Resolve a bucket to its final localized phrase.
///
/// Invariant buckets resolve their fixed key directly. Numeric buckets
/// append the plural marker to the key, then substitute the magnitude into
/// the template's `%d` placeholder. Any lookup miss yields `""`.
pub fn resolve<P: PhraseProvider + ?Sized>(
    bucket: Bucket,
    form: PluralForm,
    direction: Direction,
    locale: &Locale,
    provider: &P,
) -> String {
    let base = base_key(bucket, direction);
    match bucket.magnitude() {
        Some(n) => {
            let key = format!("{}{}", base, form.key_suffix());
            provider
                .lookup(&key, locale)
                .map(|template| template.replacen("%d", &n.to_string(), 1))
                .unwrap_or_default()
        }
        None => provider.lookup(base, locale).unwrap_or_default(),
    }
}

/// Base lookup key for a bucket/direction pair.
fn base_key(bucket: Bucket, direction: Direction) -> &'static str {
    use Bucket::*;
    use Direction::*;
    match (bucket, direction) {
        (JustNow, Future) => "now.future",
        (JustNow, Past) => "now.past",
        (Seconds(_), Future) => "seconds.future",
        (Seconds(_), Past) => "seconds.past",
        (AMinute, Future) => "minute.future",
        (AMinute, Past) => "minute.past",
        (Minutes(_), Future) => "minutes.future",
        (Minutes(_), Past) => "minutes.past",
        (AnHour, Future) => "hour.future",
        (AnHour, Past) => "hour.past",
        (Hours(_), Future) => "hours.future",
        (Hours(_), Past) => "hours.past",
        (ADay, Future) => "tomorrow",
        (ADay, Past) => "yesterday",
        (Days(_), Future) => "days.future",
        (Days(_), Past) => "days.past",
        (AWeek, Future) => "next.week",
        (AWeek, Past) => "last.week",
        (Weeks(_), Future) => "weeks.future",
        (Weeks(_), Past) => "weeks.past",
        (AMonth, Future) => "next.month",
        (AMonth, Past) => "last.month",
        (Months(_), Future) => "months.future",
        (Months(_), Past) => "months.past",
        (AYear, Future) => "next.year",
        (AYear, Past) => "last.year",
        (Years(_), Future) => "years.future",
        (Years(_), Past) => "years.past",
    }
}

// ── Embedded tables ─────────────────────────────────────────────────────────

/// The built-in phrase tables: English, Russian, Ukrainian.
///
/// Tables are keyed by base language, so `"ru-UA"` resolves through the
/// Russian table. Unknown languages miss entirely and the resolver
/// degrades to `""`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedPhrases;

impl PhraseProvider for EmbeddedPhrases {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<String> {
        let table = match locale.language().as_str() {
            "en" => en_template,
            "ru" => ru_template,
            "uk" => uk_template,
            _ => return None,
        };
        table(key).map(str::to_owned)
    }
}

fn en_template(key: &str) -> Option<&'static str> {
    // English never marks plural keys; Standard-class locales only ever
    // ask for the unmarked base key.
    match key {
        "now.future" => Some("Just now"),
        "seconds.future" => Some("In %d seconds"),
        "minute.future" => Some("In a minute"),
        "minutes.future" => Some("In %d minutes"),
        "hour.future" => Some("In an hour"),
        "hours.future" => Some("In %d hours"),
        "tomorrow" => Some("Tomorrow"),
        "days.future" => Some("In %d days"),
        "next.week" => Some("Next week"),
        "weeks.future" => Some("In %d weeks"),
        "next.month" => Some("Next month"),
        "months.future" => Some("In %d months"),
        "next.year" => Some("Next year"),
        "years.future" => Some("In %d years"),
        "now.past" => Some("Just now"),
        "seconds.past" => Some("%d seconds ago"),
        "minute.past" => Some("A minute ago"),
        "minutes.past" => Some("%d minutes ago"),
        "hour.past" => Some("An hour ago"),
        "hours.past" => Some("%d hours ago"),
        "yesterday" => Some("Yesterday"),
        "days.past" => Some("%d days ago"),
        "last.week" => Some("Last week"),
        "weeks.past" => Some("%d weeks ago"),
        "last.month" => Some("Last month"),
        "months.past" => Some("%d months ago"),
        "last.year" => Some("Last year"),
        "years.past" => Some("%d years ago"),
        _ => None,
    }
}

fn ru_template(key: &str) -> Option<&'static str> {
    match key {
        "now.future" => Some("Сейчас"),
        "seconds.future" => Some("Через %d секунд"),
        "seconds.future_" => Some("Через %d секунды"),
        "seconds.future__" => Some("Через %d секунду"),
        "minute.future" => Some("Через минуту"),
        "minutes.future" => Some("Через %d минут"),
        "minutes.future_" => Some("Через %d минуты"),
        "minutes.future__" => Some("Через %d минуту"),
        "hour.future" => Some("Через час"),
        "hours.future" => Some("Через %d часов"),
        "hours.future_" => Some("Через %d часа"),
        "hours.future__" => Some("Через %d час"),
        "tomorrow" => Some("Завтра"),
        "days.future" => Some("Через %d дней"),
        "days.future_" => Some("Через %d дня"),
        "days.future__" => Some("Через %d день"),
        "next.week" => Some("На следующей неделе"),
        "weeks.future" => Some("Через %d недель"),
        "weeks.future_" => Some("Через %d недели"),
        "weeks.future__" => Some("Через %d неделю"),
        "next.month" => Some("В следующем месяце"),
        "months.future" => Some("Через %d месяцев"),
        "months.future_" => Some("Через %d месяца"),
        "months.future__" => Some("Через %d месяц"),
        "next.year" => Some("В следующем году"),
        "years.future" => Some("Через %d лет"),
        "years.future_" => Some("Через %d года"),
        "years.future__" => Some("Через %d год"),
        "now.past" => Some("Только что"),
        "seconds.past" => Some("%d секунд назад"),
        "seconds.past_" => Some("%d секунды назад"),
        "seconds.past__" => Some("%d секунду назад"),
        "minute.past" => Some("Минуту назад"),
        "minutes.past" => Some("%d минут назад"),
        "minutes.past_" => Some("%d минуты назад"),
        "minutes.past__" => Some("%d минуту назад"),
        "hour.past" => Some("Час назад"),
        "hours.past" => Some("%d часов назад"),
        "hours.past_" => Some("%d часа назад"),
        "hours.past__" => Some("%d час назад"),
        "yesterday" => Some("Вчера"),
        "days.past" => Some("%d дней назад"),
        "days.past_" => Some("%d дня назад"),
        "days.past__" => Some("%d день назад"),
        "last.week" => Some("На прошлой неделе"),
        "weeks.past" => Some("%d недель назад"),
        "weeks.past_" => Some("%d недели назад"),
        "weeks.past__" => Some("%d неделю назад"),
        "last.month" => Some("В прошлом месяце"),
        "months.past" => Some("%d месяцев назад"),
        "months.past_" => Some("%d месяца назад"),
        "months.past__" => Some("%d месяц назад"),
        "last.year" => Some("В прошлом году"),
        "years.past" => Some("%d лет назад"),
        "years.past_" => Some("%d года назад"),
        "years.past__" => Some("%d год назад"),
        _ => None,
    }
}

fn uk_template(key: &str) -> Option<&'static str> {
    match key {
        "now.future" => Some("Зараз"),
        "seconds.future" => Some("Через %d секунд"),
        "seconds.future_" => Some("Через %d секунди"),
        "seconds.future__" => Some("Через %d секунду"),
        "minute.future" => Some("Через хвилину"),
        "minutes.future" => Some("Через %d хвилин"),
        "minutes.future_" => Some("Через %d хвилини"),
        "minutes.future__" => Some("Через %d хвилину"),
        "hour.future" => Some("Через годину"),
        "hours.future" => Some("Через %d годин"),
        "hours.future_" => Some("Через %d години"),
        "hours.future__" => Some("Через %d годину"),
        "tomorrow" => Some("Завтра"),
        "days.future" => Some("Через %d днів"),
        "days.future_" => Some("Через %d дні"),
        "days.future__" => Some("Через %d день"),
        "next.week" => Some("Наступного тижня"),
        "weeks.future" => Some("Через %d тижнів"),
        "weeks.future_" => Some("Через %d тижні"),
        "weeks.future__" => Some("Через %d тиждень"),
        "next.month" => Some("Наступного місяця"),
        "months.future" => Some("Через %d місяців"),
        "months.future_" => Some("Через %d місяці"),
        "months.future__" => Some("Через %d місяць"),
        "next.year" => Some("Наступного року"),
        "years.future" => Some("Через %d років"),
        "years.future_" => Some("Через %d роки"),
        "years.future__" => Some("Через %d рік"),
        "now.past" => Some("Щойно"),
        "seconds.past" => Some("%d секунд тому"),
        "seconds.past_" => Some("%d секунди тому"),
        "seconds.past__" => Some("%d секунду тому"),
        "minute.past" => Some("Хвилину тому"),
        "minutes.past" => Some("%d хвилин тому"),
        "minutes.past_" => Some("%d хвилини тому"),
        "minutes.past__" => Some("%d хвилину тому"),
        "hour.past" => Some("Годину тому"),
        "hours.past" => Some("%d годин тому"),
        "hours.past_" => Some("%d години тому"),
        "hours.past__" => Some("%d годину тому"),
        "yesterday" => Some("Вчора"),
        "days.past" => Some("%d днів тому"),
        "days.past_" => Some("%d дні тому"),
        "days.past__" => Some("%d день тому"),
        "last.week" => Some("Минулого тижня"),
        "weeks.past" => Some("%d тижнів тому"),
        "weeks.past_" => Some("%d тижні тому"),
        "weeks.past__" => Some("%d тиждень тому"),
        "last.month" => Some("Минулого місяця"),
        "months.past" => Some("%d місяців тому"),
        "months.past_" => Some("%d місяці тому"),
        "months.past__" => Some("%d місяць тому"),
        "last.year" => Some("Минулого року"),
        "years.past" => Some("%d років тому"),
        "years.past_" => Some("%d роки тому"),
        "years.past__" => Some("%d рік тому"),
        _ => None,
    }
}

// ── In-memory provider ──────────────────────────────────────────────────────

/// Caller-supplied phrase tables keyed by locale identifier.
///
/// Lookup tries the exact identifier first, then the base language code,
/// mirroring the fallback chain of resource-bundle stores: a `"ru-UA"`
/// table can override individual keys while the `"ru"` table covers the
/// rest.
#[derive(Debug, Clone, Default)]
pub struct MemoryPhrases {
    tables: HashMap<String, HashMap<String, String>>,
}

impl MemoryPhrases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a template under a locale identifier.
    pub fn insert(
        &mut self,
        locale_id: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.tables
            .entry(locale_id.into())
            .or_default()
            .insert(key.into(), template.into());
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_phrase(
        mut self,
        locale_id: impl Into<String>,
        key: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(locale_id, key, template);
        self
    }
}

impl PhraseProvider for MemoryPhrases {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<String> {
        let exact = self
            .tables
            .get(locale.identifier())
            .and_then(|table| table.get(key));
        exact
            .or_else(|| {
                self.tables
                    .get(&locale.language())
                    .and_then(|table| table.get(key))
            })
            .cloned()
    }
}

// ── Caching decorator ───────────────────────────────────────────────────────

/// Read-mostly memoization of another provider, keyed by (locale, key).
///
/// Misses are cached too, so a provider that does real I/O is consulted at
/// most once per (locale, key) in the common case. Concurrent first
/// lookups may race and both consult the inner provider; every racer
/// stores the same value, so the cache converges. A poisoned lock is
/// treated as a cache miss rather than a panic.
pub struct CachedPhrases<P> {
    inner: P,
    cache: RwLock<HashMap<(String, String), Option<String>>>,
}

impl<P: PhraseProvider> CachedPhrases<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }
}

impl<P: PhraseProvider> PhraseProvider for CachedPhrases<P> {
    fn lookup(&self, key: &str, locale: &Locale) -> Option<String> {
        let cache_key = (locale.identifier().to_string(), key.to_string());

        if let Ok(cache) = self.cache.read() {
            if let Some(hit) = cache.get(&cache_key) {
                return hit.clone();
            }
        }

        let value = self.inner.lookup(key, locale);
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(cache_key, value.clone());
        }
        value
    }
}
