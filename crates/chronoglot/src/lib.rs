//! # chronoglot
//!
//! Moment values and locale-aware relative-time humanization: the distance
//! between two points in time becomes a grammatically correct phrase in the
//! moment's locale — "In 5 minutes", "3 hours ago", "Через 21 минуту".
//!
//! The humanization pipeline is a chain of pure pieces: a duration
//! magnitude classifies into a semantic bucket, the locale's plural rule
//! picks the form its numeral must agree with, and a phrase template is
//! resolved through an injected provider and filled in. Each piece is
//! usable on its own; [`RelativeFormatter`] ties them together.
//!
//! ## Modules
//!
//! - [`moment`] — zone-aware immutable instants with ordering, arithmetic,
//!   and parsing
//! - [`bucket`] — duration magnitude → semantic bucket classification
//! - [`plural`] — plural-form selection (single-form and Slavic three-form)
//! - [`phrase`] — phrase templates, providers, and the resolver
//! - [`relative`] — the `to_now` / `from_now` formatter
//! - [`locale`] — locale identifiers and plural-rule classes
//! - [`error`] — error types

pub mod bucket;
pub mod error;
pub mod locale;
pub mod moment;
pub mod phrase;
pub mod plural;
pub mod relative;

pub use bucket::{classify, Bucket, Direction};
pub use error::MomentError;
pub use locale::{Locale, LocaleClass};
pub use moment::{maximum, minimum, Moment};
pub use phrase::{resolve, CachedPhrases, EmbeddedPhrases, MemoryPhrases, PhraseProvider};
pub use plural::{select, PluralForm};
pub use relative::RelativeFormatter;
