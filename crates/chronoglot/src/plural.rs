//! Plural-form selection for numeral agreement.
//!
//! Standard locales use a single phrase form for every magnitude. Slavic
//! style locales (Russian, Ukrainian) pick between three forms based on the
//! numeral's last one and two digits: 1 takes the singular, 2–4 the paucal,
//! and everything else — including the 11–14 teens — the genitive plural.
//!
//! # Invariants
//!
//! 1. `select` maps any `i64` to exactly one [`PluralForm`].
//! 2. [`LocaleClass::Standard`] always yields [`PluralForm::Other`].
//! 3. Selection is pure: same class and magnitude, same form.

use serde::Serialize;

use crate::locale::LocaleClass;

/// Grammatical form a numeral agrees with, named after the CLDR categories
/// the Slavic rule distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PluralForm {
    /// The catch-all form (genitive plural in Russian/Ukrainian), and the
    /// only form Standard locales use.
    Other,
    /// The paucal form for 2–4 outside the teens.
    Few,
    /// The singular-agreement form for numerals ending in 1, except 11.
    One,
}

impl PluralForm {
    /// Marker appended to a phrase key to address this form's template.
    ///
    /// `Other` is the unmarked base key; the markers mirror the underscore
    /// convention of `.strings`-style resource tables.
    pub fn key_suffix(&self) -> &'static str {
        match self {
            PluralForm::Other => "",
            PluralForm::Few => "_",
            PluralForm::One => "__",
        }
    }
}

/// Select the plural form a phrase must use to agree with `magnitude`.
///
/// Only buckets that carry a numeral consult this; invariant phrases
/// ("Tomorrow", "Next week") always use the unmarked form.
pub fn select(class: LocaleClass, magnitude: i64) -> PluralForm {
    match class {
        LocaleClass::Standard => PluralForm::Other,
        LocaleClass::SlavicStyle => slavic_form(magnitude),
    }
}

/// The Russian/Ukrainian decision table, branches in order.
///
/// `xy` is the last two digits, `y` the last one; the rule repeats by the
/// last two digits, so 21 agrees like 1 and 111 like 11.
fn slavic_form(magnitude: i64) -> PluralForm {
    let m = magnitude.unsigned_abs();
    let xy = m % 100;
    let y = m % 10;

    if y == 0 || y > 4 || (xy > 10 && xy < 15) {
        return PluralForm::Other;
    }
    if y > 1 && y < 5 && (xy < 10 || xy > 20) {
        return PluralForm::Few;
    }
    if y == 1 && xy != 11 {
        return PluralForm::One;
    }
    PluralForm::Other
}
