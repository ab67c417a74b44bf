//! Built-in CLDR cardinal plural rules.
//!
//! These rules implement the integer subset of the CLDR operand model: the
//! operand `i` is the absolute value of the quantity and the fractional
//! operands are taken as zero. That covers the integer counters UI code
//! passes to [`Registry::resolve_plural`](crate::Registry::resolve_plural).
//!
//! Every rule is total over `i64` and side-effect-free, so the functions
//! can be stored directly in static [`Language`](crate::Language) data.

use crate::types::{PluralCategory, PluralRule};

/// The `i` operand: integer part of the absolute value of the quantity.
fn operand_i(quantity: i64) -> u64 {
    quantity.unsigned_abs()
}

/// Single `other` form.
///
/// Japanese, Korean, Chinese, Thai, Vietnamese, Indonesian.
pub fn other_only(_quantity: i64) -> PluralCategory {
    PluralCategory::Other
}

/// `one` at exactly 1, `other` everywhere else.
///
/// English, German, Spanish, Italian, Dutch, Greek, and most other
/// two-form languages.
pub fn one_other(quantity: i64) -> PluralCategory {
    if operand_i(quantity) == 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// `one` at 0 and 1, `other` everywhere else.
///
/// French and Portuguese.
pub fn french(quantity: i64) -> PluralCategory {
    if operand_i(quantity) <= 1 {
        PluralCategory::One
    } else {
        PluralCategory::Other
    }
}

/// East Slavic four-form rule: `one` / `few` / `many` by `i % 10` and
/// `i % 100`.
///
/// Russian, Ukrainian, Belarusian, Serbian, Croatian. For integers the
/// `other` category is unreachable; the three returned categories
/// partition the whole domain:
///
/// - `one`: `i % 10 == 1` and `i % 100 != 11` (1, 21, 31, ... but not 11)
/// - `few`: `i % 10` in 2..=4 and `i % 100` not in 12..=14
/// - `many`: everything else (0, 5..=20, 111, ...)
pub fn slavic(quantity: i64) -> PluralCategory {
    let i = operand_i(quantity);
    if i % 10 == 1 && i % 100 != 11 {
        PluralCategory::One
    } else if (2..=4).contains(&(i % 10)) && !(12..=14).contains(&(i % 100)) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Polish rule: like [`slavic`] for `few`, but `one` only at exactly 1.
pub fn polish(quantity: i64) -> PluralCategory {
    let i = operand_i(quantity);
    if i == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&(i % 10)) && !(12..=14).contains(&(i % 100)) {
        PluralCategory::Few
    } else {
        PluralCategory::Many
    }
}

/// Czech and Slovak rule: `one` at 1, `few` at 2..=4, `other` elsewhere.
pub fn czech(quantity: i64) -> PluralCategory {
    let i = operand_i(quantity);
    if i == 1 {
        PluralCategory::One
    } else if (2..=4).contains(&i) {
        PluralCategory::Few
    } else {
        PluralCategory::Other
    }
}

/// Arabic rule, using all six categories.
///
/// `zero` at 0, `one` at 1, `two` at 2, `few` when `n % 100` is in 3..=10,
/// `many` when `n % 100` is in 11..=99, `other` elsewhere (100, 101, 102,
/// 1000, ...).
pub fn arabic(quantity: i64) -> PluralCategory {
    let n = operand_i(quantity);
    match n {
        0 => PluralCategory::Zero,
        1 => PluralCategory::One,
        2 => PluralCategory::Two,
        _ if (3..=10).contains(&(n % 100)) => PluralCategory::Few,
        _ if (11..=99).contains(&(n % 100)) => PluralCategory::Many,
        _ => PluralCategory::Other,
    }
}

/// Look up the built-in rule for a locale name.
///
/// Only the language subtag matters: `"ru-RU"`, `"ru_RU"`, and `"RU"` all
/// map to [`slavic`]. Returns `None` for languages without a built-in rule;
/// pack authors can always supply their own function instead.
///
/// # Example
///
/// ```
/// use phrasebook::{PluralCategory, rules};
///
/// let rule = rules::for_locale("ru-RU").unwrap();
/// assert_eq!(rule(5), PluralCategory::Many);
/// assert!(rules::for_locale("tlh").is_none());
/// ```
pub fn for_locale(locale: &str) -> Option<PluralRule> {
    let lang = locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase();
    let rule: PluralRule = match lang.as_str() {
        "ja" | "ko" | "zh" | "th" | "vi" | "id" => other_only,
        "en" | "de" | "es" | "it" | "nl" | "el" | "bg" | "hu" | "fi" | "tr" | "sv" | "da"
        | "no" | "et" => one_other,
        "fr" | "pt" => french,
        "ru" | "uk" | "be" | "sr" | "hr" | "bs" => slavic,
        "pl" => polish,
        "cs" | "sk" => czech,
        "ar" => arabic,
        _ => return None,
    };
    Some(rule)
}
