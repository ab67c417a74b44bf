//! Integration tests for singular resolution and its two-hop fallback.
//!
//! The pack mirrors a generator's output: struct literals in `const` data,
//! en-GB as the default locale, ru-RU partially translated, and de-DE with
//! no singular table at all.

use phrasebook::{Entry, Language, Lookup, PhraseTable, PluralTables, Registry, rules};

static EN_SINGULARS: &[Entry] = phrasebook::phrases! {
    "s_translated" => "English translation",
    "s_en_only" => "English only",
    "s_untranslated" => "Untranslated in Russian",
    "s_empty" => "",
};

static RU_SINGULARS: &[Entry] = phrasebook::phrases! {
    "s_translated" => "Русский перевод",
    "s_untranslated" => _,
};

const EN: Language = Language {
    name: "en-GB",
    singulars: Some(PhraseTable::new(EN_SINGULARS)),
    plurals: PluralTables::EMPTY,
    plural_rule: Some(rules::one_other),
};

const RU: Language = Language {
    name: "ru-RU",
    singulars: Some(PhraseTable::new(RU_SINGULARS)),
    plurals: PluralTables::EMPTY,
    plural_rule: Some(rules::slavic),
};

const DE: Language = Language {
    name: "de-DE",
    singulars: None,
    plurals: PluralTables::EMPTY,
    plural_rule: None,
};

static PACK: [Language; 3] = [EN, RU, DE];

fn registry() -> Registry<'static> {
    let mut registry = Registry::new();
    registry.init(&PACK).unwrap();
    registry
}

// =========================================================================
// Active-Locale Lookup
// =========================================================================

#[test]
fn translated_key_follows_active_locale() {
    let mut registry = registry();
    assert_eq!(registry.resolve("s_translated"), "English translation");

    registry.set_locale("ru-RU").unwrap();
    assert_eq!(registry.resolve("s_translated"), "Русский перевод");
}

#[test]
fn switching_locale_midsession_changes_results() {
    let mut registry = registry();
    registry.set_locale("ru-RU").unwrap();
    assert_eq!(registry.resolve("s_translated"), "Русский перевод");

    registry.set_locale("en-GB").unwrap();
    assert_eq!(registry.resolve("s_translated"), "English translation");
}

// =========================================================================
// Fallback to Default Locale
// =========================================================================

#[test]
fn missing_key_falls_back_to_default_locale() {
    let mut registry = registry();
    registry.set_locale("ru-RU").unwrap();

    assert_eq!(registry.resolve("s_en_only"), "English only");
}

#[test]
fn untranslated_entry_falls_back_to_default_locale() {
    let mut registry = registry();
    registry.set_locale("ru-RU").unwrap();

    assert_eq!(registry.resolve("s_untranslated"), "Untranslated in Russian");
}

#[test]
fn locale_without_singular_table_uses_default_locale() {
    let mut registry = registry();
    registry.set_locale("de-DE").unwrap();

    assert_eq!(registry.resolve("s_translated"), "English translation");
    assert_eq!(registry.resolve("s_en_only"), "English only");
}

// =========================================================================
// Fallback to Key
// =========================================================================

#[test]
fn unknown_key_returns_itself() {
    let mut registry = registry();
    assert_eq!(registry.resolve("not_existing"), "not_existing");

    registry.set_locale("ru-RU").unwrap();
    assert_eq!(registry.resolve("not_existing"), "not_existing");
}

#[test]
fn unresolvable_key_is_idempotent() {
    let registry = registry();
    let once = registry.resolve("not_existing");
    assert_eq!(registry.resolve(once), "not_existing");
}

#[test]
fn empty_translation_falls_back_to_key() {
    // Present in en-GB with empty text and absent everywhere else.
    let registry = registry();
    assert_eq!(registry.resolve("s_empty"), "s_empty");
}

// =========================================================================
// Table Lookup Tri-State
// =========================================================================

#[test]
fn lookup_distinguishes_untranslated_from_absent() {
    let table = PhraseTable::new(RU_SINGULARS);

    assert_eq!(
        table.lookup("s_translated"),
        Lookup::Found("Русский перевод")
    );
    assert_eq!(table.lookup("s_untranslated"), Lookup::Untranslated);
    assert_eq!(table.lookup("s_en_only"), Lookup::Absent);
}

#[test]
fn empty_text_counts_as_untranslated() {
    let table = PhraseTable::new(EN_SINGULARS);
    assert_eq!(table.lookup("s_empty"), Lookup::Untranslated);
}
