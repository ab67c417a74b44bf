#![cfg(feature = "global-registry")]

//! Integration test for the `global-registry` feature.
//!
//! A single test drives the whole lifecycle: the registry is process-wide
//! state, so splitting this into parallel test functions would race.

use phrasebook::{Entry, Language, PhraseTable, PluralTables, Registry, global, rules};

static EN_SINGULARS: &[Entry] = phrasebook::phrases! {
    "s_translated" => "English translation",
};

static RU_SINGULARS: &[Entry] = phrasebook::phrases! {
    "s_translated" => "Русский перевод",
};

static RU_PLURALS_FEW: &[Entry] = phrasebook::phrases! {
    "p_i_have_dogs" => "У меня %d собаки.",
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
    plurals: PluralTables {
        few: Some(PhraseTable::new(RU_PLURALS_FEW)),
        ..PluralTables::EMPTY
    },
    plural_rule: Some(rules::slavic),
};

static PACK: [Language; 2] = [EN, RU];

#[test]
fn global_registry_lifecycle() {
    // Uninitialized: resolution degrades to the key.
    assert_eq!(global::current_locale(), None);
    assert_eq!(global::resolve("s_translated"), "s_translated");

    global::init(&PACK).unwrap();
    assert_eq!(global::current_locale(), Some("en-GB"));
    assert_eq!(global::resolve("s_translated"), "English translation");

    global::set_locale("ru-RU").unwrap();
    assert_eq!(global::resolve("s_translated"), "Русский перевод");
    assert_eq!(global::resolve_plural("p_i_have_dogs", 3), "У меня %d собаки.");

    assert!(global::set_locale("en-US").is_err());
    assert_eq!(global::current_locale(), Some("ru-RU"));

    // Direct access for anything without a sugar function.
    let name = global::with_registry(Registry::current_locale);
    assert_eq!(name, Some("ru-RU"));

    global::reset();
    assert_eq!(global::current_locale(), None);
    assert_eq!(global::resolve("s_translated"), "s_translated");
}
