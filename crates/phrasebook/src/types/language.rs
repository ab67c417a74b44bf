use bon::Builder;

use crate::types::{PhraseTable, PluralCategory};

/// Selects the plural category for a quantity.
///
/// Rules are plain function pointers so language packs can live entirely in
/// static storage. A rule must be total (defined for every `i64`, negatives
/// and zero included) and side-effect-free. The [`crate::rules`] module
/// provides the common CLDR cardinal rules.
pub type PluralRule = fn(i64) -> PluralCategory;

/// An ordered collection of languages.
///
/// The first element is the default locale: [`Registry::init`] selects it
/// as the initially active locale, and resolution falls back to it when the
/// active locale misses.
///
/// [`Registry::init`]: crate::Registry::init
pub type LanguagePack<'a> = [Language<'a>];

/// Per-category plural phrase tables for one language.
///
/// Each category slot is independent; a language supplies tables only for
/// the categories its plural rule can produce. Static data uses struct
/// update syntax from [`EMPTY`](Self::EMPTY):
///
/// ```
/// use phrasebook::{Entry, PhraseTable, PluralTables};
///
/// static DOGS_ONE: &[Entry] = phrasebook::phrases! { "dog" => "I have one dog." };
///
/// const TABLES: PluralTables = PluralTables {
///     one: Some(PhraseTable::new(DOGS_ONE)),
///     ..PluralTables::EMPTY
/// };
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct PluralTables<'a> {
    pub zero: Option<PhraseTable<'a>>,
    pub one: Option<PhraseTable<'a>>,
    pub two: Option<PhraseTable<'a>>,
    pub few: Option<PhraseTable<'a>>,
    pub many: Option<PhraseTable<'a>>,
    pub other: Option<PhraseTable<'a>>,
}

impl<'a> PluralTables<'a> {
    /// No tables for any category.
    pub const EMPTY: Self = Self {
        zero: None,
        one: None,
        two: None,
        few: None,
        many: None,
        other: None,
    };

    /// The table for a category, if the language supplies one.
    pub const fn get(&self, category: PluralCategory) -> Option<PhraseTable<'a>> {
        match category {
            PluralCategory::Zero => self.zero,
            PluralCategory::One => self.one,
            PluralCategory::Two => self.two,
            PluralCategory::Few => self.few,
            PluralCategory::Many => self.many,
            PluralCategory::Other => self.other,
        }
    }
}

/// A single locale: its name, phrase tables, and plural rule.
///
/// Fields are public so a build-time generator can emit languages as plain
/// struct literals in static data; the builder is for constructing packs in
/// application or test code:
///
/// ```
/// use phrasebook::{Entry, Language, PhraseTable, rules};
///
/// static SINGULARS: &[Entry] = phrasebook::phrases! { "hello" => "Hello!" };
///
/// let lang = Language::builder()
///     .name("en-GB")
///     .singulars(PhraseTable::new(SINGULARS))
///     .plural_rule(rules::one_other)
///     .build();
/// assert_eq!(lang.name, "en-GB");
/// ```
#[derive(Copy, Clone, Debug, Builder)]
pub struct Language<'a> {
    /// Locale identifier, e.g. `"en-GB"`. Matched exactly (case-sensitive)
    /// by [`Registry::set_locale`](crate::Registry::set_locale).
    pub name: &'a str,

    /// Singular phrase table. A language without one delegates all singular
    /// lookups to the default locale.
    pub singulars: Option<PhraseTable<'a>>,

    /// Plural phrase tables, keyed by category.
    #[builder(default = PluralTables::EMPTY)]
    pub plurals: PluralTables<'a>,

    /// Plural rule for this language. When absent, plural lookups on this
    /// language always fail over to the default locale.
    pub plural_rule: Option<PluralRule>,
}
