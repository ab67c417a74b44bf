mod error;
mod registry;
pub mod rules;
mod types;

#[cfg(feature = "global-registry")]
pub mod global;

pub use error::Error;
pub use registry::Registry;
pub use types::{
    Entry, KeyId, Language, LanguagePack, Lookup, PhraseTable, PluralCategory, PluralRule,
    PluralTables,
};

/// Builds a static slice of phrase-table entries from key/translation pairs.
///
/// Entries are created with [`Entry::new`], so key ids are computed at
/// compile time when the result is placed in a `const` or `static`. Write
/// `_` in place of a translation to record a key that exists in the table
/// but has no usable text yet.
///
/// # Example
///
/// ```
/// use phrasebook::{Entry, Lookup, PhraseTable};
///
/// static GREETINGS: &[Entry] = phrasebook::phrases! {
///     "hello" => "Hello!",
///     "farewell" => _,
/// };
///
/// let table = PhraseTable::new(GREETINGS);
/// assert_eq!(table.lookup("hello"), Lookup::Found("Hello!"));
/// assert_eq!(table.lookup("farewell"), Lookup::Untranslated);
/// ```
#[macro_export]
macro_rules! phrases {
    { $($key:literal => $text:tt),* $(,)? } => {
        &[ $( $crate::phrases!(@entry $key, $text) ),* ]
    };
    (@entry $key:literal, _) => {
        $crate::Entry::untranslated($key)
    };
    (@entry $key:literal, $text:literal) => {
        $crate::Entry::new($key, $text)
    };
}
