mod category;
mod key_id;
mod language;
mod table;

pub use category::PluralCategory;
pub use key_id::KeyId;
pub use language::{Language, LanguagePack, PluralRule, PluralTables};
pub use table::{Entry, Lookup, PhraseTable};
