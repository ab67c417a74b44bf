//! Locale selection and translation resolution.
//!
//! The Registry borrows a static language pack, tracks the active locale,
//! and resolves message keys with two-hop fallback: active locale, then the
//! pack's default locale, then the key itself.

use std::ptr;

use crate::error::Error;
use crate::types::{KeyId, Language, LanguagePack};

/// Runtime registry over a language pack.
///
/// The registry holds a non-owning reference to the pack, so packs can be
/// static data emitted by a code generator. Locale management (`init`,
/// `set_locale`) returns errors; resolution (`resolve`, `resolve_plural`)
/// never does — a miss anywhere along the fallback chain terminates in the
/// key itself, so the caller always gets displayable text.
///
/// # Example
///
/// ```
/// use phrasebook::{Entry, Language, PhraseTable, Registry};
///
/// static EN: &[Entry] = phrasebook::phrases! { "hello" => "Hello!" };
/// static RU: &[Entry] = phrasebook::phrases! { "hello" => "Привет!" };
///
/// let pack = [
///     Language::builder()
///         .name("en-GB")
///         .singulars(PhraseTable::new(EN))
///         .build(),
///     Language::builder()
///         .name("ru-RU")
///         .singulars(PhraseTable::new(RU))
///         .build(),
/// ];
///
/// let mut registry = Registry::new();
/// registry.init(&pack).unwrap();
/// assert_eq!(registry.resolve("hello"), "Hello!");
///
/// registry.set_locale("ru-RU").unwrap();
/// assert_eq!(registry.resolve("hello"), "Привет!");
/// assert_eq!(registry.resolve("missing"), "missing");
/// ```
#[derive(Debug, Default)]
pub struct Registry<'a> {
    /// Registered pack; element 0 is the default locale.
    pack: Option<&'a LanguagePack<'a>>,
    /// Currently selected language. Set together with `pack`.
    active: Option<&'a Language<'a>>,
}

impl<'a> Registry<'a> {
    /// An uninitialized registry. Resolution degrades to returning keys
    /// verbatim until [`init`](Self::init) is called.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Register a language pack, selecting its first element as both the
    /// active and the default locale.
    ///
    /// Fails with [`Error::InvalidPack`] if the pack is empty, leaving the
    /// registry untouched. Re-initialization is allowed and replaces any
    /// previously registered pack outright.
    pub fn init(&mut self, pack: &'a LanguagePack<'a>) -> Result<(), Error> {
        let Some(default) = pack.first() else {
            return Err(Error::InvalidPack);
        };
        self.pack = Some(pack);
        self.active = Some(default);
        Ok(())
    }

    /// Switch the active locale.
    ///
    /// The name must match a language in the pack exactly (case-sensitive).
    /// On failure the previously active locale remains selected; the default
    /// locale is never affected.
    pub fn set_locale(&mut self, name: &str) -> Result<(), Error> {
        let Some(pack) = self.pack else {
            return Err(Error::NotInitialized);
        };
        let Some(language) = pack.iter().find(|language| language.name == name) else {
            return Err(Error::LocaleNotFound {
                name: name.to_string(),
            });
        };
        self.active = Some(language);
        Ok(())
    }

    /// Name of the active locale, or `None` if the registry was never
    /// initialized (or has been reset).
    pub fn current_locale(&self) -> Option<&'a str> {
        self.active.map(|language| language.name)
    }

    /// Clear all state back to the pre-initialization condition.
    ///
    /// A lifecycle utility for tests that need a known starting point; not
    /// part of normal runtime use.
    pub fn reset(&mut self) {
        self.pack = None;
        self.active = None;
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve `key` to its translation in the active locale.
    ///
    /// Falls back to the default locale when the active locale has no
    /// usable translation, and to `key` itself when both miss. Resolving an
    /// unresolvable key is idempotent: the result resolves to itself.
    pub fn resolve<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.resolve_id(KeyId::from_key(key), key)
    }

    /// Resolve `key` using a precomputed [`KeyId`].
    ///
    /// Identical to [`resolve`](Self::resolve), but table scans compare ids
    /// instead of hashing and comparing the key on every call. `key` is
    /// still required: it disambiguates hash collisions and supplies the
    /// verbatim fallback text.
    pub fn resolve_id<'k>(&self, id: KeyId, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        let Some((active, default)) = self.lookup_chain() else {
            return key;
        };
        if let Some(text) = singular_in(active, id, key) {
            return text;
        }
        if !ptr::eq(active, default) {
            if let Some(text) = singular_in(default, id, key) {
                return text;
            }
        }
        key
    }

    /// Resolve `key` to the plural form selected by `quantity`.
    ///
    /// The active locale's plural rule maps `quantity` to a category, and
    /// the lookup proceeds in that category's table. A missing rule, table,
    /// or entry falls back to the default locale, then to `key` verbatim.
    pub fn resolve_plural<'k>(&self, key: &'k str, quantity: i64) -> &'k str
    where
        'a: 'k,
    {
        self.resolve_plural_id(KeyId::from_key(key), key, quantity)
    }

    /// Resolve a plural form using a precomputed [`KeyId`].
    ///
    /// See [`resolve_id`](Self::resolve_id) for the id/key split and
    /// [`resolve_plural`](Self::resolve_plural) for the fallback semantics.
    pub fn resolve_plural_id<'k>(&self, id: KeyId, key: &'k str, quantity: i64) -> &'k str
    where
        'a: 'k,
    {
        let Some((active, default)) = self.lookup_chain() else {
            return key;
        };
        if let Some(text) = plural_in(active, id, key, quantity) {
            return text;
        }
        if !ptr::eq(active, default) {
            if let Some(text) = plural_in(default, id, key, quantity) {
                return text;
            }
        }
        key
    }

    /// The active and default languages, present only after `init`.
    fn lookup_chain(&self) -> Option<(&'a Language<'a>, &'a Language<'a>)> {
        let active = self.active?;
        let pack = self.pack?;
        Some((active, &pack[0]))
    }
}

/// Singular lookup within one language.
fn singular_in<'a>(language: &'a Language<'a>, id: KeyId, key: &str) -> Option<&'a str> {
    language.singulars?.lookup_id(id, key).found()
}

/// Plural lookup within one language, using that language's own rule.
///
/// The plural category depends on the locale as much as on the quantity, so
/// each fallback hop recomputes it with the rule of the language being
/// consulted rather than reusing a category computed for another language.
fn plural_in<'a>(language: &'a Language<'a>, id: KeyId, key: &str, quantity: i64) -> Option<&'a str> {
    let rule = language.plural_rule?;
    let table = language.plurals.get(rule(quantity))?;
    table.lookup_id(id, key).found()
}
