use crate::types::KeyId;

/// Outcome of a phrase-table lookup.
///
/// `Untranslated` and `Absent` both make resolution fall back, but they are
/// distinct states: `Untranslated` means the table carries an entry for the
/// key with no usable text (none, or empty), while `Absent` means the table
/// has no entry for the key at all.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Lookup<'a> {
    /// The key is translated; contains the non-empty translation.
    Found(&'a str),
    /// The key has an entry but no usable translation.
    Untranslated,
    /// The table has no entry for the key.
    Absent,
}

impl<'a> Lookup<'a> {
    /// The translation, if one was found.
    pub fn found(self) -> Option<&'a str> {
        match self {
            Self::Found(text) => Some(text),
            Self::Untranslated | Self::Absent => None,
        }
    }
}

/// One key/translation pair in a phrase table.
///
/// The key id is computed on construction, so entries built in `const` or
/// `static` position pay nothing for it at runtime.
#[derive(Copy, Clone, Debug)]
pub struct Entry<'a> {
    id: KeyId,
    key: &'a str,
    text: Option<&'a str>,
}

impl<'a> Entry<'a> {
    /// An entry mapping `key` to `text`.
    pub const fn new(key: &'a str, text: &'a str) -> Self {
        Self {
            id: KeyId::from_key(key),
            key,
            text: Some(text),
        }
    }

    /// An entry recording that `key` exists but is not yet translated.
    pub const fn untranslated(key: &'a str) -> Self {
        Self {
            id: KeyId::from_key(key),
            key,
            text: None,
        }
    }

    /// The message key.
    pub const fn key(&self) -> &'a str {
        self.key
    }

    /// The precomputed id of the key.
    pub const fn id(&self) -> KeyId {
        self.id
    }

    /// The translation, if the entry carries one.
    pub const fn text(&self) -> Option<&'a str> {
        self.text
    }
}

/// A sparse mapping from message key to translated text, for one locale
/// and (in plural tables) one plural category.
///
/// Tables are plain entry slices so a code generator can emit them as
/// static data; see the [`phrases!`](crate::phrases) macro. Lookup is a
/// linear scan comparing precomputed [`KeyId`]s, with the key string
/// checked only on a hash hit.
#[derive(Copy, Clone, Debug)]
pub struct PhraseTable<'a> {
    entries: &'a [Entry<'a>],
}

impl<'a> PhraseTable<'a> {
    /// A table over the given entries.
    pub const fn new(entries: &'a [Entry<'a>]) -> Self {
        Self { entries }
    }

    /// Look up `key`, hashing it first.
    pub fn lookup(&self, key: &str) -> Lookup<'a> {
        self.lookup_id(KeyId::from_key(key), key)
    }

    /// Look up `key` by its precomputed id.
    ///
    /// Duplicate keys are tolerated: the first entry with usable text wins,
    /// and an untranslated duplicate does not stop the scan.
    pub fn lookup_id(&self, id: KeyId, key: &str) -> Lookup<'a> {
        let mut untranslated = false;
        for entry in self.entries {
            if entry.id == id && entry.key == key {
                match entry.text {
                    Some(text) if !text.is_empty() => return Lookup::Found(text),
                    _ => untranslated = true,
                }
            }
        }
        if untranslated {
            Lookup::Untranslated
        } else {
            Lookup::Absent
        }
    }

    /// The underlying entries.
    pub const fn entries(&self) -> &'a [Entry<'a>] {
        self.entries
    }

    /// Number of entries in the table.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
