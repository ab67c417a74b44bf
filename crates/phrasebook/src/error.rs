//! Error types for locale management.

use thiserror::Error;

/// An error returned by the locale-management operations.
///
/// Resolution never produces these: a missing key, table, plural rule, or
/// category entry is a fallback trigger, and [`Registry::resolve`] degrades
/// to returning the key verbatim so the caller always has displayable text.
///
/// [`Registry::resolve`]: crate::Registry::resolve
#[derive(Debug, Error)]
pub enum Error {
    /// An empty language pack was passed to `init`.
    #[error("language pack is empty")]
    InvalidPack,

    /// A locale operation was attempted before any pack was registered.
    #[error("no language pack registered")]
    NotInitialized,

    /// `set_locale` was given a name that no language in the pack carries.
    #[error("locale '{name}' not found in language pack")]
    LocaleNotFound { name: String },
}
