//! Process-wide registry for the `global-registry` feature.
//!
//! Provides thread-safe access to a shared [`Registry`] over a `'static`
//! language pack, removing the need to thread a registry reference through
//! every call site. Writers (`init`, `set_locale`, `reset`) take the write
//! lock; resolution takes the read lock.

use std::sync::{LazyLock, RwLock};

use crate::{Error, LanguagePack, Registry};

static GLOBAL_REGISTRY: LazyLock<RwLock<Registry<'static>>> =
    LazyLock::new(|| RwLock::new(Registry::new()));

/// Provides read access to the global registry.
pub fn with_registry<T>(f: impl FnOnce(&Registry<'static>) -> T) -> T {
    let guard = GLOBAL_REGISTRY.read().expect("global registry lock poisoned");
    f(&guard)
}

/// Provides write access to the global registry.
pub fn with_registry_mut<T>(f: impl FnOnce(&mut Registry<'static>) -> T) -> T {
    let mut guard = GLOBAL_REGISTRY
        .write()
        .expect("global registry lock poisoned");
    f(&mut guard)
}

/// Registers a language pack with the global registry.
pub fn init(pack: &'static LanguagePack<'static>) -> Result<(), Error> {
    with_registry_mut(|registry| registry.init(pack))
}

/// Switches the active locale of the global registry.
pub fn set_locale(name: &str) -> Result<(), Error> {
    with_registry_mut(|registry| registry.set_locale(name))
}

/// Returns the name of the globally active locale.
pub fn current_locale() -> Option<&'static str> {
    with_registry(|registry| registry.current_locale())
}

/// Resolves `key` in the globally active locale.
pub fn resolve(key: &str) -> &str {
    with_registry(|registry| registry.resolve(key))
}

/// Resolves a plural form of `key` in the globally active locale.
pub fn resolve_plural(key: &str, quantity: i64) -> &str {
    with_registry(|registry| registry.resolve_plural(key, quantity))
}

/// Clears the global registry back to the uninitialized state.
pub fn reset() {
    with_registry_mut(Registry::reset);
}
