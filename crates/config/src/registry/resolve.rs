//! Core precedence-resolving lookup.
//!
//! Responsibilities:
//! - Own the override and default stores and front the real environment.
//! - Normalize keys at the public boundary: upper-case for environment and
//!   override lookups, lower-case for the default store.
//!
//! Does NOT handle:
//! - Typed coercions (see typed.rs) or well-known-key wrappers (see
//!   convenience.rs).
//! - Populating the override store (see overrides.rs).

use std::collections::BTreeMap;

use super::error::ConfigError;
use crate::value::ConfigValue;

/// Process-wide configuration registry.
///
/// Owned by the host application, constructed once at startup, and passed by
/// reference to any component needing lookups. Every accessor in this crate
/// funnels through [`Config::get`]; nothing bypasses it.
///
/// Mutation (`set_default`, `load_overrides`, `reset`) is expected to happen
/// during startup, before concurrent readers exist. The registry provides no
/// internal locking; hosts that mutate after startup must synchronize
/// externally.
#[derive(Debug)]
pub struct Config {
    pub(crate) overrides: BTreeMap<String, String>,
    pub(crate) defaults: BTreeMap<String, ConfigValue>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Create an empty registry: no overrides, no defaults.
    pub fn new() -> Self {
        Self {
            overrides: BTreeMap::new(),
            defaults: BTreeMap::new(),
        }
    }

    /// Resolve a key against the environment, then the override store, then
    /// registered defaults, returning the first present value.
    ///
    /// The key is case-insensitive: `get("foo")` and `get("FOO")` observe
    /// the same value. The environment is re-read on every call, and a
    /// variable explicitly set to the empty string counts as present,
    /// short-circuiting the lower sources. Absence is `None`, never an
    /// error.
    pub fn get(&self, key: &str) -> Option<ConfigValue> {
        let env_key = key.to_uppercase();
        if let Ok(value) = std::env::var(&env_key) {
            return Some(ConfigValue::Str(value));
        }
        if let Some(value) = self.overrides.get(&env_key) {
            return Some(ConfigValue::Str(value.clone()));
        }
        self.defaults.get(&key.to_lowercase()).cloned()
    }

    /// Fail-fast variant of [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] carrying the requested
    /// key when no source defines it.
    pub fn require(&self, key: &str) -> Result<ConfigValue, ConfigError> {
        self.get(key)
            .ok_or_else(|| ConfigError::MissingConfiguration(key.to_string()))
    }

    /// Register a fallback value consulted when neither the environment nor
    /// an override file defines the key.
    pub fn set_default(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.defaults.insert(key.to_lowercase(), value.into());
    }

    /// All registered defaults, keyed by the lower-case symbolic form.
    pub fn defaults(&self) -> &BTreeMap<String, ConfigValue> {
        &self.defaults
    }

    /// Clear both the override store and the default store, restoring the
    /// pre-load state. The real environment is untouched. Intended for test
    /// isolation between independent runs within one process lifetime.
    pub fn reset(&mut self) {
        self.overrides.clear();
        self.defaults.clear();
    }
}
