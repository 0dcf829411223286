//! Thin wrappers over the well-known keys in [`crate::constants`].

use super::error::ConfigError;
use super::resolve::Config;
use crate::constants::{
    APP_DEPLOY, APP_ENV, APP_NAME, DATABASE_URL, MODE_DEVELOPMENT, MODE_PRODUCTION, MODE_TEST,
    PORT,
};
use crate::value::ConfigValue;

impl Config {
    /// The `APP_NAME` variable identifies which codebase is running, usually
    /// matching the repository name.
    pub fn app_name(&self) -> Option<String> {
        self.get(APP_NAME).map(ConfigValue::into_string)
    }

    /// The `APP_DEPLOY` variable identifies which deploy of the codebase is
    /// running, such as local, staging, or production.
    pub fn app_deploy(&self) -> Option<String> {
        self.get(APP_DEPLOY).map(ConfigValue::into_string)
    }

    /// The run mode from `APP_ENV`, as a normalized lower-case identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] when no source defines
    /// the run mode.
    pub fn app_env(&self) -> Result<String, ConfigError> {
        Ok(self.require(APP_ENV)?.into_string().to_lowercase())
    }

    /// The port to listen on for web requests, from `PORT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] when unset and
    /// [`ConfigError::InvalidFormat`] when non-numeric or out of port range.
    pub fn port(&self) -> Result<u16, ConfigError> {
        let n = self
            .int(PORT)?
            .ok_or_else(|| ConfigError::MissingConfiguration(PORT.to_string()))?;
        u16::try_from(n).map_err(|_| ConfigError::InvalidFormat {
            key: PORT.to_string(),
            value: n.to_string(),
            message: "must fit a TCP port".to_string(),
        })
    }

    /// The database connection string.
    ///
    /// With an empty `kind` this resolves `DATABASE_URL`; otherwise the
    /// qualifier is upper-cased and the effective key is
    /// `{KIND}_DATABASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingConfiguration`] when no source defines
    /// the effective key.
    pub fn database_url(&self, kind: &str) -> Result<String, ConfigError> {
        let key = if kind.is_empty() {
            DATABASE_URL.to_string()
        } else {
            format!("{}_{}", kind.to_uppercase(), DATABASE_URL)
        };
        Ok(self.require(&key)?.into_string())
    }

    /// True when the run mode resolves to `production`.
    pub fn is_production(&self) -> bool {
        self.mode_is(MODE_PRODUCTION)
    }

    /// True when the run mode resolves to `test`.
    pub fn is_test(&self) -> bool {
        self.mode_is(MODE_TEST)
    }

    /// True when the run mode resolves to `development`.
    pub fn is_development(&self) -> bool {
        self.mode_is(MODE_DEVELOPMENT)
    }

    // An absent run mode is false for every predicate, never an error.
    fn mode_is(&self, mode: &str) -> bool {
        self.get(APP_ENV)
            .is_some_and(|value| value.into_string() == mode)
    }
}
