//! Override-file loading.
//!
//! Responsibilities:
//! - Read the ordered `.env` candidate files from the working directory and
//!   merge their records into the override store.
//! - Enforce the production no-op and the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Writing to the process environment (`dotenvy::dotenv()` is never
//!   called; records land only in the override store).
//! - Watching files for changes after the load.
//!
//! Invariants:
//! - Later files and later lines win on key collision.
//! - Missing files and malformed lines are skipped, never an abort.
//! - Override-store keys are upper-cased on insert.

use super::resolve::Config;
use crate::constants::{APP_ENV, DOTENV_DISABLED, MODE_PRODUCTION, OVERRIDE_FILE_BASE};
use crate::value::ConfigValue;

impl Config {
    /// Merge `.env`-style override files from the working directory into the
    /// override store.
    ///
    /// Candidate files are read in order: `.env`, `.env.local`,
    /// `.env.{mode}`, `.env.{mode}.local`, where `{mode}` is the fail-soft
    /// resolved run mode. Repeated calls keep re-merging, last write wins
    /// per key.
    ///
    /// Does nothing when the run mode resolves to `production` (production
    /// deployments must not read local override files) or when
    /// `DOTENV_DISABLED` is set to `1` or `true`.
    pub fn load_overrides(&mut self) {
        if self.is_production() {
            tracing::debug!(
                mode = MODE_PRODUCTION,
                "run mode is production, skipping override files"
            );
            return;
        }
        if Self::dotenv_disabled() {
            tracing::debug!("{} is set, skipping override files", DOTENV_DISABLED);
            return;
        }

        // An absent run mode degenerates to `.env.` / `.env..local`, which
        // simply do not exist and are skipped like any other missing file.
        let mode = self
            .get(APP_ENV)
            .map(ConfigValue::into_string)
            .unwrap_or_default();
        let candidates = [
            OVERRIDE_FILE_BASE.to_string(),
            format!("{OVERRIDE_FILE_BASE}.local"),
            format!("{OVERRIDE_FILE_BASE}.{mode}"),
            format!("{OVERRIDE_FILE_BASE}.{mode}.local"),
        ];
        for filename in &candidates {
            self.merge_override_file(filename);
        }
    }

    fn merge_override_file(&mut self, filename: &str) {
        let records = match dotenvy::from_filename_iter(filename) {
            Ok(records) => records,
            Err(e) => {
                tracing::debug!(file = filename, error = %e, "skipping unreadable override file");
                return;
            }
        };
        let mut merged = 0usize;
        for record in records {
            match record {
                Ok((key, value)) => {
                    self.overrides.insert(key.to_uppercase(), value);
                    merged += 1;
                }
                Err(e) => {
                    tracing::debug!(file = filename, error = %e, "skipping malformed override line");
                }
            }
        }
        tracing::debug!(file = filename, merged, "merged override file");
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }
}
