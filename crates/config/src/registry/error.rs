//! Error types for configuration lookup and coercion.
//!
//! Invariants:
//! - Both variants name the requested key; `InvalidFormat` also carries the
//!   raw value that failed to coerce.
//! - Absence on optional lookups is never an error; these variants cover
//!   fail-fast lookups and typed coercions only.

use thiserror::Error;

/// Errors surfaced by fail-fast lookups and typed accessors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No source (environment, override file, registered default) defines
    /// the key.
    #[error("missing required configuration: {0}")]
    MissingConfiguration(String),

    /// A present value could not be coerced to the requested type.
    #[error("invalid value for {key}: {value:?}: {message}")]
    InvalidFormat {
        key: String,
        value: String,
        message: String,
    },
}
