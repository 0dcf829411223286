//! Well-known configuration keys and literals.
//!
//! This module centralizes the variable names recognized by the convenience
//! accessors so they are written once, not scattered as magic strings.

/// Run-mode indicator variable (`production`, `test`, `development`).
pub const APP_ENV: &str = "APP_ENV";

/// Name of the running codebase, usually matching the repository name.
pub const APP_NAME: &str = "APP_NAME";

/// Deploy identifier of the running codebase (local, staging, production).
pub const APP_DEPLOY: &str = "APP_DEPLOY";

/// Port to listen on for web requests.
pub const PORT: &str = "PORT";

/// Database connection string, optionally qualified as `{KIND}_DATABASE_URL`.
pub const DATABASE_URL: &str = "DATABASE_URL";

/// Run-mode literal for production deployments.
pub const MODE_PRODUCTION: &str = "production";

/// Run-mode literal for test runs.
pub const MODE_TEST: &str = "test";

/// Run-mode literal for local development.
pub const MODE_DEVELOPMENT: &str = "development";

/// Base name of the override files read from the working directory.
pub const OVERRIDE_FILE_BASE: &str = ".env";

/// Gate variable: set to `1` or `true` to make override loading a no-op.
pub const DOTENV_DISABLED: &str = "DOTENV_DISABLED";
