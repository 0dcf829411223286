//! Tests for the configuration registry.
//!
//! Responsibilities:
//! - Test precedence resolution, typed coercions, convenience accessors,
//!   and override-file loading.
//!
//! Invariants:
//! - Tests mutate the process environment only through `temp_env` scoping,
//!   which serializes environment access across tests.
//! - Tests that change the working directory hold `env_lock()` for the whole
//!   test body and restore the directory via an RAII guard.
//! - Environment variable names are unique per test to avoid contamination.

use std::sync::Mutex;

pub mod resolve_tests;
pub mod typed_tests;

/// Returns the global test lock for working-directory isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
