//! Precedence-resolving configuration registry.
//!
//! Responsibilities:
//! - Resolve keys against the process environment, the override store, and
//!   registered defaults, in that strict order.
//! - Layer typed coercions and fail-fast policy on top of the core lookup.
//! - Merge `.env`-style override files into the override store.
//!
//! Does NOT handle:
//! - Schema validation or nested configuration formats.
//! - Hot-reloading or change notification.
//! - Synchronization: the host serializes mutation against concurrent reads.
//!
//! Invariants:
//! - Environment strictly dominates overrides, which dominate defaults; the
//!   first source with a present value wins entirely, empty string included.
//! - The environment is re-read on every lookup, never cached.
//! - The override store is keyed upper-case, the default store lower-case.

mod convenience;
mod error;
mod overrides;
mod resolve;
mod typed;

pub use error::ConfigError;
pub use resolve::Config;

#[cfg(test)]
mod tests;
