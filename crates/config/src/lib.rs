//! Environment-derived configuration for host applications.
//!
//! This crate provides a single lookup surface that unifies the real process
//! environment, values merged from local `.env` override files, and
//! programmer-registered defaults under one strict precedence order, plus
//! typed accessors (integer, boolean, time, URI, comma-separated list) built
//! on top of that lookup.

pub mod constants;
mod registry;
mod value;

pub use registry::{Config, ConfigError};
pub use value::ConfigValue;
