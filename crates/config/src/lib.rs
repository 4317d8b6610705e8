//! Configuration management for the HTML cheatsheet.
//!
//! This crate provides the theme palette, shared constants and a loader
//! that resolves configuration from CLI overrides, environment variables
//! and an optional `.env` file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ColorTheme, Config, Theme};
