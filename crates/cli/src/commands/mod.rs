//! CLI command implementations.

pub mod categories;
pub mod search;
pub mod show;
