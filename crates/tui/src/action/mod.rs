//! Action protocol for the TUI event loop.
//!
//! # Module Structure
//!
//! - `variants`: the `Action` enum
//! - `redaction`: log-safe `Debug` wrapper (`RedactedAction`)
//!
//! # What This Module Does NOT Handle
//!
//! - Applying actions (handled by `App::update`)
//! - Translating key and mouse events (handled by the app input handlers)
//!
//! When logging actions, use `RedactedAction(&action)` so typed text never
//! reaches the log file.

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;
