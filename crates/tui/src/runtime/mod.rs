//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (`TerminalGuard`)
//! - Configuration loading with CLI overrides
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `cheatsheet_tui::app` and `cheatsheet_tui::ui`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod config;
pub mod terminal;
