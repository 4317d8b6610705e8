//! HTML Cheatsheet TUI library.
//!
//! This library provides the application state, input handling, markup
//! rendering and UI components for the terminal cheatsheet.
//!
//! # Example
//!
//! ```rust
//! use cheatsheet_tui::{Action, App};
//! use cheatsheet_catalogue::CATALOGUE;
//! use cheatsheet_config::Config;
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let mut app = App::new(Config::default(), CATALOGUE);
//! if let Some(action) = app.handle_input(KeyEvent::from(KeyCode::Char('a'))) {
//!     app.update(action);
//! }
//! assert_eq!(app.expand_all_label(), "Collapse All");
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod markup;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::{App, Focus, RowKey};
