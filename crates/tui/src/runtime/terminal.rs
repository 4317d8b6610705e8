//! Terminal session for the cheatsheet.
//!
//! Responsibilities:
//! - Switch the terminal into cheatsheet mode: raw input, the alternate
//!   screen, and mouse capture for header and button clicks.
//! - Put all of it back on exit, on `?` early returns and on panic.
//!
//! Does NOT handle:
//! - Drawing (see `app::render`).
//! - Reading events (the input task in `main.rs`).
//!
//! Invariants:
//! - The session is restored at most once; `Drop` after an explicit
//!   `restore()` is a no-op.
//! - Mouse capture is only released if it was enabled.
//! - `Drop` never panics.

use std::io;

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Owns the cheatsheet's terminal modes for the lifetime of the session.
pub struct TerminalGuard {
    captures_mouse: bool,
    restored: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, capturing the mouse unless
    /// `no_mouse` is set.
    ///
    /// The guard exists as soon as raw mode is on, so a failure further in
    /// still leaves a usable shell.
    pub fn enter(no_mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            captures_mouse: !no_mouse,
            restored: false,
        };

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if guard.captures_mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Ok(guard)
    }

    pub fn captures_mouse(&self) -> bool {
        self.captures_mouse
    }

    /// Leave cheatsheet mode and show the cursor again.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        if self.captures_mouse {
            execute!(stdout, DisableMouseCapture)?;
        }
        execute!(stdout, LeaveAlternateScreen, Show)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Possibly unwinding; errors have nowhere to go.
        let _ = self.restore();
    }
}
