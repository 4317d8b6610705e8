//! HTML Cheatsheet TUI - interactive HTML element reference for the terminal.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, configuration and the terminal.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Catalogue data or filtering (see `cheatsheet_catalogue`).
//! - State transitions (see `App::update`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Logs go to a daily-rolling file; stdout belongs to the terminal.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use anyhow::Result;
use cheatsheet_catalogue::catalogue;
use cheatsheet_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS, LOG_FILE_NAME};
use cheatsheet_tui::action::{Action, RedactedAction};
use cheatsheet_tui::app::App;
use cheatsheet_tui::cli::Cli;
use cheatsheet_tui::runtime::{config::load_config, terminal::TerminalGuard};
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{channel, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_mouse = cli.no_mouse;

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    // The guard must live for all of main() so buffered logs are flushed.
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Resolve configuration before touching the terminal so errors print normally.
    let config = load_config(&cli)?;
    tracing::info!(
        theme = config.theme.key(),
        expand_all = config.expand_all,
        reference_base_url = %config.reference_base_url,
        "Starting cheatsheet-tui"
    );

    let mut app = App::new(config, catalogue());
    if let Some(query) = cli.query.as_deref() {
        app = app.with_query(query);
    }

    let mut terminal_guard = TerminalGuard::enter(no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let input_task = tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Mouse(mouse) => Action::Mouse(mouse),
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };

            // Key and resize events must not be lost; mouse floods may be dropped.
            if matches!(action, Action::Mouse(_)) {
                match tx.try_send(action) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        tracing::debug!("Input channel full, dropping mouse event");
                    }
                    Err(TrySendError::Closed(_)) => break,
                }
            } else if tx.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    // Main event loop
    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                let next = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(next) = next else { continue };
                if matches!(next, Action::Quit) {
                    tracing::info!("Quit requested");
                    break;
                }
                tracing::trace!(action = ?RedactedAction(&next), "Dispatching");
                app.update(next);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    input_task.abort();

    terminal_guard.restore()?;

    Ok(())
}
