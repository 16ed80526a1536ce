//! Quick Tip TUI - interactive tip calculator for the terminal.
//!
//! Loads the user config, builds a tip form from it and drives the form
//! from crossterm key events until the user quits.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use quicktip_core::config::{Config, Directories};
use quicktip_core::{NumericInputMode, TipForm};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use std::io;

mod app;
mod cli;
mod colors;
mod render;

use app::App;
use cli::Cli;
use render::render_tip_form;

/// Set up logging with file output. TUI must log to file since it uses the terminal for display.
fn setup_logging(debug_flag: bool) {
    let level = if debug_flag || cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_dir = std::env::temp_dir();
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("quicktip-tui-{timestamp}.log");

    #[cfg(unix)]
    {
        let symlink_path = log_dir.join("quicktip-tui.log");
        let _ = std::fs::remove_file(&symlink_path);
        let _ = std::os::unix::fs::symlink(log_dir.join(&log_filename), &symlink_path);
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    std::mem::forget(guard);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = if let Some(path) = &cli.config {
        path.clone()
    } else {
        Directories::new().config_file
    };

    let mut config = Config::load(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    if cli.integer {
        config.input.numeric_mode = NumericInputMode::Integer;
    }
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme.into();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let config = load_config(&cli)?;
    tracing::info!(
        "Starting with mode={}, segment={}, theme={}",
        config.input.numeric_mode,
        config.tip.default_segment,
        config.appearance.theme
    );

    let form = TipForm::new(config.input.numeric_mode, config.tip.default_segment)?;
    let mut app = App::new(form, config.appearance.theme);

    run_tui(&mut app).await
}

async fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode()?;

    let result = run_in_alternate_screen(app).await;
    let restored = restore_terminal();

    finish(result, restored)
}

async fn run_in_alternate_screen(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    event_loop(&mut terminal, app).await
}

/// Leave raw mode and the alternate screen, attempting every step.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    raw.and(screen)
}

/// The session error wins over a restore error, which is logged instead.
fn finish(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            tracing::error!("Failed to restore terminal: {restore_err}");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => restored.context("Failed to restore terminal"),
    }
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| render_tip_form(f, app))?;
            needs_render = false;
        }

        let Some(event_result) = event_stream.next().await else {
            break;
        };

        let event = match event_result {
            Ok(e) => e,
            Err(e) => {
                tracing::error!("Event stream error: {}", e);
                continue;
            }
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                tracing::debug!(
                    "KEY EVENT: code={:?}, modifiers={:?}",
                    key.code,
                    key.modifiers
                );
                app.handle_key(key.code, key.modifiers);
                needs_render = true;
            }
            Event::Resize(..) => needs_render = true,
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
