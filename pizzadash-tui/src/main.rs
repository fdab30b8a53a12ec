//! Pizza sales dashboard TUI: three-panel terminal interface.
//!
//! Panels:
//! 1. Dashboard: KPIs, category share, monthly trend, hourly, weekday and top pizzas
//! 2. Filters: date range, category and size selection
//! 3. Help: keyboard shortcuts and dataset facts
//!
//! Usage: `pizzadash-tui [CSV_PATH]`. The path overrides `data_path` from
//! `<config_dir>/pizzadash/config.toml`.

mod app;
mod input;
mod theme;
mod ui;

#[cfg(test)]
mod test_helpers;

use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use pizzadash_core::{DashboardConfig, Session};

use crate::app::AppState;

fn main() -> Result<()> {
    init_logging();

    // Paths
    let config_path = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pizzadash")
        .join("config.toml");
    let config = DashboardConfig::load_or_default(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let data_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| config.data_path.clone());
    tracing::info!(
        config = %config_path.display(),
        data = %data_path.display(),
        "starting dashboard"
    );

    // Load before touching the terminal so failures print normally.
    let session = Session::open(&data_path, config.report_options())
        .with_context(|| format!("cannot start dashboard from {}", data_path.display()))?;
    let mut app = AppState::new(session);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        // Nothing runs in the background, so block until the next event.
        if let Event::Key(key) = event::read()? {
            input::handle_key(app, key);
        }
    }
    Ok(())
}

/// Log to a file under the platform data directory; the terminal belongs to the UI.
fn init_logging() {
    let Some(dir) = dirs::data_local_dir().map(|d| d.join("pizzadash")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = File::create(dir.join("pizzadash.log")) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
