//! Seatmap CLI - binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`seatmap_engine`] (application state) and
//! [`seatmap_tui`] (rendering), providing RAII-based terminal management
//! with guaranteed cleanup.
//!
//! ```text
//! main() -> load config + appearance data -> TerminalSession::new()
//!                                                  |
//!                                                  v
//!                                      run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! One frame per iteration at a ~30 FPS budget:
//!
//! 1. Block up to the frame budget for input, drain the queue
//! 2. Apply key events to the `App`
//! 3. Render the frame (the draw pass re-measures the stage)
//! 4. Exit when the `App` requests quit

use anyhow::{Context as _, Result};
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

use seatmap_engine::{App, SeatmapConfig, Size, load_floor_data};
use seatmap_tui::{draw, handle_events};

const FRAME_BUDGET: Duration = Duration::from_millis(33); // ~30 FPS

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_seatmap_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_seatmap_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let candidates = seatmap_log_file_candidates();
    let mut warnings = Vec::new();

    for candidate in candidates {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn seatmap_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.seatmap/logs/seatmap.log
    if let Some(config_path) = SeatmapConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("seatmap.log"));
    }

    // Fallback: ./.seatmap/logs/seatmap.log (useful in constrained environments)
    candidates.push(PathBuf::from(".seatmap").join("logs").join("seatmap.log"));

    candidates
}

/// RAII terminal guard: raw mode + alternate screen on entry, restored on
/// drop even when `run_app` errors.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(stdout(), EnterAlternateScreen, Hide)
            .context("failed to enter alternate screen")?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))
            .context("failed to initialize terminal")?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen, Show);
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = match SeatmapConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring unusable config");
            SeatmapConfig::default()
        }
    };

    let data_path = env::var("SEATMAP_DATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| config.data_path());
    let floor = load_floor_data(&data_path)
        .with_context(|| format!("cannot load appearance data from {}", data_path.display()))?;

    // Stage size is a placeholder until the first draw measures the
    // actual drawing area.
    let app = App::new(
        floor,
        config.ui_options(),
        Size::default(),
        config.table_count(),
    );

    let mut session = TerminalSession::new()?;
    let result = run_app(&mut session.terminal, app, config.table_count());
    drop(session);

    tracing::info!("Seatmap exited");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    initial_count: usize,
) -> Result<()> {
    // First draw sizes the stage so the initial grid uses the real width.
    terminal.draw(|frame| draw(frame, &mut app))?;
    app.generate(initial_count);

    loop {
        handle_events(&mut app, FRAME_BUDGET)?;
        terminal.draw(|frame| draw(frame, &mut app))?;
        if app.should_quit() {
            return Ok(());
        }
    }
}
