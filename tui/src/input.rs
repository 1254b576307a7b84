//! Input handling for the Seatmap TUI.
//!
//! A synchronous poll-drain loop: block up to the frame budget for the
//! first event, then drain whatever else queued so a redraw covers all
//! pending input.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::trace;

use seatmap_engine::{App, InputMode};

pub fn handle_events(app: &mut App, wait: Duration) -> Result<()> {
    let mut timeout = wait;
    while event::poll(timeout)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
            // The stage is re-measured from the drawing area each frame,
            // so a resize only needs to trigger the redraw it already got.
            Event::Resize(cols, rows) => trace!(cols, rows, "Terminal resized"),
            _ => {}
        }
        timeout = Duration::ZERO;
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.input_mode() {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::CountEntry => handle_count_entry_key(app, key),
        InputMode::TableSelect => handle_table_select_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        // Regenerate with the current count; the default when none exist.
        KeyCode::Char('g') => app.generate(app.tables().len()),
        KeyCode::Char('c') => app.begin_count_entry(),
        KeyCode::Char('s') => app.open_table_select(),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.select_next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.select_prev(),
        KeyCode::Char('a' | ' ') | KeyCode::Enter => app.add_chair(),
        _ => {}
    }
}

fn handle_count_entry_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => app.count_entry_push(ch),
        KeyCode::Backspace => app.count_entry_backspace(),
        KeyCode::Enter => app.commit_count_entry(),
        KeyCode::Esc => app.cancel_count_entry(),
        _ => {}
    }
}

fn handle_table_select_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.table_select_next(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => app.table_select_prev(),
        KeyCode::Enter => app.confirm_table_select(),
        KeyCode::Esc => app.cancel_table_select(),
        _ => {}
    }
}
