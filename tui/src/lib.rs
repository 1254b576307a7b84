//! TUI rendering for Seatmap using ratatui.

mod floor;
mod input;
mod selector;
mod theme;

pub use floor::{CELL_PX_H, CELL_PX_W, stage_size};
pub use input::handle_events;
pub use theme::{Glyphs, Palette, glyphs, palette, parse_color, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use seatmap_engine::{App, InputMode};

use self::floor::draw_floor;
use self::selector::draw_table_selector;

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),                   // Floor plan
            Constraint::Length(1),                // Help / count entry
            Constraint::Length(1),                // Status bar
        ])
        .split(frame.area());

    draw_floor(frame, app, chunks[0], &palette, &glyphs);
    draw_controls(frame, app, chunks[1], &palette);
    draw_status_bar(frame, app, chunks[2], &palette);

    if app.input_mode() == InputMode::TableSelect {
        draw_table_selector(frame, app, &palette, &glyphs);
    }
}

fn draw_controls(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let line = match app.input_mode() {
        InputMode::CountEntry => Line::from(vec![
            Span::styled("Tables: ", Style::default().fg(palette.text_primary)),
            Span::styled(
                format!("{}▏", app.count_entry()),
                Style::default().fg(palette.accent),
            ),
            Span::styled(
                "  Enter generate · Esc cancel",
                styles::help(palette),
            ),
        ]),
        InputMode::TableSelect => Line::from(Span::styled(
            " ↑/↓ choose · Enter select · Esc cancel",
            styles::help(palette),
        )),
        InputMode::Normal => Line::from(Span::styled(
            " a add chair · s select table · ←/→ switch · c count · g generate · q quit",
            styles::help(palette),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let remaining = match app.remaining_places_line() {
        Some(line) => Span::styled(format!(" {line}"), styles::status(palette)),
        None => Span::styled(
            " Press g to generate the floor plan",
            Style::default().fg(palette.text_muted),
        ),
    };

    let feedback_width = app.feedback().map_or(0, |msg| msg.width() as u16 + 2);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(feedback_width)])
        .split(area);

    frame.render_widget(Paragraph::new(Line::from(remaining)), chunks[0]);

    if let Some(msg) = app.feedback() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{msg} "),
                styles::feedback(palette),
            ))),
            chunks[1],
        );
    }
}
