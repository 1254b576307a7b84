//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend};
use seatmap_engine::App;
use seatmap_types::{ChairStyle, FloorData, Size, TableStyle, UiOptions};

/// Appearance data matching the in-tree `data/data.json`.
pub fn sample_floor() -> FloorData {
    FloorData {
        rectangles: vec![TableStyle {
            width: 120.0,
            height: 80.0,
            color: "#7e9cd8".to_string(),
        }],
        places: vec![ChairStyle {
            size: 24.0,
            padding: 6.0,
        }],
    }
}

/// An app on an 800x600 stage with the sample appearance.
pub fn sample_app() -> App {
    App::new(
        sample_floor(),
        UiOptions::default(),
        Size::new(800.0, 600.0),
        2,
    )
}

/// Render one frame to a plain-text dump of the buffer.
pub fn render_to_text(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| seatmap_tui::draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
