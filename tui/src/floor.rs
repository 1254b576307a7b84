//! Floor-plan rendering on a ratatui canvas.
//!
//! The engine works in stage pixels with a top-left origin (the
//! coordinate system of the appearance data). The canvas widget maps an
//! arbitrary f64 coordinate window onto the drawing area, so we keep the
//! pixel units and only flip the y axis (canvas y grows upward).

use ratatui::{
    Frame,
    layout::Rect as ScreenRect,
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        Block, BorderType, Borders,
        canvas::{Canvas, Context, Rectangle},
    },
};
use unicode_width::UnicodeWidthStr;

use seatmap_engine::{App, Table};
use seatmap_types::{ChairStyle, Size};

use crate::theme::{Glyphs, Palette, parse_color, styles};

/// Nominal pixel size of one terminal cell. Keeps the data file's pixel
/// units meaningful on a cell grid (a 120px table is ~15 cells wide).
pub const CELL_PX_W: f64 = 8.0;
pub const CELL_PX_H: f64 = 16.0;

/// Stage dimensions for a drawing area of `cols` x `rows` cells.
#[must_use]
pub fn stage_size(cols: u16, rows: u16) -> Size {
    Size::new(f64::from(cols) * CELL_PX_W, f64::from(rows) * CELL_PX_H)
}

pub(crate) fn draw_floor(
    frame: &mut Frame,
    app: &mut App,
    area: ScreenRect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .title(" Seating chart ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border));
    let inner = block.inner(area);

    // The stage tracks the drawing area, minus the chrome, every frame.
    app.set_stage(stage_size(inner.width, inner.height));
    let stage = app.stage();

    let chair = app.chair_style();
    let fill = app
        .floor()
        .table_style()
        .and_then(|style| parse_color(&style.color))
        .unwrap_or(palette.accent);
    let selected = app.selected_index();

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(palette.bg_dark)
        .x_bounds([0.0, stage.width])
        .y_bounds([0.0, stage.height])
        .paint(|ctx| {
            for (index, table) in app.tables().iter().enumerate() {
                paint_table(
                    ctx,
                    table,
                    stage.height,
                    fill,
                    index == selected,
                    palette,
                    glyphs,
                    chair,
                );
            }
        });
    frame.render_widget(canvas, area);
}

#[allow(clippy::too_many_arguments)]
fn paint_table(
    ctx: &mut Context<'_>,
    table: &Table,
    stage_height: f64,
    fill: Color,
    is_selected: bool,
    palette: &Palette,
    glyphs: &Glyphs,
    chair: ChairStyle,
) {
    let rect = table.rect();

    ctx.draw(&Rectangle {
        x: rect.x,
        y: stage_height - rect.bottom(),
        width: rect.width,
        height: rect.height,
        color: fill,
    });

    // Selection ring just outside the table outline.
    if is_selected {
        ctx.draw(&Rectangle {
            x: rect.x - 3.0,
            y: stage_height - rect.bottom() - 3.0,
            width: rect.width + 6.0,
            height: rect.height + 6.0,
            color: palette.accent,
        });
    }

    let label = table.id().label();
    let label_px = label.width() as f64 * CELL_PX_W;
    let style = if is_selected {
        styles::selected_label(palette)
    } else {
        styles::table_label(palette)
    };
    ctx.print(
        rect.center().x - label_px / 2.0,
        stage_height - rect.center().y,
        Line::styled(label, style),
    );

    let chair_style = Style::default().fg(palette.warning);
    for pos in table.chair_positions(chair) {
        // `pos` is the chair box's top-left corner; print the glyph at
        // the box center.
        ctx.print(
            pos.x + chair.size / 2.0 - CELL_PX_W / 2.0,
            stage_height - (pos.y + chair.size / 2.0),
            Line::styled(glyphs.chair.to_string(), chair_style),
        );
    }
}
