//! Table selector popup, the dropdown of the original editor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use seatmap_engine::App;

use crate::theme::{Glyphs, Palette};

const POPUP_WIDTH: u16 = 38;
const MAX_VISIBLE_ROWS: usize = 10;

pub(crate) fn draw_table_selector(
    frame: &mut Frame,
    app: &App,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let tables = app.tables();
    if tables.is_empty() {
        return;
    }

    let visible = tables.len().min(MAX_VISIBLE_ROWS);
    let area = centered_rect(frame.area(), POPUP_WIDTH, visible as u16 + 2);
    frame.render_widget(Clear, area);

    // Window the list around the highlighted row when it overflows.
    let selected = app.select_index();
    let first = if tables.len() <= MAX_VISIBLE_ROWS {
        0
    } else {
        selected
            .saturating_sub(MAX_VISIBLE_ROWS / 2)
            .min(tables.len() - MAX_VISIBLE_ROWS)
    };

    let lines: Vec<Line> = tables
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .map(|(index, table)| {
            let text = format!(
                "{} — {} places left",
                table.id().label(),
                table.remaining()
            );
            if index == selected {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", glyphs.pointer),
                        Style::default().fg(palette.accent),
                    ),
                    Span::styled(
                        text,
                        Style::default()
                            .fg(palette.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
                .style(Style::default().bg(palette.bg_highlight))
            } else {
                Line::from(Span::styled(
                    format!("  {text}"),
                    Style::default().fg(palette.text_secondary),
                ))
            }
        })
        .collect();

    let popup = Paragraph::new(lines).block(
        Block::default()
            .title(" Select table ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.accent))
            .padding(Padding::horizontal(1))
            .style(Style::default().bg(palette.bg_popup)),
    );
    frame.render_widget(popup, area);
}

/// Center a `width` x `height` popup inside `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered_and_clamped() {
        let outer = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(outer, 38, 12);
        assert_eq!(popup, Rect::new(21, 6, 38, 12));

        let tiny = centered_rect(Rect::new(0, 0, 10, 4), 38, 12);
        assert_eq!(tiny, Rect::new(0, 0, 10, 4));
    }
}
