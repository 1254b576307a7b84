//! Grid placement of tables on the stage.
//!
//! Tables fill rows left to right, wrapping when the next table would
//! cross the right margin. Spacing and margin are fixed constants of the
//! floor plan, not configuration.

use seatmap_types::{Rect, Size};

/// Gap between adjacent tables, both axes.
pub const SPACING: f64 = 70.0;
/// Gap between the stage edge and the first table.
pub const MARGIN: f64 = 50.0;

/// How many tables fit in one row of the stage.
///
/// Never less than 1: a stage narrower than a single table still gets one
/// table per row (it will overflow the right edge rather than divide into
/// an empty grid).
#[must_use]
pub fn tables_per_row(stage_width: f64, table_width: f64) -> usize {
    let available = stage_width - 2.0 * MARGIN;
    let per_row = (available / (table_width + SPACING)).floor();
    if per_row < 1.0 { 1 } else { per_row as usize }
}

/// Bounding boxes for `count` tables laid out in a grid.
#[must_use]
pub fn grid_positions(count: usize, table: Size, stage_width: f64) -> Vec<Rect> {
    let per_row = tables_per_row(stage_width, table.width);
    (0..count)
        .map(|i| {
            let col = i % per_row;
            let row = i / per_row;
            Rect::new(
                (col as f64) * (table.width + SPACING) + MARGIN,
                (row as f64) * (table.height + SPACING) + MARGIN,
                table.width,
                table.height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_table_sits_at_margin() {
        let rects = grid_positions(1, Size::new(120.0, 80.0), 800.0);
        assert_eq!(rects, vec![Rect::new(50.0, 50.0, 120.0, 80.0)]);
    }

    #[test]
    fn row_wraps_after_per_row_tables() {
        // available = 800 - 100 = 700; 700 / (120 + 70) = 3.68 -> 3 per row
        let size = Size::new(120.0, 80.0);
        assert_eq!(tables_per_row(800.0, size.width), 3);

        let rects = grid_positions(4, size, 800.0);
        assert_eq!(rects[0].x, 50.0);
        assert_eq!(rects[1].x, 50.0 + 190.0);
        assert_eq!(rects[2].x, 50.0 + 380.0);
        // fourth wraps to the second row
        assert_eq!(rects[3].x, 50.0);
        assert_eq!(rects[3].y, 50.0 + 150.0);
    }

    #[test]
    fn narrow_stage_clamps_to_one_per_row() {
        assert_eq!(tables_per_row(100.0, 120.0), 1);
        let rects = grid_positions(3, Size::new(120.0, 80.0), 100.0);
        assert!(rects.iter().all(|r| r.x == 50.0));
        assert_eq!(rects[2].y, 50.0 + 2.0 * 150.0);
    }

    #[test]
    fn empty_floor_has_no_rects() {
        assert!(grid_positions(0, Size::new(120.0, 80.0), 800.0).is_empty());
    }
}
