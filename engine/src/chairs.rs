//! The fixed chair-slot table.
//!
//! Every table has exactly ten chair positions around its bounding box,
//! filled in insertion order: the four corners, the quarter/three-quarter
//! points of the top and bottom edges, then the centers of the left and
//! right sides. Coordinates are the top-left corner of the chair icon.

use seatmap_types::{ChairStyle, Point, Rect};

/// Maximum chairs per table. Slot indices are `0..MAX_CHAIRS`.
pub const MAX_CHAIRS: usize = 10;

/// The ten slot positions around `table`, in fill order.
#[must_use]
pub fn chair_slots(table: Rect, chair: ChairStyle) -> [Point; MAX_CHAIRS] {
    let size = chair.size;
    let pad = chair.padding;
    let Rect {
        x,
        y,
        width,
        height,
    } = table;

    [
        // Corners
        Point::new(x - size - pad, y - size - pad),
        Point::new(x + width + pad, y - size - pad),
        Point::new(x - size - pad, y + height + pad),
        Point::new(x + width + pad, y + height + pad),
        // Quarter points of the top and bottom edges
        Point::new(x + width / 4.0 - size / 2.0, y - size - pad),
        Point::new(x + (3.0 * width) / 4.0 - size / 2.0, y - size - pad),
        Point::new(x + width / 4.0 - size / 2.0, y + height + pad),
        Point::new(x + (3.0 * width) / 4.0 - size / 2.0, y + height + pad),
        // Side centers
        Point::new(x - size - pad, y + height / 2.0 - size / 2.0),
        Point::new(x + width + pad, y + height / 2.0 - size / 2.0),
    ]
}
