//! Grid layout and chair-slot geometry through the public API.

use seatmap_engine::{App, MARGIN, MAX_CHAIRS, SPACING, chair_slots};
use seatmap_types::{Size, UiOptions};

use crate::common::{sample_app, sample_floor};

#[test]
fn tables_fill_rows_then_wrap() {
    let mut app = sample_app();
    app.generate(5);

    // 800px stage: (800 - 2*50) / (120 + 70) = 3 tables per row.
    let rects: Vec<_> = app.tables().iter().map(|t| t.rect()).collect();
    assert_eq!(rects[0].x, MARGIN);
    assert_eq!(rects[0].y, MARGIN);
    assert_eq!(rects[1].x, MARGIN + 120.0 + SPACING);
    assert_eq!(rects[2].x, MARGIN + 2.0 * (120.0 + SPACING));
    assert_eq!(rects[3].x, MARGIN);
    assert_eq!(rects[3].y, MARGIN + 80.0 + SPACING);
    assert_eq!(rects[4].x, MARGIN + 120.0 + SPACING);
}

#[test]
fn narrow_stage_stacks_tables_vertically() {
    let mut app = App::new(sample_floor(), UiOptions::default(), Size::new(150.0, 600.0), 2);
    app.generate(3);
    assert!(app.tables().iter().all(|t| t.rect().x == MARGIN));
}

#[test]
fn chair_slots_surround_the_table() {
    let mut app = sample_app();
    app.generate(1);
    let table = app.selected_table().unwrap();
    let rect = table.rect();
    let chair = app.chair_style();

    for (slot, pos) in chair_slots(rect, chair).iter().enumerate() {
        let chair_right = pos.x + chair.size;
        let chair_bottom = pos.y + chair.size;
        let overlaps_x = pos.x < rect.right() && chair_right > rect.x;
        let overlaps_y = pos.y < rect.bottom() && chair_bottom > rect.y;
        assert!(
            !(overlaps_x && overlaps_y),
            "slot {slot} at {pos:?} overlaps the table"
        );
    }
}

#[test]
fn placed_chairs_reuse_the_slot_table_in_order() {
    let mut app = sample_app();
    app.generate(1);
    for _ in 0..MAX_CHAIRS {
        app.add_chair();
    }
    let table = app.selected_table().unwrap();
    let chair = app.chair_style();
    assert_eq!(
        table.chair_positions(chair),
        chair_slots(table.rect(), chair).to_vec()
    );
}
