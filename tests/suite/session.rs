//! End-to-end editor sessions: state transitions plus rendered output.

use seatmap_engine::{InputMode, MAX_CHAIRS};

use crate::common::{render_to_text, sample_app};

#[test]
fn fill_a_table_and_watch_the_capacity_drop() {
    let mut app = sample_app();
    app.generate(2);

    for placed in 1..=MAX_CHAIRS {
        app.add_chair();
        assert_eq!(
            app.remaining_places_line().unwrap(),
            format!("Remaining places for Mesa 1: {}", MAX_CHAIRS - placed)
        );
    }

    // The 11th request changes nothing but the feedback line.
    app.add_chair();
    assert_eq!(app.selected_table().unwrap().chair_count(), MAX_CHAIRS);
    assert_eq!(app.feedback(), Some("No places left at Mesa 1."));

    // The other table is untouched.
    app.select_next();
    assert_eq!(app.feedback(), None);
    assert_eq!(
        app.remaining_places_line().unwrap(),
        "Remaining places for Mesa 2: 10"
    );
}

#[test]
fn regenerating_resets_the_whole_floor() {
    let mut app = sample_app();
    app.generate(2);
    app.add_chair();
    app.select_next();

    app.begin_count_entry();
    app.count_entry_push('4');
    app.commit_count_entry();

    assert_eq!(app.tables().len(), 4);
    assert_eq!(app.selected_index(), 0);
    assert!(app.tables().iter().all(|t| t.chair_count() == 0));
}

#[test]
fn selector_highlights_current_table_on_open() {
    let mut app = sample_app();
    app.generate(3);
    app.select_next();
    app.open_table_select();
    assert_eq!(app.select_index(), 1);
    assert_eq!(app.input_mode(), InputMode::TableSelect);
}

#[test]
fn rendered_frame_tracks_state() {
    let mut app = sample_app();
    let _ = render_to_text(&mut app, 100, 30);
    app.generate(3);
    app.add_chair();

    let text = render_to_text(&mut app, 100, 30);
    assert!(text.contains("Mesa 1"));
    assert!(text.contains("Mesa 3"));
    assert!(text.contains("Remaining places for Mesa 1: 9"));

    app.open_table_select();
    let text = render_to_text(&mut app, 100, 30);
    assert!(text.contains("Select table"));
    assert!(text.contains("9 places left"));
}
