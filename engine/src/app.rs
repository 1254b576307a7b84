//! The `App` state machine.
//!
//! Holds everything the TUI renders: the stage size, the generated
//! tables with their chair counters, the current selection, the
//! transient feedback line, and the active input mode. All operations
//! are synchronous and infallible; invalid requests surface as feedback
//! text, the way the original editor reported them.

use seatmap_types::{ChairStyle, FloorData, Point, Rect, Size, TableId, UiOptions};

use crate::chairs::{MAX_CHAIRS, chair_slots};
use crate::layout::grid_positions;

/// Tables generated when the count entry is empty or zero.
pub const DEFAULT_TABLE_COUNT: usize = 2;

/// Chair style used if the appearance data lost its `places` entry after
/// validation. Never expected in practice.
const FALLBACK_CHAIR: ChairStyle = ChairStyle {
    size: 24.0,
    padding: 6.0,
};

/// Feedback for any operation that needs tables before the first generate.
const NO_TABLES_FEEDBACK: &str = "No tables yet. Press g to generate the floor plan.";

/// A drawn table: its bounding box and how many of its ten chair slots
/// are occupied.
#[derive(Debug, Clone)]
pub struct Table {
    id: TableId,
    rect: Rect,
    chair_count: usize,
}

impl Table {
    #[must_use]
    pub fn id(&self) -> TableId {
        self.id
    }

    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn chair_count(&self) -> usize {
        self.chair_count
    }

    /// Remaining places: 10 minus the chairs already placed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_CHAIRS - self.chair_count
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.chair_count >= MAX_CHAIRS
    }

    /// Positions of the chairs placed so far, in slot order.
    #[must_use]
    pub fn chair_positions(&self, chair: ChairStyle) -> Vec<Point> {
        chair_slots(self.rect, chair)[..self.chair_count].to_vec()
    }
}

/// Which input surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Floor-plan keys: select, add chair, open selector, quit.
    Normal,
    /// Typing the table count for the next generate.
    CountEntry,
    /// The table selector popup is open.
    TableSelect,
}

#[derive(Debug)]
pub struct App {
    floor: FloorData,
    options: UiOptions,
    stage: Size,
    tables: Vec<Table>,
    selected: usize,
    feedback: Option<String>,
    mode: InputMode,
    count_entry: String,
    select_index: usize,
    default_count: usize,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(floor: FloorData, options: UiOptions, stage: Size, default_count: usize) -> Self {
        let default_count = if default_count == 0 {
            DEFAULT_TABLE_COUNT
        } else {
            default_count
        };
        Self {
            floor,
            options,
            stage,
            tables: Vec::new(),
            selected: 0,
            feedback: None,
            mode: InputMode::Normal,
            count_entry: String::new(),
            select_index: 0,
            default_count,
            should_quit: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn floor(&self) -> &FloorData {
        &self.floor
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    #[must_use]
    pub fn stage(&self) -> Size {
        self.stage
    }

    #[must_use]
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_table(&self) -> Option<&Table> {
        self.tables.get(self.selected)
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn count_entry(&self) -> &str {
        &self.count_entry
    }

    /// Highlighted row of the table selector popup.
    #[must_use]
    pub fn select_index(&self) -> usize {
        self.select_index
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Chair icon style from the appearance data.
    #[must_use]
    pub fn chair_style(&self) -> ChairStyle {
        self.floor.chair_style().unwrap_or(FALLBACK_CHAIR)
    }

    /// Status line for the selected table, if any tables exist.
    #[must_use]
    pub fn remaining_places_line(&self) -> Option<String> {
        self.selected_table().map(|table| {
            format!(
                "Remaining places for {}: {}",
                table.id().label(),
                table.remaining()
            )
        })
    }

    // === Operations ===

    /// Lay out `count` tables in the grid, replacing the current floor.
    /// A count of zero falls back to the default, mirroring the original
    /// `parseInt(...) || 2` behavior.
    pub fn generate(&mut self, count: usize) {
        let count = if count == 0 { self.default_count } else { count };
        let Some(style) = self.floor.table_style() else {
            // Validation guarantees a style; nothing sensible to draw without one.
            tracing::error!("Appearance data has no table style; cannot generate");
            return;
        };

        self.tables = grid_positions(count, style.size(), self.stage.width)
            .into_iter()
            .enumerate()
            .map(|(i, rect)| Table {
                id: TableId::new(i + 1),
                rect,
                chair_count: 0,
            })
            .collect();
        self.selected = 0;
        self.feedback = None;
        tracing::info!(count, "Generated floor plan");
    }

    /// Place a chair at the selected table's next free slot.
    pub fn add_chair(&mut self) {
        let Some(table) = self.tables.get_mut(self.selected) else {
            self.feedback = Some(NO_TABLES_FEEDBACK.to_string());
            return;
        };

        if table.is_full() {
            self.feedback = Some(format!("No places left at {}.", table.id().label()));
            return;
        }

        let slot = table.chair_count;
        table.chair_count += 1;
        self.feedback = None;
        tracing::debug!(table = %table.id(), slot, "Placed chair");
    }

    /// Resize the stage. Existing tables keep their positions; the new
    /// width applies on the next generate.
    pub fn set_stage(&mut self, stage: Size) {
        self.stage = stage;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // === Selection ===

    pub fn select_next(&mut self) {
        if self.tables.is_empty() {
            self.feedback = Some(NO_TABLES_FEEDBACK.to_string());
            return;
        }
        self.selected = (self.selected + 1) % self.tables.len();
        self.feedback = None;
    }

    pub fn select_prev(&mut self) {
        if self.tables.is_empty() {
            self.feedback = Some(NO_TABLES_FEEDBACK.to_string());
            return;
        }
        self.selected = (self.selected + self.tables.len() - 1) % self.tables.len();
        self.feedback = None;
    }

    // === Table selector popup ===

    pub fn open_table_select(&mut self) {
        if self.tables.is_empty() {
            self.feedback = Some(NO_TABLES_FEEDBACK.to_string());
            return;
        }
        self.select_index = self.selected;
        self.mode = InputMode::TableSelect;
    }

    pub fn table_select_next(&mut self) {
        if self.mode == InputMode::TableSelect && !self.tables.is_empty() {
            self.select_index = (self.select_index + 1) % self.tables.len();
        }
    }

    pub fn table_select_prev(&mut self) {
        if self.mode == InputMode::TableSelect && !self.tables.is_empty() {
            self.select_index = (self.select_index + self.tables.len() - 1) % self.tables.len();
        }
    }

    pub fn confirm_table_select(&mut self) {
        if self.mode == InputMode::TableSelect {
            self.selected = self.select_index;
            self.feedback = None;
            self.mode = InputMode::Normal;
        }
    }

    pub fn cancel_table_select(&mut self) {
        if self.mode == InputMode::TableSelect {
            self.mode = InputMode::Normal;
        }
    }

    // === Count entry ===

    pub fn begin_count_entry(&mut self) {
        self.count_entry.clear();
        self.mode = InputMode::CountEntry;
    }

    pub fn count_entry_push(&mut self, ch: char) {
        // Three digits cap the floor at 999 tables, plenty for a grid.
        if self.mode == InputMode::CountEntry && ch.is_ascii_digit() && self.count_entry.len() < 3 {
            self.count_entry.push(ch);
        }
    }

    pub fn count_entry_backspace(&mut self) {
        if self.mode == InputMode::CountEntry {
            self.count_entry.pop();
        }
    }

    pub fn cancel_count_entry(&mut self) {
        if self.mode == InputMode::CountEntry {
            self.mode = InputMode::Normal;
        }
    }

    /// Generate with the typed count. Empty or unparsable entry falls
    /// back to the default count inside [`App::generate`].
    pub fn commit_count_entry(&mut self) {
        if self.mode != InputMode::CountEntry {
            return;
        }
        let count = self.count_entry.parse::<usize>().unwrap_or(0);
        self.mode = InputMode::Normal;
        self.generate(count);
    }
}
