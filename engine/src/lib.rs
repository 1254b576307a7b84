//! Application state and floor-plan logic for Seatmap.
//!
//! This crate contains the `App` state machine without TUI dependencies:
//!
//! - **Layout**: grid placement of N tables using fixed spacing/margin
//! - **Chair slots**: the ten fixed offsets around a table's bounding box
//! - **State**: selection, per-table chair counters, feedback text
//! - **Input modes**: Normal, count entry, table selector
//! - **Config and data loading**: TOML config, JSON appearance file
//!
//! The TUI layer (`seatmap-tui`) reads state from `App` and forwards
//! input back to it. No rendering logic lives in this crate.

mod app;
mod chairs;
mod config;
mod data;
mod layout;

pub use app::{App, DEFAULT_TABLE_COUNT, InputMode, Table};
pub use chairs::{MAX_CHAIRS, chair_slots};
pub use config::{AppConfig, ConfigError, DataConfig, SeatmapConfig, config_path};
pub use data::{DEFAULT_DATA_PATH, DataError, load_floor_data};
pub use layout::{MARGIN, SPACING, grid_positions, tables_per_row};

pub use seatmap_types::{
    AppearanceError, ChairStyle, FloorData, Point, Rect, Size, TableId, TableStyle, UiOptions,
};
