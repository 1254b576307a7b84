//! Core domain types for Seatmap.
//!
//! This crate holds the data model shared by the engine and the TUI:
//! table identifiers, floor geometry, the appearance description loaded
//! from the static JSON data file, and UI accessibility options. It has
//! no IO and no rendering dependencies.

mod appearance;
mod geometry;
mod ids;
mod options;

pub use appearance::{AppearanceError, ChairStyle, FloorData, TableStyle};
pub use geometry::{Point, Rect, Size};
pub use ids::TableId;
pub use options::UiOptions;
