//! Appearance description loaded from the static JSON data file.
//!
//! The file carries two arrays: `rectangles` (table dimensions and fill
//! color) and `places` (chair icon size and the padding between a chair
//! and its table). Only the first entry of each array is consulted; the
//! arrays exist so the file can grow per-table styles later.

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::Size;

#[derive(Debug, Error, PartialEq)]
pub enum AppearanceError {
    #[error("appearance data is missing the `rectangles` array")]
    MissingRectangles,
    #[error("appearance data is missing the `places` array")]
    MissingPlaces,
    #[error("table dimensions must be positive (got {width}x{height})")]
    InvalidTableSize { width: f64, height: f64 },
    #[error("chair size must be positive (got {size})")]
    InvalidChairSize { size: f64 },
}

/// Visual description of a table rectangle.
#[derive(Debug, Clone, Deserialize)]
pub struct TableStyle {
    pub width: f64,
    pub height: f64,
    /// Fill color as written in the data file ("#rrggbb" or a color name).
    /// Parsed at the rendering boundary, kept opaque here.
    pub color: String,
}

impl TableStyle {
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Visual description of a chair icon and its distance from the table.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ChairStyle {
    pub size: f64,
    pub padding: f64,
}

/// Parsed contents of the appearance data file.
#[derive(Debug, Clone, Deserialize)]
pub struct FloorData {
    #[serde(default)]
    pub rectangles: Vec<TableStyle>,
    #[serde(default)]
    pub places: Vec<ChairStyle>,
}

impl FloorData {
    /// Presence and sanity checks applied after parsing. Both arrays must
    /// be non-empty and the first entry of each must have usable sizes.
    pub fn validate(&self) -> Result<(), AppearanceError> {
        let table = self
            .rectangles
            .first()
            .ok_or(AppearanceError::MissingRectangles)?;
        let chair = self.places.first().ok_or(AppearanceError::MissingPlaces)?;

        if table.width <= 0.0 || table.height <= 0.0 {
            return Err(AppearanceError::InvalidTableSize {
                width: table.width,
                height: table.height,
            });
        }
        if chair.size <= 0.0 {
            return Err(AppearanceError::InvalidChairSize { size: chair.size });
        }
        Ok(())
    }

    /// Style applied to every table. Callers must have validated first.
    #[must_use]
    pub fn table_style(&self) -> Option<&TableStyle> {
        self.rectangles.first()
    }

    /// Style applied to every chair. Callers must have validated first.
    #[must_use]
    pub fn chair_style(&self) -> Option<ChairStyle> {
        self.places.first().copied()
    }
}
