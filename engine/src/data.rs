//! Loader for the static JSON appearance file.

use std::path::{Path, PathBuf};

use thiserror::Error;

use seatmap_types::{AppearanceError, FloorData};

/// Default location of the appearance file, relative to the working
/// directory.
pub const DEFAULT_DATA_PATH: &str = "data/data.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read appearance data at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse appearance data at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid appearance data at {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: AppearanceError,
    },
}

/// Read, parse, and validate the appearance file.
pub fn load_floor_data(path: &Path) -> Result<FloorData, DataError> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        tracing::warn!("Failed to read appearance data at {:?}: {}", path, err);
        DataError::Read {
            path: path.to_path_buf(),
            source: err,
        }
    })?;

    let data: FloorData = serde_json::from_str(&content).map_err(|err| {
        tracing::warn!("Failed to parse appearance data at {:?}: {}", path, err);
        DataError::Parse {
            path: path.to_path_buf(),
            source: err,
        }
    })?;

    data.validate().map_err(|err| DataError::Invalid {
        path: path.to_path_buf(),
        source: err,
    })?;

    tracing::debug!(path = %path.display(), "Loaded appearance data");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_data(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_valid_file() {
        let (_dir, path) = write_data(
            r##"{
                "rectangles": [{ "width": 120, "height": 80, "color": "#7e9cd8" }],
                "places": [{ "size": 24, "padding": 6 }]
            }"##,
        );
        let data = load_floor_data(&path).unwrap();
        assert_eq!(data.rectangles.len(), 1);
        assert_eq!(data.places.len(), 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_floor_data(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let (_dir, path) = write_data("{ not json");
        let err = load_floor_data(&path).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
    }

    #[test]
    fn missing_arrays_are_invalid() {
        let (_dir, path) = write_data("{}");
        let err = load_floor_data(&path).unwrap_err();
        assert!(matches!(
            err,
            DataError::Invalid {
                source: AppearanceError::MissingRectangles,
                ..
            }
        ));
    }
}
