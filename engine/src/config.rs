use serde::Deserialize;
use std::path::PathBuf;

use seatmap_types::UiOptions;

use crate::app::DEFAULT_TABLE_COUNT;
use crate::data::DEFAULT_DATA_PATH;

/// Optional user configuration at `~/.seatmap/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct SeatmapConfig {
    pub app: Option<AppConfig>,
    pub data: Option<DataConfig>,
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Number of tables generated at startup.
    pub table_count: Option<usize>,
    /// Use ASCII-only glyphs for chair icons and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct DataConfig {
    /// Path to the JSON appearance file.
    pub path: Option<String>,
}

impl SeatmapConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read { path, source: err });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse { path, source: err })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Startup table count, falling back to the default.
    #[must_use]
    pub fn table_count(&self) -> usize {
        self.app
            .as_ref()
            .and_then(|app| app.table_count)
            .unwrap_or(DEFAULT_TABLE_COUNT)
    }

    /// Rendering options derived from the `[app]` table.
    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
        }
    }

    /// Appearance-file path: `[data] path`, else the in-tree default.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.data
            .as_ref()
            .and_then(|data| data.path.as_deref())
            .unwrap_or(DEFAULT_DATA_PATH)
            .into()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".seatmap").join("config.toml"))
}
