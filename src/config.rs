//! Tool settings and path resolution.
//!
//! Settings live in a small JSON file in the per-user config directory:
//! - Linux: ~/.config/filament-swatch/config.json
//! - Windows: %APPDATA%\filament-swatch\config.json
//!
//! A missing file means defaults; it is only written by `config --init`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::CATALOG_FILE;
use crate::error::{Result, SwatchError};

// =============================================================================
// Config Path
// =============================================================================

const APP_NAME: &str = "filament-swatch";
const CONFIG_FILE: &str = "config.json";

/// Default export subfolder name.
pub const DEFAULT_OUTPUT_FOLDER: &str = "output";

/// Get the configuration directory path.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .ok_or(SwatchError::ConfigDirUnavailable)
}

/// Get the full path to the config file.
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

// =============================================================================
// Config Structure
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog location; defaults to `filaments.json` beside the executable.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Export subfolder, created next to the catalog.
    #[serde(default = "default_output_folder")]
    pub output_folder: String,

    /// Font for label previews; system fonts are tried when unset.
    #[serde(default)]
    pub font_path: Option<PathBuf>,
}

fn default_output_folder() -> String {
    DEFAULT_OUTPUT_FOLDER.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            output_folder: default_output_folder(),
            font_path: None,
        }
    }
}

// =============================================================================
// Storage Functions
// =============================================================================

/// Load configuration from the default location.
pub fn load_config() -> Result<AppConfig> {
    load_config_from(&get_config_path()?)
}

/// Load configuration from `path`; a missing file yields defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| SwatchError::io(path, e))?;

    serde_json::from_str(&content).map_err(|e| {
        SwatchError::InvalidInput(format!("Failed to parse config {}: {}", path.display(), e))
    })
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| SwatchError::io(dir, e))?;
    }

    let content =
        serde_json::to_string_pretty(config).map_err(|e| SwatchError::io(path, e.into()))?;

    std::fs::write(path, content).map_err(|e| SwatchError::io(path, e))
}

// =============================================================================
// Path Resolution
// =============================================================================

/// `filaments.json` in the directory of the running executable.
pub fn default_catalog_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| SwatchError::io("<current exe>", e))?;
    let dir = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(dir.join(CATALOG_FILE))
}

impl AppConfig {
    /// Catalog path: explicit override, then config, then the default.
    pub fn resolve_catalog_path(&self, cli: Option<&Path>) -> Result<PathBuf> {
        match cli.or(self.catalog_path.as_deref()) {
            Some(path) => Ok(path.to_path_buf()),
            None => default_catalog_path(),
        }
    }

    /// Output directory: explicit override, else `<catalog dir>/<output_folder>`.
    pub fn resolve_output_dir(&self, cli: Option<&Path>, catalog_path: &Path) -> PathBuf {
        if let Some(dir) = cli {
            return dir.to_path_buf();
        }
        catalog_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&self.output_folder)
    }
}
