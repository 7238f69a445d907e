//! Catalog persistence.
//!
//! The catalog is one pretty-printed JSON document. Saving overwrites the
//! file in place; there is no temp-file rename or backup.

use std::path::{Path, PathBuf};

use super::types::Catalog;
use crate::error::{Result, SwatchError};

/// Default catalog file name.
pub const CATALOG_FILE: &str = "filaments.json";

/// Loads and saves a [`Catalog`] at a fixed path.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog. A missing file yields an empty catalog; a file that
    /// cannot be read or parsed is [`SwatchError::MalformedCatalog`].
    pub fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            log::debug!("No catalog at {}, starting empty", self.path.display());
            return Ok(Catalog::default());
        }

        let malformed = |message: String| SwatchError::MalformedCatalog {
            path: self.path.clone(),
            message,
        };

        let content = std::fs::read(&self.path).map_err(|e| malformed(e.to_string()))?;
        let mut catalog: Catalog =
            serde_json::from_slice(&content).map_err(|e| malformed(e.to_string()))?;

        let renumbered = catalog.normalize_ids();
        if renumbered > 0 {
            log::info!(
                "Assigned ids to {} profile(s) in {}",
                renumbered,
                self.path.display()
            );
        }

        log::debug!(
            "Loaded {} profile(s) from {}",
            catalog.profiles.len(),
            self.path.display()
        );
        Ok(catalog)
    }

    /// Write the whole catalog, overwriting the file.
    pub fn save(&self, catalog: &Catalog) -> Result<()> {
        let content = serde_json::to_string_pretty(catalog)
            .map_err(|e| SwatchError::io(&self.path, e.into()))?;

        std::fs::write(&self.path, content).map_err(|e| SwatchError::io(&self.path, e))?;

        log::debug!(
            "Saved {} profile(s) to {}",
            catalog.profiles.len(),
            self.path.display()
        );
        Ok(())
    }
}
