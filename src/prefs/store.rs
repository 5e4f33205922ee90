//! On-disk preference store.
//!
//! Stored under the user config dir (`~/.config/courtside/` on Linux):
//! `columns.json` for column visibility, `density` as a plain string.
//! Malformed persisted data is logged as a warning and silently falls
//! back to defaults; it is never surfaced to the user.

use std::path::PathBuf;

use tracing::warn;

use crate::error::{CourtsideError, Result};

use super::columns::ColumnSet;
use super::Density;

const COLUMNS_FILE: &str = "columns.json";
const DENSITY_FILE: &str = "density";

pub struct PrefsStore {
    dir: PathBuf,
}

impl PrefsStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store rooted at the platform config directory.
    pub fn default_location() -> Result<Self> {
        let base = dirs::config_dir()
            .ok_or_else(|| CourtsideError::Internal("cannot determine config directory".into()))?;
        Ok(Self::new(base.join("courtside")))
    }

    fn columns_path(&self) -> PathBuf {
        self.dir.join(COLUMNS_FILE)
    }

    fn density_path(&self) -> PathBuf {
        self.dir.join(DENSITY_FILE)
    }

    /// `Ok(None)` when nothing is persisted yet; parse failures are
    /// `CourtsideError::PrefsParse`.
    fn read_columns(&self) -> Result<Option<ColumnSet>> {
        let path = self.columns_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        let columns = serde_json::from_str(&raw)
            .map_err(|e| CourtsideError::PrefsParse(format!("{}: {}", path.display(), e)))?;
        Ok(Some(columns))
    }

    pub fn load_columns(&self) -> ColumnSet {
        match self.read_columns() {
            Ok(Some(columns)) => columns,
            Ok(None) => ColumnSet::default(),
            Err(e) => {
                warn!("failed to load column preferences: {}", e);
                ColumnSet::default()
            }
        }
    }

    pub fn save_columns(&self, columns: &ColumnSet) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(columns)?;
        std::fs::write(self.columns_path(), json)?;
        Ok(())
    }

    fn read_density(&self) -> Result<Option<Density>> {
        let path = self.density_path();
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        let key = raw.trim();
        let density = Density::from_key(key).ok_or_else(|| {
            CourtsideError::PrefsParse(format!("{}: unknown density {:?}", path.display(), key))
        })?;
        Ok(Some(density))
    }

    pub fn load_density(&self) -> Density {
        match self.read_density() {
            Ok(Some(density)) => density,
            Ok(None) => Density::default(),
            Err(e) => {
                warn!("failed to load density preference: {}", e);
                Density::default()
            }
        }
    }

    pub fn save_density(&self, density: Density) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.density_path(), density.as_str())?;
        Ok(())
    }
}
