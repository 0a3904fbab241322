//! Filesystem layout for Tally
//!
//! The base directory is chosen once at startup:
//!
//! 1. `TALLY_DATA_DIR`, when set and non-empty
//! 2. `$XDG_CONFIG_HOME/tally`, falling back to `~/.config/tally` (Unix)
//! 3. `%APPDATA%\tally` (Windows)
//!
//! Settings live at the base; record stores live under `data/`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::TallyError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "TALLY_DATA_DIR";

const APP_DIR: &str = "tally";
const DATA_SUBDIR: &str = "data";

/// Resolved locations of every file Tally reads or writes
#[derive(Debug, Clone)]
pub struct TallyPaths {
    base_dir: PathBuf,
}

impl TallyPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Fails when no override is set and the platform home directory is unknown.
    pub fn new() -> Result<Self, TallyError> {
        let base_dir = match override_dir(std::env::var_os(DATA_DIR_ENV)) {
            Some(dir) => dir,
            None => platform_default()?,
        };
        Ok(Self::with_base_dir(base_dir))
    }

    /// Use an explicit base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(DATA_SUBDIR)
    }

    /// `config.json` at the base directory
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Transaction store
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Tag hierarchy store
    pub fn tags_file(&self) -> PathBuf {
        self.data_dir().join("tags.json")
    }

    /// Create the base and data directories if missing
    pub fn ensure_directories(&self) -> Result<(), TallyError> {
        for dir in [self.base_dir.clone(), self.data_dir()] {
            create_dir(&dir)?;
        }
        Ok(())
    }

    /// Tally counts as initialized once its settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn create_dir(dir: &Path) -> Result<(), TallyError> {
    std::fs::create_dir_all(dir)
        .map_err(|e| TallyError::Io(format!("Failed to create {}: {}", dir.display(), e)))
}

fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

#[cfg(not(windows))]
fn platform_default() -> Result<PathBuf, TallyError> {
    if let Some(xdg) = override_dir(std::env::var_os("XDG_CONFIG_HOME")) {
        return Ok(xdg.join(APP_DIR));
    }
    let home = override_dir(std::env::var_os("HOME"))
        .ok_or_else(|| TallyError::Config("HOME is not set".into()))?;
    Ok(home.join(".config").join(APP_DIR))
}

#[cfg(windows)]
fn platform_default() -> Result<PathBuf, TallyError> {
    let appdata = override_dir(std::env::var_os("APPDATA"))
        .ok_or_else(|| TallyError::Config("APPDATA is not set".into()))?;
    Ok(appdata.join(APP_DIR))
}
