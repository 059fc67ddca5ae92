//! Path management for divvy
//!
//! Provides platform-appropriate path resolution for configuration and data.
//!
//! ## Path Resolution Order
//!
//! 1. `DIVVY_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (Linux:
//!    `~/.config/divvy`, macOS: `~/Library/Application Support/divvy`,
//!    Windows: `%APPDATA%\divvy`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DivvyError;

/// Manages all paths used by divvy
#[derive(Debug, Clone)]
pub struct DivvyPaths {
    /// Base directory for all divvy data
    base_dir: PathBuf,
}

impl DivvyPaths {
    /// Create a new DivvyPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn new() -> Result<Self, DivvyError> {
        let base_dir = if let Ok(custom) = std::env::var("DIVVY_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "divvy").ok_or_else(|| {
                DivvyError::Config("Could not determine config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create DivvyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to categories.json (the full ordered category list)
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), DivvyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DivvyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DivvyError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
