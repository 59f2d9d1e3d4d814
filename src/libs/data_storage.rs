use anyhow::Result;
use std::env::{consts::OS, var};
use std::fs;
use std::path::PathBuf;

/// Directory name under the platform data root.
pub const APP_DIR: &str = "taskmaster";

/// Platform data directory holding the configuration and session files.
#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        let home = || PathBuf::from(var("HOME").unwrap_or_else(|_| ".".into()));
        let root = match OS {
            "windows" => PathBuf::from(var("LOCALAPPDATA").unwrap_or_else(|_| ".".into())),
            "macos" => home().join("Library").join("Application Support"),
            _ => home().join(".local").join("share"),
        };
        Self {
            base_path: root.join(APP_DIR),
        }
    }

    /// Path of `file_name` inside the data directory, creating the directory if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path)?;
        Ok(self.base_path.join(file_name))
    }
}
