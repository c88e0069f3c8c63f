use crate::error::SetupError;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "CF-DDNS";
const CONFIG_FILE: &str = "config.json";
const LOG_DIR: &str = "logs";

/// Where the config file and logs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    root: PathBuf,
}

impl Paths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<home>/CF-DDNS`
    pub fn from_home() -> Result<Self, SetupError> {
        dirs::home_dir()
            .map(|home| Self::new(home.join(APP_DIR)))
            .ok_or(SetupError::NoHomeDir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.root.join(LOG_DIR)
    }
}
