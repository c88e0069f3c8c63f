mod models;
mod paths;

pub use models::Config;
pub use paths::{Paths, APP_DIR};

use crate::error::ConfigError;
use std::{fs::File, io::Read, path::Path};

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let read_error = |source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents).map_err(read_error)?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
