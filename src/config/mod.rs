mod models;

pub use models::{ConfigOptions, DEFAULT_NSUPDATE_PATH, DEFAULT_TTL};

use crate::error::{FileKind, UpdateError};
use log::debug;
use std::{fs, path::Path};

/// Reads and parses a YAML config file. Missing `nsupdate`/`ttl` keys get
/// their defaults.
pub fn load_config(path: &Path) -> Result<ConfigOptions, UpdateError> {
    if !path.is_file() {
        return Err(UpdateError::FileNotFound {
            kind: FileKind::Config,
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| UpdateError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: ConfigOptions =
        serde_yaml::from_str(&contents).map_err(|source| UpdateError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    debug!("Loaded config from {}", path.display());
    Ok(config)
}
