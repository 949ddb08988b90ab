use std::fs;
use std::path::{Path, PathBuf};

use super::core::GeoscoreConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".geoscore.toml";

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str) -> Result<GeoscoreConfig> {
    let config = toml::from_str::<GeoscoreConfig>(contents)
        .map_err(|e| Error::Config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    if let Some(countries) = &config.synthetic.countries {
        if countries.iter().any(|c| c.trim().is_empty()) {
            return Err(Error::Config(
                "synthetic.countries must not contain empty names".to_string(),
            ));
        }
    }

    Ok(config)
}

/// Load an explicitly requested config file; errors are surfaced.
pub fn load_config_from_path(path: &Path) -> Result<GeoscoreConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
    parse_config(&contents)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<GeoscoreConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> GeoscoreConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            GeoscoreConfig::default()
        })
}

pub fn load_config() -> GeoscoreConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            GeoscoreConfig::default()
        }
    }
}
