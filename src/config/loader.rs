use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::scoring::ScoringConfig;
use super::CovgapConfig;

/// Name of the configuration file searched for by [`load_config`]
pub const CONFIG_FILE_NAME: &str = ".covgap.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
///
/// Invalid scoring weights or divisors fall back to the defaults with a
/// warning; weights that are in range but do not sum to 1.0 are normalized.
pub fn parse_config(contents: &str) -> Result<CovgapConfig, String> {
    let mut config = toml::from_str::<CovgapConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    config.scoring.weights.normalize();
    if let Err(e) = config.scoring.validate() {
        log::warn!("Invalid scoring configuration: {}. Using defaults.", e);
        config.scoring = ScoringConfig::default();
    }

    Ok(config)
}

/// Load configuration from an explicit path
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config_from_path(path: &Path) -> anyhow::Result<CovgapConfig> {
    let contents = read_config_file(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config = parse_config(&contents).map_err(anyhow::Error::msg)?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CovgapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
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

/// Search `start` and its ancestors for `.covgap.toml`
pub fn load_config_from_dir(start: &Path) -> CovgapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CovgapConfig::default()
        })
}

/// Search the current directory and its ancestors for `.covgap.toml`
pub fn load_config() -> CovgapConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from_dir(&dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            CovgapConfig::default()
        }
    }
}
