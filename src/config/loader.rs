//! Configuration file loading.
//!
//! Pipeline: read the YAML file, deserialize into the raw schema, validate
//! field values, and produce a resolved [`PageConfig`]. Durations are
//! humantime strings (`"30s"`, `"1m 30s"`).

use std::path::Path;

use serde::Deserialize;

use crate::config::PageConfig;
use crate::error::ConfigError;

/// Raw configuration file schema. Every field is optional; missing fields
/// keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    /// Path of the directory fragment, relative to the page URL.
    directory_fragment: Option<String>,

    /// Per-request timeout as a humantime string.
    timeout: Option<String>,

    /// User-agent override for the HTTP client.
    user_agent: Option<String>,
}

/// Loads and validates a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError::MissingFile`] if the path does not exist,
/// [`ConfigError::ParseError`] for unreadable or malformed YAML, and
/// [`ConfigError::InvalidValue`] when a field fails validation.
pub fn load(path: &Path) -> Result<PageConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;

    let file: ConfigFile = serde_yaml::from_str(&raw).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    resolve(file)
}

/// Validates raw fields and applies defaults.
fn resolve(file: ConfigFile) -> Result<PageConfig, ConfigError> {
    let mut config = PageConfig::default();

    if let Some(fragment) = file.directory_fragment {
        if fragment.is_empty() || fragment.contains(['?', '#']) {
            return Err(ConfigError::InvalidValue {
                field: "directory_fragment".to_string(),
                value: fragment,
                expected: "a non-empty path without query or fragment parts".to_string(),
            });
        }
        config.directory_fragment = fragment;
    }

    if let Some(timeout) = file.timeout {
        let parsed = humantime::parse_duration(&timeout).map_err(|e| ConfigError::InvalidValue {
            field: "timeout".to_string(),
            value: timeout,
            expected: format!("a duration such as '30s' ({e})"),
        })?;
        config.timeout = Some(parsed);
    }

    config.user_agent = file.user_agent;

    Ok(config)
}
