use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::configs::{
    ConfigError,
    provider::{ConfigProvider, PartialSettings},
};
use crate::utils::path;

const RC_FILE_NAME: &str = ".logconfrc";

/// TOML structure for .logconfrc file
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RcFile {
    throw_exceptions: Option<bool>,
    throw_config_exceptions: Option<bool>,
    search_paths: Option<Vec<String>>,
    host_configuration_file: Option<String>,
    base_directory: Option<String>,
}

/// Provider for ~/.logconfrc settings file
///
/// Reads and parses a TOML file at `~/.logconfrc` with the following format:
///
/// ```toml
/// throw_config_exceptions = true
/// search_paths = ["~/shared/logging", "/etc/logconf"]
/// ```
///
/// Paths follow `normalize_path` rules (relative paths resolve from HOME).
pub struct RcFileProvider {
    path: Option<PathBuf>,
}

impl RcFileProvider {
    pub fn new() -> Self {
        Self {
            path: path::home_dir().map(|home| home.join(RC_FILE_NAME)),
        }
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }
}

impl Default for RcFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for RcFileProvider {
    fn load_settings(&self) -> Result<Option<PartialSettings>, ConfigError> {
        let Some(rc_path) = self.path.as_deref() else {
            return Ok(None);
        };

        // If file doesn't exist, return None to try next provider
        let content = match std::fs::read_to_string(rc_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ConfigError::Io(format!("Failed to read {RC_FILE_NAME}: {e}"))),
        };

        // Parse TOML - any parse error should stop immediately
        let parsed: RcFile = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse {RC_FILE_NAME}: {e}")))?;

        let search_paths = parsed
            .search_paths
            .map(|paths| {
                paths
                    .iter()
                    .map(|p| path::normalize_path(p))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(Some(PartialSettings {
            throw_exceptions: parsed.throw_exceptions,
            throw_config_exceptions: parsed.throw_config_exceptions,
            search_paths,
            host_configuration_file: parsed
                .host_configuration_file
                .as_deref()
                .map(path::normalize_path)
                .transpose()?,
            base_directory: parsed
                .base_directory
                .as_deref()
                .map(path::normalize_path)
                .transpose()?,
        }))
    }
}
