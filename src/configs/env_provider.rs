use std::collections::HashMap;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::configs::{
    ConfigError,
    provider::{ConfigProvider, PartialSettings},
};

const THROW_EXCEPTIONS_VAR: &str = "LOGCONF_THROW_EXCEPTIONS";
const THROW_CONFIG_EXCEPTIONS_VAR: &str = "LOGCONF_THROW_CONFIG_EXCEPTIONS";
const SEARCH_PATH_VAR: &str = "LOGCONF_SEARCH_PATH";
const HOST_CONFIG_VAR: &str = "LOGCONF_HOST_CONFIG";
const BASE_DIR_VAR: &str = "LOGCONF_BASE_DIR";

/// Provider for environment variable settings
///
/// Reads the `LOGCONF_*` variables. `LOGCONF_SEARCH_PATH` uses the platform
/// path-list separator, like `PATH`.
pub struct EnvProvider {
    vars: HashMap<String, OsString>,
}

impl EnvProvider {
    pub fn new() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            key.into_string().ok().map(|key| (key, value))
        }))
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    fn text(&self, name: &str) -> Result<Option<String>, ConfigError> {
        match self.vars.get(name) {
            None => Ok(None),
            Some(value) => value
                .clone()
                .into_string()
                .map(Some)
                .map_err(|_| ConfigError::Env(format!("{name} is not valid unicode"))),
        }
    }

    fn flag(&self, name: &str) -> Result<Option<bool>, ConfigError> {
        let Some(value) = self.text(name)? else {
            return Ok(None);
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(Some(true)),
            "0" | "false" | "no" | "off" => Ok(Some(false)),
            other => Err(ConfigError::Env(format!(
                "{name} must be a boolean, got '{other}'"
            ))),
        }
    }

    fn path(&self, name: &str) -> Option<PathBuf> {
        self.vars
            .get(name)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

impl Default for EnvProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for EnvProvider {
    fn load_settings(&self) -> Result<Option<PartialSettings>, ConfigError> {
        let settings = PartialSettings {
            throw_exceptions: self.flag(THROW_EXCEPTIONS_VAR)?,
            throw_config_exceptions: self.flag(THROW_CONFIG_EXCEPTIONS_VAR)?,
            search_paths: self
                .vars
                .get(SEARCH_PATH_VAR)
                .map(|value| std::env::split_paths(value).collect()),
            host_configuration_file: self.path(HOST_CONFIG_VAR),
            base_directory: self.path(BASE_DIR_VAR),
        };

        if settings == PartialSettings::default() {
            return Ok(None);
        }

        Ok(Some(settings))
    }
}
