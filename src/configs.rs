//! Host settings for the configuration loader
//!
//! This module provides a unified `LoaderSettings` struct that loads settings
//! from multiple sources in priority order. The internal provider
//! implementations are private to enforce the standard loading pattern.
//!
//! # Settings Priority
//!
//! 1. Environment variables `LOGCONF_*`
//! 2. `~/.logconfrc` (TOML format)
//! 3. Defaults (lenient loading, no extra search paths)
//!
//! Priority is applied per field: a value set by a higher source hides the
//! same field from lower sources.

// Internal provider implementations (private)
mod default_provider;
mod env_provider;
mod rc_provider;
pub(crate) mod provider; // Available within crate for testing

use std::path::PathBuf;
use thiserror::Error;

use crate::core::failure::Escalation;
use provider::{ConfigProvider, PartialSettings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse settings: {0}")]
    Parse(String),

    #[error("Failed to read settings: {0}")]
    Io(String),

    #[error("Environment variable error: {0}")]
    Env(String),

    #[error("Path error: {0}")]
    Path(String),
}

/// How the host wants configuration failures handled, and where else to look
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderSettings {
    /// Propagate errors instead of logging them
    pub throw_exceptions: bool,

    /// Propagate configuration errors; falls back to `throw_exceptions`
    pub throw_config_exceptions: Option<bool>,

    /// Supplementary directories probed after the standard locations
    pub search_paths: Vec<PathBuf>,

    /// Configuration file the host was started with
    pub host_configuration_file: Option<PathBuf>,

    /// Overrides the detected application base directory
    pub base_directory: Option<PathBuf>,
}

impl LoaderSettings {
    /// Load settings and build `LoaderSettings`
    ///
    /// Priority order:
    /// 1. ENV ``LOGCONF_*``
    /// 2. ~/.logconfrc (TOML format)
    /// 3. Defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Build the provider chain in priority order
        let providers: Vec<Box<dyn ConfigProvider>> = vec![
            Box::new(env_provider::EnvProvider::new()),
            Box::new(rc_provider::RcFileProvider::new()),
            Box::new(default_provider::DefaultProvider),
        ];

        Self::from_providers(&providers)
    }

    /// Merge providers, highest priority first
    ///
    /// A provider error stops immediately: a broken settings source must not
    /// be silently replaced by a lower one.
    pub fn from_providers(providers: &[Box<dyn ConfigProvider>]) -> Result<Self, ConfigError> {
        let mut merged = PartialSettings::default();

        for provider in providers {
            if let Some(partial) = provider.load_settings()? {
                merged = merged.or(partial);
            }
        }

        Ok(merged.into())
    }

    /// Whether configuration errors propagate to the caller
    pub fn throws_config_errors(&self) -> bool {
        self.throw_config_exceptions.unwrap_or(self.throw_exceptions)
    }

    /// Keep a strict-mode request raised while loading
    pub fn apply_escalation(&mut self, escalation: Escalation) {
        match escalation {
            Escalation::ThrowExceptions => self.throw_exceptions = true,
            Escalation::ThrowConfigExceptions => self.throw_config_exceptions = Some(true),
        }
    }
}

impl From<PartialSettings> for LoaderSettings {
    fn from(partial: PartialSettings) -> Self {
        Self {
            throw_exceptions: partial.throw_exceptions.unwrap_or(false),
            throw_config_exceptions: partial.throw_config_exceptions,
            search_paths: partial.search_paths.unwrap_or_default(),
            host_configuration_file: partial.host_configuration_file,
            base_directory: partial.base_directory,
        }
    }
}
