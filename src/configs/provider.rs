use std::path::PathBuf;

use crate::configs::ConfigError;

/// Settings as seen by a single source; unset fields are `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialSettings {
    pub throw_exceptions: Option<bool>,
    pub throw_config_exceptions: Option<bool>,
    pub search_paths: Option<Vec<PathBuf>>,
    pub host_configuration_file: Option<PathBuf>,
    pub base_directory: Option<PathBuf>,
}

impl PartialSettings {
    /// Fill fields unset in `self` from `lower`
    #[must_use]
    pub fn or(self, lower: PartialSettings) -> Self {
        Self {
            throw_exceptions: self.throw_exceptions.or(lower.throw_exceptions),
            throw_config_exceptions: self
                .throw_config_exceptions
                .or(lower.throw_config_exceptions),
            search_paths: self.search_paths.or(lower.search_paths),
            host_configuration_file: self
                .host_configuration_file
                .or(lower.host_configuration_file),
            base_directory: self.base_directory.or(lower.base_directory),
        }
    }
}

/// Trait for settings providers
///
/// Each provider represents a source of settings (environment variables,
/// settings files, defaults, etc.).
///
/// Providers are merged in priority order, field by field.
pub trait ConfigProvider {
    /// Attempt to load settings from this source
    ///
    /// # Returns
    ///
    /// - `Ok(Some(settings))`: Source found and successfully parsed
    /// - `Ok(None)`: Source does not exist (try next provider)
    /// - `Err(e)`: Source exists but failed to parse (stop immediately)
    fn load_settings(&self) -> Result<Option<PartialSettings>, ConfigError>;
}
