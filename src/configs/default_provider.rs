use crate::configs::{
    ConfigError,
    provider::{ConfigProvider, PartialSettings},
};

/// Provider for the default settings
///
/// Lenient loading and no supplementary search paths.
/// This provider should be last in the priority chain as a fallback.
pub struct DefaultProvider;

impl ConfigProvider for DefaultProvider {
    fn load_settings(&self) -> Result<Option<PartialSettings>, ConfigError> {
        Ok(Some(PartialSettings {
            throw_exceptions: Some(false),
            search_paths: Some(Vec::new()),
            ..PartialSettings::default()
        }))
    }
}
