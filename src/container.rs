use std::sync::Arc;

use crate::adapters::{ProcessEnvironment, TerminalInteraction, XmlConfigurationParser};
use crate::configs::LoaderSettings;
use crate::core::ConfigurationLoader;
use crate::core::ports::{Environment, StructuredParser, UserInteraction};

pub struct AppContainer {
    pub env: Arc<dyn Environment>,
    pub parser: Arc<dyn StructuredParser>,
    pub ui: Arc<dyn UserInteraction>,
}

impl AppContainer {
    pub fn new(settings: &LoaderSettings) -> Self {
        Self {
            env: Arc::new(ProcessEnvironment::with_settings(settings)),
            parser: Arc::new(XmlConfigurationParser::new()),
            ui: Arc::new(TerminalInteraction::new()),
        }
    }

    pub fn loader(&self) -> Arc<ConfigurationLoader> {
        Arc::new(ConfigurationLoader::new(
            Arc::clone(&self.env),
            Arc::clone(&self.parser),
        ))
    }
}
