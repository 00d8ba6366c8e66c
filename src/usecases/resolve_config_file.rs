use std::sync::Arc;

use crate::core::loader::ConfigurationLoader;
use crate::core::ports::UserInteraction;

pub struct ResolveConfigFileUseCase {
    loader: Arc<ConfigurationLoader>,
    ui: Arc<dyn UserInteraction>,
}

impl ResolveConfigFileUseCase {
    pub fn new(loader: Arc<ConfigurationLoader>, ui: Arc<dyn UserInteraction>) -> Self {
        Self { loader, ui }
    }

    pub fn execute(&self, file_name: &str) {
        let path = self.loader.resolve_config_file(file_name);
        self.ui.print(&path.display().to_string());
    }
}
