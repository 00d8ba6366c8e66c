use std::sync::Arc;

use crate::configs::LoaderSettings;
use crate::core::configuration::LoggingConfiguration;
use crate::core::loader::ConfigurationLoader;
use crate::core::ports::UserInteraction;
use crate::errors::AppError;

pub struct LoadConfigurationUseCase {
    loader: Arc<ConfigurationLoader>,
    ui: Arc<dyn UserInteraction>,
}

impl LoadConfigurationUseCase {
    pub fn new(loader: Arc<ConfigurationLoader>, ui: Arc<dyn UserInteraction>) -> Self {
        Self { loader, ui }
    }

    /// Load the configuration and print a summary of it
    ///
    /// A strict-mode request raised by the failing file is recorded in
    /// `settings` before the error is returned, so later loads through the
    /// same settings propagate failures too.
    ///
    /// # Arguments
    /// * `file_name` - Explicit file to load, `None` to search the candidates
    /// * `settings` - Host settings, updated on escalation
    pub fn execute(
        &self,
        file_name: Option<&str>,
        settings: &mut LoaderSettings,
    ) -> Result<(), AppError> {
        let result = match file_name {
            Some(name) => self.loader.load_file(name, settings).map(Some),
            None => self.loader.load(settings),
        };

        match result {
            Ok(Some(config)) => {
                self.print_summary(&config);
                Ok(())
            }
            Ok(None) => {
                self.ui.print("No configuration found");
                Ok(())
            }
            Err(e) => {
                if let Some(escalation) = e.escalation() {
                    settings.apply_escalation(escalation);
                }
                Err(e.into())
            }
        }
    }

    fn print_summary(&self, config: &LoggingConfiguration) {
        let file = config
            .file_path
            .as_ref()
            .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());
        let status = if config.initialize_succeeded {
            "ok"
        } else {
            "degraded"
        };

        self.ui.print(&format!("File: {file}"));
        self.ui.print(&format!("Status: {status}"));
        self.ui.print(&format!("Auto reload: {}", config.auto_reload));
        self.ui.print(&format!("Rules: {}", config.rules.len()));

        for rule in &config.rules {
            match &rule.write_to {
                Some(target) => self.ui.print(&format!(
                    "  {} >= {} -> {target}",
                    rule.name_pattern, rule.min_level
                )),
                None => self
                    .ui
                    .print(&format!("  {} >= {}", rule.name_pattern, rule.min_level)),
            }
        }

        for problem in &config.problems {
            self.ui.print_error(&format!("Problem: {problem}"));
        }
    }
}
