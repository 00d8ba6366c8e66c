use std::sync::Arc;

use crate::core::candidates::CandidateResolver;
use crate::core::environment_context::EnvironmentContext;
use crate::core::ports::{Environment, UserInteraction};

/// Print every location probed for a configuration file, in order
pub struct ListCandidatesUseCase {
    env: Arc<dyn Environment>,
    ui: Arc<dyn UserInteraction>,
}

impl ListCandidatesUseCase {
    pub fn new(env: Arc<dyn Environment>, ui: Arc<dyn UserInteraction>) -> Self {
        Self { env, ui }
    }

    /// Existing files are marked with `*`
    pub fn execute(&self, file_name: Option<&str>) {
        let context = EnvironmentContext::capture(self.env.as_ref());
        let resolver = CandidateResolver::new(&context, file_name);

        let mut count = 0;
        for candidate in &resolver {
            let marker = if self.env.file_exists(&candidate) { '*' } else { ' ' };
            self.ui.print(&format!("{marker} {}", candidate.display()));
            count += 1;
        }

        if count == 0 {
            self.ui.print("Nothing to display");
        }
    }
}
