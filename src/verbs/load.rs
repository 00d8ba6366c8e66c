use crate::configs::LoaderSettings;
use crate::container::AppContainer;
use crate::errors::AppError;
use crate::usecases::LoadConfigurationUseCase;

/// Execute the load command
///
/// # Returns
/// * `Ok(())` when a configuration was loaded, even degraded, or none exists
/// * `Err` when loading failed and the failure had to propagate
pub fn execute(
    container: &AppContainer,
    settings: &mut LoaderSettings,
    file_name: Option<&str>,
) -> Result<(), AppError> {
    let usecase = LoadConfigurationUseCase::new(container.loader(), container.ui.clone());
    usecase.execute(file_name, settings)
}
