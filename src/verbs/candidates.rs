use crate::container::AppContainer;
use crate::usecases::ListCandidatesUseCase;

/// Execute the candidates command
///
/// Lists the locations searched for the configuration file, in priority
/// order, marking the ones that exist.
pub fn execute(container: &AppContainer, file_name: Option<&str>) {
    let usecase = ListCandidatesUseCase::new(container.env.clone(), container.ui.clone());
    usecase.execute(file_name);
}
