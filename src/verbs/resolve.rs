use crate::container::AppContainer;
use crate::usecases::ResolveConfigFileUseCase;

pub fn execute(container: &AppContainer, path: &str) {
    let usecase = ResolveConfigFileUseCase::new(container.loader(), container.ui.clone());
    usecase.execute(path);
}
