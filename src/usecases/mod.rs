pub mod list_candidates;
pub mod load_configuration;
pub mod resolve_config_file;

pub use list_candidates::ListCandidatesUseCase;
pub use load_configuration::LoadConfigurationUseCase;
pub use resolve_config_file::ResolveConfigFileUseCase;
