use std::path::{Path, PathBuf};

use crate::core::ports::{Environment, HostLibrary};
use crate::utils::path::{eq_ignore_case, starts_with_ignore_case, trim_directory_separators};

/// Snapshot of the environment taken once per load call
///
/// Directory values have trailing separators trimmed and blank values
/// mapped to `None`, so the resolver only deals with usable paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentContext {
    pub base_directory: Option<PathBuf>,
    pub entry_binary_location: Option<PathBuf>,
    pub entry_binary_file_name: Option<String>,
    pub current_process_file_path: Option<PathBuf>,
    pub supplementary_search_paths: Vec<PathBuf>,
    pub user_temp_path: Option<PathBuf>,
    pub host_configuration_file: Option<PathBuf>,
    pub host_library: Option<HostLibrary>,
    pub case_insensitive: bool,
    pub executable_suffix: String,
    pub library_suffix: String,
}

impl EnvironmentContext {
    pub fn capture(env: &dyn Environment) -> Self {
        Self {
            base_directory: env
                .base_directory()
                .and_then(|p| trim_directory_separators(&p)),
            entry_binary_location: env
                .entry_binary_location()
                .and_then(|p| trim_directory_separators(&p)),
            entry_binary_file_name: env
                .entry_binary_file_name()
                .filter(|name| !name.trim().is_empty()),
            current_process_file_path: env
                .current_process_file_path()
                .filter(|p| !p.as_os_str().is_empty()),
            supplementary_search_paths: env.supplementary_search_paths(),
            user_temp_path: env
                .user_temp_path()
                .and_then(|p| trim_directory_separators(&p)),
            host_configuration_file: env
                .host_configuration_file()
                .filter(|p| !p.to_string_lossy().trim().is_empty()),
            host_library: env
                .host_library()
                .filter(|lib| !lib.path.as_os_str().is_empty()),
            case_insensitive: env.is_case_insensitive(),
            executable_suffix: env.executable_suffix(),
            library_suffix: env.library_suffix(),
        }
    }

    /// Whether the process directory can be trusted to hold the application
    ///
    /// It cannot when the entry binary lives elsewhere and the process is a
    /// generic host (a runtime launcher, a web server) loading it. A single
    /// file bundle unpacked under the temp directory is still trusted.
    pub fn is_valid_process_directory(&self, process_directory: Option<&Path>) -> bool {
        let Some(entry_location) = self.entry_binary_location.as_deref() else {
            return true;
        };

        let Some(process_directory) = process_directory else {
            return false;
        };

        if eq_ignore_case(entry_location, process_directory) {
            return true;
        }

        self.user_temp_path
            .as_deref()
            .is_some_and(|temp| starts_with_ignore_case(entry_location, temp))
    }
}
