use std::env;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::configs::LoaderSettings;
use crate::core::ports::{Environment, HostLibrary};

/// Environment of the running process, backed by the real filesystem
#[derive(Debug, Default)]
pub struct ProcessEnvironment {
    base_directory: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    host_configuration_file: Option<PathBuf>,
}

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the host-provided overrides and extra locations
    pub fn with_settings(settings: &LoaderSettings) -> Self {
        Self {
            base_directory: settings.base_directory.clone(),
            search_paths: settings.search_paths.clone(),
            host_configuration_file: settings.host_configuration_file.clone(),
        }
    }

    fn current_exe() -> Option<PathBuf> {
        env::current_exe().ok()
    }
}

impl Environment for ProcessEnvironment {
    fn file_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn base_directory(&self) -> Option<PathBuf> {
        self.base_directory
            .clone()
            .or_else(|| self.entry_binary_location())
    }

    fn entry_binary_location(&self) -> Option<PathBuf> {
        Self::current_exe().and_then(|exe| exe.parent().map(Path::to_path_buf))
    }

    fn entry_binary_file_name(&self) -> Option<String> {
        Self::current_exe()
            .and_then(|exe| exe.file_name().map(|name| name.to_string_lossy().into_owned()))
    }

    fn current_process_file_path(&self) -> Option<PathBuf> {
        Self::current_exe()
    }

    fn supplementary_search_paths(&self) -> Vec<PathBuf> {
        self.search_paths.clone()
    }

    fn user_temp_path(&self) -> Option<PathBuf> {
        Some(env::temp_dir())
    }

    fn host_configuration_file(&self) -> Option<PathBuf> {
        self.host_configuration_file.clone()
    }

    // Statically linked: there is no separate library image to look next to
    fn host_library(&self) -> Option<HostLibrary> {
        None
    }

    fn is_case_insensitive(&self) -> bool {
        cfg!(any(windows, target_os = "macos"))
    }

    fn executable_suffix(&self) -> String {
        env::consts::EXE_SUFFIX.to_string()
    }

    fn library_suffix(&self) -> String {
        env::consts::DLL_SUFFIX.to_string()
    }

    fn open_for_parsing(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let file = File::open(path)?;
        Ok(Box::new(BufReader::new(file)))
    }
}
