//! Mock environment for testing
//!
//! Provides an in-memory filesystem and process description.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::ports::{Environment, HostLibrary};

/// Mock entry in the filesystem
#[derive(Debug, Clone)]
struct MockFile {
    content: Result<String, io::ErrorKind>,
    remaining_reads: Option<usize>,
}

/// Mock environment for testing
///
/// Every `file_exists` call is recorded so tests can assert on the probing
/// order.
pub struct MockEnvironment {
    files: Mutex<HashMap<PathBuf, MockFile>>,
    probes: Mutex<Vec<PathBuf>>,
    base_directory: Option<PathBuf>,
    entry_binary_location: Option<PathBuf>,
    entry_binary_file_name: Option<String>,
    current_process_file_path: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    user_temp_path: Option<PathBuf>,
    host_configuration_file: Option<PathBuf>,
    host_library: Option<HostLibrary>,
    case_insensitive: bool,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            probes: Mutex::new(Vec::new()),
            base_directory: None,
            entry_binary_location: None,
            entry_binary_file_name: None,
            current_process_file_path: None,
            search_paths: Vec::new(),
            user_temp_path: None,
            host_configuration_file: None,
            host_library: None,
            case_insensitive: false,
        }
    }

    /// Add a readable file
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.insert(path, Ok(content.to_string()), None);
    }

    /// Add a file that exists but fails to open with `kind`
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>, kind: io::ErrorKind) {
        self.insert(path, Err(kind), None);
    }

    /// Add a file that can be opened `reads` times, then vanishes
    pub fn add_file_with_read_limit(&self, path: impl AsRef<Path>, content: &str, reads: usize) {
        self.insert(path, Ok(content.to_string()), Some(reads));
    }

    fn insert(&self, path: impl AsRef<Path>, content: Result<String, io::ErrorKind>, reads: Option<usize>) {
        let file = MockFile {
            content,
            remaining_reads: reads,
        };
        self.files
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), file);
    }

    pub fn set_base_directory(&mut self, path: impl AsRef<Path>) {
        self.base_directory = Some(path.as_ref().to_path_buf());
    }

    pub fn set_entry_binary_location(&mut self, path: impl AsRef<Path>) {
        self.entry_binary_location = Some(path.as_ref().to_path_buf());
    }

    pub fn set_entry_binary_file_name(&mut self, name: impl Into<String>) {
        self.entry_binary_file_name = Some(name.into());
    }

    pub fn set_current_process_file_path(&mut self, path: impl AsRef<Path>) {
        self.current_process_file_path = Some(path.as_ref().to_path_buf());
    }

    pub fn set_search_paths<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        self.search_paths = paths
            .into_iter()
            .map(|p| p.as_ref().to_path_buf())
            .collect();
    }

    pub fn set_user_temp_path(&mut self, path: impl AsRef<Path>) {
        self.user_temp_path = Some(path.as_ref().to_path_buf());
    }

    pub fn set_host_configuration_file(&mut self, path: impl AsRef<Path>) {
        self.host_configuration_file = Some(path.as_ref().to_path_buf());
    }

    pub fn set_host_library(&mut self, path: impl AsRef<Path>, globally_registered: bool) {
        self.host_library = Some(HostLibrary {
            path: path.as_ref().to_path_buf(),
            globally_registered,
        });
    }

    pub fn set_case_insensitive(&mut self, case_insensitive: bool) {
        self.case_insensitive = case_insensitive;
    }

    /// Paths passed to `file_exists`, in call order
    pub fn probed_paths(&self) -> Vec<PathBuf> {
        self.probes.lock().unwrap().clone()
    }

    /// Drain the recorded probes
    pub fn take_probed_paths(&self) -> Vec<PathBuf> {
        std::mem::take(&mut *self.probes.lock().unwrap())
    }
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for MockEnvironment {
    fn file_exists(&self, path: &Path) -> bool {
        self.probes.lock().unwrap().push(path.to_path_buf());
        self.files.lock().unwrap().contains_key(path)
    }

    fn base_directory(&self) -> Option<PathBuf> {
        self.base_directory.clone()
    }

    fn entry_binary_location(&self) -> Option<PathBuf> {
        self.entry_binary_location.clone()
    }

    fn entry_binary_file_name(&self) -> Option<String> {
        self.entry_binary_file_name.clone()
    }

    fn current_process_file_path(&self) -> Option<PathBuf> {
        self.current_process_file_path.clone()
    }

    fn supplementary_search_paths(&self) -> Vec<PathBuf> {
        self.search_paths.clone()
    }

    fn user_temp_path(&self) -> Option<PathBuf> {
        self.user_temp_path.clone()
    }

    fn host_configuration_file(&self) -> Option<PathBuf> {
        self.host_configuration_file.clone()
    }

    fn host_library(&self) -> Option<HostLibrary> {
        self.host_library.clone()
    }

    fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    fn executable_suffix(&self) -> String {
        String::new()
    }

    fn library_suffix(&self) -> String {
        ".so".to_string()
    }

    fn open_for_parsing(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let mut files = self.files.lock().unwrap();

        let Some(file) = files.get_mut(path) else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "File not found"));
        };

        if let Some(remaining) = file.remaining_reads.as_mut() {
            if *remaining == 0 {
                files.remove(path);
                return Err(io::Error::new(io::ErrorKind::NotFound, "File vanished"));
            }
            *remaining -= 1;
        }

        match &file.content {
            Ok(content) => Ok(Box::new(Cursor::new(content.clone().into_bytes()))),
            Err(kind) => Err(io::Error::new(*kind, "Access denied")),
        }
    }
}
