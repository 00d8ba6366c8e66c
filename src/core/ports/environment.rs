use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Location of the library image hosting the loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostLibrary {
    pub path: PathBuf,

    /// Installed in a global, shared registry rather than deployed next to
    /// the application
    pub globally_registered: bool,
}

/// Read-only view of the process and its filesystem
///
/// One implementation per target platform is picked when the application is
/// composed; tests substitute an in-memory fake.
pub trait Environment: Send + Sync {
    /// Check if a file exists
    ///
    /// # Returns
    /// * `true` if `path` names an existing file
    /// * `false` otherwise, including when the check itself fails
    fn file_exists(&self, path: &Path) -> bool;

    /// Application base directory, `None` when unavailable
    fn base_directory(&self) -> Option<PathBuf>;

    /// Directory holding the entry binary
    fn entry_binary_location(&self) -> Option<PathBuf>;

    /// File name of the entry binary, without directory
    fn entry_binary_file_name(&self) -> Option<String>;

    /// Full path of the running process image
    fn current_process_file_path(&self) -> Option<PathBuf>;

    /// Extra directories to probe, in priority order
    fn supplementary_search_paths(&self) -> Vec<PathBuf>;

    fn user_temp_path(&self) -> Option<PathBuf>;

    /// Configuration file the host itself was started with, if any
    fn host_configuration_file(&self) -> Option<PathBuf>;

    fn host_library(&self) -> Option<HostLibrary>;

    /// Whether paths differing only by case name the same file
    fn is_case_insensitive(&self) -> bool;

    /// Suffix of executables on this platform (`.exe`, or empty)
    fn executable_suffix(&self) -> String;

    /// Suffix of dynamic libraries on this platform (`.so`, `.dll`, ...)
    fn library_suffix(&self) -> String;

    /// Open a file for structured parsing
    ///
    /// The returned reader owns the handle; dropping it releases the file.
    fn open_for_parsing(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;

    /// Read the whole file as text
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected; only I/O
    /// failures are errors.
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let mut reader = self.open_for_parsing(path)?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
