//! Ordered, de-duplicated enumeration of configuration file locations
//!
//! The resolver never touches the filesystem: it only turns an
//! [`EnvironmentContext`] into paths. Probing them is the loader's job.
//!
//! # Candidate Priority
//!
//! 1. `{base}/{name}` (plus lowercase name on case-sensitive filesystems)
//! 2. `{entry}/{name}` when the entry location differs from the base
//! 3. bare `{name}` when no base directory is known
//! 4. process-specific `*.logconf` files (default name only)
//! 5. supplementary search paths
//! 6. `{host library}.logconf` (default name only)

use std::collections::{HashSet, VecDeque};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::core::environment_context::EnvironmentContext;
use crate::utils::path::{append_extension, eq_ignore_case, trim_directory_separators};

/// File name probed when the caller does not ask for one
pub const DEFAULT_CONFIG_FILE_NAME: &str = "LogConf.config";

/// Extension of process-specific configuration files
pub const CONFIG_EXTENSION: &str = "logconf";

/// Marker inserted by debug hosts into the host configuration file name
pub const HOST_DEBUG_MARKER: &str = ".vshost.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateScope {
    /// Every rule
    #[default]
    Full,
    /// Base directory, entry binary and current directory only
    Roots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    BaseDirectory,
    EntryBinary,
    CurrentDirectory,
    ProcessSpecific,
    SearchPaths,
    HostLibrary,
    Done,
}

impl Stage {
    fn next(self) -> Self {
        match self {
            Stage::BaseDirectory => Stage::EntryBinary,
            Stage::EntryBinary => Stage::CurrentDirectory,
            Stage::CurrentDirectory => Stage::ProcessSpecific,
            Stage::ProcessSpecific => Stage::SearchPaths,
            Stage::SearchPaths => Stage::HostLibrary,
            Stage::HostLibrary | Stage::Done => Stage::Done,
        }
    }
}

/// Produces candidate paths for one logical file name
///
/// `iter()` can be called any number of times; each call starts over from
/// the highest priority location.
#[derive(Debug, Clone, Copy)]
pub struct CandidateResolver<'a> {
    context: &'a EnvironmentContext,
    file_name: Option<&'a str>,
    scope: CandidateScope,
}

impl<'a> CandidateResolver<'a> {
    /// # Arguments
    /// * `context` - Environment snapshot for this load call
    /// * `file_name` - Explicit file name, `None` for the default name
    pub fn new(context: &'a EnvironmentContext, file_name: Option<&'a str>) -> Self {
        Self {
            context,
            file_name,
            scope: CandidateScope::Full,
        }
    }

    #[must_use]
    pub fn with_scope(mut self, scope: CandidateScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn file_name(&self) -> &'a str {
        self.file_name.unwrap_or(DEFAULT_CONFIG_FILE_NAME)
    }

    pub fn iter(&self) -> CandidatePaths<'a> {
        CandidatePaths {
            resolver: *self,
            stage: Stage::BaseDirectory,
            pending: VecDeque::new(),
            seen: HashSet::new(),
        }
    }

    /// Lowercase file name, only when probing it can find a different file
    fn lowercase_file_name(&self) -> Option<String> {
        let name = self.file_name();
        let lower = name.to_lowercase();
        (lower != name && !self.context.case_insensitive).then_some(lower)
    }

    fn includes(&self, stage: Stage) -> bool {
        let default_name = self.file_name.is_none();
        match (self.scope, stage) {
            (_, Stage::Done) => false,
            (CandidateScope::Roots, Stage::ProcessSpecific | Stage::SearchPaths | Stage::HostLibrary) => {
                false
            }
            (_, Stage::ProcessSpecific | Stage::HostLibrary) => default_name,
            _ => true,
        }
    }

    fn dedup_key(&self, path: &Path) -> String {
        let text = path.to_string_lossy();
        if self.context.case_insensitive {
            text.to_lowercase()
        } else {
            text.into_owned()
        }
    }

    fn expand(&self, stage: Stage) -> Vec<PathBuf> {
        let context = self.context;
        let base = context.base_directory.as_deref();

        match stage {
            Stage::BaseDirectory => base.map(|dir| self.in_directory(dir)).unwrap_or_default(),
            Stage::EntryBinary => context
                .entry_binary_location
                .as_deref()
                .filter(|entry| !base.is_some_and(|base| eq_ignore_case(entry, base)))
                .map(|entry| self.in_directory(entry))
                .unwrap_or_default(),
            Stage::CurrentDirectory => {
                if base.is_some() {
                    Vec::new()
                } else {
                    self.in_directory(Path::new(""))
                }
            }
            Stage::ProcessSpecific => self.process_specific_paths(),
            Stage::SearchPaths => context
                .supplementary_search_paths
                .iter()
                .filter_map(|path| trim_directory_separators(path))
                .filter(|path| !base.is_some_and(|base| eq_ignore_case(path, base)))
                .flat_map(|path| self.in_directory(&path))
                .collect(),
            Stage::HostLibrary => context
                .host_library
                .as_ref()
                .filter(|lib| !lib.globally_registered)
                .map(|lib| vec![append_extension(&lib.path, CONFIG_EXTENSION)])
                .unwrap_or_default(),
            Stage::Done => Vec::new(),
        }
    }

    fn in_directory(&self, directory: &Path) -> Vec<PathBuf> {
        let mut paths = vec![directory.join(self.file_name())];
        if let Some(lower) = self.lowercase_file_name() {
            paths.push(directory.join(lower));
        }
        paths
    }

    fn process_specific_paths(&self) -> Vec<PathBuf> {
        let context = self.context;
        let mut paths = Vec::new();

        if let Some(host_config) = context.host_configuration_file.as_deref() {
            paths.push(host_config.with_extension(CONFIG_EXTENSION));

            let text = host_config.to_string_lossy();
            if text.contains(HOST_DEBUG_MARKER) {
                let stripped = PathBuf::from(text.replace(HOST_DEBUG_MARKER, "."));
                paths.push(stripped.with_extension(CONFIG_EXTENSION));
            }
            return paths;
        }

        let entry_location = context.entry_binary_location.as_deref();
        let entry_file_name = context.entry_binary_file_name.as_deref();
        let process_file = context.current_process_file_path.as_deref();
        let process_directory = process_file
            .and_then(Path::parent)
            .and_then(trim_directory_separators);

        if !context.is_valid_process_directory(process_directory.as_deref()) {
            // Generic host process loading the application from elsewhere
            if let (Some(entry_location), Some(file_name)) = (entry_location, entry_file_name) {
                paths.push(entry_location.join(format!("{file_name}.{CONFIG_EXTENSION}")));

                if let Some(stem) = file_stem(Path::new(file_name)) {
                    paths.push(entry_location.join(format!(
                        "{stem}{}.{CONFIG_EXTENSION}",
                        context.executable_suffix
                    )));
                }
            }
        } else if let Some(process_file) = process_file {
            paths.push(append_extension(process_file, CONFIG_EXTENSION));

            if let Some(entry_location) = entry_location {
                if let Some(file_name) = entry_file_name {
                    paths.push(entry_location.join(format!("{file_name}.{CONFIG_EXTENSION}")));
                }
            } else if let Some(stem) = file_stem(process_file) {
                let directory = process_directory.unwrap_or_default();
                paths.push(directory.join(format!(
                    "{stem}{}.{CONFIG_EXTENSION}",
                    context.library_suffix
                )));
            }
        }

        paths
    }
}

impl<'a> IntoIterator for &CandidateResolver<'a> {
    type Item = PathBuf;
    type IntoIter = CandidatePaths<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn file_stem(path: &Path) -> Option<&str> {
    path.file_stem()
        .and_then(OsStr::to_str)
        .filter(|stem| !stem.is_empty())
}

/// Lazy candidate sequence
///
/// Each stage is expanded only once the caller has consumed the previous
/// one, so stopping at the first hit skips the remaining work.
#[derive(Debug, Clone)]
pub struct CandidatePaths<'a> {
    resolver: CandidateResolver<'a>,
    stage: Stage,
    pending: VecDeque<PathBuf>,
    seen: HashSet<String>,
}

impl Iterator for CandidatePaths<'_> {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            while let Some(path) = self.pending.pop_front() {
                if self.seen.insert(self.resolver.dedup_key(&path)) {
                    return Some(path);
                }
            }

            if self.stage == Stage::Done {
                return None;
            }

            let stage = self.stage;
            self.stage = stage.next();
            if self.resolver.includes(stage) {
                self.pending.extend(self.resolver.expand(stage));
            }
        }
    }
}
