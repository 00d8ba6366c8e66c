use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, error, trace, warn};

use crate::configs::LoaderSettings;
use crate::core::candidates::{CandidateResolver, CandidateScope};
use crate::core::configuration::LoggingConfiguration;
use crate::core::environment_context::EnvironmentContext;
use crate::core::failure::{Escalation, FatalKind};
use crate::core::ports::{Environment, ParseError, ParseOutcome, StructuredParser};
use crate::core::raw_scan::RawScanFlags;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to load config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
        /// Strict mode requested by markers or by the document
        escalation: Option<Escalation>,
    },

    #[error("Fatal error loading config file {} ({kind})", .path.display())]
    Fatal {
        path: PathBuf,
        kind: FatalKind,
        #[source]
        source: ParseError,
    },
}

impl LoadError {
    fn from_parse(path: &Path, source: ParseError, escalation: Option<Escalation>) -> Self {
        let path = path.to_path_buf();
        match source {
            ParseError::Io(source) => LoadError::Io { path, source },
            source => match source.fatal_kind() {
                Some(kind) => LoadError::Fatal { path, kind, source },
                None => LoadError::Parse {
                    path,
                    source,
                    escalation,
                },
            },
        }
    }

    /// Skippable failure: the candidate vanished or cannot be accessed
    pub fn is_transient(&self) -> bool {
        matches!(self, LoadError::Io { .. })
    }

    /// Failure that propagates regardless of host settings
    pub fn must_be_rethrown(&self) -> bool {
        matches!(self, LoadError::Fatal { .. })
    }

    pub fn escalation(&self) -> Option<Escalation> {
        match self {
            LoadError::Parse { escalation, .. } => *escalation,
            _ => None,
        }
    }
}

/// Locates and loads the logging configuration file
///
/// Holds no state besides its collaborators; every call captures a fresh
/// environment snapshot, so repeated calls against an unchanged filesystem
/// give the same result.
pub struct ConfigurationLoader {
    env: Arc<dyn Environment>,
    parser: Arc<dyn StructuredParser>,
}

impl ConfigurationLoader {
    pub fn new(env: Arc<dyn Environment>, parser: Arc<dyn StructuredParser>) -> Self {
        Self { env, parser }
    }

    pub fn context(&self) -> EnvironmentContext {
        EnvironmentContext::capture(self.env.as_ref())
    }

    /// Resolve an explicitly requested configuration file
    ///
    /// Absolute paths are returned unchanged. Relative paths are probed
    /// against the base directory, the entry binary location and the current
    /// directory; when none exists the relative path is returned as given so
    /// the subsequent read reports the failure.
    pub fn resolve_config_file(&self, file_name: &str) -> PathBuf {
        let requested = PathBuf::from(file_name);
        if requested.is_absolute() {
            return requested;
        }

        let context = self.context();
        let resolver =
            CandidateResolver::new(&context, Some(file_name)).with_scope(CandidateScope::Roots);

        resolver
            .iter()
            .find(|path| self.env.file_exists(path))
            .unwrap_or(requested)
    }

    /// Load an explicitly requested configuration file
    ///
    /// Unlike [`Self::load`], every failure propagates, including a missing
    /// file.
    pub fn load_file(
        &self,
        file_name: &str,
        settings: &LoaderSettings,
    ) -> Result<LoggingConfiguration, LoadError> {
        let path = self.resolve_config_file(file_name);
        self.load_from_path(&path, settings)
    }

    /// Search the candidate locations for a configuration file
    ///
    /// # Returns
    /// * `Ok(Some(config))` - The first existing candidate, possibly degraded
    /// * `Ok(None)` - No candidate exists
    /// * `Err` - A candidate failed in a way the host asked to propagate, or
    ///   fatally
    pub fn load(&self, settings: &LoaderSettings) -> Result<Option<LoggingConfiguration>, LoadError> {
        let context = self.context();
        let resolver = CandidateResolver::new(&context, None);

        for candidate in &resolver {
            if let Some(config) = self.try_load_candidate(&candidate, settings)? {
                return Ok(Some(config));
            }
        }

        debug!("No configuration file found");
        Ok(None)
    }

    fn try_load_candidate(
        &self,
        path: &Path,
        settings: &LoaderSettings,
    ) -> Result<Option<LoggingConfiguration>, LoadError> {
        if !self.env.file_exists(path) {
            trace!(path = %path.display(), "Config file location not found");
            return Ok(None);
        }

        // The file exists: whatever happens next, the search stops here
        // unless the file turns out to be unreadable.
        match self.load_from_path(path, settings) {
            Ok(config) => Ok(Some(config)),
            Err(e) if e.is_transient() => {
                warn!(path = %path.display(), error = %e, "Skipping inaccessible config file location");
                Ok(None)
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed loading from config file location");
                if settings.throws_config_errors() || e.escalation().is_some() || e.must_be_rethrown() {
                    return Err(e);
                }
                Ok(None)
            }
        }
    }

    fn load_from_path(
        &self,
        path: &Path,
        settings: &LoaderSettings,
    ) -> Result<LoggingConfiguration, LoadError> {
        debug!(path = %path.display(), "Loading config");

        let strict = settings.throws_config_errors();
        match self.parse_file(path, strict) {
            Ok(outcome) if outcome.configuration.initialize_succeeded => Ok(outcome.configuration),
            Ok(outcome) => self.recover_degraded(path, outcome),
            Err(source) => self.recover_failed(path, source, strict),
        }
    }

    fn parse_file(&self, path: &Path, strict: bool) -> Result<ParseOutcome, ParseError> {
        let mut reader = self.env.open_for_parsing(path)?;
        self.parser.parse(&mut reader, Some(path), strict)
    }

    /// The parser returned, but flagged the configuration as unsuccessful
    fn recover_degraded(
        &self,
        path: &Path,
        outcome: ParseOutcome,
    ) -> Result<LoggingConfiguration, LoadError> {
        let flags = self.scan_raw_text(path, outcome.read_error.is_some());

        if let Some(escalation) = flags.escalation() {
            return self.reparse_escalated(path, escalation);
        }

        if flags.reload_on_change && !outcome.configuration.auto_reload {
            debug!(path = %path.display(), "Unusable config, keep monitoring the file");
            return Ok(LoggingConfiguration::empty_monitored(path, true));
        }

        Ok(outcome.configuration)
    }

    /// The parser itself failed
    fn recover_failed(
        &self,
        path: &Path,
        source: ParseError,
        strict: bool,
    ) -> Result<LoggingConfiguration, LoadError> {
        if matches!(source, ParseError::Io(_)) || source.fatal_kind().is_some() || strict {
            return Err(LoadError::from_parse(path, source, None));
        }

        if let Some(escalation) = source.escalation() {
            return Err(LoadError::from_parse(path, source, Some(escalation)));
        }

        let flags = self.scan_raw_text(path, source.is_read_error());
        if let Some(escalation) = flags.escalation() {
            return Err(LoadError::from_parse(path, source, Some(escalation)));
        }

        debug!(path = %path.display(), error = %source, "Replacing failed config with empty config");
        Ok(LoggingConfiguration::empty_monitored(path, flags.reload_on_change))
    }

    /// Parse again in strict mode so the caller sees the real parse error
    fn reparse_escalated(
        &self,
        path: &Path,
        escalation: Escalation,
    ) -> Result<LoggingConfiguration, LoadError> {
        warn!(path = %path.display(), %escalation, "Broken config requests strict loading");

        match self.parse_file(path, true) {
            // Only possible when the file was fixed between the two reads
            Ok(outcome) => Ok(outcome.configuration),
            Err(source) => Err(LoadError::from_parse(path, source, Some(escalation))),
        }
    }

    fn scan_raw_text(&self, path: &Path, read_error: bool) -> RawScanFlags {
        match self.env.read_to_string(path) {
            Ok(content) => RawScanFlags::scan(&content, read_error),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to scan content of config file");
                RawScanFlags::default()
            }
        }
    }
}
