use std::fmt;
use std::io::{self, Read};
use std::path::Path;

use crate::core::configuration::LoggingConfiguration;
use crate::core::failure::{Escalation, FatalKind};

/// Position where the structured reader gave up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadError {
    pub line: u32,
    pub column: u32,
    pub message: String,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// A parse that ran to completion, possibly degraded
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub configuration: LoggingConfiguration,

    /// Set when the reader stopped on malformed input
    pub read_error: Option<ReadError>,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed configuration at {line}:{column}: {message}")]
    Syntax {
        line: u32,
        column: u32,
        message: String,
    },

    #[error("Invalid configuration: {message}")]
    Invalid {
        message: String,
        /// Strict mode requested by the document itself
        escalation: Option<Escalation>,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("{kind}: {message}")]
    Fatal { kind: FatalKind, message: String },
}

impl ParseError {
    pub fn fatal_kind(&self) -> Option<FatalKind> {
        match self {
            ParseError::Fatal { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn escalation(&self) -> Option<Escalation> {
        match self {
            ParseError::Invalid { escalation, .. } => *escalation,
            _ => None,
        }
    }

    /// Whether the reader itself failed on malformed input
    pub fn is_read_error(&self) -> bool {
        matches!(self, ParseError::Syntax { .. })
    }
}

/// Turns raw configuration content into a `LoggingConfiguration`
pub trait StructuredParser: Send + Sync {
    /// Parse a configuration stream
    ///
    /// # Arguments
    /// * `reader` - Configuration content
    /// * `origin` - File the content came from, `None` for in-memory content
    /// * `strict` - Fail on the first problem instead of collecting it
    ///
    /// # Returns
    /// * `Ok(outcome)` - Parse ran to completion; check `initialize_succeeded`
    /// * `Err` - Strict mode failure, I/O failure, or a fatal condition
    fn parse(
        &self,
        reader: &mut dyn Read,
        origin: Option<&Path>,
        strict: bool,
    ) -> Result<ParseOutcome, ParseError>;
}
