//! Scripted structured parser for testing

use std::collections::VecDeque;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::core::configuration::LoggingConfiguration;
use crate::core::ports::{ParseError, ParseOutcome, StructuredParser};

/// One recorded `parse` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCall {
    pub origin: Option<PathBuf>,
    pub strict: bool,
    pub content: String,
}

/// Mock parser returning queued results in order
///
/// Once the queue is empty every call succeeds with an empty configuration.
pub struct MockParser {
    responses: Mutex<VecDeque<Result<ParseOutcome, ParseError>>>,
    calls: Mutex<Vec<ParseCall>>,
}

impl MockParser {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push_outcome(&self, outcome: ParseOutcome) {
        self.responses.lock().unwrap().push_back(Ok(outcome));
    }

    pub fn push_error(&self, error: ParseError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded calls (for assertions)
    pub fn calls(&self) -> Vec<ParseCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredParser for MockParser {
    fn parse(
        &self,
        reader: &mut dyn Read,
        origin: Option<&Path>,
        strict: bool,
    ) -> Result<ParseOutcome, ParseError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;

        self.calls.lock().unwrap().push(ParseCall {
            origin: origin.map(Path::to_path_buf),
            strict,
            content,
        });

        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Ok(ParseOutcome {
                configuration: LoggingConfiguration {
                    file_path: origin.map(Path::to_path_buf),
                    initialize_succeeded: true,
                    ..LoggingConfiguration::default()
                },
                read_error: None,
            })
        })
    }
}
