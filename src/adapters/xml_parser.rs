//! Default structured parser for XML configuration files
//!
//! ```xml
//! <logconf autoReload="true" throwConfigExceptions="false">
//!   <rules>
//!     <logger name="*" minlevel="Info" writeTo="console" />
//!   </rules>
//! </logconf>
//! ```
//!
//! Elements other than `rules` under the root belong to the logging pipeline
//! and are ignored here.

use std::io::Read;
use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};

use crate::core::configuration::{LogLevel, LoggingConfiguration, LoggingRule};
use crate::core::failure::{Escalation, FatalKind};
use crate::core::ports::{ParseError, ParseOutcome, ReadError, StructuredParser};

pub const ROOT_ELEMENT: &str = "logconf";
const RULES_ELEMENT: &str = "rules";
const LOGGER_ELEMENT: &str = "logger";

#[derive(Debug, Default)]
pub struct XmlConfigurationParser;

impl XmlConfigurationParser {
    pub fn new() -> Self {
        Self
    }
}

impl StructuredParser for XmlConfigurationParser {
    fn parse(
        &self,
        reader: &mut dyn Read,
        origin: Option<&Path>,
        strict: bool,
    ) -> Result<ParseOutcome, ParseError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let mut configuration = LoggingConfiguration {
            file_path: origin.map(Path::to_path_buf),
            ..LoggingConfiguration::default()
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                let read_error = ReadError {
                    line: 1,
                    column: 1,
                    message: format!("content is not valid UTF-8: {e}"),
                };
                return degraded_by_read_error(configuration, read_error, strict);
            }
        };

        if text.trim().is_empty() {
            // Empty file: nothing to read, but nothing malformed either
            let message = "configuration is empty".to_string();
            if strict {
                return Err(ParseError::Invalid {
                    message,
                    escalation: None,
                });
            }
            configuration.problems.push(message);
            return Ok(ParseOutcome {
                configuration,
                read_error: None,
            });
        }

        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = match Document::parse_with_options(&text, options) {
            Ok(document) => document,
            Err(e) => {
                if let Some(kind) = fatal_kind(&e) {
                    return Err(ParseError::Fatal {
                        kind,
                        message: e.to_string(),
                    });
                }

                let pos = e.pos();
                let read_error = ReadError {
                    line: pos.row,
                    column: pos.col,
                    message: e.to_string(),
                };
                return degraded_by_read_error(configuration, read_error, strict);
            }
        };

        let mut builder = ConfigurationBuilder {
            configuration,
            strict,
            escalation: None,
        };
        builder.read_root(document.root_element())?;

        Ok(ParseOutcome {
            configuration: builder.finish(),
            read_error: None,
        })
    }
}

fn degraded_by_read_error(
    mut configuration: LoggingConfiguration,
    read_error: ReadError,
    strict: bool,
) -> Result<ParseOutcome, ParseError> {
    if strict {
        return Err(ParseError::Syntax {
            line: read_error.line,
            column: read_error.column,
            message: read_error.message,
        });
    }

    configuration.problems.push(read_error.to_string());
    Ok(ParseOutcome {
        configuration,
        read_error: Some(read_error),
    })
}

fn fatal_kind(error: &roxmltree::Error) -> Option<FatalKind> {
    match error {
        roxmltree::Error::NodesLimitReached
        | roxmltree::Error::AttributesLimitReached
        | roxmltree::Error::NamespacesLimitReached => Some(FatalKind::ResourceExhausted),
        roxmltree::Error::EntityReferenceLoop(_) => Some(FatalKind::RecursionLimit),
        _ => None,
    }
}

fn attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attributes()
        .find(|attr| attr.name().eq_ignore_ascii_case(name))
        .map(|attr| attr.value())
}

struct ConfigurationBuilder {
    configuration: LoggingConfiguration,
    strict: bool,
    escalation: Option<Escalation>,
}

impl ConfigurationBuilder {
    fn read_root(&mut self, root: Node<'_, '_>) -> Result<(), ParseError> {
        let name = root.tag_name().name();
        if !name.eq_ignore_ascii_case(ROOT_ELEMENT) {
            return self.problem(format!(
                "unexpected root element '{name}', expected '{ROOT_ELEMENT}'"
            ));
        }

        // Throw flags first: they decide how every later problem is handled
        let throw_exceptions = self.read_bool(root, "throwExceptions")?;
        let throw_config_exceptions = self.read_bool(root, "throwConfigExceptions")?;
        self.configuration.throw_exceptions = throw_exceptions;
        self.configuration.throw_config_exceptions = throw_config_exceptions;

        self.escalation = match (throw_config_exceptions, throw_exceptions) {
            (Some(true), _) => Some(Escalation::ThrowConfigExceptions),
            (None, Some(true)) => Some(Escalation::ThrowExceptions),
            _ => None,
        };

        self.configuration.auto_reload = self.read_bool(root, "autoReload")?.unwrap_or(false);

        for child in root.children().filter(Node::is_element) {
            if child.tag_name().name().eq_ignore_ascii_case(RULES_ELEMENT) {
                self.read_rules(child)?;
            }
        }

        Ok(())
    }

    fn read_rules(&mut self, rules: Node<'_, '_>) -> Result<(), ParseError> {
        for child in rules.children().filter(Node::is_element) {
            let name = child.tag_name().name();
            if !name.eq_ignore_ascii_case(LOGGER_ELEMENT) {
                self.problem(format!("unexpected element '{name}' in '{RULES_ELEMENT}'"))?;
                continue;
            }

            if let Some(rule) = self.read_rule(child)? {
                self.configuration.rules.push(rule);
            }
        }
        Ok(())
    }

    fn read_rule(&mut self, logger: Node<'_, '_>) -> Result<Option<LoggingRule>, ParseError> {
        let Some(name_pattern) = attribute(logger, "name") else {
            let pos = logger.document().text_pos_at(logger.range().start);
            self.problem(format!("logger at {}:{} has no 'name'", pos.row, pos.col))?;
            return Ok(None);
        };

        let min_level = match attribute(logger, "minlevel") {
            None => LogLevel::default(),
            Some(value) => match value.parse::<LogLevel>() {
                Ok(level) => level,
                Err(e) => {
                    self.problem(format!("logger '{name_pattern}': {e}"))?;
                    return Ok(None);
                }
            },
        };

        Ok(Some(LoggingRule {
            name_pattern: name_pattern.to_string(),
            min_level,
            write_to: attribute(logger, "writeTo").map(str::to_string),
        }))
    }

    fn read_bool(&mut self, node: Node<'_, '_>, name: &str) -> Result<Option<bool>, ParseError> {
        let Some(value) = attribute(node, name) else {
            return Ok(None);
        };

        if value.trim().eq_ignore_ascii_case("true") {
            Ok(Some(true))
        } else if value.trim().eq_ignore_ascii_case("false") {
            Ok(Some(false))
        } else {
            self.problem(format!("invalid boolean '{value}' for '{name}'"))?;
            Ok(None)
        }
    }

    /// Record a problem, or fail on it in strict mode
    fn problem(&mut self, message: String) -> Result<(), ParseError> {
        let document_strict = self.escalation.is_some();
        if self.strict || document_strict {
            return Err(ParseError::Invalid {
                message,
                escalation: self.escalation,
            });
        }

        self.configuration.problems.push(message);
        Ok(())
    }

    fn finish(mut self) -> LoggingConfiguration {
        self.configuration.initialize_succeeded = self.configuration.problems.is_empty();
        self.configuration
    }
}
