//! Textual marker scan over configuration files that failed to parse.

use crate::core::failure::Escalation;

pub const THROW_EXCEPTIONS_MARKER: &str = "throwExceptions";
pub const THROW_CONFIG_EXCEPTIONS_MARKER: &str = "throwConfigExceptions";
pub const AUTO_RELOAD_MARKER: &str = "autoReload";

/// Operator intent recovered from raw file text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawScanFlags {
    pub throw_exceptions: bool,
    pub throw_config_exceptions: bool,
    pub reload_on_change: bool,
}

impl RawScanFlags {
    /// Scan `content` for the known attribute markers.
    ///
    /// Throw markers only count when the structured reader stopped on an
    /// actual read error, so a marker sitting in a comment of an otherwise
    /// readable file is ignored. The reload marker always counts.
    pub fn scan(content: &str, read_error: bool) -> Self {
        let content = content.to_ascii_lowercase();

        let mut flags = Self::default();
        if read_error {
            flags.throw_exceptions =
                contains_boolean_parameter(&content, THROW_EXCEPTIONS_MARKER, true);
            flags.throw_config_exceptions =
                contains_boolean_parameter(&content, THROW_CONFIG_EXCEPTIONS_MARKER, true);
        }
        flags.reload_on_change = contains_boolean_parameter(&content, AUTO_RELOAD_MARKER, true);
        flags
    }

    /// The generic marker takes precedence over the config-only one.
    pub fn escalation(&self) -> Option<Escalation> {
        if self.throw_exceptions {
            Some(Escalation::ThrowExceptions)
        } else if self.throw_config_exceptions {
            Some(Escalation::ThrowConfigExceptions)
        } else {
            None
        }
    }
}

/// Search for `name="value` or `name='value`; `content` must already be
/// lowercased.
fn contains_boolean_parameter(content: &str, name: &str, value: bool) -> bool {
    let name = name.to_ascii_lowercase();
    let double_quoted = format!("{name}=\"{value}");
    let single_quoted = format!("{name}='{value}");
    content.contains(&double_quoted) || content.contains(&single_quoted)
}
