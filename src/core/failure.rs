//! Failure categories shared by the parser port and the loader.

use std::fmt;

/// Failures that are never swallowed, whatever the host settings say.
///
/// This is the only place the fatal list is defined; every layer asks
/// `fatal_kind()` on its error type instead of testing error shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FatalKind {
    /// A hard resource limit was hit (node, attribute or namespace budget).
    ResourceExhausted,
    /// Unbounded recursion, such as an entity reference loop.
    RecursionLimit,
}

impl fmt::Display for FatalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalKind::ResourceExhausted => write!(f, "resource exhausted"),
            FatalKind::RecursionLimit => write!(f, "recursion limit"),
        }
    }
}

/// A request to switch the host into strict failure mode.
///
/// Raised by markers found in a broken configuration file, or by the
/// document's own root attributes. It travels back to the caller inside the
/// error so the host decides whether to keep it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Escalation {
    /// `throwExceptions="true"`
    ThrowExceptions,
    /// `throwConfigExceptions="true"`
    ThrowConfigExceptions,
}

impl fmt::Display for Escalation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Escalation::ThrowExceptions => write!(f, "throwExceptions"),
            Escalation::ThrowConfigExceptions => write!(f, "throwConfigExceptions"),
        }
    }
}
