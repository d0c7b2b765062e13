//! Severity levels for diagnostics.
//!
//! Distinguishes records that were dropped from input that could not be
//! processed at all.

use std::fmt;

/// The severity level of a diagnostic.
///
/// - [`Severity::Error`] marks a structural problem that aborts the layout
/// - [`Severity::Warning`] marks a record that was skipped; the layout still runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The topology as a whole is unusable.
    Error,

    /// A single record was dropped from further processing.
    Warning,
}

impl Severity {
    /// Returns `true` if this is an error severity.
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    /// Returns `true` if this is a warning severity.
    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
