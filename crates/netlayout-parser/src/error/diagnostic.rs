//! A single diagnostic message about the raw topology.

use std::fmt;

use crate::{
    error::{ErrorCode, Severity},
    record::RecordRef,
};

/// A diagnostic describing why a record was dropped, or why the topology
/// could not be read at all.
///
/// # Example
///
/// ```
/// # use netlayout_parser::error::{Diagnostic, ErrorCode};
/// # use netlayout_parser::{Collection, RecordRef};
/// let diag = Diagnostic::warning("missing required field `category`")
///     .with_code(ErrorCode::E101)
///     .with_record(RecordRef::new(Collection::Devices, 2))
///     .with_entity_id("vm-web-001");
///
/// assert_eq!(diag.to_string(), "devices[2] (vm-web-001): missing required field `category`");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    record: Option<RecordRef>,
    entity_id: Option<String>,
    help: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            record: None,
            entity_id: None,
            help: None,
        }
    }

    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach the position of the offending record.
    pub fn with_record(mut self, record: RecordRef) -> Self {
        self.record = Some(record);
        self
    }

    /// Attach the id of the offending record, when it has one.
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn record(&self) -> Option<RecordRef> {
        self.record
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.record, &self.entity_id) {
            (Some(record), Some(id)) => write!(f, "{record} ({id}): ")?,
            (Some(record), None) => write!(f, "{record}: ")?,
            (None, Some(id)) => write!(f, "{id}: ")?,
            (None, None) => {}
        }
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Collection;

    #[test]
    fn test_builder_sets_fields() {
        let diag = Diagnostic::warning("unknown device category `mainframe`")
            .with_code(ErrorCode::E200)
            .with_record(RecordRef::new(Collection::Devices, 0))
            .with_entity_id("d1")
            .with_help("use one of the supported categories");

        assert_eq!(diag.severity(), Severity::Warning);
        assert_eq!(diag.code(), Some(ErrorCode::E200));
        assert_eq!(diag.record(), Some(RecordRef::new(Collection::Devices, 0)));
        assert_eq!(diag.entity_id(), Some("d1"));
        assert_eq!(diag.help(), Some("use one of the supported categories"));
    }

    #[test]
    fn test_display_without_context() {
        let diag = Diagnostic::error("topology must be a JSON object");
        assert_eq!(diag.to_string(), "topology must be a JSON object");
        assert!(diag.severity().is_error());
        assert_eq!(diag.code(), None);
    }

    #[test]
    fn test_display_with_record_only() {
        let diag = Diagnostic::warning("record is not an object")
            .with_record(RecordRef::new(Collection::Connections, 4));
        assert_eq!(diag.to_string(), "connections[4]: record is not an object");
    }
}
