//! Hard failures: input that cannot be treated as a topology at all.

use thiserror::Error;

use crate::{
    error::{Diagnostic, ErrorCode},
    record::Collection,
};

/// Error returned when the raw input does not have the shape of a topology.
///
/// Individual bad records never produce this error; they are dropped and
/// reported as warning [`Diagnostic`]s instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TopologyError {
    #[error("topology must be a JSON object")]
    NotAnObject,

    #[error("`{0}` must be an array")]
    NotAnArray(Collection),
}

impl TopologyError {
    /// Converts the error into an error-severity diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            TopologyError::NotAnObject => Diagnostic::error(self.to_string())
                .with_code(ErrorCode::E001)
                .with_help("expected an object with `devices`, `networks` and `connections`"),
            TopologyError::NotAnArray(_) => Diagnostic::error(self.to_string())
                .with_code(ErrorCode::E002)
                .with_help("omit the collection or provide a list of records"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_array_message() {
        let err = TopologyError::NotAnArray(Collection::Networks);
        assert_eq!(err.to_string(), "`networks` must be an array");
    }

    #[test]
    fn test_to_diagnostic_is_error() {
        let diag = TopologyError::NotAnObject.to_diagnostic();
        assert!(diag.severity().is_error());
        assert_eq!(diag.code(), Some(ErrorCode::E001));
        assert!(diag.help().is_some());
    }
}
