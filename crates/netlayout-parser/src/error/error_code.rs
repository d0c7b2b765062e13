//! Error codes for topology diagnostics.
//!
//! Codes are grouped by the kind of problem:
//! - `E0xx` - Structural errors (the topology cannot be read)
//! - `E1xx` - Record shape errors
//! - `E2xx` - Value errors
//! - `E3xx` - Reference errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Structural Errors (E0xx)
    // =========================================================================
    /// The topology root is not a JSON object.
    E001,

    /// A `devices`, `networks` or `connections` collection is not an array.
    E002,

    // =========================================================================
    // Record Shape Errors (E1xx)
    // =========================================================================
    /// A record is not a JSON object.
    E100,

    /// A required field is missing.
    ///
    /// Devices need `id`, `name` and `category`; networks need `id` and
    /// `name`; connections need `source_id`, `target_id`, `source_kind` and
    /// `target_kind`.
    E101,

    /// A required field is present but is not a string.
    E102,

    // =========================================================================
    // Value Errors (E2xx)
    // =========================================================================
    /// Unknown device category.
    ///
    /// Valid categories are `router`, `switch_core`, `switch_access`,
    /// `firewall`, `vm`, `host` and `load_balancer` (or `lb`).
    E200,

    /// Unknown entity kind. Valid kinds are `device` and `network`.
    E201,

    // =========================================================================
    // Reference Errors (E3xx)
    // =========================================================================
    /// An id is used by more than one device or network.
    E300,

    /// A connection endpoint does not name any retained entity.
    E301,

    /// A connection endpoint names an entity of a different kind.
    E302,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "topology is not an object",
            ErrorCode::E002 => "collection is not an array",
            ErrorCode::E100 => "record is not an object",
            ErrorCode::E101 => "missing required field",
            ErrorCode::E102 => "field is not a string",
            ErrorCode::E200 => "unknown device category",
            ErrorCode::E201 => "unknown entity kind",
            ErrorCode::E300 => "duplicate entity id",
            ErrorCode::E301 => "unknown connection endpoint",
            ErrorCode::E302 => "connection endpoint kind mismatch",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E101.to_string(), "E101");
        assert_eq!(ErrorCode::E301.to_string(), "E301");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E200.description(), "unknown device category");
        assert_eq!(ErrorCode::E300.description(), "duplicate entity id");
    }
}
