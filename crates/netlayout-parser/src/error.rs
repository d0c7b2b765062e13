//! Error and diagnostic system for topology validation.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Severity levels
//! - The [`Diagnostic`] type describing a dropped record
//! - The [`TopologyError`] type for input that cannot be processed at all
//!
//! # Overview
//!
//! Validation is lenient: a device, network or connection record that is
//! malformed is dropped and described by a warning [`Diagnostic`], and the
//! remaining records are still laid out. Only a topology whose root or
//! collections have the wrong JSON type fails with a [`TopologyError`].

mod diagnostic;
mod error_code;
mod severity;
mod topology_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use severity::Severity;
pub use topology_error::TopologyError;
