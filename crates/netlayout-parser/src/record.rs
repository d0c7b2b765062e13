//! Per-record validation results.

use std::fmt;

use crate::error::Diagnostic;

/// One of the three record collections of a topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Devices,
    Networks,
    Connections,
}

impl Collection {
    /// The key of the collection in the topology object.
    pub fn key(self) -> &'static str {
        match self {
            Collection::Devices => "devices",
            Collection::Networks => "networks",
            Collection::Connections => "connections",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Position of a record inside the caller's topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordRef {
    collection: Collection,
    index: usize,
}

impl RecordRef {
    pub fn new(collection: Collection, index: usize) -> Self {
        Self { collection, index }
    }

    pub fn collection(self) -> Collection {
        self.collection
    }

    /// Index of the record inside its collection array.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.collection, self.index)
    }
}

/// The result of validating a single raw record.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome<T> {
    /// The record is well-formed and takes part in the layout.
    Accepted(T),
    /// The record was dropped; the diagnostic says why.
    Skipped(Diagnostic),
}

impl<T> RecordOutcome<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RecordOutcome::Accepted(_))
    }

    /// Converts the outcome into a `Result`, with the skip reason as error.
    pub fn into_result(self) -> Result<T, Diagnostic> {
        match self {
            RecordOutcome::Accepted(value) => Ok(value),
            RecordOutcome::Skipped(diag) => Err(diag),
        }
    }
}

impl<T> From<Result<T, Diagnostic>> for RecordOutcome<T> {
    fn from(result: Result<T, Diagnostic>) -> Self {
        match result {
            Ok(value) => RecordOutcome::Accepted(value),
            Err(diag) => RecordOutcome::Skipped(diag),
        }
    }
}

/// An accepted record together with its index in the raw collection.
///
/// Keeping the index lets results be written back to exactly the record
/// that produced them, even when a dropped record shares its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retained<T> {
    index: usize,
    record: T,
}

impl<T> Retained<T> {
    pub fn new(index: usize, record: T) -> Self {
        Self { index, record }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn record(&self) -> &T {
        &self.record
    }
}
