//! Error types for snapshot import and export.

use crate::task::domain::TaskDomainError;
use thiserror::Error;

/// Reason a single imported record was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordFault {
    /// A field broke a task invariant.
    #[error(transparent)]
    Invalid(#[from] TaskDomainError),

    /// The identifier was already used by an earlier record.
    #[error("identifier already used by record {first_index}")]
    DuplicateId {
        /// Index of the record that first used the identifier.
        first_index: usize,
    },
}

/// A rejected record together with its position in the payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("record {index} (id '{id}'): {fault}")]
pub struct RecordError {
    /// Zero-based index of the record in the payload.
    pub index: usize,
    /// Identifier as written in the payload.
    pub id: String,
    /// Why the record was rejected.
    pub fault: RecordFault,
}

/// Errors returned while importing a snapshot payload.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The payload is not a JSON array of task-shaped records.
    #[error("import payload is not a list of task records: {0}")]
    Malformed(String),

    /// One or more records failed validation; nothing was imported.
    #[error("import rejected, {} invalid record(s): {}", .0.len(), describe(.0))]
    InvalidRecords(Vec<RecordError>),
}

/// Errors returned while exporting a snapshot.
#[derive(Debug, Error)]
#[error("failed to serialise task snapshot: {0}")]
pub struct ExportError(#[from] serde_json::Error);

fn describe(records: &[RecordError]) -> String {
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
