//! Import/export codec for whole task snapshots.
//!
//! Snapshots are a JSON array of `{id, name, category, priority, dueDate}`
//! records in collection order. The same format backs the file store, the
//! export artefact, and the import contract.
//!
//! Imports are all-or-nothing: every record is validated and the payload is
//! rejected as a whole, listing each faulty record, if any record fails.

mod error;
mod record;

pub use error::{ExportError, ImportError, RecordError, RecordFault};

use crate::task::domain::Task;
use record::TaskRecord;
use std::collections::HashMap;

/// Serialises the ordered snapshot as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`ExportError`] if serialisation fails.
pub fn export(tasks: &[Task]) -> Result<Vec<u8>, ExportError> {
    let records: Vec<TaskRecord> = tasks.iter().map(TaskRecord::from).collect();
    Ok(serde_json::to_vec_pretty(&records)?)
}

/// Parses and validates a snapshot payload.
///
/// # Errors
///
/// Returns [`ImportError::Malformed`] when the payload is not a JSON array of
/// task-shaped records, or [`ImportError::InvalidRecords`] when any record
/// breaks a task invariant or repeats an identifier.
pub fn import(bytes: &[u8]) -> Result<Vec<Task>, ImportError> {
    let records: Vec<TaskRecord> =
        serde_json::from_slice(bytes).map_err(|err| ImportError::Malformed(err.to_string()))?;

    let mut tasks = Vec::with_capacity(records.len());
    let mut faults = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let id = record.id.trim().to_owned();
        if !id.is_empty() {
            if let Some(&first_index) = first_seen.get(&id) {
                faults.push(RecordError {
                    index,
                    id,
                    fault: RecordFault::DuplicateId { first_index },
                });
                continue;
            }
            first_seen.insert(id.clone(), index);
        }

        match record.into_task() {
            Ok(task) => tasks.push(task),
            Err(err) => faults.push(RecordError {
                index,
                id,
                fault: RecordFault::Invalid(err),
            }),
        }
    }

    if faults.is_empty() {
        Ok(tasks)
    } else {
        Err(ImportError::InvalidRecords(faults))
    }
}
