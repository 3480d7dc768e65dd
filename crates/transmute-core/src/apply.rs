//! Command application
//!
//! `apply` and `apply_all` run [`Command`]s against a record in place and
//! return the same reference.
//!
//! ## Atomicity Contract
//!
//! `apply_all` checks every command against the record before running any of
//! them. No operation replaces the record's root, so the root kind seen by the
//! check is the kind every command runs against; a script either runs to
//! completion or leaves the record untouched.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use transmute_core::{apply_all, Command};
//!
//! let mut record = json!({"a": 1});
//! let script: Vec<Command> = serde_json::from_value(json!([
//!     {"op": "prune", "field": "a"},
//!     {"op": "augment", "field": "b", "value": 2}
//! ]))
//! .unwrap();
//!
//! apply_all(&mut record, script).unwrap();
//! assert_eq!(record, json!({"b": 2}));
//! ```

use serde_json::Value;

use crate::commands::Command;
use crate::errors::{Result, TransmuteError};
use crate::ops::{
    augment_shallow, augment_tuple, prune_shallow, prune_tuple, sequence_ops, transmute_deep,
    transmute_shallow,
};
use crate::path;
use crate::{log_op_end, log_op_error, log_op_start};

/// Apply one command to `record`
///
/// # Errors
///
/// Returns `NotASequence` if the command operates on arrays and `record` is
/// not one; `record` is untouched in that case.
pub fn apply(record: &mut Value, command: Command) -> Result<&mut Value> {
    check(record, &command)?;
    Ok(run(record, command))
}

/// Apply `commands` to `record` in order, all or nothing
///
/// # Errors
///
/// Returns the first `NotASequence` found while checking the script. No
/// command runs when any check fails.
pub fn apply_all(record: &mut Value, commands: Vec<Command>) -> Result<&mut Value> {
    log_op_start!("apply_all", command_count = commands.len());
    let start = std::time::Instant::now();

    if let Err(err) = commands.iter().try_for_each(|command| check(record, command)) {
        log_op_error!(
            "apply_all",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(err);
    }

    for command in commands {
        run(record, command);
    }

    log_op_end!(
        "apply_all",
        duration_ms = start.elapsed().as_millis() as u64
    );
    Ok(record)
}

fn check(record: &Value, command: &Command) -> Result<()> {
    if command.requires_sequence() && !record.is_array() {
        return Err(TransmuteError::NotASequence {
            op: command.name().to_string(),
            found: path::kind_name(record).to_string(),
        });
    }
    Ok(())
}

fn run(record: &mut Value, command: Command) -> &mut Value {
    match command {
        Command::Augment { field, value } => augment_shallow(record, field, value),
        Command::Prune { field } => prune_shallow(record, field),
        Command::TransmuteShallow { remove, add } => transmute_shallow(record, &remove, add),
        Command::TransmuteDeep { remove, add } => transmute_deep(record, &remove, add),
        Command::AugmentEach { field, value } => {
            if let Some(items) = record.as_array_mut() {
                sequence_ops::augment_each(items, field, value);
            }
            record
        }
        Command::PruneEach { field } => {
            if let Some(items) = record.as_array_mut() {
                sequence_ops::prune_each(items, field);
            }
            record
        }
        Command::TransmuteShallowEach { remove, add } => {
            if let Some(items) = record.as_array_mut() {
                sequence_ops::transmute_shallow_each(items, &remove, add);
            }
            record
        }
        Command::TransmuteDeepEach { remove, add } => {
            if let Some(items) = record.as_array_mut() {
                sequence_ops::transmute_deep_each(items, &remove, add);
            }
            record
        }
        Command::AugmentTuple { index, value } => {
            if let Some(items) = record.as_array_mut() {
                augment_tuple(items, index, value);
            }
            record
        }
        Command::PruneTuple { index } => {
            if let Some(items) = record.as_array_mut() {
                prune_tuple(items, index);
            }
            record
        }
    }
}
