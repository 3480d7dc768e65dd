//! Transmute Core - in-place shape transmutation for JSON records
//!
//! This crate provides generic utilities that reshape plain structured records
//! (`serde_json::Value` objects), sequences of records, and fixed-length tuples:
//! - Key-path model for addressing nested fields
//! - Deep delete and deep merge, composed into `transmute_deep`
//! - Shallow add/remove/replace and per-element sequence variants
//! - Positional tuple splices
//! - Shape computation predicting the result of a transmute
//! - Serializable command inventory with an all-or-nothing `apply`
//!
//! Every operation mutates its input in place and returns the same reference.

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod ops;
pub mod path;
pub mod shape;
pub mod typed;

pub use transmute_core_types::schema;

// Re-export commonly used types
pub use apply::{apply, apply_all};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, Result, TransmuteError};
pub use ops::deep_ops::{deep_delete, deep_merge, transmute_deep};
pub use path::{KeyPath, Seg};
pub use shape::Shape;
pub use typed::transmute_into;
