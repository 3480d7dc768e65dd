//! Core types shared across Transmute facilities
//!
//! This crate provides the canonical structured-logging vocabulary used by the
//! logging facility in `transmute-core` and by anything that consumes its
//! events (test capture, log pipelines):
//!
//! - **Schema constants**: canonical field keys and event names

pub mod schema;
