//! Common utilities for the Trellis HTML model.
//!
//! This crate provides shared infrastructure used by the Trellis tools:
//! - **Warning System** - colored, deduplicated terminal diagnostics

pub mod warning;
