//! Wayfind Core Library
//!
//! Graph store and shortest-path engine for the wayfind CLI.

pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
