//! Error types and exit codes for wayfind
//!
//! Exit codes follow the CLI convention:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid input data)
//! - 3: Data error (missing graph file, empty graph, unknown vertex)

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::VertexId;

/// Exit codes for the wayfind binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args or invalid input (2)
    Usage = 2,
    /// Data error - missing/empty graph, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfind operations
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("negative weight {weight} on edge {u} {v} (weights must be non-negative)")]
    NegativeWeight { u: VertexId, v: VertexId, weight: i64 },

    #[error("malformed edge list entry on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphFileNotFound { path: PathBuf },

    #[error("graph loaded from {path:?} is empty")]
    EmptyGraph { path: PathBuf },

    #[error("vertex not found in graph: {vertex}")]
    VertexNotFound { vertex: VertexId },

    #[error("adjacency matrix too large: order {order} exceeds limit {limit}")]
    MatrixTooLarge { order: usize, limit: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownFormat(_)
            | WayfindError::UsageError(_)
            | WayfindError::NegativeWeight { .. }
            | WayfindError::MalformedLine { .. } => ExitCode::Usage,

            WayfindError::GraphFileNotFound { .. }
            | WayfindError::EmptyGraph { .. }
            | WayfindError::VertexNotFound { .. }
            | WayfindError::MatrixTooLarge { .. } => ExitCode::Data,

            WayfindError::Io(_) | WayfindError::Json(_) | WayfindError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier used in JSON output
    fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownFormat(_) => "unknown_format",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::NegativeWeight { .. } => "negative_weight",
            WayfindError::MalformedLine { .. } => "malformed_line",
            WayfindError::GraphFileNotFound { .. } => "graph_file_not_found",
            WayfindError::EmptyGraph { .. } => "empty_graph",
            WayfindError::VertexNotFound { .. } => "vertex_not_found",
            WayfindError::MatrixTooLarge { .. } => "matrix_too_large",
            WayfindError::Io(_) => "io_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        assert_eq!(
            WayfindError::UnknownFormat("csv".to_string()).exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WayfindError::NegativeWeight { u: 1, v: 2, weight: -3 }.exit_code(),
            ExitCode::Usage
        );
        assert_eq!(
            WayfindError::VertexNotFound { vertex: 9 }.exit_code(),
            ExitCode::Data
        );
        assert_eq!(
            WayfindError::Other("boom".to_string()).exit_code(),
            ExitCode::Failure
        );
    }

    #[test]
    fn test_error_json_envelope() {
        let err = WayfindError::VertexNotFound { vertex: 42 };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 3);
        assert_eq!(json["error"]["type"], "vertex_not_found");
        assert!(json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("42"));
    }
}
