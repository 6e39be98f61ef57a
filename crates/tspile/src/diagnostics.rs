//! Error types and diagnostics
//!
//! This module provides the error enum and result alias used across
//! the crate. Transpile diagnostics that do not abort compilation are
//! carried separately, on [`TranspileOutput`](crate::transpiler::TranspileOutput).

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tspile operations
pub type TspileResult<T> = Result<T, TspileError>;

/// Main error type for tspile
#[derive(Debug, Error)]
pub enum TspileError {
    /// IO error without path context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to read an input file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write an output file
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The transpiler backend rejected the source outright
    #[error("transpile error: {0}")]
    Transpile(String),

    /// Diagnostics were reported and strict mode is enabled
    #[error("transpilation reported {} diagnostic(s): {}", .0.len(), .0.join("; "))]
    Diagnostics(Vec<String>),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TspileError {
    /// Create a read error with path context
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TspileError::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error with path context
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TspileError::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a transpile error
    pub fn transpile(message: impl Into<String>) -> Self {
        TspileError::Transpile(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_path() {
        let err = TspileError::read(
            "missing.ts",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("missing.ts"));
        assert!(rendered.contains("no such file"));
    }

    #[test]
    fn test_diagnostics_display_counts() {
        let err = TspileError::Diagnostics(vec![
            "unexpected token".to_string(),
            "unterminated string".to_string(),
        ]);
        let rendered = err.to_string();
        assert!(rendered.contains("2 diagnostic(s)"));
        assert!(rendered.contains("unexpected token"));
    }
}
