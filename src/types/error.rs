//! Error types for dropcopy

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes reported by the `dropcopy` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    /// No Dropbox `info.json` was found
    InvalidDropBox = 100,
    /// `info.json` exists but no root path could be read from it
    JsonParseError = 101,
    /// Arguments were accepted by the parser but failed validation
    InvalidParameters = 102,
    /// Anything else (I/O, permissions, bad paths)
    GenericException = 1337,
}

impl ErrorCode {
    /// Integer value handed to `std::process::exit`
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Error types for dropcopy operations
#[derive(Debug, Error)]
pub enum DropCopyError {
    /// No candidate location held a Dropbox `info.json`
    #[error("Dropbox v2.8 or later must be installed")]
    InvalidDropbox { searched: Vec<PathBuf> },

    /// `info.json` could not be turned into a root path
    #[error("Failed to parse {path}: {detail}")]
    JsonParse { path: PathBuf, detail: String },

    /// Invalid CLI parameters
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Filesystem failure tied to a specific path
    #[error("{action} {path}: {source}")]
    Copy {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DropCopyError {
    /// Wrap an IO error with the action and path that produced it
    pub fn io_at(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DropCopyError::Copy {
            action,
            path: path.into(),
            source,
        }
    }

    /// Exit code the binary reports for this error
    pub fn exit_code(&self) -> ErrorCode {
        match self {
            DropCopyError::InvalidDropbox { .. } => ErrorCode::InvalidDropBox,
            DropCopyError::JsonParse { .. } => ErrorCode::JsonParseError,
            DropCopyError::InvalidParameters(_) => ErrorCode::InvalidParameters,
            DropCopyError::Copy { .. } | DropCopyError::Io(_) => ErrorCode::GenericException,
        }
    }
}
