//! Unified error types for the kw-templates toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while loading or rendering templates.
#[derive(Error, Debug)]
pub enum TemplateError {
    // --- Loading ---

    /// The template file could not be read (missing, not permitted, not UTF-8).
    #[error("template file {path} not found")]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The selected key is not part of the group's table.
    #[error("unknown template {key} from group {group}")]
    UnknownTemplate { key: String, group: String },

    /// Two files in a template directory map to the same key.
    #[error("duplicate template {key} at {path}")]
    DuplicateTemplate { key: String, path: PathBuf },

    /// A template directory could not be walked.
    #[error("failed to read template directory {path}")]
    Directory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // --- Configuration ---

    /// Placeholder delimiters must both be non-empty.
    #[error("invalid placeholder delimiters: open {open:?}, close {close:?}")]
    InvalidDelimiters { open: String, close: String },
}

/// Alias for `Result<T, TemplateError>`.
pub type Result<T> = std::result::Result<T, TemplateError>;
