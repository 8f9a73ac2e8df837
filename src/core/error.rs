//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`BulkRenameError`] which covers every way a bulk rename run
//! can stop. It uses `thiserror` for ergonomic error definitions and includes
//! constructors for the variants that carry context.
//!
//! # Public API
//! - [`BulkRenameError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, BulkRenameError>`
//!
//! # Error Categories
//! - **Input**: No valid paths, bad search pattern
//! - **Validation**: Problems in the edited list, detected before anything is renamed
//! - **Commit**: Failures while moving items, after the filesystem has been touched
//! - **Collaborators**: Editor and configuration failures

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for bulk-rename
#[derive(Error, Debug)]
pub enum BulkRenameError {
    // Input errors
    #[error("Couldn't find valid files or folders to rename")]
    NoValidItems,

    #[error("Invalid search pattern: {0}")]
    InvalidSearchPattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Edited list validation errors
    #[error("Empty list file")]
    EmptyList,

    #[error("Mismatch number of lines: expected {expected}, found {found}")]
    LineCountMismatch { expected: usize, found: usize },

    #[error("Invalid character '{character}' in new name: {name}")]
    InvalidCharacter { name: String, character: char },

    #[error("Invalid new name: '{name}'")]
    ReservedName { name: String },

    #[error("Duplicate file names: {path}")]
    DuplicateTarget { path: PathBuf },

    #[error("Target already exists: {path}")]
    TargetExists { path: PathBuf },

    // Commit errors
    #[error("Maximum temporary name limit reached for: {path}")]
    TempNameExhausted { path: PathBuf },

    #[error("Rename stopped with {stranded} item(s) left on temporary names: {source}")]
    CommitAborted {
        stranded: usize,
        source: Box<BulkRenameError>,
    },

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    RenameFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    // Editor errors
    #[error("Failed to launch editor '{command}': {source}")]
    EditorLaunchFailed {
        command: String,
        source: std::io::Error,
    },

    #[error("Editor '{command}' exited with {status}. Nothing was renamed.")]
    EditorExitStatus { command: String, status: String },

    #[error("Invalid editor arguments template: {template}")]
    InvalidEditorArgs { template: String },

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}': {message}")]
    InvalidConfigValue { key: String, message: String },

    #[error("Unknown temporary name generator: {name}. Use GUID, AlphaNum<N> or AlphaNumVariableLength")]
    UnknownNameGenerator { name: String },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using BulkRenameError
pub type Result<T> = std::result::Result<T, BulkRenameError>;

impl BulkRenameError {
    /// Create a line count mismatch error
    pub fn line_count_mismatch(expected: usize, found: usize) -> Self {
        Self::LineCountMismatch { expected, found }
    }

    /// Create an invalid character error
    pub fn invalid_character(name: impl Into<String>, character: char) -> Self {
        Self::InvalidCharacter {
            name: name.into(),
            character,
        }
    }

    /// Create a reserved name error
    pub fn reserved_name(name: impl Into<String>) -> Self {
        Self::ReservedName { name: name.into() }
    }

    /// Create a duplicate target error
    pub fn duplicate_target(path: impl Into<PathBuf>) -> Self {
        Self::DuplicateTarget { path: path.into() }
    }

    /// Create a target exists error
    pub fn target_exists(path: impl Into<PathBuf>) -> Self {
        Self::TargetExists { path: path.into() }
    }

    /// Create a temp name exhausted error
    pub fn temp_name_exhausted(path: impl Into<PathBuf>) -> Self {
        Self::TempNameExhausted { path: path.into() }
    }

    /// Create a rename failed error
    pub fn rename_failed(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::RenameFailed {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    /// Create an editor launch failed error
    pub fn editor_launch_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::EditorLaunchFailed {
            command: command.into(),
            source,
        }
    }

    /// Create an editor exit status error
    pub fn editor_exit_status(command: impl Into<String>, status: impl ToString) -> Self {
        Self::EditorExitStatus {
            command: command.into(),
            status: status.to_string(),
        }
    }

    /// Create an invalid editor args error
    pub fn invalid_editor_args(template: impl Into<String>) -> Self {
        Self::InvalidEditorArgs {
            template: template.into(),
        }
    }

    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config_value(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an unknown name generator error
    pub fn unknown_name_generator(name: impl Into<String>) -> Self {
        Self::UnknownNameGenerator { name: name.into() }
    }

    /// Create a commit aborted error
    pub fn commit_aborted(stranded: usize, source: BulkRenameError) -> Self {
        Self::CommitAborted {
            stranded,
            source: Box::new(source),
        }
    }

    /// True when the error was raised before any item was moved.
    pub fn is_pre_mutation(&self) -> bool {
        !matches!(self, Self::CommitAborted { .. })
    }
}
