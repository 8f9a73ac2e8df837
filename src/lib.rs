//! Bulk Rename - rename files and directories by editing a plain-text list.
//!
//! The paths to rename are collected into a batch, written one per line to a
//! temporary list file and opened in the user's editor. Once the editor exits
//! the edited names are validated against the batch and every changed item is
//! moved through a unique temporary name before taking its final name.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Batch construction from input paths
//! - The edit-list format
//! - Validation and the two-phase rename
//! - Configuration, error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    // Error handling
    BulkRenameError,
    // Editing
    CommandEditor,
    // Configuration
    Config,
    EditList,
    Editor,
    EnumerateOptions,
    ListFile,
    NameGenerator,
    // Batch
    PathItem,
    PathKind,
    PathTree,
    // Renaming
    RenameExecutor,
    RenameSummary,
    Result,
    TempNameGenerator,
    TreeBuilder,
};
