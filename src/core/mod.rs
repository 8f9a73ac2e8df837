//! Core functionality for the bulk-rename tool.
//!
//! This module provides the building blocks of a run: collecting the batch,
//! rendering and parsing the edit list, launching the editor, and renaming.

pub mod config;
pub mod dirs;
pub mod edit_list;
pub mod editor;
pub mod error;
pub mod executor;
pub mod list_file;
pub mod name_generator;
pub mod natural_sort;
pub mod output;
pub mod path_item;
pub mod path_tree;
pub mod tree_builder;

// === Error handling ===
// Core error types and result type used throughout the application
pub use error::{BulkRenameError, Result};

// === Configuration ===
// Defaults, config file keys and the merged run settings
pub use config::{Config, CONFIG_KEYS};

// === Batch ===
// Items to rename and the builder that collects them from input paths
pub use path_item::{PathItem, PathKind};
pub use path_tree::PathTree;
pub use tree_builder::{EnumerateOptions, TreeBuilder};

// === Editing ===
// The list file the user edits and the editor that opens it
pub use edit_list::EditList;
pub use editor::{CommandEditor, Editor};
pub use list_file::ListFile;

// === Renaming ===
// Temp name generation and the two-phase rename
pub use executor::{RenameExecutor, RenameSummary};
pub use name_generator::{NameGenerator, TempNameGenerator};

// === Output formatting ===
// Unified output formatting for consistent CLI presentation
pub use output::{print_error, print_info, print_success, print_warning};
