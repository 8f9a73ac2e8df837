//! Consolidated test utilities for bulk-rename
//!
//! This module provides unified testing utilities for integration tests,
//! built around real temporary directories and a scripted editor.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
