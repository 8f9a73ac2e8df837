//! Validation of the edited names and the two-phase rename.
//!
//! This module provides [`RenameExecutor`] which checks the names read back
//! from the edit list against the batch and then moves every changed item,
//! first to a unique temporary name and then to its final name.
//!
//! # Public API
//! - [`RenameExecutor`]: Validates and commits a batch
//! - [`RenameSummary`]: What a successful run did
//!
//! # Validation (nothing is touched on disk until all of these pass)
//! 1. The list is not empty and has one name per editable item
//! 2. No name contains a character the platform forbids, and no name is `.` or `..`
//! 3. No two items end up at the same path
//! 4. Items whose name did not change are dropped from the work list
//! 5. No changed item lands on an existing path outside the work list
//!
//! # Commit
//! Every changed item goes through a temporary name in its own directory
//! before it takes its final name, so swapped or reused names never collide.
//! There is no rollback: if the commit stops part-way, the items still on
//! temporary names are logged and left where they are, and the error is
//! wrapped in [`BulkRenameError::CommitAborted`] with their count.

use crate::core::{
    error::{BulkRenameError, Result},
    name_generator::{NameGenerator, MAX_TEMP_NAME_LENGTH},
    path_item::PathKind,
    path_tree::PathTree,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Upper bound on temp name attempts for a single item.
pub const MAX_TEMP_NAME_ATTEMPTS: usize = 10_000;

#[cfg(windows)]
const INVALID_NAME_CHARS: &[char] = &['"', '<', '>', '|', ':', '*', '?', '\\', '/'];
#[cfg(not(windows))]
const INVALID_NAME_CHARS: &[char] = &['/'];

#[cfg(windows)]
pub const INVALID_NAME_CHARS_DISPLAY: &str = "\" < > | : * ? \\ /";
#[cfg(not(windows))]
pub const INVALID_NAME_CHARS_DISPLAY: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenameSummary {
    pub renamed: usize,
    pub unchanged: usize,
}

pub struct RenameExecutor<'a> {
    generator: &'a dyn NameGenerator,
}

impl<'a> RenameExecutor<'a> {
    pub fn new(generator: &'a dyn NameGenerator) -> Self {
        Self { generator }
    }

    /// Validate `new_names` and rename every item whose name changed.
    pub fn execute(&self, tree: &mut PathTree, new_names: Vec<String>) -> Result<RenameSummary> {
        let renameable = tree.renameable().len();
        let pending = self.validate(tree, new_names)?;
        let summary = RenameSummary {
            renamed: pending.len(),
            unchanged: renameable - pending.len(),
        };

        if !pending.is_empty() {
            self.commit(tree, &pending)?;
        }
        Ok(summary)
    }

    /// Check the edited names against the batch and assign them.
    ///
    /// Returns the indices of the items that actually need to move, in
    /// batch order. Only in-memory state changes here.
    pub fn validate(&self, tree: &mut PathTree, new_names: Vec<String>) -> Result<Vec<usize>> {
        let renameable = tree.renameable();

        if new_names.is_empty() {
            return Err(BulkRenameError::EmptyList);
        }
        if new_names.len() != renameable.len() {
            return Err(BulkRenameError::line_count_mismatch(
                renameable.len(),
                new_names.len(),
            ));
        }
        for name in &new_names {
            check_name(name)?;
        }

        for (&index, new_name) in renameable.iter().zip(new_names) {
            tree.set_new_name(index, new_name);
        }

        let mut targets = HashSet::new();
        for &index in &renameable {
            if let Some(target) = tree.get(index).target_path() {
                if !targets.insert(path_key(&target)) {
                    return Err(BulkRenameError::duplicate_target(target));
                }
            }
        }

        // Exact comparison: a case-only change is still a change.
        let pending: Vec<usize> = renameable
            .into_iter()
            .filter(|&index| {
                let item = tree.get(index);
                item.new_name.as_deref() != Some(item.name.as_str())
            })
            .collect();

        let moving: HashSet<String> = pending
            .iter()
            .map(|&index| path_key(&tree.get(index).full_path))
            .collect();
        for &index in &pending {
            if let Some(target) = tree.get(index).target_path() {
                if PathKind::exists(&target) && !moving.contains(&path_key(&target)) {
                    return Err(BulkRenameError::target_exists(target));
                }
            }
        }

        log::debug!("{} item(s) to rename", pending.len());
        Ok(pending)
    }

    /// Move every pending item to a temp name, then to its final name.
    pub fn commit(&self, tree: &mut PathTree, pending: &[usize]) -> Result<()> {
        let final_names: HashSet<String> = pending
            .iter()
            .filter_map(|&index| tree.get(index).new_name.clone())
            .collect();

        let mut on_temp = Vec::with_capacity(pending.len());
        for &index in pending {
            let moved = self
                .free_temp_path(tree, index, &final_names)
                .and_then(|temp_path| tree.move_item(index, &temp_path));
            if let Err(e) = moved {
                return Err(abort(tree, &on_temp, e));
            }
            on_temp.push(index);
        }

        for (done, &index) in on_temp.iter().enumerate() {
            if let Err(e) = self.move_to_final(tree, index) {
                return Err(abort(tree, &on_temp[done..], e));
            }
        }

        Ok(())
    }

    fn free_temp_path(
        &self,
        tree: &PathTree,
        index: usize,
        final_names: &HashSet<String>,
    ) -> Result<PathBuf> {
        let item = tree.get(index);
        let parent = item
            .parent_path
            .as_deref()
            .unwrap_or_else(|| Path::new(""));
        let length = item.name.chars().count().min(MAX_TEMP_NAME_LENGTH);

        for _ in 0..MAX_TEMP_NAME_ATTEMPTS {
            let name = self.generator.generate(length);
            if name.is_empty() || final_names.contains(&name) || check_name(&name).is_err() {
                continue;
            }
            let candidate = parent.join(&name);
            if !PathKind::exists(&candidate) {
                return Ok(candidate);
            }
        }

        Err(BulkRenameError::temp_name_exhausted(&item.full_path))
    }

    fn move_to_final(&self, tree: &mut PathTree, index: usize) -> Result<()> {
        let Some(target) = tree.get(index).target_path() else {
            return Ok(());
        };
        if PathKind::exists(&target) {
            return Err(BulkRenameError::target_exists(target));
        }
        tree.move_item(index, &target)
    }
}

fn check_name(name: &str) -> Result<()> {
    if let Some(c) = name
        .chars()
        .find(|c| INVALID_NAME_CHARS.contains(c) || is_forbidden_control(*c))
    {
        return Err(BulkRenameError::invalid_character(name, c));
    }
    if name == "." || name == ".." {
        return Err(BulkRenameError::reserved_name(name));
    }
    Ok(())
}

#[cfg(windows)]
fn is_forbidden_control(c: char) -> bool {
    (c as u32) < 32
}

#[cfg(not(windows))]
fn is_forbidden_control(c: char) -> bool {
    c == '\0'
}

/// Comparison key for paths, folded on platforms whose default filesystems
/// ignore case.
fn path_key(path: &Path) -> String {
    let key = path.to_string_lossy();
    if cfg!(any(windows, target_os = "macos")) {
        key.to_lowercase()
    } else {
        key.into_owned()
    }
}

/// The error to return when the commit stops with `stranded` items still on
/// temporary names. Nothing has moved yet when `stranded` is empty.
fn abort(tree: &PathTree, stranded: &[usize], error: BulkRenameError) -> BulkRenameError {
    if stranded.is_empty() {
        return error;
    }
    report_stranded(tree, stranded);
    BulkRenameError::commit_aborted(stranded.len(), error)
}

fn report_stranded(tree: &PathTree, indices: &[usize]) {
    for &index in indices {
        let item = tree.get(index);
        log::error!(
            "Left on temporary name: {} (intended name: {})",
            item.full_path.display(),
            item.new_name.as_deref().unwrap_or_default()
        );
    }
}
