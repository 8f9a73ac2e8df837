//! Turns user-supplied paths into an ordered, related batch of items.
//!
//! This module provides [`TreeBuilder`] which cleans up the raw path list,
//! optionally expands directories, sorts everything naturally and links every
//! item to the directories of the batch it is nested under.
//!
//! # Public API
//! - [`EnumerateOptions`]: Whether and how directory contents are included
//! - [`TreeBuilder`]: Builds a [`PathTree`] from raw paths
//!
//! # Build Steps
//! 1. **Clean up**: Trim, drop blank entries, drop repeated entries
//! 2. **Resolve**: One [`PathItem`] per path; missing paths are kept, marked invalid
//! 3. **Expand**: Directory contents matching the search pattern, when enumerating
//! 4. **Sort**: Natural order of full paths
//! 5. **Relate**: Descendant lists and indentation levels relative to the batch

use crate::core::{
    error::Result,
    natural_sort::natural_path_cmp,
    path_item::{PathItem, PathKind},
    path_tree::PathTree,
};
use glob::{MatchOptions, Pattern};
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq)]
pub struct EnumerateOptions {
    pub enumerate: bool,
    pub recursive: bool,
    /// `*` and `?` wildcards, matched against entry names. Everything else,
    /// brackets included, matches literally.
    pub search_pattern: String,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            enumerate: false,
            recursive: false,
            search_pattern: "*".to_string(),
        }
    }
}

pub struct TreeBuilder {
    options: EnumerateOptions,
    pattern: Pattern,
}

impl TreeBuilder {
    pub fn new(options: EnumerateOptions) -> Result<Self> {
        let pattern = Pattern::new(&wildcard_glob(&options.search_pattern))?;
        Ok(Self { options, pattern })
    }

    pub fn build<S: AsRef<str>>(&self, paths: &[S]) -> PathTree {
        let mut warnings = Vec::new();
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        let cleaned = paths
            .iter()
            .map(|path| path.as_ref().trim())
            .filter(|path| !path.is_empty())
            .filter(|path| seen.insert(path.to_string()));

        for path in cleaned {
            let item = PathItem::new(path);

            if item.kind == PathKind::None {
                warn(&mut warnings, format!("Path does not exist: {path}"));
            } else if item.parent_path.is_none() {
                warn(
                    &mut warnings,
                    format!("Unable to access parent location of path: {path}"),
                );
                continue;
            } else if item.is_dir() && self.options.enumerate {
                self.expand(&item.full_path, &mut items, &mut warnings);
            }

            items.push(item);
        }

        let mut unique_paths = HashSet::new();
        items.retain(|item| unique_paths.insert(item.full_path.clone()));
        items.sort_by(|a, b| natural_path_cmp(&a.full_path, &b.full_path));
        relate(&mut items);

        log::debug!("Built batch of {} item(s)", items.len());
        PathTree::new(items, warnings)
    }

    fn expand(&self, dir: &Path, items: &mut Vec<PathItem>, warnings: &mut Vec<String>) {
        let max_depth = if self.options.recursive { usize::MAX } else { 1 };
        let match_options = MatchOptions {
            case_sensitive: !cfg!(windows),
            require_literal_separator: false,
            require_literal_leading_dot: false,
        };

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(false)
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn(warnings, format!("Unable to enumerate: {e}"));
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy();
            if self.pattern.matches_with(&name, match_options) {
                items.push(PathItem::new(entry.path()));
            }
        }
    }
}

/// Link every item to the directories of the batch it is nested under.
///
/// An item's level is the largest segment count found among its enclosing
/// directories, i.e. its depth below the outermost one present in the batch.
fn relate(items: &mut [PathItem]) {
    for child in 0..items.len() {
        if items[child].kind == PathKind::None {
            continue;
        }

        for parent in 0..items.len() {
            let depth = {
                let (child_item, parent_item) = (&items[child], &items[parent]);
                if !child_item.is_descendant_of(parent_item) {
                    continue;
                }
                child_item.depth_below(&parent_item.full_path)
            };

            if let Some(depth) = depth {
                items[child].level = items[child].level.max(depth);
            }
            items[parent].descendants.push(child);
        }
    }
}

fn warn(warnings: &mut Vec<String>, message: String) {
    log::warn!("{message}");
    warnings.push(message);
}

/// Glob text where only `*` and `?` are wildcards: brackets are literal and
/// a run of stars acts as one.
fn wildcard_glob(search_pattern: &str) -> String {
    let mut glob = String::with_capacity(search_pattern.len());
    for c in search_pattern.chars() {
        match c {
            '*' if glob.ends_with('*') => {}
            '[' | ']' => glob.push_str(&Pattern::escape(&c.to_string())),
            _ => glob.push(c),
        }
    }
    glob
}
