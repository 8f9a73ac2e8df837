//! The ordered batch of items taking part in one run.
//!
//! Items keep the natural-sort order produced by the tree builder for the
//! whole run: the edit list is rendered in this order and read back in it.
//! Descendant links are indices into the same batch, so moving a directory
//! can rewrite every nested item in place.

use crate::core::{
    error::{BulkRenameError, Result},
    path_item::PathItem,
};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Serialize)]
pub struct PathTree {
    items: Vec<PathItem>,
    #[serde(skip)]
    warnings: Vec<String>,
}

impl PathTree {
    /// Wrap items that are already sorted and related.
    pub fn new(items: Vec<PathItem>, warnings: Vec<String>) -> Self {
        Self { items, warnings }
    }

    pub fn items(&self) -> &[PathItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> &PathItem {
        &self.items[index]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Problems found while building the batch, one line each.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Indices of the items that appear as editable lines, in list order.
    pub fn renameable(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.skip())
            .map(|(index, _)| index)
            .collect()
    }

    /// Leave the item at `index` out of the rename and record why.
    pub fn reject(&mut self, index: usize, err_msg: String, warning: String) {
        log::warn!("{warning}");
        self.items[index].err_msg = Some(err_msg);
        self.warnings.push(warning);
    }

    pub fn set_new_name(&mut self, index: usize, new_name: impl Into<String>) {
        self.items[index].new_name = Some(new_name.into());
    }

    /// Move the item at `index` to `dest` on disk and update the batch.
    ///
    /// Every descendant of a moved directory is rebased onto the new path.
    pub fn move_item(&mut self, index: usize, dest: &Path) -> Result<()> {
        let src = self.items[index].full_path.clone();
        log::debug!("{} >>> {}", src.display(), dest.display());

        fs::rename(&src, dest).map_err(|e| BulkRenameError::rename_failed(&src, dest, e))?;
        self.items[index].relocate(dest);

        let descendants = std::mem::take(&mut self.items[index].descendants);
        for &descendant in &descendants {
            self.items[descendant].rebase(&src, dest);
        }
        self.items[index].descendants = descendants;

        Ok(())
    }

    /// Pretty JSON dump of the batch for debug logging.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
