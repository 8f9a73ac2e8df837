//! File and directory entries that take part in a bulk rename.
//!
//! # Public API
//! - [`PathKind`]: What a path resolved to when the item was created
//! - [`PathItem`]: One entry of the batch, with its hierarchy and rename state
//! - [`absolute_path`]: Lexical absolute path used as an item's identity

use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Filesystem type of a path, resolved once when the item is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PathKind {
    None,
    File,
    Directory,
}

impl PathKind {
    /// Resolve the kind of `path` from the filesystem.
    ///
    /// Symlinks are followed, except dangling ones which still count as files
    /// because the link itself can be renamed.
    pub fn of(path: &Path) -> Self {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => PathKind::Directory,
            Ok(_) => PathKind::File,
            Err(_) => match fs::symlink_metadata(path) {
                Ok(_) => PathKind::File,
                Err(_) => PathKind::None,
            },
        }
    }

    /// True when something exists at `path`, including a dangling symlink.
    pub fn exists(path: &Path) -> bool {
        fs::symlink_metadata(path).is_ok()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PathItem {
    /// Absolute path, never ending with a separator.
    pub full_path: PathBuf,
    pub kind: PathKind,
    /// Last component of `full_path`.
    pub name: String,
    /// `None` only for a filesystem root.
    pub parent_path: Option<PathBuf>,
    /// Indices (into the owning batch) of every item nested under this directory.
    pub descendants: Vec<usize>,
    /// Depth relative to the outermost enclosing item of the batch.
    pub level: usize,
    pub new_name: Option<String>,
    pub err_msg: Option<String>,
}

impl PathItem {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let full_path = absolute_path(path);
        let kind = PathKind::of(&full_path);

        let name = full_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let parent_path = full_path
            .parent()
            .filter(|_| !name.is_empty())
            .map(Path::to_path_buf);

        let err_msg = match kind {
            PathKind::None => Some(format!("[INVALID] {}", path.display())),
            _ => None,
        };

        Self {
            full_path,
            kind,
            name,
            parent_path,
            descendants: Vec::new(),
            level: 0,
            new_name: None,
            err_msg,
        }
    }

    /// Items that are invalid or already errored are left out of the rename.
    pub fn skip(&self) -> bool {
        self.kind == PathKind::None || self.err_msg.is_some()
    }

    pub fn is_dir(&self) -> bool {
        self.kind == PathKind::Directory
    }

    /// True when `self` lies strictly under the directory item `parent`.
    pub fn is_descendant_of(&self, parent: &PathItem) -> bool {
        parent.is_dir()
            && self.full_path != parent.full_path
            && self.full_path.starts_with(&parent.full_path)
    }

    /// Number of path segments between `ancestor` and this item.
    pub fn depth_below(&self, ancestor: &Path) -> Option<usize> {
        self.full_path
            .strip_prefix(ancestor)
            .ok()
            .map(|rest| rest.components().count())
    }

    /// Target path for the pending new name.
    pub fn target_path(&self) -> Option<PathBuf> {
        match (&self.parent_path, &self.new_name) {
            (Some(parent), Some(new_name)) => Some(parent.join(new_name)),
            _ => None,
        }
    }

    /// Point the item at `dest` after it has been moved there.
    pub fn relocate(&mut self, dest: &Path) {
        self.full_path = dest.to_path_buf();
        self.name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.parent_path = dest.parent().map(Path::to_path_buf);
    }

    /// Rewrite the stored path after an ancestor moved from `old_root` to `new_root`.
    pub fn rebase(&mut self, old_root: &Path, new_root: &Path) {
        if let Ok(rest) = self.full_path.strip_prefix(old_root) {
            let moved = new_root.join(rest);
            self.relocate(&moved);
        }
    }
}

/// Make `path` absolute without touching the filesystem.
///
/// `.` and `..` are folded lexically and trailing separators disappear.
/// Symlinks are not resolved, so the link itself is what gets renamed.
pub fn absolute_path(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir().unwrap_or_default().join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                normalized.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
        }
    }
    normalized
}
