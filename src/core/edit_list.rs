//! The plain-text list the user edits.
//!
//! This module provides [`EditList`] which renders a batch into an indented,
//! commented document and parses the edited document back into new names.
//!
//! # Format
//! ```text
//! # <header banner, every line commented>
//!
//! photos
//!     2023
//!         beach.jpg
//! # [INVALID] missing.txt
//! ```
//!
//! Rendering emits exactly one line per item in batch order. Parsing ignores
//! indentation, comments and blank lines, so only line order carries meaning
//! on the way back in.

use crate::core::{executor::INVALID_NAME_CHARS_DISPLAY, path_tree::PathTree};

pub const DEFAULT_COMMENT_MARKER: char = '#';
pub const DEFAULT_INDENT_SIZE: usize = 4;

const BANNER_WIDTH: usize = 45;

const INSTRUCTIONS: &[&str] = &[
    "To rename:",
    "   1. Update each line with the new name.",
    "   2. Save and close the editor.",
    "",
    "Unchanged lines will be skipped.",
    "Do NOT add or remove uncommented lines!",
    "Lines commented out are invalid paths that will be ignored.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditList {
    pub comment_marker: char,
    pub indent_size: usize,
}

impl Default for EditList {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER,
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }
}

impl EditList {
    pub fn new(comment_marker: char, indent_size: usize) -> Self {
        Self {
            comment_marker,
            indent_size,
        }
    }

    pub fn render(&self, tree: &PathTree) -> String {
        let mut out = self.header();

        let lines: Vec<String> = tree
            .items()
            .iter()
            .map(|item| {
                if item.skip() {
                    let message = item.err_msg.as_deref().unwrap_or("[ERROR]");
                    format!("{} {}", self.comment_marker, single_line(message))
                } else {
                    let indent = " ".repeat(item.level * self.indent_size);
                    format!("{indent}{}", item.name)
                }
            })
            .collect();

        out.push_str(&lines.join("\n"));
        out.push('\n');
        out
    }

    /// Leave out every item whose name would not come back unchanged from
    /// [`EditList::parse`]: names holding the comment marker or a line break,
    /// and names with leading or trailing whitespace.
    pub fn reject_unsupported_names(&self, tree: &mut PathTree) {
        for index in tree.renameable() {
            let item = tree.get(index);
            if self.round_trips(&item.name) {
                continue;
            }
            let path = item.full_path.display().to_string();
            tree.reject(
                index,
                format!("[UNSUPPORTED NAME] {path}"),
                format!("Name cannot be edited in the list: {path}"),
            );
        }
    }

    fn round_trips(&self, name: &str) -> bool {
        !name.is_empty()
            && name.trim() == name
            && !name.contains(self.comment_marker)
            && !name.contains(['\n', '\r'])
    }

    /// New names in line order, comments and blank lines removed.
    pub fn parse(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .map(|line| match line.find(self.comment_marker) {
                Some(pos) => &line[..pos],
                None => line,
            })
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn header(&self) -> String {
        let marker = self.comment_marker;
        let rule = marker.to_string().repeat(BANNER_WIDTH);
        let title = format!(
            "{marker}{:^width$}{marker}",
            "BULK RENAME",
            width = BANNER_WIDTH - 2
        );

        let mut lines = vec![rule.clone(), title, rule, String::new()];
        lines.extend(INSTRUCTIONS.iter().map(|line| {
            if line.is_empty() {
                marker.to_string()
            } else {
                format!("{marker} {line}")
            }
        }));
        lines.push(format!(
            "{marker} New names cannot contain '{marker}' or any of: {}",
            INVALID_NAME_CHARS_DISPLAY
        ));
        lines.push(String::new());

        let mut header = lines.join("\n");
        header.push('\n');
        header
    }
}

// A comment must stay on one line or its tail would read back as a name.
fn single_line(message: &str) -> String {
    message.replace(['\n', '\r'], " ")
}
