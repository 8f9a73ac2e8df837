//! Test data generation utilities and predefined scenarios
//!
//! Provides directories with known contents and editor argument templates
//! that stand in for a person editing the list.

#![allow(dead_code)]

use super::workspace::*;
use bulk_rename::core::error::Result;

/// Scenario: two files whose names can be swapped
pub fn create_swap_dir() -> Result<TestDir> {
    let dir = setup_test_dir()?;
    create_file(&dir.path, "a.txt", "content of a")?;
    create_file(&dir.path, "b.txt", "content of b")?;
    Ok(dir)
}

/// Scenario: a small photo tree for enumeration
///
/// ```text
/// photos/
///     1.jpg
///     10.jpg
///     2.jpg
///     notes.txt
///     sub/
///         3.jpg
/// ```
pub fn create_photo_dir() -> Result<TestDir> {
    let dir = setup_test_dir()?;
    for name in ["photos/1.jpg", "photos/10.jpg", "photos/2.jpg", "photos/sub/3.jpg"] {
        create_file(&dir.path, name, name)?;
    }
    create_file(&dir.path, "photos/notes.txt", "notes")?;
    Ok(dir)
}

/// `--editor-args` value that replaces the list with `lines`.
///
/// Used together with `--editor-command sh`.
pub fn editor_writing(lines: &[&str]) -> String {
    let quoted: Vec<String> = lines.iter().map(|line| format!("\"{line}\"")).collect();
    format!(
        "--editor-args=-c 'printf \"%s\\n\" {} > \"$0\"' {{0}}",
        quoted.join(" ")
    )
}

/// `--editor-args` value that prints the list and leaves it untouched.
pub fn editor_printing() -> String {
    "--editor-args=-c 'cat \"$0\"' {0}".to_string()
}

/// `--editor-args` value for an editor that gives up with a non-zero status.
pub fn editor_failing() -> String {
    "--editor-args=-c 'exit 1' {0}".to_string()
}
