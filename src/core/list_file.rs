//! The temporary file handed to the editor.
//!
//! [`ListFile`] owns the file for the duration of a run and removes it when
//! dropped, whether the run succeeded or stopped on an error.

use crate::core::error::Result;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempPath;

const LIST_FILE_PREFIX: &str = "bulk-rename-";
const LIST_FILE_SUFFIX: &str = ".txt";

pub struct ListFile {
    path: TempPath,
}

impl ListFile {
    /// Write `content` to a new, uniquely named file in the system temp dir.
    pub fn create(content: &str) -> Result<Self> {
        Self::create_in(&env::temp_dir(), content)
    }

    pub fn create_in(dir: &Path, content: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix(LIST_FILE_PREFIX)
            .suffix(LIST_FILE_SUFFIX)
            .tempfile_in(dir)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        // Close our handle so the editor is free to replace the file.
        let path = file.into_temp_path();
        log::debug!("Created list file {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current content, as saved by the editor.
    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_read_and_cleanup() {
        let temp_dir = TempDir::new().unwrap();
        let path = {
            let list_file = ListFile::create_in(temp_dir.path(), "a.txt\nb.txt\n").unwrap();
            assert_eq!(list_file.read().unwrap(), "a.txt\nb.txt\n");
            assert!(list_file.path().extension().is_some_and(|ext| ext == "txt"));
            assert!(list_file
                .path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(LIST_FILE_PREFIX));
            list_file.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_after_error_path() {
        let temp_dir = TempDir::new().unwrap();
        let result: Result<()> = (|| {
            let list_file = ListFile::create_in(temp_dir.path(), "x")?;
            fs::write(list_file.path(), "edited")?;
            Err(crate::core::error::BulkRenameError::EmptyList)
        })();

        assert!(result.is_err());
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_editor_replacing_the_file_is_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let list_file = ListFile::create_in(temp_dir.path(), "old").unwrap();

        // Editors often save by writing a new file and renaming it over the old one.
        let replacement = temp_dir.path().join("replacement");
        fs::write(&replacement, "new").unwrap();
        fs::rename(&replacement, list_file.path()).unwrap();

        assert_eq!(list_file.read().unwrap(), "new");
    }

    #[test]
    fn test_file_removed_by_editor_is_fine() {
        let temp_dir = TempDir::new().unwrap();
        let list_file = ListFile::create_in(temp_dir.path(), "x").unwrap();
        fs::remove_file(list_file.path()).unwrap();
        assert!(list_file.read().is_err());
        drop(list_file);
    }

    #[test]
    fn test_names_are_unique() {
        let temp_dir = TempDir::new().unwrap();
        let first = ListFile::create_in(temp_dir.path(), "1").unwrap();
        let second = ListFile::create_in(temp_dir.path(), "2").unwrap();
        assert_ne!(first.path(), second.path());
    }
}
