//! Temporary directory management for binary-level tests
//!
//! Every test gets its own directory with files to rename and an isolated
//! config home, so a user config file never leaks into a test run.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use bulk_rename::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// The TempDir must be kept alive for the duration of the test to prevent cleanup.
pub struct TestDir {
    pub temp_dir: TempDir,
    pub path: PathBuf,
    config_home: TempDir,
}

impl TestDir {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Absolute path of `relative` inside the test directory, as a CLI argument.
    pub fn arg(&self, relative: &str) -> String {
        self.path.join(relative).to_string_lossy().into_owned()
    }

    /// Where bulk-rename looks for its config file when `--config` is not given.
    pub fn default_config_file(&self) -> PathBuf {
        let base = if cfg!(target_os = "macos") {
            self.config_home.path().join("Library/Application Support")
        } else {
            self.config_home.path().to_path_buf()
        };
        base.join("bulk-rename").join("config.toml")
    }

    /// A `bulk-rename` command that cannot see the user's own config.
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("bulk-rename")?;
        cmd.current_dir(&self.path)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        Ok(cmd)
    }
}

pub fn setup_test_dir() -> Result<TestDir> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestDir {
        temp_dir,
        path,
        config_home: TempDir::new()?,
    })
}

/// Creates a file (and any missing parent directories) relative to `dir`
pub fn create_file(dir: &Path, relative: &str, content: &str) -> Result<()> {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn read_file(dir: &Path, relative: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.join(relative))?)
}

/// Sorted names of the entries directly inside `dir`
pub fn list_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
        .collect::<std::io::Result<Vec<_>>>()?;
    names.sort();
    Ok(names)
}
