//! Run configuration: defaults, the TOML config file and command-line overrides.
//!
//! A [`Config`] is built once in `main` and passed by reference to everything
//! that needs it. Config file keys are listed in [`CONFIG_KEYS`], which is also
//! the reference for what the file may contain:
//!
//! ```toml
//! [input]
//! enumerate = false
//! recursive = false
//! search_pattern = "*"
//!
//! [edit]
//! editor_command = "vi"
//! editor_args = "{0}"
//! indent_size = 4
//! comment_marker = "#"
//!
//! [misc]
//! verbose = false
//! temp_name_gen = "AlphaNum8"
//! ```

use crate::core::{
    dirs::get_config_directory,
    edit_list::{EditList, DEFAULT_COMMENT_MARKER, DEFAULT_INDENT_SIZE},
    editor::{default_editor_command, CommandEditor, PATH_PLACEHOLDER},
    error::{BulkRenameError, Result},
    name_generator::TempNameGenerator,
    tree_builder::EnumerateOptions,
};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub enumerate: bool,
    pub recursive: bool,
    pub search_pattern: String,
    pub editor_command: String,
    pub editor_args: String,
    pub indent_size: usize,
    pub comment_marker: char,
    pub verbose: bool,
    pub temp_name_gen: TempNameGenerator,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enumerate: false,
            recursive: false,
            search_pattern: "*".to_string(),
            editor_command: default_editor_command(),
            editor_args: PATH_PLACEHOLDER.to_string(),
            indent_size: DEFAULT_INDENT_SIZE,
            comment_marker: DEFAULT_COMMENT_MARKER,
            verbose: false,
            temp_name_gen: TempNameGenerator::default(),
        }
    }
}

type Apply = fn(&mut Config, &toml::Value) -> std::result::Result<(), String>;

/// One config file key and how it lands in [`Config`].
pub struct ConfigKey {
    pub section: &'static str,
    pub key: &'static str,
    apply: Apply,
}

pub const CONFIG_KEYS: &[ConfigKey] = &[
    ConfigKey {
        section: "input",
        key: "enumerate",
        apply: |config, value| {
            config.enumerate = as_bool(value)?;
            Ok(())
        },
    },
    ConfigKey {
        section: "input",
        key: "recursive",
        apply: |config, value| {
            config.recursive = as_bool(value)?;
            Ok(())
        },
    },
    ConfigKey {
        section: "input",
        key: "search_pattern",
        apply: |config, value| {
            config.search_pattern = as_string(value)?;
            Ok(())
        },
    },
    ConfigKey {
        section: "edit",
        key: "editor_command",
        apply: |config, value| {
            config.editor_command = as_string(value)?;
            Ok(())
        },
    },
    ConfigKey {
        section: "edit",
        key: "editor_args",
        apply: |config, value| {
            config.editor_args = as_string(value)?;
            Ok(())
        },
    },
    ConfigKey {
        section: "edit",
        key: "indent_size",
        apply: |config, value| {
            let size = value
                .as_integer()
                .ok_or_else(|| "expected an integer".to_string())?;
            config.indent_size =
                usize::try_from(size).map_err(|_| "must not be negative".to_string())?;
            Ok(())
        },
    },
    ConfigKey {
        section: "edit",
        key: "comment_marker",
        apply: |config, value| {
            let marker = as_string(value)?;
            let mut chars = marker.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_whitespace() => {
                    config.comment_marker = c;
                    Ok(())
                }
                _ => Err("expected a single non-space character".to_string()),
            }
        },
    },
    ConfigKey {
        section: "misc",
        key: "verbose",
        apply: |config, value| {
            config.verbose = as_bool(value)?;
            Ok(())
        },
    },
    ConfigKey {
        section: "misc",
        key: "temp_name_gen",
        apply: |config, value| {
            config.temp_name_gen = as_string(value)?
                .parse::<TempNameGenerator>()
                .map_err(|e: BulkRenameError| e.to_string())?;
            Ok(())
        },
    },
];

fn as_bool(value: &toml::Value) -> std::result::Result<bool, String> {
    value
        .as_bool()
        .ok_or_else(|| "expected true or false".to_string())
}

fn as_string(value: &toml::Value) -> std::result::Result<String, String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| "expected a string".to_string())
}

impl Config {
    /// Defaults merged with the config file.
    ///
    /// `explicit` is the `--config` path; without it the default location is
    /// used and a missing file there is not a problem. Anything wrong with the
    /// file comes back as warnings and leaves the affected values at defaults.
    pub fn load(explicit: Option<&Path>) -> (Self, Vec<BulkRenameError>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|path| path.exists()),
        };

        if let Some(path) = path {
            log::debug!("Loading config from {}", path.display());
            match Self::read_file(&path) {
                Ok(table) => warnings.extend(config.merge_toml(&table)),
                Err(e) => warnings.push(e),
            }
        }

        (config, warnings)
    }

    pub fn read_file(path: &Path) -> Result<toml::Table> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| BulkRenameError::config_read_failed(path, e))?;
        toml::from_str(&content).map_err(|e| BulkRenameError::config_parse_failed(path, e))
    }

    /// Apply every known key present in `table`. Bad values are skipped and reported.
    pub fn merge_toml(&mut self, table: &toml::Table) -> Vec<BulkRenameError> {
        let mut warnings = Vec::new();

        for entry in CONFIG_KEYS {
            let Some(value) = table
                .get(entry.section)
                .and_then(toml::Value::as_table)
                .and_then(|section| section.get(entry.key))
            else {
                continue;
            };

            if let Err(message) = (entry.apply)(self, value) {
                warnings.push(BulkRenameError::invalid_config_value(
                    format!("{}.{}", entry.section, entry.key),
                    message,
                ));
            }
        }

        warnings
    }

    pub fn enumerate_options(&self) -> EnumerateOptions {
        EnumerateOptions {
            enumerate: self.enumerate,
            recursive: self.recursive,
            search_pattern: self.search_pattern.clone(),
        }
    }

    pub fn edit_list(&self) -> EditList {
        EditList::new(self.comment_marker, self.indent_size)
    }

    pub fn editor(&self) -> CommandEditor {
        CommandEditor::new(&self.editor_command, &self.editor_args)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    get_config_directory()
        .ok()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
}
