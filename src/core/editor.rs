//! Launching the user's editor on the list file.
//!
//! # Public API
//! - [`Editor`]: Opens a file for editing and returns once the user is done
//! - [`CommandEditor`]: Runs an external editor command and waits for it
//! - [`default_editor_command`]: `$VISUAL`, `$EDITOR`, or the platform fallback

use crate::core::error::{BulkRenameError, Result};
use std::env;
use std::path::Path;
use std::process::Command;

/// Placeholder in the arguments template replaced by the list file path.
pub const PATH_PLACEHOLDER: &str = "{0}";

pub trait Editor {
    /// Block until the user has finished editing `path`.
    fn edit(&self, path: &Path) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommandEditor {
    command: String,
    args_template: String,
}

impl CommandEditor {
    pub fn new(command: impl Into<String>, args_template: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args_template: args_template.into(),
        }
    }

    /// Program and arguments for editing `path`.
    ///
    /// The command may carry its own arguments (`code --wait`). Every
    /// `{0}` in the template is replaced by `path`; a template without one
    /// gets the path appended as the last argument.
    pub fn command_line(&self, path: &Path) -> Result<(String, Vec<String>)> {
        let mut command_words = if Path::new(&self.command).is_file() {
            vec![self.command.clone()]
        } else {
            shlex::split(&self.command)
                .filter(|words| !words.is_empty())
                .ok_or_else(|| BulkRenameError::invalid_editor_args(&self.command))?
        };
        let program = command_words.remove(0);

        let template_words = shlex::split(&self.args_template)
            .ok_or_else(|| BulkRenameError::invalid_editor_args(&self.args_template))?;

        let path_str = path.to_string_lossy();
        let has_placeholder = template_words.iter().any(|w| w.contains(PATH_PLACEHOLDER));

        let mut args = command_words;
        args.extend(
            template_words
                .into_iter()
                .map(|word| word.replace(PATH_PLACEHOLDER, &path_str)),
        );
        if !has_placeholder {
            args.push(path_str.into_owned());
        }

        Ok((program, args))
    }
}

impl Editor for CommandEditor {
    fn edit(&self, path: &Path) -> Result<()> {
        let (program, args) = self.command_line(path)?;
        log::debug!("Launching editor: {program} {args:?}");

        let status = Command::new(&program)
            .args(&args)
            .status()
            .map_err(|e| BulkRenameError::editor_launch_failed(&program, e))?;

        if !status.success() {
            return Err(BulkRenameError::editor_exit_status(&program, status));
        }
        Ok(())
    }
}

/// Editor used when none is configured.
pub fn default_editor_command() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|var| env::var(var).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| {
            if cfg!(windows) {
                "notepad.exe".to_string()
            } else {
                "vi".to_string()
            }
        })
}
