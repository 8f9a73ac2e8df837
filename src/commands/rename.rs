use crate::core::{
    config::Config,
    editor::Editor,
    error::{BulkRenameError, Result},
    executor::{RenameExecutor, RenameSummary},
    list_file::ListFile,
    output::{print_info, print_success, print_warning},
    tree_builder::TreeBuilder,
};

pub fn execute_rename(paths: &[String], config: &Config) -> Result<()> {
    let summary = run_rename(paths, config, &config.editor())?;

    if summary.renamed == 0 {
        print_info("No names were changed. Nothing to do.");
    } else {
        print_success(&format!(
            "Operation completed. Renamed {} item(s).",
            summary.renamed
        ));
    }
    Ok(())
}

/// Build the batch, let the user edit it through `editor`, then rename.
///
/// The list file only lives for the duration of this call.
pub fn run_rename<S: AsRef<str>>(
    paths: &[S],
    config: &Config,
    editor: &dyn Editor,
) -> Result<RenameSummary> {
    let builder = TreeBuilder::new(config.enumerate_options())?;
    let mut tree = builder.build(paths);
    let edit_list = config.edit_list();
    edit_list.reject_unsupported_names(&mut tree);

    for warning in tree.warnings() {
        print_warning(warning);
    }
    if tree.renameable().is_empty() {
        return Err(BulkRenameError::NoValidItems);
    }

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Batch:\n{}", tree.to_json()?);
    }

    let list_file = ListFile::create(&edit_list.render(&tree))?;
    editor.edit(list_file.path())?;
    let new_names = edit_list.parse(&list_file.read()?);

    RenameExecutor::new(&config.temp_name_gen).execute(&mut tree, new_names)
}
