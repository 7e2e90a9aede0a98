//! The interactive steps of one run: setup choice, tables, files.

mod selection;

use ctx_core::Setup;
use ctx_core::defaults::NEW_SETUP_LABEL;

use crate::output::tree;
use crate::prompt::Prompter;

pub use selection::{FileOutcome, FileSelection};

pub const SETUP_PROMPT: &str = "Choose a previously saved setup or create a new one:";
pub const TABLES_PROMPT: &str = "Select tables to include (type to search)";
pub const FILES_PROMPT: &str = "Type part of the file name to include (or press Enter to finish)";
pub const TREE_TITLE: &str = "Current Selected Files Tree:";

/// Ask which stored setup to start from. `None` means a new setup.
///
/// # Errors
///
/// Propagates prompt failures.
pub fn choose_setup<P: Prompter>(
    prompter: &mut P,
    setups: &[Setup],
) -> anyhow::Result<Option<Setup>> {
    let options: Vec<String> = std::iter::once(NEW_SETUP_LABEL.to_string())
        .chain(setups.iter().map(|setup| setup.name.clone()))
        .collect();

    let choice = prompter.select(SETUP_PROMPT, &options)?;
    if choice == NEW_SETUP_LABEL {
        return Ok(None);
    }
    Ok(ctx_core::setup::find(setups, &choice).cloned())
}

/// Ask for the tables to dump, pre-checking `defaults` that are still selectable.
///
/// # Errors
///
/// Propagates prompt failures.
pub fn choose_tables<P: Prompter>(
    prompter: &mut P,
    selectable: &[String],
    defaults: &[String],
) -> anyhow::Result<Vec<String>> {
    let (kept, stale): (Vec<String>, Vec<String>) = defaults
        .iter()
        .cloned()
        .partition(|table| selectable.contains(table));
    for table in &stale {
        tracing::warn!(%table, "stored table is no longer selectable; dropping it");
    }

    prompter.multiselect(TABLES_PROMPT, selectable, &kept)
}

/// Run the file search loop until the user submits an empty line.
///
/// # Errors
///
/// Propagates prompt failures.
pub fn choose_files<P: Prompter>(
    prompter: &mut P,
    selection: &mut FileSelection,
) -> anyhow::Result<()> {
    loop {
        let input = prompter.suggest(FILES_PROMPT, selection.remaining())?;
        match selection.offer(&input) {
            FileOutcome::Done => return Ok(()),
            FileOutcome::Added(path) => {
                prompter.info(&format!("Selected file: {path}"));
                prompter.note(TREE_TITLE, &tree::render(selection.selected()));
            }
            FileOutcome::AlreadySelected(path) => {
                prompter.warn(&format!("File already selected: {path}"));
            }
            FileOutcome::Invalid(_) => prompter.warn("Invalid file selected."),
        }
    }
}

/// Start a selection over `candidates` with a stored setup's files applied.
pub fn seed_selection<P: Prompter>(
    prompter: &mut P,
    candidates: Vec<String>,
    preselected: &[String],
) -> FileSelection {
    let mut selection = FileSelection::new(candidates);
    for path in selection.preselect(preselected) {
        tracing::warn!(%path, "stored file is no longer a candidate; dropping it");
    }
    if !selection.selected().is_empty() {
        prompter.note(TREE_TITLE, &tree::render(selection.selected()));
    }
    selection
}
