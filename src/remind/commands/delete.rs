use super::{CmdMessage, CmdResult};
use crate::config::RemindConfig;
use crate::error::{RemindError, Result};
use crate::model::Notebook;
use crate::registry::NotebookRegistry;
use crate::template::Template;
use crate::ui::Confirm;
use crate::vcs::Git;
use std::fs;

/// Delete a note, or a whole notebook when no note is named. Deleting the
/// last note cascades to the notebook and its template storage. Tracked
/// paths get a `git rm` + commit offer.
pub fn run(
    config: &RemindConfig,
    ui: &mut dyn Confirm,
    vcs: Option<&Git>,
    notebook_name: &str,
    note_name: Option<&str>,
) -> Result<CmdResult> {
    let registry = NotebookRegistry::new(&config.notes_root);
    let notebook = Notebook::new(&config.notes_root, notebook_name);
    if !notebook.exists() {
        return Err(RemindError::NotebookNotFound(notebook_name.to_string()));
    }

    match note_name {
        Some(name) => delete_note(config, ui, vcs, &registry, &notebook, name),
        None => delete_notebook(config, ui, vcs, &registry, &notebook),
    }
}

fn delete_note(
    config: &RemindConfig,
    ui: &mut dyn Confirm,
    vcs: Option<&Git>,
    registry: &NotebookRegistry,
    notebook: &Notebook,
    name: &str,
) -> Result<CmdResult> {
    let note = registry
        .find(notebook, name)
        .ok_or_else(|| RemindError::NoteNotFound(name.to_string()))?;

    let mut result = CmdResult::default();
    if !ui.confirm(&format!("Are you sure you want to delete the note {}?", note)) {
        result.add_message(CmdMessage::info("Aborted"));
        return Ok(result);
    }

    fs::remove_file(&note.path)?;
    result.add_message(CmdMessage::success(format!(
        "Deleted {}/{}",
        notebook, note
    )));

    if notebook.is_empty()? {
        registry.delete(notebook)?;
        Template::new(config, &notebook.name, false).delete(ui)?;
        result.add_message(CmdMessage::info(format!(
            "Notebook {} is empty, removed",
            notebook
        )));
    }

    if let Some(git) = vcs {
        if git.is_tracked(&note.path) && ui.confirm(&format!("Git rm the note {}?", note)) {
            git.rm(&note.path, false);
            git.commit();
        }
    }

    Ok(result)
}

fn delete_notebook(
    config: &RemindConfig,
    ui: &mut dyn Confirm,
    vcs: Option<&Git>,
    registry: &NotebookRegistry,
    notebook: &Notebook,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if !ui.confirm(&format!(
        "Are you sure you want to delete the notebook {}?",
        notebook
    )) {
        result.add_message(CmdMessage::info("Aborted"));
        return Ok(result);
    }

    registry.delete(notebook)?;
    Template::new(config, &notebook.name, false).delete(ui)?;
    result.add_message(CmdMessage::success(format!(
        "Deleted notebook {}",
        notebook
    )));

    if let Some(git) = vcs {
        if git.is_tracked(&notebook.path)
            && ui.confirm(&format!("Git rm the notebook {}?", notebook))
        {
            git.rm(&notebook.path, true);
            git.commit();
        }
    }

    Ok(result)
}
