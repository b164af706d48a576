use super::CmdResult;
use crate::config::RemindConfig;
use crate::error::Result;
use crate::registry::NotebookRegistry;

/// Resolve a note reference (optionally disambiguated by a notebook hint)
/// to its path.
pub fn run(config: &RemindConfig, raw: &str, hint: Option<&str>) -> Result<CmdResult> {
    let registry = NotebookRegistry::new(&config.notes_root);
    let note = registry.resolve(raw, hint)?;

    let mut result = CmdResult::default();
    result.note_paths.push(note.path);
    Ok(result)
}
