use super::{CmdResult, NoteListing, NotebookListing};
use crate::config::RemindConfig;
use crate::error::{RemindError, Result};
use crate::paths;
use crate::registry::NotebookRegistry;
use crate::vcs::Git;

/// List notebooks and their notes, optionally filtered to one notebook and
/// optionally decorated with git tracked status. Empty discovery is an
/// error so the CLI exits non-zero.
pub fn run(
    config: &RemindConfig,
    vcs: Option<&Git>,
    filter: Option<&str>,
    decorate: bool,
) -> Result<CmdResult> {
    let registry = NotebookRegistry::new(&config.notes_root);
    let notebooks = registry.discover(filter)?;
    if notebooks.is_empty() {
        return Err(RemindError::NoNotebooks);
    }

    let mut result = CmdResult::default();
    for notebook in notebooks {
        let mut listing = NotebookListing {
            name: notebook.name.clone(),
            notes: Vec::new(),
        };
        for name in paths::list_notes(&notebook.path)? {
            let tracked = if decorate {
                // no git means nothing is tracked
                Some(vcs.map(|git| git.is_tracked(&notebook.path.join(&name))).unwrap_or(false))
            } else {
                None
            };
            listing.notes.push(NoteListing { name, tracked });
        }
        result.listings.push(listing);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn note(config: &RemindConfig, notebook: &str, name: &str) {
        let dir = config.notes_root.join(notebook);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn lists_notebooks_and_sorted_notes() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());
        note(&config, "work", "b.md");
        note(&config, "work", "a.md");
        note(&config, "personal", "journal.md");

        let result = run(&config, None, None, false).unwrap();

        assert_eq!(result.listings.len(), 2);
        assert_eq!(result.listings[0].name, "personal");
        assert_eq!(result.listings[1].name, "work");
        let names: Vec<_> = result.listings[1].notes.iter().map(|n| &n.name).collect();
        assert_eq!(names, ["a.md", "b.md"]);
        assert!(result.listings[1].notes[0].tracked.is_none());
    }

    #[test]
    fn filter_narrows_to_one_notebook() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());
        note(&config, "work", "a.md");
        note(&config, "personal", "b.md");

        let result = run(&config, None, Some("work"), false).unwrap();
        assert_eq!(result.listings.len(), 1);
        assert_eq!(result.listings[0].name, "work");
    }

    #[test]
    fn empty_discovery_is_an_error() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());

        let err = run(&config, None, None, false).unwrap_err();
        assert!(matches!(err, RemindError::NoNotebooks));

        note(&config, "work", "a.md");
        let err = run(&config, None, Some("missing"), false).unwrap_err();
        assert!(matches!(err, RemindError::NoNotebooks));
    }

    #[test]
    fn decorate_without_git_marks_untracked() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());
        note(&config, "work", "a.md");

        let result = run(&config, None, None, true).unwrap();
        assert_eq!(result.listings[0].notes[0].tracked, Some(false));
    }
}
