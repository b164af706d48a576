//! Notebook lifecycle and cross-notebook note lookup.

use crate::error::{RemindError, Result};
use crate::model::{Note, Notebook};
use crate::paths;
use std::fs;
use std::path::{Path, PathBuf};

pub struct NotebookRegistry {
    root: PathBuf,
}

impl NotebookRegistry {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All notebooks under the root, optionally filtered by exact name
    pub fn discover(&self, filter: Option<&str>) -> Result<Vec<Notebook>> {
        let mut notebooks = Vec::new();
        for name in paths::list_notebooks(&self.root)? {
            if let Some(wanted) = filter {
                if wanted != name {
                    continue;
                }
            }
            notebooks.push(Notebook::new(&self.root, &name));
        }
        Ok(notebooks)
    }

    /// The note if it exists in the given notebook
    pub fn find(&self, notebook: &Notebook, note: &str) -> Option<Note> {
        let candidate = notebook.note(note);
        if candidate.exists() {
            Some(candidate)
        } else {
            None
        }
    }

    /// All notes with this exact name across every notebook, in notebook order
    pub fn search(&self, note: &str) -> Result<Vec<Note>> {
        let mut matches = Vec::new();
        for notebook in self.discover(None)? {
            if let Some(found) = self.find(&notebook, note) {
                matches.push(found);
            }
        }
        Ok(matches)
    }

    /// Resolve a raw note reference to a single note.
    ///
    /// With a notebook hint the lookup is direct. Without one, a reference
    /// containing `/` is read as `.../notebook/note` (the last two segments;
    /// empty segments are malformed) and tried in that notebook before
    /// falling back to a cross-notebook search. A bare name searches every
    /// notebook and must match exactly once.
    pub fn resolve(&self, raw: &str, hint: Option<&str>) -> Result<Note> {
        if let Some(name) = hint {
            let notebook = Notebook::new(&self.root, name);
            if !notebook.exists() {
                return Err(RemindError::NotebookNotFound(name.to_string()));
            }
            return self
                .find(&notebook, raw)
                .ok_or_else(|| RemindError::NoteNotFound(raw.to_string()));
        }

        let needle = if raw.contains('/') {
            let (notebook_name, note_name) = split_qualified(raw)?;
            let notebook = Notebook::new(&self.root, notebook_name);
            if notebook.exists() {
                if let Some(found) = self.find(&notebook, note_name) {
                    return Ok(found);
                }
            }
            note_name
        } else {
            raw
        };

        let mut matches = self.search(needle)?;
        match matches.len() {
            0 => Err(RemindError::NoteNotFound(needle.to_string())),
            1 => Ok(matches.remove(0)),
            _ => Err(RemindError::Ambiguous(needle.to_string())),
        }
    }

    /// Remove the notebook's directory tree. Template cleanup belongs to
    /// [`crate::template::Template::delete`], which callers pair with this.
    pub fn delete(&self, notebook: &Notebook) -> Result<()> {
        fs::remove_dir_all(&notebook.path)?;
        Ok(())
    }
}

/// Split a slash-qualified reference into its last two segments. Either of
/// them being empty is a loud error rather than a best-effort guess.
fn split_qualified(raw: &str) -> Result<(&str, &str)> {
    let mut segments = raw.rsplitn(3, '/');
    let note = segments.next().unwrap_or("");
    let notebook = segments.next().unwrap_or("");
    if note.is_empty() || notebook.is_empty() {
        return Err(RemindError::Malformed(raw.to_string()));
    }
    Ok((notebook, note))
}
