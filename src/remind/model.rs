use crate::error::Result;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// A named grouping of notes, backed by one directory under the notes root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    pub name: String,
    pub path: PathBuf,
}

impl Notebook {
    pub fn new(root: &Path, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: root.join(name),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    pub fn note(&self, name: &str) -> Note {
        Note::new(self, name)
    }

    /// True iff the notebook directory has zero entries
    pub fn is_empty(&self) -> Result<bool> {
        Ok(fs::read_dir(&self.path)?.next().is_none())
    }
}

impl fmt::Display for Notebook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A single opaque text file inside a notebook. Invariant:
/// `path = notebook.path/name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub name: String,
    pub notebook: String,
    pub path: PathBuf,
}

impl Note {
    pub fn new(notebook: &Notebook, name: &str) -> Self {
        Self {
            name: name.to_string(),
            notebook: notebook.name.clone(),
            path: notebook.path.join(name),
        }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
