//! Read-only filesystem queries under the notes root. Directory creation is
//! always delegated to callers behind a confirmation.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Reserved entry for template storage, never listed as a notebook
pub const TEMPLATES_DIR: &str = "templates";

pub fn notebook_exists(root: &Path, name: &str) -> bool {
    root.join(name).is_dir()
}

/// Notebook names under the root: directories only, excluding dot-entries
/// and the template storage directory. Sorted ascending.
pub fn list_notebooks(root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || name == TEMPLATES_DIR {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names)
}

/// Note names inside a notebook directory, sorted ascending
pub fn list_notes(notebook_path: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(notebook_path)? {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}
