use crate::config::RemindConfig;
use crate::error::{RemindError, Result};
use std::path::Path;
use std::process::Command;

/// External text editor, resolved once from configuration.
pub struct Editor {
    program: String,
}

impl Editor {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &RemindConfig) -> Self {
        Self::new(config.editor.clone())
    }

    /// Open all paths in a single editor invocation and block until it
    /// exits. Template creation relies on both files opening at once.
    pub fn open(&self, paths: &[&Path]) -> Result<()> {
        let status = Command::new(&self.program)
            .args(paths)
            .status()
            .map_err(|e| {
                RemindError::Editor(format!("failed to launch '{}': {}", self.program, e))
            })?;

        if !status.success() {
            return Err(RemindError::Editor(format!(
                "'{}' exited with non-zero status",
                self.program
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_editor_error() {
        let editor = Editor::new("definitely-not-an-editor-binary");
        let err = editor.open(&[Path::new("/tmp/whatever")]).unwrap_err();
        assert!(matches!(err, RemindError::Editor(_)));
    }

    #[test]
    fn non_zero_exit_is_an_editor_error() {
        let editor = Editor::new("false");
        let err = editor.open(&[Path::new("/tmp/whatever")]).unwrap_err();
        assert!(matches!(err, RemindError::Editor(_)));
    }

    #[test]
    fn successful_exit_is_ok() {
        let editor = Editor::new("true");
        editor.open(&[Path::new("/tmp/whatever")]).unwrap();
    }
}
