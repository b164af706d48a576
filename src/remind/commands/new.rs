use super::{CmdMessage, CmdResult};
use crate::config::RemindConfig;
use crate::editor::Editor;
use crate::error::{RemindError, Result};
use crate::model::Notebook;
use crate::template::hooks::HookRegistry;
use crate::template::Template;
use crate::ui::Confirm;
use std::fs;

/// Create a note, prepopulated from the notebook's template. A missing
/// notebook is created behind a confirmation; a freshly created notebook
/// gets the offer to create its template during resolution.
pub fn run(
    config: &RemindConfig,
    ui: &mut dyn Confirm,
    editor: &Editor,
    hooks: &HookRegistry,
    notebook_name: &str,
    note_name: &str,
) -> Result<CmdResult> {
    let notebook = Notebook::new(&config.notes_root, notebook_name);
    let mut created = false;
    if !notebook.exists() {
        if !ui.confirm(&format!("{} does not exist, create?", notebook.path.display())) {
            return Err(RemindError::Cancelled(format!(
                "Cannot continue without creating {}",
                notebook_name
            )));
        }
        fs::create_dir_all(&notebook.path)?;
        created = true;
    }

    let note = notebook.note(note_name);
    if note.exists() {
        return Err(RemindError::NoteExists(note_name.to_string()));
    }

    let mut template = Template::new(config, notebook_name, created);
    let content = template.render(hooks, note_name, ui, editor);
    fs::write(&note.path, content)?;

    let mut result = CmdResult::default();
    result.note_paths.push(note.path.clone());
    result.add_message(CmdMessage::success(format!(
        "Created {}/{}",
        notebook_name, note_name
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::testing::{Always, Script};
    use std::path::Path;
    use tempfile::TempDir;

    fn editor() -> Editor {
        Editor::new("true")
    }

    fn write_template(config: &RemindConfig, name: &str, text: &str, hooks: &str) {
        let ntd = config.template_dir.join(name);
        fs::create_dir_all(&ntd).unwrap();
        fs::write(ntd.join(format!("{name}.txt")), text).unwrap();
        fs::write(ntd.join(format!("{name}.hooks")), hooks).unwrap();
    }

    #[test]
    fn creates_empty_note_without_template() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());
        fs::create_dir(temp.path().join("work")).unwrap();

        let hooks = HookRegistry::with_builtins();
        let result = run(
            &config,
            &mut Script(vec![]),
            &editor(),
            &hooks,
            "work",
            "standup.md",
        )
        .unwrap();

        let path = temp.path().join("work/standup.md");
        assert_eq!(result.note_paths, vec![path.clone()]);
        assert_eq!(fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn prepopulates_from_notebook_template() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());
        fs::create_dir(temp.path().join("work")).unwrap();
        write_template(&config, "work", "# {{note}}\n", "note\n");

        let hooks = HookRegistry::with_builtins();
        run(
            &config,
            &mut Script(vec![]),
            &editor(),
            &hooks,
            "work",
            "standup.md",
        )
        .unwrap();

        let content = fs::read_to_string(temp.path().join("work/standup.md")).unwrap();
        assert_eq!(content, "# standup.md\n");
    }

    #[test]
    fn confirmed_notebook_creation_offers_a_template() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());

        let hooks = HookRegistry::with_builtins();
        // yes to notebook creation, no to template creation
        let mut ui = Script(vec![true, false]);
        run(&config, &mut ui, &editor(), &hooks, "work", "standup.md").unwrap();

        assert!(ui.0.is_empty());
        assert!(Path::new(&temp.path().join("work/standup.md")).is_file());
    }

    #[test]
    fn declined_notebook_creation_cancels() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());

        let hooks = HookRegistry::with_builtins();
        let err = run(
            &config,
            &mut Always(false),
            &editor(),
            &hooks,
            "work",
            "standup.md",
        )
        .unwrap_err();

        assert!(matches!(err, RemindError::Cancelled(_)));
        assert!(!temp.path().join("work").exists());
    }

    #[test]
    fn existing_note_is_rejected() {
        let temp = TempDir::new().unwrap();
        let config = RemindConfig::with_root(temp.path());
        fs::create_dir(temp.path().join("work")).unwrap();
        fs::write(temp.path().join("work/standup.md"), "old").unwrap();

        let hooks = HookRegistry::with_builtins();
        let err = run(
            &config,
            &mut Script(vec![]),
            &editor(),
            &hooks,
            "work",
            "standup.md",
        )
        .unwrap_err();

        assert!(matches!(err, RemindError::NoteExists(_)));
        // content untouched
        let content = fs::read_to_string(temp.path().join("work/standup.md")).unwrap();
        assert_eq!(content, "old");
    }
}
