use clap::Parser;
use colored::Colorize;
use remind::api::{CmdMessage, MessageLevel, NotebookListing, RemindApi};
use remind::config::RemindConfig;
use remind::editor::Editor;
use remind::error::{RemindError, Result};
use remind::ui::Confirm;
use remind::vcs::Git;
use std::fs;

mod args;
mod prompt;

use args::{split_target, Cli, Commands};
use prompt::TerminalConfirm;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ui = TerminalConfirm;

    let config = RemindConfig::from_env();
    ensure_notes_root(&config, &mut ui)?;
    let editor = Editor::from_config(&config);
    let api = RemindApi::new(config);

    match cli.command {
        Commands::New { notebook, note } => handle_new(&api, &editor, &mut ui, &notebook, &note),
        Commands::Delete { notebook, note } => {
            handle_delete(&api, &mut ui, &notebook, note.as_deref())
        }
        Commands::List {
            notebook,
            decorate,
            oneline,
        } => handle_list(&api, &mut ui, notebook.as_deref(), decorate, oneline),
        Commands::Edit { target } => handle_edit(&api, &editor, &mut ui, target),
        Commands::Find { target } => handle_find(&api, target),
        Commands::Info => handle_info(&api),
    }
}

fn ensure_notes_root(config: &RemindConfig, ui: &mut dyn Confirm) -> Result<()> {
    if config.notes_root.is_dir() {
        return Ok(());
    }
    if !ui.confirm(&format!(
        "{} does not exist, create?",
        config.notes_root.display()
    )) {
        return Err(RemindError::Cancelled(
            "Cannot continue without top-level notes directory".to_string(),
        ));
    }
    fs::create_dir_all(&config.notes_root)?;
    Ok(())
}

/// Set up version control for this invocation. Disabled flag, missing
/// executable, or a declined `git init` all degrade to None.
fn version_control(config: &RemindConfig, ui: &mut dyn Confirm) -> Option<Git> {
    if config.git_disabled {
        return None;
    }
    let git = match Git::locate(&config.notes_root) {
        Some(git) => git,
        None => {
            eprintln!("No usable git executable found, continuing without it.");
            return None;
        }
    };
    if !git.is_initialized() {
        if !ui.confirm(&format!(
            "Do you want to initialize git for {}?",
            config.notes_root.display()
        )) {
            return None;
        }
        git.initialize();
    }
    Some(git)
}

fn handle_new(
    api: &RemindApi,
    editor: &Editor,
    ui: &mut TerminalConfirm,
    notebook: &str,
    note: &str,
) -> Result<()> {
    let vcs = version_control(api.config(), ui);
    let result = api.new_note(ui, editor, notebook, note)?;

    if let Some(path) = result.note_paths.first() {
        editor.open(&[path.as_path()])?;
        if let Some(git) = &vcs {
            if ui.confirm(&format!("Git commit the note {}?", path.display())) {
                git.add(path);
                git.commit();
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(
    api: &RemindApi,
    ui: &mut TerminalConfirm,
    notebook: &str,
    note: Option<&str>,
) -> Result<()> {
    let vcs = version_control(api.config(), ui);
    let result = api.delete(ui, vcs.as_ref(), notebook, note)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    api: &RemindApi,
    ui: &mut TerminalConfirm,
    notebook: Option<&str>,
    decorate: bool,
    oneline: bool,
) -> Result<()> {
    let vcs = if decorate {
        version_control(api.config(), ui)
    } else {
        None
    };
    let result = api.list(vcs.as_ref(), notebook, decorate)?;
    print_listings(&result.listings, oneline);
    Ok(())
}

fn handle_edit(
    api: &RemindApi,
    editor: &Editor,
    ui: &mut TerminalConfirm,
    target: Vec<String>,
) -> Result<()> {
    let (hint, note) = split_target(target);
    let vcs = version_control(api.config(), ui);
    let result = api.find(&note, hint.as_deref())?;

    if let Some(path) = result.note_paths.first() {
        editor.open(&[path.as_path()])?;
        if let Some(git) = &vcs {
            if git.is_modified(path)
                && ui.confirm(&format!("Git commit the note {}?", path.display()))
            {
                git.add(path);
                git.commit();
            }
        }
    }
    Ok(())
}

fn handle_find(api: &RemindApi, target: Vec<String>) -> Result<()> {
    let (hint, note) = split_target(target);
    let result = api.find(&note, hint.as_deref())?;
    for path in &result.note_paths {
        println!("{}", path.display());
    }
    Ok(())
}

fn handle_info(api: &RemindApi) -> Result<()> {
    let result = api.info()?;
    print_messages(&result.messages);

    let hash = env!("GIT_HASH");
    if hash.is_empty() {
        println!("VERSION:{}", env!("CARGO_PKG_VERSION"));
    } else {
        println!("VERSION:{} ({})", env!("CARGO_PKG_VERSION"), hash);
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_listings(listings: &[NotebookListing], oneline: bool) {
    let count = listings.len();
    for (i, notebook) in listings.iter().enumerate() {
        if !oneline {
            println!("{}/", notebook.name.bold());
        }
        for note in &notebook.notes {
            let decoration = match note.tracked {
                Some(true) => "[t] ",
                Some(false) => "[u] ",
                None => "",
            };
            if oneline {
                println!("{}{}/{}", decoration, notebook.name, note.name);
            } else {
                println!("  * {}{}", decoration, note.name);
            }
        }
        if !oneline && i != count - 1 {
            println!();
        }
    }
}
