//! # Template resolution and rendering
//!
//! Every notebook can carry a template pair in the template storage
//! directory: `<dir>/<nb>/<nb>.txt` holds static text, `<dir>/<nb>/<nb>.hooks`
//! allow-lists the render hooks the text may call. Resolution falls back in
//! two stages: the notebook's own pair, then the pair of a notebook literally
//! named `default`, then an empty template.
//!
//! The static text splits into literal spans and `{{identifier}}` placeholder
//! tokens (identifiers are word characters and whitespace only). A
//! placeholder renders by invoking the named hook with the notebook and note
//! name; any failure emits the placeholder's own source text unchanged and
//! rendering continues. A single broken placeholder must never abort note
//! creation.

use crate::config::RemindConfig;
use crate::editor::Editor;
use crate::error::Result;
use crate::ui::Confirm;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

pub mod hooks;

use hooks::{HookRegistry, RenderFailure};

/// Fallback notebook name for template resolution
pub const DEFAULT_TEMPLATE: &str = "default";

const TEXT_EXT: &str = "txt";
const HOOKS_EXT: &str = "hooks";

/// A notebook's template. Resolution is lazy and memoized: at most one
/// filesystem read and one allow-list load per instance.
pub struct Template {
    dir: PathBuf,
    notebook: String,
    prompt_create: bool,
    resolved: bool,
    loaded: Option<Loaded>,
}

struct Loaded {
    text: String,
    allowed: HashSet<String>,
}

impl Template {
    pub fn new(config: &RemindConfig, notebook: &str, prompt_create: bool) -> Self {
        Self {
            dir: config.template_dir.clone(),
            notebook: notebook.to_string(),
            prompt_create,
            resolved: false,
            loaded: None,
        }
    }

    fn pair(&self, name: &str) -> (PathBuf, PathBuf) {
        let dir = self.dir.join(name);
        (
            dir.join(format!("{}.{}", name, TEXT_EXT)),
            dir.join(format!("{}.{}", name, HOOKS_EXT)),
        )
    }

    /// Load the template pair for `name`. Both files must exist.
    fn configure(&mut self, name: &str) -> bool {
        let (text_path, hooks_path) = self.pair(name);
        if !text_path.is_file() || !hooks_path.is_file() {
            return false;
        }
        let text = match fs::read_to_string(&text_path) {
            Ok(text) => text,
            Err(_) => return false,
        };
        let allowed = match fs::read_to_string(&hooks_path) {
            Ok(list) => parse_allow_list(&list),
            Err(_) => return false,
        };
        self.loaded = Some(Loaded { text, allowed });
        true
    }

    fn resolve(&mut self, ui: &mut dyn Confirm, editor: &Editor) {
        if self.resolved {
            return;
        }
        let name = self.notebook.clone();
        let mut configured = self.configure(&name);
        if !configured && self.prompt_create && self.create(ui, editor) {
            configured = self.configure(&name);
        }
        if !configured {
            self.configure(DEFAULT_TEMPLATE);
        }
        self.resolved = true;
    }

    /// Render the template for one note. An unresolved template renders to
    /// the empty string; a failing placeholder renders to itself.
    pub fn render(
        &mut self,
        registry: &HookRegistry,
        note: &str,
        ui: &mut dyn Confirm,
        editor: &Editor,
    ) -> String {
        self.resolve(ui, editor);
        let loaded = match &self.loaded {
            Some(loaded) => loaded,
            None => return String::new(),
        };

        let mut out = String::new();
        for token in tokenize(&loaded.text) {
            match token {
                Token::Literal(span) => out.push_str(span),
                Token::Placeholder { raw, name } => {
                    let rendered = if loaded.allowed.contains(name) {
                        registry.call(&self.notebook, name, note)
                    } else {
                        Err(RenderFailure::NotAllowed(name.to_string()))
                    };
                    match rendered {
                        Ok(value) => out.push_str(&value),
                        Err(_) => out.push_str(raw),
                    }
                }
            }
        }
        out
    }

    /// Offer to create the template pair: confirm, make the directory, seed
    /// the allow-list, and open the editor on both files at once.
    pub fn create(&self, ui: &mut dyn Confirm, editor: &Editor) -> bool {
        if !ui.confirm("Do you want to create a template?") {
            return false;
        }
        let dir = self.dir.join(&self.notebook);
        if !dir.is_dir() {
            if !ui.confirm(&format!("{} does not exist, create?", dir.display())) {
                return false;
            }
            if fs::create_dir_all(&dir).is_err() {
                return false;
            }
        }
        let (text_path, hooks_path) = self.pair(&self.notebook);
        if !hooks_path.exists() {
            let _ = fs::write(&hooks_path, hooks::starter_allow_list());
        }
        editor.open(&[&text_path, &hooks_path]).is_ok()
    }

    /// Confirm, then remove this notebook's template directory. No-op when
    /// the directory is absent.
    pub fn delete(&self, ui: &mut dyn Confirm) -> Result<()> {
        let dir = self.dir.join(&self.notebook);
        if !dir.is_dir() {
            return Ok(());
        }
        if ui.confirm(&format!(
            "Do you want to delete the template for {}?",
            self.notebook
        )) {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Placeholder { raw: &'a str, name: &'a str },
}

/// Split template text into literal spans and `{{[\s\w]*}}` placeholders.
/// Anything that is not exactly a double-brace-delimited identifier stays
/// literal, including unterminated or invalid-character braces.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let bytes = text.as_bytes();
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos + 1 < bytes.len() {
        if bytes[pos] == b'{' && bytes[pos + 1] == b'{' {
            if let Some(end) = match_placeholder(text, pos) {
                if literal_start < pos {
                    tokens.push(Token::Literal(&text[literal_start..pos]));
                }
                let raw = &text[pos..end];
                tokens.push(Token::Placeholder {
                    raw,
                    name: raw[2..raw.len() - 2].trim(),
                });
                literal_start = end;
                pos = end;
                continue;
            }
        }
        pos += 1;
    }

    if literal_start < text.len() {
        tokens.push(Token::Literal(&text[literal_start..]));
    }
    tokens
}

/// Exclusive end offset of a placeholder starting with `{{` at `start`, or
/// None if the identifier is invalid or never closed
fn match_placeholder(text: &str, start: usize) -> Option<usize> {
    let body = start + 2;
    for (offset, c) in text[body..].char_indices() {
        if c == '}' {
            if text[body + offset..].starts_with("}}") {
                return Some(body + offset + 2);
            }
            return None;
        }
        if !is_word(c) && !c.is_whitespace() {
            return None;
        }
    }
    None
}

fn is_word(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

fn parse_allow_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
