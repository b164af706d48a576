//! Business logic for each command. Every module exposes a `run` returning
//! `Result<CmdResult>`; nothing here writes to stdout/stderr, exits the
//! process, or assumes a terminal. Confirmation goes through
//! [`crate::ui::Confirm`].

use std::path::PathBuf;

pub mod delete;
pub mod find;
pub mod info;
pub mod list;
pub mod new;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// One notebook's entry in a `list` result, notes in ascending name order.
/// `tracked` is `Some` only when decoration was requested.
#[derive(Debug, Clone)]
pub struct NotebookListing {
    pub name: String,
    pub notes: Vec<NoteListing>,
}

#[derive(Debug, Clone)]
pub struct NoteListing {
    pub name: String,
    pub tracked: Option<bool>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub note_paths: Vec<PathBuf>,
    pub listings: Vec<NotebookListing>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}
