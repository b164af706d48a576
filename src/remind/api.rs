//! # API Facade
//!
//! Thin facade over the command layer and the single entry point for any UI.
//! It owns the resolved configuration and the hook registry, dispatches to
//! `commands/*.rs`, and returns structured results. No business logic, no
//! I/O formatting, no process exit.

use crate::commands;
use crate::config::RemindConfig;
use crate::editor::Editor;
use crate::error::Result;
use crate::template::hooks::HookRegistry;
use crate::ui::Confirm;
use crate::vcs::Git;

pub struct RemindApi {
    config: RemindConfig,
    hooks: HookRegistry,
}

impl RemindApi {
    pub fn new(config: RemindConfig) -> Self {
        Self {
            config,
            hooks: HookRegistry::with_builtins(),
        }
    }

    pub fn with_hooks(config: RemindConfig, hooks: HookRegistry) -> Self {
        Self { config, hooks }
    }

    pub fn config(&self) -> &RemindConfig {
        &self.config
    }

    /// Register notebook-specific render hooks
    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    pub fn new_note(
        &self,
        ui: &mut dyn Confirm,
        editor: &Editor,
        notebook: &str,
        note: &str,
    ) -> Result<commands::CmdResult> {
        commands::new::run(&self.config, ui, editor, &self.hooks, notebook, note)
    }

    pub fn delete(
        &self,
        ui: &mut dyn Confirm,
        vcs: Option<&Git>,
        notebook: &str,
        note: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&self.config, ui, vcs, notebook, note)
    }

    pub fn list(
        &self,
        vcs: Option<&Git>,
        filter: Option<&str>,
        decorate: bool,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.config, vcs, filter, decorate)
    }

    pub fn find(&self, raw: &str, hint: Option<&str>) -> Result<commands::CmdResult> {
        commands::find::run(&self.config, raw, hint)
    }

    pub fn info(&self) -> Result<commands::CmdResult> {
        commands::info::run(&self.config)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel, NoteListing, NotebookListing};
