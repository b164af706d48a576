//! # Remind Architecture
//!
//! Remind is a **UI-agnostic notebook library**. The core knows nothing about
//! terminals: it takes regular Rust arguments, returns structured
//! `Result<CmdResult>` values, and never touches stdout, stderr, or
//! `std::process::exit`. The binary (`main.rs` plus its `args`/`prompt`
//! modules) is the only place that parses arguments, asks yes/no questions,
//! formats output, and picks exit codes.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs, args.rs, prompt.rs)
//!   └─ API facade (api.rs) — single entry point, thin dispatch
//!        └─ Commands (commands/*.rs) — business logic, no I/O assumptions
//!             └─ Addressing (registry.rs, paths.rs, model.rs)
//!             └─ Templates (template/) — resolution + rendering
//!             └─ Collaborators (vcs.rs, editor.rs) — external processes
//! ```
//!
//! ## The notes tree
//!
//! ```text
//! <root>/
//! ├── <notebook>/<note>            # plain files, content opaque
//! ├── templates/<nb>/<nb>.txt      # static template text
//! ├── templates/<nb>/<nb>.hooks    # render-hook allow-list
//! └── config.json                  # optional per-root overrides
//! ```
//!
//! Anything interactive is abstracted: confirmations go through the
//! [`ui::Confirm`] trait and template placeholders resolve through the
//! [`template::hooks::HookRegistry`], so every command is testable with a
//! scripted confirmer and a temp directory.
//!
//! ## Module overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`registry`]: notebook lifecycle and cross-notebook note lookup
//! - [`paths`]: read-only filesystem queries under the notes root
//! - [`template`]: template resolution, tokenization, and rendering
//! - [`model`]: core data types (`Notebook`, `Note`)
//! - [`config`]: explicit configuration, built once at startup
//! - [`vcs`]: optional git adapter
//! - [`editor`]: external editor integration
//! - [`ui`]: confirmation seam between core and terminal
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod paths;
pub mod registry;
pub mod template;
pub mod ui;
pub mod vcs;
