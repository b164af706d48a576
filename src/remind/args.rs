use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "remind")]
#[command(about = "Organize meeting notes into notebooks", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new note from the notebook's template
    #[command(alias = "n")]
    New {
        /// Name of notebook
        notebook: String,

        /// Name of note
        note: String,
    },

    /// Delete a note, or a whole notebook if no note is given
    #[command(alias = "rm")]
    Delete {
        /// Name of notebook
        notebook: String,

        /// Name of note
        note: Option<String>,
    },

    /// List notebooks and their notes
    #[command(alias = "ls")]
    List {
        /// Only this notebook
        notebook: Option<String>,

        /// Include git tracking info
        #[arg(long)]
        decorate: bool,

        /// Print each note on its own line as notebook/note
        #[arg(long)]
        oneline: bool,
    },

    /// Edit a note
    #[command(alias = "e")]
    Edit {
        /// Note name, optionally preceded by its notebook
        #[arg(required = true, num_args = 1..=2)]
        target: Vec<String>,
    },

    /// Find a note's path by name
    Find {
        /// Note name, optionally preceded by its notebook
        #[arg(required = true, num_args = 1..=2)]
        target: Vec<String>,
    },

    /// Print info about remind
    Info,
}

/// Split `[notebook] note` positionals into an optional hint and the note.
/// Clap guarantees one or two values.
pub fn split_target(mut target: Vec<String>) -> (Option<String>, String) {
    let note = target.pop().unwrap_or_default();
    (target.pop(), note)
}
