use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemindError {
    #[error("Found no match for {0}")]
    NoteNotFound(String),

    #[error("Notebook {0} does not exist")]
    NotebookNotFound(String),

    #[error("Found more than one match for {0}, specify notebook to disambiguate")]
    Ambiguous(String),

    #[error("Malformed note reference {0:?}, expected notebook/note")]
    Malformed(String),

    #[error("Note {0} already exists, use edit")]
    NoteExists(String),

    #[error("{0}")]
    Cancelled(String),

    #[error("No notebooks found")]
    NoNotebooks,

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RemindError>;
