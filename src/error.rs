use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CezarError {
    /// Argument looks like a file name but no such file exists.
    #[error("file '{}' does not exist", .0.display())]
    MissingFile(PathBuf),

    /// Input file exists but holds only whitespace.
    #[error("file '{}' is empty", .0.display())]
    EmptyFile(PathBuf),

    /// Literal ciphertext argument is blank.
    #[error("ciphertext is empty")]
    EmptyText,

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config parsing or report serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
