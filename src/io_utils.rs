use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file must be UTF-8 text.",
        WriteZero => "Disk may be full. Free up space and try again.",
        _ => "Check the path and permissions.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Convert a library error into a CLI error with a hint.
pub fn cezar_cli_error(context: &str, err: crate::CezarError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for an error variant.
pub fn cli_hint(err: &crate::CezarError) -> String {
    use crate::CezarError::*;
    match err {
        MissingFile(path) => format!(
            "file '{}' does not exist. Pass an existing file or the ciphertext itself",
            path.display()
        ),
        EmptyFile(path) => format!("file '{}' is empty. Nothing to decrypt", path.display()),
        EmptyText => "ciphertext is empty. Nothing to decrypt".to_string(),
        Config(msg) => format!("{msg}. Invalid configuration"),
        Io(io) => format!("{io}"),
        Json(e) => format!("{e}. Check the JSON syntax"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn not_found_suggests_checking_path() {
        let err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let msg = format_io_error("reading", Path::new("a.txt"), &err);
        assert!(msg.starts_with("Error reading 'a.txt'"));
        assert!(msg.contains("Check that the file exists"));
    }

    #[test]
    fn hint_names_missing_file() {
        let err = crate::CezarError::MissingFile(PathBuf::from("brak.txt"));
        let cli = cezar_cli_error("loading ciphertext", err);
        assert!(cli.to_string().contains("brak.txt"));
        assert!(std::error::Error::source(&cli).is_some());
    }
}
