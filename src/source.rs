//! Ciphertext acquisition from a file or a literal argument.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::CezarError;

/// Extensions that mark an argument as a file path rather than ciphertext.
pub const FILE_EXTENSIONS: &[&str] = &["txt", "csv", "dat", "text"];

/// Resolve the ciphertext to break.
///
/// `None` reads `default_path`. An argument naming an existing file is read
/// from disk; one that merely looks like a file name is an error; anything
/// else is taken as the ciphertext itself. The result is always trimmed and
/// never empty.
pub fn load_ciphertext(arg: Option<&str>, default_path: &Path) -> Result<String, CezarError> {
    let source = match arg {
        Some(source) => source,
        None => return read_file(default_path),
    };

    let path = Path::new(source);
    if path.is_file() {
        read_file(path)
    } else if looks_like_file(source) {
        Err(CezarError::MissingFile(path.to_path_buf()))
    } else {
        let text = source.trim();
        if text.is_empty() {
            return Err(CezarError::EmptyText);
        }
        debug!(chars = text.chars().count(), "using literal ciphertext");
        Ok(text.to_string())
    }
}

fn looks_like_file(source: &str) -> bool {
    let lower = source.to_lowercase();
    FILE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

fn read_file(path: &Path) -> Result<String, CezarError> {
    if !path.is_file() {
        return Err(CezarError::MissingFile(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    let text = text.trim();
    if text.is_empty() {
        return Err(CezarError::EmptyFile(path.to_path_buf()));
    }
    debug!(path = %path.display(), "read ciphertext file");
    Ok(text.to_string())
}
