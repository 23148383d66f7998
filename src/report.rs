//! Presentation and persistence of a [`Solution`].

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::Solution;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// First email-shaped substring of `text`.
pub fn extract_email(text: &str) -> Option<&str> {
    email_regex().find(text).map(|m| m.as_str())
}

/// Write every candidate followed by the chosen plaintext, its shift and
/// any email address it contains.
pub fn write_report<W: Write>(out: &mut W, solution: &Solution) -> io::Result<()> {
    for candidate in &solution.candidates {
        writeln!(out, "{candidate}")?;
    }
    if solution.best_text.is_empty() {
        writeln!(out, "\nNie udało się znaleźć rozwiązania.")?;
        return Ok(());
    }
    writeln!(out, "\nOdszyfrowana wiadomość: {}", solution.best_text)?;
    writeln!(out, "Ilość przesunięć: {}", solution.best_shift)?;
    if let Some(email) = extract_email(&solution.best_text) {
        writeln!(out, "Email: {email}")?;
    }
    Ok(())
}

/// Persist the plaintext verbatim. Nothing is written for an empty text.
pub fn save_solution<P: AsRef<Path>>(path: P, best_text: &str) -> io::Result<bool> {
    if best_text.is_empty() {
        return Ok(false);
    }
    fs::write(path, best_text)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_dotted_local_part() {
        let text = "adres: jutro.jest.dzisiaj@adepci.it koniec";
        assert_eq!(extract_email(text), Some("jutro.jest.dzisiaj@adepci.it"));
    }

    #[test]
    fn extracts_subdomain() {
        assert_eq!(
            extract_email("pisz na info@sub.domain.org."),
            Some("info@sub.domain.org")
        );
    }

    #[test]
    fn single_letter_tld_is_not_an_email() {
        assert_eq!(extract_email("a@b.c"), None);
        assert_eq!(extract_email("brak adresu"), None);
    }
}
