//! Brute-force breaker for Caesar-shifted Polish text.
//!
//! [`decrypt`] rotates letters back by a shift; [`select`] tries all 26
//! shifts and picks the candidate that looks most like Polish, using keyword
//! overlap and, optionally, a [`LanguageDetector`].

pub mod config;
pub mod detect;
pub mod error;
pub mod io_utils;
pub mod keywords;
pub mod report;
pub mod select;
pub mod shift;
pub mod source;

pub use config::{Config, Strategy};
#[cfg(feature = "whatlang")]
pub use detect::WhatlangDetector;
pub use detect::LanguageDetector;
pub use error::CezarError;
pub use keywords::{KeywordScorer, DIACRITIC_BONUS, POLISH_DIACRITICS, POLISH_KEYWORDS};
pub use report::{extract_email, save_solution, write_report};
pub use select::{select, Evaluation, Selector, Solution, Verdict};
pub use shift::{decrypt, encrypt, normalize_shift, SHIFT_SPACE};
pub use source::load_ciphertext;
