//! Keyword overlap scoring for Polish text.

/// Common Polish function words counted by [`KeywordScorer`].
pub const POLISH_KEYWORDS: &[&str] = &[
    "i", "w", "z", "na", "do", "jest", "jak", "aby", "czy", "jesli", "to", "nie", "się", "od",
    "za", "po", "dla", "przy", "ze", "oraz", "lub", "ale", "już", "tak", "było", "być", "może",
    "można",
];

/// Letters that only occur in Polish among Latin-script languages.
pub const POLISH_DIACRITICS: &[char] = &[
    'ą', 'ć', 'ę', 'ł', 'ń', 'ó', 'ś', 'ź', 'ż', 'Ą', 'Ć', 'Ę', 'Ł', 'Ń', 'Ó', 'Ś', 'Ź', 'Ż',
];

/// Added once when a text contains any of [`POLISH_DIACRITICS`].
pub const DIACRITIC_BONUS: u32 = 1;

/// Deterministic scorer counting exact Polish keyword tokens.
#[derive(Debug, Clone, Copy)]
pub struct KeywordScorer {
    keywords: &'static [&'static str],
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self {
            keywords: POLISH_KEYWORDS,
        }
    }
}

impl KeywordScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `text`: one point per token equal to a keyword, plus the
    /// diacritic bonus.
    ///
    /// Any non-alphanumeric character separates tokens, so `"to.jest"` is
    /// two tokens. Matching is case-insensitive and whole-token only.
    pub fn score(&self, text: &str) -> u32 {
        let lowered = text.to_lowercase();
        let hits = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty() && self.keywords.contains(token))
            .count() as u32;
        hits + self.diacritic_bonus(text)
    }

    fn diacritic_bonus(&self, text: &str) -> u32 {
        if text.chars().any(|c| POLISH_DIACRITICS.contains(&c)) {
            DIACRITIC_BONUS
        } else {
            0
        }
    }
}
