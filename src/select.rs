//! Brute-force candidate generation and selection.
//!
//! Every shift in `0..26` produces one candidate. Candidates the detector
//! classifies as Polish compete on confidence; when none is classified the
//! best keyword score wins, and with no signal at all shift 0 is returned.
//! Ties always go to the lowest shift because only a strictly better value
//! replaces the running best.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::detect::{positive_confidence, LanguageDetector};
use crate::keywords::KeywordScorer;
use crate::shift::{decrypt, SHIFT_SPACE};

/// Signals gathered for a single candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub shift: u8,
    /// Keyword overlap score, computed for every candidate.
    pub score: u32,
    /// Detector confidence, present only when classified as Polish.
    pub confidence: Option<f64>,
}

/// How the winning candidate was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    /// The detector classified the winner as Polish.
    Detected { confidence: f64 },
    /// Nothing was detected; the highest keyword score won.
    KeywordFallback { score: u32 },
    /// No signal anywhere; the unshifted text is returned.
    Default,
}

/// Outcome of breaking one ciphertext.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub best_text: String,
    pub best_shift: u8,
    /// `candidates[s]` is the ciphertext decrypted with shift `s`.
    pub candidates: Vec<String>,
    pub evaluations: Vec<Evaluation>,
    pub verdict: Verdict,
}

/// Ranks the 26 decryptions of a ciphertext.
#[derive(Clone, Copy)]
pub struct Selector<'a> {
    scorer: KeywordScorer,
    detector: Option<&'a dyn LanguageDetector>,
}

impl Default for Selector<'_> {
    fn default() -> Self {
        Self::keyword_only()
    }
}

impl<'a> Selector<'a> {
    /// Selector relying solely on keyword scoring.
    pub fn keyword_only() -> Self {
        Self {
            scorer: KeywordScorer::new(),
            detector: None,
        }
    }

    /// Selector that consults `detector` first and falls back to keywords.
    pub fn with_detector(detector: &'a dyn LanguageDetector) -> Self {
        Self {
            scorer: KeywordScorer::new(),
            detector: Some(detector),
        }
    }

    pub fn evaluate(&self, shift: u8, candidate: &str) -> Evaluation {
        let confidence = self
            .detector
            .and_then(|d| positive_confidence(d.polish_confidence(candidate)));
        Evaluation {
            shift,
            score: self.scorer.score(candidate),
            confidence,
        }
    }

    pub fn select(&self, ciphertext: &str) -> Solution {
        let candidates: Vec<String> = (0..SHIFT_SPACE)
            .map(|shift| decrypt(ciphertext, shift as i64))
            .collect();
        let evaluations: Vec<Evaluation> = candidates
            .iter()
            .zip(0..SHIFT_SPACE)
            .map(|(candidate, shift)| {
                let eval = self.evaluate(shift, candidate);
                debug!(
                    shift,
                    score = eval.score,
                    confidence = ?eval.confidence,
                    "evaluated candidate"
                );
                eval
            })
            .collect();

        let (best_shift, verdict) = pick(&evaluations);
        match verdict {
            Verdict::Detected { confidence } => {
                info!(shift = best_shift, confidence, "selected detected candidate");
            }
            Verdict::KeywordFallback { score } => {
                warn!(
                    shift = best_shift,
                    score, "no candidate detected as Polish, using keyword score"
                );
            }
            Verdict::Default => {
                warn!("no candidate carries any Polish signal, returning shift 0");
            }
        }

        let best_text = candidates
            .get(best_shift as usize)
            .cloned()
            .unwrap_or_default();
        Solution {
            best_text,
            best_shift,
            candidates,
            evaluations,
            verdict,
        }
    }
}

/// Reduce evaluations in ascending shift order to the winning shift.
fn pick(evaluations: &[Evaluation]) -> (u8, Verdict) {
    let mut detected: Option<(u8, f64)> = None;
    for eval in evaluations {
        if let Some(confidence) = eval.confidence {
            if detected.map_or(true, |(_, best)| confidence > best) {
                detected = Some((eval.shift, confidence));
            }
        }
    }
    if let Some((shift, confidence)) = detected {
        return (shift, Verdict::Detected { confidence });
    }

    let mut best: Option<(u8, u32)> = None;
    for eval in evaluations {
        if eval.score > best.map_or(0, |(_, score)| score) {
            best = Some((eval.shift, eval.score));
        }
    }
    match best {
        Some((shift, score)) => (shift, Verdict::KeywordFallback { score }),
        None => (0, Verdict::Default),
    }
}

/// Break `ciphertext` with keyword scoring only.
pub fn select(ciphertext: &str) -> Solution {
    Selector::keyword_only().select(ciphertext)
}
