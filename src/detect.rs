//! Language identification capability used to rank candidates.

/// Classifies text as Polish or not.
pub trait LanguageDetector: Send + Sync {
    /// Confidence in `(0, 1]` that `text` is Polish, or `None` when the text
    /// is classified as another language or cannot be classified at all.
    fn polish_confidence(&self, text: &str) -> Option<f64>;
}

/// Keep only confidences a selector may rank on.
pub(crate) fn positive_confidence(confidence: Option<f64>) -> Option<f64> {
    confidence.filter(|c| c.is_finite() && *c > 0.0).map(|c| c.min(1.0))
}

#[cfg(feature = "whatlang")]
pub use self::whatlang_impl::WhatlangDetector;

#[cfg(feature = "whatlang")]
mod whatlang_impl {
    use super::LanguageDetector;
    use whatlang::{Detector, Lang};

    /// Trigram-based detector backed by the `whatlang` crate.
    pub struct WhatlangDetector {
        inner: Detector,
    }

    impl WhatlangDetector {
        pub fn new() -> Self {
            Self {
                inner: Detector::new(),
            }
        }
    }

    impl Default for WhatlangDetector {
        fn default() -> Self {
            Self::new()
        }
    }

    impl LanguageDetector for WhatlangDetector {
        fn polish_confidence(&self, text: &str) -> Option<f64> {
            let info = self.inner.detect(text)?;
            if info.lang() == Lang::Pol {
                Some(info.confidence())
            } else {
                None
            }
        }
    }
}
