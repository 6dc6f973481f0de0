//! Headline polarity scoring.
//!
//! The scorer is an injection seam: the pipeline only needs a total function
//! from text to a compound score in `[-1.0, 1.0]`. The default implementation
//! wraps the VADER lexicon analyzer.

use vader_sentiment::SentimentIntensityAnalyzer;

/// A polarity model over arbitrary text.
///
/// Implementations are total: every input yields a score in `[-1.0, 1.0]`,
/// with 0.0 for neutral or unscorable text. There is no failure mode.
pub trait SentimentModel: Send + Sync {
    /// Score one headline.
    fn score(&self, text: &str) -> f64;
}

/// The default lexicon-based VADER scorer.
pub struct VaderModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderModel {
    /// Build an analyzer with the bundled VADER lexicon.
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for VaderModel {
    fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }
        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}
