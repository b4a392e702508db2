//! # Sentiment Scoring (`bot::sentiment`)
//!
//! File: cli/src/bot/sentiment.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Each user input is given a compound polarity score in `[-1.0, 1.0]`. The
//! scoring model itself is the VADER lexicon from the `vader_sentiment` crate;
//! this module only puts a trait in front of it so the session log can be
//! driven by fixed scores in tests.
//!
//! Scores above `0.05` count as positive, scores below `-0.05` as negative,
//! and the band in between (inclusive) as neutral.
//!
use serde::Serialize;
use std::fmt;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Compound scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Anything that can score a piece of text.
pub trait SentimentScorer {
    /// Compound polarity of `text`, in `[-1.0, 1.0]`.
    fn score(&self, text: &str) -> f64;
}

/// Closures work as scorers, which keeps tests free of the lexicon.
impl<F> SentimentScorer for F
where
    F: Fn(&str) -> f64,
{
    fn score(&self, text: &str) -> f64 {
        self(text)
    }
}

/// VADER-backed scorer. The lexicon is compiled into the crate, so building
/// one cannot fail and needs no download.
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        scores
            .get("compound")
            .copied()
            .unwrap_or(0.0)
            .clamp(-1.0, 1.0)
    }
}

/// Coarse polarity bucket of a compound score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score < NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        };
        write!(f, "{}", label)
    }
}
