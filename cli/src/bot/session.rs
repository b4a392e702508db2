//! # Session Log (`bot::session`)
//!
//! File: cli/src/bot/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The session log is the append-only record of one conversation. Every
//! accepted input becomes a `Turn` carrying the user's text, the bot's reply,
//! the sentiment of the user's text and a local timestamp. Turns are never
//! edited or removed.
//!
//! The log can be summarized (turn counts per sentiment bucket) and serialized
//! to the JSON transcript format:
//!
//! ```json
//! [
//!   {
//!     "timestamp": "2024-05-01 14:03:22",
//!     "user_input": "Hello",
//!     "bot_response": "Hi there! ...",
//!     "sentiment": 0.0
//!   }
//! ]
//! ```
//!
//! Timestamps are naive local time with second precision.
//!
use super::sentiment::{SentimentLabel, SentimentScorer};
use crate::core::error::ChatError;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Format used for every timestamp written by chatrs.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serde adapter that stores `NaiveDateTime` as `YYYY-MM-DD HH:MM:SS`.
mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Current local time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// One recorded exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "user_input")]
    pub user_text: String,
    #[serde(rename = "bot_response")]
    pub bot_text: String,
    pub sentiment: f64,
}

impl Turn {
    pub fn label(&self) -> SentimentLabel {
        SentimentLabel::from_score(self.sentiment)
    }
}

/// Counts over a non-empty session.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCounts {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub ended_at: NaiveDateTime,
}

/// Summary of a session. A session with no turns is `Empty`, never a
/// zero-count `Totals`.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionSummary {
    Empty,
    Totals(SummaryCounts),
}

impl SessionSummary {
    /// Summarizes `turns` as of `ended_at`.
    pub fn from_turns(turns: &[Turn], ended_at: NaiveDateTime) -> Self {
        if turns.is_empty() {
            return SessionSummary::Empty;
        }
        let count = |label: SentimentLabel| turns.iter().filter(|t| t.label() == label).count();
        let total = turns.len();
        let positive = count(SentimentLabel::Positive);
        let negative = count(SentimentLabel::Negative);
        SessionSummary::Totals(SummaryCounts {
            total,
            positive,
            negative,
            neutral: total - positive - negative,
            ended_at,
        })
    }
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionSummary::Empty => write!(f, "No chat history available."),
            SessionSummary::Totals(c) => {
                writeln!(f, "📊 CHAT SUMMARY")?;
                writeln!(f, "{}", "-".repeat(20))?;
                writeln!(f, "Total interactions: {}", c.total)?;
                writeln!(f, "Positive sentiments: {}", c.positive)?;
                writeln!(f, "Negative sentiments: {}", c.negative)?;
                writeln!(f, "Neutral sentiments: {}", c.neutral)?;
                write!(f, "Session ended at: {}", c.ended_at.format(TIMESTAMP_FORMAT))
            }
        }
    }
}

/// Append-only log of the turns in one session.
pub struct SessionLog {
    turns: Vec<Turn>,
    scorer: Box<dyn SentimentScorer>,
}

impl SessionLog {
    pub fn new(scorer: Box<dyn SentimentScorer>) -> Self {
        Self {
            turns: Vec::new(),
            scorer,
        }
    }

    /// Scores `user_text`, stamps the current time and appends a turn.
    pub fn record(&mut self, user_text: &str, bot_text: &str) -> &Turn {
        self.record_at(user_text, bot_text, now())
    }

    /// Like `record`, with an explicit timestamp.
    pub fn record_at(&mut self, user_text: &str, bot_text: &str, timestamp: NaiveDateTime) -> &Turn {
        let sentiment = self.scorer.score(user_text);
        debug!(sentiment, "Recording turn {}", self.turns.len() + 1);
        self.turns.push(Turn {
            timestamp,
            user_text: user_text.to_string(),
            bot_text: bot_text.to_string(),
            sentiment,
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Summary as of now.
    pub fn summarize(&self) -> SessionSummary {
        SessionSummary::from_turns(self.turns(), now())
    }

    /// Serializes all turns, in order, as a pretty-printed JSON array.
    pub fn serialize(&self) -> std::result::Result<String, ChatError> {
        Ok(serde_json::to_string_pretty(self.turns())?)
    }
}

/// Parses a transcript document produced by `SessionLog::serialize`.
/// Fields beyond the turn record are ignored.
pub fn parse_transcript(document: &str) -> std::result::Result<Vec<Turn>, ChatError> {
    Ok(serde_json::from_str(document)?)
}
