//! # Intent Classification (`bot::intent`)
//!
//! File: cli/src/bot/intent.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Keyword-based intent detection. Input is lowercased and trimmed, then each
//! catalog intent is tried **in catalog order**; within an intent, keywords are
//! tried in order. The first keyword found anywhere in the input wins. There is
//! no scoring and no word-boundary check, so `"skill"` matches inside
//! `"skillet"` and `"hi"` matches inside `"this"`.
//!
//! If no catalog keyword matches, the exit triggers (`exit`, `quit`, `bye`) are
//! checked, and anything else falls through to `Intent::Default`.
//!
use super::catalog::{CategoryCatalog, DEFAULT_INTENT, EXIT_INTENT};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Substrings that end the conversation when no catalog keyword matched first.
pub const EXIT_TRIGGERS: [&str; 3] = ["exit", "quit", "bye"];

/// The classified category of one user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// A named catalog intent other than `default`.
    Category(String),
    /// The catalog's `default` intent.
    Default,
    /// The user wants to leave.
    Exit,
}

impl Intent {
    /// Maps a catalog intent name to an `Intent`.
    pub fn from_name(name: &str) -> Self {
        match name {
            DEFAULT_INTENT => Intent::Default,
            EXIT_INTENT => Intent::Exit,
            other => Intent::Category(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Intent::Category(name) => name,
            Intent::Default => DEFAULT_INTENT,
            Intent::Exit => EXIT_INTENT,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Intent::Exit)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An intent plus the keyword (or exit trigger) that selected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub intent: Intent,
    /// `None` when the input fell through to `Default`.
    pub matched_keyword: Option<String>,
}

/// Lowercases and trims raw input. No further tokenization is done.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Classifies `raw` and reports which keyword matched.
pub fn classify_detailed(raw: &str, catalog: &CategoryCatalog) -> Classification {
    let processed = normalize(raw);

    for entry in catalog.entries() {
        if let Some(keyword) = entry.keywords.iter().find(|k| processed.contains(k.as_str())) {
            debug!("Matched keyword '{}' for intent '{}'", keyword, entry.name);
            return Classification {
                intent: Intent::from_name(&entry.name),
                matched_keyword: Some(keyword.clone()),
            };
        }
    }

    if let Some(trigger) = EXIT_TRIGGERS.iter().find(|t| processed.contains(**t)) {
        debug!("Matched exit trigger '{}'", trigger);
        return Classification {
            intent: Intent::Exit,
            matched_keyword: Some(trigger.to_string()),
        };
    }

    debug!("No keyword matched, falling back to default intent");
    Classification {
        intent: Intent::Default,
        matched_keyword: None,
    }
}

/// Classifies `raw` against `catalog`. Never fails.
pub fn classify(raw: &str, catalog: &CategoryCatalog) -> Intent {
    classify_detailed(raw, catalog).intent
}
