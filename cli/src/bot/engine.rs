//! # Chatbot Engine (`bot::engine`)
//!
//! File: cli/src/bot/engine.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `Chatbot` wires the pieces together for one session: it owns the catalog,
//! the reply RNG and the session log, and runs a single turn as
//! classify → select → record. Both front ends (console and window) drive a
//! `Chatbot`; neither contains any chat logic of its own.
//!
use super::catalog::CategoryCatalog;
use super::intent::{self, Intent};
use super::responder;
use super::sentiment::SentimentScorer;
use super::session::{SessionLog, SessionSummary, Turn};
use crate::core::error::ChatError;
use rand::rngs::StdRng;
use tracing::info;

/// Category used for the unsolicited greeting at session start.
const GREETING_CATEGORY: &str = "greeting";

/// The outcome of one accepted input.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub intent: Intent,
    pub reply: String,
    pub turn: Turn,
}

impl Exchange {
    /// True when the conversation should end after showing this reply.
    pub fn ends_session(&self) -> bool {
        self.intent.is_exit()
    }
}

pub struct Chatbot {
    catalog: CategoryCatalog,
    rng: StdRng,
    log: SessionLog,
}

impl Chatbot {
    pub fn new(catalog: CategoryCatalog, scorer: Box<dyn SentimentScorer>, rng: StdRng) -> Self {
        Self {
            catalog,
            rng,
            log: SessionLog::new(scorer),
        }
    }

    /// Opening line shown when a session starts. Not recorded in the log.
    pub fn greeting(&mut self) -> String {
        let intent = match self.catalog.get(GREETING_CATEGORY) {
            Some(_) => Intent::from_name(GREETING_CATEGORY),
            None => Intent::Default,
        };
        responder::select(&intent, &self.catalog, &mut self.rng)
    }

    /// Runs one turn for `input`.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::EmptyInput` for empty or whitespace-only input; nothing
    /// is classified or logged in that case.
    pub fn try_respond(&mut self, input: &str) -> std::result::Result<Exchange, ChatError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let intent = intent::classify(trimmed, &self.catalog);
        let reply = responder::select(&intent, &self.catalog, &mut self.rng);
        let turn = self.log.record(trimmed, &reply).clone();
        info!(intent = %intent, sentiment = turn.sentiment, "Handled turn {}", self.log.len());

        Ok(Exchange {
            intent,
            reply,
            turn,
        })
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn summary(&self) -> SessionSummary {
        self.log.summarize()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::catalog::IntentEntry;
    use crate::bot::responder::{make_rng, FAREWELL};

    fn bot() -> Chatbot {
        Chatbot::new(
            CategoryCatalog::builtin(),
            Box::new(|_: &str| 0.0),
            make_rng(Some(11)),
        )
    }

    #[test]
    fn test_hello_scenario() {
        let mut bot = bot();
        let exchange = bot.try_respond("Hello").unwrap();
        assert_eq!(exchange.intent, Intent::Category("greeting".into()));
        let greetings = &bot.catalog().get("greeting").unwrap().replies;
        assert_eq!(greetings.len(), 3);
        assert!(greetings.contains(&exchange.reply));
        assert!(!exchange.ends_session());
        assert_eq!(bot.log().len(), 1);
    }

    #[test]
    fn test_whitespace_input_is_ignored() {
        let mut bot = bot();
        assert!(matches!(bot.try_respond("   "), Err(ChatError::EmptyInput)));
        assert!(matches!(bot.try_respond(""), Err(ChatError::EmptyInput)));
        assert!(bot.log().is_empty());
        assert_eq!(bot.summary(), SessionSummary::Empty);
    }

    #[test]
    fn test_quit_scenario() {
        let mut bot = bot();
        let exchange = bot.try_respond("quit").unwrap();
        assert_eq!(exchange.intent, Intent::Exit);
        assert_eq!(exchange.reply, FAREWELL);
        assert!(exchange.ends_session());
        // The farewell turn is still recorded.
        assert_eq!(bot.log().turns()[0].bot_text, FAREWELL);
    }

    #[test]
    fn test_turn_stores_trimmed_input() {
        let mut bot = bot();
        let exchange = bot.try_respond("  tell me about your skills \n").unwrap();
        assert_eq!(exchange.intent, Intent::Category("skills".into()));
        assert_eq!(exchange.turn.user_text, "tell me about your skills");
        assert_eq!(exchange.turn.bot_text, exchange.reply);
    }

    #[test]
    fn test_sentiment_summary_scenario() {
        let scores = [("great", 0.6), ("meh", -0.2), ("ok", 0.0)];
        let mut bot = Chatbot::new(
            CategoryCatalog::builtin(),
            Box::new(move |text: &str| {
                scores
                    .iter()
                    .find(|(word, _)| *word == text)
                    .map(|(_, s)| *s)
                    .unwrap_or(0.0)
            }),
            make_rng(Some(3)),
        );
        for (word, _) in scores {
            bot.try_respond(word).unwrap();
        }
        match bot.summary() {
            SessionSummary::Totals(c) => {
                assert_eq!((c.total, c.positive, c.negative, c.neutral), (3, 1, 1, 1));
            }
            SessionSummary::Empty => panic!("expected totals"),
        }
    }

    #[test]
    fn test_greeting_without_greeting_category_uses_default() {
        let catalog = CategoryCatalog::new(vec![IntentEntry::new("default", &["Welcome."], &[])]).unwrap();
        let mut bot = Chatbot::new(catalog, Box::new(|_: &str| 0.0), make_rng(Some(1)));
        assert_eq!(bot.greeting(), "Welcome.");
        assert!(bot.log().is_empty());
    }

    #[test]
    fn test_builtin_greeting_is_a_greeting_reply() {
        let mut bot = bot();
        let greeting = bot.greeting();
        assert!(bot.catalog().get("greeting").unwrap().replies.contains(&greeting));
    }
}
