//! # chatrs Chatbot Core (`bot`)
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Everything the chatbot does independently of how it is displayed:
//!
//! - **`catalog`**: the ordered table of intents, replies and trigger keywords.
//! - **`intent`**: keyword classification of raw input.
//! - **`responder`**: reply selection (random or by index) for an intent.
//! - **`sentiment`**: compound polarity scoring of user input.
//! - **`session`**: the append-only turn log, summaries and serialization.
//! - **`transcript`**: saving/loading session logs as JSON files.
//! - **`engine`**: `Chatbot`, which runs one turn across all of the above.
//!
//! ## Usage
//!
//! ```rust
//! use crate::bot::{catalog::CategoryCatalog, engine::Chatbot, responder, sentiment::VaderScorer};
//!
//! let mut bot = Chatbot::new(
//!     CategoryCatalog::builtin(),
//!     Box::new(VaderScorer::new()),
//!     responder::make_rng(None),
//! );
//! let exchange = bot.try_respond("tell me about your projects")?;
//! println!("{}", exchange.reply);
//! ```
//!
pub mod catalog;
pub mod engine;
pub mod intent;
pub mod responder;
pub mod sentiment;
pub mod session;
pub mod transcript;
