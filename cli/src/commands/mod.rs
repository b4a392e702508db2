//! # chatrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! One module per top-level `chatrs` subcommand. Each defines its own
//! `clap::Args` struct and an async `handle_*` function that `main.rs`
//! dispatches to.
//!
//! ## Commands
//!
//! - `chat`: interactive console session.
//! - `window`: interactive full-screen terminal window session.
//! - `catalog`: list the intents, keywords and replies the bot knows.
//! - `reply`: print one reply for a category.
//! - `classify`: show which intent a message maps to.
//! - `summary`: summarize a saved transcript.
//!
//! `session` holds the flags and setup shared by `chat` and `window`.
//!

/// Console front end (`chatrs chat`).
pub mod chat;
/// Catalog listing (`chatrs catalog`).
pub mod catalog;
/// Intent check for a single message (`chatrs classify`).
pub mod classify;
/// One reply for a category (`chatrs reply`).
pub mod reply;
/// Shared session flags, chatbot construction and transcript persistence.
pub mod session;
/// Transcript summary (`chatrs summary`).
pub mod summary;
/// Terminal window front end (`chatrs window`).
pub mod window;
