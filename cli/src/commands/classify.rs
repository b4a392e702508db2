//! # Intent Check (`chatrs classify`)
//!
//! File: cli/src/commands/classify.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Prints the intent a message would be classified as and the keyword that
//! decided it, without replying or recording anything. Useful when writing a
//! custom catalog to see which entry wins for a given phrase.
//!
//! ```bash
//! chatrs classify "what did you study?"
//! # intent: education (keyword: study)
//! ```
//!
use super::session;
use crate::bot::intent::{self, Classification};
use crate::core::config;
use crate::core::error::{ChatError, Result};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// The message to classify. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Custom catalog TOML file to classify against.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub async fn handle_classify(args: ClassifyArgs) -> Result<()> {
    let text = args.text.join(" ");
    if text.trim().is_empty() {
        return Err(ChatError::EmptyInput.into());
    }
    let config = config::load_config()?;
    let catalog = session::load_catalog(args.catalog.as_deref(), &config)?;
    println!("{}", render(&intent::classify_detailed(&text, &catalog)));
    Ok(())
}

fn render(classification: &Classification) -> String {
    match &classification.matched_keyword {
        Some(keyword) => format!("intent: {} (keyword: {})", classification.intent, keyword),
        None => format!("intent: {} (no keyword matched)", classification.intent),
    }
}
