//! # Transcript Summary (`chatrs summary`)
//!
//! File: cli/src/commands/summary.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Loads a saved transcript and prints the same summary block shown at the
//! end of a console session. The end time is the timestamp of the last
//! recorded turn rather than the current time.
//!
//! ```bash
//! chatrs summary chat_history.json
//! ```
//!
use crate::bot::session::{now, SessionSummary};
use crate::bot::transcript;
use crate::core::error::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Transcript file written by `chatrs chat` or `chatrs window`.
    pub file: PathBuf,
}

pub async fn handle_summary(args: SummaryArgs) -> Result<()> {
    let turns = transcript::load(&args.file)?;
    info!("Loaded {} turns from {}", turns.len(), args.file.display());
    let ended_at = turns.last().map(|t| t.timestamp).unwrap_or_else(now);
    println!("{}", SessionSummary::from_turns(&turns, ended_at));
    Ok(())
}
