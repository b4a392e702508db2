//! # Transcript Files (`bot::transcript`)
//!
//! File: cli/src/bot/transcript.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Saves a `SessionLog` to its JSON transcript file and loads transcripts
//! back. One file is written per session; an existing file is replaced.
//!
use super::session::{parse_transcript, SessionLog, Turn};
use crate::common::fs;
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// Writes every turn of `log` to `path`.
pub fn save(log: &SessionLog, path: &Path) -> Result<()> {
    if log.is_empty() {
        debug!("No turns recorded, writing an empty transcript");
    }
    let document = log
        .serialize()
        .context("Failed to serialize chat history")?;
    fs::write_file_replacing(path, &document)?;
    info!("Saved {} turns to {}", log.len(), path.display());
    Ok(())
}

/// Reads the turns stored in the transcript at `path`.
pub fn load(path: &Path) -> Result<Vec<Turn>> {
    let document = fs::read_file_to_string(path)?;
    parse_transcript(&document)
        .with_context(|| format!("Failed to parse chat history: {}", path.display()))
}
