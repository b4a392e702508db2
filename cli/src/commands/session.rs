//! # Shared Session Setup (`commands::session`)
//!
//! File: cli/src/commands/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Both interactive front ends (`chat` and `window`) accept the same session
//! flags, build a `Chatbot` the same way and persist the transcript the same
//! way when the session ends. That shared plumbing lives here.
//!
//! Flag values win over configuration file values, which win over defaults.
//!
//! `TerminationSignals` covers the ways a session can be stopped from outside
//! the input loop: the terminal going away (SIGHUP) or a polite kill
//! (SIGTERM). Front ends treat either like Ctrl+C, so the transcript is still
//! saved.
//!
use crate::bot::catalog::CategoryCatalog;
use crate::bot::engine::Chatbot;
use crate::bot::responder;
use crate::bot::sentiment::VaderScorer;
use crate::bot::transcript;
use crate::core::config::Config;
use crate::core::error::Result;
#[cfg(unix)]
use anyhow::Context;
use clap::Args;
use std::path::{Path, PathBuf};
#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};
use tracing::{debug, error};

/// Flags shared by the interactive commands.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Where to write the session transcript (overrides the configured file).
    #[arg(long, short)]
    pub transcript: Option<PathBuf>,

    /// Seed for reply selection, for reproducible conversations.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Custom catalog TOML file to answer from instead of the built-in one.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Which front end a session belongs to; selects the default transcript file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    Console,
    Window,
}

/// Effective settings for one session after merging flags and config.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub transcript: PathBuf,
    pub seed: Option<u64>,
    pub catalog: Option<PathBuf>,
}

impl SessionSettings {
    pub fn resolve(args: &SessionArgs, config: &Config, front_end: FrontEnd) -> Self {
        let configured_transcript = match front_end {
            FrontEnd::Console => &config.transcript.console_file,
            FrontEnd::Window => &config.transcript.window_file,
        };
        Self {
            transcript: args
                .transcript
                .clone()
                .unwrap_or_else(|| PathBuf::from(configured_transcript)),
            seed: args.seed.or(config.responder.seed),
            catalog: args
                .catalog
                .clone()
                .or_else(|| config.responder.catalog_file.as_ref().map(PathBuf::from)),
        }
    }
}

/// Catalog for the non-interactive commands: the `--catalog` flag, else the
/// configured catalog file, else the built-in catalog.
pub fn load_catalog(flag: Option<&Path>, config: &Config) -> Result<CategoryCatalog> {
    let configured = config.responder.catalog_file.as_deref().map(Path::new);
    CategoryCatalog::load_or_builtin(flag.or(configured))
}

/// Loads the catalog, sets up the VADER scorer and seeds the RNG.
pub fn build_chatbot(settings: &SessionSettings) -> Result<Chatbot> {
    let catalog = CategoryCatalog::load_or_builtin(settings.catalog.as_deref())?;
    debug!("Session settings: {:?}", settings);
    let bot = Chatbot::new(
        catalog,
        Box::new(VaderScorer::new()),
        responder::make_rng(settings.seed),
    );
    debug!("Answering from {} intents", bot.catalog().entries().len());
    Ok(bot)
}

/// Hangup and terminate handlers, registered once per session.
///
/// Registering replaces the default "exit immediately" action for the whole
/// process, so create this before the input loop starts.
pub struct TerminationSignals {
    #[cfg(unix)]
    hangup: Signal,
    #[cfg(unix)]
    terminate: Signal,
}

impl TerminationSignals {
    #[cfg(unix)]
    pub fn install() -> Result<Self> {
        Ok(Self {
            hangup: signal(SignalKind::hangup()).context("Failed to listen for SIGHUP")?,
            terminate: signal(SignalKind::terminate()).context("Failed to listen for SIGTERM")?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> Result<Self> {
        Ok(Self {})
    }

    /// Waits for the next signal and returns its name.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.hangup.recv() => "SIGHUP",
            _ = self.terminate.recv() => "SIGTERM",
        }
    }

    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> &'static str {
        std::future::pending().await
    }
}

/// Saves the transcript, reporting (not propagating) failures so the process
/// can still exit cleanly. Returns whether the save succeeded.
pub fn persist_transcript(bot: &Chatbot, path: &Path) -> bool {
    match transcript::save(bot.log(), path) {
        Ok(()) => true,
        Err(e) => {
            error!("Failed to save chat history: {:?}", e);
            eprintln!("Error: Failed to save chat history to {}: {:#}", path.display(), e);
            false
        }
    }
}
