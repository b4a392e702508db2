//! # chatrs Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Entry point for the chatrs CLI, a keyword-matching portfolio chatbot.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up logging based on verbosity flags
//! - Routing execution to the command handlers
//!
//! ## Architecture
//!
//! - `bot`: the chatbot itself (catalog, classification, replies, sentiment,
//!   session log, transcripts). No terminal I/O.
//! - `commands`: one module per subcommand; the console and window front
//!   ends live here.
//! - `common`: filesystem and console output helpers.
//! - `core`: errors and configuration.
//!
//! ## Examples
//!
//! ```bash
//! # Chat in the console
//! chatrs chat
//!
//! # Chat in a full-screen window, logging to $TMPDIR/chatrs.log
//! RUST_LOG=debug chatrs window
//!
//! # Inspect the catalog with more logging
//! chatrs -vv catalog --category skills
//! ```
//!
//! Logs go to stderr, except in `window` mode where the terminal is in raw
//! mode: there, logging is only enabled when `RUST_LOG` is set and is written
//! to `chatrs.log` in the temp directory.
//!
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Chatbot logic (catalog, intents, replies, sentiment, sessions)
mod commands; // Subcommand handlers and front ends
mod common; // Shared utilities (fs, console text)
mod core; // Core infrastructure (errors, config)

const WINDOW_LOG_FILE: &str = "chatrs.log";

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "chatrs",
    about = "🤖 chatrs: Portfolio chatbot for the terminal",
    long_about = "A keyword-matching portfolio assistant with console and window front ends.\n\
                  Every session is scored for sentiment and saved as a JSON transcript.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Chat in the console.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Chat in a full-screen terminal window.
    #[command(alias = "w")]
    Window(commands::window::WindowArgs),
    /// List the categories, keywords and replies the bot knows.
    Catalog(commands::catalog::CatalogArgs),
    /// Print one reply for a category.
    Reply(commands::reply::ReplyArgs),
    /// Show which intent a message is classified as.
    Classify(commands::classify::ClassifyArgs),
    /// Summarize a saved chat transcript.
    Summary(commands::summary::SummaryArgs),
}

impl Commands {
    fn takes_over_terminal(&self) -> bool {
        matches!(self, Commands::Window(_))
    }
}

fn init_logging(verbose: u8, raw_terminal: bool) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    if raw_terminal {
        // Anything written to the terminal would corrupt the window.
        let Ok(env_filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let log_path = std::env::temp_dir().join(WINDOW_LOG_FILE);
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
            fmt::Subscriber::builder()
                .with_env_filter(env_filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .init();
        }
        return;
    }

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.command.takes_over_terminal());

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
        Commands::Window(args) => commands::window::handle_window(args).await,
        Commands::Catalog(args) => commands::catalog::handle_catalog(args).await,
        Commands::Reply(args) => commands::reply::handle_reply(args).await,
        Commands::Classify(args) => commands::classify::handle_classify(args).await,
        Commands::Summary(args) => commands::summary::handle_summary(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use assert_cmd::Command;
    use clap::CommandFactory;
    use predicates::prelude::*;

    fn chatrs_cmd() -> Command {
        Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_main_help_flag() {
        chatrs_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("chat"))
            .stdout(predicate::str::contains("window"));
    }

    #[test]
    fn test_main_version_flag() {
        chatrs_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_window_mode_is_detected() {
        let cli = Cli::try_parse_from(["chatrs", "w", "--grace-ms", "10"]).unwrap();
        assert!(cli.command.takes_over_terminal());
        let cli = Cli::try_parse_from(["chatrs", "-v", "chat", "--seed", "4"]).unwrap();
        assert!(!cli.command.takes_over_terminal());
        assert_eq!(cli.verbose, 1);
    }

    #[test]
    fn test_grace_period_is_bounded() {
        assert!(Cli::try_parse_from(["chatrs", "window", "--grace-ms", "10001"]).is_err());
    }
}
