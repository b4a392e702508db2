//! # Console Chat (`chatrs chat`)
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Runs an interactive chat session on stdin/stdout:
//!
//! 1. Prints the banner and an opening greeting.
//! 2. Reads one line at a time after a `You: ` prompt and prints the bot's
//!    reply after `Bot: `. Blank lines are re-prompted and not recorded.
//! 3. Ends on an exit phrase (after the farewell), Ctrl+C, or end of input.
//! 4. Prints the session summary and saves the transcript. This happens on
//!    every exit path, including a failed read.
//!
//! Lines are read on a dedicated thread that forwards them over a channel, so
//! Ctrl+C is handled immediately even while waiting for input. SIGHUP (the
//! terminal was closed) and SIGTERM end the session the same way as Ctrl+C.
//! Output after the loop never panics, since the terminal may be gone by then.
//!
//! ## Examples
//!
//! ```bash
//! chatrs chat
//! chatrs chat --seed 42 --transcript ./logs/today.json
//! printf 'hello\nquit\n' | chatrs chat
//! ```
//!
use super::session::{self, FrontEnd, SessionArgs, SessionSettings, TerminationSignals};
use crate::bot::engine::Chatbot;
use crate::bot::session::SessionSummary;
use crate::common::ui;
use crate::core::config;
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use clap::Args;
use std::io::{self, BufRead, Write};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

const EMPTY_INPUT_NOTICE: &str = "Please enter a message.";
const INTERRUPTED_NOTICE: &str = "👋 Session ended by user. Goodbye!";

#[derive(Args, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

/// How the input loop finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    /// The user typed an exit phrase and got the farewell.
    Farewell,
    /// Ctrl+C, SIGHUP or SIGTERM.
    Interrupted,
    /// stdin reached end of file.
    InputClosed,
}

pub async fn handle_chat(args: ChatArgs) -> Result<()> {
    let config = config::load_config()?;
    let settings = SessionSettings::resolve(&args.session, &config, FrontEnd::Console);
    let mut bot = session::build_chatbot(&settings)?;
    let mut signals = TerminationSignals::install()?;
    let mut out = io::stdout();

    ui::print_banner(&mut out)?;
    let greeting = bot.greeting();
    ui::print_reply(&mut out, &greeting)?;

    let mut lines = spawn_line_reader();
    let outcome = converse(&mut bot, &mut lines, &mut signals, &mut out).await;
    debug!("Input loop finished: {:?}", outcome);

    let end = match &outcome {
        Ok(end) => Some(*end),
        Err(e) => {
            error!("Chat session aborted: {:?}", e);
            None
        }
    };
    if let Err(e) = print_ending(&mut out, end, &bot.summary()) {
        debug!("Could not print the session summary: {}", e);
    }
    if session::persist_transcript(&bot, &settings.transcript) {
        if let Err(e) = writeln!(out, "\n📝 Chat history saved to {}", settings.transcript.display()) {
            debug!("Could not report the transcript path: {}", e);
        }
    }

    outcome.map(|_| ())
}

/// Goodbye notice (unless the user said goodbye themselves) and the summary.
fn print_ending<W: Write>(
    out: &mut W,
    end: Option<SessionEnd>,
    summary: &SessionSummary,
) -> io::Result<()> {
    if matches!(end, Some(SessionEnd::Interrupted | SessionEnd::InputClosed)) {
        writeln!(out, "\n\n{INTERRUPTED_NOTICE}")?;
    }
    writeln!(out, "\n{summary}")
}

/// Reads stdin line by line on a plain thread. The channel closes at end of
/// input or after forwarding the first read error.
fn spawn_line_reader() -> mpsc::UnboundedReceiver<io::Result<String>> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

/// The prompt/reply loop. Returns how the session ended; a read failure is
/// returned as an error after nothing further has been recorded.
async fn converse<W: Write>(
    bot: &mut Chatbot,
    lines: &mut mpsc::UnboundedReceiver<io::Result<String>>,
    signals: &mut TerminationSignals,
    out: &mut W,
) -> Result<SessionEnd> {
    let interrupt = tokio::signal::ctrl_c();
    tokio::pin!(interrupt);

    loop {
        ui::print_prompt(out)?;

        let next = tokio::select! {
            _ = &mut interrupt => {
                info!("Interrupted by user");
                return Ok(SessionEnd::Interrupted);
            }
            name = signals.recv() => {
                info!("Received {}, ending session", name);
                return Ok(SessionEnd::Interrupted);
            }
            next = lines.recv() => next,
        };
        let line = match next {
            None => return Ok(SessionEnd::InputClosed),
            Some(read) => read.context("Failed to read from stdin")?,
        };

        match bot.try_respond(&line) {
            Ok(exchange) => {
                ui::print_reply(out, &exchange.reply)?;
                if exchange.ends_session() {
                    return Ok(SessionEnd::Farewell);
                }
            }
            Err(ChatError::EmptyInput) => ui::print_notice(out, EMPTY_INPUT_NOTICE)?,
            Err(e) => return Err(e.into()),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::catalog::CategoryCatalog;
    use crate::bot::responder::{make_rng, FAREWELL};

    fn bot() -> Chatbot {
        Chatbot::new(
            CategoryCatalog::builtin(),
            Box::new(|_: &str| 0.0),
            make_rng(Some(5)),
        )
    }

    fn signals() -> TerminationSignals {
        TerminationSignals::install().unwrap()
    }

    fn feed(inputs: &[&str]) -> mpsc::UnboundedReceiver<io::Result<String>> {
        let (tx, rx) = mpsc::unbounded_channel();
        for input in inputs {
            tx.send(Ok(input.to_string())).unwrap();
        }
        rx
    }

    #[tokio::test]
    async fn test_farewell_ends_loop() {
        let mut bot = bot();
        let mut lines = feed(&["hello", "   ", "quit", "never read"]);
        let mut out = Vec::new();

        let end = converse(&mut bot, &mut lines, &mut signals(), &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(end, SessionEnd::Farewell);
        assert!(text.contains(EMPTY_INPUT_NOTICE));
        assert!(text.contains(&format!("Bot: {FAREWELL}")));
        assert_eq!(bot.log().len(), 2);
    }

    #[tokio::test]
    async fn test_end_of_input() {
        let mut bot = bot();
        let mut lines = feed(&["what are your skills?"]);
        let mut out = Vec::new();

        let end = converse(&mut bot, &mut lines, &mut signals(), &mut out).await.unwrap();
        assert_eq!(end, SessionEnd::InputClosed);
        assert_eq!(bot.log().len(), 1);
    }

    #[tokio::test]
    async fn test_read_error_is_reported() {
        let mut bot = bot();
        let (tx, mut lines) = mpsc::unbounded_channel();
        tx.send(Ok("hi".to_string())).unwrap();
        tx.send(Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")))
            .unwrap();
        let mut out = Vec::new();

        let err = converse(&mut bot, &mut lines, &mut signals(), &mut out).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read from stdin"));
        // The turn before the failure is kept for persisting.
        assert_eq!(bot.log().len(), 1);
    }

    #[test]
    fn test_ending_output() {
        let summary = SessionSummary::Empty;
        let mut out = Vec::new();
        print_ending(&mut out, Some(SessionEnd::Interrupted), &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(INTERRUPTED_NOTICE));
        assert!(text.ends_with("No chat history available.\n"));

        let mut out = Vec::new();
        print_ending(&mut out, Some(SessionEnd::Farewell), &summary).unwrap();
        assert!(!String::from_utf8(out).unwrap().contains(INTERRUPTED_NOTICE));
    }
}
