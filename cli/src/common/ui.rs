//! # Console Text (`common::ui`)
//!
//! File: cli/src/common/ui.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The fixed pieces of console output: the session banner, the `You: `
//! prompt and `Bot: ` reply lines. Every helper writes to a generic
//! `io::Write` so the exact output can be checked in tests; the `chat`
//! command passes a locked stdout.
//!
use std::io::{self, Write};

pub const BANNER_TITLE: &str = "🤖 PORTFOLIO CHATBOT";
pub const BANNER_WIDTH: usize = 50;
pub const USER_PROMPT: &str = "You: ";
pub const BOT_PREFIX: &str = "Bot: ";

/// Prints the title framed by two rules of `=`.
pub fn print_banner<W: Write>(out: &mut W) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    writeln!(out, "{rule}")?;
    writeln!(out, "{BANNER_TITLE}")?;
    writeln!(out, "{rule}")
}

/// Prints the input prompt without a newline and flushes so it shows
/// before the blocking read.
pub fn print_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\n{USER_PROMPT}")?;
    out.flush()
}

pub fn print_reply<W: Write>(out: &mut W, reply: &str) -> io::Result<()> {
    writeln!(out, "\n{BOT_PREFIX}{reply}")
}

/// A one-line notice from the bot that is not a catalog reply.
pub fn print_notice<W: Write>(out: &mut W, notice: &str) -> io::Result<()> {
    writeln!(out, "{BOT_PREFIX}{notice}")
}
