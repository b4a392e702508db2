//! # chatrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers that are not part of the chatbot logic itself:
//!
//! - **`fs`**: reading files and replacing transcript files safely.
//! - **`ui`**: console text (banner, prompt, reply and status lines).
//!
//! Command handlers import these directly, e.g. `crate::common::ui::print_reply`.
//!

/// Filesystem helpers (directory creation, reading, replace-on-write).
pub mod fs;
/// Console output helpers shared by the `chat` command.
pub mod ui;
