//! # chatrs Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout chatrs. It follows the
//! same two-layer approach as the rest of the application:
//! - `ChatError`: A custom error enum using `thiserror` for the conditions callers
//!   may want to match on (empty input, out-of-range reply lookups, bad catalogs).
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible propagation
//!   with `.context(...)` at I/O boundaries.
//!
//! ## Examples
//!
//! ```rust
//! // Indexed reply lookup surfaces a typed error
//! match responder::select_at(&intent, &catalog, 7) {
//!     Ok(reply) => println!("{}", reply),
//!     Err(ChatError::OutOfRange { len, .. }) => println!("only {} replies", len),
//!     Err(e) => return Err(e.into()),
//! }
//!
//! // Add context to I/O errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read transcript: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the chatrs application.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Input cannot be empty.")]
    EmptyInput,

    #[error("Reply index {index} is out of range for intent '{intent}' ({len} replies available).")]
    OutOfRange {
        intent: String,
        index: usize,
        len: usize,
    },

    #[error("Unknown intent '{name}'.")]
    UnknownIntent { name: String },

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Transcript error: {source}")]
    Transcript {
        #[from]
        source: serde_json::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(ChatError::EmptyInput.to_string(), "Input cannot be empty.");

        let out_of_range = ChatError::OutOfRange {
            intent: "skills".into(),
            index: 5,
            len: 3,
        };
        assert_eq!(
            out_of_range.to_string(),
            "Reply index 5 is out of range for intent 'skills' (3 replies available)."
        );

        let unknown = ChatError::UnknownIntent {
            name: "weather".into(),
        };
        assert_eq!(unknown.to_string(), "Unknown intent 'weather'.");

        let config_err = ChatError::Config("exit_grace_ms too large".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: exit_grace_ms too large"
        );
    }

    #[test]
    fn test_transcript_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: ChatError = json_err.into();
        assert!(err.to_string().starts_with("Transcript error:"));
    }
}
