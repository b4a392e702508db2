//! # chatrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the infrastructure components shared by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ChatError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
