//! # Single Reply (`chatrs reply`)
//!
//! File: cli/src/commands/reply.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Prints one reply for a category without starting a session. By default
//! the reply is picked at random (an unknown category falls back to the
//! default replies, as in a conversation). `--index N` prints exactly the
//! N-th reply and fails when the category or index does not exist.
//!
//! ## Examples
//!
//! ```bash
//! chatrs reply skills
//! chatrs reply skills --seed 3
//! chatrs reply projects --index 0
//! ```
//!
use super::session;
use crate::bot::catalog::CategoryCatalog;
use crate::bot::intent::Intent;
use crate::bot::responder;
use crate::core::config;
use crate::core::error::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReplyArgs {
    /// Category to answer from (e.g. greeting, skills, exit).
    pub category: String,

    /// Print the reply at this zero-based index instead of a random one.
    #[arg(long, short)]
    pub index: Option<usize>,

    /// Seed for the random pick.
    #[arg(long, conflicts_with = "index")]
    pub seed: Option<u64>,

    /// Custom catalog TOML file to answer from instead of the built-in one.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub async fn handle_reply(args: ReplyArgs) -> Result<()> {
    let config = config::load_config()?;
    let catalog = session::load_catalog(args.catalog.as_deref(), &config)?;
    let seed = args.seed.or(config.responder.seed);
    println!("{}", reply_for(&catalog, &args.category, args.index, seed)?);
    Ok(())
}

fn reply_for(
    catalog: &CategoryCatalog,
    category: &str,
    index: Option<usize>,
    seed: Option<u64>,
) -> Result<String> {
    let intent = Intent::from_name(category.trim());
    match index {
        Some(index) => Ok(responder::select_at(&intent, catalog, index)?.to_string()),
        None => {
            let mut rng = responder::make_rng(seed);
            Ok(responder::select(&intent, catalog, &mut rng))
        }
    }
}
