//! # Catalog Listing (`chatrs catalog`)
//!
//! File: cli/src/commands/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shows what the chatbot can answer. Without arguments every intent is
//! listed in classification order with its reply count and keywords, followed
//! by the built-in exit triggers. With `--category NAME` one intent's
//! keywords and numbered replies are printed; the numbers are the indexes
//! accepted by `chatrs reply --index`.
//!
//! ## Examples
//!
//! ```bash
//! chatrs catalog
//! chatrs catalog --category skills
//! chatrs catalog --catalog ./my_bot.toml
//! ```
//!
use super::session;
use crate::bot::catalog::{CategoryCatalog, EXIT_INTENT};
use crate::bot::intent::EXIT_TRIGGERS;
use crate::bot::responder::FAREWELL;
use crate::core::config;
use crate::core::error::{ChatError, Result};
use clap::Args;
use std::fmt::Write as _;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Show the keywords and replies of a single category.
    #[arg(long)]
    pub category: Option<String>,

    /// Custom catalog TOML file to list instead of the built-in one.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

pub async fn handle_catalog(args: CatalogArgs) -> Result<()> {
    let config = config::load_config()?;
    let catalog = session::load_catalog(args.catalog.as_deref(), &config)?;
    let report = match args.category.as_deref() {
        Some(name) => describe_category(&catalog, name)?,
        None => describe_catalog(&catalog)?,
    };
    print!("{report}");
    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

fn describe_catalog(catalog: &CategoryCatalog) -> Result<String> {
    let width = catalog
        .categories()
        .iter()
        .map(|name| name.len())
        .chain(std::iter::once(EXIT_INTENT.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in catalog.entries() {
        writeln!(
            out,
            "{:<width$}  {} replies  keywords: {}",
            entry.name,
            entry.replies.len(),
            join_or_none(&entry.keywords),
        )?;
    }
    let triggers: Vec<String> = EXIT_TRIGGERS.iter().map(|t| t.to_string()).collect();
    writeln!(
        out,
        "{:<width$}  1 replies  keywords: {}",
        EXIT_INTENT,
        triggers.join(", ")
    )?;
    Ok(out)
}

fn describe_category(catalog: &CategoryCatalog, name: &str) -> Result<String> {
    let (keywords, replies): (Vec<String>, Vec<String>) = if name == EXIT_INTENT {
        (
            EXIT_TRIGGERS.iter().map(|t| t.to_string()).collect(),
            vec![FAREWELL.to_string()],
        )
    } else {
        let entry = catalog.get(name).ok_or_else(|| ChatError::UnknownIntent {
            name: name.to_string(),
        })?;
        (catalog.keywords_for(name).to_vec(), entry.replies.clone())
    };

    let mut out = String::new();
    writeln!(out, "Category: {name}")?;
    writeln!(out, "Keywords: {}", join_or_none(&keywords))?;
    writeln!(out, "Replies:")?;
    for (index, reply) in replies.iter().enumerate() {
        writeln!(out, "  [{index}] {reply}")?;
    }
    Ok(out)
}
