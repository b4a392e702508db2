//! # Category Catalog (`bot::catalog`)
//!
//! File: cli/src/bot/catalog.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The catalog is the static table the chatbot answers from: an **ordered**
//! list of intents, each with its candidate replies and trigger keywords.
//! The order of the list is the order in which the classifier tries intents,
//! so earlier entries win when keywords overlap.
//!
//! A catalog is immutable once built. It is constructed once at startup (either
//! the built-in portfolio catalog or a custom TOML file) and passed by reference
//! to the classifier and the responder.
//!
//! ## Custom catalog files
//!
//! ```toml
//! [[intents]]
//! name = "greeting"
//! replies = ["Hello!", "Hi there!"]
//! keywords = ["hello", "hi"]
//!
//! [[intents]]
//! name = "default"
//! replies = ["Sorry, I didn't understand."]
//! ```
//!
use crate::core::error::{ChatError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Name of the mandatory fallback intent.
pub const DEFAULT_INTENT: &str = "default";

/// Name reserved for the exit sentinel; catalogs may not define it.
pub const EXIT_INTENT: &str = "exit";

/// A single intent: its name, candidate replies and trigger keywords.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IntentEntry {
    pub name: String,
    #[serde(default)]
    pub replies: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl IntentEntry {
    pub fn new(name: &str, replies: &[&str], keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            replies: replies.iter().map(|r| r.to_string()).collect(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// On-disk layout of a custom catalog file.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    intents: Vec<IntentEntry>,
}

/// Ordered, validated table of intents.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCatalog {
    entries: Vec<IntentEntry>,
}

impl CategoryCatalog {
    /// Validates `entries` and builds a catalog that keeps their order.
    ///
    /// Keywords are lowercased so they compare against normalized input.
    ///
    /// # Errors
    ///
    /// Returns `ChatError::Catalog` if an intent name is empty, duplicated, or
    /// the reserved `exit`; if any keyword is empty; or if there is no `default`
    /// intent with at least one reply.
    pub fn new(entries: Vec<IntentEntry>) -> std::result::Result<Self, ChatError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(entries.len());

        for mut entry in entries {
            let name = entry.name.trim().to_string();
            if name.is_empty() {
                return Err(ChatError::Catalog("Intent names cannot be empty.".into()));
            }
            if name == EXIT_INTENT {
                return Err(ChatError::Catalog(format!(
                    "'{}' is reserved for the exit command and cannot be a catalog intent.",
                    EXIT_INTENT
                )));
            }
            if !seen.insert(name.clone()) {
                return Err(ChatError::Catalog(format!("Duplicate intent '{}'.", name)));
            }
            // An empty keyword would match every input.
            if entry.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(ChatError::Catalog(format!(
                    "Intent '{}' has an empty keyword.",
                    name
                )));
            }
            if entry.replies.is_empty() && name != DEFAULT_INTENT {
                warn!(
                    "Intent '{}' has no replies; the default replies will be used instead.",
                    name
                );
            }
            entry.name = name;
            entry.keywords = entry.keywords.iter().map(|k| k.to_lowercase()).collect();
            normalized.push(entry);
        }

        match normalized.iter().find(|e| e.name == DEFAULT_INTENT) {
            Some(default) if !default.replies.is_empty() => {}
            Some(_) => {
                return Err(ChatError::Catalog(
                    "The 'default' intent must have at least one reply.".into(),
                ))
            }
            None => {
                return Err(ChatError::Catalog(
                    "Catalog must contain a 'default' intent.".into(),
                ))
            }
        }

        debug!("Built catalog with {} intents", normalized.len());
        Ok(Self {
            entries: normalized,
        })
    }

    /// Parses a catalog from TOML text (see the module docs for the layout).
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content).context("Failed to parse catalog TOML")?;
        Ok(Self::new(file.intents)?)
    }

    /// Loads a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading catalog from: {}", path.display());
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid catalog file: {}", path.display()))
    }

    /// Loads the catalog at `path` if one is given, otherwise the built-in catalog.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::builtin()),
        }
    }

    /// Entries in classification order.
    pub fn entries(&self) -> &[IntentEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&IntentEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All intent names, in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }

    /// Keywords for `name`; empty for unknown intents.
    pub fn keywords_for(&self, name: &str) -> &[String] {
        self.get(name).map(|e| e.keywords.as_slice()).unwrap_or(&[])
    }

    /// Replies of the mandatory `default` intent.
    pub fn default_replies(&self) -> &[String] {
        // `new` guarantees the default entry exists.
        self.get(DEFAULT_INTENT)
            .map(|e| e.replies.as_slice())
            .unwrap_or(&[])
    }

    /// The built-in portfolio assistant catalog.
    pub fn builtin() -> Self {
        let entries = vec![
            IntentEntry::new(
                "greeting",
                &[
                    "Hello! I'm your portfolio assistant. How can I help you today?",
                    "Hi there! I'm here to answer questions about my portfolio. What would you like to know?",
                    "Greetings! I'm your personal portfolio assistant. Feel free to ask me anything about my background!",
                ],
                &["hello", "hi", "hey", "greetings", "good morning", "good afternoon"],
            ),
            IntentEntry::new(
                "name",
                &[
                    "I'm a portfolio assistant chatbot designed to showcase a developer's skills and projects!",
                    "My name is PortfolioBot. I'm here to help you learn more about the developer's background and work.",
                    "I'm an AI assistant created to represent a developer's portfolio. You can ask me about their skills, education, and projects.",
                ],
                &["name", "who are you", "what are you", "introduce yourself", "yourself"],
            ),
            IntentEntry::new(
                "skills",
                &[
                    "The developer has expertise in Python, JavaScript, HTML, CSS, and various frameworks. They're skilled in web development, data analysis, and software engineering principles.",
                    "Technical skills include proficiency in Python, JavaScript, React, Node.js, SQL, and cloud technologies. The developer also has experience with version control systems like Git.",
                    "The developer is experienced in full-stack development, with strengths in backend technologies like Python/Django and frontend technologies like React and Vue.js.",
                ],
                &["skill", "technology", "programming", "languages", "technologies", "abilities", "expertise"],
            ),
            IntentEntry::new(
                "education",
                &[
                    "The developer holds a Bachelor's degree in Computer Science from a reputable university. They also have several online certifications in specialized areas like machine learning and cloud computing.",
                    "Educational background includes a Computer Science degree with coursework in algorithms, data structures, databases, and software engineering. Additional certifications in modern technologies.",
                    "The developer graduated with a degree in Software Engineering and has continued learning through online courses and certifications in cutting-edge technologies.",
                ],
                &["education", "degree", "school", "university", "college", "study", "background"],
            ),
            IntentEntry::new(
                "projects",
                &[
                    "The developer has worked on several projects including a task management application, an e-commerce website, and a data visualization dashboard. Each project demonstrates different skills and technologies.",
                    "Notable projects include a weather forecasting app using Python and APIs, a blog platform built with React and Node.js, and a machine learning model for predictive analytics.",
                    "Projects showcase a variety of skills: a full-stack web application, a mobile-responsive website, and an automated data processing script. All projects are available on GitHub.",
                ],
                &["project", "work", "portfolio", "github", "repository", "applications", "apps"],
            ),
            IntentEntry::new(
                DEFAULT_INTENT,
                &[
                    "I'm not sure I understood that. Could you ask about my skills, education, or projects?",
                    "I didn't quite catch that. You can ask me about the developer's background, skills, or projects.",
                    "Sorry, I didn't understand. Try asking about skills, education, or projects.",
                    "I'm here to help you learn about the developer's portfolio. What would you like to know about their skills, education, or projects?",
                ],
                &[],
            ),
        ];
        // Built from literals that satisfy every rule checked in `new`
        // (see `test_builtin_catalog_is_valid`).
        Self { entries }
    }
}
