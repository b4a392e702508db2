//! # Response Selection (`bot::responder`)
//!
//! File: cli/src/bot/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns a classified `Intent` into a reply string:
//! - `Exit` always yields the fixed `FAREWELL`, never a catalog entry.
//! - A catalog intent yields one of its replies, chosen uniformly at random.
//! - Unknown intents, and intents with no replies, fall back to `default`.
//!
//! The random source is a parameter so callers (and tests) decide whether
//! selection is seeded. `select_at` gives deterministic, index-based access.
//!
use super::catalog::CategoryCatalog;
use super::intent::Intent;
use crate::core::error::ChatError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Reply given when the user leaves.
pub const FAREWELL: &str = "Thank you for chatting! Have a great day!";

/// Builds the RNG used for reply selection: seeded when `seed` is set,
/// otherwise seeded from OS entropy.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Returns the candidate list `select` draws from for `intent`.
///
/// `None` for `Exit`, which is answered by `FAREWELL` instead.
fn candidates<'a>(intent: &Intent, catalog: &'a CategoryCatalog) -> Option<&'a [String]> {
    if intent.is_exit() {
        return None;
    }
    let replies = catalog
        .get(intent.name())
        .map(|entry| entry.replies.as_slice())
        .filter(|replies| !replies.is_empty())
        .unwrap_or_else(|| catalog.default_replies());
    Some(replies)
}

/// Picks a reply for `intent`, uniformly at random from its candidates.
pub fn select<R: Rng + ?Sized>(intent: &Intent, catalog: &CategoryCatalog, rng: &mut R) -> String {
    match candidates(intent, catalog) {
        None => FAREWELL.to_string(),
        Some(replies) => replies
            .choose(rng)
            .cloned()
            // Only reachable with an empty default list, which the catalog rejects.
            .unwrap_or_else(|| FAREWELL.to_string()),
    }
}

/// Returns the reply at `index` for `intent`.
///
/// `Exit` behaves as a one-element list holding `FAREWELL`.
///
/// # Errors
///
/// - `ChatError::UnknownIntent` if the intent is not in the catalog.
/// - `ChatError::OutOfRange` unless `index < len(replies)`.
pub fn select_at<'a>(
    intent: &Intent,
    catalog: &'a CategoryCatalog,
    index: usize,
) -> std::result::Result<&'a str, ChatError> {
    if intent.is_exit() {
        return match index {
            0 => Ok(FAREWELL),
            _ => Err(ChatError::OutOfRange {
                intent: intent.name().to_string(),
                index,
                len: 1,
            }),
        };
    }

    let entry = catalog
        .get(intent.name())
        .ok_or_else(|| ChatError::UnknownIntent {
            name: intent.name().to_string(),
        })?;
    entry
        .replies
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| ChatError::OutOfRange {
            intent: entry.name.clone(),
            index,
            len: entry.replies.len(),
        })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::catalog::IntentEntry;

    fn category(name: &str) -> Intent {
        Intent::Category(name.to_string())
    }

    #[test]
    fn test_exit_always_farewell() {
        let catalog = CategoryCatalog::builtin();
        let mut rng = make_rng(Some(1));
        for _ in 0..20 {
            assert_eq!(select(&Intent::Exit, &catalog, &mut rng), FAREWELL);
        }
        let all_replies: Vec<&String> = catalog.entries().iter().flat_map(|e| &e.replies).collect();
        assert!(!all_replies.iter().any(|r| r.as_str() == FAREWELL));
    }

    #[test]
    fn test_selection_is_member_of_category() {
        let catalog = CategoryCatalog::builtin();
        let mut rng = make_rng(Some(99));
        for name in catalog.categories() {
            let intent = Intent::from_name(name);
            let replies = &catalog.get(name).unwrap().replies;
            for _ in 0..25 {
                let reply = select(&intent, &catalog, &mut rng);
                assert!(replies.contains(&reply), "{reply:?} not in {name}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_choices() {
        let catalog = CategoryCatalog::builtin();
        let mut first = make_rng(Some(2024));
        let mut second = make_rng(Some(2024));
        let a: Vec<String> = (0..10).map(|_| select(&Intent::Default, &catalog, &mut first)).collect();
        let b: Vec<String> = (0..10).map(|_| select(&Intent::Default, &catalog, &mut second)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_intent_falls_back_to_default() {
        let catalog = CategoryCatalog::builtin();
        let mut rng = make_rng(Some(5));
        let reply = select(&category("weather"), &catalog, &mut rng);
        assert!(catalog.default_replies().contains(&reply));
    }

    #[test]
    fn test_empty_reply_list_falls_back_to_default() {
        let catalog = CategoryCatalog::new(vec![
            IntentEntry::new("silent", &[], &["shh"]),
            IntentEntry::new("default", &["fallback"], &[]),
        ])
        .unwrap();
        let mut rng = make_rng(Some(5));
        assert_eq!(select(&category("silent"), &catalog, &mut rng), "fallback");
    }

    #[test]
    fn test_select_at_in_range() {
        let catalog = CategoryCatalog::builtin();
        let greeting = select_at(&category("greeting"), &catalog, 0).unwrap();
        assert_eq!(
            greeting,
            "Hello! I'm your portfolio assistant. How can I help you today?"
        );
        let last_default = select_at(&Intent::Default, &catalog, 3).unwrap();
        assert_eq!(last_default, catalog.default_replies()[3]);
        assert_eq!(select_at(&Intent::Exit, &catalog, 0).unwrap(), FAREWELL);
    }

    #[test]
    fn test_select_at_out_of_range() {
        let catalog = CategoryCatalog::builtin();
        let err = select_at(&category("skills"), &catalog, 3).unwrap_err();
        assert!(matches!(
            err,
            ChatError::OutOfRange { ref intent, index: 3, len: 3 } if intent == "skills"
        ));
        assert!(matches!(
            select_at(&Intent::Exit, &catalog, 1),
            Err(ChatError::OutOfRange { len: 1, .. })
        ));
    }

    #[test]
    fn test_select_at_unknown_intent() {
        let catalog = CategoryCatalog::builtin();
        assert!(matches!(
            select_at(&category("weather"), &catalog, 0),
            Err(ChatError::UnknownIntent { ref name }) if name == "weather"
        ));
    }
}
