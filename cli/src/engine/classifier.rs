//! # Keyword Classifier
//!
//! File: cli/src/engine/classifier.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Pure functions that score free text against the keyword tables:
//! - `classify`: picks the emotion category with the most distinct keyword hits
//! - `detect_crisis`: reports whether any crisis phrase occurs in the text
//!
//! Matching is case-insensitive substring containment. A keyword that appears
//! several times counts once. Substrings also fire inside longer words (`mad`
//! in "made", `down` in "download"), and crisis paraphrases that are not in the
//! phrase set go undetected. Both are accepted limitations of keyword matching.
//!
use crate::engine::category::EmotionCategory;
use crate::engine::tables::CRISIS_PHRASES;
use tracing::{debug, trace};

/// Number of distinct keywords of `category` contained in `lowered`.
///
/// `lowered` must already be lower-case.
pub fn keyword_score(category: EmotionCategory, lowered: &str) -> usize {
    category
        .keywords()
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count()
}

/// # Classify Text (`classify`)
///
/// Returns the category whose keywords match the text most often, counting each
/// distinct keyword once. Categories are visited in `EmotionCategory::SCORED`
/// order and only a strictly higher score replaces the current leader, so ties
/// go to the earlier category. Text with no matches (including empty text)
/// classifies as `General`.
pub fn classify(text: &str) -> EmotionCategory {
    let lowered = text.to_lowercase();
    let mut best = EmotionCategory::General;
    let mut best_score = 0;

    for category in EmotionCategory::SCORED {
        let score = keyword_score(category, &lowered);
        trace!("Category '{}' scored {}", category, score);
        if score > best_score {
            best = category;
            best_score = score;
        }
    }

    debug!("Classified input as '{}' (score {})", best, best_score);
    best
}

/// Returns `true` if any crisis phrase occurs in the text, ignoring case.
pub fn detect_crisis(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let found = CRISIS_PHRASES.iter().any(|phrase| lowered.contains(phrase));
    if found {
        debug!("Crisis phrase detected in input");
    }
    found
}
