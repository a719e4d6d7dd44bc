//! # Emotion Categories
//!
//! File: cli/src/engine/category.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `EmotionCategory` is the closed set of coarse emotional classes the engine
//! understands. Each variant maps to its keyword, response and coping-strategy
//! tables through exhaustive `match` expressions, so adding a category without
//! wiring its tables is a compile error.
//!
//! ## Ordering
//!
//! `EmotionCategory::SCORED` fixes the order in which categories are scored.
//! When two categories tie on distinct keyword matches, the one listed first
//! wins. `General` is never scored; it is the fallback.
//!
use crate::core::error::SolaceError;
use crate::engine::tables::*;
use std::fmt;
use std::str::FromStr;

/// A coarse emotional class used to pick responses and coping strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EmotionCategory {
    Anxiety,
    Depression,
    Stress,
    Anger,
    Positive,
    #[default]
    General,
}

impl EmotionCategory {
    /// Categories that carry keywords, in tie-break priority order.
    pub const SCORED: [EmotionCategory; 5] = [
        EmotionCategory::Anxiety,
        EmotionCategory::Depression,
        EmotionCategory::Stress,
        EmotionCategory::Anger,
        EmotionCategory::Positive,
    ];

    /// Every category, `General` last.
    pub const ALL: [EmotionCategory; 6] = [
        EmotionCategory::Anxiety,
        EmotionCategory::Depression,
        EmotionCategory::Stress,
        EmotionCategory::Anger,
        EmotionCategory::Positive,
        EmotionCategory::General,
    ];

    /// Lower-case identifier, as accepted by `FromStr` and printed by `Display`.
    pub fn as_str(self) -> &'static str {
        match self {
            EmotionCategory::Anxiety => "anxiety",
            EmotionCategory::Depression => "depression",
            EmotionCategory::Stress => "stress",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Positive => "positive",
            EmotionCategory::General => "general",
        }
    }

    /// Trigger keywords. Empty for `General`.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            EmotionCategory::Anxiety => ANXIETY_KEYWORDS,
            EmotionCategory::Depression => DEPRESSION_KEYWORDS,
            EmotionCategory::Stress => STRESS_KEYWORDS,
            EmotionCategory::Anger => ANGER_KEYWORDS,
            EmotionCategory::Positive => POSITIVE_KEYWORDS,
            EmotionCategory::General => &[],
        }
    }

    /// Candidate replies for this category.
    pub fn responses(self) -> &'static [&'static str] {
        match self {
            EmotionCategory::Anxiety => ANXIETY_RESPONSES,
            EmotionCategory::Depression => DEPRESSION_RESPONSES,
            EmotionCategory::Stress => STRESS_RESPONSES,
            EmotionCategory::Anger => ANGER_RESPONSES,
            EmotionCategory::Positive => POSITIVE_RESPONSES,
            EmotionCategory::General => GENERAL_RESPONSES,
        }
    }

    /// Dedicated coping strategies, if this category has its own list.
    /// Categories without one borrow `General`'s list at selection time.
    pub fn coping_strategies(self) -> Option<&'static [&'static str]> {
        match self {
            EmotionCategory::Anxiety => Some(ANXIETY_STRATEGIES),
            EmotionCategory::Depression => Some(DEPRESSION_STRATEGIES),
            EmotionCategory::Stress => Some(STRESS_STRATEGIES),
            EmotionCategory::General => Some(GENERAL_STRATEGIES),
            EmotionCategory::Anger | EmotionCategory::Positive => None,
        }
    }

    /// Whether a chat reply for this category should be followed by a coping tip.
    pub fn is_distressing(self) -> bool {
        matches!(
            self,
            EmotionCategory::Anxiety
                | EmotionCategory::Depression
                | EmotionCategory::Stress
                | EmotionCategory::Anger
        )
    }
}

impl fmt::Display for EmotionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmotionCategory {
    type Err = SolaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EmotionCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SolaceError::UnknownCategory {
                name: wanted.to_string(),
            })
    }
}
