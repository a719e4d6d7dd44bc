//! # Solace Engine Tables
//!
//! File: cli/src/engine/tables.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The static keyword, response and coping-strategy tables, the crisis phrase set
//! and the fixed crisis-support message. Everything here is `&'static` and is
//! only ever read; `EmotionCategory` maps onto these tables with exhaustive
//! `match` expressions (see `category.rs`).
//!
//! Keywords are lower-case and matched as substrings of the lower-cased input.
//!

// --- Keywords ---

pub(crate) const ANXIETY_KEYWORDS: &[&str] = &[
    "anxious",
    "worried",
    "nervous",
    "panic",
    "fear",
    "scared",
    "overwhelmed",
];

pub(crate) const DEPRESSION_KEYWORDS: &[&str] = &[
    "sad",
    "depressed",
    "hopeless",
    "empty",
    "worthless",
    "lonely",
    "down",
];

pub(crate) const STRESS_KEYWORDS: &[&str] = &[
    "stressed",
    "pressure",
    "burden",
    "exhausted",
    "tired",
    "overworked",
];

pub(crate) const ANGER_KEYWORDS: &[&str] = &[
    "angry",
    "frustrated",
    "irritated",
    "mad",
    "furious",
    "annoyed",
];

pub(crate) const POSITIVE_KEYWORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "excited",
    "joyful",
    "content",
    "peaceful",
];

// --- Responses ---

pub(crate) const ANXIETY_RESPONSES: &[&str] = &[
    "I understand you're feeling anxious. That's a very real and valid feeling. Have you tried any breathing exercises?",
    "Anxiety can be overwhelming. Remember, you're safe right now. What's one thing you can see, hear, and feel around you?",
    "I hear that you're worried. It's okay to feel this way. Would it help to talk about what's causing these feelings?",
];

pub(crate) const DEPRESSION_RESPONSES: &[&str] = &[
    "I'm sorry you're going through this difficult time. Your feelings are valid, and you don't have to face this alone.",
    "Depression can make everything feel harder. You're brave for reaching out. What's one small thing that brought you even a tiny bit of comfort recently?",
    "I want you to know that what you're feeling is real, and it's not your fault. Have you been able to talk to anyone else about how you're feeling?",
];

pub(crate) const STRESS_RESPONSES: &[&str] = &[
    "Stress can be really challenging to deal with. You're doing your best, and that matters.",
    "It sounds like you have a lot on your plate. What's the most pressing thing you're dealing with right now?",
    "I can hear the pressure you're under. Sometimes breaking things down into smaller steps can help. What feels most manageable to tackle first?",
];

pub(crate) const ANGER_RESPONSES: &[&str] = &[
    "It's completely normal to feel angry sometimes. Your emotions are valid. What's been triggering these feelings?",
    "I can sense your frustration. Anger often tells us something important. What do you think might be underneath this feeling?",
    "Thank you for sharing these difficult feelings with me. What usually helps you when you're feeling this way?",
];

pub(crate) const POSITIVE_RESPONSES: &[&str] = &[
    "I'm so glad to hear you're feeling good! What's been going well for you?",
    "That's wonderful to hear! It's important to acknowledge and celebrate these positive moments.",
    "I love hearing about the good things in your life. What's contributing to these positive feelings?",
];

pub(crate) const GENERAL_RESPONSES: &[&str] = &[
    "Thank you for sharing that with me. How are you feeling right now in this moment?",
    "I'm here to listen. What's been on your mind lately?",
    "It takes courage to talk about our feelings. What would be most helpful for you right now?",
];

// --- Coping strategies ---

pub(crate) const ANXIETY_STRATEGIES: &[&str] = &[
    "Try the 4-7-8 breathing technique: Breathe in for 4, hold for 7, exhale for 8.",
    "Practice grounding: Name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, 1 you can taste.",
    "Progressive muscle relaxation: Tense and release each muscle group starting from your toes.",
];

pub(crate) const DEPRESSION_STRATEGIES: &[&str] = &[
    "Try to maintain a daily routine, even if it's simple.",
    "Spend a few minutes outside or near a window for natural light.",
    "Reach out to one person you trust, even if it's just a text message.",
];

pub(crate) const STRESS_STRATEGIES: &[&str] = &[
    "Break large tasks into smaller, manageable steps.",
    "Practice the 'two-minute rule': If something takes less than 2 minutes, do it now.",
    "Set boundaries and learn to say no to additional commitments when possible.",
];

pub(crate) const GENERAL_STRATEGIES: &[&str] = &[
    "Regular sleep schedule can significantly impact mental health.",
    "Physical exercise, even a short walk, can boost mood.",
    "Journaling can help process thoughts and emotions.",
];

/// Prefix placed in front of every suggested coping strategy.
pub const COPING_STRATEGY_MARKER: &str = "\n💡 Coping Strategy: ";

// --- Crisis ---

/// Phrases whose presence overrides classification entirely.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "not worth living",
    "hurt myself",
];

/// Returned verbatim by `generate_response` whenever a crisis phrase is present.
pub const CRISIS_SUPPORT_MESSAGE: &str = "
I'm concerned about what you've shared. Your life has value, and there are people who want to help.

🆘 IMMEDIATE HELP:
• National Suicide Prevention Lifeline: 988 (US)
• Crisis Text Line: Text HOME to 741741
• International: befrienders.org

Please reach out to a mental health professional, trusted friend, or family member right now.
You don't have to go through this alone.

Would you like to talk about what's bringing up these feelings?
";
