//! # Response Engine
//!
//! File: cli/src/engine/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `Engine` turns classified text into replies. It owns the two injected
//! dependencies the conversation needs and nothing else:
//! - a random number generator, used to pick among candidate responses and
//!   coping strategies
//! - a clock, used to stamp session starts and measure session length
//!
//! Session state is passed in explicitly, so one engine can serve any number of
//! sessions and tests can pin both randomness (seeded `StdRng`) and time
//! (`FixedClock`).
//!
//! ## Architecture
//!
//! Per message the order is fixed: crisis detection first, and only when no
//! crisis phrase is present is the text classified. Every operation has a
//! defined output for every input, so none of them return `Result`.
//!
//! ## Examples
//!
//! ```rust
//! use solace::engine::{Engine, EmotionCategory};
//!
//! let mut engine = Engine::with_seed(Some(7));
//! let mut session = engine.start_session();
//!
//! let reply = engine.generate_response("I feel so anxious and scared");
//! assert!(!reply.is_empty());
//!
//! let tip = engine.suggest_coping_strategy(EmotionCategory::Stress);
//! assert!(tip.contains("Coping Strategy:"));
//!
//! session.record_turn("I feel so anxious and scared");
//! let summary = engine.end_session_summary(&session);
//! assert!(summary.contains("Messages exchanged: 1"));
//! ```
//!
use crate::engine::category::EmotionCategory;
use crate::engine::classifier;
use crate::engine::clock::{Clock, SystemClock};
use crate::engine::session::{MoodScore, MoodTier, Session};
use crate::engine::summary;
use crate::engine::tables::{COPING_STRATEGY_MARKER, CRISIS_SUPPORT_MESSAGE, GENERAL_STRATEGIES};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// Classification and response engine.
#[derive(Debug, Clone)]
pub struct Engine<R = StdRng, C = SystemClock> {
    rng: R,
    clock: C,
}

impl Engine<StdRng, SystemClock> {
    /// Engine on the system clock, seeded with `seed` when given, from OS entropy otherwise.
    pub fn with_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => {
                info!("Using fixed random seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Engine::new(rng, SystemClock)
    }
}

impl<R: Rng, C: Clock> Engine<R, C> {
    pub fn new(rng: R, clock: C) -> Self {
        Self { rng, clock }
    }

    /// Opens a new session stamped with the engine clock's current time.
    pub fn start_session(&self) -> Session {
        Session::start(self.clock.now())
    }

    /// See [`classifier::classify`].
    pub fn classify(&self, text: &str) -> EmotionCategory {
        classifier::classify(text)
    }

    /// See [`classifier::detect_crisis`].
    pub fn detect_crisis(&self, text: &str) -> bool {
        classifier::detect_crisis(text)
    }

    /// # Generate Response (`generate_response`)
    ///
    /// Returns the crisis-support message verbatim when the text contains a
    /// crisis phrase, without classifying it. Otherwise classifies the text and
    /// picks one of that category's responses uniformly at random.
    pub fn generate_response(&mut self, text: &str) -> String {
        if classifier::detect_crisis(text) {
            info!("Crisis phrase present; returning crisis support message");
            return CRISIS_SUPPORT_MESSAGE.to_string();
        }
        let category = classifier::classify(text);
        let response = pick(
            &mut self.rng,
            category.responses(),
            EmotionCategory::General.responses(),
        );
        debug!("Selected '{}' response", category);
        response.to_string()
    }

    /// # Suggest Coping Strategy (`suggest_coping_strategy`)
    ///
    /// Picks a strategy from the category's dedicated list, or from the general
    /// list when the category has none. The result always starts with
    /// [`COPING_STRATEGY_MARKER`].
    pub fn suggest_coping_strategy(&mut self, category: EmotionCategory) -> String {
        let candidates = category.coping_strategies().unwrap_or(GENERAL_STRATEGIES);
        let strategy = pick(&mut self.rng, candidates, GENERAL_STRATEGIES);
        format!("{}{}", COPING_STRATEGY_MARKER, strategy)
    }

    /// Like [`Engine::suggest_coping_strategy`], but takes a category name.
    /// Unknown names fall back to the general list.
    pub fn suggest_coping_strategy_named(&mut self, name: &str) -> String {
        let category = name.parse::<EmotionCategory>().unwrap_or_else(|err| {
            debug!("{}; falling back to general strategies", err);
            EmotionCategory::General
        });
        self.suggest_coping_strategy(category)
    }

    /// # Mood Check-In (`mood_check_in`)
    ///
    /// Records `score` on the session and returns tiered framing:
    /// - 1-3: empathy, a depression strategy, and asks whether they have talked to anyone
    /// - 4-6: empathy, a general strategy, and asks about the hardest part of the day
    /// - 7-10: affirmation with no strategy, and asks what has been going well
    pub fn mood_check_in(&mut self, session: &mut Session, score: MoodScore) -> String {
        session.record_mood(score);
        match score.tier() {
            MoodTier::Low => {
                let strategy = self.suggest_coping_strategy(EmotionCategory::Depression);
                format!(
                    "
Thank you for sharing. A score of {score} suggests you're having a really tough time.
That takes courage to acknowledge. Remember, it's okay to not be okay, and these feelings can change.

{strategy}

Have you been able to talk to anyone else about how you're feeling?
"
                )
            }
            MoodTier::Mid => {
                let strategy = self.suggest_coping_strategy(EmotionCategory::General);
                format!(
                    "
I hear you. A {score} suggests you're going through some challenges right now.
Your feelings are valid, and I'm here to listen.

{strategy}

What's been the most difficult part of your day?
"
                )
            }
            MoodTier::High => format!(
                "
I'm glad to hear you're feeling relatively good with a score of {score}!
It's wonderful when we can recognize positive moments.

What's been going well for you lately?
"
            ),
        }
    }

    /// Summary of the session measured against the engine clock. Does not modify the session.
    pub fn end_session_summary(&self, session: &Session) -> String {
        summary::render_summary(session, self.clock.now())
    }
}

/// Uniform choice from `candidates`, or from `fallback` when `candidates` is empty.
fn pick<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[&'static str],
    fallback: &[&'static str],
) -> &'static str {
    candidates
        .choose(rng)
        .or_else(|| fallback.choose(rng))
        .copied()
        .unwrap_or_default()
}
