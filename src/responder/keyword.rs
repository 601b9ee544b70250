//! # Keyword Responder
//!
//! The scripted engine behind the chat. An ordered rule table is walked
//! top to bottom; the first rule whose keyword set appears anywhere in the
//! lower-cased input wins and short-circuits. Rules that recognize a
//! feeling also attach a mood signal to the reply.
//!
//! When nothing matches, one of a small pool of generic empathetic replies
//! is chosen uniformly at random. The RNG is injectable so tests can pin
//! the selection with a fixed seed.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::mood::Mood;
use crate::responder::engine::{Reply, Responder};

struct Rule {
    keywords: &'static [&'static str],
    reply: &'static str,
    mood: Option<Mood>,
}

/// Ordered rule table. Earlier rules win, so "sad and stressed" reads as
/// stress — the order is part of the engine's observable behavior.
const RULES: &[Rule] = &[
    Rule {
        keywords: &["stressed", "anxious", "worried"],
        reply: "I hear that you're feeling stressed. That's completely valid, and I'm here \
                to help. Would you like to try a quick breathing exercise? Try the 4-7-8 \
                technique: breathe in for 4, hold for 7, exhale for 8. Repeat 3 times.",
        mood: Some(Mood::Stressed),
    },
    Rule {
        keywords: &["sad", "down", "depressed"],
        reply: "I'm sorry you're feeling down. Remember, it's okay to have difficult days. \
                Sometimes, acknowledging our feelings is the first step. Would you like to \
                try a gentle mindfulness exercise or talk about what's on your mind?",
        mood: Some(Mood::Sad),
    },
    Rule {
        keywords: &["happy", "good", "great", "wonderful"],
        reply: "That's wonderful to hear! I'm so glad you're having a good day. Let's build \
                on this positive energy. What's contributing most to your happiness right now?",
        mood: Some(Mood::Happy),
    },
    Rule {
        keywords: &["tired", "exhausted", "sleepy"],
        reply: "Feeling tired can affect our overall well-being. Are you getting enough \
                rest? Sometimes a short mindfulness break can be refreshing. Try focusing \
                on your breath for just 2 minutes.",
        mood: Some(Mood::Tired),
    },
    Rule {
        keywords: &["meditation", "mindful"],
        reply: "Mindfulness is a wonderful practice! Here's a simple exercise: Find a \
                comfortable position, close your eyes, and focus on your breathing. Notice \
                each inhale and exhale without trying to change it. If your mind wanders, \
                gently bring it back to your breath.",
        mood: None,
    },
    Rule {
        keywords: &["help", "support"],
        reply: "I'm here to support you. Remember, seeking help is a sign of strength. You \
                can try breathing exercises, mindfulness meditation, or we can simply talk. \
                If you're in crisis, please reach out to a mental health professional or \
                crisis hotline.",
        mood: None,
    },
];

/// Generic replies used when no rule matches.
const FALLBACK_REPLIES: &[&str] = &[
    "Thank you for sharing that with me. How does talking about this make you feel?",
    "I appreciate you opening up. What would be most helpful for you right now?",
    "It sounds like you're going through something important. Would you like to explore this further?",
    "Your feelings are valid. What's one small thing that might bring you comfort today?",
    "I'm here to listen. What would you like to focus on in this moment?",
];

/// Keyword-matching responder with an injectable fallback RNG.
pub struct KeywordResponder {
    rng: Mutex<StdRng>,
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordResponder {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic engine for tests: same seed, same fallback sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        KeywordResponder {
            rng: Mutex::new(rng),
        }
    }

    fn pick_fallback(&self) -> &'static str {
        let mut rng = self.rng.lock().expect("rng lock");
        FALLBACK_REPLIES[rng.gen_range(0..FALLBACK_REPLIES.len())]
    }
}

impl Responder for KeywordResponder {
    fn name(&self) -> &str {
        "keyword"
    }

    fn respond(&self, input: &str) -> Reply {
        let lowered = input.to_lowercase();

        for rule in RULES {
            if rule.keywords.iter().any(|k| lowered.contains(k)) {
                return Reply {
                    text: rule.reply.to_string(),
                    mood: rule.mood,
                };
            }
        }

        Reply::plain(self.pick_fallback())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> KeywordResponder {
        KeywordResponder::seeded(42)
    }

    #[test]
    fn test_stress_keywords_signal_stressed() {
        for input in ["I'm so stressed out", "feeling ANXIOUS today", "worried about work"] {
            let reply = engine().respond(input);
            assert!(reply.text.contains("4-7-8"), "input: {input}");
            assert_eq!(reply.mood, Some(Mood::Stressed), "input: {input}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let reply = engine().respond("STRESSED");
        assert_eq!(reply.mood, Some(Mood::Stressed));
    }

    #[test]
    fn test_sadness_keywords_signal_sad() {
        let reply = engine().respond("been feeling pretty down lately");
        assert!(reply.text.contains("difficult days"));
        assert_eq!(reply.mood, Some(Mood::Sad));
    }

    #[test]
    fn test_positivity_keywords_signal_happy() {
        let reply = engine().respond("today was a great day");
        assert_eq!(reply.mood, Some(Mood::Happy));
    }

    #[test]
    fn test_fatigue_keywords_signal_tired() {
        let reply = engine().respond("I'm exhausted");
        assert_eq!(reply.mood, Some(Mood::Tired));
    }

    #[test]
    fn test_mindfulness_and_help_have_no_signal() {
        let reply = engine().respond("tell me about meditation");
        assert!(reply.text.contains("Mindfulness"));
        assert_eq!(reply.mood, None);

        let reply = engine().respond("I need support");
        assert!(reply.text.contains("sign of strength"));
        assert_eq!(reply.mood, None);
    }

    #[test]
    fn test_rule_order_wins_over_later_matches() {
        // Contains both a stress and a sadness keyword; stress is first.
        let reply = engine().respond("sad and stressed");
        assert_eq!(reply.mood, Some(Mood::Stressed));
    }

    #[test]
    fn test_fallback_is_deterministic_under_seed() {
        let a = KeywordResponder::seeded(7);
        let b = KeywordResponder::seeded(7);
        for _ in 0..10 {
            assert_eq!(a.respond("hm").text, b.respond("hm").text);
        }
    }

    #[test]
    fn test_fallback_comes_from_pool() {
        let engine = engine();
        for _ in 0..20 {
            let reply = engine.respond("zzz qqq");
            assert!(FALLBACK_REPLIES.contains(&reply.text.as_str()));
            assert_eq!(reply.mood, None);
        }
    }
}
