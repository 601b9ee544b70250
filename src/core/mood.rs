//! # Mood Domain Types
//!
//! Two vocabularies live side by side in [`Mood`]:
//!
//! - the five-point check-in scale (`Excellent` .. `Struggling`), which the
//!   daily check-in form offers and the trend ordinal understands;
//! - the situational labels the chat engine signals (`Happy`, `Sad`,
//!   `Stressed`, `Tired`), which only ever land in `App::current_mood`.
//!
//! The vocabularies are deliberately not unified into one scale; labels
//! outside the check-in scale carry the neutral ordinal 3 (see
//! [`Mood::ordinal`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-reported emotional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    // Check-in scale, best to worst
    Excellent,
    Good,
    Neutral,
    Low,
    Struggling,
    // Chat signal labels
    Happy,
    Sad,
    Stressed,
    Tired,
}

impl Mood {
    /// The five moods offered by the daily check-in form, best to worst.
    pub const SCALE: [Mood; 5] = [
        Mood::Excellent,
        Mood::Good,
        Mood::Neutral,
        Mood::Low,
        Mood::Struggling,
    ];

    /// Lowercase display label ("Feeling stressed", history rows, logs).
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Excellent => "excellent",
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Low => "low",
            Mood::Struggling => "struggling",
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Stressed => "stressed",
            Mood::Tired => "tired",
        }
    }

    /// Ordinal used by the trend heuristic. Scale moods map 5 (best) down
    /// to 1 (worst); every other label counts as neutral 3.
    pub fn ordinal(&self) -> f64 {
        match self {
            Mood::Excellent => 5.0,
            Mood::Good => 4.0,
            Mood::Neutral => 3.0,
            Mood::Low => 2.0,
            Mood::Struggling => 1.0,
            _ => 3.0,
        }
    }

    /// Small glyph shown next to history rows.
    pub fn glyph(&self) -> &'static str {
        match self {
            Mood::Excellent | Mood::Happy => "(^_^)",
            Mood::Good => "(^-^)",
            Mood::Neutral => "(-_-)",
            Mood::Low | Mood::Tired => "(u_u)",
            Mood::Struggling | Mood::Sad | Mood::Stressed => "(;_;)",
        }
    }
}

/// One recorded observation: mood plus an energy scalar in `1..=10`.
///
/// Entries are append-only for the process lifetime; nothing is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodEntry {
    pub date: DateTime<Utc>,
    pub mood: Mood,
    pub energy: u8,
}

impl MoodEntry {
    pub fn new(mood: Mood, energy: u8) -> Self {
        Self {
            date: Utc::now(),
            mood,
            energy: energy.clamp(1, 10),
        }
    }
}
