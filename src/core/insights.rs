//! # Insight Aggregation
//!
//! Pure functions over the mood history. Nothing here mutates or allocates
//! beyond the returned values, so every property is a one-line assertion.
//!
//! The trend heuristic compares the mean mood ordinal of the last three
//! entries against the three before those. A fixed 0.3 threshold decides
//! between improving, declining and stable; short histories are always
//! stable because one of the windows is empty.

use crate::core::mood::MoodEntry;

/// Heuristic classification of recent versus older mood windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

impl Trend {
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improving => "improving",
            Trend::Declining => "declining",
            Trend::Stable => "stable",
        }
    }

    /// Arrow glyph for the summary card.
    pub fn glyph(&self) -> &'static str {
        match self {
            Trend::Improving => "↗",
            Trend::Declining => "↘",
            Trend::Stable => "→",
        }
    }
}

/// Mean energy across all entries, rounded to one decimal place.
/// An empty history yields 0.0 rather than NaN.
pub fn average_energy(history: &[MoodEntry]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let total: u32 = history.iter().map(|e| u32::from(e.energy)).sum();
    let mean = f64::from(total) / history.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// Trend over the history: last 3 entries versus the 3 preceding them.
///
/// Returns `Stable` when there are fewer than 2 entries, or when either
/// window is empty (any history shorter than 4 entries).
pub fn mood_trend(history: &[MoodEntry]) -> Trend {
    if history.len() < 2 {
        return Trend::Stable;
    }

    let recent_start = history.len().saturating_sub(3);
    let older_start = history.len().saturating_sub(6);
    let recent = &history[recent_start..];
    let older = &history[older_start..recent_start];

    if recent.is_empty() || older.is_empty() {
        return Trend::Stable;
    }

    let mean = |window: &[MoodEntry]| {
        window.iter().map(|e| e.mood.ordinal()).sum::<f64>() / window.len() as f64
    };

    let diff = mean(recent) - mean(older);
    if diff > 0.3 {
        Trend::Improving
    } else if diff < -0.3 {
        Trend::Declining
    } else {
        Trend::Stable
    }
}
