//! # Guided Exercises
//!
//! The built-in exercise catalog and the countdown state machine driving a
//! session. The catalog is immutable after startup; config may append
//! entries but never edits the built-ins.
//!
//! ```text
//! Idle ──start──▶ Running ──toggle──▶ Paused
//!                    │  ▲               │
//!                    │  └────toggle─────┘
//!                  tick to 0
//!                    ▼
//!                 Finished
//! ```
//!
//! `reset()` restores the full duration and forces `Paused` from any active
//! phase. Ticks outside `Running` are ignored, so a stale tick from an
//! aborted timer task cannot push the clock below zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Breathing,
    Meditation,
    Body,
}

impl ExerciseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExerciseCategory::Breathing => "breathing",
            ExerciseCategory::Meditation => "meditation",
            ExerciseCategory::Body => "body",
        }
    }
}

/// A catalog entry: a titled, timed instruction sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_secs: u32,
    pub category: ExerciseCategory,
    pub instructions: Vec<String>,
}

/// The four guided exercises every installation ships with.
pub fn builtin_catalog() -> Vec<Exercise> {
    let make = |id: &str,
                title: &str,
                description: &str,
                duration_secs: u32,
                category: ExerciseCategory,
                instructions: &[&str]| Exercise {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        duration_secs,
        category,
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
    };

    vec![
        make(
            "4-7-8-breathing",
            "4-7-8 Breathing",
            "A calming breath pattern to reduce anxiety and promote relaxation",
            240,
            ExerciseCategory::Breathing,
            &[
                "Sit comfortably with your back straight",
                "Place your tongue against the ridge behind your upper teeth",
                "Exhale completely through your mouth",
                "Inhale through your nose for 4 counts",
                "Hold your breath for 7 counts",
                "Exhale through your mouth for 8 counts",
                "Repeat this cycle 3-4 times",
            ],
        ),
        make(
            "body-scan",
            "Body Scan Meditation",
            "Progressive relaxation technique to release tension",
            600,
            ExerciseCategory::Body,
            &[
                "Lie down comfortably or sit in a chair",
                "Close your eyes and take three deep breaths",
                "Start by noticing your toes and feet",
                "Slowly move your attention up through your body",
                "Notice each part without trying to change anything",
                "If you find tension, breathe into that area",
                "Continue until you reach the top of your head",
            ],
        ),
        make(
            "loving-kindness",
            "Loving Kindness Meditation",
            "Cultivate compassion for yourself and others",
            480,
            ExerciseCategory::Meditation,
            &[
                "Sit comfortably and close your eyes",
                "Begin by directing loving thoughts to yourself",
                "Repeat: \"May I be happy, may I be healthy, may I be at peace\"",
                "Visualize someone you care about",
                "Send them the same loving wishes",
                "Extend this to neutral people, then difficult people",
                "Finally, send loving kindness to all beings everywhere",
            ],
        ),
        make(
            "box-breathing",
            "Box Breathing",
            "Equal count breathing for focus and calm",
            300,
            ExerciseCategory::Breathing,
            &[
                "Sit with your back straight and feet flat on floor",
                "Inhale through your nose for 4 counts",
                "Hold your breath for 4 counts",
                "Exhale through your mouth for 4 counts",
                "Hold empty for 4 counts",
                "Repeat this square pattern",
                "Visualize drawing a box with your breath",
            ],
        ),
    ]
}

/// Where the countdown currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerPhase {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

/// Countdown state for the active exercise session.
///
/// `selected` indexes into the catalog held by `App`; `Idle` with no
/// selection means the catalog list is showing instead of the player.
#[derive(Debug, Default)]
pub struct ExerciseTimer {
    pub phase: TimerPhase,
    pub selected: Option<usize>,
    pub duration: u32,
    pub remaining: u32,
}

impl ExerciseTimer {
    /// Begin a session: full duration, running.
    pub fn start(&mut self, index: usize, duration_secs: u32) {
        self.selected = Some(index);
        self.duration = duration_secs;
        self.remaining = duration_secs;
        self.phase = TimerPhase::Running;
    }

    /// Flip running/paused. Idle and Finished are unaffected.
    pub fn toggle(&mut self) {
        self.phase = match self.phase {
            TimerPhase::Running => TimerPhase::Paused,
            TimerPhase::Paused => TimerPhase::Running,
            other => other,
        };
    }

    /// Restore the full duration, paused. No-op without a selection.
    pub fn reset(&mut self) {
        if self.selected.is_some() {
            self.remaining = self.duration;
            self.phase = TimerPhase::Paused;
        }
    }

    /// One second elapsed. Only advances while running; hitting zero moves
    /// to Finished. Returns true when this tick finished the session.
    pub fn tick(&mut self) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.phase = TimerPhase::Finished;
            return true;
        }
        false
    }

    /// Abandon the session and return to the catalog list.
    pub fn clear(&mut self) {
        *self = ExerciseTimer::default();
    }

    /// Completed fraction in `0.0..=1.0`, for the progress gauge.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            return 0.0;
        }
        f64::from(self.duration - self.remaining) / f64::from(self.duration)
    }

    pub fn is_running(&self) -> bool {
        self.phase == TimerPhase::Running
    }
}

/// `mm:ss` rendering of a second count.
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].duration_secs, 240);
        assert_eq!(catalog[0].category, ExerciseCategory::Breathing);
        assert_eq!(catalog[1].instructions.len(), 7);
        assert!(catalog.iter().all(|e| !e.instructions.is_empty()));
        assert!(catalog.iter().all(|e| e.duration_secs > 0));
    }

    #[test]
    fn test_start_enters_running_at_full_duration() {
        let mut timer = ExerciseTimer::default();
        timer.start(0, 240);
        assert_eq!(timer.phase, TimerPhase::Running);
        assert_eq!(timer.remaining, 240);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_full_countdown_finishes_and_stops() {
        let mut timer = ExerciseTimer::default();
        timer.start(0, 240);
        for _ in 0..239 {
            assert!(!timer.tick());
        }
        assert!(timer.tick(), "final tick reports completion");
        assert_eq!(timer.remaining, 0);
        assert_eq!(timer.phase, TimerPhase::Finished);
        assert_eq!(timer.progress(), 1.0);

        // Extra ticks change nothing; time never goes negative
        assert!(!timer.tick());
        assert_eq!(timer.remaining, 0);
        assert_eq!(timer.phase, TimerPhase::Finished);
    }

    #[test]
    fn test_toggle_flips_running_and_paused_only() {
        let mut timer = ExerciseTimer::default();
        timer.toggle();
        assert_eq!(timer.phase, TimerPhase::Idle);

        timer.start(1, 600);
        timer.toggle();
        assert_eq!(timer.phase, TimerPhase::Paused);
        assert!(!timer.tick(), "paused timer ignores ticks");
        assert_eq!(timer.remaining, 600);

        timer.toggle();
        assert_eq!(timer.phase, TimerPhase::Running);
    }

    #[test]
    fn test_finished_toggle_is_noop() {
        let mut timer = ExerciseTimer::default();
        timer.start(0, 1);
        timer.tick();
        assert_eq!(timer.phase, TimerPhase::Finished);
        timer.toggle();
        assert_eq!(timer.phase, TimerPhase::Finished);
    }

    #[test]
    fn test_reset_restores_duration_paused() {
        let mut timer = ExerciseTimer::default();
        timer.start(0, 300);
        timer.tick();
        timer.tick();
        assert_eq!(timer.remaining, 298);

        timer.reset();
        assert_eq!(timer.remaining, 300);
        assert_eq!(timer.phase, TimerPhase::Paused);
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let mut timer = ExerciseTimer::default();
        timer.start(2, 480);
        timer.clear();
        assert_eq!(timer.phase, TimerPhase::Idle);
        assert_eq!(timer.selected, None);
        assert_eq!(timer.progress(), 0.0);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(65), "1:05");
        assert_eq!(format_duration(600), "10:00");
    }
}
