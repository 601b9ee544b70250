//! # Application State
//!
//! Core business state for Sana. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── responder: Arc<dyn Responder>  // response engine
//! ├── transcript: Transcript         // chat log
//! ├── is_replying: bool              // simulated reply pending
//! ├── active_tab: Tab                // which view is showing
//! ├── mood_history: Vec<MoodEntry>   // append-only check-in records
//! ├── current_mood: Option<Mood>     // last known mood (chat or check-in)
//! ├── checkin_recorded: bool         // today's check-in done
//! ├── catalog: Vec<Exercise>         // built-ins + config extras
//! ├── timer: ExerciseTimer           // active session countdown
//! ├── status_message: String         // tab bar status text
//! └── thinking_delay: Duration       // simulated thinking pause
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::sync::Arc;
use std::time::Duration;

use crate::core::config::ResolvedConfig;
use crate::core::exercise::{Exercise, ExerciseTimer, builtin_catalog};
use crate::core::mood::{Mood, MoodEntry};
use crate::responder::{Responder, Transcript};

/// The five views of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Chat,
    CheckIn,
    Exercises,
    Insights,
    Resources,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Chat,
        Tab::CheckIn,
        Tab::Exercises,
        Tab::Insights,
        Tab::Resources,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Chat => "Chat",
            Tab::CheckIn => "Check-In",
            Tab::Exercises => "Mindfulness",
            Tab::Insights => "Insights",
            Tab::Resources => "Resources",
        }
    }

    /// Parse the config/env spelling of a tab name.
    pub fn from_name(name: &str) -> Option<Tab> {
        match name.to_lowercase().as_str() {
            "chat" => Some(Tab::Chat),
            "checkin" | "check-in" => Some(Tab::CheckIn),
            "exercises" | "mindfulness" => Some(Tab::Exercises),
            "insights" | "tracker" => Some(Tab::Insights),
            "resources" => Some(Tab::Resources),
            _ => None,
        }
    }

    pub fn next(&self) -> Tab {
        let i = Tab::ALL.iter().position(|t| t == self).expect("tab in ALL");
        Tab::ALL[(i + 1) % Tab::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        let i = Tab::ALL.iter().position(|t| t == self).expect("tab in ALL");
        Tab::ALL[(i + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

pub struct App {
    pub responder: Arc<dyn Responder>,
    pub transcript: Transcript,
    pub is_replying: bool,
    pub active_tab: Tab,
    pub mood_history: Vec<MoodEntry>,
    pub current_mood: Option<Mood>,
    pub checkin_recorded: bool,
    pub catalog: Vec<Exercise>,
    pub timer: ExerciseTimer,
    pub status_message: String,
    pub thinking_delay: Duration,
}

impl App {
    pub fn new(responder: Arc<dyn Responder>) -> Self {
        Self {
            responder,
            transcript: Transcript::new(),
            is_replying: false,
            active_tab: Tab::default(),
            mood_history: Vec::new(),
            current_mood: None,
            checkin_recorded: false,
            catalog: builtin_catalog(),
            timer: ExerciseTimer::default(),
            status_message: String::from("Welcome to Sana!"),
            thinking_delay: Duration::from_millis(crate::core::config::DEFAULT_THINKING_DELAY_MS),
        }
    }

    pub fn from_config(responder: Arc<dyn Responder>, config: &ResolvedConfig) -> Self {
        let mut app = Self::new(responder);
        app.transcript = Transcript::with_greeting(&config.greeting);
        app.active_tab = config.default_tab;
        app.catalog = config.catalog.clone();
        app.thinking_delay = Duration::from_millis(config.thinking_delay_ms);
        app
    }

    /// The exercise the player is currently showing, if any.
    pub fn selected_exercise(&self) -> Option<&Exercise> {
        self.timer.selected.and_then(|i| self.catalog.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Welcome to Sana!");
        assert!(!app.is_replying);
        assert!(!app.checkin_recorded);
        assert_eq!(app.active_tab, Tab::Chat);
        assert_eq!(app.catalog.len(), 4);
        assert!(app.mood_history.is_empty());
    }

    #[test]
    fn test_tab_cycle_wraps() {
        assert_eq!(Tab::Chat.next(), Tab::CheckIn);
        assert_eq!(Tab::Resources.next(), Tab::Chat);
        assert_eq!(Tab::Chat.prev(), Tab::Resources);
    }

    #[test]
    fn test_tab_from_name() {
        assert_eq!(Tab::from_name("chat"), Some(Tab::Chat));
        assert_eq!(Tab::from_name("Check-In"), Some(Tab::CheckIn));
        assert_eq!(Tab::from_name("bogus"), None);
    }
}
