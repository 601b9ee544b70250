//! # Actions
//!
//! Everything that can happen in Sana becomes an `Action`.
//! User presses Enter in the chat? That's `Action::SubmitChatMessage`.
//! The thinking delay elapses? That's `Action::ReplyReady(reply)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an [`Effect`] describing the I/O the caller must
//! perform (spawn the delayed reply, start or stop the countdown ticker,
//! quit). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: feed actions, assert on state and the
//! returned effect.

use log::{debug, warn};

use crate::core::mood::{Mood, MoodEntry};
use crate::core::state::{App, Tab};
use crate::responder::Reply;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch the active view.
    SwitchTab(Tab),
    /// The user sent a chat message (already trimmed and non-empty).
    SubmitChatMessage(String),
    /// The simulated thinking delay elapsed and the reply is ready.
    ReplyReady(Reply),
    /// The check-in form was completed.
    CheckInSubmitted {
        mood: Mood,
        energy: u8,
        notes: String,
    },
    /// Begin the catalog entry at this index.
    StartExercise(usize),
    /// Flip the countdown between running and paused.
    ToggleExerciseTimer,
    /// Restore the full duration, paused.
    ResetExerciseTimer,
    /// Leave the player and return to the catalog list.
    LeaveExercise,
    /// One second of a running exercise elapsed.
    CountdownTick,
    Quit,
}

/// I/O the event loop must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Spawn the delayed responder task for this input.
    SpawnReply(String),
    /// Spawn the one-second countdown ticker.
    StartCountdown,
    /// Abort the countdown ticker.
    StopCountdown,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SwitchTab(tab) => {
            app.active_tab = tab;
            Effect::None
        }

        Action::SubmitChatMessage(text) => {
            // A second send while a reply is pending is rejected outright;
            // the transcript never interleaves two pending replies.
            if app.is_replying {
                debug!("Ignoring chat submit while a reply is pending");
                return Effect::None;
            }
            if text.trim().is_empty() {
                return Effect::None;
            }
            app.transcript.add_user_message(text.clone());
            app.is_replying = true;
            Effect::SpawnReply(text)
        }

        Action::ReplyReady(reply) => {
            app.transcript.add_companion_message(reply.text);
            if let Some(mood) = reply.mood {
                app.current_mood = Some(mood);
                debug!("Chat signaled mood: {}", mood.label());
            }
            app.is_replying = false;
            Effect::None
        }

        Action::CheckInSubmitted { mood, energy, notes } => {
            if app.checkin_recorded {
                // Submission is terminal for the session; the form should
                // never emit twice, but a stray event must not double-record.
                warn!("Duplicate check-in submission ignored");
                return Effect::None;
            }
            debug!(
                "Check-in: mood={} energy={} notes={} chars",
                mood.label(),
                energy,
                notes.len()
            );
            app.mood_history.push(MoodEntry::new(mood, energy));
            app.current_mood = Some(mood);
            app.checkin_recorded = true;
            app.status_message = String::from("Check-in recorded");
            Effect::None
        }

        Action::StartExercise(index) => {
            let Some(exercise) = app.catalog.get(index) else {
                warn!("StartExercise with out-of-range index {index}");
                return Effect::None;
            };
            let duration = exercise.duration_secs;
            app.status_message = format!("Started {}", exercise.title);
            app.timer.start(index, duration);
            Effect::StartCountdown
        }

        Action::ToggleExerciseTimer => {
            let was_running = app.timer.is_running();
            app.timer.toggle();
            match (was_running, app.timer.is_running()) {
                (true, false) => Effect::StopCountdown,
                (false, true) => Effect::StartCountdown,
                _ => Effect::None,
            }
        }

        Action::ResetExerciseTimer => {
            if app.timer.selected.is_none() {
                return Effect::None;
            }
            app.timer.reset();
            Effect::StopCountdown
        }

        Action::LeaveExercise => {
            app.timer.clear();
            Effect::StopCountdown
        }

        Action::CountdownTick => {
            if app.timer.tick() {
                app.status_message = String::from("Exercise complete");
                Effect::StopCountdown
            } else {
                Effect::None
            }
        }

        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exercise::TimerPhase;
    use crate::responder::Responder;
    use crate::test_support::test_app;

    #[test]
    fn test_switch_tab() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SwitchTab(Tab::Insights));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.active_tab, Tab::Insights);
    }

    #[test]
    fn test_submit_appends_user_message_and_spawns_reply() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SubmitChatMessage("hello".into()));
        assert_eq!(effect, Effect::SpawnReply("hello".into()));
        assert!(app.is_replying);
        assert_eq!(app.transcript.messages.len(), 2); // greeting + user
    }

    #[test]
    fn test_submit_while_replying_is_rejected() {
        let mut app = test_app();
        update(&mut app, Action::SubmitChatMessage("first".into()));
        let effect = update(&mut app, Action::SubmitChatMessage("second".into()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.transcript.messages.len(), 2, "second send dropped");
    }

    #[test]
    fn test_reply_ready_applies_mood_signal() {
        let mut app = test_app();
        update(&mut app, Action::SubmitChatMessage("I'm stressed".into()));
        let reply = app.responder.respond("I'm stressed");
        let effect = update(&mut app, Action::ReplyReady(reply));
        assert_eq!(effect, Effect::None);
        assert!(!app.is_replying);
        assert_eq!(app.current_mood, Some(Mood::Stressed));
        assert_eq!(app.transcript.messages.len(), 3);
    }

    #[test]
    fn test_reply_without_signal_keeps_mood() {
        let mut app = test_app();
        app.current_mood = Some(Mood::Happy);
        update(&mut app, Action::ReplyReady(Reply::plain("mm-hm")));
        assert_eq!(app.current_mood, Some(Mood::Happy));
    }

    #[test]
    fn test_checkin_records_entry_and_is_terminal() {
        let mut app = test_app();
        let effect = update(
            &mut app,
            Action::CheckInSubmitted {
                mood: Mood::Good,
                energy: 5,
                notes: String::new(),
            },
        );
        assert_eq!(effect, Effect::None);
        assert_eq!(app.mood_history.len(), 1);
        assert_eq!(app.mood_history[0].mood, Mood::Good);
        assert_eq!(app.mood_history[0].energy, 5);
        assert_eq!(app.current_mood, Some(Mood::Good));
        assert!(app.checkin_recorded);

        // A second submission must not double-record
        update(
            &mut app,
            Action::CheckInSubmitted {
                mood: Mood::Low,
                energy: 2,
                notes: String::new(),
            },
        );
        assert_eq!(app.mood_history.len(), 1);
    }

    #[test]
    fn test_exercise_lifecycle_effects() {
        let mut app = test_app();

        let effect = update(&mut app, Action::StartExercise(0));
        assert_eq!(effect, Effect::StartCountdown);
        assert_eq!(app.timer.phase, TimerPhase::Running);
        assert_eq!(app.timer.remaining, 240);

        let effect = update(&mut app, Action::ToggleExerciseTimer);
        assert_eq!(effect, Effect::StopCountdown);
        assert_eq!(app.timer.phase, TimerPhase::Paused);

        let effect = update(&mut app, Action::ToggleExerciseTimer);
        assert_eq!(effect, Effect::StartCountdown);

        let effect = update(&mut app, Action::ResetExerciseTimer);
        assert_eq!(effect, Effect::StopCountdown);
        assert_eq!(app.timer.remaining, 240);

        let effect = update(&mut app, Action::LeaveExercise);
        assert_eq!(effect, Effect::StopCountdown);
        assert_eq!(app.timer.selected, None);
    }

    #[test]
    fn test_start_exercise_out_of_range_is_ignored() {
        let mut app = test_app();
        let effect = update(&mut app, Action::StartExercise(99));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.timer.phase, TimerPhase::Idle);
    }

    #[test]
    fn test_countdown_tick_finishes() {
        let mut app = test_app();
        update(&mut app, Action::StartExercise(0));
        app.timer.remaining = 1;

        let effect = update(&mut app, Action::CountdownTick);
        assert_eq!(effect, Effect::StopCountdown);
        assert_eq!(app.timer.phase, TimerPhase::Finished);
        assert_eq!(app.status_message, "Exercise complete");

        // Ticks after the finish are inert
        let effect = update(&mut app, Action::CountdownTick);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.timer.remaining, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
