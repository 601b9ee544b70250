//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The core never imports from here, so a different front end could be
//! bolted on without touching the domain logic.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (typing indicator, running countdown): draws every
//!   ~80ms so the dots and clock stay lively.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Background Tasks
//!
//! Two tokio tasks feed `Action`s back over an mpsc channel:
//!
//! - `spawn_reply`: sleeps for the configured thinking delay, asks the
//!   responder for a reply, sends `Action::ReplyReady`.
//! - `spawn_countdown`: sends `Action::CountdownTick` once a second while
//!   an exercise is running.
//!
//! The loop owns their abort handles and cancels them whenever the state
//! they serve goes away (pause, reset, leave, quit), so no timer outlives
//! its session.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use tokio::task::AbortHandle;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Tab};
use crate::responder::{KeywordResponder, Responder};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    ChatState, CheckInEvent, CheckInForm, ExerciseListState, InputBox, InputEvent, ResourcesView,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub chat: ChatState,
    pub input_box: InputBox,
    pub check_in: CheckInForm,
    pub exercises: ExerciseListState,
    pub resources_scroll: u16,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            chat: ChatState::new(),
            input_box: InputBox::new(),
            check_in: CheckInForm::new(),
            exercises: ExerciseListState::new(),
            resources_scroll: 0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse capture, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let responder: Arc<dyn Responder> = Arc::new(KeywordResponder::new());
    let mut app = App::from_config(responder, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for the pending reply and the countdown ticker
    let mut reply_handle: Option<AbortHandle> = None;
    let mut ticker_handle: Option<AbortHandle> = None;

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    loop {
        // Sync component props with core state
        tui.check_in.recorded = app.checkin_recorded;

        // Animations run while a reply is pending or a countdown is live
        let animating = app.is_replying || app.timer.is_running();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 2.5) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating, long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Ctrl+C always quits regardless of view
            if matches!(event, TuiEvent::ForceQuit) {
                if apply(
                    &mut app,
                    Action::Quit,
                    &tx,
                    &mut reply_handle,
                    &mut ticker_handle,
                ) {
                    should_quit = true;
                }
                continue;
            }

            // Tab cycling works from every view
            let action = match event {
                TuiEvent::NextTab => Some(Action::SwitchTab(app.active_tab.next())),
                TuiEvent::PrevTab => Some(Action::SwitchTab(app.active_tab.prev())),
                _ => route_event(&event, &app, &mut tui),
            };

            if let Some(action) = action
                && apply(
                    &mut app,
                    action,
                    &tx,
                    &mut reply_handle,
                    &mut ticker_handle,
                )
            {
                should_quit = true;
            }
        }

        // Handle background task actions (delayed reply, countdown ticks)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(
                &mut app,
                action,
                &tx,
                &mut reply_handle,
                &mut ticker_handle,
            ) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Run the reducer and perform the returned effect. Returns true on quit.
fn apply(
    app: &mut App,
    action: Action,
    tx: &mpsc::Sender<Action>,
    reply_handle: &mut Option<AbortHandle>,
    ticker_handle: &mut Option<AbortHandle>,
) -> bool {
    match update(app, action) {
        Effect::None => false,
        Effect::SpawnReply(text) => {
            *reply_handle = Some(spawn_reply(
                app.responder.clone(),
                text,
                app.thinking_delay,
                tx.clone(),
            ));
            false
        }
        Effect::StartCountdown => {
            if let Some(handle) = ticker_handle.take() {
                handle.abort();
            }
            *ticker_handle = Some(spawn_countdown(tx.clone()));
            false
        }
        Effect::StopCountdown => {
            if let Some(handle) = ticker_handle.take() {
                handle.abort();
            }
            false
        }
        Effect::Quit => {
            if let Some(handle) = reply_handle.take() {
                handle.abort();
            }
            if let Some(handle) = ticker_handle.take() {
                handle.abort();
            }
            true
        }
    }
}

/// Translate an event into an action based on the active view.
///
/// Components get first refusal; events they don't consume can still mean
/// something globally (digit tab switching outside text fields).
fn route_event(event: &TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match app.active_tab {
        Tab::Chat => {
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
            ) {
                tui.chat.handle_event(event);
                return None;
            }
            match tui.input_box.handle_event(event)? {
                InputEvent::Submit(text) => {
                    if app.is_replying {
                        // The reducer guards too; skipping here keeps the
                        // typed text out of the void
                        debug!("Chat submit ignored while reply pending");
                        None
                    } else {
                        Some(Action::SubmitChatMessage(text))
                    }
                }
                InputEvent::ContentChanged => None,
            }
        }

        Tab::CheckIn => {
            if let Some(CheckInEvent::Submit {
                mood,
                energy,
                notes,
            }) = tui.check_in.handle_event(event)
            {
                return Some(Action::CheckInSubmitted {
                    mood,
                    energy,
                    notes,
                });
            }
            if tui.check_in.captures_text() {
                None
            } else {
                digit_tab(event)
            }
        }

        Tab::Exercises => {
            if app.timer.selected.is_some() {
                match event {
                    TuiEvent::InputChar(' ') => Some(Action::ToggleExerciseTimer),
                    TuiEvent::InputChar('r') => Some(Action::ResetExerciseTimer),
                    TuiEvent::Escape => Some(Action::LeaveExercise),
                    _ => digit_tab(event),
                }
            } else {
                match event {
                    TuiEvent::CursorUp => {
                        tui.exercises.up();
                        None
                    }
                    TuiEvent::CursorDown => {
                        tui.exercises.down(app.catalog.len());
                        None
                    }
                    TuiEvent::Submit => Some(Action::StartExercise(tui.exercises.selected)),
                    _ => digit_tab(event),
                }
            }
        }

        Tab::Insights => digit_tab(event),

        Tab::Resources => {
            let mut view = ResourcesView::new(&mut tui.resources_scroll);
            if view.handle_event(event).is_some() {
                None
            } else {
                digit_tab(event)
            }
        }
    }
}

/// Keys 1-5 jump straight to a tab (outside text fields).
fn digit_tab(event: &TuiEvent) -> Option<Action> {
    if let TuiEvent::InputChar(c) = event
        && let Some(digit) = c.to_digit(10)
        && (1..=Tab::ALL.len() as u32).contains(&digit)
    {
        return Some(Action::SwitchTab(Tab::ALL[(digit - 1) as usize]));
    }
    None
}

/// Ask the responder for a reply after the simulated thinking pause.
///
/// The pause is not cancellable by further input (submits are rejected
/// while pending), but quitting aborts the task via the returned handle.
pub fn spawn_reply(
    responder: Arc<dyn Responder>,
    input: String,
    delay: Duration,
    tx: mpsc::Sender<Action>,
) -> AbortHandle {
    info!("Spawning delayed reply ({}ms)", delay.as_millis());
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let reply = responder.respond(&input);
        if tx.send(Action::ReplyReady(reply)).is_err() {
            warn!("Failed to deliver reply: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Send a `CountdownTick` every second until aborted.
pub fn spawn_countdown(tx: mpsc::Sender<Action>) -> AbortHandle {
    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        interval.tick().await; // first tick completes immediately
        loop {
            interval.tick().await;
            if tx.send(Action::CountdownTick).is_err() {
                warn!("Failed to deliver countdown tick: receiver dropped");
                return;
            }
        }
    });
    handle.abort_handle()
}
