//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Two patterns, following the split between what a component shows and
//! what it remembers:
//!
//! ### Stateless (props-based) components
//!
//! Receive all data as struct fields, hold nothing between frames:
//! - `TabBar`: tab strip, status text, mood indicator
//! - `Message`: a single chat message
//! - `InsightsView`: aggregates over the mood history
//! - `ExercisePlayer`: the active countdown session
//!
//! ### Stateful (event-driven) components
//!
//! Own local state and emit high-level events upward:
//! - `InputBox`: the chat text input
//! - `CheckInForm`: the daily check-in fields
//! - `ChatState` / `ChatView`: transcript scrolling
//! - `ExerciseListState` / `ExerciseCatalog`: catalog selection
//! - `ResourcesView`: scroll offset over the static listing
//!
//! Components never reach into `App` — data arrives as props and changes
//! leave as events, which the event loop turns into `core::Action`s. Each
//! component file holds its state types, event types, rendering, event
//! handling and tests.

pub mod chat;
pub mod check_in;
pub mod exercises;
pub mod input_box;
pub mod insights;
pub mod message;
pub mod resources;
pub mod tab_bar;

pub use chat::{ChatState, ChatView};
pub use check_in::{CheckInEvent, CheckInForm};
pub use exercises::{ExerciseCatalog, ExerciseListState, ExercisePlayer};
pub use input_box::{InputBox, InputEvent};
pub use insights::InsightsView;
pub use resources::ResourcesView;
pub use tab_bar::TabBar;
