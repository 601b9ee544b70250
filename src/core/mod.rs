//! # Core Application Logic
//!
//! This module contains Sana's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • mood / insights /    │
//!                    │    exercise domain      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all cross-cutting state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`mood`]: Mood vocabulary and mood-entry records
//! - [`insights`]: Pure aggregation over the mood history
//! - [`exercise`]: Exercise catalog and countdown state machine
//! - [`config`]: TOML config loading and resolution

pub mod action;
pub mod config;
pub mod exercise;
pub mod insights;
pub mod mood;
pub mod state;
