//! # Response Engine
//!
//! Generates the companion's side of the conversation. The [`Responder`]
//! trait is the seam between the app and whatever produces replies; the
//! only production implementation is [`KeywordResponder`], a table of
//! canned responses selected by substring keyword matching.
//!
//! Replies carry an optional mood signal as data — the reducer applies it
//! to the app state, so there is no hidden callback to chase in tests.

pub mod engine;
pub mod keyword;
pub mod types;

pub use engine::{Reply, Responder};
pub use keyword::KeywordResponder;
pub use types::{ChatMessage, Role, Transcript};
