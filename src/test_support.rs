//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::state::App;
use crate::responder::{KeywordResponder, Reply, Responder};

/// A responder that always returns the same reply, for tests that need
/// full control over what comes back.
pub struct ScriptedResponder {
    pub reply: Reply,
}

impl Responder for ScriptedResponder {
    fn name(&self) -> &str {
        "scripted"
    }

    fn respond(&self, _input: &str) -> Reply {
        self.reply.clone()
    }
}

/// Creates a test App with a deterministic keyword engine.
pub fn test_app() -> App {
    App::new(Arc::new(KeywordResponder::seeded(0)))
}

/// Creates a test App whose responder always says `text`.
pub fn scripted_app(text: &str) -> App {
    App::new(Arc::new(ScriptedResponder {
        reply: Reply::plain(text),
    }))
}
