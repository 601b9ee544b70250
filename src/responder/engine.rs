use crate::core::mood::Mood;

/// One generated reply, plus the mood it detected in the user's message
/// (if any). The mood travels with the reply so the reducer — not the
/// engine — decides what to do with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub mood: Option<Mood>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            mood: None,
        }
    }
}

/// Anything that can answer a user message.
///
/// Implementations never see history — a reply is a function of the single
/// latest message. Callers filter empty input before invoking; an
/// implementation may assume non-empty text.
pub trait Responder: Send + Sync {
    /// Returns the name of the engine.
    fn name(&self) -> &str;

    /// Produce a reply for the given user message.
    fn respond(&self, input: &str) -> Reply;
}
