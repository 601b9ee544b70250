use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Companion,
}

/// A single message in the conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Opening message shown before the user has typed anything.
pub const DEFAULT_GREETING: &str = "Hello! I'm your wellness companion. \
    I'm here to support your mental health journey. How are you feeling today?";

/// The append-only chat log, scoped to the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// Creates a new Transcript seeded with the default greeting.
    pub fn new() -> Self {
        Self::with_greeting(DEFAULT_GREETING)
    }

    /// Creates a new Transcript seeded with a custom greeting.
    pub fn with_greeting(greeting: &str) -> Self {
        Transcript {
            messages: vec![ChatMessage::new(Role::Companion, greeting)],
        }
    }

    /// Appends a user message and returns a reference to it.
    pub fn add_user_message(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.add(ChatMessage::new(Role::User, content))
    }

    /// Appends a companion message and returns a reference to it.
    pub fn add_companion_message(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.add(ChatMessage::new(Role::Companion, content))
    }

    fn add(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        self.messages.last().expect("just pushed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.messages.len(), 1);
        assert_eq!(transcript.messages[0].role, Role::Companion);
        assert!(transcript.messages[0].content.starts_with("Hello!"));
    }

    #[test]
    fn test_add_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.add_user_message("hi");
        transcript.add_companion_message("hello there");

        let roles: Vec<Role> = transcript.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Companion, Role::User, Role::Companion]);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let mut transcript = Transcript::new();
        let a = transcript.add_user_message("one").id;
        let b = transcript.add_user_message("two").id;
        assert_ne!(a, b);
    }
}
