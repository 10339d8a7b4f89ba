//! Message model representing one turn in the chat log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// Typed by the person at the keyboard.
    User,
    /// Reply from the backend, the fallback responder, or the view itself.
    Bot,
}

impl Sender {
    /// Short label used when rendering.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single entry in the conversation log. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Position in the log, assigned by the view (1 is the greeting).
    pub id: i64,
    /// Text as typed or as received.
    pub text: String,
    /// Author of the message.
    pub sender: Sender,
    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time.
    pub fn new(id: i64, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}
