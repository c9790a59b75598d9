//! Transcript message types.

use serde::{Deserialize, Serialize};

/// Represents the sender of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message from the user.
    User,
    /// Message from the selected agent.
    Agent,
    /// System-generated notice.
    System,
}

/// A single message in a session transcript.
///
/// Messages are immutable once appended. Ids are monotonic within one
/// session and restart when a new agent is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Monotonic id within the session.
    pub id: u64,
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
    /// Id of the agent that produced this message, for `Agent` messages.
    #[serde(default)]
    pub agent_id: Option<String>,
    /// Timestamp when the message was created (ISO 8601 format).
    pub timestamp: String,
}
