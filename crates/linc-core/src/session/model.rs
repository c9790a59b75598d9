//! Session domain model.
//!
//! One interactive session: the currently selected agent, the ordered
//! transcript, and the busy flag that serializes response generation.

use serde::{Deserialize, Serialize};

use super::message::{ChatMessage, MessageRole};
use crate::agent::AgentProfile;

/// State owned by a single interactive session.
///
/// The transcript is strictly append-ordered and is reset (together with the
/// message id counter) whenever a new agent is selected. The busy flag is the
/// sole concurrency guard: while it is set, further submissions are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Unique session identifier (UUID format)
    pub id: String,
    /// Timestamp when the session was created (ISO 8601 format)
    pub created_at: String,
    /// The currently selected agent, if any
    pub selected_agent: Option<AgentProfile>,
    /// Ordered transcript of exchanged messages
    pub transcript: Vec<ChatMessage>,
    /// Set while a response is being generated
    pub busy: bool,
    next_message_id: u64,
}

impl ChatSession {
    /// Creates an empty session with no agent selected.
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            selected_agent: None,
            transcript: Vec::new(),
            busy: false,
            next_message_id: 1,
        }
    }

    /// Selects an agent, resetting the transcript to a single greeting.
    ///
    /// Returns the synthesized greeting message.
    pub fn select_agent(&mut self, agent: AgentProfile) -> ChatMessage {
        self.transcript.clear();
        self.next_message_id = 1;
        self.busy = false;

        let greeting = format!(
            "Hello! I'm {}. {} How can I help you today?",
            agent.name, agent.description
        );
        let agent_id = agent.id.clone();
        self.selected_agent = Some(agent);
        self.append(MessageRole::Agent, greeting, Some(agent_id))
    }

    /// Appends a user message.
    pub fn push_user(&mut self, content: impl Into<String>) -> ChatMessage {
        self.append(MessageRole::User, content.into(), None)
    }

    /// Appends an agent message.
    pub fn push_agent(&mut self, agent_id: impl Into<String>, content: impl Into<String>) -> ChatMessage {
        self.append(MessageRole::Agent, content.into(), Some(agent_id.into()))
    }

    fn append(&mut self, role: MessageRole, content: String, agent_id: Option<String>) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_message_id,
            role,
            content,
            agent_id,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };
        self.next_message_id += 1;
        self.transcript.push(message.clone());
        message
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::default_agents;

    fn agent(id: &str) -> AgentProfile {
        default_agents().into_iter().find(|a| a.id == id).unwrap()
    }

    #[test]
    fn test_select_agent_resets_transcript_to_one_greeting() {
        let mut session = ChatSession::new();
        session.push_user("hello?");
        session.select_agent(agent("doctorlinc"));

        assert_eq!(session.transcript.len(), 1);
        let greeting = &session.transcript[0];
        assert_eq!(greeting.role, MessageRole::Agent);
        assert!(greeting.content.contains("DoctorLINC"));
        assert_eq!(greeting.id, 1);
    }

    #[test]
    fn test_reselecting_replaces_the_agent() {
        let mut session = ChatSession::new();
        session.select_agent(agent("doctorlinc"));
        session.push_user("hi");
        session.select_agent(agent("bizlinc"));

        assert_eq!(session.selected_agent.as_ref().unwrap().id, "bizlinc");
        assert_eq!(session.transcript.len(), 1);
        assert!(session.transcript[0].content.contains("BizLINC"));
    }

    #[test]
    fn test_message_ids_are_monotonic_in_append_order() {
        let mut session = ChatSession::new();
        session.select_agent(agent("devlinc"));
        session.push_user("first");
        session.push_agent("devlinc", "second");
        session.push_user("third");

        let ids: Vec<u64> = session.transcript.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
