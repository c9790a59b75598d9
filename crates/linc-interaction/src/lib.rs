//! Session interaction: the engine that drives one chat session.

pub mod engine;

pub use engine::{ChatEngine, EngineConfig};

use linc_core::session::ChatMessage;

/// Why a submission was silently ignored.
///
/// The transcript is untouched in every case; the reason only serves the UI,
/// which may show a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The trimmed input was empty.
    EmptyInput,
    /// No agent has been selected yet.
    NoAgentSelected,
    /// A response is already being generated.
    Busy,
    /// The session was reset while the response was in flight; the reply
    /// was discarded.
    SessionReset,
}

/// Result of one interaction with the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionResult {
    /// The submission was a no-op; the transcript is unchanged.
    Ignored(IgnoreReason),
    /// An agent was selected; the transcript was reset to this greeting.
    Greeting(ChatMessage),
    /// The agent's reply to a submitted message.
    Reply(ChatMessage),
}
