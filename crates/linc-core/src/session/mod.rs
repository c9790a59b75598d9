//! Session state and transcript messages.

pub mod message;
pub mod model;

pub use message::{ChatMessage, MessageRole};
pub use model::ChatSession;
