//! The chat engine driving one interactive session.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, info};

use linc_core::agent::AgentRegistry;
use linc_core::error::{LincError, Result};
use linc_core::responder::{self, APOLOGY};
use linc_core::session::{ChatMessage, ChatSession};

use crate::{IgnoreReason, InteractionResult};

/// Tunables for the engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Lower bound of the simulated response delay.
    pub min_delay: Duration,
    /// Upper bound of the simulated response delay.
    pub max_delay: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(3),
        }
    }
}

impl EngineConfig {
    /// Zero-delay configuration, used by tests.
    pub fn immediate() -> Self {
        Self {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
        }
    }
}

/// Drives a single chat session against the agent registry.
///
/// All state lives behind `Arc`s, so the engine is cheap to clone and can be
/// shared with spawned tasks. The session's busy flag is the sole
/// concurrency guard: a submission while a response is in flight is a
/// silent no-op.
#[derive(Clone)]
pub struct ChatEngine {
    registry: Arc<AgentRegistry>,
    session: Arc<RwLock<ChatSession>>,
    config: EngineConfig,
}

impl ChatEngine {
    /// Creates an engine with a fresh, agentless session.
    pub fn new(registry: Arc<AgentRegistry>, config: EngineConfig) -> Self {
        Self {
            registry,
            session: Arc::new(RwLock::new(ChatSession::new())),
            config,
        }
    }

    /// Selects an agent by id, resetting the transcript to one greeting.
    ///
    /// # Errors
    ///
    /// Returns `LincError::NotFound` if the registry has no such agent.
    pub async fn select_agent(&self, id: &str) -> Result<InteractionResult> {
        let agent = self
            .registry
            .get(id)
            .await
            .ok_or_else(|| LincError::not_found("agent", id))?;

        let mut session = self.session.write().await;
        info!(session_id = %session.id, agent_id = %agent.id, "agent selected");
        let greeting = session.select_agent(agent);
        Ok(InteractionResult::Greeting(greeting))
    }

    /// Submits one user message.
    ///
    /// A no-op when the trimmed text is empty, no agent is selected, or a
    /// response is already in flight. Otherwise the user message is
    /// appended, the busy flag is set, a bounded random delay simulates the
    /// agent thinking, and the canned reply is appended.
    pub async fn submit(&self, text: &str) -> InteractionResult {
        let text = text.trim();
        if text.is_empty() {
            return InteractionResult::Ignored(IgnoreReason::EmptyInput);
        }

        // Phase one: record the user message and claim the busy flag.
        let (agent_id, category) = {
            let mut session = self.session.write().await;
            let Some(agent) = session.selected_agent.clone() else {
                return InteractionResult::Ignored(IgnoreReason::NoAgentSelected);
            };
            if session.busy {
                debug!(session_id = %session.id, "submit ignored: response in flight");
                return InteractionResult::Ignored(IgnoreReason::Busy);
            }
            session.push_user(text);
            session.busy = true;
            (agent.id, agent.category)
        };

        // Cooperative suspension point; the lock is not held while waiting.
        tokio::time::sleep(self.response_delay()).await;

        let reply = responder::respond(category, text).unwrap_or_else(|| APOLOGY.to_string());

        // Phase two: append the reply, unless the session was reset while
        // the response was in flight.
        let mut session = self.session.write().await;
        let still_current = session.busy
            && session
                .selected_agent
                .as_ref()
                .is_some_and(|a| a.id == agent_id);
        if !still_current {
            debug!(session_id = %session.id, "reply discarded: session was reset");
            return InteractionResult::Ignored(IgnoreReason::SessionReset);
        }
        let message = session.push_agent(agent_id, reply);
        session.busy = false;
        InteractionResult::Reply(message)
    }

    /// Snapshot of the transcript, in append order.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.session.read().await.transcript.clone()
    }

    /// The currently selected agent, if any.
    pub async fn selected_agent(&self) -> Option<linc_core::agent::AgentProfile> {
        self.session.read().await.selected_agent.clone()
    }

    /// True while a response is being generated.
    pub async fn is_busy(&self) -> bool {
        self.session.read().await.busy
    }

    /// The session identifier.
    pub async fn session_id(&self) -> String {
        self.session.read().await.id.clone()
    }

    fn response_delay(&self) -> Duration {
        let min = self.config.min_delay.as_millis() as u64;
        let max = self.config.max_delay.as_millis() as u64;
        if max <= min {
            return self.config.min_delay;
        }
        let millis = rand::thread_rng().gen_range(min..=max);
        Duration::from_millis(millis)
    }
}
