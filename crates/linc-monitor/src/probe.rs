//! Agent status probes.

use async_trait::async_trait;
use rand::Rng;

use linc_core::agent::{AgentProfile, AgentStatus};

/// Decides an agent's next status on each monitor sweep.
///
/// The shipped implementation simulates liveness with a random draw. A real
/// deployment would probe each agent's health endpoint here instead; whether
/// to do that, and with what retry policy, is an open product decision, so
/// the seam exists but only the simulation ships.
#[async_trait]
pub trait StatusProbe: Send + Sync {
    async fn probe(&self, agent: &AgentProfile) -> AgentStatus;
}

/// Probability of the default probe reporting an agent online.
pub const DEFAULT_ONLINE_PROBABILITY: f64 = 0.9;

/// Simulated probe: each agent is independently online with a fixed
/// probability. Performs no I/O and never fails.
#[derive(Debug, Clone)]
pub struct SimulatedProbe {
    pub online_probability: f64,
}

impl SimulatedProbe {
    pub fn new(online_probability: f64) -> Self {
        Self { online_probability }
    }
}

impl Default for SimulatedProbe {
    fn default() -> Self {
        Self::new(DEFAULT_ONLINE_PROBABILITY)
    }
}

#[async_trait]
impl StatusProbe for SimulatedProbe {
    async fn probe(&self, _agent: &AgentProfile) -> AgentStatus {
        if rand::thread_rng().gen_bool(self.online_probability) {
            AgentStatus::Online
        } else {
            AgentStatus::Offline
        }
    }
}
