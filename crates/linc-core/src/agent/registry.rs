//! In-memory agent registry.

use tokio::sync::RwLock;

use super::model::{AgentProfile, AgentStatus};
use crate::error::{LincError, Result};

/// Read-mostly registry of every agent known to the platform.
///
/// Populated once at startup and never reordered. The only mutation is
/// status toggling, performed by the health monitor. Shared across the
/// engine, the monitor and the CLI as `Arc<AgentRegistry>`.
pub struct AgentRegistry {
    agents: RwLock<Vec<AgentProfile>>,
}

impl AgentRegistry {
    /// Creates a registry from the given profiles, preserving their order.
    pub fn new(agents: Vec<AgentProfile>) -> Self {
        Self {
            agents: RwLock::new(agents),
        }
    }

    /// Returns a snapshot of every profile, in registration order.
    pub async fn all(&self) -> Vec<AgentProfile> {
        self.agents.read().await.clone()
    }

    /// Looks up a single agent by id.
    pub async fn get(&self, id: &str) -> Option<AgentProfile> {
        self.agents.read().await.iter().find(|a| a.id == id).cloned()
    }

    /// Sets an agent's simulated status.
    ///
    /// # Errors
    ///
    /// Returns `LincError::NotFound` if no agent has the given id.
    pub async fn set_status(&self, id: &str, status: AgentStatus) -> Result<()> {
        let mut agents = self.agents.write().await;
        match agents.iter_mut().find(|a| a.id == id) {
            Some(agent) => {
                agent.status = status;
                Ok(())
            }
            None => Err(LincError::not_found("agent", id)),
        }
    }

    /// Number of registered agents.
    pub async fn len(&self) -> usize {
        self.agents.read().await.len()
    }

    /// True when the registry holds no agents.
    pub async fn is_empty(&self) -> bool {
        self.agents.read().await.is_empty()
    }

    /// Number of agents currently reporting `Online`.
    pub async fn online_count(&self) -> usize {
        self.agents
            .read()
            .await
            .iter()
            .filter(|a| a.status == AgentStatus::Online)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::preset::default_agents;

    #[tokio::test]
    async fn test_registry_preserves_registration_order() {
        let presets = default_agents();
        let expected: Vec<String> = presets.iter().map(|a| a.id.clone()).collect();
        let registry = AgentRegistry::new(presets);

        let actual: Vec<String> = registry.all().await.into_iter().map(|a| a.id).collect();
        assert_eq!(actual, expected);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let registry = AgentRegistry::new(default_agents());
        let agent = registry.get("doctorlinc").await.unwrap();
        assert_eq!(agent.name, "DoctorLINC");
        assert!(registry.get("no-such-agent").await.is_none());
    }

    #[tokio::test]
    async fn test_set_status_toggles_and_counts() {
        let registry = AgentRegistry::new(default_agents());
        let total = registry.len().await;
        assert_eq!(registry.online_count().await, total);

        registry
            .set_status("paylinc", AgentStatus::Offline)
            .await
            .unwrap();
        assert_eq!(registry.online_count().await, total - 1);
        assert_eq!(
            registry.get("paylinc").await.unwrap().status,
            AgentStatus::Offline
        );
    }

    #[tokio::test]
    async fn test_set_status_unknown_id_is_an_error() {
        let registry = AgentRegistry::new(default_agents());
        let err = registry
            .set_status("ghostlinc", AgentStatus::Offline)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
