//! The periodic health sweep task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use linc_core::agent::AgentRegistry;
use linc_core::health::{DEFAULT_HEALTHY_FRACTION, HealthSnapshot};

use crate::probe::{SimulatedProbe, StatusProbe};

/// Tunables for the health monitor.
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Time between sweeps.
    pub interval: Duration,
    /// Online fraction above which the system counts as healthy.
    pub healthy_fraction: f64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(30),
            healthy_fraction: DEFAULT_HEALTHY_FRACTION,
        }
    }
}

/// Periodically re-probes every agent's status and recomputes aggregate
/// health.
///
/// The monitor runs as an explicitly owned background task: `spawn` returns
/// a [`MonitorHandle`] whose `shutdown` cancels the task and awaits it, so
/// the sweep's lifecycle matches the session's rather than living as an
/// ambient interval.
pub struct HealthMonitor {
    registry: Arc<AgentRegistry>,
    probe: Arc<dyn StatusProbe>,
    config: MonitorConfig,
}

/// Handle to a running monitor task.
pub struct MonitorHandle {
    latest: Arc<RwLock<Option<HealthSnapshot>>>,
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl HealthMonitor {
    /// Creates a monitor with the default simulated probe.
    pub fn new(registry: Arc<AgentRegistry>, config: MonitorConfig) -> Self {
        Self::with_probe(registry, Arc::new(SimulatedProbe::default()), config)
    }

    /// Creates a monitor with a custom probe.
    pub fn with_probe(
        registry: Arc<AgentRegistry>,
        probe: Arc<dyn StatusProbe>,
        config: MonitorConfig,
    ) -> Self {
        Self {
            registry,
            probe,
            config,
        }
    }

    /// Starts the background sweep task.
    ///
    /// The first sweep runs immediately; subsequent sweeps follow the
    /// configured interval until the handle is shut down.
    pub fn spawn(self) -> MonitorHandle {
        let latest: Arc<RwLock<Option<HealthSnapshot>>> = Arc::new(RwLock::new(None));
        let cancel = CancellationToken::new();

        let task_latest = Arc::clone(&latest);
        let task_cancel = cancel.clone();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.config.interval);
            info!(interval_secs = self.config.interval.as_secs(), "health monitor started");
            loop {
                tokio::select! {
                    _ = task_cancel.cancelled() => {
                        info!("health monitor stopped");
                        break;
                    }
                    _ = ticker.tick() => {
                        let snapshot = self.sweep().await;
                        *task_latest.write().await = Some(snapshot);
                    }
                }
            }
        });

        MonitorHandle {
            latest,
            cancel,
            task,
        }
    }

    /// Runs one sweep: probe every agent independently, store the statuses,
    /// and compute the aggregate snapshot.
    async fn sweep(&self) -> HealthSnapshot {
        let agents = self.registry.all().await;
        for agent in &agents {
            let status = self.probe.probe(agent).await;
            // The id came from the registry moments ago; a miss here means
            // the fleet changed mid-sweep, which the platform never does.
            let _ = self.registry.set_status(&agent.id, status).await;
        }

        let online = self.registry.online_count().await;
        let total = self.registry.len().await;
        let snapshot = HealthSnapshot::compute(online, total, self.config.healthy_fraction);
        debug!(online, total, healthy = snapshot.healthy, "health sweep complete");
        snapshot
    }
}

impl MonitorHandle {
    /// The most recent snapshot, if a sweep has completed.
    pub async fn latest(&self) -> Option<HealthSnapshot> {
        self.latest.read().await.clone()
    }

    /// Cancels the sweep task and waits for it to finish.
    pub async fn shutdown(self) {
        self.cancel.cancel();
        let _ = self.task.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linc_core::agent::{AgentStatus, default_agents};

    fn monitor_with(probability: f64, interval_ms: u64) -> (Arc<AgentRegistry>, HealthMonitor) {
        let registry = Arc::new(AgentRegistry::new(default_agents()));
        let config = MonitorConfig {
            interval: Duration::from_millis(interval_ms),
            ..MonitorConfig::default()
        };
        let monitor = HealthMonitor::with_probe(
            Arc::clone(&registry),
            Arc::new(SimulatedProbe::new(probability)),
            config,
        );
        (registry, monitor)
    }

    #[tokio::test]
    async fn test_sweep_with_certain_probe_marks_everyone_online() {
        let (registry, monitor) = monitor_with(1.0, 10);
        let snapshot = monitor.sweep().await;
        assert!(snapshot.healthy);
        assert_eq!(snapshot.online, snapshot.total);
        assert_eq!(registry.online_count().await, registry.len().await);
    }

    #[tokio::test]
    async fn test_sweep_with_zero_probe_is_unhealthy() {
        let (registry, monitor) = monitor_with(0.0, 10);
        let snapshot = monitor.sweep().await;
        assert!(!snapshot.healthy);
        assert_eq!(snapshot.online, 0);
        assert!(
            registry
                .all()
                .await
                .iter()
                .all(|a| a.status == AgentStatus::Offline)
        );
    }

    #[tokio::test]
    async fn test_spawned_monitor_publishes_snapshots_and_shuts_down() {
        let (_registry, monitor) = monitor_with(1.0, 10);
        let handle = monitor.spawn();

        tokio::time::sleep(Duration::from_millis(50)).await;
        let snapshot = handle.latest().await.expect("no sweep completed");
        assert!(snapshot.healthy);

        handle.shutdown().await;
    }
}
