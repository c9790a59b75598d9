//! Aggregate health types.
//!
//! A snapshot is recomputed after every monitor sweep: the system counts as
//! healthy while the online fraction stays strictly above the configured
//! threshold.

use serde::{Deserialize, Serialize};

/// Fraction of agents that must be online for the system to count as healthy.
pub const DEFAULT_HEALTHY_FRACTION: f64 = 0.7;

/// Aggregate health at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    /// True while `online / total > healthy_fraction`.
    pub healthy: bool,
    /// Agents currently reporting online.
    pub online: usize,
    /// Total registered agents.
    pub total: usize,
    /// When the snapshot was taken (ISO 8601 format).
    pub checked_at: String,
}

impl HealthSnapshot {
    /// Computes a snapshot from the current counts.
    ///
    /// An empty registry is never healthy. The threshold comparison is
    /// strictly greater-than: 7 of 10 online with a 0.7 fraction is
    /// unhealthy, 8 of 10 is healthy.
    pub fn compute(online: usize, total: usize, healthy_fraction: f64) -> Self {
        let healthy = total > 0 && (online as f64 / total as f64) > healthy_fraction;
        Self {
            healthy,
            online,
            total,
            checked_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// System-wide counters reported by the status surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    /// Session identifier the metrics were gathered for.
    pub session_id: String,
    /// Seconds since the process started.
    pub uptime_secs: u64,
    /// Total registered agents.
    pub agents_total: usize,
    /// Agents currently reporting online.
    pub agents_online: usize,
    /// Aggregate health at collection time.
    pub healthy: bool,
    /// Messages in the active transcript.
    pub transcript_len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        assert!(!HealthSnapshot::compute(7, 10, 0.7).healthy);
        assert!(HealthSnapshot::compute(8, 10, 0.7).healthy);
    }

    #[test]
    fn test_all_online_is_healthy() {
        let snapshot = HealthSnapshot::compute(8, 8, DEFAULT_HEALTHY_FRACTION);
        assert!(snapshot.healthy);
        assert_eq!(snapshot.online, 8);
        assert_eq!(snapshot.total, 8);
    }

    #[test]
    fn test_empty_registry_is_unhealthy() {
        assert!(!HealthSnapshot::compute(0, 0, DEFAULT_HEALTHY_FRACTION).healthy);
    }
}
