//! Health simulation: periodic status sweeps over the agent registry.

pub mod monitor;
pub mod probe;

pub use monitor::{HealthMonitor, MonitorConfig, MonitorHandle};
pub use probe::{DEFAULT_ONLINE_PROBABILITY, SimulatedProbe, StatusProbe};
