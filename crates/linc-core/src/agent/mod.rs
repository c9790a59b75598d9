//! Agent profiles, presets and the registry.

pub mod config;
pub mod model;
pub mod preset;
pub mod registry;

pub use config::RegistryConfig;
pub use model::{AgentCategory, AgentProfile, AgentStatus};
pub use preset::default_agents;
pub use registry::AgentRegistry;
