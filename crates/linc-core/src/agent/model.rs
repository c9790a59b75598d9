//! Agent domain model.
//!
//! Represents the conversational agents presented to the user. Each agent
//! has a category that selects its response rules, and a simulated
//! online/offline status maintained by the health monitor.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The domain an agent serves. Selects the response rule table used for
/// replies from that agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentCategory {
    Healthcare,
    Business,
    Development,
    Infrastructure,
}

/// Simulated liveness of an agent.
///
/// Mutated only by the health monitor; every agent starts `Online`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AgentStatus {
    Online,
    Offline,
}

impl Default for AgentStatus {
    fn default() -> Self {
        AgentStatus::Online
    }
}

/// A named, categorized conversational agent.
///
/// In this platform an agent is a display/response-template construct, not a
/// live backend service: it has a stable id, a display name, a category and
/// an ordered list of capability tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    /// Stable identifier (slug, e.g. "doctorlinc")
    pub id: String,
    /// Display name shown in the transcript
    pub name: String,
    /// Short description of what the agent does
    pub description: String,
    /// Domain category (selects the response rules)
    pub category: AgentCategory,
    /// Simulated online/offline status
    #[serde(default)]
    pub status: AgentStatus,
    /// Ordered capability tags
    #[serde(default)]
    pub capabilities: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_strings() {
        assert_eq!(AgentCategory::Healthcare.to_string(), "healthcare");
        assert_eq!(
            "infrastructure".parse::<AgentCategory>().unwrap(),
            AgentCategory::Infrastructure
        );
    }

    #[test]
    fn test_status_defaults_to_online() {
        let profile: AgentProfile = serde_json::from_str(
            r#"{"id":"devlinc","name":"DevLINC","description":"","category":"development"}"#,
        )
        .unwrap();
        assert_eq!(profile.status, AgentStatus::Online);
        assert!(profile.capabilities.is_empty());
    }
}
