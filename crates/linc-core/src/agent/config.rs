//! Registry file loading.
//!
//! An agent fleet can be defined in a TOML file with `[[agent]]` tables:
//!
//! ```toml
//! [[agent]]
//! id = "doctorlinc"
//! name = "DoctorLINC"
//! description = "Physician assistant."
//! category = "healthcare"
//! capabilities = ["clinical-notes"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::model::AgentProfile;
use crate::error::{LincError, Result};

/// Root of a registry TOML document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(rename = "agent", default)]
    pub agents: Vec<AgentProfile>,
}

impl RegistryConfig {
    /// Parses a registry document from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `LincError::Serialization` on malformed TOML and
    /// `LincError::Config` when the document is empty or ids collide.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: RegistryConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a registry document from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if self.agents.is_empty() {
            return Err(LincError::config("registry defines no agents"));
        }
        for (i, agent) in self.agents.iter().enumerate() {
            if self.agents[..i].iter().any(|a| a.id == agent.id) {
                return Err(LincError::config(format!(
                    "duplicate agent id '{}'",
                    agent.id
                )));
            }
        }
        Ok(())
    }

    /// Consumes the document, yielding the profiles in file order.
    pub fn into_profiles(self) -> Vec<AgentProfile> {
        self.agents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::model::{AgentCategory, AgentStatus};
    use std::io::Write;

    const SAMPLE: &str = r#"
[[agent]]
id = "doctorlinc"
name = "DoctorLINC"
description = "Physician assistant."
category = "healthcare"
capabilities = ["clinical-notes", "prescriptions"]

[[agent]]
id = "devlinc"
name = "DevLINC"
description = "Engineering assistant."
category = "development"
"#;

    #[test]
    fn test_parses_agent_tables_in_order() {
        let config = RegistryConfig::from_toml_str(SAMPLE).unwrap();
        let profiles = config.into_profiles();
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].id, "doctorlinc");
        assert_eq!(profiles[0].category, AgentCategory::Healthcare);
        assert_eq!(profiles[0].capabilities, vec!["clinical-notes", "prescriptions"]);
        assert_eq!(profiles[1].status, AgentStatus::Online);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let doubled = format!("{SAMPLE}\n{}", SAMPLE.replace("devlinc", "doctorlinc"));
        let err = RegistryConfig::from_toml_str(&doubled).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_rejects_empty_registry() {
        let err = RegistryConfig::from_toml_str("").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = RegistryConfig::load(file.path()).unwrap();
        assert_eq!(config.agents.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RegistryConfig::load(Path::new("/nonexistent/agents.toml")).unwrap_err();
        assert!(matches!(err, LincError::Io { .. }));
    }
}
