//! Default agent presets.
//!
//! The compiled-in LINC fleet, used whenever no registry file is supplied.

use super::model::{AgentCategory, AgentProfile, AgentStatus};

fn profile(
    id: &str,
    name: &str,
    description: &str,
    category: AgentCategory,
    capabilities: &[&str],
) -> AgentProfile {
    AgentProfile {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        status: AgentStatus::Online,
        capabilities: capabilities.iter().map(|c| c.to_string()).collect(),
    }
}

/// Returns the default agent fleet, in registration order.
///
/// These are the platform's built-in agents spanning all four categories.
/// MasterLINC doubles as the default route for intents no other agent claims.
pub fn default_agents() -> Vec<AgentProfile> {
    vec![
        profile(
            "masterlinc",
            "MasterLINC",
            "Central orchestration hub governing all LINC agents.",
            AgentCategory::Infrastructure,
            &["routing", "workflow-coordination", "system-metrics"],
        ),
        profile(
            "authlinc",
            "AuthLINC",
            "Identity and access management for the LINC platform.",
            AgentCategory::Infrastructure,
            &["authentication", "authorization", "token-issuance"],
        ),
        profile(
            "doctorlinc",
            "DoctorLINC",
            "Physician assistant for clinical decision support and documentation.",
            AgentCategory::Healthcare,
            &["clinical-notes", "prescriptions", "diagnosis-support"],
        ),
        profile(
            "nurslinc",
            "NursLINC",
            "Nursing workflow support for patient care and shift coordination.",
            AgentCategory::Healthcare,
            &["vital-signs", "medication-schedules", "shift-reports"],
        ),
        profile(
            "patientlinc",
            "PatientLINC",
            "Patient companion for appointments, education, and health tracking.",
            AgentCategory::Healthcare,
            &["appointments", "health-tracking", "reminders"],
        ),
        profile(
            "bizlinc",
            "BizLINC",
            "Business development assistant for proposals and market analysis.",
            AgentCategory::Business,
            &["proposals", "rfp-drafting", "market-analysis"],
        ),
        profile(
            "paylinc",
            "PayLINC",
            "Billing and payment operations assistant.",
            AgentCategory::Business,
            &["invoicing", "payments", "subscriptions"],
        ),
        profile(
            "devlinc",
            "DevLINC",
            "Engineering assistant for build, test, and deployment workflows.",
            AgentCategory::Development,
            &["builds", "testing", "deployment"],
        ),
    ]
}
