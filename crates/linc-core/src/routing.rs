//! Intent routing.
//!
//! Scores a free-text intent against per-agent keyword lists and picks the
//! agent best placed to handle it, together with its supporting agents.
//! Scoring is matched-keyword-count over list length; ties keep the earlier
//! entry. Intents no agent claims go to MasterLINC, the conversational entry
//! point, at a fixed 0.8 confidence.

use serde::{Deserialize, Serialize};

/// Agent id used when no keyword list claims the intent.
pub const DEFAULT_AGENT: &str = "masterlinc";

/// Confidence reported for the default route.
pub const DEFAULT_CONFIDENCE: f64 = 0.8;

/// Keyword list for one routable agent.
#[derive(Debug, Clone, Copy)]
pub struct IntentRoute {
    pub agent_id: &'static str,
    pub keywords: &'static [&'static str],
}

/// Per-agent intent keywords, in routing priority order.
pub const INTENT_ROUTES: &[IntentRoute] = &[
    IntentRoute {
        agent_id: "doctorlinc",
        keywords: &[
            "doctor",
            "physician",
            "medical",
            "diagnosis",
            "prescription",
            "symptom",
            "treatment",
            "clinic",
            "consultation",
            "health",
        ],
    },
    IntentRoute {
        agent_id: "nurslinc",
        keywords: &[
            "nurse",
            "nursing",
            "care",
            "medication",
            "vital signs",
            "shift",
            "report",
            "patient care",
            "checklist",
        ],
    },
    IntentRoute {
        agent_id: "patientlinc",
        keywords: &[
            "patient",
            "appointment",
            "schedule",
            "education",
            "health tracking",
            "lab results",
            "medication reminder",
            "symptoms",
        ],
    },
    IntentRoute {
        agent_id: "bizlinc",
        keywords: &[
            "business",
            "entrepreneur",
            "startup",
            "proposal",
            "rfp",
            "market analysis",
            "etimad",
            "saudi business",
        ],
    },
    IntentRoute {
        agent_id: "paylinc",
        keywords: &[
            "payment",
            "billing",
            "invoice",
            "financial",
            "subscription",
            "stripe",
            "paypal",
            "transaction",
        ],
    },
    IntentRoute {
        agent_id: "authlinc",
        keywords: &[
            "login",
            "password",
            "token",
            "permission",
            "account",
            "security",
            "access",
        ],
    },
    IntentRoute {
        agent_id: "devlinc",
        keywords: &["code", "build", "deploy", "bug", "test", "api", "pipeline"],
    },
];

/// Supporting agents pulled in alongside each primary, in a fixed order.
pub const SUPPORT_MAP: &[(&str, &[&str])] = &[
    ("doctorlinc", &["nurslinc", "patientlinc"]),
    ("nurslinc", &["doctorlinc"]),
    ("patientlinc", &["doctorlinc", "nurslinc"]),
    ("bizlinc", &["paylinc"]),
    ("paylinc", &["bizlinc"]),
];

/// Outcome of routing one intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDecision {
    /// The primary agent for this intent.
    pub agent_id: String,
    /// Fraction of the winning list's keywords present in the intent.
    pub confidence: f64,
    /// Supporting agents for the primary, possibly empty.
    pub supporting: Vec<String>,
}

/// Routes a free-text intent to the best-scoring agent.
pub fn route(intent: &str) -> RouteDecision {
    let needle = intent.to_lowercase();

    let mut best: Option<(&'static str, f64)> = None;
    for entry in INTENT_ROUTES {
        let hits = entry
            .keywords
            .iter()
            .filter(|k| needle.contains(*k))
            .count();
        if hits == 0 {
            continue;
        }
        let score = hits as f64 / entry.keywords.len() as f64;
        if best.is_none_or(|(_, s)| score > s) {
            best = Some((entry.agent_id, score));
        }
    }

    let (agent_id, confidence) = best.unwrap_or((DEFAULT_AGENT, DEFAULT_CONFIDENCE));
    RouteDecision {
        agent_id: agent_id.to_string(),
        confidence,
        supporting: supporting_agents(agent_id),
    }
}

/// Supporting agents for a primary agent, empty when none are mapped.
pub fn supporting_agents(agent_id: &str) -> Vec<String> {
    SUPPORT_MAP
        .iter()
        .find(|(id, _)| *id == agent_id)
        .map(|(_, support)| support.iter().map(|s| s.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_intent_routes_to_doctorlinc() {
        let decision = route("I need a diagnosis for these symptoms from a physician");
        assert_eq!(decision.agent_id, "doctorlinc");
        assert!(decision.confidence > 0.0);
        assert_eq!(decision.supporting, vec!["nurslinc", "patientlinc"]);
    }

    #[test]
    fn test_billing_intent_routes_to_paylinc() {
        let decision = route("please send the invoice for my subscription payment");
        assert_eq!(decision.agent_id, "paylinc");
        assert_eq!(decision.supporting, vec!["bizlinc"]);
    }

    #[test]
    fn test_unmatched_intent_defaults_to_masterlinc() {
        let decision = route("zzz nothing relevant here");
        assert_eq!(decision.agent_id, DEFAULT_AGENT);
        assert_eq!(decision.confidence, DEFAULT_CONFIDENCE);
        assert!(decision.supporting.is_empty());
    }

    #[test]
    fn test_higher_score_wins() {
        // Three paylinc keywords against one doctorlinc keyword.
        let decision = route("billing invoice transaction for my treatment");
        assert_eq!(decision.agent_id, "paylinc");
    }

    #[test]
    fn test_support_map_is_symmetric_for_business_pair() {
        assert_eq!(supporting_agents("bizlinc"), vec!["paylinc"]);
        assert_eq!(supporting_agents("paylinc"), vec!["bizlinc"]);
        assert!(supporting_agents("devlinc").is_empty());
    }
}
