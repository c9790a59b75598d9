//! Deterministic response generation.
//!
//! Maps (agent category, free-text input) to a canned reply by scanning the
//! category's ordered rule table for keyword hits. No learning, no external
//! model calls, no persistence.

pub mod rules;

pub use rules::{CategoryRules, ResponseRule, RULE_TABLES, table_for};

use crate::agent::AgentCategory;

/// Fixed reply for the (unreachable with the shipped tables) case where a
/// category has no rule table. Callers substitute this when `respond`
/// returns `None`.
pub const APOLOGY: &str = "I'm sorry - something went wrong on my side. Please try again.";

/// Produces the canned reply for one user message.
///
/// The input is case-insensitized once; the category's rules are scanned in
/// source order and the first rule with any keyword present as a substring
/// wins. With no hit the category fallback is returned. `None` only when the
/// category has no table at all.
pub fn respond(category: AgentCategory, input: &str) -> Option<String> {
    let table = table_for(category)?;
    let needle = input.to_lowercase();

    for rule in table.rules {
        if rule.keywords.iter().any(|k| needle.contains(k)) {
            return Some(rule.template.to_string());
        }
    }
    Some(table.fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_a_table() {
        for category in [
            AgentCategory::Healthcare,
            AgentCategory::Business,
            AgentCategory::Development,
            AgentCategory::Infrastructure,
        ] {
            assert!(table_for(category).is_some(), "missing table for {category}");
        }
    }

    #[test]
    fn test_headache_hits_the_pain_sick_rule() {
        let reply = respond(AgentCategory::Healthcare, "I have a headache").unwrap();
        let table = table_for(AgentCategory::Healthcare).unwrap();
        assert_eq!(reply, table.rules[0].template);
        assert!(table.rules[0].keywords.contains(&"pain"));
        assert!(table.rules[0].keywords.contains(&"sick"));
    }

    #[test]
    fn test_recognized_keyword_yields_its_template() {
        let cases = [
            (AgentCategory::Healthcare, "book an appointment", 1),
            (AgentCategory::Business, "draft an RFP response", 0),
            (AgentCategory::Development, "we hit a crash in prod", 0),
            (AgentCategory::Infrastructure, "I forgot my password", 0),
        ];
        for (category, input, rule_index) in cases {
            let table = table_for(category).unwrap();
            assert_eq!(
                respond(category, input).unwrap(),
                table.rules[rule_index].template,
                "{category}: {input}"
            );
        }
    }

    #[test]
    fn test_unrecognized_input_falls_back_per_category() {
        for table in RULE_TABLES {
            assert_eq!(
                respond(table.category, "xylophone weather balloon").unwrap(),
                table.fallback
            );
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let table = table_for(AgentCategory::Development).unwrap();
        assert_eq!(
            respond(AgentCategory::Development, "DEPLOY TO STAGING NOW").unwrap(),
            table.rules[1].template
        );
    }

    #[test]
    fn test_first_matching_rule_wins_in_source_order() {
        // "sick of waiting for my appointment" hits both the pain/sick rule
        // and the appointment rule; source order decides.
        let table = table_for(AgentCategory::Healthcare).unwrap();
        assert_eq!(
            respond(AgentCategory::Healthcare, "sick of waiting for my appointment").unwrap(),
            table.rules[0].template
        );
    }
}
