//! Canned response rule tables.
//!
//! One table per agent category. Rules are matched in source order and the
//! first rule whose keyword set hits wins, so more specific rules go first.
//! Keywords must be lowercase; matching lowercases the input once.

use crate::agent::AgentCategory;

/// A single keyword-set -> template rule.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    /// Lowercase keywords; any substring hit activates the rule.
    pub keywords: &'static [&'static str],
    /// The canned reply for this rule.
    pub template: &'static str,
}

/// The ordered rule list and fallback for one category.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRules {
    pub category: AgentCategory,
    pub rules: &'static [ResponseRule],
    /// Used when no rule matches.
    pub fallback: &'static str,
}

/// All rule tables, one per category.
pub const RULE_TABLES: &[CategoryRules] = &[
    CategoryRules {
        category: AgentCategory::Healthcare,
        rules: &[
            ResponseRule {
                keywords: &["pain", "sick", "headache", "hurt", "symptom"],
                template: "I'm sorry you're not feeling well. Please describe your symptoms \
                           in more detail, and I can help you decide whether to book a \
                           consultation.",
            },
            ResponseRule {
                keywords: &["appointment", "schedule", "book"],
                template: "I can help with scheduling. The next available consultation slots \
                           are usually within 48 hours - would you like me to look?",
            },
            ResponseRule {
                keywords: &["medication", "prescription", "medicine", "refill"],
                template: "For medication questions I can check dosage guidance and refill \
                           status. Which prescription is this about?",
            },
        ],
        fallback: "I'm here to help with your health questions. Could you tell me a bit more?",
    },
    CategoryRules {
        category: AgentCategory::Business,
        rules: &[
            ResponseRule {
                keywords: &["proposal", "rfp", "tender"],
                template: "I can draft a proposal outline for you. What is the scope and who \
                           is the client?",
            },
            ResponseRule {
                keywords: &["market", "competitor", "analysis"],
                template: "Let's look at the market picture. Which segment or region should I \
                           focus the analysis on?",
            },
            ResponseRule {
                keywords: &["invoice", "payment", "billing", "subscription"],
                template: "I can review invoices and payment schedules. Do you want a summary \
                           of outstanding items?",
            },
        ],
        fallback: "Happy to help with your business question - can you give me some context?",
    },
    CategoryRules {
        category: AgentCategory::Development,
        rules: &[
            ResponseRule {
                keywords: &["bug", "error", "crash", "broken"],
                template: "Let's debug this. Can you share the error output and the steps \
                           that trigger it?",
            },
            ResponseRule {
                keywords: &["deploy", "release", "ship"],
                template: "I can walk you through the release checklist. Which environment \
                           are you deploying to?",
            },
            ResponseRule {
                keywords: &["test", "coverage", "ci"],
                template: "Testing is a good instinct. Do you want to start from the failing \
                           cases or the uncovered paths?",
            },
        ],
        fallback: "Tell me more about what you're building and I'll see how I can help.",
    },
    CategoryRules {
        category: AgentCategory::Infrastructure,
        rules: &[
            ResponseRule {
                keywords: &["login", "password", "token", "account"],
                template: "Account and access issues are my specialty. Are you locked out, or \
                           is this about permissions?",
            },
            ResponseRule {
                keywords: &["status", "health", "uptime", "down"],
                template: "All platform services report their status every sweep. Ask /health \
                           for the latest snapshot.",
            },
            ResponseRule {
                keywords: &["agent", "workflow", "orchestrate"],
                template: "I coordinate the other LINC agents. Describe the task and I'll \
                           route it to the right one.",
            },
        ],
        fallback: "I keep the platform running. What do you need?",
    },
];

/// Finds the rule table for a category.
pub fn table_for(category: AgentCategory) -> Option<&'static CategoryRules> {
    RULE_TABLES.iter().find(|t| t.category == category)
}
