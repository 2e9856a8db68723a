//! The `explain` use case.
//!
//! Codes are resolved to the rule that emits them, and both registry examples are run
//! through that rule so the printed "fails"/"passes" labels come from the predicate itself.

use passguard_domain::REFERENCE_RULES;
use passguard_types::explain::{self, Explanation};
use passguard_types::ids;

/// A registry example together with the outcome of its owning rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExampleCheck {
    pub candidate: &'static str,
    pub holds: bool,
}

#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found {
        rule_id: &'static str,
        explanation: Explanation,
        before: ExampleCheck,
        after: ExampleCheck,
    },
    /// `suggestions` is empty when nothing resembles the identifier.
    NotFound {
        identifier: String,
        suggestions: Vec<&'static str>,
    },
}

/// Map a rule id or finding code to the rule that owns it.
pub fn owning_rule(identifier: &str) -> Option<&'static str> {
    match identifier {
        ids::RULE_INCREASING_TRIPLET | ids::CODE_MISSING_INCREASING_TRIPLET => {
            Some(ids::RULE_INCREASING_TRIPLET)
        }
        ids::RULE_NO_FORBIDDEN_PAIRS | ids::CODE_FORBIDDEN_PAIR => {
            Some(ids::RULE_NO_FORBIDDEN_PAIRS)
        }
        ids::RULE_REPEATED_PAIR | ids::CODE_MISSING_REPEATED_PAIR => {
            Some(ids::RULE_REPEATED_PAIR)
        }
        _ => None,
    }
}

pub fn run_explain(identifier: &str) -> ExplainOutput {
    let found = owning_rule(identifier).and_then(|rule_id| {
        let rule = REFERENCE_RULES.iter().find(|r| r.id == rule_id)?;
        let explanation = explain::lookup_explanation(identifier)?;
        let check = |candidate: &'static str| ExampleCheck {
            candidate,
            holds: rule.holds(candidate.as_bytes()),
        };
        Some(ExplainOutput::Found {
            rule_id,
            before: check(explanation.examples.before),
            after: check(explanation.examples.after),
            explanation,
        })
    });

    found.unwrap_or_else(|| ExplainOutput::NotFound {
        identifier: identifier.to_string(),
        suggestions: suggest(identifier),
    })
}

/// Known identifiers that contain the query, or whose last segment the query contains.
fn suggest(identifier: &str) -> Vec<&'static str> {
    let query = identifier.trim().to_ascii_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    explain::all_rule_ids()
        .iter()
        .chain(explain::all_codes())
        .copied()
        .filter(|known| {
            let tail = known.rsplit('.').next().unwrap_or(known);
            known.contains(query.as_str()) || query.contains(tail)
        })
        .collect()
}

fn outcome(check: &ExampleCheck) -> &'static str {
    if check.holds { "passes" } else { "fails" }
}

/// Format an explanation for terminal display.
pub fn format_explanation(
    rule_id: &str,
    exp: &Explanation,
    before: &ExampleCheck,
    after: &ExampleCheck,
) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str(&format!("\n\nRule: {rule_id}\n\n"));
    out.push_str(exp.description);
    out.push_str("\n\nRemediation\n-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\nExamples\n--------\n\n");
    for check in [before, after] {
        out.push_str(&format!("  {:<12} {}\n", check.candidate, outcome(check)));
    }

    out
}

pub fn format_not_found(identifier: &str, suggestions: &[&'static str]) -> String {
    let mut out = format!("Unknown rule_id or code: {identifier}\n\n");

    if suggestions.is_empty() {
        out.push_str("Available rule_ids:\n");
        for id in explain::all_rule_ids() {
            out.push_str(&format!("  - {id}\n"));
        }
        out.push_str("\nAvailable codes:\n");
        for code in explain::all_codes() {
            out.push_str(&format!("  - {code}\n"));
        }
    } else {
        out.push_str("Did you mean:\n");
        for s in suggestions {
            out.push_str(&format!("  - {s}\n"));
        }
    }

    out
}
