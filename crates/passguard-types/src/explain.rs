//! Explain registry for rules and codes.
//!
//! Maps rule IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a rule or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule/code.
    pub title: &'static str,
    /// What the rule checks and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
    /// Before/after candidate examples.
    pub examples: ExamplePair,
}

/// Before and after candidate examples.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// A candidate that would trigger a finding.
    pub before: &'static str,
    /// A candidate that passes the rule.
    pub after: &'static str,
}

/// Look up an explanation by rule_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        // Rule IDs
        ids::RULE_INCREASING_TRIPLET => Some(explain_increasing_triplet()),
        ids::RULE_NO_FORBIDDEN_PAIRS => Some(explain_no_forbidden_pairs()),
        ids::RULE_REPEATED_PAIR => Some(explain_repeated_pair()),

        // Codes
        ids::CODE_MISSING_INCREASING_TRIPLET => Some(explain_missing_increasing_triplet()),
        ids::CODE_FORBIDDEN_PAIR => Some(explain_forbidden_pair()),
        ids::CODE_MISSING_REPEATED_PAIR => Some(explain_missing_repeated_pair()),

        _ => None,
    }
}

/// List all known rule IDs, in declaration order.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_INCREASING_TRIPLET,
        ids::RULE_NO_FORBIDDEN_PAIRS,
        ids::RULE_REPEATED_PAIR,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_MISSING_INCREASING_TRIPLET,
        ids::CODE_FORBIDDEN_PAIR,
        ids::CODE_MISSING_REPEATED_PAIR,
    ]
}

// --- Rule-level explanations ---

fn explain_increasing_triplet() -> Explanation {
    Explanation {
        title: "Increasing Triplet",
        description: "\
Requires a straight of three consecutive bytes, each exactly one greater than the
previous one (for example `abc` or `xyz`).

The scan is byte-wise and case-sensitive: `aBc` does not qualify, and `yz{` does
because `{` follows `z` in ASCII. Candidates shorter than three bytes always fail.",
        remediation: "\
Include a run of three alphabetically consecutive letters somewhere in the
candidate, such as `abc`, `fgh` or `xyz`.",
        examples: ExamplePair {
            before: "abddd",
            after: "aaabcaa",
        },
    }
}

fn explain_no_forbidden_pairs() -> Explanation {
    Explanation {
        title: "No Forbidden Pairs",
        description: "\
Rejects candidates containing any forbidden two-byte substring. The reference set
is `ab`, `cd`, `pq` and `xy`; it can be replaced with `forbidden_pairs` in
passguard.toml.

The rule passes when the forbidden pairs are absent. Only adjacent bytes are
compared; `a` and `b` separated by another byte are allowed.",
        remediation: "\
Break up the reported pair, for example by reordering letters or inserting a
different letter between them.",
        examples: ExamplePair {
            before: "hxccdeei",
            after: "hxccedei",
        },
    }
}

fn explain_repeated_pair() -> Explanation {
    Explanation {
        title: "Repeated Pair",
        description: "\
Requires some two-byte pair to occur at least twice without overlapping, i.e.
the second occurrence starts two or more positions after the first.

`aaa` does not qualify because both `aa` occurrences share the middle byte;
`aaaa` and `xyxy` do. Candidates shorter than four bytes always fail.",
        remediation: "\
Repeat any two-letter pair later in the candidate, for example `aabcdefgaa`.",
        examples: ExamplePair {
            before: "abcde",
            after: "abcdeab",
        },
    }
}

// --- Code-level explanations ---

fn explain_missing_increasing_triplet() -> Explanation {
    Explanation {
        title: "Missing Increasing Triplet",
        description: "\
The candidate has no three consecutive bytes that increase by exactly one. The
finding payload reports the longest increasing run that was found.",
        remediation: "\
Extend the longest increasing run to three bytes, or add a new run such as `abc`.",
        examples: ExamplePair {
            before: "abddd",
            after: "abcdd",
        },
    }
}

fn explain_forbidden_pair() -> Explanation {
    Explanation {
        title: "Forbidden Pair",
        description: "\
The candidate contains a forbidden two-byte substring. The finding payload names
the first offending pair and its 0-based offset.",
        remediation: "\
Change one of the two bytes at the reported offset so the pair is no longer in the
forbidden set.",
        examples: ExamplePair {
            before: "abdsc",
            after: "adbsc",
        },
    }
}

fn explain_missing_repeated_pair() -> Explanation {
    Explanation {
        title: "Missing Repeated Pair",
        description: "\
No two-byte pair occurs twice without overlapping. Overlapping repeats such as the
`aa` pairs in `aaa` do not count.",
        remediation: "\
Append or insert a copy of any existing pair at least two positions after the
original.",
        examples: ExamplePair {
            before: "aaa",
            after: "aaaa",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_identifier_resolves() {
        for id in all_rule_ids().iter().chain(all_codes()) {
            let exp = lookup_explanation(id).expect("registered identifier");
            assert!(!exp.title.is_empty());
            assert!(!exp.remediation.is_empty());
        }
    }

    #[test]
    fn unknown_identifier_is_none() {
        assert!(lookup_explanation("password.nope").is_none());
    }
}
