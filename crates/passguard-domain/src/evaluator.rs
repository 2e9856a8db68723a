use crate::rules::{REFERENCE_RULES, Rule};

/// Outcome of checking a candidate against an ordered rule set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// First rule, in declaration order, that rejected the candidate.
    pub failed_rule: Option<&'static str>,
}

/// Check `candidate` against the reference policy.
pub fn validate(candidate: &str) -> Validation {
    validate_bytes(candidate.as_bytes())
}

pub fn validate_bytes(candidate: &[u8]) -> Validation {
    evaluate_rules(candidate, &REFERENCE_RULES)
}

/// Evaluate `rules` in order, stopping at the first one that does not hold.
///
/// Total: every byte sequence (including the empty one) gets a verdict.
pub fn evaluate_rules(candidate: &[u8], rules: &[Rule]) -> Validation {
    let failed = rules.iter().find(|rule| !rule.holds(candidate));
    Validation {
        valid: failed.is_none(),
        failed_rule: failed.map(|rule| rule.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use passguard_types::ids;

    #[test]
    fn passing_candidate_has_no_failed_rule() {
        // hij: triplet, aa twice, no forbidden pair
        let v = validate("aahijaa");
        assert_eq!(
            v,
            Validation {
                valid: true,
                failed_rule: None
            }
        );
    }

    #[test]
    fn reports_first_failing_rule_in_declaration_order() {
        // Fails all three rules; the triplet rule is declared first.
        assert_eq!(
            validate("abd").failed_rule,
            Some(ids::RULE_INCREASING_TRIPLET)
        );
        // Triplet ok, contains "cd".
        assert_eq!(
            validate("bcdbcd").failed_rule,
            Some(ids::RULE_NO_FORBIDDEN_PAIRS)
        );
        // Triplet ok, no forbidden pair, no repeated pair.
        assert_eq!(validate("efgh").failed_rule, Some(ids::RULE_REPEATED_PAIR));
    }

    #[test]
    fn rule_order_changes_reported_rule_not_validity() {
        let reversed: Vec<Rule> = REFERENCE_RULES.iter().rev().copied().collect();
        let c = b"abd";
        let forward = evaluate_rules(c, &REFERENCE_RULES);
        let backward = evaluate_rules(c, &reversed);
        assert_eq!(forward.valid, backward.valid);
        assert_eq!(backward.failed_rule, Some(ids::RULE_REPEATED_PAIR));
    }

    #[test]
    fn empty_rule_set_accepts_everything() {
        assert!(evaluate_rules(b"", &[]).valid);
    }

    #[test]
    fn empty_candidate_is_rejected_by_reference_policy() {
        let v = validate("");
        assert!(!v.valid);
        assert_eq!(v.failed_rule, Some(ids::RULE_INCREASING_TRIPLET));
    }

    #[test]
    fn evaluator_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Rule>();
        assert_send_sync::<Validation>();
        assert_send_sync::<crate::policy::EffectiveConfig>();
    }

    #[test]
    fn validate_is_idempotent() {
        for c in ["", "abc", "aahijaa", "\u{e9}\u{e9}\u{e9}"] {
            assert_eq!(validate(c), validate(c));
        }
    }
}
