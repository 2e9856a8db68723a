//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - the verdict being the conjunction of the individual rules
//! - determinism and rule-order independence of validity
//! - agreement between the reference evaluator and the configurable engine

use crate::engine::evaluate;
use crate::evaluator::{evaluate_rules, validate_bytes};
use crate::model::Candidate;
use crate::rules::{REFERENCE_RULES, Rule, increasing_triplet, no_forbidden_pairs, repeated_pair};
use crate::tally::{tally_into, tally_letters};
use crate::test_support::config_all;
use passguard_types::{Severity, Verdict};
use proptest::prelude::*;
use std::collections::BTreeMap;

// ============================================================================
// Strategies
// ============================================================================

/// Lowercase candidates, the reference alphabet.
fn arb_lowercase() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{0,24}").unwrap()
}

/// Arbitrary bytes, including non-ASCII and control bytes.
fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..48)
}

// ============================================================================
// Naive oracles
// ============================================================================

fn naive_triplet(b: &[u8]) -> bool {
    b.windows(3)
        .any(|w| w[0] as u16 + 1 == w[1] as u16 && w[1] as u16 + 1 == w[2] as u16)
}

fn naive_repeated_pair(b: &[u8]) -> bool {
    let n = b.len();
    (0..n.saturating_sub(1)).any(|i| (i + 2..n.saturating_sub(1)).any(|j| b[i..i + 2] == b[j..j + 2]))
}

proptest! {
    #[test]
    fn valid_iff_every_rule_holds(bytes in arb_bytes()) {
        let v = validate_bytes(&bytes);
        let all = REFERENCE_RULES.iter().all(|r| r.holds(&bytes));
        prop_assert_eq!(v.valid, all);
        prop_assert_eq!(v.failed_rule.is_none(), all);
    }

    #[test]
    fn validity_is_independent_of_rule_order(bytes in arb_bytes()) {
        let reversed: Vec<Rule> = REFERENCE_RULES.iter().rev().copied().collect();
        let forward = evaluate_rules(&bytes, &REFERENCE_RULES);
        let backward = evaluate_rules(&bytes, &reversed);
        prop_assert_eq!(forward.valid, backward.valid);
    }

    #[test]
    fn validate_is_deterministic(s in arb_lowercase()) {
        prop_assert_eq!(validate_bytes(s.as_bytes()), validate_bytes(s.as_bytes()));
    }

    #[test]
    fn failed_rule_actually_fails(bytes in arb_bytes()) {
        if let Some(id) = validate_bytes(&bytes).failed_rule {
            let rule = REFERENCE_RULES.iter().find(|r| r.id == id).unwrap();
            prop_assert!(!rule.holds(&bytes));
        }
    }

    #[test]
    fn triplet_matches_window_oracle(bytes in arb_bytes()) {
        prop_assert_eq!(increasing_triplet::holds(&bytes), naive_triplet(&bytes));
    }

    #[test]
    fn repeated_pair_matches_quadratic_oracle(s in arb_lowercase()) {
        prop_assert_eq!(repeated_pair::holds(s.as_bytes()), naive_repeated_pair(s.as_bytes()));
    }

    #[test]
    fn forbidden_rule_is_negation_of_detector(bytes in arb_bytes()) {
        prop_assert_eq!(
            no_forbidden_pairs::holds(&bytes),
            !no_forbidden_pairs::contains_forbidden_pair(&bytes)
        );
    }

    #[test]
    fn short_inputs_fail_positional_rules(bytes in prop::collection::vec(any::<u8>(), 0..3)) {
        prop_assert!(!increasing_triplet::holds(&bytes));
        prop_assert!(!repeated_pair::holds(&bytes));
        prop_assert!(!validate_bytes(&bytes).valid);
    }

    #[test]
    fn strict_engine_agrees_with_reference_evaluator(bytes in arb_bytes()) {
        let cfg = config_all(Severity::Error);
        let report = evaluate(&Candidate::from_bytes(&bytes), &cfg);
        let v = validate_bytes(&bytes);

        prop_assert_eq!(report.verdict == Verdict::Pass, v.valid);
        prop_assert_eq!(report.failed_rule.as_deref(), v.failed_rule);
    }

    #[test]
    fn tally_total_equals_char_count(s in ".{0,64}") {
        let t = tally_letters(&s);
        prop_assert_eq!(t.values().sum::<usize>(), s.chars().count());
    }

    #[test]
    fn tally_of_concatenation_equals_accumulated_tally(a in ".{0,32}", b in ".{0,32}") {
        let mut acc = BTreeMap::new();
        tally_into(&a, &mut acc);
        tally_into(&b, &mut acc);
        prop_assert_eq!(acc, tally_letters(&format!("{a}{b}")));
    }
}
