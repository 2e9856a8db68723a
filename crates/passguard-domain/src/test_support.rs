use crate::policy::{EffectiveConfig, FailOn, RulePolicy};
use crate::rules::REFERENCE_FORBIDDEN_PAIRS;
use passguard_types::{Severity, explain};
use std::collections::BTreeMap;

pub fn config_with_rule(rule_id: &str, severity: Severity) -> EffectiveConfig {
    let mut rules = BTreeMap::new();
    rules.insert(rule_id.to_string(), RulePolicy::enabled(severity));
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        forbidden_pairs: REFERENCE_FORBIDDEN_PAIRS.to_vec(),
        rules,
    }
}

pub fn config_all(severity: Severity) -> EffectiveConfig {
    let rules = explain::all_rule_ids()
        .iter()
        .map(|id| (id.to_string(), RulePolicy::enabled(severity)))
        .collect();
    EffectiveConfig {
        profile: "test".to_string(),
        fail_on: FailOn::Error,
        forbidden_pairs: REFERENCE_FORBIDDEN_PAIRS.to_vec(),
        rules,
    }
}
