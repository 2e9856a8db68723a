use passguard_domain::policy::{EffectiveConfig, FailOn, RulePolicy};
use passguard_domain::rules::REFERENCE_FORBIDDEN_PAIRS;
use passguard_types::{Severity, explain};
use std::collections::BTreeMap;

/// Names accepted by [`preset`].
pub const PROFILES: &[&str] = &["strict", "warn", "advisory"];

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> Option<EffectiveConfig> {
    match profile {
        "strict" => Some(strict_profile()),
        "warn" => Some(warn_profile()),
        "advisory" => Some(advisory_profile()),
        _ => None,
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        forbidden_pairs: REFERENCE_FORBIDDEN_PAIRS.to_vec(),
        rules: default_rules(Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        forbidden_pairs: REFERENCE_FORBIDDEN_PAIRS.to_vec(),
        rules: default_rules(Severity::Warning),
    }
}

fn advisory_profile() -> EffectiveConfig {
    // Reports everything but never fails a candidate.
    EffectiveConfig {
        profile: "advisory".to_string(),
        fail_on: FailOn::Error,
        forbidden_pairs: REFERENCE_FORBIDDEN_PAIRS.to_vec(),
        rules: default_rules(Severity::Warning),
    }
}

fn default_rules(default_severity: Severity) -> BTreeMap<String, RulePolicy> {
    explain::all_rule_ids()
        .iter()
        .map(|id| (id.to_string(), RulePolicy::enabled(default_severity)))
        .collect()
}
