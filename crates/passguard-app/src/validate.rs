//! The `validate` use case: a single candidate against the reference policy.

use passguard_domain::Validation;
use tracing::debug;

pub fn run_validate(candidate: &str) -> Validation {
    let validation = passguard_domain::validate(candidate);
    debug!(
        length = candidate.len(),
        valid = validation.valid,
        failed_rule = validation.failed_rule.unwrap_or("-"),
        "validated candidate"
    );
    validation
}

/// `PASS`, or `FAIL <rule_id>`.
pub fn format_validation(validation: &Validation) -> String {
    match validation.failed_rule {
        None => "PASS".to_string(),
        Some(rule) => format!("FAIL {rule}"),
    }
}
