use crate::fingerprint::fingerprint_for_candidate;
use crate::model::Candidate;
use crate::policy::EffectiveConfig;
use passguard_types::{Finding, ids};
use serde_json::json;

/// Length of the straight this rule looks for.
pub const TRIPLET_LEN: usize = 3;

/// True iff three consecutive bytes each increase by exactly one (`abc`).
pub fn holds(candidate: &[u8]) -> bool {
    let mut streak = 1;
    for w in candidate.windows(2) {
        if is_successor(w[0], w[1]) {
            streak += 1;
            if streak == TRIPLET_LEN {
                return true;
            }
        } else {
            streak = 1;
        }
    }
    false
}

/// Length of the longest run of bytes increasing by exactly one. Zero for an empty candidate.
pub fn longest_run(candidate: &[u8]) -> usize {
    if candidate.is_empty() {
        return 0;
    }
    let mut longest = 1;
    let mut streak = 1;
    for w in candidate.windows(2) {
        streak = if is_successor(w[0], w[1]) { streak + 1 } else { 1 };
        longest = longest.max(streak);
    }
    longest
}

fn is_successor(prev: u8, next: u8) -> bool {
    prev.checked_add(1) == Some(next)
}

pub fn run(candidate: &Candidate<'_>, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_INCREASING_TRIPLET) else {
        return;
    };

    let bytes = candidate.as_bytes();
    if holds(bytes) {
        return;
    }

    let longest = longest_run(bytes);
    out.push(Finding {
        severity: policy.severity,
        rule_id: ids::RULE_INCREASING_TRIPLET.to_string(),
        code: ids::CODE_MISSING_INCREASING_TRIPLET.to_string(),
        message: format!(
            "candidate has no run of {TRIPLET_LEN} consecutive increasing letters (longest run: {longest})"
        ),
        help: Some("Include a straight such as `abc` or `xyz`.".to_string()),
        fingerprint: Some(fingerprint_for_candidate(
            ids::RULE_INCREASING_TRIPLET,
            ids::CODE_MISSING_INCREASING_TRIPLET,
            &candidate.digest(),
        )),
        data: json!({
            "length": bytes.len(),
            "longest_run": longest,
            "required_run": TRIPLET_LEN,
        }),
    });
}
