use crate::fingerprint::fingerprint_for_candidate;
use crate::model::Candidate;
use crate::policy::EffectiveConfig;
use passguard_types::{Finding, ids};
use serde_json::json;

pub const REFERENCE_FORBIDDEN_PAIRS: [[u8; 2]; 4] = [*b"ab", *b"cd", *b"pq", *b"xy"];

/// Offset and value of the first adjacent pair found in `forbidden`.
pub fn find_forbidden_pair(candidate: &[u8], forbidden: &[[u8; 2]]) -> Option<(usize, [u8; 2])> {
    candidate.windows(2).enumerate().find_map(|(offset, w)| {
        let pair = [w[0], w[1]];
        forbidden.contains(&pair).then_some((offset, pair))
    })
}

/// Detector polarity: true when a reference forbidden pair IS present.
pub fn contains_forbidden_pair(candidate: &[u8]) -> bool {
    find_forbidden_pair(candidate, &REFERENCE_FORBIDDEN_PAIRS).is_some()
}

/// Rule polarity: true when the candidate is free of reference forbidden pairs.
pub fn holds(candidate: &[u8]) -> bool {
    !contains_forbidden_pair(candidate)
}

pub fn holds_with(candidate: &[u8], forbidden: &[[u8; 2]]) -> bool {
    find_forbidden_pair(candidate, forbidden).is_none()
}

pub fn run(candidate: &Candidate<'_>, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_NO_FORBIDDEN_PAIRS) else {
        return;
    };

    let Some((offset, pair)) = find_forbidden_pair(candidate.as_bytes(), &cfg.forbidden_pairs)
    else {
        return;
    };

    let shown = String::from_utf8_lossy(&pair).into_owned();
    out.push(Finding {
        severity: policy.severity,
        rule_id: ids::RULE_NO_FORBIDDEN_PAIRS.to_string(),
        code: ids::CODE_FORBIDDEN_PAIR.to_string(),
        message: format!("candidate contains forbidden pair '{shown}' at offset {offset}"),
        help: Some("Break up the pair by reordering or replacing one of its letters.".to_string()),
        fingerprint: Some(fingerprint_for_candidate(
            ids::RULE_NO_FORBIDDEN_PAIRS,
            ids::CODE_FORBIDDEN_PAIR,
            &candidate.digest(),
        )),
        data: json!({
            "pair": shown,
            "offset": offset,
        }),
    });
}
