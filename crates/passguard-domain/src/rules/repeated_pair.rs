use crate::fingerprint::fingerprint_for_candidate;
use crate::model::Candidate;
use crate::policy::EffectiveConfig;
use passguard_types::{Finding, ids};
use serde_json::json;
use std::collections::HashMap;

/// Two occurrences of the same pair that share no byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepeatedPair {
    pub pair: [u8; 2],
    pub first: usize,
    pub second: usize,
}

/// First pair (by position of its second occurrence) that repeats without overlapping.
///
/// Only the first occurrence of each pair is remembered: it is the one furthest
/// from any later repeat, so `aaaa` is found even though `aaa` is not.
pub fn find_repeated_pair(candidate: &[u8]) -> Option<RepeatedPair> {
    let mut first_seen: HashMap<[u8; 2], usize> = HashMap::new();
    for (offset, w) in candidate.windows(2).enumerate() {
        let pair = [w[0], w[1]];
        match first_seen.get(&pair) {
            Some(&first) if offset >= first + 2 => {
                return Some(RepeatedPair {
                    pair,
                    first,
                    second: offset,
                });
            }
            Some(_) => {}
            None => {
                first_seen.insert(pair, offset);
            }
        }
    }
    None
}

pub fn holds(candidate: &[u8]) -> bool {
    find_repeated_pair(candidate).is_some()
}

/// True when the candidate has doubled letters of two different kinds, such as
/// `aa` and `bb` in `aacbb`.
///
/// This is a looser check than [`holds`]: the two pairs need not be equal. Doubled
/// pairs of different letters can never share a byte, so no offset check is needed.
pub fn has_two_doubled_pairs(candidate: &[u8]) -> bool {
    let mut first: Option<u8> = None;
    for w in candidate.windows(2) {
        if w[0] != w[1] {
            continue;
        }
        match first {
            None => first = Some(w[0]),
            Some(letter) if letter != w[0] => return true,
            Some(_) => {}
        }
    }
    false
}

pub fn run(candidate: &Candidate<'_>, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.rule_policy(ids::RULE_REPEATED_PAIR) else {
        return;
    };

    let bytes = candidate.as_bytes();
    if holds(bytes) {
        return;
    }

    out.push(Finding {
        severity: policy.severity,
        rule_id: ids::RULE_REPEATED_PAIR.to_string(),
        code: ids::CODE_MISSING_REPEATED_PAIR.to_string(),
        message: "candidate has no letter pair that repeats without overlapping".to_string(),
        help: Some("Repeat any two-letter pair later in the candidate.".to_string()),
        fingerprint: Some(fingerprint_for_candidate(
            ids::RULE_REPEATED_PAIR,
            ids::CODE_MISSING_REPEATED_PAIR,
            &candidate.digest(),
        )),
        data: json!({
            "length": bytes.len(),
        }),
    });
}
