use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a candidate finding.
///
/// Identity fields:
/// - rule_id
/// - code
/// - candidate digest (never the raw candidate)
pub fn fingerprint_for_candidate(rule_id: &str, code: &str, candidate_digest: &str) -> String {
    let canonical = [rule_id, code, candidate_digest].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
