use crate::model::Candidate;
use crate::policy::{EffectiveConfig, FailOn};
use crate::report::{DomainReport, SeverityCounts};
use crate::rules;
use passguard_types::{Finding, Severity, Verdict};

/// Evaluate one candidate against a configured policy.
///
/// Unlike [`crate::validate`], every enabled rule runs so each failure yields a finding.
pub fn evaluate(candidate: &Candidate<'_>, cfg: &EffectiveConfig) -> DomainReport {
    let mut findings: Vec<Finding> = Vec::new();

    rules::run_all(candidate, cfg, &mut findings);

    let failed_rule = findings.first().map(|f| f.rule_id.clone());
    let verdict = compute_verdict(&findings, cfg.fail_on);
    let counts = SeverityCounts::from_findings(&findings);

    DomainReport {
        verdict,
        failed_rule,
        findings,
        counts,
    }
}

fn compute_verdict(findings: &[Finding], fail_on: FailOn) -> Verdict {
    let has_error = findings.iter().any(|f| f.severity == Severity::Error);
    if has_error {
        return Verdict::Fail;
    }

    let has_warn = findings.iter().any(|f| f.severity == Severity::Warning);
    if has_warn {
        return match fail_on {
            FailOn::Warning => Verdict::Fail,
            FailOn::Error => Verdict::Warn,
        };
    }

    Verdict::Pass
}
