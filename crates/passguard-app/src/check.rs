//! The `check` use case: evaluate candidates against the configured policy and produce a report.

use anyhow::Context;
use passguard_domain::Candidate;
use passguard_settings::{Overrides, ResolvedConfig};
use passguard_types::{
    CandidateResult, PassguardData, PassguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta,
    Verdict,
};
use time::OffsetDateTime;
use tracing::debug;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    /// Candidates, one per line.
    pub candidates_text: &'a str,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: PassguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Split input text into candidates: one per line, `\r\n` tolerated, blank lines kept.
pub fn split_candidates(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Run the check use case: parse config, evaluate each candidate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        passguard_settings::PassguardConfigV1::default()
    } else {
        passguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = passguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;
    let effective = &resolved.effective;

    let mut results = Vec::new();
    let mut data = PassguardData {
        profile: effective.profile.clone(),
        ..PassguardData::default()
    };
    let mut verdict = Verdict::Pass;

    for (idx, text) in split_candidates(input.candidates_text).enumerate() {
        let candidate = Candidate::new(text);
        let domain_report = passguard_domain::evaluate(&candidate, effective);
        let line = idx as u32 + 1;

        debug!(
            line,
            verdict = domain_report.verdict.as_str(),
            failed_rule = domain_report.failed_rule.as_deref().unwrap_or("-"),
            "evaluated candidate"
        );

        data.candidates_scanned += 1;
        match domain_report.verdict {
            Verdict::Pass => data.candidates_passed += 1,
            Verdict::Warn => data.candidates_warned += 1,
            Verdict::Fail => data.candidates_failed += 1,
        }
        data.findings_total += domain_report.findings.len() as u32;
        verdict = verdict.worst(domain_report.verdict);

        results.push(CandidateResult {
            line,
            digest: candidate.digest(),
            length: candidate.len() as u32,
            verdict: domain_report.verdict,
            failed_rule: domain_report.failed_rule,
            findings: domain_report.findings,
        });
    }

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "passguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        verdict,
        results,
        findings: Vec::new(),
        data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
