use anyhow::Context;
use passguard_render::{
    RenderableData, RenderableFinding, RenderableReport, RenderableResult, RenderableSeverity,
    RenderableVerdict,
};
use passguard_types::{
    CandidateResult, Finding, PassguardData, PassguardReport, ReportEnvelope, SCHEMA_REPORT_V1,
    Severity, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

pub fn parse_report_json(text: &str) -> anyhow::Result<PassguardReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string();

    if schema != SCHEMA_REPORT_V1 {
        anyhow::bail!("unknown report schema: {schema} (expected {SCHEMA_REPORT_V1})");
    }

    serde_json::from_value(value).context("parse passguard report")
}

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &PassguardReport) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(report).context("serialize report")?;
    data.push(b'\n');
    Ok(data)
}

/// A failing report carrying a single `tool.runtime` finding.
pub fn runtime_error_report(message: &str) -> PassguardReport {
    let now = OffsetDateTime::now_utc();
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "passguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        results: Vec::new(),
        findings: vec![Finding {
            severity: Severity::Error,
            rule_id: ids::RULE_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            help: None,
            fingerprint: None,
            data: serde_json::Value::Null,
        }],
        data: PassguardData::default(),
    }
}

/// One-line summary for terminal output, e.g. `FAIL line 2 password.repeated_pair`.
pub fn verdict_line(result: &CandidateResult) -> String {
    let label = match result.verdict {
        Verdict::Pass => "PASS",
        Verdict::Warn => "WARN",
        Verdict::Fail => "FAIL",
    };
    match &result.failed_rule {
        Some(rule) => format!("{label} line {} {rule}", result.line),
        None => format!("{label} line {}", result.line),
    }
}

pub fn to_renderable(report: &PassguardReport) -> RenderableReport {
    RenderableReport {
        verdict: renderable_verdict(report.verdict),
        results: report
            .results
            .iter()
            .map(|r| RenderableResult {
                line: r.line,
                verdict: renderable_verdict(r.verdict),
                failed_rule: r.failed_rule.clone(),
                findings: r.findings.iter().map(renderable_finding).collect(),
            })
            .collect(),
        findings: report.findings.iter().map(renderable_finding).collect(),
        data: RenderableData {
            profile: report.data.profile.clone(),
            candidates_scanned: report.data.candidates_scanned,
            candidates_passed: report.data.candidates_passed,
            candidates_warned: report.data.candidates_warned,
            candidates_failed: report.data.candidates_failed,
        },
    }
}

fn renderable_verdict(verdict: Verdict) -> RenderableVerdict {
    match verdict {
        Verdict::Pass => RenderableVerdict::Pass,
        Verdict::Warn => RenderableVerdict::Warn,
        Verdict::Fail => RenderableVerdict::Fail,
    }
}

fn renderable_finding(f: &Finding) -> RenderableFinding {
    RenderableFinding {
        severity: match f.severity {
            Severity::Info => RenderableSeverity::Info,
            Severity::Warning => RenderableSeverity::Warning,
            Severity::Error => RenderableSeverity::Error,
        },
        rule_id: f.rule_id.clone(),
        code: f.code.clone(),
        message: f.message.clone(),
        help: f.help.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckInput, run_check};
    use passguard_settings::Overrides;

    fn sample_report() -> PassguardReport {
        run_check(CheckInput {
            candidates_text: "aahijaa\nabd\n",
            config_text: "",
            overrides: Overrides::default(),
        })
        .expect("run_check")
        .report
    }

    #[test]
    fn serialized_report_parses_back() {
        let report = sample_report();
        let bytes = serialize_report(&report).expect("serialize");
        assert_eq!(bytes.last(), Some(&b'\n'));

        let text = String::from_utf8(bytes).expect("utf8");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed.verdict, report.verdict);
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.data, report.data);
    }

    #[test]
    fn rejects_foreign_schema() {
        let err = parse_report_json(r#"{"schema":"other.report.v1"}"#).expect_err("schema");
        assert!(err.to_string().contains("unknown report schema"));
        assert!(parse_report_json("not json").is_err());
    }

    #[test]
    fn runtime_error_report_fails_with_tool_finding() {
        let report = runtime_error_report("boom");
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.findings[0].rule_id, ids::RULE_TOOL_RUNTIME);
        assert_eq!(report.findings[0].message, "boom");
    }

    #[test]
    fn verdict_lines() {
        let report = sample_report();
        assert_eq!(verdict_line(&report.results[0]), "PASS line 1");
        assert_eq!(
            verdict_line(&report.results[1]),
            "FAIL line 2 password.increasing_triplet"
        );
    }

    #[test]
    fn renderable_keeps_results_and_counts() {
        let renderable = to_renderable(&sample_report());
        assert_eq!(renderable.verdict, RenderableVerdict::Fail);
        assert_eq!(renderable.results.len(), 2);
        assert_eq!(renderable.results[1].findings.len(), 3);
        assert_eq!(renderable.data.candidates_failed, 1);
    }
}
