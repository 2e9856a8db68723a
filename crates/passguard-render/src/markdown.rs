use crate::{RenderableFinding, RenderableReport, RenderableSeverity, RenderableVerdict};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Passguard report\n\n");
    out.push_str(&format!(
        "- Verdict: **{}**\n- Profile: `{}`\n- Candidates: {} scanned, {} passed, {} warned, {} failed\n\n",
        verdict_label(report.verdict),
        report.data.profile,
        report.data.candidates_scanned,
        report.data.candidates_passed,
        report.data.candidates_warned,
        report.data.candidates_failed,
    ));

    if !report.findings.is_empty() {
        out.push_str("## Runtime findings\n\n");
        for f in &report.findings {
            push_finding(&mut out, f);
        }
        out.push('\n');
    }

    let flagged: Vec<_> = report
        .results
        .iter()
        .filter(|r| !r.findings.is_empty())
        .collect();

    if flagged.is_empty() {
        if report.findings.is_empty() {
            out.push_str("No findings.\n");
        }
        return out;
    }

    out.push_str("## Candidates with findings\n");

    for result in flagged {
        out.push_str(&format!(
            "\n### Line {}: {}\n\n",
            result.line,
            verdict_label(result.verdict)
        ));
        for f in &result.findings {
            push_finding(&mut out, f);
        }
    }

    out
}

fn push_finding(out: &mut String, f: &RenderableFinding) {
    let sev = match f.severity {
        RenderableSeverity::Info => "INFO",
        RenderableSeverity::Warning => "WARN",
        RenderableSeverity::Error => "ERROR",
    };
    out.push_str(&format!(
        "- [{}] `{}` / `{}`: {}\n",
        sev, f.rule_id, f.code, f.message
    ));
    if let Some(help) = &f.help {
        out.push_str(&format!("  - help: {}\n", help));
    }
}

fn verdict_label(verdict: RenderableVerdict) -> &'static str {
    match verdict {
        RenderableVerdict::Pass => "PASS",
        RenderableVerdict::Warn => "WARN",
        RenderableVerdict::Fail => "FAIL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableResult};

    fn data(scanned: u32, passed: u32, warned: u32, failed: u32) -> RenderableData {
        RenderableData {
            profile: "strict".to_string(),
            candidates_scanned: scanned,
            candidates_passed: passed,
            candidates_warned: warned,
            candidates_failed: failed,
        }
    }

    #[test]
    fn renders_all_passing_report() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            results: vec![RenderableResult {
                line: 1,
                verdict: RenderableVerdict::Pass,
                failed_rule: None,
                findings: Vec::new(),
            }],
            findings: Vec::new(),
            data: data(1, 1, 0, 0),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No findings"));
        assert!(!md.contains("### Line"));
    }

    #[test]
    fn renders_failing_candidates_snapshot() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Fail,
            results: vec![
                RenderableResult {
                    line: 1,
                    verdict: RenderableVerdict::Pass,
                    failed_rule: None,
                    findings: Vec::new(),
                },
                RenderableResult {
                    line: 2,
                    verdict: RenderableVerdict::Fail,
                    failed_rule: Some("password.increasing_triplet".to_string()),
                    findings: vec![
                        RenderableFinding {
                            severity: RenderableSeverity::Error,
                            rule_id: "password.increasing_triplet".to_string(),
                            code: "missing_increasing_triplet".to_string(),
                            message: "no straight".to_string(),
                            help: Some("add abc".to_string()),
                        },
                        RenderableFinding {
                            severity: RenderableSeverity::Warning,
                            rule_id: "password.repeated_pair".to_string(),
                            code: "missing_repeated_pair".to_string(),
                            message: "no repeat".to_string(),
                            help: None,
                        },
                    ],
                },
            ],
            findings: Vec::new(),
            data: data(2, 1, 0, 1),
        };

        insta::assert_snapshot!(render_markdown(&report), @r"
        # Passguard report

        - Verdict: **FAIL**
        - Profile: `strict`
        - Candidates: 2 scanned, 1 passed, 0 warned, 1 failed

        ## Candidates with findings

        ### Line 2: FAIL

        - [ERROR] `password.increasing_triplet` / `missing_increasing_triplet`: no straight
          - help: add abc
        - [WARN] `password.repeated_pair` / `missing_repeated_pair`: no repeat
        ");
    }

    #[test]
    fn renders_runtime_findings_without_candidates() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Fail,
            results: Vec::new(),
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                rule_id: "tool.runtime".to_string(),
                code: "runtime_error".to_string(),
                message: "read input".to_string(),
                help: None,
            }],
            data: data(0, 0, 0, 0),
        };
        let md = render_markdown(&report);
        assert!(md.contains("## Runtime findings"));
        assert!(md.contains("[ERROR] `tool.runtime` / `runtime_error`: read input"));
        assert!(!md.contains("No findings"));
    }
}
