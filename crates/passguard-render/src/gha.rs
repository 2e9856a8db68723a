use crate::{RenderableFinding, RenderableReport, RenderableSeverity};

/// Render findings as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} title=passguard::[{rule_id}:{code}] line {line}: {message}`
pub fn render_github_annotations(report: &RenderableReport) -> Vec<String> {
    let mut out = Vec::new();

    for f in &report.findings {
        out.push(annotation(f, None));
    }
    for result in &report.results {
        for f in &result.findings {
            out.push(annotation(f, Some(result.line)));
        }
    }

    out
}

fn annotation(f: &RenderableFinding, line: Option<u32>) -> String {
    let level = match f.severity {
        RenderableSeverity::Error => "error",
        RenderableSeverity::Warning => "warning",
        RenderableSeverity::Info => "notice",
    };

    let prefix = line.map(|l| format!(" line {l}:")).unwrap_or_default();
    let message = format!("[{}:{}]{} {}", f.rule_id, f.code, prefix, f.message)
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");

    format!("::{} title=passguard::{}", level, message)
}
