//! Render use cases: markdown and GitHub annotations, plus artifact writers.

use anyhow::Context;
use camino::Utf8Path;
use passguard_render::RenderableReport;
use passguard_types::PassguardReport;
use tracing::info;

use crate::report::serialize_report;

pub fn render_markdown(report: &RenderableReport) -> String {
    passguard_render::render_markdown(report)
}

pub fn render_annotations(report: &RenderableReport, max: usize) -> Vec<String> {
    passguard_render::render_github_annotations(report)
        .into_iter()
        .take(max)
        .collect()
}

/// Write the JSON report, creating parent directories as needed.
pub fn write_report(path: &Utf8Path, report: &PassguardReport) -> anyhow::Result<()> {
    let data = serialize_report(report)?;
    write_bytes(path, &data).with_context(|| format!("write report: {}", path))?;
    info!(path = %path, verdict = report.verdict.as_str(), "wrote report");
    Ok(())
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes(path, text.as_bytes()).with_context(|| format!("write text: {}", path))
}

fn write_bytes(path: &Utf8Path, data: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckInput, run_check};
    use crate::report::{parse_report_json, to_renderable};
    use passguard_settings::Overrides;

    fn sample_report() -> PassguardReport {
        run_check(CheckInput {
            candidates_text: "abd\nxyz\n",
            config_text: "",
            overrides: Overrides::default(),
        })
        .expect("run_check")
        .report
    }

    #[test]
    fn render_annotations_respects_max() {
        let renderable = to_renderable(&sample_report());
        assert!(render_annotations(&renderable, usize::MAX).len() > 1);
        assert_eq!(render_annotations(&renderable, 1).len(), 1);
    }

    #[test]
    fn render_markdown_smoke() {
        let markdown = render_markdown(&to_renderable(&sample_report()));
        assert!(markdown.contains("Verdict: **FAIL**"));
    }

    #[test]
    fn write_report_creates_parent_dirs() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let path = root.join("artifacts/passguard/report.json");

        write_report(&path, &sample_report()).expect("write report");

        let text = std::fs::read_to_string(&path).expect("read back");
        let parsed = parse_report_json(&text).expect("parse");
        assert_eq!(parsed.data.candidates_scanned, 2);
    }

    #[test]
    fn write_text_writes_markdown() {
        let tmp = tempfile::tempdir().expect("create temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");
        let path = root.join("nested/comment.md");

        write_text(&path, "# hi\n").expect("write text");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "# hi\n");
    }
}
