//! CLI entry point for passguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and exit
//! codes. All business logic lives in the `passguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use passguard_app::{
    format_explanation, format_not_found, format_tally, format_validation, parse_report_json,
    render_annotations, render_markdown, run_check, run_explain, run_tally, run_validate,
    runtime_error_report, to_renderable, verdict_exit_code, verdict_line, write_report, write_text,
    CheckInput, ExplainOutput,
};
use passguard_settings::Overrides;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "passguard",
    version,
    about = "Composable password policy checker"
)]
struct Cli {
    /// Path to passguard config TOML (a missing file means defaults).
    #[arg(long, default_value = "passguard.toml", global = true)]
    config: Utf8PathBuf,

    /// Override profile (strict|warn|advisory).
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Override when a candidate fails (error|warning).
    #[arg(long, global = true)]
    fail_on: Option<String>,

    /// Log filter used when PASSGUARD_LOG is unset (e.g. `debug`, `passguard_app=debug`).
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check one candidate against the reference policy and print PASS or FAIL.
    Validate {
        /// The candidate string.
        candidate: String,
    },

    /// Evaluate candidates (one per line) against the configured policy and write artifacts.
    Check {
        /// File with one candidate per line (reads stdin when omitted).
        #[arg(long)]
        input: Option<Utf8PathBuf>,

        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/passguard/report.json")]
        report_out: Utf8PathBuf,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/passguard/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/passguard/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/passguard/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Explain a rule_id or code with remediation guidance.
    Explain {
        /// The rule_id (e.g., "password.repeated_pair") or code (e.g., "forbidden_pair").
        identifier: String,
    },

    /// Print how often each character occurs in the given text.
    Tally {
        /// Text to count.
        text: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match &cli.cmd {
        Commands::Validate { candidate } => cmd_validate(candidate),
        Commands::Check {
            input,
            report_out,
            write_markdown,
            markdown_out,
        } => cmd_check(&cli, input.as_deref(), report_out, *write_markdown, markdown_out),
        Commands::Md { report, output } => cmd_md(report, output.as_deref()),
        Commands::Annotations { report, max } => cmd_annotations(report, *max),
        Commands::Explain { identifier } => cmd_explain(identifier),
        Commands::Tally { text } => {
            print!("{}", format_tally(&run_tally(text)));
            Ok(())
        }
    }
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_env("PASSGUARD_LOG")
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_validate(candidate: &str) -> anyhow::Result<()> {
    let validation = run_validate(candidate);
    println!("{}", format_validation(&validation));
    if !validation.valid {
        std::process::exit(2);
    }
    Ok(())
}

fn cmd_check(
    cli: &Cli,
    input: Option<&Utf8Path>,
    report_out: &Utf8Path,
    write_markdown: bool,
    markdown_out: &Utf8Path,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let config_text = read_optional(&cli.config).context("read config")?;
        let candidates_text = match input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("read candidates: {}", path))?,
            None => std::io::read_to_string(std::io::stdin()).context("read candidates from stdin")?,
        };

        let output = run_check(CheckInput {
            candidates_text: &candidates_text,
            config_text: &config_text,
            overrides: Overrides {
                profile: cli.profile.clone(),
                fail_on: cli.fail_on.clone(),
            },
        })?;

        for result in &output.report.results {
            println!("{}", verdict_line(result));
        }

        write_report(report_out, &output.report).context("write report json")?;

        if write_markdown {
            let md = render_markdown(&to_renderable(&output.report));
            write_text(markdown_out, &md).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            let _ = write_report(report_out, &report);
            eprintln!("passguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Missing file reads as empty; any other I/O error is reported.
fn read_optional(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path, "config not found; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read {}", path)),
    }
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&report));

    if let Some(out_path) = output {
        write_text(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }

    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let report = parse_report_json(&report_text)?;
    let annotations = render_annotations(&to_renderable(&report), max);

    for annotation in annotations {
        println!("{}", annotation);
    }

    Ok(())
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found {
            rule_id,
            explanation,
            before,
            after,
        } => {
            print!(
                "{}",
                format_explanation(rule_id, &explanation, &before, &after)
            );
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            suggestions,
        } => {
            eprint!("{}", format_not_found(&identifier, &suggestions));
            std::process::exit(1);
        }
    }
}
