//! Use case orchestration for passguard.
//!
//! This crate provides the application layer: use cases that coordinate the domain, settings,
//! and render layers. It is intentionally thin and delegates heavy lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod explain;
mod render;
mod report;
mod tally;
mod validate;

pub use check::{run_check, split_candidates, verdict_exit_code, CheckInput, CheckOutput};
pub use explain::{
    format_explanation, format_not_found, owning_rule, run_explain, ExampleCheck, ExplainOutput,
};
pub use render::{render_annotations, render_markdown, write_report, write_text};
pub use report::{
    parse_report_json, runtime_error_report, serialize_report, to_renderable, verdict_line,
};
pub use tally::{format_tally, run_tally};
pub use validate::{format_validation, run_validate};
