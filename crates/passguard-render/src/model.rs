#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableSeverity {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableVerdict {
    Pass,
    Warn,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableFinding {
    pub severity: RenderableSeverity,
    pub rule_id: String,
    pub code: String,
    pub message: String,
    pub help: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableResult {
    pub line: u32,
    pub verdict: RenderableVerdict,
    pub failed_rule: Option<String>,
    pub findings: Vec<RenderableFinding>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableData {
    pub profile: String,
    pub candidates_scanned: u32,
    pub candidates_passed: u32,
    pub candidates_warned: u32,
    pub candidates_failed: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableReport {
    pub verdict: RenderableVerdict,
    pub results: Vec<RenderableResult>,
    /// Findings not tied to a candidate.
    pub findings: Vec<RenderableFinding>,
    pub data: RenderableData,
}
