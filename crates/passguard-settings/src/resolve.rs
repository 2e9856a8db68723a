use crate::{model::PassguardConfigV1, presets};
use anyhow::Context;
use passguard_domain::policy::{EffectiveConfig, FailOn};
use passguard_types::{Severity, explain};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: PassguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            presets::PROFILES.join("|")
        )
    })?;

    // forbidden pairs
    if let Some(pairs) = cfg.forbidden_pairs.as_deref() {
        effective.forbidden_pairs = parse_forbidden_pairs(pairs)?;
    }

    // per-rule overrides
    for (rule_id, rc) in cfg.rules.iter() {
        let entry = effective.rules.get_mut(rule_id).with_context(|| {
            format!(
                "unknown rule: {rule_id} (expected one of {})",
                explain::all_rule_ids().join(", ")
            )
        })?;

        if let Some(enabled) = rc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = rc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {rule_id}"))?;
        }
    }

    // fail_on: CLI override wins over config
    if let Some(fail_on_s) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn parse_forbidden_pairs(pairs: &[String]) -> anyhow::Result<Vec<[u8; 2]>> {
    pairs
        .iter()
        .map(|p| match p.as_bytes() {
            &[a, b] => Ok([a, b]),
            other => anyhow::bail!(
                "invalid forbidden pair: {p:?} (expected exactly 2 bytes, got {})",
                other.len()
            ),
        })
        .collect()
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
