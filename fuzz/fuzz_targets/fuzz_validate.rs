//! Fuzz target for candidate evaluation.
//!
//! Goal: evaluation is total. Every byte sequence gets a verdict, and the
//! reference evaluator agrees with the strict configured engine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_validate
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use passguard_domain::{Candidate, evaluate, validate_bytes};
use passguard_settings::{Overrides, PassguardConfigV1, resolve_config};

fuzz_target!(|data: &[u8]| {
    let validation = validate_bytes(data);
    assert_eq!(validation.valid, validation.failed_rule.is_none());

    let Ok(resolved) = resolve_config(PassguardConfigV1::default(), Overrides::default()) else {
        return;
    };
    let report = evaluate(&Candidate::from_bytes(data), &resolved.effective);
    assert_eq!(report.failed_rule.as_deref(), validation.failed_rule);
});
