//! Pure policy evaluation (no IO).
//!
//! Input: a candidate byte sequence and a policy.
//! Output: a verdict plus findings naming the rules that failed.
//!
//! Two entry points share the same rule implementations:
//! - [`validate`] checks the fixed reference policy and stops at the first failing rule.
//! - [`evaluate`] runs a configured policy and reports every failing rule with a severity.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;
pub mod rules;
pub mod tally;

mod engine;
mod evaluator;
mod fingerprint;

#[cfg(test)]
mod property_tests;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use evaluator::{evaluate_rules, validate, validate_bytes, Validation};
pub use model::Candidate;
pub use rules::{Rule, REFERENCE_RULES};
