use crate::model::Candidate;
use crate::policy::EffectiveConfig;
use passguard_types::{Finding, ids};

pub mod increasing_triplet;
pub mod no_forbidden_pairs;
pub mod repeated_pair;


pub use no_forbidden_pairs::REFERENCE_FORBIDDEN_PAIRS;

/// A named, pure predicate over candidate bytes.
#[derive(Clone, Copy, Debug)]
pub struct Rule {
    pub id: &'static str,
    predicate: fn(&[u8]) -> bool,
}

impl Rule {
    pub const fn new(id: &'static str, predicate: fn(&[u8]) -> bool) -> Self {
        Self { id, predicate }
    }

    pub fn holds(&self, candidate: &[u8]) -> bool {
        (self.predicate)(candidate)
    }
}

/// The reference policy, in declaration order.
pub const REFERENCE_RULES: [Rule; 3] = [
    Rule::new(ids::RULE_INCREASING_TRIPLET, increasing_triplet::holds),
    Rule::new(ids::RULE_NO_FORBIDDEN_PAIRS, no_forbidden_pairs::holds),
    Rule::new(ids::RULE_REPEATED_PAIR, repeated_pair::holds),
];

/// Run every enabled rule in declaration order, pushing one finding per failure.
pub fn run_all(candidate: &Candidate<'_>, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    increasing_triplet::run(candidate, cfg, out);
    no_forbidden_pairs::run(candidate, cfg, out);
    repeated_pair::run(candidate, cfg, out);
}
