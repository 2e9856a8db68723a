//! Stable identifiers for rules and finding codes.
//!
//! `rule_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Rules, in declaration order.
pub const RULE_INCREASING_TRIPLET: &str = "password.increasing_triplet";
pub const RULE_NO_FORBIDDEN_PAIRS: &str = "password.no_forbidden_pairs";
pub const RULE_REPEATED_PAIR: &str = "password.repeated_pair";

// Codes: password.increasing_triplet
pub const CODE_MISSING_INCREASING_TRIPLET: &str = "missing_increasing_triplet";

// Codes: password.no_forbidden_pairs
pub const CODE_FORBIDDEN_PAIR: &str = "forbidden_pair";

// Codes: password.repeated_pair
pub const CODE_MISSING_REPEATED_PAIR: &str = "missing_repeated_pair";

// Tool-level
pub const RULE_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
