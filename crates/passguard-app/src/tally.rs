//! The `tally` use case: character frequencies for a piece of text.

use passguard_domain::tally::tally_letters;

/// Counts in char order.
pub fn run_tally(text: &str) -> Vec<(char, usize)> {
    tally_letters(text).into_iter().collect()
}

/// One `char count` line per entry.
pub fn format_tally(counts: &[(char, usize)]) -> String {
    counts
        .iter()
        .map(|(c, n)| format!("{c} {n}\n"))
        .collect()
}
