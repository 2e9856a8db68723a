//! Character frequency tally.
//!
//! Counts are accumulated into a map owned by the caller; nothing is global, so
//! tallies from different callers never bleed into each other.

use std::collections::BTreeMap;

/// Count every `char` in `s` into a fresh map.
pub fn tally_letters(s: &str) -> BTreeMap<char, usize> {
    let mut acc = BTreeMap::new();
    tally_into(s, &mut acc);
    acc
}

/// Add the counts for `s` to `acc`. Repeated calls accumulate.
pub fn tally_into(s: &str, acc: &mut BTreeMap<char, usize>) {
    for c in s.chars() {
        *acc.entry(c).or_insert(0) += 1;
    }
}
