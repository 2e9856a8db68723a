use sha2::{Digest, Sha256};
use std::fmt;

/// The byte sequence under evaluation.
///
/// Borrowed for the duration of one evaluation and never mutated. Rules see raw
/// bytes: matching is case-sensitive and multi-byte characters are opaque.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    bytes: &'a [u8],
}

impl<'a> Candidate<'a> {
    pub fn new(s: &'a str) -> Self {
        Self {
            bytes: s.as_bytes(),
        }
    }

    pub fn from_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex SHA-256 of the candidate bytes.
    ///
    /// Reports and fingerprints use this instead of the raw value.
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.bytes))
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(s: &'a str) -> Self {
        Candidate::new(s)
    }
}

impl<'a> From<&'a [u8]> for Candidate<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Candidate::from_bytes(bytes)
    }
}

// Candidates are secrets; keep them out of debug output.
impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
