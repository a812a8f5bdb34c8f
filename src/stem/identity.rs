//! Identity stemmer implementation.

use crate::stem::Stemmer;

/// Identity stemmer that returns words unchanged.
///
/// Useful as a drop-in replacement when stemming should be disabled
/// without changing the call sites.
#[derive(Debug, Clone, Default)]
pub struct IdentityStemmer;

impl IdentityStemmer {
    /// Create a new identity stemmer.
    pub fn new() -> Self {
        IdentityStemmer
    }
}

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_stemmer() {
        let stemmer = IdentityStemmer::new();

        assert_eq!(stemmer.stem("running"), "running");
        assert_eq!(stemmer.stem("ponies"), "ponies");
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.name(), "identity");
    }
}
