//! Stemming algorithms for reducing words to their root forms.

use crate::error::{Result, RootstockError};

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;

    /// Strict variant of [`stem`](Stemmer::stem).
    ///
    /// Enforces the caller contract that words arrive pre-normalized as
    /// lowercase ASCII letters; anything else is rejected with
    /// [`RootstockError::InvalidArgument`] instead of being stemmed on a
    /// best-effort basis. The empty word is accepted and stems to itself.
    fn try_stem(&self, word: &str) -> Result<String> {
        if !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(RootstockError::invalid_argument(format!(
                "word must consist of lowercase ASCII letters: {word:?}"
            )));
        }
        Ok(self.stem(word))
    }
}

// Stemmer implementations
pub mod identity;
pub mod porter;

// Re-export stemmers
pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;
