//! # Rootstock
//!
//! A Porter stemming library for Rust.
//!
//! Rootstock reduces English words to their stems using the classic Porter
//! suffix-stripping algorithm ("running" → "run", "caresses" → "caress").
//! Stemming is exposed through the [`Stemmer`] trait so that callers can
//! swap algorithms; [`PorterStemmer`] is the real one.
//!
//! ## Features
//!
//! - Pure Rust implementation of the classic Porter algorithm
//! - Faithful rule ordering and decision predicates, including the
//!   reference rule-list departures (`bli` → `ble`, `logi` → `log`)
//! - Stateless stemmers, safe to share across threads
//! - Strict entry point for callers that want malformed input rejected
//!
//! ## Examples
//!
//! ```
//! use rootstock::{PorterStemmer, Stemmer};
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("ponies"), "poni");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

pub mod error;
pub mod stem;

pub use error::{Result, RootstockError};
pub use stem::{IdentityStemmer, PorterStemmer, Stemmer};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
