//! Error types for the Rootstock library.
//!
//! Stemming itself is a total function and cannot fail; errors only arise
//! from the strict entry points that enforce the caller contract on input
//! (see [`crate::stem::Stemmer::try_stem`]). All errors are represented by
//! the [`RootstockError`] enum.
//!
//! # Examples
//!
//! ```
//! use rootstock::error::{Result, RootstockError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(RootstockError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for Rootstock operations.
///
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum RootstockError {
    /// Caller contract violation (word is not pre-normalized lowercase ASCII)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Analysis-related errors
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with RootstockError.
pub type Result<T> = std::result::Result<T, RootstockError>;

impl RootstockError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RootstockError::InvalidArgument(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        RootstockError::Analysis(msg.into())
    }
}
