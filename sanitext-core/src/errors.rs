//! errors.rs - Custom error types for the sanitext-core library.
//!
//! The sanitization operations themselves are total and never fail. Errors only
//! arise from the ambient layer around them, chiefly loading option files.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `sanitext-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SanitextError {
    #[error("Failed to read options file '{0}': {1}")]
    ConfigRead(String, #[source] std::io::Error),

    #[error("Failed to parse options file '{0}': {1}")]
    ConfigParse(String, String),

    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption { option: String, value: String },
}
