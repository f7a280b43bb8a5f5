//! Error types for the vcm-core crate.
//!
//! This module provides the [`ConfigError`] type for configuration-related
//! errors that can occur across the workspace.

/// Errors that can occur while validating a [`RewriteConfig`](crate::RewriteConfig).
///
/// # Examples
///
/// ```
/// use vcm_core::ConfigError;
///
/// let error = ConfigError::EmptyTag("opening_tag");
/// assert!(error.to_string().contains("opening_tag"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A style tag setting was left empty.
    #[error("style tag '{0}' must not be empty")]
    EmptyTag(&'static str),

    /// A class map contains an entry with an empty old or new name.
    #[error("class map entry '{from}' -> '{to}' has an empty name")]
    EmptyClassName {
        /// The old class name.
        from: String,
        /// The new class name.
        to: String,
    },

    /// A class name contains characters that cannot appear in a class attribute.
    #[error("invalid class name '{name}': {reason}")]
    InvalidClassName {
        /// The offending class name.
        name: String,
        /// Explanation of why the name is invalid.
        reason: String,
    },
}
