//! Error types for the vcm-rewrite crate.
//!
//! This module provides the [`RewriteError`] type for errors that can occur
//! while building the rewrite passes or rewriting a file on disk.

use camino::{Utf8Path, Utf8PathBuf};
use vcm_core::ConfigError;

/// Errors that can occur during a rewrite.
///
/// I/O failures carry the path involved. Nothing here is retried; the
/// binary reports the error and exits.
///
/// # Examples
///
/// ```
/// use vcm_rewrite::RewriteError;
///
/// fn describe(err: &RewriteError) -> String {
///     match err {
///         RewriteError::Read { path, .. } => format!("cannot read {path}"),
///         RewriteError::Write { path, .. } => format!("cannot write {path}"),
///         RewriteError::Pattern(e) => format!("bad pattern: {e}"),
///         RewriteError::Config(e) => format!("bad config: {e}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    /// Failed to read the file, including a body that is not valid UTF-8.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the rewritten file back.
    #[error("failed to write file {path}: {source}")]
    Write {
        /// The file that couldn't be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A match pattern failed to compile.
    #[error("failed to compile pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The class map or style settings are invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl RewriteError {
    /// Creates a new [`RewriteError::Read`] error.
    #[inline]
    pub fn read(path: impl AsRef<Utf8Path>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.as_ref().to_owned(),
            source,
        }
    }

    /// Creates a new [`RewriteError::Write`] error.
    #[inline]
    pub fn write(path: impl AsRef<Utf8Path>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.as_ref().to_owned(),
            source,
        }
    }

    /// Returns `true` if this error came from the filesystem.
    #[inline]
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }

    /// Returns the file path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => Some(path.as_path()),
            Self::Pattern(_) | Self::Config(_) => None,
        }
    }
}
