//! Class-name migration and style-block stripping for Vue templates.
//!
//! This crate rewrites a single-file component in two passes:
//!
//! 1. [`ClassReplacer`] renames legacy class names inside `class="..."`
//!    attributes using a [`ClassMap`](vcm_core::ClassMap), longest key first.
//! 2. [`StyleStripper`] empties the `<style scoped lang="scss">` block down
//!    to a placeholder comment.
//!
//! [`rewrite_file`] ties both together for a file on disk, choosing the
//! class table from the file name via [`PageKind::detect`](vcm_core::PageKind::detect).
//!
//! # Example
//!
//! ```
//! use vcm_core::{PageKind, RewriteConfig};
//! use vcm_rewrite::rewrite_source;
//!
//! let src = concat!(
//!     "<template>\n  <div class=\"queue-status-page\">\n",
//!     "    <span class=\"loading-spinner\"></span>\n  </div>\n</template>\n",
//!     "<style scoped lang=\"scss\">\n.queue-status-page { margin: 0; }\n</style>\n",
//! );
//!
//! let out = rewrite_source(src, Some(PageKind::QueueStatus), &RewriteConfig::default())?;
//! assert!(out.text.contains(r#"class="p-queue-status""#));
//! assert!(out.text.contains(r#"class="p-queue-status__loading-spinner""#));
//! assert!(out.style_stripped);
//! # Ok::<(), vcm_rewrite::RewriteError>(())
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod dispatch;
pub mod error;
pub mod replacer;
pub mod style;

pub use dispatch::{FileReport, RewriteOutcome, rewrite_file, rewrite_source};
pub use error::RewriteError;
pub use replacer::{ClassReplacer, Replacement, replace_classes};
pub use style::{StyleStrip, StyleStripper, strip_style_block};
