//! Per-file dispatch: pick the class table, rewrite, write back.

use std::borrow::Cow;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};
use vcm_core::{PageKind, RewriteConfig};

use crate::{ClassReplacer, RewriteError, StyleStripper};

/// The result of rewriting a source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome<'t> {
    /// The rewritten text.
    pub text: Cow<'t, str>,

    /// The page whose table was applied, if any.
    pub page: Option<PageKind>,

    /// Number of class-name occurrences renamed.
    pub class_replacements: usize,

    /// Whether the style block was replaced.
    pub style_stripped: bool,
}

impl RewriteOutcome<'_> {
    /// Returns `true` if either pass modified the text.
    #[inline]
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.class_replacements > 0 || self.style_stripped
    }
}

/// Summary of a file rewritten on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// The file that was rewritten.
    pub path: Utf8PathBuf,

    /// The page detected from the path, if any.
    pub page: Option<PageKind>,

    /// Number of class-name occurrences renamed.
    pub class_replacements: usize,

    /// Whether the style block was replaced.
    pub style_stripped: bool,

    /// Whether the written content differs from what was read.
    pub changed: bool,
}

/// Rewrites `text` as the given page: class renaming first, then style
/// stripping.
///
/// With `page` set to `None` class renaming is skipped; style stripping
/// still runs when enabled.
///
/// # Examples
///
/// ```
/// use vcm_core::{PageKind, RewriteConfig};
/// use vcm_rewrite::rewrite_source;
///
/// let src = r#"<div class="admin-page"><h1 class="admin-title">Admin</h1></div>"#;
/// let out = rewrite_source(src, Some(PageKind::Admin), &RewriteConfig::default())?;
///
/// assert_eq!(out.text, r#"<div class="p-admin"><h1 class="p-admin__title">Admin</h1></div>"#);
/// assert_eq!(out.class_replacements, 2);
/// assert!(!out.style_stripped);
/// # Ok::<(), vcm_rewrite::RewriteError>(())
/// ```
pub fn rewrite_source<'t>(
    text: &'t str,
    page: Option<PageKind>,
    config: &RewriteConfig,
) -> Result<RewriteOutcome<'t>, RewriteError> {
    config.validate()?;

    let (text, class_replacements) = match page {
        Some(page) => {
            let replacer = ClassReplacer::new(&page.class_map())?;
            let replaced = replacer.replace(text);
            debug!(page = %page, renamed = replaced.count, "Applied class table");
            (replaced.text, replaced.count)
        }
        None => {
            debug!("No class table for this file, skipping class renaming");
            (Cow::Borrowed(text), 0)
        }
    };

    if !config.strip_style {
        return Ok(RewriteOutcome {
            text,
            page,
            class_replacements,
            style_stripped: false,
        });
    }

    let stripper = StyleStripper::new(&config.style)?;
    let strip = stripper.strip(&text);
    let style_stripped = strip.stripped;
    let stripped_text = style_stripped.then(|| strip.text.into_owned());

    Ok(RewriteOutcome {
        text: stripped_text.map_or(text, Cow::Owned),
        page,
        class_replacements,
        style_stripped,
    })
}

/// Rewrites the file at `path` in place.
///
/// The page is detected from the path with [`PageKind::detect`]. The file is
/// read as UTF-8, rewritten with [`rewrite_source`], and written back even if
/// nothing changed.
pub fn rewrite_file(
    path: impl AsRef<Utf8Path>,
    config: &RewriteConfig,
) -> Result<FileReport, RewriteError> {
    let path = path.as_ref();
    let page = PageKind::detect(path.as_str());
    debug!(path = %path, page = ?page, "Rewriting file");

    let source = fs::read_to_string(path).map_err(|e| RewriteError::read(path, e))?;
    let outcome = rewrite_source(&source, page, config)?;
    let changed = outcome.text != source.as_str();

    fs::write(path, outcome.text.as_bytes()).map_err(|e| RewriteError::write(path, e))?;

    info!(
        path = %path,
        renamed = outcome.class_replacements,
        style_stripped = outcome.style_stripped,
        changed,
        "File rewritten"
    );

    Ok(FileReport {
        path: path.to_owned(),
        page,
        class_replacements: outcome.class_replacements,
        style_stripped: outcome.style_stripped,
        changed,
    })
}
