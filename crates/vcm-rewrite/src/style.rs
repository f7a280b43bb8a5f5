//! Scoped style-block stripping.
//!
//! Once a page's rules live in a standalone SCSS file, its inline
//! `<style scoped lang="scss">` block is emptied down to a placeholder
//! comment. Every matching block is replaced, so a second pass finds
//! nothing left to strip.

use std::borrow::Cow;

use regex::{NoExpand, Regex};
use vcm_core::StyleBlockConfig;

use crate::RewriteError;

/// The result of a strip pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleStrip<'t> {
    /// The resulting text. Borrowed when no block was found.
    pub text: Cow<'t, str>,

    /// Whether any block was found and replaced.
    pub stripped: bool,

    /// Number of blocks replaced.
    pub blocks: usize,
}

/// Replaces the configured style blocks with a placeholder.
///
/// # Examples
///
/// ```
/// use vcm_core::StyleBlockConfig;
/// use vcm_rewrite::StyleStripper;
///
/// let stripper = StyleStripper::new(&StyleBlockConfig::default())?;
/// let src = "<template/>\n<style scoped lang=\"scss\">\n.a { color: red; }\n</style>\n";
///
/// let out = stripper.strip(src);
/// assert!(out.stripped);
/// assert_eq!(
///     out.text,
///     "<template/>\n<style scoped>\n/* 所有樣式已移至對應的 SCSS 檔案 */\n</style>\n"
/// );
/// # Ok::<(), vcm_rewrite::RewriteError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StyleStripper {
    pattern: Regex,
    replacement: String,
}

impl StyleStripper {
    /// Compiles a stripper for the given tags.
    pub fn new(config: &StyleBlockConfig) -> Result<Self, RewriteError> {
        config.validate()?;

        // Lazy `.*?` stops at the first closing tag after the opening one.
        let pattern = Regex::new(&format!(
            "(?s){}.*?{}",
            regex::escape(&config.opening_tag),
            regex::escape(&config.closing_tag)
        ))?;

        Ok(Self {
            pattern,
            replacement: config.replacement(),
        })
    }

    /// The text a matched block is replaced with.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replaces every matching block in `text`.
    pub fn strip<'t>(&self, text: &'t str) -> StyleStrip<'t> {
        let blocks = self.pattern.find_iter(text).count();
        if blocks == 0 {
            return StyleStrip {
                text: Cow::Borrowed(text),
                stripped: false,
                blocks,
            };
        }

        tracing::debug!(blocks, "Stripping style blocks");

        let out = self
            .pattern
            .replace_all(text, NoExpand(self.replacement.as_str()));

        StyleStrip {
            text: Cow::Owned(out.into_owned()),
            stripped: true,
            blocks,
        }
    }
}

/// Strips every default `<style scoped lang="scss">` block from `text`.
pub fn strip_style_block(text: &str) -> Result<StyleStrip<'_>, RewriteError> {
    Ok(StyleStripper::new(&StyleBlockConfig::default())?.strip(text))
}
