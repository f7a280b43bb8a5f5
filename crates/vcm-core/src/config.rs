//! Configuration structures for the vue-class-migrate tool.
//!
//! - [`StyleBlockConfig`] - which style block to strip and what replaces it
//! - [`RewriteConfig`] - root configuration passed to the rewrite pass
//!
//! Both implement [`Default`] with the values used for the Nuxt pages this
//! tool was written for. The `vue-class-migrate` binary takes no options and
//! always runs with the defaults; other values are for library callers of
//! `vcm_rewrite::rewrite_source` and `vcm_rewrite::rewrite_file`.

use crate::ConfigError;

/// Opening tag of the style block that gets stripped.
pub const DEFAULT_OPENING_TAG: &str = r#"<style scoped lang="scss">"#;

/// Closing tag of the style block that gets stripped.
pub const DEFAULT_CLOSING_TAG: &str = "</style>";

/// Opening tag written in place of the stripped block's opening tag.
pub const DEFAULT_REPLACEMENT_OPENING_TAG: &str = "<style scoped>";

/// Comment left inside the emptied style block.
pub const DEFAULT_PLACEHOLDER: &str = "/* 所有樣式已移至對應的 SCSS 檔案 */";

/// Settings for the style-block stripper.
///
/// Library-only: the CLI always uses [`StyleBlockConfig::default`].
///
/// # Examples
///
/// ```
/// use vcm_core::StyleBlockConfig;
///
/// let config = StyleBlockConfig::default();
/// assert_eq!(config.opening_tag, r#"<style scoped lang="scss">"#);
/// assert_eq!(
///     config.replacement(),
///     "<style scoped>\n/* 所有樣式已移至對應的 SCSS 檔案 */\n</style>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlockConfig {
    /// Literal opening tag that starts the block.
    pub opening_tag: String,

    /// Literal closing tag that ends the block.
    pub closing_tag: String,

    /// Opening tag written back in place of [`opening_tag`](Self::opening_tag).
    pub replacement_opening_tag: String,

    /// Comment written between the tags.
    pub placeholder: String,
}

impl StyleBlockConfig {
    /// Returns the full text that replaces a matched block.
    #[must_use]
    pub fn replacement(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.replacement_opening_tag, self.placeholder, self.closing_tag
        )
    }

    /// Checks that both tags are non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opening_tag.is_empty() {
            return Err(ConfigError::EmptyTag("opening_tag"));
        }
        if self.closing_tag.is_empty() {
            return Err(ConfigError::EmptyTag("closing_tag"));
        }
        if self.replacement_opening_tag.is_empty() {
            return Err(ConfigError::EmptyTag("replacement_opening_tag"));
        }
        Ok(())
    }
}

impl Default for StyleBlockConfig {
    fn default() -> Self {
        Self {
            opening_tag: DEFAULT_OPENING_TAG.to_owned(),
            closing_tag: DEFAULT_CLOSING_TAG.to_owned(),
            replacement_opening_tag: DEFAULT_REPLACEMENT_OPENING_TAG.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

/// Root configuration for a rewrite pass.
///
/// Library-only: the CLI always uses [`RewriteConfig::default`], which
/// strips the default style block.
///
/// # Examples
///
/// ```
/// use vcm_core::RewriteConfig;
///
/// let config = RewriteConfig::default();
/// assert!(config.strip_style);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Whether the style block is stripped after class renaming.
    pub strip_style: bool,

    /// Style-block settings.
    pub style: StyleBlockConfig,
}

impl RewriteConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strip_style {
            self.style.validate()?;
        }
        Ok(())
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            strip_style: true,
            style: StyleBlockConfig::default(),
        }
    }
}
