//! Class-name replacement inside `class="..."` attributes.
//!
//! Renames are applied one [`ClassMap`] entry at a time, longest key first.
//! Within an attribute value a key only matches on word boundaries, where
//! `-` counts as a boundary and `_` does not. Two consequences:
//!
//! - `status-container` would match inside `queue-status-container`, so the
//!   longer key has to be renamed first.
//! - Migrated names such as `p-queue-status__loading` never match `loading`
//!   again, which keeps a second run a no-op.
//!
//! The attribute pattern is the literal `class="`, so Vue bindings like
//! `:class="{ 'color-btn': active }"` are rewritten as well.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, NoExpand, Regex};
use vcm_core::ClassMap;

use crate::RewriteError;

/// Matches a double-quoted `class` attribute, capturing its value.
pub const CLASS_ATTRIBUTE: &str = r#"class="([^"]*)""#;

static CLASS_ATTRIBUTE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the compiled attribute pattern, compiling it on first use.
fn class_attribute_pattern() -> Result<&'static Regex, RewriteError> {
    if let Some(pattern) = CLASS_ATTRIBUTE_PATTERN.get() {
        return Ok(pattern);
    }

    let pattern = Regex::new(CLASS_ATTRIBUTE)?;
    Ok(CLASS_ATTRIBUTE_PATTERN.get_or_init(|| pattern))
}

/// The result of a replacement pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement<'t> {
    /// The rewritten text. Borrowed when nothing was renamed.
    pub text: Cow<'t, str>,

    /// Number of class-name occurrences renamed.
    pub count: usize,
}

impl Replacement<'_> {
    /// Returns `true` if any class name was renamed.
    #[inline]
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.count > 0
    }
}

/// A single compiled rename.
#[derive(Debug)]
struct Rule {
    from: String,
    to: String,
    pattern: Regex,
}

impl Rule {
    /// Renames every boundary match of this rule inside every attribute.
    ///
    /// Returns `None` when nothing matched.
    fn apply(&self, attribute: &Regex, text: &str) -> Option<(String, usize)> {
        let mut count = 0;
        let rewritten = attribute.replace_all(text, |caps: &Captures<'_>| {
            let value = &caps[1];
            let hits = self.pattern.find_iter(value).count();
            if hits == 0 {
                return caps[0].to_owned();
            }
            count += hits;
            let renamed = self.pattern.replace_all(value, NoExpand(self.to.as_str()));
            format!(r#"class="{renamed}""#)
        });

        (count > 0).then(|| (rewritten.into_owned(), count))
    }
}

/// Applies a [`ClassMap`] to template text.
///
/// Patterns are compiled once in [`new`](Self::new), so one replacer can be
/// reused across many files.
///
/// # Examples
///
/// ```
/// use vcm_core::ClassMap;
/// use vcm_rewrite::ClassReplacer;
///
/// let map: ClassMap = [("btn-copy", "p-admin__btn-copy")].into_iter().collect();
/// let replacer = ClassReplacer::new(&map)?;
///
/// let out = replacer.replace(r#"<button class="btn-copy primary">Copy</button>"#);
/// assert_eq!(out.text, r#"<button class="p-admin__btn-copy primary">Copy</button>"#);
/// assert_eq!(out.count, 1);
/// # Ok::<(), vcm_rewrite::RewriteError>(())
/// ```
#[derive(Debug)]
pub struct ClassReplacer {
    attribute: &'static Regex,
    rules: Vec<Rule>,
}

impl ClassReplacer {
    /// Validates `map` and compiles one boundary pattern per entry.
    pub fn new(map: &ClassMap) -> Result<Self, RewriteError> {
        map.validate()?;
        let attribute = class_attribute_pattern()?;

        let rules = map
            .ordered()
            .into_iter()
            .map(|rename| {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&rename.from)))?;
                Ok(Rule {
                    from: rename.from.clone().into_owned(),
                    to: rename.to.clone().into_owned(),
                    pattern,
                })
            })
            .collect::<Result<Vec<_>, RewriteError>>()?;

        Ok(Self { attribute, rules })
    }

    /// Number of compiled renames.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if there is nothing to rename.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Old class names in the order they are applied.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.from.as_str())
    }

    /// Renames class names in `text`.
    pub fn replace<'t>(&self, text: &'t str) -> Replacement<'t> {
        let mut current = Cow::Borrowed(text);
        let mut count = 0;

        for rule in &self.rules {
            if let Some((next, hits)) = rule.apply(self.attribute, &current) {
                tracing::trace!(from = %rule.from, to = %rule.to, hits, "Renamed class");
                count += hits;
                current = Cow::Owned(next);
            }
        }

        Replacement {
            text: current,
            count,
        }
    }
}

/// Renames class names in `text` using `map`.
///
/// Convenience wrapper that compiles a [`ClassReplacer`] for a single use.
pub fn replace_classes<'t>(text: &'t str, map: &ClassMap) -> Result<Replacement<'t>, RewriteError> {
    Ok(ClassReplacer::new(map)?.replace(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcm_core::PageKind;

    fn map(entries: &'static [(&'static str, &'static str)]) -> ClassMap {
        ClassMap::from_static(entries)
    }

    #[test]
    fn test_renames_inside_class_attribute_only() {
        let src = r#"<div class="token-list" id="token-list">token-list</div>"#;
        let out = replace_classes(src, &map(&[("token-list", "p-admin__token-list")])).unwrap();
        assert_eq!(
            out.text,
            r#"<div class="p-admin__token-list" id="token-list">token-list</div>"#
        );
        assert_eq!(out.count, 1);
    }

    #[test]
    fn test_preserves_neighbours_and_whitespace() {
        let src = r#"<div class="  wide  color-btn   active ">"#;
        let out = replace_classes(src, &map(&[("color-btn", "p-editor__color-btn")])).unwrap();
        assert_eq!(out.text, r#"<div class="  wide  p-editor__color-btn   active ">"#);
    }

    #[test]
    fn test_renames_every_occurrence() {
        let src = r#"<i class="slider x slider"></i><i class="slider"></i>"#;
        let out = replace_classes(src, &map(&[("slider", "p-editor__slider")])).unwrap();
        assert_eq!(
            out.text,
            r#"<i class="p-editor__slider x p-editor__slider"></i><i class="p-editor__slider"></i>"#
        );
        assert_eq!(out.count, 3);
    }

    #[test]
    fn test_requires_word_boundary() {
        let src = r#"<i class="sliders myslider"></i>"#;
        let out = replace_classes(src, &map(&[("slider", "p-editor__slider")])).unwrap();
        assert_eq!(out.text, src);
        assert!(!out.is_changed());
        assert!(matches!(out.text, Cow::Borrowed(_)));
    }

    #[test]
    fn test_longer_key_wins_over_contained_key() {
        let src = r#"<div class="queue-status-container status-container">"#;
        let out = replace_classes(src, &PageKind::QueueStatus.class_map()).unwrap();
        assert_eq!(
            out.text,
            r#"<div class="p-queue-status__container p-queue-status__status-container">"#
        );
        assert_eq!(out.count, 2);
    }

    #[test]
    fn test_order_does_not_depend_on_table_order() {
        // Short key listed before the longer one that contains it.
        let src = r#"<span class="loading-spinner loading">"#;
        let table = map(&[("loading", "p-q__loading"), ("loading-spinner", "p-q__loading-spinner")]);
        let out = replace_classes(src, &table).unwrap();
        assert_eq!(out.text, r#"<span class="p-q__loading-spinner p-q__loading">"#);
    }

    #[test]
    fn test_rewrites_vue_class_binding() {
        let src = r#"<button :class="{ 'color-btn': true, selected: isOn }">"#;
        let out = replace_classes(src, &PageKind::Editor.class_map()).unwrap();
        assert_eq!(
            out.text,
            r#"<button :class="{ 'p-editor__color-btn': true, selected: isOn }">"#
        );
    }

    #[test]
    fn test_single_quoted_attribute_is_ignored() {
        let src = "<div class='admin-card'>";
        let out = replace_classes(src, &PageKind::Admin.class_map()).unwrap();
        assert_eq!(out.text, src);
    }

    #[test]
    fn test_replacement_is_literal() {
        let src = r#"<b class="price">"#;
        let out = replace_classes(src, &map(&[("price", "$1-cost")])).unwrap();
        assert_eq!(out.text, r#"<b class="$1-cost">"#);
    }

    #[test]
    fn test_keys_follow_length_order() {
        let replacer = ClassReplacer::new(&PageKind::Editor.class_map()).unwrap();
        let keys: Vec<_> = replacer.keys().collect();
        assert_eq!(keys.first(), Some(&"sticker-categories"));
        let pos = |k: &str| keys.iter().position(|x| *x == k).unwrap();
        assert!(pos("canvas-text") < pos("canvas"));
        assert!(pos("token-input-row") < pos("token-input"));
    }

    #[test]
    fn test_invalid_map_is_rejected() {
        let err = ClassReplacer::new(&map(&[("a b", "c")])).unwrap_err();
        assert!(matches!(err, RewriteError::Config(_)));
    }

    #[test]
    fn test_empty_map_is_noop() {
        let replacer = ClassReplacer::new(&ClassMap::new()).unwrap();
        assert!(replacer.is_empty());
        let out = replacer.replace(r#"<div class="a">"#);
        assert_eq!(out.count, 0);
    }
}
