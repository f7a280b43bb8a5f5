//! Ordered class-name rename tables.
//!
//! This module provides [`ClassMap`], the lookup table that drives the
//! class-name replacer, and [`ClassRename`], a single entry in it.

use std::borrow::Cow;

use crate::ConfigError;

/// A single `old -> new` class-name rename.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassRename {
    /// The class name to look for.
    pub from: Cow<'static, str>,

    /// The class name written in its place.
    pub to: Cow<'static, str>,
}

impl ClassRename {
    /// Creates a new rename.
    pub fn new(from: impl Into<Cow<'static, str>>, to: impl Into<Cow<'static, str>>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Length of the old name in characters, used for match ordering.
    #[inline]
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.from.chars().count()
    }
}

/// An ordered collection of class-name renames.
///
/// Keys are unique: inserting an existing key replaces its target in place.
/// Iteration follows insertion order; use [`ordered`](Self::ordered) for the
/// longest-key-first order the replacer needs.
///
/// # Examples
///
/// ```
/// use vcm_core::ClassMap;
///
/// let map: ClassMap = [("canvas", "p-editor__canvas"), ("canvas-text", "p-editor__canvas-text")]
///     .into_iter()
///     .collect();
///
/// let keys: Vec<_> = map.ordered().iter().map(|r| r.from.as_ref()).collect();
/// assert_eq!(keys, ["canvas-text", "canvas"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassMap {
    entries: Vec<ClassRename>,
}

impl ClassMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from a static table without copying the strings.
    #[must_use]
    pub fn from_static(table: &'static [(&'static str, &'static str)]) -> Self {
        table.iter().copied().collect()
    }

    /// Inserts a rename, returning the previous target if the key existed.
    pub fn insert(
        &mut self,
        from: impl Into<Cow<'static, str>>,
        to: impl Into<Cow<'static, str>>,
    ) -> Option<Cow<'static, str>> {
        let rename = ClassRename::new(from, to);
        if let Some(existing) = self.entries.iter_mut().find(|e| e.from == rename.from) {
            return Some(std::mem::replace(&mut existing.to, rename.to));
        }
        self.entries.push(rename);
        None
    }

    /// Returns the new name for `from`, if mapped.
    #[must_use]
    pub fn get(&self, from: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.from == from)
            .map(|e| e.to.as_ref())
    }

    /// Number of renames in the map.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no renames.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates renames in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ClassRename> {
        self.entries.iter()
    }

    /// Returns the renames sorted by key length, longest first.
    ///
    /// The sort is stable, so keys of equal length keep insertion order.
    #[must_use]
    pub fn ordered(&self) -> Vec<&ClassRename> {
        let mut ordered: Vec<_> = self.entries.iter().collect();
        ordered.sort_by_key(|e| std::cmp::Reverse(e.key_len()));
        ordered
    }

    /// Checks that every name can appear inside a `class="..."` attribute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for entry in &self.entries {
            if entry.from.is_empty() || entry.to.is_empty() {
                return Err(ConfigError::EmptyClassName {
                    from: entry.from.clone().into_owned(),
                    to: entry.to.clone().into_owned(),
                });
            }
            for name in [&entry.from, &entry.to] {
                if name.chars().any(char::is_whitespace) {
                    return Err(ConfigError::InvalidClassName {
                        name: name.clone().into_owned(),
                        reason: "contains whitespace".to_owned(),
                    });
                }
                if name.contains('"') {
                    return Err(ConfigError::InvalidClassName {
                        name: name.clone().into_owned(),
                        reason: "contains a double quote".to_owned(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl<F, T> FromIterator<(F, T)> for ClassMap
where
    F: Into<Cow<'static, str>>,
    T: Into<Cow<'static, str>>,
{
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (from, to) in iter {
            map.insert(from, to);
        }
        map
    }
}

impl<'a> IntoIterator for &'a ClassMap {
    type Item = &'a ClassRename;
    type IntoIter = std::slice::Iter<'a, ClassRename>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
