//! Known pages and the class table each one uses.

use crate::{ClassMap, tables};

/// A Vue page with a dedicated class-name table.
///
/// # Examples
///
/// ```
/// use vcm_core::PageKind;
///
/// assert_eq!(PageKind::detect("app/pages/admin.vue"), Some(PageKind::Admin));
/// assert_eq!(PageKind::detect("app/pages/index.vue"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PageKind {
    /// `editor.vue`, migrated to the `p-editor` block.
    Editor,

    /// `admin.vue`, migrated to the `p-admin` block.
    Admin,

    /// `queue-status.vue`, migrated to the `p-queue-status` block.
    QueueStatus,
}

impl PageKind {
    /// All pages, in detection precedence order.
    pub const ALL: [Self; 3] = [Self::Editor, Self::Admin, Self::QueueStatus];

    /// Selects the page whose identifier occurs in `path`.
    ///
    /// Matching is a case-sensitive substring test against the whole path,
    /// checked in [`ALL`](Self::ALL) order.
    #[must_use]
    pub fn detect(path: impl AsRef<str>) -> Option<Self> {
        let path = path.as_ref();
        Self::ALL
            .into_iter()
            .find(|page| path.contains(page.identifier()))
    }

    /// The filename fragment that identifies this page.
    #[inline]
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Editor => "editor.vue",
            Self::Admin => "admin.vue",
            Self::QueueStatus => "queue-status.vue",
        }
    }

    /// The BEM block every migrated class name starts with.
    #[inline]
    #[must_use]
    pub const fn block(self) -> &'static str {
        match self {
            Self::Editor => "p-editor",
            Self::Admin => "p-admin",
            Self::QueueStatus => "p-queue-status",
        }
    }

    /// Human-readable label, used in log output.
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Editor => "Editor",
            Self::Admin => "Admin",
            Self::QueueStatus => "Queue Status",
        }
    }

    /// The static rename table for this page.
    #[inline]
    #[must_use]
    pub const fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Editor => tables::EDITOR,
            Self::Admin => tables::ADMIN,
            Self::QueueStatus => tables::QUEUE_STATUS,
        }
    }

    /// Builds the [`ClassMap`] for this page.
    #[must_use]
    pub fn class_map(self) -> ClassMap {
        ClassMap::from_static(self.table())
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
