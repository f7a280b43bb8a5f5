//! Domain types for the vue-class-migrate tool.
//!
//! - [`class_map`] - ordered class-name rename tables
//! - [`page`] - known pages and their identifiers
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use vcm_core::{ClassMap, PageKind};
//! use vcm_core::types::ClassRename;
//! ```

mod class_map;
mod page;

pub use class_map::{ClassMap, ClassRename};
pub use page::PageKind;
