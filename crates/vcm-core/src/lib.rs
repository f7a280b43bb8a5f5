//! Core types, class tables, and configuration for the vue-class-migrate tool.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`ClassMap`] - ordered `(old, new)` class-name pairs
//! - [`PageKind`] - the known Vue pages and the table each one uses
//! - [`RewriteConfig`] - style-block settings for the rewrite pass
//! - [`ConfigError`] - configuration validation failures
//!
//! # Examples
//!
//! ```
//! use vcm_core::PageKind;
//!
//! let page = PageKind::detect("app/pages/editor.vue");
//! assert_eq!(page, Some(PageKind::Editor));
//!
//! let map = PageKind::Editor.class_map();
//! assert_eq!(map.get("editor-page"), Some("p-editor"));
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod tables;
pub mod types;

pub use config::{RewriteConfig, StyleBlockConfig};
pub use error::ConfigError;
pub use types::{ClassMap, ClassRename, PageKind};
