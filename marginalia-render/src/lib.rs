//! # marginalia-render
//!
//! Askama document shells for the marginalia journal compiler: the fixed
//! page envelope and the archive index table.

pub mod templates;

pub use templates::{ArchiveRow, ArchiveTemplate, PageTemplate};
