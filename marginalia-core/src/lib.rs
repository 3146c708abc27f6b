//! # marginalia-core
//!
//! Core library for the marginalia journal compiler.
//!
//! This crate provides the fundamental building blocks for turning
//! lightly-marked-up plain-text posts into HTML: the line classifier,
//! the inline renderer, the block-level parser, plus slug generation,
//! date formatting, front-matter extraction, and site configuration.

pub mod builder;
pub mod config;
pub mod date;
pub mod frontmatter;
pub mod markup;
pub mod models;
pub mod slug;

pub use builder::SiteBuilder;
pub use config::Config;
pub use models::{Page, Section};
pub use slug::slugify;
