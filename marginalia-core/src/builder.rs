//! Content import - discovers post files and builds the page model.

use crate::{
    config::Config,
    frontmatter::parse_front_matter,
    models::{Page, Section},
    slug::slugify,
};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no pages found in {0:?}")]
    EmptySection(PathBuf),

    #[error("no content sections found in {0:?}")]
    NoSections(PathBuf),
}

/// Imports the content tree into sections of parsed pages.
pub struct SiteBuilder {
    config: Config,
}

impl SiteBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Scan `content/<section>/*.txt` and parse every post.
    ///
    /// Sections and pages come back in filename order; an empty section or
    /// an empty content tree is an error.
    pub fn build(&self) -> Result<Vec<Section>, BuildError> {
        let content_dir = self.config.content_dir();

        let mut dirs: Vec<PathBuf> = fs::read_dir(&content_dir)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
            .map(|entry| entry.path())
            .collect();
        dirs.sort();

        let mut sections = Vec::new();
        for dir in dirs {
            let name = dir
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let pages = self.import_pages(&dir)?;
            if pages.is_empty() {
                return Err(BuildError::EmptySection(dir));
            }
            tracing::info!("Scanned {:?}: found {} pages", dir, pages.len());
            sections.push(Section { name, pages });
        }

        if sections.is_empty() {
            return Err(BuildError::NoSections(content_dir));
        }

        Ok(sections)
    }

    fn import_pages(&self, dir: &Path) -> Result<Vec<Page>, BuildError> {
        let mut pages = Vec::new();

        for entry in WalkDir::new(dir)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            if entry.path().extension().map(|ext| ext == "txt") != Some(true) {
                continue;
            }

            tracing::debug!("Importing page: {:?}", entry.path());
            pages.push(parse_page(entry.path())?);
        }

        Ok(pages)
    }
}

/// Parse a single post file into a [`Page`].
fn parse_page(path: &Path) -> Result<Page, BuildError> {
    let source = fs::read_to_string(path)?;
    let (fm, body) = parse_front_matter(&source);

    // Fall back to the filename when the front matter has no title.
    let title = fm
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("untitled")
                .to_string()
        });

    let slug = slugify(&title);

    Ok(Page {
        title,
        slug,
        date: fm.date,
        body: body.to_string(),
    })
}
