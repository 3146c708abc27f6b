//! Build command implementation.

use super::STATIC_ASSETS;
use anyhow::{Context, Result};
use askama::Template;
use marginalia_core::{markup, models, Config, Section, SiteBuilder};
use marginalia_render::{ArchiveTemplate, PageTemplate};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// The section that also feeds the archive index at the site root.
const ARCHIVE_SECTION: &str = "posts";

/// Build the static site
pub fn build_site(config_path: &Path) -> Result<()> {
    let started = Instant::now();

    let config = Config::load_or_default(config_path).context("Failed to load configuration")?;

    let output_dir = config.output_dir();
    fs::create_dir_all(&output_dir).context("Failed to create output directory")?;

    install_favicon(&config)?;
    let stylesheet = load_stylesheet(&config)?;

    let builder = SiteBuilder::new(config.clone());
    let sections = builder.build().context("Failed to import content")?;

    let mut page_count = 0;
    for section in &sections {
        let section_dir = output_dir.join(&section.name);
        fs::create_dir_all(&section_dir)
            .with_context(|| format!("Failed to create {:?}", section_dir))?;

        for page in &section.pages {
            let body_html = markup::render_to_string(&page.body);
            let html = PageTemplate::for_page(page, &body_html, &stylesheet)
                .render()
                .context("Failed to render page template")?;

            let out_path = section_dir.join(page.output_rel_path());
            fs::write(&out_path, html)
                .with_context(|| format!("Failed to write {:?}", out_path))?;

            tracing::debug!("Rendered: {}", page.slug);
            page_count += 1;
        }

        if section.name == ARCHIVE_SECTION {
            build_archive(&config, section, &stylesheet)?;
        }
    }

    tracing::info!("✓ Built {} pages", page_count);
    tracing::info!("✓ Output written to {:?}", output_dir);
    tracing::info!(
        "Site built in {:.3} ms",
        started.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}

/// Render the archive index for the posts section, newest first.
fn build_archive(config: &Config, section: &Section, stylesheet: &str) -> Result<()> {
    let mut pages = section.pages.clone();
    models::sort_pages_by_date_desc(&mut pages);

    let html = ArchiveTemplate::for_pages(&config.site.title, stylesheet, &section.name, &pages)
        .render()
        .context("Failed to render archive template")?;

    let index_path = config.output_dir().join("index.html");
    fs::write(&index_path, html).with_context(|| format!("Failed to write {:?}", index_path))?;

    tracing::info!("Rendered archive with {} entries", section.pages.len());
    Ok(())
}

fn install_favicon(config: &Config) -> Result<()> {
    let src = config.assets_dir().join("favicon.svg");
    let dst = config.output_dir().join("favicon.svg");
    fs::copy(&src, &dst).with_context(|| format!("Failed to copy favicon from {:?}", src))?;
    Ok(())
}

/// The stylesheet override from the config, or the embedded default.
fn load_stylesheet(config: &Config) -> Result<String> {
    match config.stylesheet_path() {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read stylesheet {:?}", path))
        }
        None => {
            let css = STATIC_ASSETS
                .get_file("styles.css")
                .and_then(|f| f.contents_utf8())
                .context("Embedded stylesheet missing")?;
            Ok(css.to_string())
        }
    }
}
