//! Askama template definitions.

use askama::Template;
use marginalia_core::date::{format_date, DateStyle};
use marginalia_core::models::Page;

/// Post page template: the fixed head/body/article shell around a rendered
/// body. The stylesheet is inlined verbatim; the body HTML is injected
/// as-is.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate<'a> {
    pub title: &'a str,
    pub has_date: bool,
    pub date: String,
    pub content: &'a str,
    pub stylesheet: &'a str,
}

impl<'a> PageTemplate<'a> {
    /// Assemble the shell for one page.
    ///
    /// A missing date suppresses the dateline; an invalid one additionally
    /// logs a warning, and the page is emitted without it.
    pub fn for_page(page: &'a Page, content: &'a str, stylesheet: &'a str) -> Self {
        let date = page.date.as_deref().map(format_dateline).unwrap_or_default();
        Self {
            title: &page.title,
            has_date: !date.is_empty(),
            date,
            content,
            stylesheet,
        }
    }
}

/// One row of the archive table.
pub struct ArchiveRow {
    pub date: String,
    pub href: String,
    pub title: String,
}

/// Archive index template: the same head shell around a table of dated,
/// linked titles in caller order.
#[derive(Template)]
#[template(path = "archive.html")]
pub struct ArchiveTemplate<'a> {
    pub title: &'a str,
    pub stylesheet: &'a str,
    pub rows: Vec<ArchiveRow>,
}

impl<'a> ArchiveTemplate<'a> {
    pub fn for_pages(
        title: &'a str,
        stylesheet: &'a str,
        section: &str,
        pages: &[Page],
    ) -> Self {
        let rows = pages
            .iter()
            .map(|page| ArchiveRow {
                date: page.date.as_deref().map(format_dateline).unwrap_or_default(),
                href: format!("{}/{}", section, page.output_rel_path()),
                title: page.title.clone(),
            })
            .collect();

        Self {
            title,
            stylesheet,
            rows,
        }
    }
}

fn format_dateline(raw: &str) -> String {
    match format_date(raw, DateStyle::Abbr) {
        Ok(formatted) => formatted,
        Err(err) => {
            tracing::warn!("Invalid date format: {}", err);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str, date: Option<&str>) -> Page {
        Page {
            title: title.to_string(),
            slug: marginalia_core::slugify(title),
            date: date.map(String::from),
            body: String::new(),
        }
    }

    #[test]
    fn test_page_shell_with_date() {
        let p = page("Hello", Some("2024-01-03"));
        let html = PageTemplate::for_page(&p, "", "body { margin: 0; }")
            .render()
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(html.contains("<meta charset=\"utf-8\">"));
        assert!(html.contains("<link rel=\"icon\" type=\"image/svg+xml\" href=\"/favicon.svg\" />"));
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains("<style>body { margin: 0; }</style>"));
        assert!(html.contains("<h1>Hello</h1>"));
        // Two spaces before the 3: the day is padded to two columns.
        assert!(html.contains("<p class=\"subtitle\">Jan  3, 2024</p>"));
        assert!(!html.contains("<section>"));
    }

    #[test]
    fn test_page_shell_without_date() {
        let p = page("Quiet", None);
        let html = PageTemplate::for_page(&p, "<p>hi</p>\n", "").render().unwrap();
        assert!(!html.contains("subtitle"));
        assert!(html.contains("<p>hi</p>"));
    }

    #[test]
    fn test_invalid_date_suppresses_dateline() {
        let p = page("Odd", Some("not-a-date"));
        let html = PageTemplate::for_page(&p, "", "").render().unwrap();
        assert!(!html.contains("subtitle"));
    }

    #[test]
    fn test_body_html_not_escaped() {
        let p = page("Raw", None);
        let html = PageTemplate::for_page(&p, "<p><strong>b</strong></p>\n", "")
            .render()
            .unwrap();
        assert!(html.contains("<p><strong>b</strong></p>"));
    }

    #[test]
    fn test_archive_rows() {
        let pages = vec![
            page("Newer", Some("2024-02-01")),
            page("Older", Some("2023-11-13")),
            page("Undated", None),
        ];
        let html = ArchiveTemplate::for_pages("Blog Posts", "", "posts", &pages)
            .render()
            .unwrap();

        assert!(html.contains("<table class=\"archive\">"));
        assert!(html.contains("<td class=\"date\">Feb  1, 2024</td>"));
        assert!(html.contains("<a href=\"posts/newer.html\">Newer</a>"));
        assert!(html.contains("<a href=\"posts/older.html\">Older</a>"));
        // Undated pages get an empty date cell, not a missing row.
        assert!(html.contains("<a href=\"posts/undated.html\">Undated</a>"));

        let newer = html.find("Newer").unwrap();
        let older = html.find("Older").unwrap();
        assert!(newer < older, "rows keep caller order");
    }
}
