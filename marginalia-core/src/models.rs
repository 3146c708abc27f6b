//! Content model structs for pages and content sections.

/// A single post, ready for rendering.
#[derive(Debug, Clone)]
pub struct Page {
    /// Display title
    pub title: String,

    /// URL slug derived from the title (e.g., "rust-safety")
    pub slug: String,

    /// Raw ISO `YYYY-MM-DD` date from the front matter, if any
    pub date: Option<String>,

    /// Post body with the front matter stripped
    pub body: String,
}

impl Page {
    /// Relative output path for this page within its section
    pub fn output_rel_path(&self) -> String {
        format!("{}.html", self.slug)
    }
}

/// One subdirectory of the content tree and the pages found in it.
#[derive(Debug, Clone)]
pub struct Section {
    /// Directory name, e.g. "posts"
    pub name: String,

    /// Pages in filename order
    pub pages: Vec<Page>,
}

/// Sort pages newest-first by raw ISO date.
///
/// The format is fixed-width, so a lexicographic comparison orders dates
/// correctly; undated pages sink to the end.
pub fn sort_pages_by_date_desc(pages: &mut [Page]) {
    pages.sort_by(|a, b| b.date.cmp(&a.date));
}
