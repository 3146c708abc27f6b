//! Front-matter extraction from plain-text posts.
//!
//! Posts open with a run of `key: value` lines terminated by a line that is
//! exactly `---`; everything after that line is the body. Only `title:` and
//! `date:` are recognized, other lines are skipped. A post without the
//! terminator is all front matter and has an empty body.

/// Metadata recognized at the top of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
}

/// Split a post source into its front matter and body.
///
/// The body is returned as a borrowed slice of the input, so no text is
/// copied. Values have leading spaces trimmed; trailing whitespace is kept
/// as written.
pub fn parse_front_matter(source: &str) -> (FrontMatter, &str) {
    let mut fm = FrontMatter::default();
    let mut rest = source;

    while !rest.is_empty() {
        let (line, tail) = match rest.split_once('\n') {
            Some((line, tail)) => (line, tail),
            None => (rest, ""),
        };

        if line == "---" {
            return (fm, tail);
        }

        if let Some(value) = line.strip_prefix("title:") {
            fm.title = Some(value.trim_start_matches(' ').to_string());
        } else if let Some(value) = line.strip_prefix("date:") {
            fm.date = Some(value.trim_start_matches(' ').to_string());
        }

        rest = tail;
    }

    (fm, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_date() {
        let source = "title: First Post\ndate: 2024-01-03\n---\nbody text\n";
        let (fm, body) = parse_front_matter(source);
        assert_eq!(fm.title.as_deref(), Some("First Post"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-03"));
        assert_eq!(body, "body text\n");
    }

    #[test]
    fn test_leading_spaces_trimmed() {
        let (fm, _) = parse_front_matter("title:    Spaced Out\n---\n");
        assert_eq!(fm.title.as_deref(), Some("Spaced Out"));
    }

    #[test]
    fn test_unknown_keys_skipped() {
        let source = "title: T\nauthor: someone\n---\nbody";
        let (fm, body) = parse_front_matter(source);
        assert_eq!(fm.title.as_deref(), Some("T"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_missing_terminator_means_empty_body() {
        let (fm, body) = parse_front_matter("title: Lost\ndate: 2024-05-01");
        assert_eq!(fm.title.as_deref(), Some("Lost"));
        assert_eq!(body, "");
    }

    #[test]
    fn test_terminator_must_be_exact() {
        // A line with trailing content is not the terminator.
        let (fm, body) = parse_front_matter("title: T\n--- \n---\nbody");
        assert_eq!(fm.title.as_deref(), Some("T"));
        assert_eq!(body, "body");
    }

    #[test]
    fn test_empty_source() {
        let (fm, body) = parse_front_matter("");
        assert_eq!(fm, FrontMatter::default());
        assert_eq!(body, "");
    }

    #[test]
    fn test_terminator_first_line() {
        let (fm, body) = parse_front_matter("---\nonly body");
        assert_eq!(fm.title, None);
        assert_eq!(body, "only body");
    }
}
