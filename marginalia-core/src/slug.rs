//! Slug generation from post titles.

/// Longest slug we will derive from a title.
const SLUG_MAX: usize = 128;

/// Convert a title to a URL-safe slug
///
/// Rules:
/// - Lowercase ASCII alphanumerics are kept
/// - Every maximal run of other characters collapses to a single hyphen
/// - Leading and trailing hyphens are stripped
/// - Output is clamped to 128 bytes
///
/// # Examples
///
/// ```
/// use marginalia_core::slugify;
///
/// assert_eq!(slugify("Hello World"), "hello-world");
/// assert_eq!(slugify("Rust & Safety"), "rust-safety");
/// assert_eq!(slugify("  -- What's new? --  "), "what-s-new");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len().min(SLUG_MAX));
    // Starts true so leading separators never emit a hyphen.
    let mut prev_was_dash = true;

    for c in input.chars() {
        if slug.len() >= SLUG_MAX {
            break;
        }
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_was_dash = false;
        } else if !prev_was_dash {
            slug.push('-');
            prev_was_dash = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}
