//! Line classification for the block parser.

/// Block-level kind of a single source line (without its newline).
///
/// Recognition runs in priority order: blank, fence, heading, unordered
/// item, ordered item, and finally plain text. Every line lands in exactly
/// one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty, or only ASCII spaces and tabs
    Blank,
    /// Starts with three backticks
    Fence,
    /// 1..6 `#` followed by one space
    Heading { level: usize },
    /// `- ` item
    Bullet,
    /// One or more ASCII digits, `.`, space
    Numbered { width: usize },
    /// Anything else
    Text,
}

impl LineKind {
    pub fn classify(line: &str) -> LineKind {
        let bytes = line.as_bytes();

        if bytes.iter().all(|&b| b == b' ' || b == b'\t') {
            return LineKind::Blank;
        }

        if bytes.len() >= 3 && &bytes[..3] == b"```" {
            return LineKind::Fence;
        }

        let hashes = bytes.iter().take_while(|&&b| b == b'#').count();
        if (1..=6).contains(&hashes) && bytes.get(hashes) == Some(&b' ') {
            return LineKind::Heading { level: hashes };
        }

        if bytes.len() >= 2 && bytes[0] == b'-' && bytes[1] == b' ' {
            return LineKind::Bullet;
        }

        let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits >= 1
            && bytes.get(digits) == Some(&b'.')
            && bytes.get(digits + 1) == Some(&b' ')
        {
            return LineKind::Numbered { width: digits };
        }

        LineKind::Text
    }

    /// Byte offset where the line's content starts.
    pub fn content_start(self) -> usize {
        match self {
            LineKind::Heading { level } => level + 1,
            LineKind::Bullet => 2,
            LineKind::Numbered { width } => width + 2,
            LineKind::Blank | LineKind::Fence | LineKind::Text => 0,
        }
    }
}
