//! Block-level parsing: the single-pass state machine over a post body.

use std::io::{self, Write};

use super::inline::{render_inline, NoteCounter};
use super::line::LineKind;

/// Scratch buffer cap for paragraph and code-block collection. Content
/// beyond this is dropped silently.
const SCRATCH_CAP: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    None,
    Code,
    Bullet,
    Numbered,
}

/// Streaming renderer for one post body.
///
/// Holds the per-page parse state: section/paragraph flags, the open block,
/// the collection scratch, and the note id counter. State never outlives
/// the page; build one renderer per body.
#[derive(Debug)]
pub struct BodyRenderer {
    in_section: bool,
    in_paragraph: bool,
    block: Block,
    scratch: String,
    notes: NoteCounter,
}

impl BodyRenderer {
    pub fn new() -> Self {
        Self {
            in_section: false,
            in_paragraph: false,
            block: Block::None,
            scratch: String::new(),
            notes: NoteCounter::new(),
        }
    }

    /// Render `body` as block-level HTML into `out`.
    ///
    /// Writer errors abort the page and propagate. On success every tag
    /// opened along the way has been closed.
    pub fn render<W: Write>(mut self, body: &str, out: &mut W) -> io::Result<()> {
        for line in body.split('\n') {
            self.line(line, out)?;
        }
        self.finish(out)
    }

    fn line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        // Inside a fence every line is verbatim until the closing fence.
        if self.block == Block::Code {
            if LineKind::classify(line) == LineKind::Fence {
                return self.flush_code(out);
            }
            push_clamped(&mut self.scratch, line);
            push_clamped(&mut self.scratch, "\n");
            return Ok(());
        }

        let kind = LineKind::classify(line);
        let content = &line[kind.content_start()..];

        match kind {
            LineKind::Blank => {
                self.close_paragraph(out)?;
                self.close_list(out)?;
            }
            LineKind::Fence => {
                self.close_paragraph(out)?;
                self.close_list(out)?;
                self.block = Block::Code;
                self.scratch.clear();
            }
            LineKind::Heading { level } => {
                self.close_paragraph(out)?;
                self.close_list(out)?;
                if level == 2 {
                    self.close_section(out)?;
                    out.write_all(b"<section>\n")?;
                    self.in_section = true;
                }
                write!(out, "<h{level}>")?;
                render_inline(out, content, &mut self.notes)?;
                writeln!(out, "</h{level}>")?;
            }
            LineKind::Bullet => {
                self.close_paragraph(out)?;
                if self.block != Block::Bullet {
                    self.close_list(out)?;
                    out.write_all(b"<ul>\n")?;
                    self.block = Block::Bullet;
                }
                out.write_all(b"<li>")?;
                render_inline(out, content, &mut self.notes)?;
                out.write_all(b"</li>\n")?;
            }
            LineKind::Numbered { .. } => {
                self.close_paragraph(out)?;
                if self.block != Block::Numbered {
                    self.close_list(out)?;
                    out.write_all(b"<ol>\n")?;
                    self.block = Block::Numbered;
                }
                out.write_all(b"<li>")?;
                render_inline(out, content, &mut self.notes)?;
                out.write_all(b"</li>\n")?;
            }
            LineKind::Text => {
                self.close_list(out)?;
                if self.in_paragraph {
                    push_clamped(&mut self.scratch, " ");
                } else {
                    self.in_paragraph = true;
                }
                push_clamped(&mut self.scratch, content);
            }
        }

        Ok(())
    }

    /// Close whatever is still open, in the order list, paragraph, section.
    fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.block == Block::Code {
            self.flush_code(out)?;
        }
        self.close_list(out)?;
        self.close_paragraph(out)?;
        self.close_section(out)
    }

    fn close_paragraph<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if !self.in_paragraph {
            return Ok(());
        }
        out.write_all(b"<p>")?;
        render_inline(out, &self.scratch, &mut self.notes)?;
        out.write_all(b"</p>\n")?;
        self.scratch.clear();
        self.in_paragraph = false;
        Ok(())
    }

    fn close_list<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        match self.block {
            Block::Bullet => out.write_all(b"</ul>\n")?,
            Block::Numbered => out.write_all(b"</ol>\n")?,
            Block::None | Block::Code => return Ok(()),
        }
        self.block = Block::None;
        Ok(())
    }

    fn close_section<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if self.in_section {
            out.write_all(b"</section>\n")?;
            self.in_section = false;
        }
        Ok(())
    }

    fn flush_code<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        out.write_all(b"<pre><code>")?;
        let text = self.scratch.strip_suffix('\n').unwrap_or(&self.scratch);
        escape_code(out, text)?;
        out.write_all(b"</code></pre>\n")?;
        self.scratch.clear();
        self.block = Block::None;
        Ok(())
    }
}

impl Default for BodyRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a body straight to a string.
pub fn render_to_string(body: &str) -> String {
    let mut buf = Vec::with_capacity(body.len() * 2);
    // Writes to a Vec cannot fail.
    let _ = BodyRenderer::new().render(body, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Append as much of `text` as fits under the scratch cap, never splitting
/// a UTF-8 sequence.
fn push_clamped(scratch: &mut String, text: &str) {
    let available = SCRATCH_CAP.saturating_sub(scratch.len());
    if text.len() <= available {
        scratch.push_str(text);
        return;
    }
    let mut end = available;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    scratch.push_str(&text[..end]);
}

/// Entity-escape fenced code content: `<`, `>`, and `&` only.
fn escape_code<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    let bytes = text.as_bytes();
    let mut lit = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let entity: &[u8] = match b {
            b'<' => b"&lt;",
            b'>' => b"&gt;",
            b'&' => b"&amp;",
            _ => continue,
        };
        out.write_all(&bytes[lit..i])?;
        out.write_all(entity)?;
        lit = i + 1;
    }
    out.write_all(&bytes[lit..])
}
