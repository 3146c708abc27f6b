//! Streaming parser and HTML emitter for the post dialect.
//!
//! Three layers, leaves first: [`line`] classifies one source line,
//! [`inline`] renders a text run (marks, code spans, notes), and [`block`]
//! drives both as a single-pass state machine over a whole body, writing
//! HTML to a byte sink as it goes.

pub mod block;
pub mod inline;
pub mod line;

pub use block::{render_to_string, BodyRenderer};
pub use inline::{render_inline, NoteCounter};
pub use line::LineKind;
