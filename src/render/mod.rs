//! Banner rendering: per-line encoding and whole-output assembly.

pub mod encoder;
pub mod pipeline;

pub use encoder::encode_line;
pub use pipeline::{render, render_named, render_text, render_with_config};

/// Turns input text into composed block-letter art.
///
/// Implementations return equal-height rows, top to bottom, with spaces as
/// background. Font loading and glyph layout live behind this trait.
pub trait GlyphRenderer {
    fn render_lines(&self, text: &str) -> Vec<String>;
}

impl<F> GlyphRenderer for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn render_lines(&self, text: &str) -> Vec<String> {
        self(text)
    }
}
