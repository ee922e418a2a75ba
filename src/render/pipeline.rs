//! Whole-output assembly: encode every line, join, wrap.

use log::{debug, trace};

use super::GlyphRenderer;
use super::encoder::encode_line;
use crate::color::Color;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::formats::{self, FormatDescriptor};

/// Render composed glyph-art `lines` for `descriptor`.
///
/// The color cursor starts at zero and runs across line boundaries, so a
/// multi-row banner cycles through `colors` as one character stream. With no
/// lines the result is exactly `outer_prefix + outer_suffix`.
pub fn render<S: AsRef<str>>(lines: &[S], descriptor: &FormatDescriptor, colors: &[Color]) -> String {
    debug!(
        "rendering {} line(s) as '{}' with {} color(s)",
        lines.len(),
        descriptor.name,
        colors.len()
    );

    let mut out = String::new();
    out.push_str(&descriptor.outer_prefix);

    let mut cursor = 0;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str(&descriptor.line_join);
        }
        let (encoded, next) = encode_line(line.as_ref(), descriptor, colors, cursor);
        trace!("line {i}: cursor {cursor} -> {next}");
        out.push_str(&encoded);
        cursor = next;
    }

    out.push_str(&descriptor.outer_suffix);
    out
}

/// Resolve `format` in the built-in registry and render with it.
pub fn render_named<S: AsRef<str>>(lines: &[S], format: &str, colors: &[Color]) -> Result<String> {
    let descriptor = formats::resolve(format)?;
    Ok(render(lines, &descriptor, colors))
}

/// Render using the format and colors named by `config`.
pub fn render_with_config<S: AsRef<str>>(lines: &[S], config: &RenderConfig) -> Result<String> {
    render_named(lines, &config.format, &config.colors)
}

/// Compose `text` through `glyphs`, then render the resulting art.
pub fn render_text<G: GlyphRenderer + ?Sized>(
    glyphs: &G,
    text: &str,
    descriptor: &FormatDescriptor,
    colors: &[Color],
) -> String {
    let lines = glyphs.render_lines(text);
    render(&lines, descriptor, colors)
}
