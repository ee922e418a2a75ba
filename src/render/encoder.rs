//! Per-line encoding: escaping, color runs and line framing.

use crate::color::Color;
use crate::formats::{FormatDescriptor, escape_into, next_unit};

/// Encode one line of glyph art for `descriptor`.
///
/// Character `i` of the line takes `colors[(cursor + i) % colors.len()]`,
/// where a character is one Unicode scalar value: a combining mark is colored
/// on its own, apart from its base character. The line is escaped in a single
/// pass; a multi-character escape match is emitted as one unit in the color
/// of its first source character. Adjacent units sharing a color are wrapped
/// as one run.
///
/// Returns the framed line and the cursor for the next line, which has moved
/// by one per source character (not per escaped byte), wrapping at
/// `usize::MAX`.
///
/// A line that already carries the format's line framing is returned as is
/// and leaves the cursor where it was.
pub fn encode_line(
    line: &str,
    descriptor: &FormatDescriptor,
    colors: &[Color],
    cursor: usize,
) -> (String, usize) {
    if descriptor.is_framed(line) {
        return (line.to_string(), cursor);
    }

    let mut out = String::with_capacity(
        descriptor.line_open.len() + line.len() * 2 + descriptor.line_close.len(),
    );
    out.push_str(&descriptor.line_open);

    let next = if colors.is_empty() {
        escape_into(&mut out, line, &descriptor.escapes);
        cursor
    } else {
        let start = cursor % colors.len();
        let mut advanced = 0;
        let mut run = String::new();
        let mut run_color: Option<Color> = None;
        let mut rest = line;

        while let Some((source, emit)) = next_unit(rest, &descriptor.escapes) {
            let color = colors[(start + advanced) % colors.len()];
            if let Some(current) = run_color.filter(|c| *c != color) {
                descriptor.color_style.wrap_into(&mut out, current, &run);
                run.clear();
            }
            run_color = Some(color);
            run.push_str(emit);
            advanced += source.chars().count();
            rest = &rest[source.len()..];
        }
        if let Some(current) = run_color {
            descriptor.color_style.wrap_into(&mut out, current, &run);
        }
        cursor.wrapping_add(advanced)
    };

    out.push_str(&descriptor.line_close);
    (out, next)
}
