use banner_render::color::{Color, ColorStyle, NamedColor};
use banner_render::formats::FormatDescriptor;
use banner_render::render::encode_line;

const RED: Color = Color::Named(NamedColor::Red);
const GREEN: Color = Color::Named(NamedColor::Green);

const SVG_OPEN: &str = r#"<tspan x="10" dy="1em">"#;

#[test]
fn test_uncolored_line_is_escaped_and_framed() {
    let (out, cursor) = encode_line("A B", &FormatDescriptor::svg(), &[], 0);
    assert_eq!(out, format!("{SVG_OPEN}A&#160;B</tspan>"));
    assert_eq!(cursor, 0);
}

#[test]
fn test_terminal_leaves_spaces() {
    let (out, _) = encode_line(" | | ", &FormatDescriptor::terminal(), &[], 0);
    assert_eq!(out, " | | ");
}

#[test]
fn test_html_runs_alternate() {
    let (out, cursor) = encode_line("AB", &FormatDescriptor::html(), &[RED, GREEN], 0);
    assert_eq!(
        out,
        concat!(
            r#"<span style="color:rgb(255,65,54)">A</span>"#,
            r#"<span style="color:rgb(149,189,64)">B</span>"#,
            "<br>"
        )
    );
    assert_eq!(cursor, 2);
}

#[test]
fn test_single_color_is_one_run() {
    let (out, cursor) = encode_line("A B", &FormatDescriptor::html(), &[RED], 0);
    assert_eq!(
        out,
        r#"<span style="color:rgb(255,65,54)">A&nbsp;B</span><br>"#
    );
    assert_eq!(cursor, 3);
}

#[test]
fn test_cursor_counts_source_chars_not_escaped_bytes() {
    // the escaped space must not shift the cycle for the next line
    let d = FormatDescriptor::svg();
    let (_, cursor) = encode_line("  ", &d, &[RED, GREEN], 0);
    assert_eq!(cursor, 2);
    let (_, cursor) = encode_line("█ █", &d, &[RED, GREEN], cursor);
    assert_eq!(cursor, 5);
}

#[test]
fn test_cursor_offsets_first_color() {
    let (out, _) = encode_line("X", &FormatDescriptor::svg(), &[RED, GREEN], 3);
    assert_eq!(
        out,
        format!(r#"{SVG_OPEN}<tspan fill="rgb(149,189,64)">X</tspan></tspan>"#)
    );
}

#[test]
fn test_terminal_ansi_runs() {
    let (out, _) = encode_line(
        "ab",
        &FormatDescriptor::terminal(),
        &[RED, Color::rgb(1, 2, 3)],
        0,
    );
    assert_eq!(out, "\x1b[31ma\x1b[0m\x1b[38;2;1;2;3mb\x1b[0m");
}

#[test]
fn test_plain_ignores_colors_but_advances() {
    let (out, cursor) = encode_line("abc", &FormatDescriptor::plain(), &[RED, GREEN], 0);
    assert_eq!(out, "abc");
    assert_eq!(cursor, 3);
}

#[test]
fn test_empty_line_still_framed() {
    let d = FormatDescriptor::svg();
    let (out, cursor) = encode_line("", &d, &[], 0);
    assert_eq!(out, format!("{SVG_OPEN}</tspan>"));
    assert_eq!(cursor, 0);

    let (out, cursor) = encode_line("", &d, &[RED], 4);
    assert_eq!(out, format!("{SVG_OPEN}</tspan>"));
    assert_eq!(cursor, 4);

    let (out, _) = encode_line("", &FormatDescriptor::html(), &[], 0);
    assert_eq!(out, "<br>");
}

#[test]
fn test_framed_line_left_untouched() {
    let framed = format!("{SVG_OPEN}A B</tspan>");
    let (out, cursor) = encode_line(&framed, &FormatDescriptor::svg(), &[RED], 7);
    assert_eq!(out, framed);
    assert_eq!(cursor, 7);
}

#[test]
fn test_cursor_at_usize_max_wraps() {
    // usize::MAX is odd, so the first character lands on the second color
    let (out, cursor) = encode_line("ab", &FormatDescriptor::svg(), &[RED, GREEN], usize::MAX);
    assert_eq!(
        out,
        format!(
            r#"{SVG_OPEN}<tspan fill="rgb(149,189,64)">a</tspan><tspan fill="rgb(255,65,54)">b</tspan></tspan>"#
        )
    );
    assert_eq!(cursor, 1);
}

#[test]
fn test_multi_char_escape_spans_color_boundary() {
    let d = FormatDescriptor::new("digraph")
        .with_escape("ab", "X")
        .with_color_style(ColorStyle::SvgTspan);
    let blue = Color::Named(NamedColor::Blue);

    let (plain, _) = encode_line("abc", &d, &[], 0);
    assert_eq!(plain, "Xc");

    let (out, cursor) = encode_line("abc", &d, &[RED, GREEN, blue], 0);
    assert_eq!(
        out,
        r#"<tspan fill="rgb(255,65,54)">X</tspan><tspan fill="rgb(0,116,217)">c</tspan>"#
    );
    assert_eq!(cursor, 3);

    let (out, _) = encode_line("ab", &d, &[RED, GREEN], 0);
    assert_eq!(out, r#"<tspan fill="rgb(255,65,54)">X</tspan>"#);
}

#[test]
fn test_combining_mark_is_its_own_character() {
    let (out, cursor) = encode_line("e\u{301}", &FormatDescriptor::svg(), &[RED, GREEN], 0);
    assert_eq!(
        out,
        format!(
            "{SVG_OPEN}<tspan fill=\"rgb(255,65,54)\">e</tspan><tspan fill=\"rgb(149,189,64)\">\u{301}</tspan></tspan>"
        )
    );
    assert_eq!(cursor, 2);
}
