//! Output format descriptors and the registry that resolves them by name.

pub mod registry;

pub use registry::{FormatRegistry, builtin, resolve};

use crate::color::ColorStyle;

// ─── Escape ──────────────────────────────────────────────────────────────────

/// One escaping rule: occurrences of `from` are emitted as `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escape {
    pub from: String,
    pub to: String,
}

impl Escape {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Split the next emission unit off the front of `rest`.
///
/// Returns the source text consumed and the text to emit for it: the first
/// rule (in order) whose `from` is a prefix of `rest`, or else one character
/// passed through unchanged. `None` once `rest` is empty.
pub fn next_unit<'a>(rest: &'a str, rules: &'a [Escape]) -> Option<(&'a str, &'a str)> {
    let ch = rest.chars().next()?;
    let matched = rules
        .iter()
        .find(|rule| !rule.from.is_empty() && rest.starts_with(rule.from.as_str()));
    match matched {
        Some(rule) => Some((&rest[..rule.from.len()], rule.to.as_str())),
        None => {
            let source = &rest[..ch.len_utf8()];
            Some((source, source))
        }
    }
}

/// Apply `rules` to `text` in one left-to-right pass.
///
/// Replacement text is never scanned again.
pub fn escape_into(out: &mut String, text: &str, rules: &[Escape]) {
    if rules.is_empty() {
        out.push_str(text);
        return;
    }
    let mut rest = text;
    while let Some((source, emit)) = next_unit(rest, rules) {
        out.push_str(emit);
        rest = &rest[source.len()..];
    }
}

// ─── FormatDescriptor ────────────────────────────────────────────────────────

/// Literal framing, escaping and coloring contract for one output target.
///
/// Rendered output is
/// `outer_prefix + join(line_join, [line_open + line + line_close, ..]) + outer_suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub name: String,
    pub outer_prefix: String,
    pub outer_suffix: String,
    pub line_open: String,
    /// Per-line closing markup (`<br>`, `</tspan>`), emitted after every line.
    pub line_close: String,
    /// Separator between framed lines; never emitted before the first or after the last.
    pub line_join: String,
    pub escapes: Vec<Escape>,
    pub color_style: ColorStyle,
}

impl FormatDescriptor {
    /// A descriptor with no framing, no escaping and newline-joined lines.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outer_prefix: String::new(),
            outer_suffix: String::new(),
            line_open: String::new(),
            line_close: String::new(),
            line_join: "\n".to_string(),
            escapes: Vec::new(),
            color_style: ColorStyle::None,
        }
    }

    pub fn with_outer(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.outer_prefix = prefix.into();
        self.outer_suffix = suffix.into();
        self
    }

    pub fn with_line(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.line_open = open.into();
        self.line_close = close.into();
        self
    }

    pub fn with_line_join(mut self, join: impl Into<String>) -> Self {
        self.line_join = join.into();
        self
    }

    pub fn with_escape(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.escapes.push(Escape::new(from, to));
        self
    }

    pub fn with_color_style(mut self, style: ColorStyle) -> Self {
        self.color_style = style;
        self
    }

    /// Escape `text` with this descriptor's rules.
    pub fn escape(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        escape_into(&mut out, text, &self.escapes);
        out
    }

    /// Whether `line` already carries this format's line framing.
    pub fn is_framed(&self, line: &str) -> bool {
        if self.line_open.is_empty() && self.line_close.is_empty() {
            return false;
        }
        line.len() >= self.line_open.len() + self.line_close.len()
            && line.starts_with(self.line_open.as_str())
            && line.ends_with(self.line_close.as_str())
    }

    // ── Built-ins ───────────────────────────────────────────────────────────

    /// ANSI terminal text.
    pub fn terminal() -> Self {
        Self::new("terminal").with_color_style(ColorStyle::Ansi)
    }

    /// Plain text; colors are ignored.
    pub fn plain() -> Self {
        Self::new("plain")
    }

    /// An HTML `<code>` fragment.
    pub fn html() -> Self {
        Self::new("html")
            .with_outer("<code>", "</code>")
            .with_line("", "<br>")
            .with_escape(" ", "&nbsp;")
            .with_color_style(ColorStyle::HtmlSpan)
    }

    /// An SVG `<text>` element, one `<tspan>` per line.
    pub fn svg() -> Self {
        Self::new("svg")
            .with_outer("<text>", "</text>")
            .with_line(r#"<tspan x="10" dy="1em">"#, "</tspan>")
            .with_escape(" ", "&#160;")
            .with_color_style(ColorStyle::SvgTspan)
    }

    pub fn builtins() -> Vec<Self> {
        vec![Self::terminal(), Self::plain(), Self::html(), Self::svg()]
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
