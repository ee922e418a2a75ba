//! Standalone documents around rendered fragments.
//!
//! The svg and html formats produce fragments (`<text>..</text>`,
//! `<code>..</code>`) meant to be embedded. These helpers wrap a fragment in a
//! minimal complete document so it can be written straight to a file.

use crate::color::Color;
use crate::error::{RenderError, Result};

// ─── Constants ───────────────────────────────────────────────────────────────

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 200;
const DEFAULT_FONT_FAMILY: &str = "monospace";
const DEFAULT_FONT_SIZE: u32 = 14;
const DEFAULT_TITLE: &str = "banner";

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() { default } else { value }
}

fn nonzero_or(value: u32, default: u32) -> u32 {
    if value == 0 { default } else { value }
}

// ── SVG ──────────────────────────────────────────────────────────────────────

/// Canvas and typography for [`wrap_svg`]. Zero or empty fields use defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocumentOptions {
    pub width: u32,
    pub height: u32,
    pub font_family: String,
    pub font_size: u32,
    /// Fill of a full-canvas rect behind the text. `None` = transparent.
    pub background: Option<Color>,
}

impl Default for SvgDocumentOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            background: Some(Color::rgb(255, 255, 255)),
        }
    }
}

/// Wrap an svg-format fragment in a complete SVG document.
pub fn wrap_svg(fragment: &str, opts: &SvgDocumentOptions) -> String {
    let w = nonzero_or(opts.width, DEFAULT_WIDTH);
    let h = nonzero_or(opts.height, DEFAULT_HEIGHT);
    let family = escape_text(or_default(&opts.font_family, DEFAULT_FONT_FAMILY));
    let size = nonzero_or(opts.font_size, DEFAULT_FONT_SIZE);

    let mut parts = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        ),
        format!("  <style>text {{ font-family: {family}; font-size: {size}px; white-space: pre; }}</style>"),
    ];
    if let Some(bg) = opts.background {
        parts.push(format!(
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            bg.to_rgb()
        ));
    }
    parts.push("  <g>".to_string());
    parts.extend(fragment.lines().map(|line| format!("    {line}")));
    parts.push("  </g>".to_string());
    parts.push("</svg>".to_string());
    parts.join("\n")
}

// ── HTML ─────────────────────────────────────────────────────────────────────

/// Page settings for [`wrap_html`]. Empty fields use defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocumentOptions {
    pub title: String,
    pub font_family: String,
}

impl Default for HtmlDocumentOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }
}

/// Wrap an html-format fragment in a minimal HTML5 page.
pub fn wrap_html(fragment: &str, opts: &HtmlDocumentOptions) -> String {
    let title = escape_text(or_default(&opts.title, DEFAULT_TITLE));
    let family = escape_text(or_default(&opts.font_family, DEFAULT_FONT_FAMILY));
    [
        "<!DOCTYPE html>".to_string(),
        "<html>".to_string(),
        "<head>".to_string(),
        r#"<meta charset="utf-8">"#.to_string(),
        format!("<title>{title}</title>"),
        format!("<style>code {{ font-family: {family}; white-space: pre; }}</style>"),
        "</head>".to_string(),
        "<body>".to_string(),
        fragment.to_string(),
        "</body>".to_string(),
        "</html>".to_string(),
    ]
    .join("\n")
}

/// Wrap `fragment` with the default document for `format`.
pub fn wrap_document(format: &str, fragment: &str) -> Result<String> {
    match format {
        "svg" => Ok(wrap_svg(fragment, &SvgDocumentOptions::default())),
        "html" => Ok(wrap_html(fragment, &HtmlDocumentOptions::default())),
        other => Err(RenderError::NoDocumentForm(other.to_string())),
    }
}
