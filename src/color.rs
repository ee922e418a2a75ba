//! Colors and their per-format tokens.
//!
//! A [`Color`] only knows which RGB triple it stands for. How that triple is
//! spelled for a given output target lives in [`ColorStyle`], so the palette
//! table exists once no matter how many formats are registered.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RenderError, Result};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .expect("HEX_RE is a valid static regex pattern")
});

static TRIPLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:rgb\(\s*)?(-?\d+)\s*,\s*(-?\d+)\s*,\s*(-?\d+)\s*\)?$")
        .expect("TRIPLE_RE is a valid static regex pattern")
});

// ─── Rgb ─────────────────────────────────────────────────────────────────────

/// A 24-bit color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// `rgb(r,g,b)`: decimal, comma-joined, no spaces.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

// ─── NamedColor ──────────────────────────────────────────────────────────────

/// The closed basic palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// Fixed RGB equivalent used by markup formats.
    pub const fn rgb(self) -> Rgb {
        match self {
            NamedColor::Black => Rgb::new(0, 0, 0),
            NamedColor::Red => Rgb::new(255, 65, 54),
            NamedColor::Green => Rgb::new(149, 189, 64),
            NamedColor::Yellow => Rgb::new(255, 220, 0),
            NamedColor::Blue => Rgb::new(0, 116, 217),
            NamedColor::Magenta => Rgb::new(177, 13, 201),
            NamedColor::Cyan => Rgb::new(105, 206, 245),
            NamedColor::White => Rgb::new(255, 255, 255),
        }
    }

    /// Offset of this entry in the 8-color ANSI table (`ESC[3Nm`).
    pub const fn ansi_index(self) -> u8 {
        match self {
            NamedColor::Black => 0,
            NamedColor::Red => 1,
            NamedColor::Green => 2,
            NamedColor::Yellow => 3,
            NamedColor::Blue => 4,
            NamedColor::Magenta => 5,
            NamedColor::Cyan => 6,
            NamedColor::White => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }

    /// Case-insensitive palette lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name))
    }
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// A color applied to a run of banner characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Named(NamedColor),
    Rgb(Rgb),
}

/// Colors applied by character position, cycling when shorter than the text.
pub type ColorSequence = Vec<Color>;

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(Rgb::new(r, g, b))
    }

    /// Build an explicit color from wide integers, rejecting channels outside 0..=255.
    pub fn try_rgb(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Color::Rgb(Rgb::new(
            channel('r', r)?,
            channel('g', g)?,
            channel('b', b)?,
        )))
    }

    /// Parse a six-digit hex string such as `FF6B6B` or `#4ecdc4`.
    pub fn from_hex(text: &str) -> Result<Self> {
        let caps = HEX_RE
            .captures(text.trim())
            .ok_or_else(|| RenderError::InvalidColor(text.to_string()))?;
        let byte = |i: usize| u8::from_str_radix(&caps[i], 16);
        match (byte(1), byte(2), byte(3)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Color::rgb(r, g, b)),
            _ => Err(RenderError::InvalidColor(text.to_string())),
        }
    }

    /// The RGB triple this color stands for.
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Named(named) => named.rgb(),
            Color::Rgb(rgb) => rgb,
        }
    }
}

fn channel(name: char, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| RenderError::InvalidColorChannel {
        channel: name,
        value,
    })
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

/// Accepts a palette name, a hex string, or an `r,g,b` / `rgb(r,g,b)` triple.
impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        if let Some(named) = NamedColor::from_name(text) {
            return Ok(Color::Named(named));
        }
        if HEX_RE.is_match(text) {
            return Color::from_hex(text);
        }
        let caps = TRIPLE_RE
            .captures(text)
            .ok_or_else(|| RenderError::InvalidColor(s.to_string()))?;
        let parse = |i: usize| {
            caps[i]
                .parse::<i64>()
                .map_err(|_| RenderError::InvalidColor(s.to_string()))
        };
        Color::try_rgb(parse(1)?, parse(2)?, parse(3)?)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Rgb(rgb) => write!(f, "{rgb}"),
        }
    }
}

/// Parse a comma- or whitespace-separated list of named/hex colors.
///
/// `rgb(...)` triples contain commas themselves, so lists mixing them should
/// be passed one color per argument instead.
pub fn parse_sequence(text: &str) -> Result<ColorSequence> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<Color>())
        .collect()
}

// ─── ColorStyle ──────────────────────────────────────────────────────────────

const ANSI_RESET: &str = "\x1b[0m";

/// How a colored run is spelled by one output target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorStyle {
    /// Colors are ignored and runs are emitted bare.
    #[default]
    None,
    /// ANSI SGR escapes: 8-color codes for palette entries, 24-bit otherwise.
    Ansi,
    /// `<span style="color:rgb(..)">`
    HtmlSpan,
    /// `<tspan fill="rgb(..)">`
    SvgTspan,
}

impl ColorStyle {
    /// Opening token for a run in `color`, or `None` when the style is colorless.
    pub fn open(self, color: Color) -> Option<String> {
        match self {
            ColorStyle::None => None,
            ColorStyle::Ansi => Some(match color {
                Color::Named(named) => format!("\x1b[{}m", 30 + named.ansi_index()),
                Color::Rgb(Rgb { r, g, b }) => format!("\x1b[38;2;{r};{g};{b}m"),
            }),
            ColorStyle::HtmlSpan => Some(format!(r#"<span style="color:{}">"#, color.to_rgb())),
            ColorStyle::SvgTspan => Some(format!(r#"<tspan fill="{}">"#, color.to_rgb())),
        }
    }

    /// Closing token matching [`ColorStyle::open`].
    pub fn close(self) -> &'static str {
        match self {
            ColorStyle::None => "",
            ColorStyle::Ansi => ANSI_RESET,
            ColorStyle::HtmlSpan => "</span>",
            ColorStyle::SvgTspan => "</tspan>",
        }
    }

    /// Append `text` to `out` wrapped in this style's token for `color`.
    pub fn wrap_into(self, out: &mut String, color: Color, text: &str) {
        match self.open(color) {
            Some(open) => {
                out.push_str(&open);
                out.push_str(text);
                out.push_str(self.close());
            }
            None => out.push_str(text),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
