//! banner-render — block-letter banner art encoder.
//!
//! Takes already-composed glyph rows and encodes them for a named output
//! target (ANSI terminal, plain text, HTML, SVG), escaping per format and
//! cycling an optional color sequence over the characters.
//!
//! Public API: [`formats::resolve`] and [`render()`].
//!
//! ```
//! use banner_render::{formats, render};
//!
//! let svg = formats::resolve("svg").unwrap();
//! let out = render(&["A B"], &svg, &[]);
//! assert_eq!(out, r#"<text><tspan x="10" dy="1em">A&#160;B</tspan></text>"#);
//! ```

pub mod color;
pub mod config;
pub mod document;
pub mod error;
pub mod formats;
pub mod render;

pub use color::{Color, ColorSequence, ColorStyle, NamedColor, Rgb};
pub use config::RenderConfig;
pub use error::{RenderError, Result};
pub use formats::{FormatDescriptor, FormatRegistry};
pub use render::{GlyphRenderer, encode_line, render, render_named, render_text, render_with_config};
