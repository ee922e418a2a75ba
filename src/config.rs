//! Rendering configuration.

use crate::color::ColorSequence;

/// Caller-facing rendering options: a registered output format and the
/// color sequence to cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Output format name, resolved in the built-in registry.
    pub format: String,
    /// Colors applied per character, cycling. Empty = uncolored.
    pub colors: ColorSequence,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: "terminal".to_string(),
            colors: Vec::new(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn with_colors(mut self, colors: ColorSequence) -> Self {
        self.colors = colors;
        self
    }
}
