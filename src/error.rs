//! Error types for banner rendering.

use thiserror::Error;

/// Errors surfaced by format lookup, color construction and rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// No descriptor is registered under the requested name
    #[error("unknown output format '{0}'")]
    UnknownFormat(String),

    /// An explicit RGB channel was outside 0..=255
    #[error("color channel {channel} out of range: {value} (expected 0-255)")]
    InvalidColorChannel { channel: char, value: i64 },

    /// Color text that is neither a palette name, hex string nor rgb triple
    #[error("cannot parse color '{0}'")]
    InvalidColor(String),

    /// A second descriptor was registered under an existing name
    #[error("output format '{0}' is already registered")]
    DuplicateFormat(String),

    /// A custom descriptor breaks a registry invariant
    #[error("invalid format descriptor '{name}': {reason}")]
    InvalidDescriptor { name: String, reason: String },

    /// The format has no standalone document form
    #[error("format '{0}' has no standalone document form")]
    NoDocumentForm(String),

    /// Reading input or writing output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
