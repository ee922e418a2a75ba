//! Format registry: one immutable descriptor per name.
//!
//! The process-wide registry holds the built-in formats and is initialized
//! once on first use. Callers that need custom formats build their own
//! [`FormatRegistry`] and pass it where lookups happen.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::debug;

use super::FormatDescriptor;
use crate::error::{RenderError, Result};

static BUILTIN: LazyLock<FormatRegistry> = LazyLock::new(|| {
    let registry = FormatRegistry::with_builtins();
    debug!("format registry initialized: {:?}", registry.names());
    registry
});

/// Resolve a built-in format by exact (case-sensitive) name.
pub fn resolve(name: &str) -> Result<FormatDescriptor> {
    BUILTIN.resolve(name)
}

/// The shared registry of built-in formats.
pub fn builtin() -> &'static FormatRegistry {
    &BUILTIN
}

#[derive(Debug, Clone, Default)]
pub struct FormatRegistry {
    formats: BTreeMap<String, FormatDescriptor>,
}

impl FormatRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding terminal, plain, html and svg.
    pub fn with_builtins() -> Self {
        let formats = FormatDescriptor::builtins()
            .into_iter()
            .map(|d| (d.name.clone(), d))
            .collect();
        Self { formats }
    }

    /// Add a descriptor. Names are unique and escape rules must match something.
    pub fn register(&mut self, descriptor: FormatDescriptor) -> Result<()> {
        if descriptor.name.is_empty() {
            return Err(RenderError::InvalidDescriptor {
                name: descriptor.name,
                reason: "name is empty".to_string(),
            });
        }
        if descriptor.escapes.iter().any(|e| e.from.is_empty()) {
            return Err(RenderError::InvalidDescriptor {
                name: descriptor.name,
                reason: "escape rule with empty match".to_string(),
            });
        }
        if self.formats.contains_key(&descriptor.name) {
            return Err(RenderError::DuplicateFormat(descriptor.name));
        }
        debug!("registering format '{}'", descriptor.name);
        self.formats.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Look up `name`, returning an owned copy of its descriptor.
    pub fn resolve(&self, name: &str) -> Result<FormatDescriptor> {
        self.get(name)
            .cloned()
            .ok_or_else(|| RenderError::UnknownFormat(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Option<&FormatDescriptor> {
        self.formats.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.formats.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.formats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }
}
