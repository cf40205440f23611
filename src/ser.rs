//! BMX serialization.
//!
//! This module provides the [`Serializer`] that renders a [`Document`] back
//! into canonical BMX text: each block becomes a `[ name ]` header line
//! followed by its content, in document order.
//!
//! ## Usage
//!
//! Most users should use [`crate::to_string`] or [`crate::to_writer`]:
//!
//! ```rust
//! use bmx::Document;
//!
//! let mut document = Document::new();
//! document.set("a".to_string(), "1\n".to_string());
//! assert_eq!(bmx::to_string(&document).unwrap(), "[ a ]\n1\n");
//! ```
//!
//! A document with zero blocks does not serialize to empty text; it is an
//! [`Error::EmptyDocument`]. Callers that want empty output for an empty
//! document must special-case [`Document::is_empty`] themselves.

use crate::{Document, Error, Result};

/// The BMX serializer.
///
/// Accumulates canonical text for one or more documents; retrieve the output
/// with [`Serializer::into_inner`].
///
/// # Examples
///
/// ```rust
/// use bmx::{Document, Serializer};
///
/// let mut document = Document::new();
/// document.set("a".to_string(), "x\n".to_string());
///
/// let mut serializer = Serializer::new();
/// serializer.serialize(&document).unwrap();
/// assert_eq!(serializer.into_inner(), "[ a ]\nx\n");
/// ```
pub struct Serializer {
    output: String,
}

impl Serializer {
    #[must_use]
    pub fn new() -> Self {
        // Pre-allocate to reduce reallocations for typical small documents
        Serializer {
            output: String::with_capacity(256),
        }
    }

    /// Consumes the serializer and returns the accumulated text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Renders every block of `document` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyDocument`] if the document holds no blocks.
    pub fn serialize(&mut self, document: &Document) -> Result<()> {
        if document.is_empty() {
            return Err(Error::EmptyDocument);
        }
        for (name, content) in document.iter() {
            self.write_block(name, content);
        }
        Ok(())
    }

    fn write_block(&mut self, name: &str, content: &str) {
        self.output.push_str("[ ");
        self.output.push_str(name);
        self.output.push_str(" ]\n");
        self.output.push_str(content);
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}
