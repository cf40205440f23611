//! Ordered block container for BMX documents.
//!
//! This module provides [`Document`], a wrapper around [`IndexMap`] that maps
//! block names to block contents while preserving the order in which names
//! were first introduced. Order matters in BMX: serialization walks blocks in
//! insertion order, and two documents are only equal when their blocks match
//! in content *and* order.
//!
//! ## Why IndexMap?
//!
//! BMX uses `IndexMap` instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: blocks serialize in a consistent order
//! - **Iteration order**: blocks iterate in first-insertion order
//! - **In-place updates**: replacing a block's content never moves it
//!
//! ## Examples
//!
//! ```rust
//! use bmx::Document;
//!
//! let mut document = Document::new();
//! document.set("title".to_string(), "BMX\n".to_string());
//! document.set("body".to_string(), "blocks of text\n".to_string());
//!
//! assert_eq!(document.len(), 2);
//! assert_eq!(document.get("title").unwrap(), "BMX\n");
//! assert_eq!(document.keys(), vec!["title", "body"]);
//! ```

use crate::{Error, Result};
use indexmap::IndexMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An ordered map of block names to block contents.
///
/// A `Document` is created empty or populated by the parser; it is consumed
/// read-only by the serializer. Names are unique within a document.
///
/// # Examples
///
/// ```rust
/// use bmx::Document;
///
/// let mut document = Document::new();
/// document.set("first".to_string(), "1\n".to_string());
/// document.set("second".to_string(), "2\n".to_string());
///
/// // Iteration maintains insertion order
/// assert_eq!(document.keys(), vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    blocks: IndexMap<String, String>,
}

impl Document {
    /// Creates an empty `Document`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bmx::Document;
    ///
    /// let document = Document::new();
    /// assert!(document.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Document {
            blocks: IndexMap::new(),
        }
    }

    /// Creates an empty `Document` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Document {
            blocks: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the content of the block named `name`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bmx::Document;
    ///
    /// let mut document = Document::new();
    /// document.set("a".to_string(), "1\n".to_string());
    /// assert_eq!(document.get("a").unwrap(), "1\n");
    /// assert!(document.get("missing").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockNotFound`] if no block has that exact name.
    pub fn get(&self, name: &str) -> Result<&str> {
        self.blocks
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::BlockNotFound(name.to_string()))
    }

    /// Adds or replaces a block.
    ///
    /// A new name is appended at the end of iteration order; an existing name
    /// has its content replaced in place without changing its position. The
    /// previous content is returned, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bmx::Document;
    ///
    /// let mut document = Document::new();
    /// assert!(document.set("a".to_string(), "1\n".to_string()).is_none());
    /// assert_eq!(
    ///     document.set("a".to_string(), "2\n".to_string()).as_deref(),
    ///     Some("1\n")
    /// );
    /// assert_eq!(document.get("a").unwrap(), "2\n");
    /// ```
    pub fn set(&mut self, name: String, content: String) -> Option<String> {
        self.blocks.insert(name, content)
    }

    /// Removes the block named `name` and returns its content.
    ///
    /// The remaining blocks keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BlockNotFound`] if no block has that exact name.
    pub fn remove(&mut self, name: &str) -> Result<String> {
        self.blocks
            .shift_remove(name)
            .ok_or_else(|| Error::BlockNotFound(name.to_string()))
    }

    /// Returns `true` if the document holds a block named `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.blocks.contains_key(name)
    }

    /// Returns the block names in insertion order.
    ///
    /// The returned vector is a snapshot; mutating the document afterwards
    /// does not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bmx::Document;
    ///
    /// let mut document = Document::new();
    /// document.set("a".to_string(), String::new());
    /// let keys = document.keys();
    /// document.set("b".to_string(), String::new());
    /// assert_eq!(keys, vec!["a"]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.blocks.keys().cloned().collect()
    }

    /// Returns the number of blocks in the document.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if the document contains no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns an iterator over `(name, content)` pairs in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.blocks.iter()
    }
}

/// Equality includes block order: two documents with the same blocks in a
/// different order are not equal.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.blocks.len() == other.blocks.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Document {}

impl IntoIterator for Document {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// Collects `(name, content)` pairs; a repeated name follows [`Document::set`]
/// semantics (content replaced, position kept).
impl FromIterator<(String, String)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Document {
            blocks: IndexMap::from_iter(iter),
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, content) in self.iter() {
            map.serialize_entry(name, content)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of block names to block contents")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Document, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut document = Document::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, content)) = access.next_entry::<String, String>()? {
                    document.set(name, content);
                }
                Ok(document)
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}
