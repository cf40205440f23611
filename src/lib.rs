//! # bmx
//!
//! A parser and serializer for the BMX (Block Mixture) text format.
//!
//! ## What is BMX?
//!
//! BMX is a minimal line-oriented format for bundling several named,
//! multi-line text blocks in one file. A bracketed header opens each block
//! and everything up to the next header is that block's content:
//!
//! ```text
//! [ vertex ]
//! #version 330 core
//! void main() { }
//!
//! [ fragment ]
//! #version 330 core
//! out vec4 color;
//! ```
//!
//! Content is opaque text; the format imposes no structure on it. Blocks
//! keep the order in which they appear, and names are unique per document.
//!
//! ## Key Features
//!
//! - **Ordered**: blocks iterate and serialize in first-appearance order
//! - **Position-tracked errors**: every syntax error carries line, column,
//!   and a caret excerpt of the offending line
//! - **Escape convention**: content lines starting with `[` are written
//!   with a doubled bracket (`[[`) and parsed back with one stripped
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! let text = "[ greeting ]\nHello, world!\n[ farewell ]\nBye.\n";
//!
//! let mut document = bmx::from_str(text).unwrap();
//! assert_eq!(document.get("greeting").unwrap(), "Hello, world!\n");
//! assert_eq!(document.keys(), vec!["greeting", "farewell"]);
//!
//! document.set("farewell".to_string(), "See you.\n".to_string());
//! let rendered = bmx::to_string(&document).unwrap();
//! assert_eq!(rendered, "[ greeting ]\nHello, world!\n[ farewell ]\nSee you.\n");
//! ```
//!
//! ### Building documents in code
//!
//! ```rust
//! use bmx::bmx;
//!
//! let document = bmx! {
//!     "title" => "release notes\n",
//!     "body" => "nothing broke this week\n",
//! };
//! assert_eq!(document.len(), 2);
//! ```
//!
//! ### Error reporting
//!
//! ```rust
//! let err = bmx::from_str("[ a ]\nx\n[ a ]\ny\n").unwrap_err();
//! assert!(matches!(err, bmx::Error::DuplicateBlockName { line: 3, .. }));
//! println!("{err}");
//! // Syntax error at line 3, column 3:
//! // |3 |[ a ]
//! //        ^
//! // block name "a" already exists
//! ```
//!
//! ## Format Specification
//!
//! See the [`spec`] module for the complete format description: header
//! grammar, the escaping rule, the canonical serialized form, and how error
//! positions are reported.

pub mod de;
pub mod diag;
pub mod error;
pub mod macros;
pub mod map;
pub mod ser;
pub mod spec;

pub use de::Parser;
pub use error::{Error, Result};
pub use map::Document;
pub use ser::Serializer;

use std::io;

/// Parses a string of BMX text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// let document = bmx::from_str("[ a ]\nx\n").unwrap();
/// assert_eq!(document.get("a").unwrap(), "x\n");
/// ```
///
/// # Errors
///
/// Returns a syntax error for the first malformed header line; the error
/// carries the 1-based line and column and a rendered excerpt.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(input: &str) -> Result<Document> {
    Parser::new().parse_str(input)
}

/// Parses BMX from a buffered line source.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// let document = bmx::from_reader(Cursor::new(b"[ a ]\nx\n")).unwrap();
/// assert_eq!(document.get("a").unwrap(), "x\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails (including invalid UTF-8 in the
/// source), or a syntax error for the first malformed header line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::BufRead>(reader: R) -> Result<Document> {
    Parser::new().parse_reader(reader)
}

/// Parses BMX from bytes.
///
/// # Errors
///
/// Returns [`Error::Io`] if the bytes are not valid UTF-8, or a syntax error
/// for the first malformed header line.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(bytes: &[u8]) -> Result<Document> {
    from_reader(bytes)
}

/// Serializes a [`Document`] to canonical BMX text.
///
/// # Examples
///
/// ```rust
/// use bmx::bmx;
///
/// let document = bmx! { "a" => "x\n" };
/// assert_eq!(bmx::to_string(&document).unwrap(), "[ a ]\nx\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyDocument`] if the document holds no blocks.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(document: &Document) -> Result<String> {
    let mut serializer = Serializer::new();
    serializer.serialize(document)?;
    Ok(serializer.into_inner())
}

/// Serializes a [`Document`] to a writer in canonical BMX text.
///
/// # Errors
///
/// Returns [`Error::EmptyDocument`] if the document holds no blocks, or
/// [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, document: &Document) -> Result<()> {
    let text = to_string(document)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
