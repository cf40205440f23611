//! BMX Format Specification
//!
//! This module documents the BMX (Block Mixture) format as implemented by
//! this library.
//!
//! # Overview
//!
//! A BMX document is an ordered collection of named, multi-line text blocks.
//! The format is line-oriented and newline-delimited: every physical line is
//! either a block header, an escaped content line, or plain content. Block
//! content is always opaque text; BMX assigns it no further structure.
//!
//! ```text
//! [ shader.vert ]
//! #version 330 core
//! void main() { }
//!
//! [ notes ]
//! Anything goes here, line by line.
//! [[ even lines that start with a bracket, escaped ]]
//! ```
//!
//! # Line classification
//!
//! ## Header lines
//!
//! A line is a block header when it is at least two characters long, starts
//! with `[`, and its second character is not `[`:
//!
//! ```text
//! [ name ]
//! ```
//!
//! **Rules**:
//! - The name spans from the first non-space character after the opening `[`
//!   to the last non-space character before the *rightmost* `]` on the line.
//!   Surrounding spaces are trimmed; inner spaces are kept (`[ my name ]`
//!   names the block `my name`).
//! - Text after the closing bracket is ignored.
//! - A header with no `]` anywhere on the line is an
//!   [`UnterminatedHeader`](crate::Error::UnterminatedHeader) error.
//! - A header with nothing but spaces between its brackets is an
//!   [`EmptyHeaderName`](crate::Error::EmptyHeaderName) error.
//! - A header whose name an earlier block already used is a
//!   [`DuplicateBlockName`](crate::Error::DuplicateBlockName) error; block
//!   names are unique within a document.
//! - A header ends the block before it, if any.
//!
//! ## Escaped content lines
//!
//! A line beginning with `[[` is content, not a header. Exactly one leading
//! `[` is stripped and the remainder is recorded:
//!
//! ```text
//! [ example ]
//! [[ not a header ]
//! ```
//!
//! stores the single content line `[ not a header ]` in block `example`.
//! This doubled-bracket convention is the only escape in the format.
//!
//! ## Content lines
//!
//! Every other line inside a block is recorded verbatim, followed by a
//! newline. Empty lines are valid content equal to `"\n"`, and a lone `[` is
//! too short to be a header, so it is content as well. Lines before the
//! first header belong to no block and are silently discarded, escaped or
//! not.
//!
//! # Canonical serialized form
//!
//! Serialization walks blocks in insertion order and emits, per block:
//!
//! ```text
//! [ <name> ]
//! <content>
//! ```
//!
//! with a single space on either side of the name and the content written
//! byte-for-byte as stored. Parsing the serialized text yields an equal
//! document whenever names contain no brackets and every content line is
//! newline-terminated and does not itself begin with `[`.
//!
//! A document with zero blocks does not serialize; see
//! [`EmptyDocument`](crate::Error::EmptyDocument).
//!
//! # Positions in diagnostics
//!
//! Lines and columns are 1-based and counted in characters. Unterminated and
//! empty-name headers report the line's length as the column; duplicate
//! names report the column of the name's first character. Every syntax error
//! embeds a caret excerpt, e.g.:
//!
//! ```text
//! Syntax error at line 3, column 3:
//! |3 |[ a ]
//!        ^
//! block name "a" already exists
//! ```
