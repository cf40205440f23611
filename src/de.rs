//! BMX parsing.
//!
//! This module provides the [`Parser`] that turns BMX text into a
//! [`Document`]. Parsing is a single pass over physical lines: each line is
//! classified as a block header, an escaped content line, or plain content,
//! and the classification drives a two-state machine (outside a block /
//! inside a block).
//!
//! ## Overview
//!
//! - **Single-pass**: O(n) over the input, no backtracking
//! - **Line classification**: `[name]` headers, `[[` escapes, plain content
//! - **Error reporting**: every syntax error carries line/column and a
//!   rendered caret excerpt
//! - **Buffer or stream**: parse a `&str` or any `BufRead` line source
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! let document = bmx::from_str("[ greeting ]\nHello!\n").unwrap();
//! assert_eq!(document.get("greeting").unwrap(), "Hello!\n");
//! ```

use crate::{Document, Error, Result};
use std::io::BufRead;

/// Opening delimiter of a block header line.
const HEADER_OPEN: u8 = b'[';
/// Closing delimiter of a block header line.
const HEADER_CLOSE: u8 = b']';

/// Classification of a single physical line.
enum LineKind<'a> {
    /// Starts with a single `[`: a block header.
    Header,
    /// Starts with `[[`: content with one leading `[` stripped.
    Escaped(&'a str),
    /// Anything else, including lines shorter than two characters.
    Content,
}

/// Decides what a line is. A header needs at least two characters, a `[`
/// first and anything but a second `[` after it; the doubled form is the
/// escape for content lines that start with a bracket.
fn classify(line: &str) -> LineKind<'_> {
    let bytes = line.as_bytes();
    match (bytes.first(), bytes.get(1)) {
        (Some(&HEADER_OPEN), Some(&HEADER_OPEN)) => LineKind::Escaped(&line[1..]),
        (Some(&HEADER_OPEN), Some(_)) => LineKind::Header,
        _ => LineKind::Content,
    }
}

/// A block whose header has been read but whose content is still being
/// collected.
struct OpenBlock {
    name: String,
    content: String,
}

/// The BMX parser.
///
/// Drives the line-by-line state machine and populates a [`Document`].
/// Created via [`Parser::new`] and consumed by [`Parser::parse_str`] or
/// [`Parser::parse_reader`]; the convenience functions [`crate::from_str`],
/// [`crate::from_reader`] and [`crate::from_slice`] wrap these.
///
/// # Examples
///
/// ```rust
/// use bmx::Parser;
///
/// let document = Parser::new().parse_str("[ a ]\nx\n").unwrap();
/// assert_eq!(document.get("a").unwrap(), "x\n");
/// ```
pub struct Parser {
    document: Document,
    open: Option<OpenBlock>,
    line_number: usize,
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Parser {
            document: Document::new(),
            open: None,
            line_number: 0,
        }
    }

    /// Parses a complete BMX buffer into a [`Document`].
    ///
    /// Lines are split on `\n`; a single trailing newline does not count as
    /// an extra empty line. Carriage returns are ordinary line content.
    ///
    /// # Errors
    ///
    /// Returns a syntax error ([`Error::UnterminatedHeader`],
    /// [`Error::EmptyHeaderName`] or [`Error::DuplicateBlockName`]) for the
    /// first malformed header line; parsing stops there.
    pub fn parse_str(mut self, input: &str) -> Result<Document> {
        let body = input.strip_suffix('\n').unwrap_or(input);
        if !body.is_empty() {
            for line in body.split('\n') {
                self.feed_line(line)?;
            }
        }
        Ok(self.finish())
    }

    /// Parses BMX from a line source, such as a buffered file.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bmx::Parser;
    /// use std::io::Cursor;
    ///
    /// let source = Cursor::new(b"[ a ]\nx\n");
    /// let document = Parser::new().parse_reader(source).unwrap();
    /// assert_eq!(document.get("a").unwrap(), "x\n");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading from the source fails, or a syntax
    /// error for the first malformed header line.
    pub fn parse_reader<R: BufRead>(mut self, reader: R) -> Result<Document> {
        for line in reader.lines() {
            let line = line.map_err(|err| Error::io(&err.to_string()))?;
            self.feed_line(&line)?;
        }
        Ok(self.finish())
    }

    /// Processes one physical line.
    fn feed_line(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;
        match classify(line) {
            LineKind::Header => {
                // A header ends the block before it. The flush is an upsert
                // and never duplicate-checked; only new header names are.
                self.flush();
                self.read_header(line)?;
            }
            LineKind::Escaped(rest) => self.record(rest),
            LineKind::Content => self.record(line),
        }
        Ok(())
    }

    /// Records a content line. Outside any block the line is discarded.
    fn record(&mut self, line: &str) {
        if let Some(block) = &mut self.open {
            block.content.push_str(line);
            block.content.push('\n');
        }
    }

    /// Extracts the name from a header line and opens a new block.
    ///
    /// The name spans from the first non-space after the opening bracket to
    /// the last non-space before the rightmost closing bracket.
    fn read_header(&mut self, line: &str) -> Result<()> {
        let bytes = line.as_bytes();

        let Some(close) = bytes.iter().rposition(|&b| b == HEADER_CLOSE) else {
            return Err(Error::unterminated_header(self.line_number, line));
        };
        // A closing bracket exists and is not a space, so the forward scan
        // always finds a non-space; the fallback keeps the bounds explicit.
        let start = match bytes[1..].iter().position(|&b| b != b' ') {
            Some(offset) => offset + 1,
            None => close,
        };
        let end = bytes[..close].iter().rposition(|&b| b != b' ').unwrap_or(0);
        if end < start {
            return Err(Error::empty_header_name(self.line_number, line));
        }

        // start and end sit on char boundaries: both index the first or last
        // byte of a non-space run and spaces are single-byte.
        let name = &line[start..=end];
        if self.document.contains(name) {
            let col = line[..start].chars().count() + 1;
            return Err(Error::duplicate_block_name(name, self.line_number, col, line));
        }

        self.open = Some(OpenBlock {
            name: name.to_string(),
            content: String::new(),
        });
        Ok(())
    }

    /// Moves the open block, if any, into the document.
    fn flush(&mut self) {
        if let Some(OpenBlock { name, content }) = self.open.take() {
            self.document.set(name, content);
        }
    }

    /// Flushes the final block and returns the populated document.
    fn finish(mut self) -> Document {
        self.flush();
        self.document
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
