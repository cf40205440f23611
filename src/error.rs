//! Error types for BMX parsing and serialization.
//!
//! Every failure surfaces as a distinct [`Error`] variant so callers can
//! branch on cause instead of matching on message text. Parse errors carry
//! the 1-based line and column of the offending input plus a rendered
//! excerpt (see [`crate::diag`]) that points a caret at the problem.
//!
//! ## Examples
//!
//! ```rust
//! use bmx::Error;
//!
//! let err = bmx::from_str("[ a\n").unwrap_err();
//! assert!(matches!(err, Error::UnterminatedHeader { line: 1, .. }));
//! // Display output embeds the excerpt with the caret
//! assert!(err.to_string().contains("|1 |[ a"));
//! ```

use crate::diag;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing, querying, or
/// serializing BMX documents.
///
/// Syntax variants include contextual information to aid debugging.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A block header line has no closing bracket
    #[error("Syntax error at line {line}, column {col}:\n{context}\nblock header's bracket is never closed")]
    UnterminatedHeader {
        line: usize,
        col: usize,
        context: String,
    },

    /// A block header holds nothing but spaces between its brackets
    #[error("Syntax error at line {line}, column {col}:\n{context}\nblock header has an empty name")]
    EmptyHeaderName {
        line: usize,
        col: usize,
        context: String,
    },

    /// A block header repeats a name that an earlier block already used
    #[error("Syntax error at line {line}, column {col}:\n{context}\nblock name \"{name}\" already exists")]
    DuplicateBlockName {
        name: String,
        line: usize,
        col: usize,
        context: String,
    },

    /// Lookup or removal of a name the document does not hold
    #[error("block \"{0}\" does not exist")]
    BlockNotFound(String),

    /// Serialization of a document with no blocks
    #[error("document contains no blocks")]
    EmptyDocument,
}

impl Error {
    /// Creates an I/O error for read/write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the 1-based `(line, column)` of a syntax error, or `None` for
    /// errors that have no position in the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let err = bmx::from_str("junk\n[ \n").unwrap_err();
    /// assert_eq!(err.location(), Some((2, 2)));
    /// ```
    #[must_use]
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Error::UnterminatedHeader { line, col, .. }
            | Error::EmptyHeaderName { line, col, .. }
            | Error::DuplicateBlockName { line, col, .. } => Some((*line, *col)),
            _ => None,
        }
    }

    pub(crate) fn unterminated_header(line: usize, source_line: &str) -> Self {
        let col = source_line.chars().count();
        Error::UnterminatedHeader {
            line,
            col,
            context: diag::excerpt(source_line, line, col),
        }
    }

    pub(crate) fn empty_header_name(line: usize, source_line: &str) -> Self {
        let col = source_line.chars().count();
        Error::EmptyHeaderName {
            line,
            col,
            context: diag::excerpt(source_line, line, col),
        }
    }

    pub(crate) fn duplicate_block_name(
        name: &str,
        line: usize,
        col: usize,
        source_line: &str,
    ) -> Self {
        Error::DuplicateBlockName {
            name: name.to_string(),
            line,
            col,
            context: diag::excerpt(source_line, line, col),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
