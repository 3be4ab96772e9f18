//! Error types for tag parsing.

use thiserror::Error;

/// Result type for tag parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// What went wrong, without position information.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Line break or end of input before the closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// Unknown character after a backslash in a quoted string.
    #[error("invalid escape sequence: {0}")]
    InvalidEscape(char),

    /// Token that cannot start a definition.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Token that is not a value.
    #[error("invalid value: '{0}'")]
    InvalidValue(String),

    /// Argument-list entry that does not start with an identifier.
    #[error("invalid attribute name: {0}")]
    InvalidAttributeName(String),

    /// Missing `=` between an attribute name and its value.
    #[error("= expected but got {0}")]
    ExpectedEquals(String),

    /// Argument list neither continued by `,` nor closed by `)`.
    #[error(") or , expected but got {0}")]
    ExpectedCommaOrParen(String),

    /// Array neither continued by `,` nor closed by `]`.
    #[error(", expected but got {0}")]
    ExpectedCommaOrBracket(String),

    /// Integer literal outside the signed 64-bit range.
    #[error("integer out of range: {0}")]
    IntOutOfRange(String),

    /// Float literal that does not fit a finite 64-bit float.
    #[error("float out of range: {0}")]
    FloatOutOfRange(String),
}

/// An error aborting one parse call.
///
/// Carries the kind, the caller-supplied source label (e.g. `"User.Name"`,
/// passed through verbatim), and the one-based line/column at which the
/// scanner was positioned when the error was raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} ({line}:{column} [{source_label}])")]
pub struct ParseError {
    kind: ErrorKind,
    source_label: String,
    line: usize,
    column: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, source_label: &str, line: usize, column: usize) -> Self {
        Self {
            kind,
            source_label: source_label.to_string(),
            line,
            column,
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The source label supplied to the parse call.
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    /// One-based line of the failure.
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based column of the failure.
    pub fn column(&self) -> usize {
        self.column
    }
}
