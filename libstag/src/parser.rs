//! Phase 2: Parser
//!
//! A recursive-descent parser driving the scanner token-by-token. The
//! top-level loop consumes comma-separated definitions; each definition name
//! is followed by nothing, `=value`, or `(name=value, ...)`. Values recurse
//! through arrays; quoted strings are read below the token level so escapes
//! and the no-newline rule see raw characters.
//!
//! The decision between the three definition forms is made by peeking at the
//! raw character after the name, not by scanning a token. Raw peeks do not
//! skip whitespace, so `a = 1` is not a `name=value` form and `[1 , 2]` is a
//! syntax error after the first element.

use crate::definition::Definition;
use crate::error::{ErrorKind, ParseError, Result};
use crate::scanner::{Scanner, Token, TokenKind};
use crate::value::Value;
use std::collections::HashMap;

/// Parse one tag string into its definitions, in source order.
pub(crate) fn parse(tag: &str, source: &str) -> Result<Vec<Definition>> {
    Parser::new(tag, source).run()
}

struct Parser<'a> {
    scanner: Scanner,
    source: &'a str,
}

impl<'a> Parser<'a> {
    fn new(tag: &str, source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(tag),
            source,
        }
    }

    /// An error at the start of a scanned token.
    fn error_at(&self, tok: &Token, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.source, tok.line, tok.col)
    }

    /// An error at the read head, for failures between tokens.
    fn error_here(&self, kind: ErrorKind) -> ParseError {
        let (line, column) = self.scanner.pos();
        ParseError::new(kind, self.source, line, column)
    }

    // ========================================================================
    // Definitions
    // ========================================================================

    fn run(mut self) -> Result<Vec<Definition>> {
        let mut result = Vec::new();
        loop {
            let tok = self.scanner.scan();
            match tok.kind {
                TokenKind::Eof => return Ok(result),
                TokenKind::Ident => result.push(self.parse_definition(tok.text)?),
                TokenKind::Char(',') => {
                    // separator between definitions
                }
                _ => return Err(self.error_at(&tok, ErrorKind::InvalidToken(tok.text.clone()))),
            }
        }
    }

    /// Parse the remainder of one definition, given its already-scanned name.
    fn parse_definition(&mut self, name: String) -> Result<Definition> {
        match self.scanner.peek() {
            Some('=') => {
                self.scanner.next();
                let value = self.parse_value()?;
                let mut attributes = HashMap::new();
                attributes.insert(name.clone(), value);
                Ok(Definition::new(name, attributes))
            }
            Some('(') => {
                self.scanner.next();
                let attributes = self.parse_args()?;
                Ok(Definition::new(name, attributes))
            }
            // A bare name: end of input, the `,` before the next definition,
            // or any other character. The last case is unreachable for
            // grammatical input and deliberately lenient: the name stands
            // alone and the stray character is left for the top-level loop.
            _ => Ok(Definition::new(name, HashMap::new())),
        }
    }

    // ========================================================================
    // Argument lists
    // ========================================================================

    /// Parse `name=value` pairs up to the closing `)`. The `(` has already
    /// been consumed. A duplicated attribute name keeps the last value.
    fn parse_args(&mut self) -> Result<HashMap<String, Value>> {
        let mut result = HashMap::new();
        loop {
            let tok = self.scanner.scan();
            if tok.kind != TokenKind::Ident {
                return Err(
                    self.error_at(&tok, ErrorKind::InvalidAttributeName(tok.text.clone()))
                );
            }
            let name = tok.text;
            match self.scanner.next() {
                Some('=') => {}
                other => return Err(self.error_here(ErrorKind::ExpectedEquals(char_text(other)))),
            }
            let value = self.parse_value()?;
            result.insert(name, value);
            match self.scanner.next() {
                Some(')') => return Ok(result),
                Some(',') => {}
                other => {
                    return Err(self.error_here(ErrorKind::ExpectedCommaOrParen(char_text(other))))
                }
            }
        }
    }

    // ========================================================================
    // Values
    // ========================================================================

    /// Parse one value at the current position: a quoted string, an array,
    /// or a scalar token. Identifiers collapse to strings; a leading `-`
    /// negates the numeric literal that must follow it. No leading `+`.
    fn parse_value(&mut self) -> Result<Value> {
        match self.scanner.peek() {
            Some('\'') => {
                self.scanner.next();
                self.parse_string().map(Value::String)
            }
            Some('[') => {
                self.scanner.next();
                self.parse_array().map(Value::Array)
            }
            _ => {
                let tok = self.scanner.scan();
                match tok.kind {
                    TokenKind::Ident => Ok(Value::String(tok.text)),
                    TokenKind::Int | TokenKind::Float => self.parse_number(&tok, 1),
                    TokenKind::Char('-') => {
                        let num = self.scanner.scan();
                        match num.kind {
                            TokenKind::Int | TokenKind::Float => self.parse_number(&num, -1),
                            _ => Err(
                                self.error_at(&num, ErrorKind::InvalidValue(num.text.clone()))
                            ),
                        }
                    }
                    _ => Err(self.error_at(&tok, ErrorKind::InvalidValue(tok.text.clone()))),
                }
            }
        }
    }

    /// Convert a numeric token, applying the sign multiplier. The literal
    /// text is unsigned, so `-9223372036854775808` overflows before the sign
    /// is applied and is rejected.
    fn parse_number(&self, tok: &Token, sign: i64) -> Result<Value> {
        if tok.kind == TokenKind::Int {
            match tok.text.parse::<i64>() {
                Ok(n) => Ok(Value::Int(sign * n)),
                Err(_) => Err(self.error_at(tok, ErrorKind::IntOutOfRange(tok.text.clone()))),
            }
        } else {
            match tok.text.parse::<f64>() {
                Ok(f) if f.is_finite() => Ok(Value::Float(sign as f64 * f)),
                _ => Err(self.error_at(tok, ErrorKind::FloatOutOfRange(tok.text.clone()))),
            }
        }
    }

    // ========================================================================
    // Quoted strings
    // ========================================================================

    /// Read raw characters up to the closing quote. The opening `'` has
    /// already been consumed; the closing one is consumed and not included.
    /// Line breaks are illegal inside the literal.
    fn parse_string(&mut self) -> Result<String> {
        let mut buf = String::new();
        loop {
            match self.scanner.next() {
                Some('\'') => return Ok(buf),
                Some('\n') | Some('\r') | None => {
                    return Err(self.error_here(ErrorKind::UnterminatedString))
                }
                Some('\\') => buf.push(self.parse_escape()?),
                Some(ch) => buf.push(ch),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        match self.scanner.next() {
            Some('a') => Ok('\x07'),
            Some('b') => Ok('\x08'),
            Some('f') => Ok('\x0C'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('v') => Ok('\x0B'),
            Some('\\') => Ok('\\'),
            Some('"') => Ok('"'),
            Some('\'') => Ok('\''),
            Some(ch) => Err(self.error_here(ErrorKind::InvalidEscape(ch))),
            None => Err(self.error_here(ErrorKind::UnterminatedString)),
        }
    }

    // ========================================================================
    // Arrays
    // ========================================================================

    /// Parse comma-separated elements up to the closing `]`. The `[` has
    /// already been consumed. Elements recurse through [`Parser::parse_value`],
    /// so arrays nest.
    fn parse_array(&mut self) -> Result<Vec<Value>> {
        let mut result = Vec::new();
        if self.scanner.peek() == Some(']') {
            self.scanner.next();
            return Ok(result);
        }
        loop {
            result.push(self.parse_value()?);
            match self.scanner.next() {
                Some(']') => return Ok(result),
                Some(',') => {}
                other => {
                    return Err(
                        self.error_here(ErrorKind::ExpectedCommaOrBracket(char_text(other)))
                    )
                }
            }
        }
    }
}

/// Render the character actually found where punctuation was required.
fn char_text(ch: Option<char>) -> String {
    match ch {
        Some(ch) => ch.to_string(),
        None => "end of input".to_string(),
    }
}
