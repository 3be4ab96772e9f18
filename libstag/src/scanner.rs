//! Phase 1: Scanner
//!
//! The scanner turns a raw tag string into tokens on demand. It recognizes:
//! - Identifiers (letter or `_`, then letters/digits/`_`)
//! - Integer literals (a digit run)
//! - Float literals (a digit run containing a decimal point; no exponents)
//! - Any other character as a single-character punctuation token
//!
//! Whitespace between tokens is insignificant and skipped by [`Scanner::scan`].
//! The raw [`Scanner::peek`] and [`Scanner::next`] operations never skip
//! whitespace; the parser relies on that when it inspects the character
//! directly after an identifier or a value.
//!
//! The scanner has no notion of string literals. A quote is returned as an
//! ordinary punctuation token and the parser's string rule consumes the raw
//! characters itself, because escape handling and the no-newline rule operate
//! below the token level.

/// Token classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier.
    Ident,
    /// Integer literal.
    Int,
    /// Float literal (contains a decimal point).
    Float,
    /// Any single punctuation character.
    Char(char),
    /// End of input.
    Eof,
}

/// A single token with its raw text and starting position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    /// One-based line of the first character.
    pub line: usize,
    /// One-based column of the first character.
    pub col: usize,
}

/// Character-level scanner over one tag string.
///
/// Each parse call owns a fresh scanner; nothing is shared across calls.
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    col: usize,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// The next raw character, without advancing. Does not skip whitespace.
    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Advance one raw character and return it. Does not skip whitespace.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Current position of the read head (one-based line and column).
    pub fn pos(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// Scan the next token, skipping any leading whitespace.
    pub fn scan(&mut self) -> Token {
        self.skip_whitespace();
        let (line, col) = (self.line, self.col);

        let ch = match self.peek() {
            Some(ch) => ch,
            None => {
                return Token {
                    kind: TokenKind::Eof,
                    text: String::new(),
                    line,
                    col,
                }
            }
        };

        if is_ident_start(ch) {
            return self.scan_ident(line, col);
        }
        if ch.is_ascii_digit() || (ch == '.' && self.peek_second().is_some_and(|c| c.is_ascii_digit())) {
            return self.scan_number(line, col);
        }

        self.next();
        Token {
            kind: TokenKind::Char(ch),
            text: ch.to_string(),
            line,
            col,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next();
        }
    }

    /// The character after the next one, used to distinguish a float like
    /// `.5` from a bare `.` punctuation token.
    fn peek_second(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    fn scan_ident(&mut self, line: usize, col: usize) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if !is_ident_continue(ch) {
                break;
            }
            text.push(ch);
            self.next();
        }
        Token {
            kind: TokenKind::Ident,
            text,
            line,
            col,
        }
    }

    /// Scan an integer or float literal. A digit run followed by `.` becomes
    /// a float and consumes a trailing digit run (which may be empty, so
    /// `1.` is a float). A leading `.` is only entered when a digit follows.
    fn scan_number(&mut self, line: usize, col: usize) -> Token {
        let mut text = String::new();
        let mut kind = TokenKind::Int;

        if self.peek() == Some('.') {
            kind = TokenKind::Float;
            text.push('.');
            self.next();
        }
        self.scan_digits(&mut text);
        if kind == TokenKind::Int && self.peek() == Some('.') {
            kind = TokenKind::Float;
            text.push('.');
            self.next();
            self.scan_digits(&mut text);
        }

        Token {
            kind,
            text,
            line,
            col,
        }
    }

    fn scan_digits(&mut self, text: &mut String) {
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.next();
        }
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_ident_continue(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut s = Scanner::new(input);
        let mut out = Vec::new();
        loop {
            let tok = s.scan();
            let done = tok.kind == TokenKind::Eof;
            out.push(tok.kind);
            if done {
                return out;
            }
        }
    }

    #[test]
    fn test_ident() {
        let mut s = Scanner::new("required");
        let tok = s.scan();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.text, "required");
        assert_eq!((tok.line, tok.col), (1, 1));
    }

    #[test]
    fn test_ident_with_underscore_and_digits() {
        let mut s = Scanner::new("_min_1");
        let tok = s.scan();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!(tok.text, "_min_1");
    }

    #[test]
    fn test_int_and_float() {
        let mut s = Scanner::new("10 1.5 1. .5");
        let tok = s.scan();
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Int, "10"));
        let tok = s.scan();
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Float, "1.5"));
        let tok = s.scan();
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Float, "1."));
        let tok = s.scan();
        assert_eq!((tok.kind, tok.text.as_str()), (TokenKind::Float, ".5"));
        assert_eq!(s.scan().kind, TokenKind::Eof);
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            kinds("(=,)"),
            vec![
                TokenKind::Char('('),
                TokenKind::Char('='),
                TokenKind::Char(','),
                TokenKind::Char(')'),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_whitespace_skipped_by_scan() {
        let mut s = Scanner::new("  \n  max");
        let tok = s.scan();
        assert_eq!(tok.kind, TokenKind::Ident);
        assert_eq!((tok.line, tok.col), (2, 3));
    }

    #[test]
    fn test_raw_peek_and_next_keep_whitespace() {
        let mut s = Scanner::new("a =1");
        assert_eq!(s.scan().text, "a");
        assert_eq!(s.peek(), Some(' '));
        assert_eq!(s.next(), Some(' '));
        assert_eq!(s.next(), Some('='));
    }

    #[test]
    fn test_position_tracking_across_newlines() {
        let mut s = Scanner::new("a\nbc");
        s.next();
        assert_eq!(s.pos(), (1, 2));
        s.next();
        assert_eq!(s.pos(), (2, 1));
        s.next();
        assert_eq!(s.pos(), (2, 2));
    }

    #[test]
    fn test_eof_token() {
        let mut s = Scanner::new("");
        let tok = s.scan();
        assert_eq!(tok.kind, TokenKind::Eof);
        assert_eq!(tok.text, "");
        assert_eq!((tok.line, tok.col), (1, 1));
    }

    #[test]
    fn test_quote_is_plain_punctuation() {
        let mut s = Scanner::new("'ab'");
        assert_eq!(s.scan().kind, TokenKind::Char('\''));
        assert_eq!(s.scan().kind, TokenKind::Ident);
        assert_eq!(s.scan().kind, TokenKind::Char('\''));
    }
}
