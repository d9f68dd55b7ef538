//! Recursive-descent parser producing expression trees.
//!
//! The grammar, from lowest to highest precedence:
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := power (('*' | '/') power)*
//! power := atom ('^' atom)*
//! atom  := '(' expr ')' | number | letter | function '(' expr ')' | '-' atom
//! ```
//!
//! Letters become variables (lowercased), and `function` is one of `sin`, `cos` or `ln`. A minus
//! sign directly in front of a number produces a negative constant; in front of anything else it
//! produces `-1 * atom`. Every binary operator is left-associative, including `^`.
//!
//! The parser never backtracks, and on failure it returns an error pointing at the offending part
//! of the source instead of a partial tree.

pub mod error;
mod expr;

use error::{kind, Error};
use crate::{tokenizer::{tokenize_complete, Token, TokenKind}, tree::Node};
use symdiff_error::ErrorKind;
use std::ops::Range;

/// Parses a complete expression from the given source.
pub fn parse(source: &str) -> Result<Node, Error> {
    Parser::new(source).try_parse_full()
}

/// A parser over the tokens of one source string.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current non-whitespace token, or the end of the source code if
    /// there is none.
    pub fn span(&self) -> Range<usize> {
        self.peek().map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the next non-whitespace token without moving the cursor.
    pub fn peek(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..].iter().find(|token| !token.is_whitespace())
    }

    /// Returns the kind of the next non-whitespace token without moving the cursor.
    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        while self.cursor < self.tokens.len() {
            let token = &self.tokens[self.cursor];
            self.cursor += 1;
            if !token.is_whitespace() {
                // cloning is cheap: only Range<_> is cloned
                return Ok(token.clone());
            }
        }

        Err(self.error(kind::UnexpectedEof))
    }

    /// Consumes the next token if it has the given kind.
    pub fn next_if(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.peek_kind() == Some(kind) {
            self.next_token().ok()
        } else {
            None
        }
    }

    /// Parses one expression. All the tokens must be consumed by the parser; if not, an error is
    /// returned.
    pub fn try_parse_full(&mut self) -> Result<Node, Error> {
        let value = self.parse_expr()?;
        match self.peek_kind() {
            None => Ok(value),
            Some(TokenKind::CloseParen) => Err(self.error(kind::UnclosedParenthesis { opening: false })),
            Some(_) => {
                let span = self.span().start..self.eof_span().end;
                Err(Error::new(vec![span], kind::ExpectedEof))
            },
        }
    }
}
