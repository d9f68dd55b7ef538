pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// Input the lexer cannot match becomes a [`TokenKind::Symbol`] token, so the parser reports it
/// like any other unexpected character.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + x",
            [
                (TokenKind::Number, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_tokens(
            "3.14 2. 1e-3 2.5E+4",
            [
                (TokenKind::Number, "3.14"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "1e-3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Number, "2.5E+4"),
            ],
        );
    }

    #[test]
    fn functions_and_symbols() {
        compare_tokens(
            "sin(x)^2/ln(y)*$",
            [
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Exp, "^"),
                (TokenKind::Number, "2"),
                (TokenKind::Div, "/"),
                (TokenKind::Name, "ln"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "y"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Mul, "*"),
                (TokenKind::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn unicode_letters() {
        compare_tokens(
            "θ*sin(φ)+é2",
            [
                (TokenKind::Name, "θ"),
                (TokenKind::Mul, "*"),
                (TokenKind::Name, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "φ"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Add, "+"),
                (TokenKind::Name, "é"),
                (TokenKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn complete_keeps_spans() {
        let tokens = tokenize_complete("(2)-x");
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..1, 1..2, 2..3, 3..4, 4..5]);
        assert_eq!(tokens[3].kind, TokenKind::Sub);
    }
}
