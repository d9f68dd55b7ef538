use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = format!("operators must be written explicitly, as in {}", "2*x".fg(EXPR)),
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected {}", self.found.describe()),
    labels = [format!(
        "expected {} here",
        self.expected.iter().map(|kind| kind.describe()).collect::<Vec<_>>().join(" or "),
    )],
    help = format!("an operand starts with a number, a letter, a function name, {} or {}", "(".fg(EXPR), "-".fg(EXPR)),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// A name that is neither a single-letter variable nor a known function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown name `{}`", self.name),
    labels = ["this name"],
    help = format!(
        "variables are single letters; the known functions are {}, {} and {}",
        "sin".fg(EXPR),
        "cos".fg(EXPR),
        "ln".fg(EXPR),
    ),
)]
pub struct UnknownName {
    /// The name, lowercased.
    pub name: String,
}

/// A number literal that does not fit in an `f64`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", self.lexeme),
    labels = ["this number"],
    help = "numbers must be finite",
)]
pub struct InvalidNumber {
    /// The literal as written.
    pub lexeme: String,
}

/// A function name that was not followed by its parenthesized argument.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing argument to `{}`", self.name),
    labels = ["this function"],
    help = format!("write the argument in parentheses, as in {}", format!("{}(x)", self.name).fg(EXPR)),
)]
pub struct MissingFunctionArgument {
    /// The name of the function.
    pub name: &'static str,
}
