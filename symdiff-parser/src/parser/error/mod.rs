pub mod kind;

pub use symdiff_error::Error;

/// Returns true if the error was produced by the parser, that is, if it is a syntax error.
pub fn is_syntax_error(err: &Error) -> bool {
    err.is::<kind::UnexpectedEof>()
        || err.is::<kind::ExpectedEof>()
        || err.is::<kind::UnexpectedToken>()
        || err.is::<kind::UnclosedParenthesis>()
        || err.is::<kind::UnknownName>()
        || err.is::<kind::InvalidNumber>()
        || err.is::<kind::MissingFunctionArgument>()
}
