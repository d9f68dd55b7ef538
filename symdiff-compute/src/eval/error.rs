use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;

pub use symdiff_error::Error;

/// A division whose denominator evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this expression"],
    help = format!("the denominator {} is zero at this point", (&self.denominator).fg(EXPR)),
)]
pub struct DivisionByZero {
    /// The denominator, in source notation.
    pub denominator: String,
}

/// A logarithm whose argument evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "logarithm of zero",
    labels = ["this expression"],
    help = format!("the argument {} is zero at this point, and `ln` has no finite value there", (&self.argument).fg(EXPR)),
)]
pub struct LogarithmOfZero {
    /// The argument, in source notation.
    pub argument: String,
}
