//! Numeric evaluation of expression trees.

pub mod error;

use symdiff_parser::tree::{approx_eq, Node, OpKind};
use tracing::trace;
use error::{DivisionByZero, Error, LogarithmOfZero};

/// The evaluation context: which variable is bound, and to what value.
///
/// Any other variable evaluates to `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ctxt {
    /// The bound variable.
    pub variable: char,

    /// The value substituted for the bound variable.
    pub value: f64,
}

impl Ctxt {
    /// Creates a context binding `variable` to `value`.
    pub fn new(variable: char, value: f64) -> Self {
        Self { variable, value }
    }

    /// Returns the value of the given variable.
    pub fn get_var(&self, identifier: char) -> f64 {
        if identifier == self.variable {
            self.value
        } else {
            0.0
        }
    }
}

impl Default for Ctxt {
    fn default() -> Self {
        Self::new('x', 0.0)
    }
}

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using the default context, where `x = 0`.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Default::default())
    }
}

impl Eval for Node {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let (kind, left, right) = match self {
            Node::Constant(value) => return Ok(*value),
            Node::Variable(identifier) => return Ok(ctxt.get_var(*identifier)),
            Node::Operator(kind, left, right) => (*kind, left, right),
        };

        // unary operators ignore their placeholder left child
        let lhs = if kind.is_unary() { 0.0 } else { left.eval(ctxt)? };
        let rhs = right.eval(ctxt)?;

        let value = match kind {
            OpKind::Add => lhs + rhs,
            OpKind::Sub => lhs - rhs,
            OpKind::Mul => lhs * rhs,
            OpKind::Div => {
                if approx_eq(rhs, 0.0) {
                    return Err(Error::detached(DivisionByZero {
                        denominator: right.to_string(),
                    }));
                }
                lhs / rhs
            },
            OpKind::Pow => {
                // a negative power of zero is a division by zero in disguise
                if approx_eq(lhs, 0.0) && rhs < 0.0 {
                    return Err(Error::detached(DivisionByZero {
                        denominator: left.to_string(),
                    }));
                }
                lhs.powf(rhs)
            },
            OpKind::Sin => rhs.sin(),
            OpKind::Cos => rhs.cos(),
            OpKind::Ln => {
                if approx_eq(rhs, 0.0) {
                    return Err(Error::detached(LogarithmOfZero {
                        argument: right.to_string(),
                    }));
                }
                rhs.ln()
            },
        };
        trace!(node = %self, value, "evaluated");
        Ok(value)
    }
}

/// Evaluates the expression with `variable` bound to `x`.
///
/// ```
/// use symdiff_compute::evaluate;
/// use symdiff_parser::parser::parse;
///
/// let expr = parse("x^2 + 3*x").unwrap();
/// assert_eq!(evaluate(&expr, 'x', 2.0).unwrap(), 10.0);
/// ```
pub fn evaluate(node: &Node, variable: char, x: f64) -> Result<f64, Error> {
    node.eval(&Ctxt::new(variable, x))
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use symdiff_parser::{parser::parse, tree::EPSILON};
    use super::*;

    fn eval_str(source: &str, x: f64) -> Result<f64, Error> {
        evaluate(&parse(source).unwrap(), 'x', x)
    }

    #[test]
    fn constants() {
        assert_eq!(eval_str("(2)+(3)", 0.0).unwrap(), 5.0);
        assert_eq!(parse("2 * 3 - 1").unwrap().eval_default().unwrap(), 5.0);
    }

    #[test]
    fn bound_variable() {
        assert_eq!(eval_str("x^2 + 3*x", 5.0).unwrap(), 40.0);
        assert_eq!(eval_str("x / 4", -2.0).unwrap(), -0.5);
    }

    #[test]
    fn other_variables_are_zero() {
        assert_eq!(eval_str("y + 1", 5.0).unwrap(), 1.0);
        assert_eq!(evaluate(&parse("y + 1").unwrap(), 'y', 5.0).unwrap(), 6.0);
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(eval_str("sin(x)", std::f64::consts::FRAC_PI_2).unwrap(), 1.0, EPSILON);
        assert_float_absolute_eq!(eval_str("cos(x)", 0.0).unwrap(), 1.0, EPSILON);
        assert_float_absolute_eq!(eval_str("ln(x)", std::f64::consts::E).unwrap(), 1.0, EPSILON);
        assert_float_absolute_eq!(eval_str("2^x", 0.5).unwrap(), std::f64::consts::SQRT_2, EPSILON);
    }

    #[test]
    fn function_ignores_placeholder() {
        // a garbage left child does not affect the result
        let node = Node::Operator(OpKind::Sin, Box::new(Node::constant(99.0)), Box::new(Node::constant(0.0)));
        assert_eq!(node.eval_default().unwrap(), 0.0);
    }

    #[test]
    fn division_by_zero() {
        let node = Node::constant(1.0) / Node::constant(0.0);
        let err = node.eval_default().unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&DivisionByZero { denominator: "0".to_string() }));

        let err = eval_str("1 / (x - 2)", 2.0).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert!(eval_str("1 / (x - 2)", 2.5).is_ok());
    }

    #[test]
    fn nearly_zero_denominator() {
        assert!(eval_str("1 / x", 1e-9).unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn negative_power_of_zero() {
        let err = eval_str("x ^ -1", 0.0).unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&DivisionByZero { denominator: "x".to_string() }));
        assert!(eval_str("(x - 1) ^ (0 - 2)", 1.0).unwrap_err().is::<DivisionByZero>());

        assert_eq!(eval_str("x ^ 2", 0.0).unwrap(), 0.0);
        assert_eq!(eval_str("x ^ 0", 0.0).unwrap(), 1.0);
        assert_eq!(eval_str("x ^ -1", 4.0).unwrap(), 0.25);
    }

    #[test]
    fn logarithm_of_zero() {
        let err = eval_str("ln(x)", 0.0).unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&LogarithmOfZero { argument: "x".to_string() }));
        assert!(eval_str("ln(x * 2)", 1e-9).unwrap_err().is::<LogarithmOfZero>());
        assert_eq!(eval_str("ln(x)", 1.0).unwrap(), 0.0);
    }
}
