//! Symbolic differentiation.
//!
//! The rules below produce the derivative literally, with no cleanup: `d/dx (3*x)` is
//! `0*x + 3*1`. Run the result through [`simplify`](crate::simplify()) to tidy it up.

use symdiff_parser::tree::{Node, OpKind};

/// `(f + g)' = f' + g'`, and likewise for `-`.
fn sum_rule(kind: OpKind, left: &Node, right: &Node, with: char) -> Node {
    Node::op(kind, differentiate(left, with), differentiate(right, with))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(left: &Node, right: &Node, with: char) -> Node {
    differentiate(left, with) * right.clone()
        + left.clone() * differentiate(right, with)
}

/// `(f / g)' = (f' * g - f * g') / g^2`
fn quotient_rule(left: &Node, right: &Node, with: char) -> Node {
    (differentiate(left, with) * right.clone() - left.clone() * differentiate(right, with))
        / right.clone().pow(Node::constant(2.0))
}

/// `(f ^ g)' = f^(g - 1) * (g * f' + f * g' * ln(f))`
///
/// Reduces to the power rule when `g` is constant, and to the exponential rule when `f` is.
fn power_rule(base: &Node, exponent: &Node, with: char) -> Node {
    base.clone().pow(exponent.clone() - Node::constant(1.0))
        * (
            exponent.clone() * differentiate(base, with)
                + base.clone() * differentiate(exponent, with) * base.clone().ln()
        )
}

/// Chain rule for the functions of one argument: `f(g)' = f'(g) * g'`.
fn function_rule(kind: OpKind, arg: &Node, with: char) -> Node {
    let darg = differentiate(arg, with);
    match kind {
        OpKind::Sin => arg.clone().cos() * darg,
        OpKind::Cos => -arg.clone().sin() * darg,
        // `g' / g` is already the chain rule applied to `1 / g`
        _ => darg / arg.clone(),
    }
}

/// Returns the derivative of the given expression with respect to the variable `with`.
///
/// The input is left untouched, and the result does not share any node with it. Variables other
/// than `with` are treated as constants for the duration of the rule that meets them, but are
/// carried into the result unchanged rather than replaced by zero.
///
/// ```
/// use symdiff_compute::differentiate;
/// use symdiff_parser::tree::Node;
///
/// let x = Node::variable('x');
/// let deriv = differentiate(&x.clone().sin(), 'x');
/// assert_eq!(deriv, x.cos() * Node::constant(1.0));
/// ```
pub fn differentiate(f: &Node, with: char) -> Node {
    match f {
        Node::Constant(_) => Node::constant(0.0),
        Node::Variable(identifier) if *identifier == with => Node::constant(1.0),
        Node::Variable(_) => f.clone(),
        Node::Operator(kind, left, right) => match kind {
            OpKind::Add | OpKind::Sub => sum_rule(*kind, left, right, with),
            OpKind::Mul => product_rule(left, right, with),
            OpKind::Div => quotient_rule(left, right, with),
            OpKind::Pow => power_rule(left, right, with),
            OpKind::Sin | OpKind::Cos | OpKind::Ln => function_rule(*kind, right, with),
        },
    }
}
