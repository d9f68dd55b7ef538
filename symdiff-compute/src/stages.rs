//! Successive derivatives of an expression.

use symdiff_parser::tree::Node;
use tracing::debug;
use crate::{derivative::differentiate, simplify::{simplify_with_steps, step::Step}};

/// One derivative in a sequence of [`Stages`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    /// The order of the derivative, starting at 1.
    pub order: usize,

    /// The simplified derivative.
    pub expr: Node,

    /// The simplification steps that produced [`Stage::expr`] from the raw derivative.
    pub steps: Vec<Step>,
}

/// An infinite iterator over the first, second, third, ... derivatives of an expression, each one
/// simplified before the next is taken.
///
/// ```
/// use symdiff_compute::Stages;
/// use symdiff_parser::{parser::parse, tree::Node};
///
/// let expr = parse("x^3").unwrap();
/// let third = Stages::new(&expr, 'x').nth(2).unwrap();
/// assert_eq!(third.order, 3);
/// assert_eq!(third.expr, Node::constant(6.0));
/// ```
#[derive(Debug, Clone)]
pub struct Stages {
    /// The most recent stage, or the original expression.
    current: Node,

    /// The variable to differentiate with respect to.
    variable: char,

    /// The order of `current`.
    order: usize,
}

impl Stages {
    /// Creates the sequence of derivatives of `expr` with respect to `variable`. The expression is
    /// copied.
    pub fn new(expr: &Node, variable: char) -> Self {
        Self {
            current: expr.clone(),
            variable,
            order: 0,
        }
    }
}

impl Iterator for Stages {
    type Item = Stage;

    fn next(&mut self) -> Option<Self::Item> {
        let mut expr = differentiate(&self.current, self.variable);
        let steps = simplify_with_steps(&mut expr);
        self.order += 1;
        debug!(
            order = self.order,
            derivative = %expr,
            size = expr.size(),
            depth = expr.depth(),
            steps = steps.len(),
            "computed stage",
        );

        self.current = expr.clone();
        Some(Stage { order: self.order, expr, steps })
    }
}

/// Returns the simplified `n`th derivative of `expr` with respect to `variable`. The zeroth
/// derivative is a copy of the expression itself.
pub fn nth_derivative(expr: &Node, variable: char, n: usize) -> Node {
    match n.checked_sub(1) {
        Some(index) => Stages::new(expr, variable)
            .nth(index)
            .map(|stage| stage.expr)
            .unwrap_or_default(),
        None => expr.clone(),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use symdiff_parser::{parser::parse, tree::EPSILON};
    use crate::eval::evaluate;
    use super::*;

    #[test]
    fn first_derivative_of_quadratic() {
        let expr = parse("x^2 + 3*x").unwrap();
        let deriv = nth_derivative(&expr, 'x', 1);

        for x in [0.0, 1.0, 5.0, -3.0] {
            assert_float_absolute_eq!(evaluate(&deriv, 'x', x).unwrap(), 2.0 * x + 3.0, EPSILON);
        }
    }

    #[test]
    fn orders_count_up() {
        let expr = parse("x^4").unwrap();
        let stages = Stages::new(&expr, 'x').take(5).collect::<Vec<_>>();

        assert_eq!(stages.iter().map(|stage| stage.order).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert_eq!(stages[3].expr, Node::constant(24.0));
        assert_eq!(stages[4].expr, Node::constant(0.0));
        assert!(stages[..4].iter().all(|stage| !stage.steps.is_empty()));

        // the derivative of a constant needs no cleanup
        assert!(stages[4].steps.is_empty());
    }

    #[test]
    fn zeroth_derivative_is_a_copy() {
        let expr = parse("sin(x)").unwrap();
        assert_eq!(nth_derivative(&expr, 'x', 0), expr);
    }

    #[test]
    fn trig_cycles() {
        let expr = parse("sin(x)").unwrap();
        let fourth = nth_derivative(&expr, 'x', 4);

        for x in [-1.0, 0.0, 0.7, 2.0] {
            assert_float_absolute_eq!(evaluate(&fourth, 'x', x).unwrap(), x.sin(), EPSILON);
        }
    }

    #[test]
    fn mutating_a_stage_leaves_the_input_alone() {
        let expr = parse("x^2 + 3*x").unwrap();
        let rendered = expr.to_string();

        let mut stage = Stages::new(&expr, 'x').next().unwrap();
        stage.expr = stage.expr.take() * Node::variable('x');
        if let Node::Operator(_, left, _) = &mut stage.expr {
            **left = Node::constant(7.0);
        }

        assert_eq!(expr.to_string(), rendered);
    }
}
