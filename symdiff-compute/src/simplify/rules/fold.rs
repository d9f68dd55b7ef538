//! Constant folding: operators whose operands are all constants are replaced by their value.
//!
//! Folding is skipped whenever the value would be inexact or ill-defined, so that the simplified
//! tree does not pick up rounding artifacts such as `0.333333` in place of `1/3`, nor constants
//! like `inf` that have no source notation.

use symdiff_parser::tree::{approx_eq, Node, OpKind};
use tracing::debug;
use crate::{
    simplify::{rules::do_operator, step::Step},
    step_collector::StepCollector,
};

/// If the node is an operator of the given kind with two constant children, calls the given
/// function with their values.
fn do_constants(
    node: &Node,
    kind: OpKind,
    f: impl Fn(f64, f64) -> Option<f64>,
) -> Option<Node> {
    do_operator(node, kind, |left, right| {
        let value = f(left.as_constant()?, right.as_constant()?)?;
        value.is_finite().then(|| Node::constant(value))
    })
}

/// Returns the nearest integer if `value` is within tolerance of one.
fn near_integer(value: f64) -> Option<f64> {
    let rounded = value.round();
    approx_eq(value, rounded).then_some(rounded)
}

/// `2+3 = 5`
pub fn fold_add(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_constants(node, OpKind::Add, |a, b| Some(a + b))?;
    step_collector.push(Step::FoldAdd);
    Some(opt)
}

/// `5-3 = 2`
pub fn fold_sub(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_constants(node, OpKind::Sub, |a, b| Some(a - b))?;
    step_collector.push(Step::FoldSub);
    Some(opt)
}

/// `2*3 = 6`
pub fn fold_mul(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_constants(node, OpKind::Mul, |a, b| Some(a * b))?;
    step_collector.push(Step::FoldMul);
    Some(opt)
}

/// `6/3 = 2`
///
/// `1/3`, `5e-8/1` and `x/0` are left alone: only exactly integral quotients are folded.
pub fn fold_div(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_constants(node, OpKind::Div, |a, b| {
        if approx_eq(b, 0.0) {
            return None;
        }
        let quotient = a / b;
        (quotient.fract() == 0.0).then_some(quotient)
    })?;
    step_collector.push(Step::FoldDiv);
    Some(opt)
}

/// `2^3 = 8`
///
/// Only integral exponents are folded.
pub fn fold_pow(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_constants(node, OpKind::Pow, |base, exponent| {
        Some(base.powf(near_integer(exponent)?))
    })?;
    step_collector.push(Step::FoldPow);
    Some(opt)
}

/// `ln(1) = 0`
pub fn fold_ln(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_constants(node, OpKind::Ln, |_, operand| {
        approx_eq(operand, 1.0).then_some(0.0)
    })?;
    step_collector.push(Step::FoldLn);
    Some(opt)
}

/// Applies all constant folding rules.
///
/// All constant folding rules will reduce the complexity of the expression.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let folded = fold_add(node, step_collector)
        .or_else(|| fold_sub(node, step_collector))
        .or_else(|| fold_mul(node, step_collector))
        .or_else(|| fold_div(node, step_collector))
        .or_else(|| fold_pow(node, step_collector))
        .or_else(|| fold_ln(node, step_collector))?;
    debug!(from = %node, to = %folded, "folded constants");
    Some(folded)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn c(value: f64) -> Node {
        Node::constant(value)
    }

    fn fold(node: &Node) -> (Option<Node>, Vec<Step>) {
        let mut steps = Vec::new();
        let folded = all(node, &mut steps);
        (folded, steps)
    }

    #[test]
    fn arithmetic() {
        assert_eq!(fold(&(c(2.0) + c(3.0))), (Some(c(5.0)), vec![Step::FoldAdd]));
        assert_eq!(fold(&(c(2.0) - c(3.0))), (Some(c(-1.0)), vec![Step::FoldSub]));
        assert_eq!(fold(&(c(2.0) * c(3.5))), (Some(c(7.0)), vec![Step::FoldMul]));
    }

    #[test]
    fn exact_division_only() {
        assert_eq!(fold(&(c(6.0) / c(3.0))), (Some(c(2.0)), vec![Step::FoldDiv]));
        assert_eq!(fold(&(c(1.0) / c(3.0))).0, None);
        assert_eq!(fold(&(c(1.0) / c(0.0))).0, None);
        assert_eq!(fold(&(c(5e-8) / c(1.0))).0, None);
        assert_eq!(fold(&(c(-4.5) / c(0.5))), (Some(c(-9.0)), vec![Step::FoldDiv]));
    }

    #[test]
    fn overflow_is_not_folded() {
        assert_eq!(fold(&(c(1e308) * c(10.0))).0, None);
        assert_eq!(fold(&(c(1e308) + c(1e308))).0, None);
        assert_eq!(fold(&(c(-1e308) - c(1e308))).0, None);
        assert_eq!(fold(&c(10.0).pow(c(400.0))).0, None);
    }

    #[test]
    fn integral_powers_only() {
        assert_eq!(fold(&c(2.0).pow(c(3.0))), (Some(c(8.0)), vec![Step::FoldPow]));
        assert_eq!(fold(&c(4.0).pow(c(-1.0))), (Some(c(0.25)), vec![Step::FoldPow]));
        assert_eq!(fold(&c(2.0).pow(c(0.5))).0, None);
        assert_eq!(fold(&c(0.0).pow(c(-1.0))).0, None);
    }

    #[test]
    fn functions() {
        assert_eq!(fold(&c(1.0).ln()), (Some(c(0.0)), vec![Step::FoldLn]));
        assert_eq!(fold(&c(2.0).ln()).0, None);
        assert_eq!(fold(&c(0.0).sin()).0, None);
        assert_eq!(fold(&c(0.0).cos()).0, None);
    }

    #[test]
    fn needs_two_constants() {
        let (folded, steps) = fold(&(Node::variable('x') + c(3.0)));
        assert_eq!(folded, None);
        assert!(steps.is_empty());
    }
}
