//! Identity elimination: operators with one constant operand that leaves the other operand
//! unchanged (`x+0`, `x*1`) or fixes the result (`x*0`, `x^0`) are removed.
//!
//! These rules only run when exactly one of the two children is a constant; nodes with two
//! constant children are the business of [`fold`](super::fold).

use symdiff_parser::tree::{Node, OpKind};
use tracing::debug;
use crate::{
    simplify::{rules::do_one_constant, step::Step},
    step_collector::StepCollector,
};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Add, |left, right| {
        if left.is_constant_near(0.0) {
            Some(right.clone())
        } else if right.is_constant_near(0.0) {
            Some(left.clone())
        } else {
            None
        }
    })?;
    step_collector.push(Step::AddZero);
    Some(opt)
}

/// `a-0 = a`
///
/// `0-a` is kept, since it is not `a`.
pub fn sub_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Sub, |left, right| {
        right.is_constant_near(0.0).then(|| left.clone())
    })?;
    step_collector.push(Step::SubZero);
    Some(opt)
}

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Mul, |left, right| {
        (left.is_constant_near(0.0) || right.is_constant_near(0.0))
            .then(|| Node::constant(0.0))
    })?;
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Mul, |left, right| {
        if left.is_constant_near(1.0) {
            Some(right.clone())
        } else if right.is_constant_near(1.0) {
            Some(left.clone())
        } else {
            None
        }
    })?;
    step_collector.push(Step::MultiplyOne);
    Some(opt)
}

/// `a/1 = a`
pub fn divide_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Div, |left, right| {
        right.is_constant_near(1.0).then(|| left.clone())
    })?;
    step_collector.push(Step::DivideOne);
    Some(opt)
}

/// `0/a = 0`
pub fn divide_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Div, |left, _| {
        left.is_constant_near(0.0).then(|| Node::constant(0.0))
    })?;
    step_collector.push(Step::DivideZero);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Pow, |left, right| {
        right.is_constant_near(1.0).then(|| left.clone())
    })?;
    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `a^0 = 1`
pub fn power_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Pow, |_, right| {
        right.is_constant_near(0.0).then(|| Node::constant(1.0))
    })?;
    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Pow, |left, _| {
        left.is_constant_near(1.0).then(|| Node::constant(1.0))
    })?;
    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// `0^a = 0`
pub fn power_zero_left(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_one_constant(node, OpKind::Pow, |left, _| {
        left.is_constant_near(0.0).then(|| Node::constant(0.0))
    })?;
    step_collector.push(Step::PowerZeroLeft);
    Some(opt)
}

/// Applies all identity elimination rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let reduced = add_zero(node, step_collector)
        .or_else(|| sub_zero(node, step_collector))
        .or_else(|| multiply_zero(node, step_collector))
        .or_else(|| multiply_one(node, step_collector))
        .or_else(|| divide_one(node, step_collector))
        .or_else(|| divide_zero(node, step_collector))
        .or_else(|| power_one(node, step_collector))
        .or_else(|| power_zero(node, step_collector))
        .or_else(|| power_one_left(node, step_collector))
        .or_else(|| power_zero_left(node, step_collector))?;
    debug!(from = %node, to = %reduced, "removed identity");
    Some(reduced)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn x() -> Node {
        Node::variable('x')
    }

    fn c(value: f64) -> Node {
        Node::constant(value)
    }

    fn reduce(node: &Node) -> (Option<Node>, Vec<Step>) {
        let mut steps = Vec::new();
        let reduced = all(node, &mut steps);
        (reduced, steps)
    }

    #[test]
    fn addition() {
        assert_eq!(reduce(&(c(0.0) + x())), (Some(x()), vec![Step::AddZero]));
        assert_eq!(reduce(&(x() + c(1e-9))), (Some(x()), vec![Step::AddZero]));
        assert_eq!(reduce(&(x() + c(1.0))).0, None);
    }

    #[test]
    fn subtraction() {
        assert_eq!(reduce(&(x() - c(0.0))), (Some(x()), vec![Step::SubZero]));
        assert_eq!(reduce(&(c(0.0) - x())).0, None);
    }

    #[test]
    fn multiplication() {
        assert_eq!(reduce(&(c(1.0) * x())), (Some(x()), vec![Step::MultiplyOne]));
        assert_eq!(reduce(&(x() * c(1.0))), (Some(x()), vec![Step::MultiplyOne]));
        assert_eq!(reduce(&(c(0.0) * x())), (Some(c(0.0)), vec![Step::MultiplyZero]));
        assert_eq!(reduce(&(x().sin() * c(0.0))), (Some(c(0.0)), vec![Step::MultiplyZero]));
        assert_eq!(reduce(&(c(-1.0) * x())).0, None);
    }

    #[test]
    fn division() {
        assert_eq!(reduce(&(x() / c(1.0))), (Some(x()), vec![Step::DivideOne]));
        assert_eq!(reduce(&(c(0.0) / x())), (Some(c(0.0)), vec![Step::DivideZero]));
        assert_eq!(reduce(&(c(1.0) / x())).0, None);
    }

    #[test]
    fn power() {
        assert_eq!(reduce(&x().pow(c(1.0))), (Some(x()), vec![Step::PowerOne]));
        assert_eq!(reduce(&x().pow(c(0.0))), (Some(c(1.0)), vec![Step::PowerZero]));
        assert_eq!(reduce(&c(1.0).pow(x())), (Some(c(1.0)), vec![Step::PowerOneLeft]));
        assert_eq!(reduce(&c(0.0).pow(x())), (Some(c(0.0)), vec![Step::PowerZeroLeft]));
    }

    #[test]
    fn functions_untouched() {
        assert_eq!(reduce(&x().sin()).0, None);
        assert_eq!(reduce(&x().ln()).0, None);
    }
}
