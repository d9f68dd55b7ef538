//! In-place simplification of expression trees.
//!
//! Simplification runs bottom-up: both children of an operator node are simplified first, then
//! the node itself is rewritten by at most one of the [`rules`]:
//!
//! - [`rules::fold`] replaces an operator with two constant children by its value, where that
//!   value is exact.
//! - [`rules::identity`] removes operators with exactly one constant child that is an identity or
//!   absorbing element (`x+0`, `x*1`, `x*0`, `x^1`, ...).
//!
//! Every rule returns either a constant or one of the node's (already simplified) children, so a
//! single pass reaches a fixed point: simplifying a simplified tree changes nothing.
//!
//! ```
//! use symdiff_compute::simplify::{simplify_with_steps, step::Step};
//! use symdiff_parser::{parser::parse, tree::Node};
//!
//! let mut expr = parse("(2+3)*x^1").unwrap();
//! let steps = simplify_with_steps(&mut expr);
//!
//! assert_eq!(expr, Node::constant(5.0) * Node::variable('x'));
//! assert_eq!(steps, vec![Step::FoldAdd, Step::PowerOne]);
//! ```

pub mod rules;
pub mod step;

use symdiff_parser::tree::Node;
use step::Step;
use crate::step_collector::StepCollector;

/// Simplifies the tree in place, reporting every rule applied to the given step collector, in
/// the order they were applied.
pub fn simplify_with(node: &mut Node, step_collector: &mut dyn StepCollector<Step>) {
    if let Node::Operator(_, left, right) = node {
        simplify_with(left, step_collector);
        simplify_with(right, step_collector);
    }

    if let Some(simplified) = rules::all(node, step_collector) {
        *node = simplified;
    }
}

/// Simplifies the tree in place.
pub fn simplify(node: &mut Node) {
    simplify_with(node, &mut ());
}

/// Simplifies the tree in place, returning the steps taken.
pub fn simplify_with_steps(node: &mut Node) -> Vec<Step> {
    let mut steps = Vec::new();
    simplify_with(node, &mut steps);
    steps
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use symdiff_parser::{parser::parse, tree::OpKind};
    use super::*;

    fn x() -> Node {
        Node::variable('x')
    }

    fn c(value: f64) -> Node {
        Node::constant(value)
    }

    fn simplified(source: &str) -> Node {
        let mut node = parse(source).unwrap();
        simplify(&mut node);
        node
    }

    #[test]
    fn folds_parsed_constants() {
        assert_eq!(simplified("(2)+(3)"), c(5.0));
        assert_eq!(simplified("2 * 3 ^ 2 - 1"), c(17.0));
    }

    #[test]
    fn multiply_by_one_and_zero() {
        let mut node = c(1.0) * x();
        simplify(&mut node);
        assert_eq!(node, x());

        let mut node = c(0.0) * x();
        simplify(&mut node);
        assert_eq!(node, c(0.0));
    }

    #[test]
    fn cascades_upwards() {
        // x*(0*y) -> x*0 -> 0
        assert_eq!(simplified("x * (0 * y) + 1"), c(1.0));
        assert_eq!(simplified("(x - 0) ^ (3 - 2)"), x());
        assert_eq!(simplified("ln(2 - 1) * x"), c(0.0));
    }

    #[test]
    fn leaves_inexact_values() {
        assert_eq!(simplified("1 / 3"), c(1.0) / c(3.0));
        assert_eq!(simplified("sin(0)"), c(0.0).sin());
        assert_eq!(simplified("0 - x"), c(0.0) - x());
        assert_eq!(simplified("0.00000005 / 1"), c(5e-8) / c(1.0));
    }

    #[test]
    fn overflowing_constants_stay_unfolded() {
        let node = simplified("1e308 * 10 + x");
        assert_eq!(node, (c(1e308) * c(10.0)) + x());
        assert_eq!(parse(&node.to_string()).unwrap(), node);

        let node = simplified("1e308 * 10 - 1e308 * 10");
        assert!(node.as_constant().is_none());
        assert_eq!(parse(&node.to_string()).unwrap(), node);
    }

    #[test]
    fn steps_in_application_order() {
        let mut node = parse("(x * 1) + (2 - 2)").unwrap();
        let steps = simplify_with_steps(&mut node);
        assert_eq!(node, x());
        assert_eq!(steps, vec![Step::MultiplyOne, Step::FoldSub, Step::AddZero]);
    }

    #[test]
    fn leaves_are_untouched() {
        let mut node = x();
        assert!(simplify_with_steps(&mut node).is_empty());
        assert_eq!(node, x());
    }

    fn arb_node() -> impl Strategy<Value = Node> {
        let leaf = prop_oneof![
            prop::sample::select(vec![-2.0, -1.0, 0.0, 0.5, 1.0, 2.0, 3.0]).prop_map(Node::constant),
            prop::sample::select(vec!['x', 'y']).prop_map(Node::variable),
        ];
        leaf.prop_recursive(6, 64, 2, |inner| {
            (prop::sample::select(OpKind::ALL.to_vec()), inner.clone(), inner)
                .prop_map(|(kind, left, right)| if kind.is_unary() {
                    Node::unary(kind, right)
                } else {
                    Node::op(kind, left, right)
                })
        })
    }

    proptest! {
        #[test]
        fn idempotent(node in arb_node()) {
            let mut once = node;
            simplify(&mut once);
            let mut twice = once.clone();
            let mut applied = 0usize;
            simplify_with(&mut twice, &mut applied);
            prop_assert_eq!(&twice, &once);
            prop_assert_eq!(applied, 0);
        }

        #[test]
        fn never_grows(node in arb_node()) {
            let mut simplified = node.clone();
            simplify(&mut simplified);
            prop_assert!(simplified.size() <= node.size());
        }

        #[test]
        fn result_parses_back(node in arb_node()) {
            let mut simplified = node;
            simplify(&mut simplified);
            let source = simplified.to_string();
            prop_assert_eq!(parse(&source).ok(), Some(simplified), "source: {}", source);
        }
    }
}
