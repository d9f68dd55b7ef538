//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the node to simplify as an argument, and
//! returns `Some(node)` with the replacement if the rule applies, or `None` if it does not. Rules
//! only look at the node and its direct children, which must already be simplified.

pub mod fold;
pub mod identity;

use symdiff_parser::tree::{Node, OpKind};
use super::step::Step;
use crate::step_collector::StepCollector;

/// If the node is an operator of the given kind, calls the given transformation function with the
/// left and right children.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_operator(
    node: &Node,
    kind: OpKind,
    f: impl Fn(&Node, &Node) -> Option<Node>,
) -> Option<Node> {
    match node {
        Node::Operator(target, left, right) if *target == kind => f(&**left, &**right),
        _ => None,
    }
}

/// If the node is an operator with exactly one constant child, calls the given transformation
/// function with the left and right children.
pub(crate) fn do_one_constant(
    node: &Node,
    kind: OpKind,
    f: impl Fn(&Node, &Node) -> Option<Node>,
) -> Option<Node> {
    do_operator(node, kind, |left, right| {
        if left.is_constant() != right.is_constant() {
            f(left, right)
        } else {
            None
        }
    })
}

/// Applies all rules, constant folding first.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    fold::all(node, step_collector)
        .or_else(|| identity::all(node, step_collector))
}
