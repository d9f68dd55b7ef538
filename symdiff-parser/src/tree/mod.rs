//! The binary expression tree shared by every `symdiff` component.
//!
//! An expression is a tree of [`Node`]s. Leaves are [`Node::Constant`]s and [`Node::Variable`]s;
//! every inner node is a [`Node::Operator`] that owns exactly two children. Unary operators
//! (`sin`, `cos`, `ln`) keep the two-child shape: their left child is a dummy `Constant(0)` and
//! the operand is the right child.
//!
//! Each node exclusively owns its children, so a tree can never contain shared subtrees or
//! cycles. Reusing a subtree in several places requires a deep copy, which is what [`Clone`] does.
//!
//! The arithmetic operators are overloaded to build trees:
//!
//! ```
//! use symdiff_parser::tree::{Node, OpKind};
//!
//! let x = Node::variable('x');
//! let expr = Node::constant(2.0) * x.clone() + x.sin();
//!
//! assert_eq!(expr.kind(), Some(OpKind::Add));
//! assert_eq!(expr.to_string(), "((2)*(x))+(sin(x))");
//! ```

pub mod fmt;
pub mod raw;

use std::ops::{Add, Div, Mul, Neg, Sub};

/// Tolerance used whenever two `f64` values in an expression are compared.
pub const EPSILON: f64 = 1e-7;

/// Returns true if `a` and `b` differ by less than [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Lowercases a single identifier character. Characters whose lowercase form is more than one
/// character (such as `İ`) are kept as they are.
pub fn lowercase_identifier(identifier: char) -> char {
    let mut lower = identifier.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(c), None) => c,
        _ => identifier,
    }
}

/// The precedence rank of an operator, used to decide where parentheses are needed when
/// rendering. Ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Addition and subtraction.
    Additive = 0,

    /// Multiplication and division.
    Multiplicative = 1,

    /// `sin`, `cos` and `ln`.
    Function = 2,

    /// Exponentiation.
    Power = 3,
}

/// The kind of an [`Node::Operator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Sin,
    Cos,
    Ln,
}

impl OpKind {
    /// All operator kinds.
    pub const ALL: [OpKind; 8] = [
        OpKind::Add,
        OpKind::Sub,
        OpKind::Mul,
        OpKind::Div,
        OpKind::Pow,
        OpKind::Sin,
        OpKind::Cos,
        OpKind::Ln,
    ];

    /// Returns the precedence rank of the operator.
    pub fn priority(self) -> Priority {
        match self {
            OpKind::Add | OpKind::Sub => Priority::Additive,
            OpKind::Mul | OpKind::Div => Priority::Multiplicative,
            OpKind::Sin | OpKind::Cos | OpKind::Ln => Priority::Function,
            OpKind::Pow => Priority::Power,
        }
    }

    /// Returns true if the operator only uses its right operand.
    pub fn is_unary(self) -> bool {
        matches!(self, OpKind::Sin | OpKind::Cos | OpKind::Ln)
    }

    /// Returns the single-character code of the operator. Binary operators use their infix
    /// symbol; functions use their first letter.
    pub fn code(self) -> char {
        match self {
            OpKind::Add => '+',
            OpKind::Sub => '-',
            OpKind::Mul => '*',
            OpKind::Div => '/',
            OpKind::Pow => '^',
            OpKind::Sin => 's',
            OpKind::Cos => 'c',
            OpKind::Ln => 'l',
        }
    }

    /// Returns the operator with the given code, as produced by [`OpKind::code`].
    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }

    /// Returns the function name of a unary operator.
    pub fn function_name(self) -> Option<&'static str> {
        match self {
            OpKind::Sin => Some("sin"),
            OpKind::Cos => Some("cos"),
            OpKind::Ln => Some("ln"),
            _ => None,
        }
    }

    /// Returns the unary operator with the given function name. The name must be lowercase.
    pub fn from_function_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(OpKind::Sin),
            "cos" => Some(OpKind::Cos),
            "ln" => Some(OpKind::Ln),
            _ => None,
        }
    }
}

/// A node of an expression tree. See the [module-level documentation](self) for details.
///
/// [`PartialEq`] is structural equality: same shape, same operator kinds, same identifiers, and
/// constants that compare equal as `f64`.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A number, such as `2` or `0.5`.
    Constant(f64),

    /// A single-letter variable, such as `x`. Identifiers are always lowercase.
    Variable(char),

    /// An operator applied to a left and a right operand.
    Operator(OpKind, Box<Node>, Box<Node>),
}

impl Default for Node {
    fn default() -> Self {
        Node::Constant(0.0)
    }
}

impl Node {
    /// Creates a [`Node::Constant`].
    pub fn constant(value: f64) -> Self {
        Node::Constant(value)
    }

    /// Creates a [`Node::Variable`]. The identifier is normalized to lowercase.
    pub fn variable(identifier: char) -> Self {
        Node::Variable(lowercase_identifier(identifier))
    }

    /// Creates a [`Node::Operator`] from its kind and both children.
    pub fn op(kind: OpKind, left: Node, right: Node) -> Self {
        Node::Operator(kind, Box::new(left), Box::new(right))
    }

    /// Creates a unary operator node, with the dummy left operand.
    pub fn unary(kind: OpKind, operand: Node) -> Self {
        debug_assert!(kind.is_unary(), "{:?} is not a unary operator", kind);
        Node::op(kind, Node::default(), operand)
    }

    /// Raises this expression to the given power.
    pub fn pow(self, exponent: Node) -> Self {
        Node::op(OpKind::Pow, self, exponent)
    }

    /// Creates `sin(self)`.
    pub fn sin(self) -> Self {
        Node::unary(OpKind::Sin, self)
    }

    /// Creates `cos(self)`.
    pub fn cos(self) -> Self {
        Node::unary(OpKind::Cos, self)
    }

    /// Creates `ln(self)`.
    pub fn ln(self) -> Self {
        Node::unary(OpKind::Ln, self)
    }

    /// Returns the operator kind, if this is an operator node.
    pub fn kind(&self) -> Option<OpKind> {
        match self {
            Node::Operator(kind, ..) => Some(*kind),
            _ => None,
        }
    }

    /// If the node is a [`Node::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Node::Constant(value) => Some(*value),
            _ => None,
        }
    }

    /// If the node is a [`Node::Variable`], returns its identifier.
    pub fn as_variable(&self) -> Option<char> {
        match self {
            Node::Variable(identifier) => Some(*identifier),
            _ => None,
        }
    }

    /// Returns true if the node is a [`Node::Constant`].
    pub fn is_constant(&self) -> bool {
        matches!(self, Node::Constant(_))
    }

    /// Returns true if the node is a [`Node::Constant`] approximately equal to `value`.
    pub fn is_constant_near(&self, value: f64) -> bool {
        self.as_constant().is_some_and(|c| approx_eq(c, value))
    }

    /// Returns the precedence rank of the node. Leaves bind tighter than any operator, so they
    /// have none.
    pub fn priority(&self) -> Option<Priority> {
        self.kind().map(OpKind::priority)
    }

    /// Moves the tree out of `self`, leaving a `Constant(0)` behind.
    ///
    /// Taking from an already-taken node simply yields another `Constant(0)`.
    pub fn take(&mut self) -> Node {
        std::mem::take(self)
    }

    /// Returns the number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Node::Operator(_, left, right) = node {
                stack.push(left);
                stack.push(right);
            }
        }
        count
    }

    /// Returns the number of levels in the tree. A single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Operator(_, left, right) => 1 + left.depth().max(right.depth()),
            _ => 1,
        }
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Node) -> Node {
        Node::op(OpKind::Add, self, rhs)
    }
}

impl Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Node) -> Node {
        Node::op(OpKind::Sub, self, rhs)
    }
}

impl Mul for Node {
    type Output = Node;

    fn mul(self, rhs: Node) -> Node {
        Node::op(OpKind::Mul, self, rhs)
    }
}

impl Div for Node {
    type Output = Node;

    fn div(self, rhs: Node) -> Node {
        Node::op(OpKind::Div, self, rhs)
    }
}

/// Negation is multiplication by `-1`: `-x` builds `mul(Constant(-1), x)`.
impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Node {
        Node::constant(-1.0) * self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn priorities_are_ordered() {
        assert!(Priority::Additive < Priority::Multiplicative);
        assert!(Priority::Multiplicative < Priority::Function);
        assert!(Priority::Function < Priority::Power);
        assert_eq!(OpKind::Sub.priority() as u8, 0);
        assert_eq!(OpKind::Div.priority() as u8, 1);
        assert_eq!(OpKind::Ln.priority() as u8, 2);
        assert_eq!(OpKind::Pow.priority() as u8, 3);
    }

    #[test]
    fn codes_round_trip() {
        for kind in OpKind::ALL {
            assert_eq!(OpKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(OpKind::from_code('?'), None);
    }

    #[test]
    fn unary_nodes_have_dummy_left() {
        let node = Node::variable('x').cos();
        assert_eq!(node, Node::Operator(
            OpKind::Cos,
            Box::new(Node::Constant(0.0)),
            Box::new(Node::Variable('x')),
        ));
    }

    #[test]
    fn neg_is_multiplication_by_minus_one() {
        assert_eq!(-Node::variable('x'), Node::op(OpKind::Mul, Node::constant(-1.0), Node::variable('x')));
    }

    #[test]
    fn variables_are_lowercase() {
        assert_eq!(Node::variable('X'), Node::Variable('x'));
    }

    #[test]
    fn clone_is_independent() {
        let original = Node::variable('x') + Node::constant(1.0);
        let mut copy = original.clone();
        if let Node::Operator(_, _, right) = &mut copy {
            **right = Node::constant(5.0);
        }
        assert_eq!(original.to_string(), "(x)+(1)");
        assert_eq!(copy.to_string(), "(x)+(5)");
    }

    #[test]
    fn take_is_idempotent() {
        let mut node = Node::variable('x').sin();
        assert_eq!(node.take(), Node::variable('x').sin());
        assert_eq!(node.take(), Node::Constant(0.0));
        assert_eq!(node, Node::Constant(0.0));
    }

    #[test]
    fn unicode_identifiers() {
        assert_eq!(Node::variable('Θ'), Node::Variable('θ'));
        assert_eq!(Node::variable('é'), Node::Variable('é'));
        assert_eq!(lowercase_identifier('İ'), 'İ');
    }

    #[test]
    fn size_and_depth() {
        let node = (Node::variable('x') + Node::constant(1.0)).sin();
        assert_eq!(node.size(), 5);
        assert_eq!(node.depth(), 3);
    }

    #[test]
    fn approximate_comparison() {
        assert!(approx_eq(1.0, 1.0 + 1e-8));
        assert!(!approx_eq(1.0, 1.0 + 1e-6));
        assert!(Node::constant(1e-9).is_constant_near(0.0));
        assert!(!Node::variable('x').is_constant_near(0.0));
    }
}
