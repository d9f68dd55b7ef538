//! Untyped tree layout and the validator that guards conversion into [`Node`].
//!
//! [`Node`] cannot represent an operator with a missing child or a leaf with children. Trees that
//! come from outside the crate (built by hand, or deserialized with the `serde` feature) use the
//! [`RawTree`] / [`RawNode`] layout instead, where every node has optional children and an
//! untyped value, so those mistakes are representable. [`status`] reports them, and converting
//! into a [`Node`] refuses to proceed while the status is not [`Status::OK`].
//!
//! ```
//! use symdiff_parser::tree::{raw::{RawNode, RawTree, Status}, Node};
//!
//! let mut raw = RawTree::from(&(Node::variable('x') + Node::constant(1.0)));
//! assert_eq!(raw.status(), Status::OK);
//!
//! raw.root.as_mut().unwrap().right = None;
//! assert_eq!(raw.status(), Status::INVALID_CONNECTIONS);
//! assert!(Node::try_from(raw).is_err());
//! ```

use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::{Error, EXPR};
use std::{fmt, ops::{BitOr, BitOrAssign}};
use super::{Node, OpKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The variant of a [`RawNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RawKind {
    Operator,
    Variable,
    Constant,
}

/// A node in the untyped layout.
///
/// Which fields are meaningful depends on [`RawNode::kind`]: `value` for constants, `symbol` for
/// variables (the identifier) and operators (the [`OpKind::code`]).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawNode {
    pub kind: RawKind,

    #[cfg_attr(feature = "serde", serde(default))]
    pub value: f64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub symbol: char,

    #[cfg_attr(feature = "serde", serde(default))]
    pub left: Option<Box<RawNode>>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub right: Option<Box<RawNode>>,
}

/// A tree in the untyped layout. The root may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawTree {
    pub root: Option<RawNode>,
}

/// A set of problems found by the validator. The empty set means the tree is valid.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Status(u8);

impl Status {
    /// No problems.
    pub const OK: Status = Status(0);

    /// There was no tree at all.
    pub const NULL_TREE: Status = Status(1 << 0);

    /// The tree had no root node.
    pub const NULL_ROOT: Status = Status(1 << 2);

    /// An operator node was missing a child, or a leaf node had one.
    pub const INVALID_CONNECTIONS: Status = Status(1 << 3);

    const DESCRIPTIONS: [(Status, &'static str); 3] = [
        (Status::NULL_TREE, "tree was missing"),
        (Status::NULL_ROOT, "tree root was missing"),
        (Status::INVALID_CONNECTIONS, "tree had invalid connections"),
    ];

    /// Returns the raw bits of the set.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no problems were found.
    pub fn is_ok(self) -> bool {
        self == Status::OK
    }

    /// Returns true if every problem in `other` is also in `self`.
    pub fn contains(self, other: Status) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns a description of each problem in the set.
    pub fn descriptions(self) -> impl Iterator<Item = &'static str> {
        Self::DESCRIPTIONS
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, description)| description)
    }
}

impl BitOr for Status {
    type Output = Status;

    fn bitor(self, rhs: Status) -> Status {
        Status(self.0 | rhs.0)
    }
}

impl BitOrAssign for Status {
    fn bitor_assign(&mut self, rhs: Status) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status({:#06b})", self.0)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "ok");
        }

        let mut iter = self.descriptions();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for description in iter {
                write!(f, ", {}", description)?;
            }
        }
        Ok(())
    }
}

/// The tree violated a structural invariant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid expression tree: {}", self.status),
    help = format!(
        "every {} node needs both children, and leaves must have none",
        "operator".fg(EXPR),
    ),
)]
pub struct StructuralError {
    /// The problems found by the validator.
    pub status: Status,
}

/// An operator node carried a code that names no operator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown operator code {:?}", self.code),
    help = format!("valid codes are: {}", OpKind::ALL.map(|kind| kind.code().to_string()).join(" ").fg(EXPR)),
)]
pub struct InvalidOperator {
    /// The unrecognized code.
    pub code: char,
}

impl RawNode {
    /// Creates a leaf node holding a constant.
    pub fn constant(value: f64) -> Self {
        Self { kind: RawKind::Constant, value, symbol: '\0', left: None, right: None }
    }

    /// Creates a leaf node holding a variable.
    pub fn variable(identifier: char) -> Self {
        Self { kind: RawKind::Variable, value: 0.0, symbol: identifier, left: None, right: None }
    }

    /// Creates an operator node with the given code and children.
    pub fn operator(code: char, left: Option<RawNode>, right: Option<RawNode>) -> Self {
        Self {
            kind: RawKind::Operator,
            value: 0.0,
            symbol: code,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Validates this node and all of its descendants.
    pub fn status(&self) -> Status {
        let mut status = Status::OK;
        let has_left = self.left.is_some();
        let has_right = self.right.is_some();

        match self.kind {
            RawKind::Operator if !(has_left && has_right) => status |= Status::INVALID_CONNECTIONS,
            RawKind::Variable | RawKind::Constant if has_left || has_right => {
                status |= Status::INVALID_CONNECTIONS
            },
            _ => (),
        }

        for child in [&self.left, &self.right].into_iter().flatten() {
            status |= child.status();
        }

        status
    }
}

impl RawTree {
    /// Validates the whole tree.
    pub fn status(&self) -> Status {
        status(Some(self))
    }
}

/// Validates a tree recursively, reporting every problem found.
pub fn status(tree: Option<&RawTree>) -> Status {
    match tree {
        None => Status::NULL_TREE,
        Some(RawTree { root: None }) => Status::NULL_ROOT,
        Some(RawTree { root: Some(root) }) => root.status(),
    }
}

/// Converts a node that already passed validation.
fn convert(raw: RawNode) -> Result<Node, Error> {
    match raw.kind {
        RawKind::Constant => Ok(Node::constant(raw.value)),
        RawKind::Variable => Ok(Node::variable(raw.symbol)),
        RawKind::Operator => {
            let kind = OpKind::from_code(raw.symbol)
                .ok_or_else(|| Error::detached(InvalidOperator { code: raw.symbol }))?;
            match (raw.left, raw.right) {
                (Some(left), Some(right)) => Ok(Node::op(kind, convert(*left)?, convert(*right)?)),
                _ => Err(Error::detached(StructuralError { status: Status::INVALID_CONNECTIONS })),
            }
        },
    }
}

impl TryFrom<RawTree> for Node {
    type Error = Error;

    fn try_from(tree: RawTree) -> Result<Self, Self::Error> {
        let status = tree.status();
        if !status.is_ok() {
            return Err(Error::detached(StructuralError { status }));
        }

        match tree.root {
            Some(root) => convert(root),
            None => Err(Error::detached(StructuralError { status: Status::NULL_ROOT })),
        }
    }
}

impl From<&Node> for RawNode {
    fn from(node: &Node) -> Self {
        match node {
            Node::Constant(value) => RawNode::constant(*value),
            Node::Variable(identifier) => RawNode::variable(*identifier),
            Node::Operator(kind, left, right) => RawNode::operator(
                kind.code(),
                Some(RawNode::from(&**left)),
                Some(RawNode::from(&**right)),
            ),
        }
    }
}

impl From<&Node> for RawTree {
    fn from(node: &Node) -> Self {
        RawTree { root: Some(RawNode::from(node)) }
    }
}
