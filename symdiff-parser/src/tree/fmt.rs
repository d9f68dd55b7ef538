//! Renderers for expression trees.
//!
//! - The [`Display`] implementation of [`Node`] produces the **source notation**: fully
//!   parenthesized infix that the [`Parser`](crate::parser::Parser) reads back into an equal tree.
//! - The [`Latex`] trait produces the **display notation**: LaTeX that only parenthesizes where
//!   the operator [`Priority`] requires it.

use std::fmt::{Display, Formatter, Result};
use super::{Node, OpKind, Priority};

impl Display for Node {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Node::Constant(value) => write!(f, "{}", value),
            Node::Variable(identifier) => write!(f, "{}", identifier),
            Node::Operator(kind, _, right) if kind.is_unary() => {
                // function names always exist for unary operators
                write!(f, "{}({})", kind.function_name().unwrap_or_default(), right)
            },
            Node::Operator(kind, left, right) => write!(f, "({}){}({})", left, kind.code(), right),
        }
    }
}

/// A trait for types that can be formatted as LaTeX.
pub trait Latex {
    /// Format the value as LaTeX.
    fn fmt_latex(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`LatexFormatter`], which implements [`Display`].
    fn as_display(&self) -> LatexFormatter<'_, Self> {
        LatexFormatter(self)
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`Latex`].
pub struct LatexFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for LatexFormatter<'_, T>
where
    T: Latex,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_latex(f)
    }
}

/// Formats `node` surrounded by `\left(` and `\right)` if `paren` is true.
fn fmt_paren(f: &mut Formatter, node: &Node, paren: bool) -> Result {
    if paren {
        write!(f, "\\left(")?;
        node.fmt_latex(f)?;
        write!(f, "\\right)")
    } else {
        node.fmt_latex(f)
    }
}

/// Returns true if the node has a lower priority than `priority`. Leaves never do.
fn binds_looser(node: &Node, priority: Priority) -> bool {
    node.priority().is_some_and(|p| p < priority)
}

/// Returns true if the node is a negative constant.
fn is_negative(node: &Node) -> bool {
    node.as_constant().is_some_and(|value| value.is_sign_negative())
}

/// Returns true if the LaTeX of the node starts with a minus sign, which reads badly after
/// another operator without parentheses (`x+-1`, `1--1\cdot x`).
fn leads_negative(node: &Node) -> bool {
    match node {
        Node::Operator(OpKind::Add | OpKind::Sub, left, _) => leads_negative(left),
        Node::Operator(OpKind::Mul, left, _) => {
            !binds_looser(left, Priority::Multiplicative) && leads_negative(left)
        },
        _ => is_negative(node),
    }
}

impl Latex for Node {
    fn fmt_latex(&self, f: &mut Formatter) -> Result {
        let (kind, left, right) = match self {
            Node::Constant(value) => return write!(f, "{}", value),
            Node::Variable(identifier) => return write!(f, "{}", identifier),
            Node::Operator(kind, left, right) => (*kind, &**left, &**right),
        };

        match kind {
            OpKind::Add => {
                left.fmt_latex(f)?;
                write!(f, "+")?;
                fmt_paren(f, right, leads_negative(right))
            },
            OpKind::Sub => {
                left.fmt_latex(f)?;
                write!(f, "-")?;
                // `a-(b+c)` and `a-(b-c)` need the parentheses, `a-b*c` does not
                fmt_paren(f, right, right.priority() == Some(Priority::Additive) || leads_negative(right))
            },
            OpKind::Mul => {
                fmt_paren(f, left, binds_looser(left, Priority::Multiplicative))?;
                // `3x` instead of `3\cdot x`
                if !(left.is_constant() && right.as_variable().is_some()) {
                    write!(f, "\\cdot ")?;
                }
                fmt_paren(f, right, binds_looser(right, Priority::Multiplicative) || leads_negative(right))
            },
            OpKind::Div => {
                write!(f, "\\frac{{")?;
                left.fmt_latex(f)?;
                write!(f, "}}{{")?;
                right.fmt_latex(f)?;
                write!(f, "}}")
            },
            OpKind::Pow => {
                fmt_paren(f, left, left.kind().is_some() || is_negative(left))?;
                write!(f, "^{{")?;
                right.fmt_latex(f)?;
                write!(f, "}}")
            },
            OpKind::Sin | OpKind::Cos | OpKind::Ln => {
                write!(f, "\\{}", kind.function_name().unwrap_or_default())?;
                fmt_paren(f, right, true)
            },
        }
    }
}
