//! Symbolic manipulation and numeric evaluation of expression trees.
//!
//! # Differentiation
//!
//! [`differentiate()`] builds the derivative of a [`Node`] with respect to one variable by
//! structural rules (sum, product, quotient, chain and generalized power rules). The input is
//! never modified; every subtree reused by a rule is deep-copied into the result, so the
//! derivative shares nothing with its input.
//!
//! # Simplification
//!
//! Derivatives built by structural rules are full of `0*x`, `x^1`, `3-1` and the like.
//! [`simplify()`] cleans them up in place, bottom-up, with two passes at every operator node:
//! constant folding, then identity elimination. See the [`mod@simplify`] module.
//!
//! ```
//! use symdiff_compute::{differentiate, simplify};
//! use symdiff_parser::parser::parse;
//!
//! let expr = parse("x^2 + 3*x").unwrap();
//! let mut deriv = differentiate(&expr, 'x');
//! simplify(&mut deriv);
//! assert_eq!(deriv.to_string(), "((x)*(2))+(3)");
//! ```
//!
//! # Evaluation
//!
//! [`eval::evaluate`] substitutes a value for the bound variable and computes the result, failing
//! on division by zero instead of producing an infinity.
//!
//! # Stages and diagnostics
//!
//! [`stages::Stages`] chains differentiation and simplification to produce successive
//! derivatives, and [`dump`] writes Graphviz descriptions of trees for debugging.

pub mod derivative;
pub mod dump;
pub mod eval;
pub mod simplify;
pub mod stages;
pub mod step_collector;

pub use derivative::differentiate;
pub use eval::{evaluate, Ctxt, Eval};
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use stages::{nth_derivative, Stage, Stages};
pub use step_collector::StepCollector;
pub use symdiff_parser::tree::Node;
