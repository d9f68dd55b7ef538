//! Parsing and representation of mathematical expressions for `symdiff`.
//!
//! The [`tree`] module defines [`Node`](tree::Node), the binary expression tree that every other
//! `symdiff` crate works on, together with its renderers and the validator used when trees enter
//! from an untyped layout. The [`parser`] module turns text into a [`Node`](tree::Node):
//!
//! ```
//! use symdiff_parser::{parser::Parser, tree::Node};
//!
//! let expr = Parser::new("x^2 + 3*x").try_parse_full().unwrap();
//! assert_eq!(expr, Node::variable('x').pow(Node::constant(2.0))
//!     + Node::constant(3.0) * Node::variable('x'));
//! assert_eq!(expr.to_string(), "((x)^(2))+((3)*(x))");
//! ```

pub mod parser;
pub mod tokenizer;
pub mod tree;
