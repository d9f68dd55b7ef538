//! Graphviz descriptions of expression trees, for debugging.
//!
//! ```
//! use symdiff_compute::dump::{DumpCounter, GraphDump};
//! use symdiff_parser::tree::Node;
//!
//! let mut counter = DumpCounter::default();
//! let mut out = Vec::new();
//! let expr = Node::variable('x') + Node::constant(2.0);
//! expr.write_dot(&mut counter, &mut out).unwrap();
//!
//! let dot = String::from_utf8(out).unwrap();
//! assert!(dot.starts_with("digraph dump1 {"));
//! assert!(dot.contains("n0 -> n1 [label=\"left\"]"));
//! assert_eq!(counter.count(), 1);
//! ```

use std::io::{self, Write};
use symdiff_parser::tree::Node;

/// Numbers successive dumps, so that every graph written in one session gets a distinct name.
///
/// The counter is owned by the caller and passed to every dump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DumpCounter {
    count: usize,
}

impl DumpCounter {
    /// Returns the number of dumps written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Advances the counter and returns the new number.
    fn advance(&mut self) -> usize {
        self.count += 1;
        self.count
    }

    /// Returns the file name the next dump should be written to, `dump0001.dot` style.
    pub fn next_file_name(&self) -> String {
        format!("dump{:04}.dot", self.count + 1)
    }
}

/// Types that can be drawn as a Graphviz graph.
pub trait GraphDump {
    /// Writes a `digraph` describing `self` to the writer, numbered by the counter. Returns the
    /// number given to this dump.
    fn write_dot(&self, counter: &mut DumpCounter, w: &mut dyn Write) -> io::Result<usize>;
}

impl GraphDump for Node {
    fn write_dot(&self, counter: &mut DumpCounter, w: &mut dyn Write) -> io::Result<usize> {
        let number = counter.advance();
        writeln!(w, "digraph dump{} {{", number)?;
        writeln!(w, "    rankdir=TB")?;
        writeln!(w, "    layout=dot")?;
        write_node_dot(w, self, &mut 0)?;
        writeln!(w, "}}")?;
        Ok(number)
    }
}

/// Returns the label, fill color and shape used for the node.
fn node_style(node: &Node) -> (String, &'static str, &'static str) {
    match node {
        Node::Constant(value) => (value.to_string(), "lightblue", "box"),
        Node::Variable(identifier) => (identifier.to_string(), "palegreen", "box"),
        Node::Operator(kind, ..) => (
            kind.function_name().map_or_else(|| kind.code().to_string(), str::to_string),
            "lightyellow",
            "ellipse",
        ),
    }
}

/// Writes the node and its subtree in pre-order, naming each node `n<index>`. Returns the index
/// given to `node`.
fn write_node_dot(w: &mut dyn Write, node: &Node, next_id: &mut usize) -> io::Result<usize> {
    let id = *next_id;
    *next_id += 1;

    let (label, color, shape) = node_style(node);
    writeln!(w, "    n{id} [label=\"{label}\" style=\"filled\" fillcolor=\"{color}\" shape=\"{shape}\"]")?;

    if let Node::Operator(_, left, right) = node {
        let left_id = write_node_dot(w, left, next_id)?;
        let right_id = write_node_dot(w, right, next_id)?;
        writeln!(w, "    n{id} -> n{left_id} [label=\"left\"]")?;
        writeln!(w, "    n{id} -> n{right_id} [label=\"right\"]")?;
    }

    Ok(id)
}
