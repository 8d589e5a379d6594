//! # nesc-unparser
//!
//! Renders syntax trees of nesC programs back into readable source text.
//!
//! The tree is produced elsewhere (usually a parser that dumps it as JSON);
//! this crate only reads it. [`Unparser`] walks the tree once, depth first,
//! streaming formatted text into any [`std::io::Write`] sink.
//!
//! ```
//! use nesc_unparser::{Node, NodeKind, Render};
//!
//! let sum = Node::new(
//!     NodeKind::Plus,
//!     vec![
//!         Node::leaf(NodeKind::RawIdentifier, "a"),
//!         Node::leaf(NodeKind::RawIdentifier, "b"),
//!     ],
//! );
//! let statement = Node::new(NodeKind::Statement, vec![sum]);
//! assert_eq!(statement.render_source().unwrap(), "a  + b ;\n\n");
//! ```

pub mod ast;
pub mod renderer;

#[cfg(test)]
mod tests;

pub use ast::*;
pub use renderer::*;
