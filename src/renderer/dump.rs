//! Generic tree dump, independent of any formatting rule. Handy when a tree
//! renders badly and you need to see which node kinds it really contains.

use std::io::Write;

use anyhow::Result;

use crate::ast::Node;
use crate::renderer::renderer::Unparser;

impl<W: Write> Unparser<W> {
    /// Writes the tree as nested `(label child ...)` groups, then a newline.
    pub fn write_ast(&mut self, root: &Node) -> Result<()> {
        self.write_subtree(root)?;
        self.emit("\n")?;
        self.flush()
    }

    fn write_subtree(&mut self, node: &Node) -> Result<()> {
        if node.children().is_empty() {
            return self.emit(node.label());
        }
        self.emit("(")?;
        self.emit(node.label())?;
        for child in node.children() {
            self.emit(" ")?;
            self.write_subtree(child)?;
        }
        self.emit(")")
    }
}
