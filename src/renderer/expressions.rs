//! Rules for expressions.

use std::io::Write;

use anyhow::Result;

use crate::ast::Node;
use crate::renderer::renderer::{child, Unparser};

impl<W: Write> Unparser<W> {
    /// Every binary operator: `( left op right )`. No precedence table is
    /// consulted; each binary sub-expression gets its own parentheses unless
    /// it is the top expression of a statement.
    pub(crate) fn render_binary(&mut self, node: &Node) -> Result<()> {
        let (left, right) = (child(node, 0)?, child(node, 1)?);
        let parenthesized = !self.state.parens_suppressed;
        if parenthesized {
            self.emit("( ")?;
        }
        self.with_parens_suppressed(false, |r| {
            r.render(left)?;
            r.emit(" ")?;
            r.emit(node.spelling().unwrap_or_default())?;
            r.emit(" ")?;
            r.render(right)
        })?;
        if parenthesized {
            self.emit(" )")?;
        }
        Ok(())
    }

    /// Operands of everything but a binary operator are full expressions of
    /// their own, so a suppressed top-level position does not reach them.
    fn render_operand(&mut self, operand: &Node) -> Result<()> {
        self.with_parens_suppressed(false, |r| r.render(operand))
    }

    pub(crate) fn render_postfix_expression(&mut self, node: &Node) -> Result<()> {
        self.with_parens_suppressed(false, |r| r.render_all(node.children()))
    }

    /// A fixed prefix before the single operand.
    pub(crate) fn render_prefixed(&mut self, prefix: &str, node: &Node) -> Result<()> {
        self.emit(prefix)?;
        self.render_operand(child(node, 0)?)
    }

    pub(crate) fn render_va_arg(&mut self, node: &Node) -> Result<()> {
        self.emit("__builtin_va_arg(")?;
        self.render_operand(child(node, 0)?)?;
        self.emit(", ")?;
        self.render_operand(child(node, 1)?)?;
        self.emit(")")
    }

    pub(crate) fn render_argument_list(&mut self, node: &Node) -> Result<()> {
        self.emit("( ")?;
        self.with_parens_suppressed(false, |r| r.render_separated(node.children(), ", "))?;
        self.emit(" )")
    }

    pub(crate) fn render_array_selection(&mut self, node: &Node) -> Result<()> {
        self.emit("[")?;
        self.render_operand(child(node, 0)?)?;
        self.emit("]")
    }

    pub(crate) fn render_sizeof(&mut self, node: &Node) -> Result<()> {
        self.emit("sizeof( ")?;
        self.with_parens_suppressed(false, |r| r.render_all(node.children()))?;
        self.emit(" )")
    }

    /// The operand comes first in the tree, the target type after it.
    pub(crate) fn render_cast(&mut self, node: &Node) -> Result<()> {
        self.emit("(")?;
        for part in node.children().iter().skip(1) {
            self.render_operand(part)?;
        }
        self.emit(")( ")?;
        self.render_operand(child(node, 0)?)?;
        self.emit(" )")
    }

    /// Wrapped so the `*` cannot be read as multiplication.
    pub(crate) fn render_dereference(&mut self, node: &Node) -> Result<()> {
        self.emit("( *")?;
        self.render_operand(child(node, 0)?)?;
        self.emit(" )")
    }
}
