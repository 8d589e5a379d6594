//! Rules for statements.
//!
//! A statement starts on a fresh line at the current indentation and ends
//! with a newline. Controlled statements are rendered one level deeper; a
//! compound statement pulls its braces back out by one level, so braces line
//! up with the keyword that owns them. Labels do the same.

use std::io::Write;

use anyhow::Result;

use crate::ast::Node;
use crate::renderer::renderer::{child, Unparser};

impl<W: Write> Unparser<W> {
    /// The top-level expression of a statement goes without outer parentheses.
    fn render_top_expression(&mut self, expression: &Node) -> Result<()> {
        self.with_parens_suppressed(true, |r| r.render(expression))
    }

    pub(crate) fn render_expression_statement(&mut self, node: &Node) -> Result<()> {
        self.indent()?;
        if let Some(expression) = node.child(0) {
            self.render_top_expression(expression)?;
        }
        self.emit(";\n")
    }

    pub(crate) fn render_compound_statement(&mut self, node: &Node) -> Result<()> {
        self.outdented(|r| {
            r.indent()?;
            r.emit("{\n")
        })?;
        self.render_all(node.children())?;
        self.outdented(|r| {
            r.indent()?;
            r.emit("}\n")
        })
    }

    pub(crate) fn render_labeled_statement(&mut self, node: &Node) -> Result<()> {
        let label = child(node, 0)?;
        self.outdented(|r| {
            r.indent()?;
            r.emit(label.label())
        })?;
        self.emit(":\n")?;
        self.render(child(node, 1)?)
    }

    pub(crate) fn render_case(&mut self, node: &Node) -> Result<()> {
        let value = child(node, 0)?;
        self.outdented(|r| {
            r.indent()?;
            r.emit("case ")?;
            r.render(value)?;
            r.emit(":\n")
        })?;
        self.render(child(node, 1)?)
    }

    pub(crate) fn render_default(&mut self, node: &Node) -> Result<()> {
        self.outdented(|r| {
            r.indent()?;
            r.emit("default:\n")
        })?;
        self.render(child(node, 0)?)
    }

    pub(crate) fn render_atomic(&mut self, node: &Node) -> Result<()> {
        self.indent()?;
        self.emit("atomic\n")?;
        self.nested(|r| r.render(child(node, 0)?))
    }

    pub(crate) fn render_if(&mut self, node: &Node) -> Result<()> {
        self.render_controlled("if", node)?;
        if let Some(otherwise) = node.child(2) {
            self.indent()?;
            self.emit("else\n")?;
            self.nested(|r| r.render(otherwise))?;
        }
        Ok(())
    }

    /// `keyword( condition )` followed by the controlled statement.
    pub(crate) fn render_controlled(&mut self, keyword: &str, node: &Node) -> Result<()> {
        self.indent()?;
        self.emit(keyword)?;
        self.emit("( ")?;
        self.render_top_expression(child(node, 0)?)?;
        self.emit(" )\n")?;
        self.nested(|r| r.render(child(node, 1)?))
    }

    pub(crate) fn render_do(&mut self, node: &Node) -> Result<()> {
        self.indent()?;
        self.emit("do\n")?;
        self.nested(|r| r.render(child(node, 0)?))?;
        self.indent()?;
        self.emit("while( ")?;
        self.render_top_expression(child(node, 1)?)?;
        self.emit(");\n")
    }

    pub(crate) fn render_for(&mut self, node: &Node) -> Result<()> {
        self.indent()?;
        self.emit("for( ")?;
        for i in 0..3 {
            if i != 0 {
                self.emit("; ")?;
            }
            self.render(child(node, i)?)?;
        }
        self.emit(" )\n")?;
        self.nested(|r| r.render(child(node, 3)?))
    }

    /// Initializer, condition or iteration clause of a `for`; each may be empty.
    pub(crate) fn render_for_clause(&mut self, node: &Node) -> Result<()> {
        match node.child(0) {
            Some(expression) => self.render_top_expression(expression),
            None => Ok(()),
        }
    }

    /// The jump target is the last child.
    pub(crate) fn render_goto(&mut self, node: &Node) -> Result<()> {
        let target = child(node, node.child_count().saturating_sub(1))?;
        self.indent()?;
        self.emit("goto ")?;
        self.render(target)?;
        self.emit(";\n")
    }

    pub(crate) fn render_jump(&mut self, keyword: &str) -> Result<()> {
        self.indent()?;
        self.emit(keyword)?;
        self.emit(";\n")
    }

    pub(crate) fn render_return(&mut self, node: &Node) -> Result<()> {
        self.indent()?;
        self.emit("return ")?;
        if let Some(value) = node.child(0) {
            self.render(value)?;
        }
        self.emit(";\n")
    }
}
