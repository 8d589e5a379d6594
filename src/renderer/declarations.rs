//! Rules for declarations, declarators and types.

use std::io::Write;

use anyhow::Result;

use crate::ast::{Node, NodeKind};
use crate::renderer::renderer::{child, Unparser};

impl<W: Write> Unparser<W> {
    pub(crate) fn render_type_name(&mut self, node: &Node) -> Result<()> {
        for part in node.children() {
            self.render(part)?;
            self.emit(" ")?;
        }
        Ok(())
    }

    /// Specifiers and declarators in order. A function definition brings its
    /// own body and so takes no semicolon.
    pub(crate) fn render_declaration(&mut self, node: &Node) -> Result<()> {
        self.indent()?;
        self.render_spaced_identifiers(node)?;
        let is_function = node
            .child(0)
            .map_or(false, |first| first.is(NodeKind::FunctionDefinition));
        if !is_function {
            self.emit(";")?;
        }
        self.emit("\n")
    }

    /// Children in order, with an extra space after raw identifiers so a
    /// typedef name never runs into the declarator after it.
    fn render_spaced_identifiers(&mut self, node: &Node) -> Result<()> {
        for part in node.children() {
            self.render(part)?;
            if part.is(NodeKind::RawIdentifier) {
                self.emit(" ")?;
            }
        }
        Ok(())
    }

    /// `struct`, `union` and their `nx_` forms: optional tag, optional body.
    pub(crate) fn render_struct(&mut self, node: &Node) -> Result<()> {
        self.emit(node.spelling().unwrap_or_default())?;
        self.emit(" ")?;

        let mut members = node.children();
        if let Some((tag, rest)) = members.split_first() {
            if !tag.is(NodeKind::Declaration) {
                self.render(tag)?;
                self.emit(" ")?;
                members = rest;
            }
        }

        if !members.is_empty() {
            self.emit("{\n")?;
            self.nested(|r| r.render_all(members))?;
            self.indent()?;
            self.emit("} ")?;
        }
        Ok(())
    }

    pub(crate) fn render_enum(&mut self, node: &Node) -> Result<()> {
        self.emit("enum ")?;

        let mut enumerators = node.children();
        if let Some((tag, rest)) = enumerators.split_first() {
            if !tag.is(NodeKind::Enumerator) {
                self.render(tag)?;
                self.emit(" ")?;
                enumerators = rest;
            }
        }

        if !enumerators.is_empty() {
            self.emit("{ ")?;
            self.render_separated(enumerators, ", ")?;
            self.emit("} ")?;
        }
        Ok(())
    }

    pub(crate) fn render_enumerator(&mut self, node: &Node) -> Result<()> {
        self.render(child(node, 0)?)?;
        if let Some(value) = node.child(1) {
            self.emit(" = ")?;
            self.render(value)?;
        }
        Ok(())
    }

    pub(crate) fn render_init_declarator(&mut self, node: &Node) -> Result<()> {
        self.render(child(node, 0)?)?;
        if node.child_count() > 1 {
            self.emit(" = ")?;
            self.render_all(&node.children()[1..])?;
        }
        Ok(())
    }

    /// A declarator nested inside another one of the same parameter scope is
    /// parenthesized, as `*p` is in `int (*p)(int x)`. The depth decides, not
    /// precedence, so deep nestings may get parentheses they could do without.
    pub(crate) fn render_declarator(&mut self, node: &Node) -> Result<()> {
        let parenthesized = self.state.declarator_nesting() != 0;
        if parenthesized {
            self.emit("(")?;
        }
        self.in_declarator(|r| {
            for part in node.children() {
                r.render(part)?;
                r.emit(" ")?;
            }
            Ok(())
        })?;
        if parenthesized {
            self.emit(")")?;
        }
        Ok(())
    }

    pub(crate) fn render_initializer_list(&mut self, node: &Node) -> Result<()> {
        self.emit("{ ")?;
        self.render_separated(node.children(), ", ")?;
        self.emit(" }")
    }

    pub(crate) fn render_pointer_qualifier(&mut self, node: &Node) -> Result<()> {
        self.emit("*")?;
        self.render_all(node.children())
    }

    pub(crate) fn render_array_modifier(&mut self, node: &Node) -> Result<()> {
        self.emit("[")?;
        if let Some(size) = node.child(0) {
            self.render(size)?;
        }
        self.emit("]")
    }

    pub(crate) fn render_parameter_list_modifier(&mut self, node: &Node) -> Result<()> {
        self.emit("( ")?;
        self.render(child(node, 0)?)?;
        self.emit(" )")
    }

    pub(crate) fn render_parameter_list(&mut self, node: &Node) -> Result<()> {
        self.in_parameter_scope(|r| r.render_separated(node.children(), ", "))
    }

    pub(crate) fn render_parameter(&mut self, node: &Node) -> Result<()> {
        self.render_spaced_identifiers(node)
    }

    /// The body goes on its own line, rendered one level in so that its
    /// outdented braces line up with the declaration.
    pub(crate) fn render_function_definition(&mut self, node: &Node) -> Result<()> {
        for part in node.children() {
            if part.is(NodeKind::CompoundStatement) {
                self.emit("\n")?;
                self.nested(|r| r.render(part))?;
            } else {
                self.render(part)?;
            }
        }
        Ok(())
    }
}
