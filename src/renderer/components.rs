//! Rules for files, interfaces, components and configuration wiring.
//!
//! Also reconstructs `#include` lines. The tree comes from preprocessed
//! input, so a header's contents show up inline between a line directive
//! naming the header and the next line directive naming something else.
//! The first header directive is turned back into an `#include` and the
//! inlined declarations after it are skipped.

use std::io::Write;

use anyhow::Result;
use tracing::{trace, warn};

use crate::ast::{Node, NodeKind};
use crate::renderer::renderer::{child, Unparser};

/// Whether a line directive's quoted file name refers to a header.
pub fn names_header(file_name: &str) -> bool {
    file_name.ends_with(".h\"") || file_name.ends_with(".h>")
}

/// Rewrites Windows separators, escaped or not, as forward slashes.
pub fn normalize_separators(file_name: &str) -> String {
    file_name.replace("\\\\", "/").replace('\\', "/")
}

impl<W: Write> Unparser<W> {
    /// Top-level items, skipping anything inlined from a header.
    fn render_items(&mut self, items: &[Node]) -> Result<()> {
        for item in items {
            if !self.state.header_suppressed || item.is(NodeKind::LineDirective) {
                self.render(item)?;
            }
        }
        Ok(())
    }

    pub(crate) fn render_file(&mut self, node: &Node) -> Result<()> {
        self.render_items(node.children())
    }

    pub(crate) fn render_line_directive(&mut self, node: &Node) -> Result<()> {
        let file_name = child(node, 0)?.spelling().unwrap_or_default();
        if names_header(file_name) {
            if !self.state.header_suppressed {
                let include = format!("#include {}\n", normalize_separators(file_name));
                self.emit(&include)?;
            }
            trace!(file = file_name, "entering header, suppressing output");
            self.state.header_suppressed = true;
        } else {
            if self.state.header_suppressed {
                trace!(file = file_name, "leaving header, resuming output");
            }
            self.state.header_suppressed = false;
        }
        Ok(())
    }

    /// `interface` is either a use inside a specification or the definition
    /// of an interface type.
    pub(crate) fn render_interface(&mut self, node: &Node) -> Result<()> {
        let first = child(node, 0)?;
        if first.is(NodeKind::InterfaceType) {
            self.indent()?;
            self.emit("interface ")?;
            self.render(first)?;
            if let Some(alias) = node.child(1) {
                self.emit(" as ")?;
                self.render(alias)?;
            }
            self.emit(";\n")
        } else {
            self.emit("interface ")?;
            self.emit(first.label())?;
            self.emit(" {\n")?;
            self.nested(|r| r.render_all(&node.children()[1..]))?;
            self.emit("}\n")
        }
    }

    /// Kind, name, specification, then the optional parameter list and
    /// implementation, which may follow in either order.
    pub(crate) fn render_component_definition(&mut self, node: &Node) -> Result<()> {
        self.render(child(node, 0)?)?;
        self.render(child(node, 1)?)?;

        let optional = node.children().get(3..).unwrap_or_default();
        if let Some(parameters) = optional
            .iter()
            .find(|part| part.is(NodeKind::ComponentParameterList))
        {
            self.render(parameters)?;
        }

        self.render(child(node, 2)?)?;

        if let Some(implementation) = optional
            .iter()
            .find(|part| part.is(NodeKind::Implementation))
        {
            self.render(implementation)?;
        }
        Ok(())
    }

    pub(crate) fn render_component_kind(&mut self, node: &Node) -> Result<()> {
        let first = child(node, 0)?;
        let keyword = match first.kind() {
            NodeKind::Configuration => "configuration ",
            NodeKind::Module => "module ",
            NodeKind::Generic => match node.child(1).map(Node::kind) {
                Some(NodeKind::Configuration) => "generic configuration ",
                Some(NodeKind::Module) => "generic module ",
                _ => {
                    warn!("generic component without module or configuration");
                    return Ok(());
                }
            },
            other => {
                warn!(kind = %other, "unexpected component kind");
                return Ok(());
            }
        };
        self.emit(keyword)
    }

    pub(crate) fn render_component_parameter_list(&mut self, node: &Node) -> Result<()> {
        self.emit("(")?;
        self.render_separated(node.children(), ", ")?;
        self.emit(") ")
    }

    pub(crate) fn render_specification(&mut self, node: &Node) -> Result<()> {
        self.emit(" {\n")?;
        self.nested(|r| r.render_all(node.children()))?;
        self.emit("}\n")
    }

    /// `uses { ... }` or `provides { ... }`.
    pub(crate) fn render_interface_block(&mut self, keyword: &str, node: &Node) -> Result<()> {
        self.indent()?;
        self.emit(keyword)?;
        self.emit(" {\n")?;
        self.nested(|r| r.render_all(node.children()))?;
        self.indent()?;
        self.emit("}\n")
    }

    pub(crate) fn render_interface_type(&mut self, node: &Node) -> Result<()> {
        self.emit(child(node, 0)?.label())?;
        if node.child_count() > 1 {
            self.emit("<")?;
            self.render_separated(&node.children()[1..], ", ")?;
            self.emit(">")?;
        }
        Ok(())
    }

    pub(crate) fn render_implementation(&mut self, node: &Node) -> Result<()> {
        self.emit("implementation {\n")?;
        self.nested(|r| r.render_items(node.children()))?;
        self.emit("}\n")
    }

    pub(crate) fn render_components(&mut self, node: &Node) -> Result<()> {
        self.indent()?;
        self.emit("components ")?;
        self.render_separated(node.children(), ", ")?;
        self.emit(";\n")
    }

    pub(crate) fn render_component_declaration(&mut self, node: &Node) -> Result<()> {
        self.render(child(node, 0)?)?;
        if let Some(alias) = node.child(1) {
            self.emit(" as ")?;
            self.render(alias)?;
        }
        Ok(())
    }

    pub(crate) fn render_component_instantiation(&mut self, node: &Node) -> Result<()> {
        self.emit("new ")?;
        self.render(child(node, 0)?)?;
        self.emit("( ")?;
        if let Some(arguments) = node.child(1) {
            self.render(arguments)?;
        }
        self.emit(" )")
    }

    /// The wiring operator comes first and carries the right-hand endpoint as
    /// its children; the left-hand endpoint is the second child.
    pub(crate) fn render_connection(&mut self, node: &Node) -> Result<()> {
        let operator = child(node, 0)?;
        self.indent()?;
        self.render(child(node, 1)?)?;
        self.emit(" ")?;
        self.emit(operator.spelling().unwrap_or_default())?;
        self.emit(" ")?;
        self.render_all(operator.children())?;
        self.emit(";\n")
    }
}
