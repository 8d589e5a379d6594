use anyhow::Result;

use crate::ast::Node;
use crate::renderer::renderer::Unparser;

/// Renders a whole tree into a `String`.
pub trait Render {
    /// Source text, as [`Unparser::unparse`] writes it.
    fn render_source(&self) -> Result<String>;

    /// Parenthesized structure dump, as [`Unparser::write_ast`] writes it.
    fn render_tree(&self) -> Result<String>;
}

impl Render for Node {
    fn render_source(&self) -> Result<String> {
        let mut unparser = Unparser::new(Vec::new());
        unparser.unparse(self)?;
        Ok(String::from_utf8(unparser.into_inner())?)
    }

    fn render_tree(&self) -> Result<String> {
        let mut unparser = Unparser::new(Vec::new());
        unparser.write_ast(self)?;
        Ok(String::from_utf8(unparser.into_inner())?)
    }
}
