/// One level of indentation.
pub const INDENT_UNIT: &str = "    ";

/// Mutable values threaded through one traversal of a tree.
///
/// Every rule that changes a field puts the old value back before it returns;
/// see the scoped helpers on [`Unparser`](crate::Unparser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub indent_level: usize,
    /// One counter per enclosing parameter list. The top counts how many
    /// declarators we are inside within the innermost list.
    pub declarator_depth: Vec<usize>,
    /// Set while rendering the single top-level expression of a statement or
    /// controlling expression, so it gets no outer parentheses.
    pub parens_suppressed: bool,
    /// Set between a line directive naming a header and the next line
    /// directive naming anything else.
    pub header_suppressed: bool,
}

impl RenderState {
    pub fn new() -> Self {
        Self {
            indent_level: 0,
            declarator_depth: vec![0],
            parens_suppressed: false,
            header_suppressed: false,
        }
    }

    pub fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.indent_level)
    }

    /// Nesting of the declarator about to be rendered within the current
    /// parameter list; zero for the outermost one.
    pub fn declarator_nesting(&self) -> usize {
        self.declarator_depth.last().copied().unwrap_or(0)
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}
