use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ast::NodeKind;

/// One node of a nesC syntax tree.
///
/// Children are positional: what child `i` means depends only on `kind`
/// (an `IF` has its condition first, then the branch, then an optional
/// `else` branch). Trees are built once and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            text: None,
            children,
        }
    }

    /// A childless node carrying literal text (identifier, number, operator).
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn with_text(kind: NodeKind, text: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            kind,
            text: Some(text.into()),
            children,
        }
    }

    /// Decodes a tree from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to decode syntax tree JSON")
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is(&self, kind: NodeKind) -> bool {
        self.kind == kind
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The node's own text, or the fixed spelling of its kind when the
    /// producer left the text out.
    pub fn spelling(&self) -> Option<&str> {
        self.text.as_deref().or_else(|| self.kind.spelling())
    }

    /// What the node is called in a tree dump.
    pub fn label(&self) -> &str {
        self.spelling().unwrap_or_else(|| self.kind.name())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Node> {
        self.children.get(index)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}
