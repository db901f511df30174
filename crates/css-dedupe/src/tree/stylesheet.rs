//! Root container of a style tree.

use std::path::Path;

use crate::dedupe::{DedupeOptions, DedupeReport};
use crate::tree::Node;
use crate::{Error, Result};

/// A parsed stylesheet: the root container of the style tree.
///
/// The root owns its children exclusively. Unlike a [`Group`](crate::tree::Group)
/// it has no name or params and is never compared against another container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level nodes in source order.
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stylesheet from already built nodes.
    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// Load a stylesheet from a CSS file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        Self::from_css(&content)
    }

    /// Parse a stylesheet from CSS text.
    pub fn from_css(css: &str) -> Result<Self> {
        crate::parser::parse_stylesheet(css)
    }

    /// Append a node.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.nodes.push(node.into());
    }

    /// Get the number of top-level nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over top-level nodes.
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Remove redundant rules, groups and declarations in place.
    pub fn dedupe(&mut self, options: &DedupeOptions) -> DedupeReport {
        crate::dedupe::deduplicate_in_place(self, options)
    }
}
