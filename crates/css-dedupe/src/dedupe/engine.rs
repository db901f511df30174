//! Bottom-up traversal and public entry points.

use std::ops::AddAssign;

use crate::dedupe::declarations::collapse_declarations;
use crate::dedupe::nodes::collapse_nodes;
use crate::dedupe::{DedupeOptions, RemovalDirection};
use crate::tree::{Node, Stylesheet};

/// Counts of what a deduplication run removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupeReport {
    /// Declarations pruned from rules by declaration collapse.
    pub declarations_removed: usize,
    /// Rules, groups and direct declarations removed by node collapse,
    /// including rules deleted for being empty.
    pub nodes_removed: usize,
}

impl DedupeReport {
    /// Total number of removals.
    pub fn total(&self) -> usize {
        self.declarations_removed + self.nodes_removed
    }

    /// Check if nothing was removed.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl AddAssign for DedupeReport {
    fn add_assign(&mut self, other: Self) {
        self.declarations_removed += other.declarations_removed;
        self.nodes_removed += other.nodes_removed;
    }
}

/// Remove redundant rules, groups and declarations from a stylesheet.
///
/// The returned tree only differs from the input by deletions; surviving
/// nodes keep their relative order.
///
/// # Example
///
/// ```
/// use css_dedupe::prelude::*;
///
/// let sheet = Stylesheet::from_css("h1{color:red;background:blue}h1{color:red}")?;
///
/// let kept_last = deduplicate(sheet.clone(), &DedupeOptions::default());
/// assert_eq!(kept_last.to_string(), "h1{background:blue}h1{color:red}");
///
/// let kept_first = deduplicate(sheet, &DedupeOptions::new().reverse_removal(true));
/// assert_eq!(kept_first.to_string(), "h1{color:red;background:blue}");
/// # Ok::<(), css_dedupe::Error>(())
/// ```
pub fn deduplicate(mut sheet: Stylesheet, options: &DedupeOptions) -> Stylesheet {
    deduplicate_in_place(&mut sheet, options);
    sheet
}

/// Like [`deduplicate`], also returning what was removed.
pub fn deduplicate_with_report(
    mut sheet: Stylesheet,
    options: &DedupeOptions,
) -> (Stylesheet, DedupeReport) {
    let report = deduplicate_in_place(&mut sheet, options);
    (sheet, report)
}

/// Remove redundant nodes from a stylesheet in place.
pub fn deduplicate_in_place(sheet: &mut Stylesheet, options: &DedupeOptions) -> DedupeReport {
    let direction = options.direction();
    let report = dedupe_container(&mut sheet.nodes, direction, 0);

    tracing::debug!(
        declarations = report.declarations_removed,
        nodes = report.nodes_removed,
        ?direction,
        "Stylesheet deduplicated"
    );

    report
}

/// Resolve every nested group first, then this container's own children.
fn dedupe_container(
    nodes: &mut Vec<Node>,
    direction: RemovalDirection,
    depth: usize,
) -> DedupeReport {
    let mut report = DedupeReport::default();

    for node in nodes.iter_mut() {
        if let Node::Group(group) = node {
            if let Some(children) = group.block.as_mut() {
                report += dedupe_container(children, direction, depth + 1);
            }
        }
    }

    let local = DedupeReport {
        declarations_removed: collapse_declarations(nodes, direction),
        nodes_removed: collapse_nodes(nodes, direction),
    };
    if !local.is_empty() {
        tracing::trace!(
            depth,
            declarations = local.declarations_removed,
            nodes = local.nodes_removed,
            "Collapsed container"
        );
    }

    report += local;
    report
}
