//! Node collapse among the direct children of one container.

use std::collections::HashSet;

use crate::dedupe::RemovalDirection;
use crate::tree::Node;

/// Remove emptied rules and duplicate siblings from `nodes`.
///
/// Runs in two steps: rules without any declaration are dropped first, then
/// every node that matches a surviving sibling of the same kind is removed.
/// Comments are never removed and never compared.
///
/// Returns the number of nodes removed.
pub(crate) fn collapse_nodes(nodes: &mut Vec<Node>, direction: RemovalDirection) -> usize {
    let before = nodes.len();
    nodes.retain(|node| match node {
        Node::Rule(rule) if !rule.has_declarations() => {
            tracing::trace!("Removing empty rule '{}'", rule.selector);
            false
        }
        _ => true,
    });
    let emptied = before - nodes.len();

    let marked = mark_redundant_nodes(nodes, direction);
    if !marked.is_empty() {
        let mut index = 0;
        nodes.retain(|_| {
            let keep = !marked.contains(&index);
            index += 1;
            keep
        });
    }

    emptied + marked.len()
}

fn mark_redundant_nodes(nodes: &[Node], direction: RemovalDirection) -> HashSet<usize> {
    let mut survivors: Vec<usize> = vec![];
    let mut marked = HashSet::new();

    for index in direction.scan_order(nodes.len()) {
        let node = &nodes[index];
        if node.is_comment() {
            continue;
        }

        if survivors.iter().any(|&kept| nodes[kept].matches(node)) {
            tracing::trace!("Removing duplicate node at index {}", index);
            marked.insert(index);
        } else {
            survivors.push(index);
        }
    }

    marked
}
