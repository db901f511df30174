//! Declaration collapse across same-selector sibling rules.

use std::collections::{HashMap, HashSet};

use crate::dedupe::RemovalDirection;
use crate::tree::{Declaration, Node};

/// Position of a declaration: (index of the owning rule among the
/// container's children, index of the declaration among the rule's children).
type DeclarationSlot = (usize, usize);

/// Prune duplicate declarations among the sibling rules in `nodes`.
///
/// Rules are grouped by exact selector text. The declarations of each group
/// are treated as one sequence in document order and every declaration equal
/// to one that survives is removed. Rules left without declarations stay in
/// place for node collapse to delete.
///
/// Returns the number of declarations removed.
pub(crate) fn collapse_declarations(nodes: &mut [Node], direction: RemovalDirection) -> usize {
    let marked = mark_redundant_declarations(nodes, direction);
    if marked.is_empty() {
        return 0;
    }

    for (rule_index, node) in nodes.iter_mut().enumerate() {
        let Node::Rule(rule) = node else {
            continue;
        };

        let mut child_index = 0;
        rule.children.retain(|_| {
            let keep = !marked.contains(&(rule_index, child_index));
            child_index += 1;
            keep
        });
    }

    marked.len()
}

fn mark_redundant_declarations(
    nodes: &[Node],
    direction: RemovalDirection,
) -> HashSet<DeclarationSlot> {
    let mut marked = HashSet::new();

    for group in selector_groups(nodes) {
        let entries: Vec<(DeclarationSlot, &Declaration)> = group
            .iter()
            .filter_map(|&rule_index| nodes[rule_index].as_rule().map(|rule| (rule_index, rule)))
            .flat_map(|(rule_index, rule)| {
                rule.indexed_declarations()
                    .map(move |(child_index, decl)| ((rule_index, child_index), decl))
            })
            .collect();

        let mut survivors = HashSet::new();
        for position in direction.scan_order(entries.len()) {
            let (slot, decl) = entries[position];
            if !survivors.insert(decl) {
                tracing::trace!("Removing duplicate declaration '{}' at {:?}", decl, slot);
                marked.insert(slot);
            }
        }
    }

    marked
}

/// Indices of sibling rules grouped by selector text.
///
/// Groups are ordered by first appearance and each lists its rules in
/// document order.
fn selector_groups(nodes: &[Node]) -> Vec<Vec<usize>> {
    let mut lookup: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<usize>> = vec![];

    for (index, node) in nodes.iter().enumerate() {
        let Some(rule) = node.as_rule() else {
            continue;
        };

        let group = *lookup.entry(rule.selector.as_str()).or_insert_with(|| {
            groups.push(vec![]);
            groups.len() - 1
        });
        groups[group].push(index);
    }

    groups
}
