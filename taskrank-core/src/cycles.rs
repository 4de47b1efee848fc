//! Circular dependency detection.
//!
//! Depth-first walk over declared edges between tasks present in the batch.
//! When the walk re-enters a node that is still on the stack, the re-entered
//! node and the stack path back to it are flagged. Nodes that only lead into a
//! cycle are never flagged, and a cycle closed through an already finished
//! node is not discovered (this is not strongly-connected-component detection).

use std::collections::{HashMap, HashSet};

use crate::task::Task;

pub fn detect_cycles(tasks: &[Task]) -> HashSet<String> {
    let present: HashSet<&str> = tasks.iter().map(|t| t.id.as_str()).collect();

    // Later duplicates win, matching `DependencyGraph::build`.
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::with_capacity(tasks.len());
    for t in tasks {
        let edges = t
            .dependencies
            .iter()
            .map(String::as_str)
            .filter(|dep| present.contains(dep))
            .collect();
        adjacency.insert(t.id.as_str(), edges);
    }

    let mut visited: HashSet<&str> = HashSet::new();
    // node -> its depth in `stack`
    let mut on_stack: HashMap<&str, usize> = HashMap::new();
    let mut cycles: HashSet<String> = HashSet::new();

    for root in tasks.iter().map(|t| t.id.as_str()) {
        if visited.contains(root) {
            continue;
        }

        // (node, index of the next child to visit)
        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
        visited.insert(root);
        on_stack.insert(root, 0);

        while let Some(&(node, next)) = stack.last() {
            let children = adjacency.get(node).map(Vec::as_slice).unwrap_or(&[]);

            let Some(&child) = children.get(next) else {
                on_stack.remove(node);
                stack.pop();
                continue;
            };

            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            if let Some(&depth) = on_stack.get(child) {
                for &(member, _) in &stack[depth..] {
                    cycles.insert(member.to_string());
                }
            } else if visited.insert(child) {
                on_stack.insert(child, stack.len());
                stack.push((child, 0));
            }
        }
    }

    if !cycles.is_empty() {
        tracing::debug!(count = cycles.len(), "circular dependencies detected");
    }

    cycles
}
