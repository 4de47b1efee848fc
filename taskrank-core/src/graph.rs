//! Dependency graph: declared (forward) edges and their inverse.

use std::collections::HashMap;

use crate::task::Task;

/// Forward and reverse adjacency for one batch. Built once, read-only after.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    /// id -> ids it depends on.
    forward: HashMap<String, Vec<String>>,
    /// id -> ids that depend on it. Includes ids missing from the batch.
    reverse: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn build(tasks: &[Task]) -> Self {
        let mut forward = HashMap::with_capacity(tasks.len());
        let mut reverse: HashMap<String, Vec<String>> = HashMap::new();

        for t in tasks {
            forward.insert(t.id.clone(), t.dependencies.clone());
            for dep in &t.dependencies {
                reverse.entry(dep.clone()).or_default().push(t.id.clone());
            }
        }

        Self { forward, reverse }
    }

    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.forward.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Tasks that declared a dependency on `id`, in batch order.
    pub fn dependents_of(&self, id: &str) -> &[String] {
        self.reverse.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn unblocks_count(&self, id: &str) -> usize {
        self.dependents_of(id).len()
    }

    pub fn forward(&self) -> &HashMap<String, Vec<String>> {
        &self.forward
    }

    pub fn reverse(&self) -> &HashMap<String, Vec<String>> {
        &self.reverse
    }

    pub fn reverse_edge_count(&self) -> usize {
        self.reverse.values().map(Vec::len).sum()
    }
}
