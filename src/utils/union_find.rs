use crate::*;

/// Disjoint sets over the nodes `0..n` with path compression.
///
/// Merging always attaches the representative of the second set below the representative of the
/// first one.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Returns the representative of the set containing `u` and compresses the path to it
    pub fn find(&mut self, u: Node) -> Node {
        let mut root = u;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut u = u;
        while u != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// Merges the sets of `u` and `v`.
    /// Returns *false* if both were already in the same set.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return false;
        }

        self.parent[rv as usize] = ru;
        true
    }

    /// Returns *true* if `u` and `v` are in the same set
    pub fn same_set(&mut self, u: Node, v: Node) -> bool {
        self.find(u) == self.find(v)
    }
}
