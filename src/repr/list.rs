use std::fmt::Display;

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// Neighborhood of a single vertex: `(neighbor, weight)` pairs in insertion order
#[derive(Debug, Default, Clone)]
pub struct ArrNeighborhood(pub Vec<(Node, Weight)>);

impl ArrNeighborhood {
    fn position(&self, v: Node) -> Option<usize> {
        self.0.iter().position(|&(x, _)| x == v)
    }

    /// Returns the weight of the edge to `v` if present
    pub fn weight_to(&self, v: Node) -> Option<Weight> {
        self.position(v).map(|pos| self.0[pos].1)
    }

    /// Inserts `v` or overwrites its weight in place.
    /// Returns *true* if `v` was in the Neighborhood before.
    pub fn upsert(&mut self, v: Node, weight: Weight) -> bool {
        match self.position(v) {
            Some(pos) => {
                self.0[pos].1 = weight;
                true
            }
            None => {
                self.0.push((v, weight));
                false
            }
        }
    }

    /// Tries to remove a neighbor while keeping the order of the remaining ones.
    /// Returns *true* if the node was in the Neighborhood before.
    pub fn try_remove(&mut self, v: Node) -> bool {
        if let Some(pos) = self.position(v) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }

    /// Drops `x` from the Neighborhood and shifts all neighbors above `x` down by one
    fn remove_and_compact(&mut self, x: Node) {
        self.0.retain(|&(v, _)| v != x);
        for (v, _) in self.0.iter_mut() {
            if *v > x {
                *v -= 1;
            }
        }
    }

    /// Returns the number of neighbors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if there are no neighbors
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A graph stored as adjacency lists.
///
/// Neighbors are reported in the order their edges were first inserted.
#[derive(Debug, Clone)]
pub struct AdjList {
    labels: Labels,
    nbs: Vec<ArrNeighborhood>,
    directed: bool,
    weighted: bool,
    num_edges: NumEdges,
}

impl_common_graph_ops!(AdjList);

impl AdjList {
    /// Counts each stored edge once (undirected edges appear in two neighborhoods)
    fn recount_edges(&mut self) {
        self.num_edges = if self.directed {
            self.nbs.iter().map(|nb| nb.len() as NumEdges).sum()
        } else {
            self.nbs
                .iter()
                .enumerate()
                .map(|(u, nb)| nb.0.iter().filter(|&&(v, _)| v as usize >= u).count() as NumEdges)
                .sum()
        };
    }
}

impl GraphNew for AdjList {
    fn new(directed: bool, weighted: bool) -> Self {
        Self {
            labels: Labels::default(),
            nbs: Vec::new(),
            directed,
            weighted,
            num_edges: 0,
        }
    }
}

impl AdjacencyList for AdjList {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.nbs
            .get(u as usize)
            .into_iter()
            .flat_map(|nb| nb.0.iter().copied())
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs.get(u as usize).map_or(0, |nb| nb.len() as NumNodes)
    }
}

impl AdjacencyTest for AdjList {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs
            .get(u as usize)
            .is_some_and(|nb| nb.weight_to(v).is_some())
    }

    fn weight_of(&self, u: Node, v: Node) -> Weight {
        self.nbs
            .get(u as usize)
            .and_then(|nb| nb.weight_to(v))
            .unwrap_or(0.0)
    }
}

impl GraphVertexEditing for AdjList {
    fn insert_vertex<S: Into<String>>(&mut self, label: S) -> bool {
        if self.labels.insert(label.into()).is_none() {
            return false;
        }
        self.nbs.push(ArrNeighborhood::default());
        true
    }

    fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(x) = self.labels.remove(label) else {
            return false;
        };

        self.nbs.remove(x as usize);
        for nb in self.nbs.iter_mut() {
            nb.remove_and_compact(x);
        }
        self.recount_edges();
        true
    }
}

impl GraphEdgeEditing for AdjList {
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if !self.has_endpoints(u, v) {
            return false;
        }

        let weight = self.effective_weight(weight);
        let existed = self.nbs[u as usize].upsert(v, weight);
        if self.is_undirected() && u != v {
            self.nbs[v as usize].upsert(u, weight);
        }

        if !existed {
            self.num_edges += 1;
        }
        true
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.has_endpoints(u, v) || !self.nbs[u as usize].try_remove(v) {
            return false;
        }

        if self.is_undirected() && u != v {
            self.nbs[v as usize].try_remove(u);
        }
        self.num_edges -= 1;
        true
    }
}

/// Prints one line `label -> dest(weight), ...` per vertex
impl Display for AdjList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for u in self.vertices() {
            write!(f, "{} ->", self.labels.get(u).unwrap_or_default())?;
            for (i, (v, weight)) in self.weighted_neighbors_of(u).enumerate() {
                let sep = if i == 0 { " " } else { ", " };
                write!(f, "{sep}{}({weight})", self.labels.get(v).unwrap_or_default())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(test_adj_list, AdjList);
