use std::fmt::Display;

use crate::{repr::macros::impl_common_graph_ops, testing::test_graph_ops};

use super::*;

/// A graph stored as a dense `n x n` matrix of weights.
///
/// An entry of `0` means that there is no edge; consequently an edge inserted with weight `0` does
/// not exist afterwards. Neighbors are reported in ascending index order.
#[derive(Debug, Clone)]
pub struct AdjMatrix {
    labels: Labels,
    weights: Vec<Vec<Weight>>,
    directed: bool,
    weighted: bool,
    num_edges: NumEdges,
}

impl_common_graph_ops!(AdjMatrix);

impl AdjMatrix {
    /// Returns the row of `u`
    fn row(&self, u: Node) -> Option<&[Weight]> {
        self.weights.get(u as usize).map(Vec::as_slice)
    }

    fn recount_edges(&mut self) {
        let directed = self.directed;
        self.num_edges = self
            .weights
            .iter()
            .enumerate()
            .map(|(u, row)| {
                row.iter()
                    .enumerate()
                    .filter(|&(v, &w)| w != 0.0 && (directed || v >= u))
                    .count() as NumEdges
            })
            .sum();
    }

    /// Writes `weight` into the cell(s) of `(u, v)` and fixes the edge count.
    /// Both indices must be valid.
    fn set_entry(&mut self, u: Node, v: Node, weight: Weight) {
        let existed = self.weights[u as usize][v as usize] != 0.0;
        self.weights[u as usize][v as usize] = weight;
        if self.is_undirected() {
            self.weights[v as usize][u as usize] = weight;
        }

        match (existed, weight != 0.0) {
            (false, true) => self.num_edges += 1,
            (true, false) => self.num_edges -= 1,
            _ => {}
        }
    }
}

impl GraphNew for AdjMatrix {
    fn new(directed: bool, weighted: bool) -> Self {
        Self {
            labels: Labels::default(),
            weights: Vec::new(),
            directed,
            weighted,
            num_edges: 0,
        }
    }
}

impl AdjacencyList for AdjMatrix {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.row(u).into_iter().flat_map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &w)| w != 0.0)
                .map(|(v, &w)| (v as Node, w))
        })
    }
}

impl AdjacencyTest for AdjMatrix {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight_of(u, v) != 0.0
    }

    fn weight_of(&self, u: Node, v: Node) -> Weight {
        self.row(u)
            .and_then(|row| row.get(v as usize))
            .copied()
            .unwrap_or(0.0)
    }
}

impl GraphVertexEditing for AdjMatrix {
    fn insert_vertex<S: Into<String>>(&mut self, label: S) -> bool {
        if self.labels.insert(label.into()).is_none() {
            return false;
        }

        for row in self.weights.iter_mut() {
            row.push(0.0);
        }
        self.weights.push(vec![0.0; self.labels.len()]);
        true
    }

    fn remove_vertex(&mut self, label: &str) -> bool {
        let Some(x) = self.labels.remove(label) else {
            return false;
        };

        self.weights.remove(x as usize);
        for row in self.weights.iter_mut() {
            row.remove(x as usize);
        }
        self.recount_edges();
        true
    }
}

impl GraphEdgeEditing for AdjMatrix {
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool {
        if !self.has_endpoints(u, v) {
            return false;
        }

        let weight = self.effective_weight(weight);
        self.set_entry(u, v, weight);
        true
    }

    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.has_edge(u, v) {
            return false;
        }

        self.set_entry(u, v, 0.0);
        true
    }
}

/// Prints the label row followed by one row of weights per vertex
impl Display for AdjMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for label in self.labels() {
            write!(f, "\t{label}")?;
        }
        writeln!(f)?;

        for (u, row) in self.weights.iter().enumerate() {
            write!(f, "{}", self.labels.get(u as Node).unwrap_or_default())?;
            for w in row {
                write!(f, "\t{w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_ops!(test_adj_matrix, AdjMatrix);
