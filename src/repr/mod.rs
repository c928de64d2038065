/*!
# Graph Representations

Two interchangeable storage backends implementing the full Graph Contract:

- [`AdjList`]: adjacency lists of `(neighbor, weight)` pairs kept in edge insertion order. Good for sparse graphs.
- [`AdjMatrix`]: a dense `n x n` weight matrix where `0` means "no edge". `O(1)` edge lookup.

Both store the vertex labels in a shared [`Labels`] table, so label handling and index compaction
behave identically. Whether a graph is directed and/or weighted is decided at construction.

### Duplicate edges
Re-inserting an existing edge `(u, v)` overwrites its weight in **both** representations; the list
representation keeps the edge at its original position in `u`'s neighborhood.
*/

use fxhash::FxHashMap;

use crate::{ops::*, *};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;

/// Ordered sequence of unique vertex labels with a reverse lookup.
///
/// The position of a label is the index of its vertex.
#[derive(Debug, Clone, Default)]
pub struct Labels {
    labels: Vec<String>,
    index: FxHashMap<String, Node>,
}

impl Labels {
    /// Appends `label` and returns its index or `None` if the label is already present
    pub fn insert(&mut self, label: String) -> Option<Node> {
        if self.index.contains_key(&label) {
            return None;
        }

        let u = self.labels.len() as Node;
        self.index.insert(label.clone(), u);
        self.labels.push(label);
        Some(u)
    }

    /// Removes `label` and returns the index it had. All higher indices shift down by one.
    pub fn remove(&mut self, label: &str) -> Option<Node> {
        let u = self.index.remove(label)?;
        self.labels.remove(u as usize);

        for (v, label) in self.labels.iter().enumerate().skip(u as usize) {
            self.index.insert(label.clone(), v as Node);
        }

        Some(u)
    }

    /// Returns the label of `u`
    pub fn get(&self, u: Node) -> Option<&str> {
        self.labels.get(u as usize).map(String::as_str)
    }

    /// Returns the index of `label`
    pub fn index_of(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }

    /// Returns the number of labels
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns *true* if there are no labels
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($struct:ident) => {
            impl GraphType for $struct {
                fn is_directed(&self) -> bool {
                    self.directed
                }

                fn is_weighted(&self) -> bool {
                    self.weighted
                }
            }

            impl GraphNodeOrder for $struct {
                fn number_of_nodes(&self) -> NumNodes {
                    self.labels.len() as NumNodes
                }
            }

            impl GraphEdgeOrder for $struct {
                fn number_of_edges(&self) -> NumEdges {
                    self.num_edges
                }
            }

            impl VertexLabels for $struct {
                fn label_of(&self, u: Node) -> Option<&str> {
                    self.labels.get(u)
                }

                fn index_of(&self, label: &str) -> Option<Node> {
                    self.labels.index_of(label)
                }
            }

            impl $struct {
                /// Unweighted graphs ignore the given weight
                fn effective_weight(&self, weight: Weight) -> Weight {
                    if self.weighted { weight } else { 1.0 }
                }

                /// Returns *true* if both endpoints are valid
                fn has_endpoints(&self, u: Node, v: Node) -> bool {
                    self.has_vertex(u) && self.has_vertex(v)
                }
            }
        };
    }

    pub(crate) use impl_common_graph_ops;
}
