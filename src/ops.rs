/*!
# Graph Contract

The operations every representation exposes, uniformly over vertex indices `0..n`.
They are split into small traits (mirroring which part of a graph they touch) and bundled into the
umbrella traits [`Graph`] (read-only) and [`GraphMut`] (editable) which all algorithms depend on.

Contract operations never panic on invalid indices: queries return a sentinel (`false`, `0`, an empty
iterator or `None`) and mutators return `false`.
*/

use std::ops::Range;

use crate::*;

/// Whether edges are directed and/or weighted
pub trait GraphType {
    /// Returns *true* if edges are directed
    fn is_directed(&self) -> bool;

    /// Returns *true* if edge weights are meaningful. Unweighted graphs store weight `1` for every edge.
    fn is_weighted(&self) -> bool;

    /// Returns *true* if edges are undirected
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the range of valid node indices.
    /// The range does not borrow the graph and hence may be used while the graph is mutated.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if `u` is a valid node index
    fn has_vertex(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset(self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph. An undirected edge is counted once.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Access to the labels of the vertices
pub trait VertexLabels: GraphNodeOrder {
    /// Returns the label of node `u` or `None` if `u >= n`
    fn label_of(&self, u: Node) -> Option<&str>;

    /// Returns the current index of the vertex labelled `label`
    fn index_of(&self, label: &str) -> Option<Node>;

    /// Returns the labels of all vertices in index order
    fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.vertices().filter_map(|u| self.label_of(u))
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (out-)neighbors of `u` together with the edge weights.
    /// The list representation yields edges in insertion order, the matrix representation
    /// in ascending index order. Yields nothing if `u >= n`.
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_;

    /// Returns an iterator over the (out-)neighbors of `u`.
    /// Yields nothing if `u >= n`.
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }

    /// Returns the number of (outgoing) neighbors of `u`
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns the degrees of all nodes in index order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex
    fn edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, weight)| Edge(u, v).with_weight(weight))
    }

    /// Returns an iterator over all stored edges, scanning nodes in index order.
    /// For undirected graphs each edge `{u, v}` is reported in both orientations.
    fn edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(move |u| self.edges_of(u))
    }
}

/// Trait to test existence of edges
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge `(u, v)` exists. Returns *false* for invalid indices.
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns the weight of `(u, v)` or `0` if no such edge exists or the indices are invalid
    fn weight_of(&self, u: Node, v: Node) -> Weight;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph without vertices
    fn new(directed: bool, weighted: bool) -> Self;
}

/// Provides functions to insert/delete vertices
pub trait GraphVertexEditing {
    /// Appends a new vertex with the given label, assigning it the next index.
    /// Returns *false* if the label is already present.
    fn insert_vertex<S: Into<String>>(&mut self, label: S) -> bool;

    /// Removes the vertex with the given label together with all edges touching it.
    /// All vertices with a higher index shift down by one.
    /// Returns *false* if the label is not present.
    fn remove_vertex(&mut self, label: &str) -> bool;

    /// Inserts all labels in order and returns the number of inserted (previously absent) labels
    fn insert_vertices<S, I>(&mut self, labels: I) -> NumNodes
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        labels
            .into_iter()
            .map(|label| self.insert_vertex(label) as NumNodes)
            .sum()
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing {
    /// Adds the edge `(u, v)` with weight `weight` (forced to `1` for unweighted graphs).
    /// For undirected graphs, `(v, u)` is added as well.
    /// Inserting an existing edge overwrites its weight.
    /// Returns *false* if `u >= n || v >= n`.
    fn insert_edge(&mut self, u: Node, v: Node, weight: Weight) -> bool;

    /// Removes the edge `(u, v)` (and `(v, u)` for undirected graphs).
    /// Returns *true* exactly if an edge was removed.
    fn remove_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds all edges in the collection and returns how many of them referenced valid nodes
    fn insert_edges<E, I>(&mut self, edges: I) -> NumEdges
    where
        E: Into<WeightedEdge>,
        I: IntoIterator<Item = E>,
    {
        edges
            .into_iter()
            .map(|e| {
                let WeightedEdge { from, to, weight } = e.into();
                self.insert_edge(from, to, weight) as NumEdges
            })
            .sum()
    }
}

/// The read-only Graph Contract every algorithm is written against
pub trait Graph:
    GraphType + GraphNodeOrder + GraphEdgeOrder + VertexLabels + AdjacencyList + AdjacencyTest
{
}

impl<G> Graph for G where
    G: GraphType + GraphNodeOrder + GraphEdgeOrder + VertexLabels + AdjacencyList + AdjacencyTest
{
}

/// The Graph Contract including all mutators
pub trait GraphMut: Graph + GraphNew + GraphVertexEditing + GraphEdgeEditing {}

impl<G> GraphMut for G where G: Graph + GraphNew + GraphVertexEditing + GraphEdgeEditing {}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch {
    /// Creates a graph with `n` nodes labelled `"0"` to `"n - 1"` and inserts all edges
    fn from_edges<E, I>(directed: bool, weighted: bool, n: NumNodes, edges: I) -> Self
    where
        E: Into<WeightedEdge>,
        I: IntoIterator<Item = E>;
}

impl<G> GraphFromScratch for G
where
    G: GraphNew + GraphVertexEditing + GraphEdgeEditing,
{
    fn from_edges<E, I>(directed: bool, weighted: bool, n: NumNodes, edges: I) -> Self
    where
        E: Into<WeightedEdge>,
        I: IntoIterator<Item = E>,
    {
        let mut graph = Self::new(directed, weighted);
        graph.insert_vertices((0..n).map(|u| u.to_string()));
        graph.insert_edges(edges);
        graph
    }
}
