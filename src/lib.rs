/*!
`wgraphs` is a small graph library for graphs whose vertices carry string labels and whose edges
are optionally **w**eighted and optionally directed.

# Representation

Vertices are addressed by their *positional index* `0..n` (as `u32`, see [`Node`]): the first inserted
vertex is `0`, the next one `1` and so on. Removing a vertex shifts all higher indices down by one.
Every vertex also carries a unique label which can be mapped back to its current index.
Edges are simple tuple-structs `Edge(Node, Node)`; together with a [`Weight`] (`f64`) they form a [`WeightedEdge`].

Unweighted graphs store weight `1` for every edge. Whether a graph is directed and/or weighted is fixed at construction.

### Available Representations

See the [`repr`] module:

- [`AdjList`](crate::repr::AdjList): adjacency lists kept in edge insertion order
- [`AdjMatrix`](crate::repr::AdjMatrix): a dense weight matrix where `0` means "no edge"

Both implement the full Graph Contract of [`ops`] and are interchangeable for all algorithms.

# Design

Configurable algorithms are provided as structs that can be altered using the *Builder* / *Setter* pattern
before running them on a graph (e.g. [`ExhaustiveColoring`](crate::algo::ExhaustiveColoring),
[`Prim`](crate::algo::Prim), [`LocalSearch`](crate::algo::LocalSearch)).
The commonly used functionality is also implemented via extension traits on the graph itself.

# Usage

- [`prelude`] includes definitions for nodes, edges, the graph operation traits and both representations,
- [`algo`] includes traversals, Dijkstra, colorings, spanning trees, tours and maximum flows (`graph.bfs(0)`, `graph.max_flow(s, t)`, ...),
- [`io`] reads graphs from edge-list files,
- [`snapshot`] exports the vertices and edges of a graph as JSON.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub mod snapshot;
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, repr::*};
}
