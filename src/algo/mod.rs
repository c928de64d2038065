/*!
# Graph Algorithms

This module provides the algorithms of this crate, all written against the [`Graph`] contract and
therefore usable with every representation.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, shortest paths, colorings, spanning trees, tours and flows.
Each of them is available as a method on the graph itself (e.g. `graph.bfs(0)`, `graph.dijkstra(0)`
or `graph.max_flow(s, t)`); algorithms with knobs are additionally provided as configurable structs.
*/

mod coloring;
mod network_flow;
mod shortest_path;
mod spanning_tree;
mod traversal;
mod tsp;

use crate::{
    error::{GraphError, Result, check_vertex},
    ops::*,
    *,
};

pub use coloring::*;
pub use network_flow::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
pub use tsp::*;
