/*!
# Maximum Flows

- [`FordFulkerson`] computes a maximum `(s, t)`-flow on a [`ResidualMatrix`] built from the edge
  weights (interpreted as capacities). Augmenting paths are found by BFS, i.e. this is the
  Edmonds-Karp variant. The solver is an iterator over the augmenting paths it pushes flow along.
- [`LocalSearch`] tries to increase the maximum flow by reversing single edges of a directed graph
  in place.

The residual network is a private copy per computation; the graph itself is never touched by a
flow computation.
*/

use log::debug;

use super::*;

/// Dense matrix of residual capacities
#[derive(Debug, Clone)]
pub struct ResidualMatrix {
    capacity: Vec<Vec<Weight>>,
}

impl ResidualMatrix {
    /// Initializes all residual capacities with the weights of the graph (`0` for absent edges)
    pub fn from_graph<G: Graph>(graph: &G) -> Self {
        let capacity: Vec<Vec<Weight>> = graph
            .vertices()
            .map(|u| graph.vertices().map(|v| graph.weight_of(u, v)).collect())
            .collect();
        Self { capacity }
    }

    /// Returns the remaining capacity of `(u, v)` or `0` if the indices are invalid
    pub fn residual(&self, u: Node, v: Node) -> Weight {
        self.capacity
            .get(u as usize)
            .and_then(|row| row.get(v as usize))
            .copied()
            .unwrap_or(0.0)
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.capacity.len()
    }

    /// Returns *true* if there are no nodes
    pub fn is_empty(&self) -> bool {
        self.capacity.is_empty()
    }

    /// Pushes `amount` units of flow over `(u, v)`
    fn push_flow(&mut self, u: Node, v: Node, amount: Weight) {
        self.capacity[u as usize][v as usize] -= amount;
        self.capacity[v as usize][u as usize] += amount;
    }
}

/// A path from source to sink together with the flow pushed along it
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentingPath {
    pub nodes: Vec<Node>,
    pub bottleneck: Weight,
}

/// Ford-Fulkerson with BFS augmenting paths.
///
/// Each call to `next` finds a shortest (in number of edges) path of positive residual capacity,
/// pushes the minimum residual capacity along it and returns it. The iterator ends once the sink
/// is no longer reachable; [`FordFulkerson::total_flow`] then is the value of a maximum flow.
pub struct FordFulkerson {
    residual: ResidualMatrix,
    source: Node,
    sink: Node,
    predecessor: Vec<Node>,
    total_flow: Weight,
}

impl FordFulkerson {
    /// Creates a new solver. Fails if a terminal is invalid or `source == sink`.
    pub fn new<G: Graph>(graph: &G, source: Node, sink: Node) -> Result<Self> {
        check_vertex(source, graph.number_of_nodes())?;
        check_vertex(sink, graph.number_of_nodes())?;
        if source == sink {
            return Err(GraphError::IdenticalTerminals(source));
        }

        Ok(Self {
            residual: ResidualMatrix::from_graph(graph),
            source,
            sink,
            predecessor: vec![INVALID_NODE; graph.len()],
            total_flow: 0.0,
        })
    }

    /// Returns the flow pushed so far
    pub fn total_flow(&self) -> Weight {
        self.total_flow
    }

    /// Returns the current residual network
    pub fn residual(&self) -> &ResidualMatrix {
        &self.residual
    }

    /// Pushes flow until no augmenting path is left and returns the maximum flow value
    pub fn run(mut self) -> Weight {
        self.by_ref().for_each(drop);
        self.total_flow
    }

    /// BFS over edges of positive residual capacity, scanning candidates in index order.
    /// Stops as soon as the sink is discovered and returns whether it was.
    fn bfs(&mut self) -> bool {
        let n = self.residual.len();
        let mut visited = node_bitset(n as NumNodes);
        let mut queue = std::collections::VecDeque::from([self.source]);
        visited.set(self.source as usize, true);

        while let Some(u) = queue.pop_front() {
            for v in 0..n as Node {
                if !visited[v as usize] && self.residual.residual(u, v) > 0.0 {
                    visited.set(v as usize, true);
                    self.predecessor[v as usize] = u;
                    if v == self.sink {
                        return true;
                    }
                    queue.push_back(v);
                }
            }
        }

        false
    }
}

impl Iterator for FordFulkerson {
    type Item = AugmentingPath;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.bfs() {
            return None;
        }

        let mut nodes = vec![self.sink];
        let mut v = self.sink;
        while v != self.source {
            v = self.predecessor[v as usize];
            nodes.push(v);
        }
        nodes.reverse();

        let bottleneck = nodes
            .windows(2)
            .map(|e| self.residual.residual(e[0], e[1]))
            .fold(Weight::INFINITY, Weight::min);

        for e in nodes.windows(2) {
            self.residual.push_flow(e[0], e[1], bottleneck);
        }
        self.total_flow += bottleneck;

        debug!("Augmenting path {nodes:?} with bottleneck {bottleneck}");
        Some(AugmentingPath { nodes, bottleneck })
    }
}

/// Provides maximum flow computations on graphs
pub trait MaxFlow: Graph {
    /// Returns a solver yielding the augmenting paths of a maximum `(source, sink)`-flow
    fn ford_fulkerson(&self, source: Node, sink: Node) -> Result<FordFulkerson> {
        FordFulkerson::new(self, source, sink)
    }

    /// Computes the value of a maximum `(source, sink)`-flow where edge weights are capacities.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(true, true, 4, [(0, 1, 3.0), (1, 3, 2.0), (0, 2, 2.0), (2, 3, 3.0)]);
    /// assert_eq!(g.max_flow(0, 3).unwrap(), 4.0);
    /// ```
    fn max_flow(&self, source: Node, sink: Node) -> Result<Weight> {
        Ok(self.ford_fulkerson(source, sink)?.run())
    }
}

impl<G> MaxFlow for G where G: Graph {}

/// Outcome of a [`LocalSearch`]
#[derive(Debug, Clone, PartialEq)]
pub struct FlowImprovement {
    /// Maximum flow before any reversal
    pub initial: Weight,
    /// Maximum flow after all kept reversals
    pub improved: Weight,
    /// The original orientation of every edge that was reversed, in the order of reversal
    pub reversed: Vec<Edge>,
}

/// Greedy local search over edge orientations.
///
/// Every edge `(u, v)` (scanning `u` and then `v` in index order) is tentatively replaced by
/// `(v, u)` with the same weight; the reversal is kept only if it strictly increases the maximum
/// flow and undone otherwise. If `(v, u)` already exists, the reversal overwrites its weight and
/// undoing it restores the old weight. Self-loops are skipped and undirected graphs are left
/// untouched as reversing them changes nothing.
///
/// By default, a single sweep over all edges is made. More sweeps can be requested via
/// [`LocalSearch::max_passes`]; the search stops early after a sweep without improvement.
#[derive(Debug, Copy, Clone)]
pub struct LocalSearch {
    source: Node,
    sink: Node,
    max_passes: usize,
}

impl LocalSearch {
    /// Creates a new local search between `source` and `sink` with a single sweep
    pub fn new(source: Node, sink: Node) -> Self {
        Self {
            source,
            sink,
            max_passes: 1,
        }
    }

    /// Sets the maximum number of sweeps over all edges
    pub fn set_max_passes(&mut self, max_passes: usize) {
        self.max_passes = max_passes;
    }

    /// Sets the maximum number of sweeps over all edges
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.set_max_passes(max_passes);
        self
    }

    /// Runs the local search and modifies `graph` in place
    pub fn run<G>(&self, graph: &mut G) -> Result<FlowImprovement>
    where
        G: Graph + GraphEdgeEditing,
    {
        let initial = graph.max_flow(self.source, self.sink)?;
        let mut best = initial;
        let mut reversed = Vec::new();

        if graph.is_undirected() {
            debug!("Local search skipped on undirected graph");
            return Ok(FlowImprovement {
                initial,
                improved: best,
                reversed,
            });
        }

        for pass in 0..self.max_passes {
            let mut improved_in_pass = false;

            for u in graph.vertices() {
                for v in graph.vertices() {
                    if u == v || !graph.has_edge(u, v) {
                        continue;
                    }

                    let weight = graph.weight_of(u, v);
                    let opposite = graph.has_edge(v, u).then(|| graph.weight_of(v, u));
                    graph.remove_edge(u, v);
                    graph.insert_edge(v, u, weight);

                    let flow = graph.max_flow(self.source, self.sink)?;
                    if flow > best {
                        debug!("Pass {pass}: reversing {} increases flow to {flow}", Edge(u, v));
                        best = flow;
                        reversed.push(Edge(u, v));
                        improved_in_pass = true;
                    } else {
                        graph.remove_edge(v, u);
                        graph.insert_edge(u, v, weight);
                        if let Some(opposite) = opposite {
                            graph.insert_edge(v, u, opposite);
                        }
                    }
                }
            }

            if !improved_in_pass {
                break;
            }
        }

        Ok(FlowImprovement {
            initial,
            improved: best,
            reversed,
        })
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::repr::*;

    fn diamond<G: GraphMut>() {
        let graph = G::from_edges(
            true,
            true,
            4,
            [(0, 1, 3.0), (1, 3, 2.0), (0, 2, 2.0), (2, 3, 3.0)],
        );
        assert_eq!(graph.max_flow(0, 3).unwrap(), 4.0);
        assert_eq!(graph.max_flow(3, 0).unwrap(), 0.0);

        let paths = graph.ford_fulkerson(0, 3).unwrap().collect_vec();
        assert_eq!(
            paths,
            vec![
                AugmentingPath {
                    nodes: vec![0, 1, 3],
                    bottleneck: 2.0
                },
                AugmentingPath {
                    nodes: vec![0, 2, 3],
                    bottleneck: 2.0
                },
            ]
        );
    }

    fn textbook_network<G: GraphMut>() {
        let graph = G::from_edges(
            true,
            true,
            6,
            [
                (0, 1, 16.0),
                (0, 2, 13.0),
                (1, 2, 10.0),
                (2, 1, 4.0),
                (1, 3, 12.0),
                (3, 2, 9.0),
                (2, 4, 14.0),
                (4, 3, 7.0),
                (3, 5, 20.0),
                (4, 5, 4.0),
            ],
        );

        let mut solver = graph.ford_fulkerson(0, 5).unwrap();
        let pushed: Weight = solver.by_ref().map(|p| p.bottleneck).sum();
        assert_eq!(pushed, 23.0);
        assert_eq!(solver.total_flow(), 23.0);

        // no capacity left out of the source side of the minimum cut
        assert_eq!(solver.residual().residual(1, 3), 0.0);
        assert_eq!(solver.residual().residual(4, 3), 0.0);
        assert_eq!(solver.residual().residual(4, 5), 0.0);

        assert_eq!(graph.weight_of(1, 3), 12.0);
        assert_eq!(solver.residual().residual(6, 0), 0.0);
        assert_eq!(solver.residual().residual(0, 6), 0.0);
    }

    fn unweighted_counts_disjoint_paths<G: GraphMut>() {
        let graph = G::from_edges(
            false,
            false,
            6,
            [(0, 1), (0, 2), (0, 3), (1, 4), (2, 4), (3, 4), (4, 5)],
        );
        assert_eq!(graph.max_flow(0, 4).unwrap(), 3.0);
        assert_eq!(graph.max_flow(0, 5).unwrap(), 1.0);
    }

    fn invalid_terminals<G: GraphMut>() {
        let graph = G::from_edges(true, true, 3, [(0, 1, 1.0)]);
        assert_eq!(graph.max_flow(1, 1), Err(GraphError::IdenticalTerminals(1)));
        assert_eq!(
            graph.max_flow(0, 3),
            Err(GraphError::InvalidVertex {
                vertex: 3,
                num_nodes: 3
            })
        );
        assert_eq!(graph.max_flow(0, 2).unwrap(), 0.0);
    }

    fn local_search_reverses<G: GraphMut>() {
        let mut graph = G::from_edges(true, true, 3, [(0, 1, 5.0), (2, 1, 3.0)]);

        let result = LocalSearch::new(0, 2).run(&mut graph).unwrap();
        assert_eq!(
            result,
            FlowImprovement {
                initial: 0.0,
                improved: 3.0,
                reversed: vec![Edge(2, 1)],
            }
        );

        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(2, 1));
        assert_eq!(graph.weight_of(1, 2), 3.0);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.max_flow(0, 2).unwrap(), 3.0);
    }

    fn local_search_with_opposite_edges<G: GraphMut>() {
        // reversing 0 -> 1 overwrites the weak 1 -> 0
        let mut graph = G::from_edges(true, true, 2, [(1, 0, 1.0), (0, 1, 5.0)]);
        let result = LocalSearch::new(1, 0).run(&mut graph).unwrap();
        assert_eq!(
            result,
            FlowImprovement {
                initial: 1.0,
                improved: 5.0,
                reversed: vec![Edge(0, 1)],
            }
        );
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.weight_of(1, 0), 5.0);
        assert_eq!(graph.number_of_edges(), 1);

        // rejected reversals restore both directions with their weights
        let edges = [(0, 1, 3.0), (1, 3, 2.0), (0, 2, 2.0), (2, 3, 3.0), (3, 2, 1.0)];
        let mut graph = G::from_edges(true, true, 4, edges);

        let result = LocalSearch::new(0, 3).max_passes(3).run(&mut graph).unwrap();
        assert_eq!(result.initial, 4.0);
        assert_eq!(result.improved, 4.0);
        assert!(result.reversed.is_empty());

        for (u, v, w) in edges {
            assert_eq!(graph.weight_of(u, v), w);
        }
        assert_eq!(graph.number_of_edges(), 5);
    }

    fn local_search_skips_undirected<G: GraphMut>() {
        let mut graph = G::from_edges(false, true, 3, [(0, 1, 2.0), (1, 2, 1.0)]);
        let result = LocalSearch::new(0, 2).run(&mut graph).unwrap();
        assert_eq!(result.initial, 1.0);
        assert_eq!(result.improved, 1.0);
        assert!(result.reversed.is_empty());

        assert!(LocalSearch::new(2, 2).run(&mut graph).is_err());
    }

    #[test]
    fn diamond_on_both() {
        diamond::<AdjList>();
        diamond::<AdjMatrix>();
    }

    #[test]
    fn textbook_network_on_both() {
        textbook_network::<AdjList>();
        textbook_network::<AdjMatrix>();
    }

    #[test]
    fn unweighted_counts_disjoint_paths_on_both() {
        unweighted_counts_disjoint_paths::<AdjList>();
        unweighted_counts_disjoint_paths::<AdjMatrix>();
    }

    #[test]
    fn invalid_terminals_on_both() {
        invalid_terminals::<AdjList>();
        invalid_terminals::<AdjMatrix>();
    }

    #[test]
    fn local_search_on_both() {
        local_search_reverses::<AdjList>();
        local_search_reverses::<AdjMatrix>();
        local_search_with_opposite_edges::<AdjList>();
        local_search_with_opposite_edges::<AdjMatrix>();
        local_search_skips_undirected::<AdjList>();
        local_search_skips_undirected::<AdjMatrix>();
    }
}
