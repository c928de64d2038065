/*!
Single-source shortest paths with non-negative weights.

Dijkstra's algorithm selects the next node by a linear scan over all tentative distances, which
costs `O(n^2)` but needs no priority queue. Ties are broken towards the smaller index.
*/

use super::*;

/// Distances and shortest-path tree computed from a single source
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: Node,
    distances: Vec<Weight>,
    predecessors: Vec<Option<Node>>,
}

impl ShortestPaths {
    /// Returns the node the distances are measured from
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the distance from the source to `v` or `f64::INFINITY` if `v` is unreachable (or invalid)
    pub fn distance_to(&self, v: Node) -> Weight {
        self.distances
            .get(v as usize)
            .copied()
            .unwrap_or(Weight::INFINITY)
    }

    /// Returns *true* if there exists a path from the source to `v`
    pub fn is_reachable(&self, v: Node) -> bool {
        self.distance_to(v).is_finite()
    }

    /// Returns the node preceding `v` on a shortest path from the source.
    /// The source itself and unreachable nodes have no predecessor.
    pub fn predecessor_of(&self, v: Node) -> Option<Node> {
        self.predecessors.get(v as usize).copied().flatten()
    }

    /// Returns all distances in index order
    pub fn distances(&self) -> &[Weight] {
        &self.distances
    }

    /// Reconstructs a shortest path `source, ..., v` or returns `None` if `v` is unreachable
    pub fn path_to(&self, v: Node) -> Option<Vec<Node>> {
        if !self.is_reachable(v) {
            return None;
        }

        let mut path = vec![v];
        let mut u = v;
        while let Some(p) = self.predecessor_of(u) {
            path.push(p);
            u = p;
        }

        path.reverse();
        Some(path)
    }
}

/// Provides shortest-path computations on graphs
pub trait ShortestPath: AdjacencyList {
    /// Computes the distances from `source` to all nodes using Dijkstra's algorithm.
    /// All weights are assumed to be non-negative.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(true, true, 3, [(0, 1, 2.0), (1, 2, 3.0), (0, 2, 9.0)]);
    ///
    /// let paths = g.dijkstra(0).unwrap();
    /// assert_eq!(paths.distance_to(2), 5.0);
    /// assert_eq!(paths.predecessor_of(2), Some(1));
    /// ```
    fn dijkstra(&self, source: Node) -> Result<ShortestPaths> {
        check_vertex(source, self.number_of_nodes())?;

        let n = self.len();
        let mut distances = vec![Weight::INFINITY; n];
        let mut predecessors = vec![None; n];
        let mut visited = self.vertex_bitset_unset();

        distances[source as usize] = 0.0;

        while visited.not_all() {
            let mut closest = None;
            let mut min_distance = Weight::INFINITY;
            for (u, &d) in distances.iter().enumerate() {
                if !visited[u] && d < min_distance {
                    min_distance = d;
                    closest = Some(u as Node);
                }
            }

            let Some(u) = closest else {
                break;
            };
            visited.set(u as usize, true);

            for (v, weight) in self.weighted_neighbors_of(u) {
                let candidate = min_distance + weight;
                if candidate < distances[v as usize] {
                    distances[v as usize] = candidate;
                    predecessors[v as usize] = Some(u);
                }
            }
        }

        Ok(ShortestPaths {
            source,
            distances,
            predecessors,
        })
    }
}

impl<G> ShortestPath for G where G: AdjacencyList {}
