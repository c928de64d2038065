/*!
# Traveling Salesman

Closed tours visiting every node exactly once and returning to the start:
- the exhaustive search tries all `(n - 1)!` orders of the non-start nodes and keeps the cheapest
  valid one,
- the nearest-neighbor heuristic always moves to the cheapest unvisited neighbor.

A single node forms a tour only if it has a self-loop.
*/

use itertools::Itertools;
use log::debug;
use thiserror::Error;

use super::*;

/// Why no tour could be produced
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    #[error("the graph has no Hamiltonian cycle")]
    NoHamiltonianCycle,

    #[error("cannot visit all vertices: {at} has no unvisited neighbor after visiting {visited} vertices")]
    Unreachable { at: Node, visited: NumNodes },

    #[error("cannot return to the start vertex from {from}")]
    CannotReturn { from: Node },

    #[error(transparent)]
    InvalidStart(#[from] GraphError),
}

/// A closed tour `start, ..., start`
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    path: Vec<Node>,
    cost: Weight,
}

impl Tour {
    /// Returns the visited nodes; the first and the last node are the start
    pub fn path(&self) -> &[Node] {
        &self.path
    }

    /// Returns the sum of the weights of all edges of the tour
    pub fn cost(&self) -> Weight {
        self.cost
    }
}

/// Provides traveling salesman algorithms on graphs
pub trait TravelingSalesman: Graph {
    /// Finds a cheapest tour starting at `start` by trying all orders of the remaining nodes.
    /// Orders are enumerated lexicographically and ties keep the first one found.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(false, true, 3, [(0, 1, 1.0), (1, 2, 2.0), (2, 0, 3.0)]);
    ///
    /// let tour = g.tsp_exhaustive(0).unwrap();
    /// assert_eq!(tour.cost(), 6.0);
    /// assert_eq!(tour.path(), &[0, 1, 2, 0]);
    /// ```
    fn tsp_exhaustive(&self, start: Node) -> std::result::Result<Tour, TourError> {
        check_vertex(start, self.number_of_nodes())?;

        let remaining = self.vertices().filter(|&u| u != start).collect_vec();
        let mut best: Option<Tour> = None;

        for order in remaining.iter().copied().permutations(remaining.len()) {
            let Some(cost) = closed_walk_cost(self, start, &order) else {
                continue;
            };

            if best.as_ref().is_none_or(|tour| cost < tour.cost) {
                debug!("New best tour of cost {cost}");
                let mut path = Vec::with_capacity(order.len() + 2);
                path.push(start);
                path.extend(order);
                path.push(start);
                best = Some(Tour { path, cost });
            }
        }

        best.ok_or(TourError::NoHamiltonianCycle)
    }

    /// Builds a tour by always moving to the cheapest unvisited neighbor (ties go to the first one
    /// in neighbor order) and finally returning to `start`.
    fn tsp_nearest_neighbor(&self, start: Node) -> std::result::Result<Tour, TourError> {
        check_vertex(start, self.number_of_nodes())?;

        let mut visited = self.vertex_bitset_unset();
        let mut path = vec![start];
        let mut cost = 0.0;
        let mut current = start;
        visited.set(start as usize, true);

        while path.len() < self.len() {
            let mut nearest: Option<(Node, Weight)> = None;
            for (v, weight) in self.weighted_neighbors_of(current) {
                if !visited[v as usize] && nearest.is_none_or(|(_, w)| weight < w) {
                    nearest = Some((v, weight));
                }
            }

            let Some((next, weight)) = nearest else {
                return Err(TourError::Unreachable {
                    at: current,
                    visited: path.len() as NumNodes,
                });
            };

            visited.set(next as usize, true);
            path.push(next);
            cost += weight;
            current = next;
        }

        if !self.has_edge(current, start) {
            return Err(TourError::CannotReturn { from: current });
        }

        cost += self.weight_of(current, start);
        path.push(start);
        Ok(Tour { path, cost })
    }
}

impl<G> TravelingSalesman for G where G: Graph {}

/// Cost of the walk `start, order..., start` or `None` if an edge is missing
fn closed_walk_cost<G: Graph>(graph: &G, start: Node, order: &[Node]) -> Option<Weight> {
    let mut cost = 0.0;
    let mut current = start;
    for &next in order.iter().chain(std::iter::once(&start)) {
        if !graph.has_edge(current, next) {
            return None;
        }
        cost += graph.weight_of(current, next);
        current = next;
    }
    Some(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::*;

    /// Cheapest Hamiltonian cycle through `0` computed by plain recursion
    fn brute_force(weights: &[[Weight; 4]; 4]) -> Weight {
        fn extend(weights: &[[Weight; 4]; 4], path: &mut Vec<usize>, best: &mut Weight) {
            if path.len() == 4 {
                let cost: Weight = path
                    .windows(2)
                    .map(|w| weights[w[0]][w[1]])
                    .sum::<Weight>()
                    + weights[path[3]][0];
                *best = best.min(cost);
                return;
            }
            for v in 1..4 {
                if !path.contains(&v) {
                    path.push(v);
                    extend(weights, path, best);
                    path.pop();
                }
            }
        }

        let mut best = Weight::INFINITY;
        extend(weights, &mut vec![0], &mut best);
        best
    }

    fn complete_graph<G: GraphMut>() {
        let weights = [
            [0.0, 3.0, 9.0, 4.0],
            [3.0, 0.0, 2.0, 7.0],
            [9.0, 2.0, 0.0, 5.0],
            [4.0, 7.0, 5.0, 0.0],
        ];
        let edges = (0..4)
            .flat_map(|u| (u + 1..4).map(move |v| (u as Node, v as Node, weights[u][v])))
            .collect_vec();
        let graph = G::from_edges(false, true, 4, edges);

        let tour = graph.tsp_exhaustive(0).unwrap();
        assert_eq!(tour.cost(), brute_force(&weights));
        assert_eq!(tour.cost(), 14.0);
        assert_eq!(tour.path(), &[0, 1, 2, 3, 0]);

        let other_start = graph.tsp_exhaustive(2).unwrap();
        assert_eq!(other_start.cost(), 14.0);
        assert_eq!(other_start.path().first(), Some(&2));
        assert_eq!(other_start.path().last(), Some(&2));

        let greedy = graph.tsp_nearest_neighbor(0).unwrap();
        assert_eq!(greedy.path(), &[0, 1, 2, 3, 0]);
        assert_eq!(greedy.cost(), 14.0);
        assert!(greedy.cost() >= tour.cost());
    }

    fn missing_cycles<G: GraphMut>() {
        let path = G::from_edges(false, true, 4, [(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]);
        assert_eq!(path.tsp_exhaustive(0), Err(TourError::NoHamiltonianCycle));
        assert_eq!(
            path.tsp_nearest_neighbor(0),
            Err(TourError::CannotReturn { from: 3 })
        );
        assert_eq!(
            path.tsp_nearest_neighbor(1),
            Err(TourError::Unreachable { at: 0, visited: 2 })
        );

        let one_way = G::from_edges(true, true, 3, [(0, 1, 1.0), (1, 2, 1.0)]);
        assert_eq!(
            one_way.tsp_nearest_neighbor(0),
            Err(TourError::CannotReturn { from: 2 })
        );

        let directed_cycle = G::from_edges(true, true, 3, [(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0)]);
        assert_eq!(directed_cycle.tsp_exhaustive(1).unwrap().path(), &[1, 2, 0, 1]);
    }

    fn trivial<G: GraphMut>() {
        let single = G::from_edges(false, true, 1, Vec::<(Node, Node, Weight)>::new());
        assert_eq!(single.tsp_exhaustive(0), Err(TourError::NoHamiltonianCycle));
        assert!(matches!(
            single.tsp_nearest_neighbor(1),
            Err(TourError::InvalidStart(_))
        ));

        let looped = G::from_edges(false, true, 1, [(0, 0, 2.0)]);
        assert_eq!(looped.tsp_exhaustive(0).unwrap().cost(), 2.0);
        assert_eq!(looped.tsp_nearest_neighbor(0).unwrap().path(), &[0, 0]);
    }

    #[test]
    fn complete_graph_on_both() {
        complete_graph::<AdjList>();
        complete_graph::<AdjMatrix>();
    }

    #[test]
    fn missing_cycles_on_both() {
        missing_cycles::<AdjList>();
        missing_cycles::<AdjMatrix>();
    }

    #[test]
    fn trivial_on_both() {
        trivial::<AdjList>();
        trivial::<AdjMatrix>();
    }
}
