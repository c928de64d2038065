/*!
Breadth-first and depth-first traversals.

Both are provided as lazy iterators yielding the visited nodes in order. Each reachable node is
returned exactly once. After an iterator is exhausted it can be restarted at the smallest yet
unvisited node via `try_restart_at_unvisited`, which allows covering all components.
*/

use std::collections::VecDeque;

use super::*;

/// Breadth-first search.
///
/// A node is marked as visited once it is enqueued, not when it is dequeued, so no node is ever
/// enqueued twice.
pub struct BFS<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G> BFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new BFS starting at `start`.
    ///
    /// `start` must be a valid node, see [`Traversal::bfs`] for a checked version.
    pub fn new(graph: &'a G, start: Node) -> Self {
        let mut visited = graph.vertex_bitset_unset();
        visited.set(start as usize, true);
        Self {
            graph,
            visited,
            queue: VecDeque::from([start]),
        }
    }

    /// Returns *true* if `u` has been discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get(u as usize).is_some_and(|bit| *bit)
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.queue.is_empty());
        match self.visited.first_zero() {
            None => false,
            Some(x) => {
                self.visited.set(x, true);
                self.queue.push_back(x as Node);
                true
            }
        }
    }
}

impl<G> Iterator for BFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            if !self.visited[v as usize] {
                self.visited.set(v as usize, true);
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.queue.len(),
            Some(self.queue.len() + self.visited.count_zeros()),
        )
    }
}

/// Depth-first search in pre-order.
///
/// The visiting order is exactly the one of the recursive formulation
/// `visit(u) { mark(u); yield u; for v in neighbors(u) { if !marked(v) { visit(v) } } }`,
/// but the recursion is replaced by an explicit stack of partially consumed neighborhoods.
pub struct DFS<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    stack: Vec<std::vec::IntoIter<Node>>,
    pending: Option<Node>,
}

impl<'a, G> DFS<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a new DFS starting at `start`.
    ///
    /// `start` must be a valid node, see [`Traversal::dfs`] for a checked version.
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            stack: Vec::new(),
            pending: Some(start),
        }
    }

    /// Returns *true* if `u` has been visited
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get(u as usize).is_some_and(|bit| *bit)
    }

    /// Tries to restart the search at an yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        debug_assert!(self.stack.is_empty() && self.pending.is_none());
        self.pending = self.visited.first_zero().map(|x| x as Node);
        self.pending.is_some()
    }

    fn visit(&mut self, u: Node) -> Node {
        self.visited.set(u as usize, true);
        self.stack
            .push(self.graph.neighbors_of(u).collect::<Vec<_>>().into_iter());
        u
    }
}

impl<G> Iterator for DFS<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(u) = self.pending.take() {
            return Some(self.visit(u));
        }

        loop {
            let neighbors = self.stack.last_mut()?;
            match neighbors.next() {
                Some(v) if !self.visited[v as usize] => return Some(self.visit(v)),
                Some(_) => {}
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Provides traversal methods on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjList::from_edges(false, false, 3, [(0, 2), (0, 1)]);
    ///
    /// let order: Vec<_> = g.bfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 2, 1]);
    /// ```
    fn bfs(&self, start: Node) -> Result<BFS<'_, Self>> {
        check_vertex(start, self.number_of_nodes())?;
        Ok(BFS::new(self, start))
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) pre-order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrix::from_edges(false, false, 4, [(0, 3), (0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.dfs(0).unwrap().collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// ```
    fn dfs(&self, start: Node) -> Result<DFS<'_, Self>> {
        check_vertex(start, self.number_of_nodes())?;
        Ok(DFS::new(self, start))
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
