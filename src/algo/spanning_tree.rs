/*!
# Minimum Spanning Trees

- [`Prim`] grows a tree from a root node, always adding the cheapest edge leaving the tree.
- Kruskal's algorithm scans all edges by ascending weight and keeps those joining two different
  components of a [`UnionFind`].

Both are meant for connected undirected graphs. On directed graphs they follow the stored edge
directions, which yields *some* tree but not necessarily a minimum arborescence. On disconnected
graphs Prim stops once no edge leaves the tree and Kruskal returns a spanning forest; in both cases
[`SpanningTree::is_spanning`] is *false*.
*/

use log::trace;

use super::*;
use crate::utils::UnionFind;

/// The edges selected by a spanning tree algorithm in the order they were selected
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    edges: Vec<WeightedEdge>,
    total_weight: Weight,
    num_nodes: NumNodes,
}

impl SpanningTree {
    fn new(edges: Vec<WeightedEdge>, num_nodes: NumNodes) -> Self {
        let total_weight = edges.iter().map(|e| e.weight).sum();
        Self {
            edges,
            total_weight,
            num_nodes,
        }
    }

    /// Returns the selected edges in selection order
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Returns the sum of the weights of all selected edges
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Returns *true* if the edges connect all nodes of the graph
    pub fn is_spanning(&self) -> bool {
        self.num_nodes == 0 || self.edges.len() + 1 == self.num_nodes as usize
    }
}

/// Prim's algorithm with a configurable root (default: `0`).
///
/// In each round, the nodes already in the tree are scanned in the order they were added and the
/// edge of minimum weight to a node outside the tree is selected; ties go to the edge found first.
#[derive(Debug, Copy, Clone, Default)]
pub struct Prim {
    root: Node,
}

impl Prim {
    /// Creates a new configuration rooted at `0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node the tree is grown from
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Sets the node the tree is grown from
    pub fn root(mut self, root: Node) -> Self {
        self.set_root(root);
        self
    }

    /// Computes the tree. Fails if the root is not a node of a non-empty graph.
    pub fn run<G: Graph>(&self, graph: &G) -> Result<SpanningTree> {
        if !graph.is_empty() {
            check_vertex(self.root, graph.number_of_nodes())?;
        }
        Ok(grow_prim_tree(graph, self.root))
    }
}

/// `root` must be valid unless the graph is empty
fn grow_prim_tree<G: Graph>(graph: &G, root: Node) -> SpanningTree {
    let n = graph.number_of_nodes();
    if n == 0 {
        return SpanningTree::new(Vec::new(), 0);
    }

    let mut in_tree = graph.vertex_bitset_unset();
    let mut included = Vec::with_capacity(n as usize);
    let mut edges = Vec::with_capacity(n as usize - 1);

    in_tree.set(root as usize, true);
    included.push(root);

    while included.len() < n as usize {
        let mut cheapest: Option<WeightedEdge> = None;
        let mut min_weight = Weight::INFINITY;

        for &u in &included {
            for (v, weight) in graph.weighted_neighbors_of(u) {
                if !in_tree[v as usize] && weight < min_weight {
                    min_weight = weight;
                    cheapest = Some(Edge(u, v).with_weight(weight));
                }
            }
        }

        let Some(edge) = cheapest else {
            break;
        };

        trace!("Prim adds {edge}");
        in_tree.set(edge.to as usize, true);
        included.push(edge.to);
        edges.push(edge);
    }

    SpanningTree::new(edges, n)
}

/// Provides spanning tree algorithms on graphs
pub trait SpanningTrees: Graph {
    /// Runs Prim's algorithm from node `0`, see [`Prim`]
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjMatrix::from_edges(false, true, 3, [(0, 1, 4.0), (1, 2, 1.0), (0, 2, 2.0)]);
    ///
    /// let tree = g.prim();
    /// assert!(tree.is_spanning());
    /// assert_eq!(tree.total_weight(), 3.0);
    /// ```
    fn prim(&self) -> SpanningTree {
        grow_prim_tree(self, 0)
    }

    /// Runs Kruskal's algorithm.
    ///
    /// Every edge is considered once: undirected edges only as `(u, v)` with `u < v`, directed edges
    /// as stored. They are sorted stably by weight, so ties keep the scan order.
    fn kruskal(&self) -> SpanningTree {
        let mut candidates = self
            .edges()
            .filter(|e| self.is_directed() || e.from < e.to)
            .collect::<Vec<_>>();
        candidates.sort_by(|a, b| a.weight.total_cmp(&b.weight));

        let mut components = UnionFind::new(self.number_of_nodes());
        let edges = candidates
            .into_iter()
            .filter(|e| components.union(e.from, e.to))
            .collect();

        SpanningTree::new(edges, self.number_of_nodes())
    }
}

impl<G> SpanningTrees for G where G: Graph {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::*;

    fn square<G: GraphMut>() {
        let graph = G::from_edges(
            false,
            true,
            4,
            [(0, 1, 1.0), (1, 2, 2.0), (2, 3, 1.0), (0, 3, 4.0)],
        );

        for tree in [graph.prim(), graph.kruskal()] {
            assert!(tree.is_spanning());
            assert_eq!(tree.total_weight(), 4.0);

            let edges = tree.edges().iter().map(|e| e.edge().normalized()).sorted().collect_vec();
            assert_eq!(edges, vec![Edge(0, 1), Edge(1, 2), Edge(2, 3)]);
        }

        assert_eq!(
            graph.kruskal().edges().iter().map(|e| e.edge()).collect_vec(),
            vec![Edge(0, 1), Edge(2, 3), Edge(1, 2)]
        );
    }

    fn prim_equals_kruskal<G: GraphMut>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(13);

        for n in [2 as NumNodes, 5, 16, 40] {
            for _ in 0..5 {
                // a random path through all nodes keeps the graph connected
                let mut edges = (1..n)
                    .map(|v| (rng.random_range(0..v), v, rng.random_range(1..20) as Weight))
                    .collect_vec();
                edges.extend((0..2 * n).map(|_| {
                    (
                        rng.random_range(0..n),
                        rng.random_range(0..n),
                        rng.random_range(1..20) as Weight,
                    )
                }));

                let graph = G::from_edges(false, true, n, edges);
                let prim = graph.prim();
                let kruskal = graph.kruskal();

                assert!(prim.is_spanning());
                assert!(kruskal.is_spanning());
                assert_eq!(prim.total_weight(), kruskal.total_weight());

                let other_root = Prim::new().root(n - 1).run(&graph).unwrap();
                assert_eq!(other_root.total_weight(), prim.total_weight());
            }
        }
    }

    fn disconnected<G: GraphMut>() {
        let graph = G::from_edges(false, true, 5, [(0, 1, 2.0), (2, 3, 1.0), (3, 4, 5.0)]);

        let prim = graph.prim();
        assert!(!prim.is_spanning());
        assert_eq!(prim.edges().len(), 1);
        assert_eq!(prim.total_weight(), 2.0);

        let kruskal = graph.kruskal();
        assert!(!kruskal.is_spanning());
        assert_eq!(kruskal.edges().len(), 3);
        assert_eq!(kruskal.total_weight(), 8.0);
    }

    #[test]
    fn square_on_both() {
        square::<AdjList>();
        square::<AdjMatrix>();
    }

    #[test]
    fn prim_equals_kruskal_on_both() {
        prim_equals_kruskal::<AdjList>();
        prim_equals_kruskal::<AdjMatrix>();
    }

    #[test]
    fn disconnected_on_both() {
        disconnected::<AdjList>();
        disconnected::<AdjMatrix>();
    }

    #[test]
    fn trivial_graphs() {
        let empty = AdjList::new(false, true);
        assert!(empty.prim().is_spanning());
        assert!(empty.kruskal().edges().is_empty());
        assert!(Prim::new().run(&empty).is_ok());

        let single = AdjMatrix::from_edges(false, true, 1, [(0, 0, 3.0)]);
        assert!(single.prim().is_spanning());
        assert!(single.kruskal().is_spanning());
        assert_eq!(single.kruskal().total_weight(), 0.0);
        assert!(Prim::new().root(1).run(&single).is_err());
    }
}
