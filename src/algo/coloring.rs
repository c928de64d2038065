/*!
# Vertex Colorings

Four interchangeable strategies assigning every node a color `1, 2, ...` such that adjacent nodes
never share a color:
- [`ExhaustiveColoring`]: backtracking over increasing color counts, returns a minimum coloring,
- Welsh-Powell: first-fit in order of descending degree,
- DSatur: first-fit on the node with the most distinctly colored neighbors,
- greedy: first-fit in index order.

Two nodes conflict if there is an edge between them in *either* direction; self-loops are ignored.
For undirected graphs this is plain adjacency.
*/

use std::{cmp::Reverse, fmt::Display, str::FromStr};

use fxhash::FxHashSet;
use log::{debug, trace};

use super::*;

/// Colors start at `1`
pub type Color = u32;

/// Color value of a node that was not yet colored
pub const UNCOLORED: Color = 0;

/// A complete assignment of colors to nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexColoring {
    colors: Vec<Color>,
    num_colors: NumNodes,
}

impl VertexColoring {
    fn from_colors(colors: Vec<Color>) -> Self {
        let num_colors = colors.iter().collect::<FxHashSet<_>>().len() as NumNodes;
        Self { colors, num_colors }
    }

    /// Returns the color of `u` or `None` if `u` is invalid
    pub fn color_of(&self, u: Node) -> Option<Color> {
        self.colors.get(u as usize).copied()
    }

    /// Returns the colors of all nodes in index order
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Returns the number of distinct colors used
    pub fn num_colors(&self) -> NumNodes {
        self.num_colors
    }

    /// Returns *true* if every node is colored and no edge `(u, v)` with `u != v` joins two
    /// nodes of the same color
    pub fn is_proper_for<G: Graph>(&self, graph: &G) -> bool {
        self.colors.len() == graph.len()
            && self.colors.iter().all(|&c| c != UNCOLORED)
            && graph
                .edges()
                .all(|e| e.from == e.to || self.colors[e.from as usize] != self.colors[e.to as usize])
    }
}

/// The available coloring algorithms
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColoringStrategy {
    Exhaustive,
    WelshPowell,
    DSatur,
    Greedy,
}

impl ColoringStrategy {
    pub const ALL: [ColoringStrategy; 4] = [
        ColoringStrategy::Exhaustive,
        ColoringStrategy::WelshPowell,
        ColoringStrategy::DSatur,
        ColoringStrategy::Greedy,
    ];
}

impl Display for ColoringStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColoringStrategy::Exhaustive => "exhaustive",
            ColoringStrategy::WelshPowell => "welsh-powell",
            ColoringStrategy::DSatur => "dsatur",
            ColoringStrategy::Greedy => "greedy",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ColoringStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.to_string() == s.to_ascii_lowercase())
            .ok_or_else(|| format!("unknown coloring strategy `{s}`"))
    }
}

/// Symmetric conflict lists without self-loops
fn conflict_lists<G: Graph>(graph: &G) -> Vec<Vec<Node>> {
    let mut conflicts = vec![Vec::new(); graph.len()];
    for u in graph.vertices() {
        for v in graph.neighbors_of(u) {
            if u == v {
                continue;
            }
            conflicts[u as usize].push(v);
            if graph.is_directed() {
                conflicts[v as usize].push(u);
            }
        }
    }

    if graph.is_directed() {
        for nbs in conflicts.iter_mut() {
            nbs.sort_unstable();
            nbs.dedup();
        }
    }

    conflicts
}

/// Returns the smallest color `>= 1` not held by any of the `neighbors`
fn first_available_color(neighbors: &[Node], colors: &[Color]) -> Color {
    let mut taken = bitvec::bitvec![0; neighbors.len() + 2];
    for &v in neighbors {
        let c = colors[v as usize] as usize;
        if c < taken.len() {
            taken.set(c, true);
        }
    }

    taken[1..].first_zero().map_or(1, |c| c as Color + 1)
}

/// Colors the nodes in the given order, each with its first available color
fn first_fit<I>(conflicts: &[Vec<Node>], order: I) -> VertexColoring
where
    I: IntoIterator<Item = Node>,
{
    let mut colors = vec![UNCOLORED; conflicts.len()];
    for u in order {
        colors[u as usize] = first_available_color(&conflicts[u as usize], &colors);
    }
    VertexColoring::from_colors(colors)
}

/// Minimum coloring by backtracking.
///
/// For `k = 1, 2, ...` all assignments of the colors `1..=k` are tried node by node in index
/// order, pruning as soon as a node conflicts with an already colored neighbor. The first `k` that
/// admits a complete assignment is minimal. Exponential, so only suited for small graphs.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExhaustiveColoring {
    max_colors: Option<NumNodes>,
}

impl ExhaustiveColoring {
    /// Creates a new configuration without a bound on the number of colors (beyond `n`)
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the largest color count that is tried
    pub fn set_max_colors(&mut self, max_colors: NumNodes) {
        self.max_colors = Some(max_colors);
    }

    /// Sets the largest color count that is tried
    pub fn max_colors(mut self, max_colors: NumNodes) -> Self {
        self.set_max_colors(max_colors);
        self
    }

    /// Computes a minimum coloring with at most the configured number of colors.
    /// Returns `None` if no such coloring exists.
    pub fn run<G: Graph>(&self, graph: &G) -> Option<VertexColoring> {
        let n = graph.number_of_nodes();
        if n == 0 {
            return Some(VertexColoring::from_colors(Vec::new()));
        }

        let conflicts = conflict_lists(graph);
        let mut colors = vec![UNCOLORED; n as usize];
        let max_colors = self.max_colors.unwrap_or(n).min(n);

        for k in 1..=max_colors {
            debug!("Trying to color {n} nodes with {k} colors");
            if Self::try_color(&conflicts, &mut colors, 0, k) {
                return Some(VertexColoring::from_colors(colors));
            }
        }

        None
    }

    /// Extends the partial coloring of `0..u` to all nodes using colors `1..=k`.
    /// On failure, `colors` is restored to its state before the call.
    fn try_color(conflicts: &[Vec<Node>], colors: &mut [Color], u: usize, k: Color) -> bool {
        if u == colors.len() {
            return true;
        }

        for c in 1..=k {
            if conflicts[u].iter().all(|&v| colors[v as usize] != c) {
                colors[u] = c;
                if Self::try_color(conflicts, colors, u + 1, k) {
                    return true;
                }
                colors[u] = UNCOLORED;
            }
        }

        false
    }
}

/// Provides coloring algorithms on graphs
pub trait Colorable: Graph {
    /// Computes a minimum coloring, see [`ExhaustiveColoring`].
    /// Never fails as `n` colors always suffice.
    fn exhaustive_coloring(&self) -> Option<VertexColoring> {
        ExhaustiveColoring::new().run(self)
    }

    /// Colors nodes in order of descending (out-)degree (ties by index), each with its first
    /// available color.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let star = AdjList::from_edges(false, false, 4, [(0, 1), (0, 2), (0, 3)]);
    /// let coloring = star.welsh_powell();
    ///
    /// assert_eq!(coloring.num_colors(), 2);
    /// assert_eq!(coloring.colors(), &[1, 2, 2, 2]);
    /// ```
    fn welsh_powell(&self) -> VertexColoring {
        let conflicts = conflict_lists(self);
        let mut order = self.vertices().collect::<Vec<_>>();
        order.sort_by_key(|&u| Reverse(self.degree_of(u)));
        first_fit(&conflicts, order)
    }

    /// DSatur: repeatedly colors the uncolored node with the largest number of distinct colors
    /// among its neighbors. Ties are broken by larger (out-)degree and then by the order of the
    /// remaining nodes (which is kept stably sorted by both keys).
    fn dsatur(&self) -> VertexColoring {
        let conflicts = conflict_lists(self);
        let mut colors = vec![UNCOLORED; self.len()];
        let mut neighbor_colors: Vec<FxHashSet<Color>> = vec![FxHashSet::default(); self.len()];
        let mut remaining = self.vertices().collect::<Vec<_>>();

        while !remaining.is_empty() {
            remaining.sort_by_key(|&u| {
                (
                    Reverse(neighbor_colors[u as usize].len()),
                    Reverse(self.degree_of(u)),
                )
            });
            let u = remaining.remove(0);

            let color = first_available_color(&conflicts[u as usize], &colors);
            trace!(
                "DSatur colors {u} (saturation {}) with {color}",
                neighbor_colors[u as usize].len()
            );
            colors[u as usize] = color;

            for &v in &conflicts[u as usize] {
                neighbor_colors[v as usize].insert(color);
            }
        }

        VertexColoring::from_colors(colors)
    }

    /// Colors nodes in index order, each with its first available color
    fn greedy_coloring(&self) -> VertexColoring {
        first_fit(&conflict_lists(self), self.vertices())
    }

    /// Runs the given strategy. Only the exhaustive strategy may return `None`.
    fn color_with(&self, strategy: ColoringStrategy) -> Option<VertexColoring> {
        match strategy {
            ColoringStrategy::Exhaustive => self.exhaustive_coloring(),
            ColoringStrategy::WelshPowell => Some(self.welsh_powell()),
            ColoringStrategy::DSatur => Some(self.dsatur()),
            ColoringStrategy::Greedy => Some(self.greedy_coloring()),
        }
    }
}

impl<G> Colorable for G where G: Graph {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::repr::*;

    const PETERSEN: [(Node, Node); 15] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 0),
        (0, 5),
        (1, 6),
        (2, 7),
        (3, 8),
        (4, 9),
        (5, 7),
        (7, 9),
        (9, 6),
        (6, 8),
        (8, 5),
    ];

    fn known_chromatic_numbers<G: GraphMut>() {
        let petersen = G::from_edges(false, false, 10, PETERSEN);
        assert_eq!(petersen.exhaustive_coloring().unwrap().num_colors(), 3);

        let k5 = G::from_edges(false, false, 5, (0..5 as Node).tuple_combinations::<(_, _)>());
        assert_eq!(k5.exhaustive_coloring().unwrap().num_colors(), 5);

        let c6 = G::from_edges(false, false, 6, (0..6 as Node).map(|u| (u, (u + 1) % 6)));
        assert_eq!(c6.exhaustive_coloring().unwrap().num_colors(), 2);

        let edgeless = G::from_edges(false, false, 4, Vec::<(Node, Node)>::new());
        let coloring = edgeless.exhaustive_coloring().unwrap();
        assert_eq!(coloring.num_colors(), 1);
        assert_eq!(coloring.colors(), &[1, 1, 1, 1]);

        let empty = G::new(false, false);
        assert_eq!(empty.exhaustive_coloring().unwrap().num_colors(), 0);
    }

    fn exhaustive_is_bounded<G: GraphMut>() {
        let k4 = G::from_edges(false, false, 4, (0..4 as Node).tuple_combinations::<(_, _)>());
        assert!(ExhaustiveColoring::new().max_colors(3).run(&k4).is_none());
        assert!(ExhaustiveColoring::new().max_colors(4).run(&k4).is_some());
    }

    fn all_valid_and_exhaustive_minimal<G: GraphMut>() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for directed in [false, true] {
            for n in [1 as NumNodes, 4, 7, 9] {
                for _ in 0..5 {
                    let edges = (0..2 * n)
                        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                        .collect_vec();
                    let graph = G::from_edges(directed, false, n, edges);

                    let optimum = graph.exhaustive_coloring().unwrap();
                    assert!(optimum.is_proper_for(&graph));

                    for strategy in ColoringStrategy::ALL {
                        let coloring = graph.color_with(strategy).unwrap();
                        assert!(coloring.is_proper_for(&graph), "{strategy} on {n} nodes");
                        assert!(optimum.num_colors() <= coloring.num_colors());
                    }
                }
            }
        }
    }

    fn heuristic_orders<G: GraphMut>() {
        // 0 - 1 - 2 - 3 with node 3 additionally adjacent to 4 and 5
        let graph = G::from_edges(false, false, 6, [(0, 1), (1, 2), (2, 3), (3, 4), (3, 5)]);

        assert_eq!(graph.greedy_coloring().colors(), &[1, 2, 1, 2, 1, 1]);
        // order by degree: 3, 1, 2, 0, 4, 5
        assert_eq!(graph.welsh_powell().colors(), &[2, 1, 2, 1, 2, 2]);
        // order of selection: 3, 2, 1, 4, 5, 0
        assert_eq!(graph.dsatur().colors(), &[2, 1, 2, 1, 2, 2]);

        // the greedy order is fooled by a crown graph, saturation is not
        let crown = G::from_edges(false, false, 6, [(0, 3), (0, 5), (2, 1), (2, 5), (4, 1), (4, 3)]);
        assert_eq!(crown.greedy_coloring().num_colors(), 3);
        assert_eq!(crown.dsatur().num_colors(), 2);

        // on directed graphs ties are broken by out-degree, not by the number of conflicts:
        // node 3 has three in-neighbors but no out-neighbor
        let directed = G::from_edges(true, false, 7, [(0, 1), (0, 2), (4, 3), (5, 3), (6, 3)]);
        assert_eq!(directed.welsh_powell().colors(), &[1, 2, 2, 2, 1, 1, 1]);
        assert_eq!(directed.dsatur().colors(), &[1, 2, 2, 2, 1, 1, 1]);
    }

    #[test]
    fn known_chromatic_numbers_on_both() {
        known_chromatic_numbers::<AdjList>();
        known_chromatic_numbers::<AdjMatrix>();
    }

    #[test]
    fn exhaustive_is_bounded_on_both() {
        exhaustive_is_bounded::<AdjList>();
        exhaustive_is_bounded::<AdjMatrix>();
    }

    #[test]
    fn all_valid_and_exhaustive_minimal_on_both() {
        all_valid_and_exhaustive_minimal::<AdjList>();
        all_valid_and_exhaustive_minimal::<AdjMatrix>();
    }

    #[test]
    fn heuristic_orders_on_both() {
        heuristic_orders::<AdjList>();
        heuristic_orders::<AdjMatrix>();
    }

    #[test]
    fn strategy_names() {
        for strategy in ColoringStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<ColoringStrategy>(), Ok(strategy));
        }
        assert_eq!("DSatur".parse::<ColoringStrategy>(), Ok(ColoringStrategy::DSatur));
        assert!("rainbow".parse::<ColoringStrategy>().is_err());
    }
}
