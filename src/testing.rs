/// Every representation has to satisfy the Graph Contract in all four flavours
/// (directed/undirected x weighted/unweighted).
///
/// The tests compare the graph against a plain map model filled with the same random edges.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use std::collections::BTreeMap;

            use crate::{ops::*, repr::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            const FLAVOURS: [(bool, bool); 4] =
                [(true, true), (true, false), (false, true), (false, false)];

            type Model = BTreeMap<(Node, Node), Weight>;

            /// Creates a list of `m` random edges with positive integral weights for nodes `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: NumEdges) -> Vec<WeightedEdge> {
                (0..m)
                    .map(|_| {
                        let u = rng.random_range(0..n);
                        let v = rng.random_range(0..n);
                        let w = rng.random_range(1..10) as Weight;
                        Edge(u, v).with_weight(w)
                    })
                    .collect_vec()
            }

            fn model_insert(model: &mut Model, directed: bool, weighted: bool, e: WeightedEdge) {
                let w = if weighted { e.weight } else { 1.0 };
                model.insert((e.from, e.to), w);
                if !directed {
                    model.insert((e.to, e.from), w);
                }
            }

            fn model_edges(model: &Model, directed: bool) -> NumEdges {
                model
                    .keys()
                    .filter(|&&(u, v)| directed || u <= v)
                    .count() as NumEdges
            }

            fn assert_matches_model(graph: &$graph, model: &Model, n: NumNodes) {
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.number_of_edges(), model_edges(model, graph.is_directed()));

                for u in 0..n {
                    let expected = model
                        .range((u, 0)..(u + 1, 0))
                        .map(|(&(_, v), &w)| (v, w))
                        .collect_vec();

                    let mut actual = graph.weighted_neighbors_of(u).collect_vec();
                    actual.sort_by_key(|&(v, _)| v);

                    assert_eq!(actual, expected);
                    assert_eq!(graph.degree_of(u) as usize, expected.len());

                    for v in 0..n {
                        let w = model.get(&(u, v)).copied().unwrap_or(0.0);
                        assert_eq!(graph.has_edge(u, v), w != 0.0);
                        assert_eq!(graph.weight_of(u, v), w);
                    }
                }
            }

            fn build(rng: &mut Pcg64Mcg, directed: bool, weighted: bool, n: NumNodes, m: NumEdges) -> ($graph, Model) {
                let mut graph = <$graph>::new(directed, weighted);
                assert_eq!(graph.insert_vertices((0..n).map(|u| format!("v{u}"))), n);

                let mut model = Model::new();
                for e in random_edges(rng, n, m) {
                    assert!(graph.insert_edge(e.from, e.to, e.weight));
                    model_insert(&mut model, directed, weighted, e);
                }

                (graph, model)
            }

            #[test]
            fn graph_new() {
                for (directed, weighted) in FLAVOURS {
                    let mut graph = <$graph>::new(directed, weighted);
                    assert!(graph.is_empty());
                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.is_directed(), directed);
                    assert_eq!(graph.is_weighted(), weighted);

                    for n in 1..20 {
                        assert!(graph.insert_vertex(n.to_string()));
                        assert!(!graph.insert_vertex(n.to_string()));
                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.index_of(&n.to_string()), Some(n - 1));
                        assert_eq!(graph.label_of(n - 1), Some(n.to_string().as_str()));
                    }

                    assert!(graph.is_singleton_graph());
                    assert_eq!(graph.labels().collect_vec(), (1..20).map(|u| u.to_string()).collect_vec());
                }
            }

            #[test]
            fn adjacency() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for (directed, weighted) in FLAVOURS {
                    for n in [1 as NumNodes, 10, 25] {
                        for m in [n, n * 3, n * 8] {
                            let (graph, model) = build(rng, directed, weighted, n, m);
                            assert_matches_model(&graph, &model, n);

                            let mut edges = graph.edges().map(|e| (e.from, e.to, e.weight)).collect_vec();
                            edges.sort_by_key(|&(u, v, _)| (u, v));
                            assert_eq!(edges, model.iter().map(|(&(u, v), &w)| (u, v, w)).collect_vec());
                        }
                    }
                }
            }

            #[test]
            fn duplicate_insert_overwrites() {
                for (directed, weighted) in FLAVOURS {
                    let mut graph = <$graph>::from_edges(directed, weighted, 3, [(0, 1, 2.0)]);
                    assert!(graph.insert_edge(0, 1, 5.0));

                    let expected = if weighted { 5.0 } else { 1.0 };
                    assert_eq!(graph.number_of_edges(), 1);
                    assert_eq!(graph.weight_of(0, 1), expected);
                    assert_eq!(graph.has_edge(1, 0), !directed);
                    if !directed {
                        assert_eq!(graph.weight_of(1, 0), expected);
                    }
                }
            }

            #[test]
            fn edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for (directed, weighted) in FLAVOURS {
                    for n in [10 as NumNodes, 25] {
                        let (mut graph, mut model) = build(rng, directed, weighted, n, n * 4);

                        for _ in 0..n * 4 {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            let present = model.remove(&(u, v)).is_some();
                            if !directed {
                                model.remove(&(v, u));
                            }

                            assert_eq!(graph.remove_edge(u, v), present);
                            assert!(!graph.has_edge(u, v));
                            assert_eq!(graph.number_of_edges(), model_edges(&model, directed));
                        }

                        assert_matches_model(&graph, &model, n);
                    }
                }
            }

            #[test]
            fn vertex_removal() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);

                for (directed, weighted) in FLAVOURS {
                    let n = 12 as NumNodes;
                    let (mut graph, mut model) = build(rng, directed, weighted, n, n * 4);
                    let mut labels = (0..n).map(|u| format!("v{u}")).collect_vec();

                    for remaining in (1..n).rev() {
                        let x = rng.random_range(0..=remaining);
                        let label = labels.remove(x as usize);

                        assert!(graph.remove_vertex(&label));
                        assert!(!graph.remove_vertex(&label));

                        let shift = |u: Node| if u > x { u - 1 } else { u };
                        model = model
                            .into_iter()
                            .filter(|&((u, v), _)| u != x && v != x)
                            .map(|((u, v), w)| ((shift(u), shift(v)), w))
                            .collect();

                        assert_matches_model(&graph, &model, remaining);
                        for (u, label) in labels.iter().enumerate() {
                            assert_eq!(graph.index_of(label), Some(u as Node));
                        }
                    }
                }
            }

            #[test]
            fn invalid_indices() {
                for (directed, weighted) in FLAVOURS {
                    let mut graph = <$graph>::from_edges(directed, weighted, 3, [(0, 1), (1, 2)]);

                    assert!(!graph.has_edge(3, 0));
                    assert!(!graph.has_edge(0, 3));
                    assert_eq!(graph.weight_of(7, 1), 0.0);
                    assert_eq!(graph.neighbors_of(3).count(), 0);
                    assert_eq!(graph.degree_of(3), 0);
                    assert_eq!(graph.label_of(3), None);
                    assert_eq!(graph.index_of("3"), None);

                    assert!(!graph.insert_edge(0, 3, 1.0));
                    assert!(!graph.insert_edge(INVALID_NODE, 0, 1.0));
                    assert!(!graph.remove_edge(0, 3));
                    assert!(!graph.remove_edge(0, 2));
                    assert!(!graph.remove_vertex("3"));

                    assert_eq!(graph.number_of_edges(), 2);
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
