use std::io::Write;

use wgraphs::{algo::*, io::*, prelude::*, snapshot::GraphSnapshot};

const SQUARE: &str = "# square with a heavy diagonal\n\
4 5 0 1\n\
0 1 1\n\
1 2 2\n\
2 3 1\n\
0 3 4\n\
0 2 10\n";

const NETWORK: &str = "4 4 1 1\n0 1 3\n1 3 2\n0 2 2\n2 3 3\n";

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn square_pipeline<G: GraphMut + GraphRead>() {
    let input = write_temp(SQUARE);
    let graph = G::try_read_edge_list_file(input.path()).unwrap();

    assert_eq!(graph.number_of_nodes(), 4);
    assert_eq!(graph.number_of_edges(), 5);
    assert!(graph.is_undirected());

    let bfs = graph.bfs(0).unwrap().collect::<Vec<_>>();
    assert_eq!(bfs.len(), 4);
    assert_eq!(bfs[0], 0);

    let paths = graph.dijkstra(0).unwrap();
    assert_eq!(paths.distances(), &[0.0, 1.0, 3.0, 4.0]);

    assert_eq!(graph.prim().total_weight(), 4.0);
    assert_eq!(graph.kruskal().total_weight(), 4.0);

    let exhaustive = graph.exhaustive_coloring().unwrap();
    for strategy in ColoringStrategy::ALL {
        let coloring = graph.color_with(strategy).unwrap();
        assert!(coloring.is_proper_for(&graph), "{strategy}");
        assert!(exhaustive.num_colors() <= coloring.num_colors());
    }
    assert_eq!(exhaustive.num_colors(), 3);

    let tour = graph.tsp_exhaustive(0).unwrap();
    assert_eq!(tour.cost(), 8.0);

    let output = tempfile::NamedTempFile::new().unwrap();
    GraphSnapshot::from_graph(&graph)
        .try_write_json(output.reopen().unwrap())
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output.path()).unwrap()).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 4);
    assert_eq!(json["nodes"][2]["label"], "2");
    assert_eq!(json["edges"].as_array().unwrap().len(), 10);
    assert!(
        json["edges"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["from"] == 2 && e["to"] == 0 && e["label"] == "10")
    );
}

fn network_pipeline<G: GraphMut + GraphRead>() {
    let mut graph = G::try_read_edge_list(NETWORK.as_bytes()).unwrap();
    assert_eq!(graph.max_flow(0, 3).unwrap(), 4.0);

    let result = LocalSearch::new(0, 3).run(&mut graph).unwrap();
    assert_eq!(result.initial, 4.0);
    assert_eq!(result.improved, 4.0);
    assert!(result.reversed.is_empty());
    assert_eq!(graph.number_of_edges(), 4);
}

#[test]
fn square_pipeline_on_both() {
    square_pipeline::<AdjList>();
    square_pipeline::<AdjMatrix>();
}

#[test]
fn network_pipeline_on_both() {
    network_pipeline::<AdjList>();
    network_pipeline::<AdjMatrix>();
}

#[test]
fn vertex_removal_after_loading() {
    let mut graph = AdjList::try_read_edge_list(SQUARE.as_bytes()).unwrap();
    assert!(graph.remove_vertex("1"));

    assert_eq!(graph.index_of("2"), Some(1));
    assert_eq!(graph.number_of_edges(), 3);

    let snapshot = GraphSnapshot::from_graph(&graph);
    assert!(snapshot.nodes.iter().all(|n| n.label != "1"));
    assert!(snapshot.edges.iter().all(|e| e.from < 3 && e.to < 3));
}
