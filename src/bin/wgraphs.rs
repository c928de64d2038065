//! Command-line driver: loads an edge-list file and runs a single algorithm on it.

use std::{
    fmt::Display,
    fs::File,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use log::{info, warn};

use wgraphs::{algo::*, io::GraphRead, prelude::*, snapshot::GraphSnapshot};

#[derive(Parser)]
#[command(
    name = "wgraphs",
    about = "Run graph algorithms on a graph given as an edge list"
)]
struct Cli {
    /// Edge-list file with header `n m directed weighted`
    file: PathBuf,

    /// Graph representation to load the file into
    #[arg(long, value_enum, default_value_t = Repr::List)]
    repr: Repr,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, ValueEnum)]
enum Repr {
    List,
    Matrix,
}

#[derive(Copy, Clone, ValueEnum)]
enum TspMethod {
    Exhaustive,
    Nearest,
}

#[derive(Subcommand)]
enum Command {
    /// Breadth-first visit order
    Bfs { start: Node },
    /// Depth-first visit order
    Dfs { start: Node },
    /// Shortest distances and predecessors
    Dijkstra { start: Node },
    /// Vertex coloring: exhaustive, welsh-powell, dsatur or greedy
    Color {
        strategy: ColoringStrategy,
        /// Upper bound on the number of colors tried by the exhaustive search
        #[arg(long)]
        max_colors: Option<NumNodes>,
    },
    /// Minimum spanning tree by Prim's algorithm
    Prim {
        #[arg(long, default_value_t = 0)]
        root: Node,
    },
    /// Minimum spanning tree by Kruskal's algorithm
    Kruskal,
    /// Traveling salesman tour
    Tsp {
        #[arg(value_enum)]
        method: TspMethod,
        start: Node,
    },
    /// Maximum flow (defaults: source 0, sink n - 1)
    MaxFlow {
        source: Option<Node>,
        sink: Option<Node>,
    },
    /// Reverse single edges to increase the maximum flow
    LocalSearch {
        source: Option<Node>,
        sink: Option<Node>,
        #[arg(long, default_value_t = 1)]
        max_passes: usize,
    },
    /// Write vertices and edges as JSON (to stdout if no file is given)
    Export { out: Option<PathBuf> },
    /// Print the representation
    Print,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match cli.repr {
        Repr::List => run(load::<AdjList>(&cli.file)?, cli.command),
        Repr::Matrix => run(load::<AdjMatrix>(&cli.file)?, cli.command),
    }
}

fn load<G: GraphMut + GraphRead>(file: &Path) -> anyhow::Result<G> {
    let graph = G::try_read_edge_list_file(file)
        .with_context(|| format!("cannot read graph from {}", file.display()))?;

    info!(
        "Loaded {} graph with {} vertices and {} edges",
        match (graph.is_directed(), graph.is_weighted()) {
            (true, true) => "directed weighted",
            (true, false) => "directed",
            (false, true) => "undirected weighted",
            (false, false) => "undirected",
        },
        graph.number_of_nodes(),
        graph.number_of_edges()
    );

    Ok(graph)
}

fn label<G: Graph>(graph: &G, u: Node) -> &str {
    graph.label_of(u).unwrap_or("?")
}

fn report_time(elapsed: Duration) {
    println!("Execution time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
}

/// Default flow terminals are the first and the last vertex
fn terminals<G: Graph>(graph: &G, source: Option<Node>, sink: Option<Node>) -> (Node, Node) {
    (
        source.unwrap_or(0),
        sink.unwrap_or(graph.number_of_nodes().saturating_sub(1)),
    )
}

fn report_order<G: Graph>(graph: &G, name: &str, start: Node, order: &[Node], elapsed: Duration) {
    println!(
        "{name} from {}: {}",
        label(graph, start),
        order.iter().map(|&u| label(graph, u)).join(", ")
    );
    println!("Visited {} of {} vertices", order.len(), graph.len());
    report_time(elapsed);
}

fn report_tree<G: Graph>(graph: &G, name: &str, tree: &SpanningTree, elapsed: Duration) {
    if !tree.is_spanning() {
        warn!("The graph is not connected, the result is not a spanning tree");
    }

    println!("{name} minimum spanning tree:");
    for e in tree.edges() {
        println!(
            "{} - {} ({})",
            label(graph, e.from),
            label(graph, e.to),
            e.weight
        );
    }
    println!("Total weight: {}", tree.total_weight());
    report_time(elapsed);
}

fn run<G: GraphMut + Display>(mut graph: G, command: Command) -> anyhow::Result<()> {
    let timer = Instant::now();

    match command {
        Command::Bfs { start } => {
            let order = graph.bfs(start)?.collect_vec();
            report_order(&graph, "BFS", start, &order, timer.elapsed());
        }

        Command::Dfs { start } => {
            let order = graph.dfs(start)?.collect_vec();
            report_order(&graph, "DFS", start, &order, timer.elapsed());
        }

        Command::Dijkstra { start } => {
            let paths = graph.dijkstra(start)?;
            let elapsed = timer.elapsed();

            println!("Shortest paths from {}", label(&graph, start));
            for u in graph.vertices() {
                let predecessor = paths
                    .predecessor_of(u)
                    .map_or("N/A", |p| label(&graph, p));
                println!(
                    "{}: distance {}, predecessor {predecessor}",
                    label(&graph, u),
                    paths.distance_to(u)
                );
            }
            report_time(elapsed);
        }

        Command::Color {
            strategy,
            max_colors,
        } => {
            let coloring = match (strategy, max_colors) {
                (ColoringStrategy::Exhaustive, Some(k)) => {
                    ExhaustiveColoring::new().max_colors(k).run(&graph)
                }
                _ => graph.color_with(strategy),
            };
            let elapsed = timer.elapsed();

            match coloring {
                None => println!("{strategy}: no coloring within the given number of colors"),
                Some(coloring) => {
                    println!("{strategy}: {} colors", coloring.num_colors());
                    if graph.len() <= 10 {
                        for (u, color) in graph.vertices().zip(coloring.colors()) {
                            println!("{}: {color}", label(&graph, u));
                        }
                    }
                }
            }
            report_time(elapsed);
        }

        Command::Prim { root } => {
            let tree = Prim::new().root(root).run(&graph)?;
            report_tree(&graph, "Prim", &tree, timer.elapsed());
        }

        Command::Kruskal => {
            let tree = graph.kruskal();
            report_tree(&graph, "Kruskal", &tree, timer.elapsed());
        }

        Command::Tsp { method, start } => {
            let tour = match method {
                TspMethod::Exhaustive => graph.tsp_exhaustive(start),
                TspMethod::Nearest => graph.tsp_nearest_neighbor(start),
            };
            let elapsed = timer.elapsed();

            match tour {
                Ok(tour) => {
                    println!(
                        "Tour: {}",
                        tour.path().iter().map(|&u| label(&graph, u)).join(" -> ")
                    );
                    println!("Cost: {}", tour.cost());
                }
                Err(TourError::InvalidStart(err)) => return Err(err.into()),
                Err(err) => println!("No tour: {err}"),
            }
            report_time(elapsed);
        }

        Command::MaxFlow { source, sink } => {
            let (source, sink) = terminals(&graph, source, sink);
            let flow = graph.max_flow(source, sink)?;
            let elapsed = timer.elapsed();

            println!(
                "Maximum flow from {} to {}: {flow}",
                label(&graph, source),
                label(&graph, sink)
            );
            report_time(elapsed);
        }

        Command::LocalSearch {
            source,
            sink,
            max_passes,
        } => {
            let (source, sink) = terminals(&graph, source, sink);
            let result = LocalSearch::new(source, sink)
                .max_passes(max_passes)
                .run(&mut graph)?;
            let elapsed = timer.elapsed();

            println!("Maximum flow: {}", result.initial);
            println!("Maximum flow after local search: {}", result.improved);
            for Edge(u, v) in &result.reversed {
                println!(
                    "Reversed {} -> {}",
                    label(&graph, *u),
                    label(&graph, *v)
                );
            }
            report_time(elapsed);
        }

        Command::Export { out } => {
            let snapshot = GraphSnapshot::from_graph(&graph);
            match out {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("cannot create {}", path.display()))?;
                    snapshot.try_write_json(file)?;
                    info!("Wrote snapshot to {}", path.display());
                }
                None => snapshot.try_write_json(std::io::stdout().lock())?,
            }
        }

        Command::Print => print!("{graph}"),
    }

    Ok(())
}
