/*!
# Snapshot

A read-only copy of the vertices and edges of a graph, suitable for exporting.

Edges are collected by scanning the neighbors of every vertex in representation order, so an
undirected edge `{u, v}` appears twice: once as `u -> v` and once as `v -> u`.
Only weighted graphs attach a label (the weight) to their edges.

```
use wgraphs::{prelude::*, snapshot::GraphSnapshot};

let g = AdjList::from_edges(true, true, 2, [(0, 1, 3.0)]);
let snapshot = GraphSnapshot::from_graph(&g);

assert_eq!(snapshot.nodes.len(), 2);
assert_eq!(snapshot.edges[0].label.as_deref(), Some("3"));
```
*/

use std::io::{BufWriter, Result, Write};

use serde::Serialize;

use crate::{ops::*, *};

/// A vertex given by its index and its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotNode {
    pub id: Node,
    pub label: String,
}

/// A stored edge; `label` is the weight for weighted graphs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEdge {
    pub from: Node,
    pub to: Node,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Node and edge lists of a graph at the time of the snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
}

impl GraphSnapshot {
    /// Takes a snapshot of `graph`
    pub fn from_graph<G: Graph>(graph: &G) -> Self {
        let nodes = graph
            .vertices()
            .zip(graph.labels())
            .map(|(id, label)| SnapshotNode {
                id,
                label: label.to_string(),
            })
            .collect();

        let edges = graph
            .edges()
            .map(|e| SnapshotEdge {
                from: e.from,
                to: e.to,
                label: graph.is_weighted().then(|| e.weight.to_string()),
            })
            .collect();

        Self { nodes, edges }
    }

    /// Writes the snapshot as pretty-printed JSON
    pub fn try_write_json<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = BufWriter::new(writer);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()
    }
}
