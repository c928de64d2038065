//! # EdgeList
//!
//! The EdgeList-Format consists of a header `n m directed weighted` (where `directed` and `weighted`
//! are `0` or `1`), followed by up to `m` non-comment-lines `u v [weight]` representing an edge
//! `(u, v)` between 0-indexed nodes. The weight is only read for weighted graphs.
//!
//! Vertices are labelled `"0"` to `"n - 1"`. Records referencing a node `>= n` are skipped with a
//! warning; missing trailing records are tolerated.

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines, Result},
    path::Path,
};

use log::{debug, warn};

use super::*;
use crate::{ops::*, *};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

/// The parsed first line of an edge list
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EdgeListHeader {
    pub number_of_nodes: NumNodes,
    pub number_of_edges: NumEdges,
    pub directed: bool,
    pub weighted: bool,
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphNew + GraphVertexEditing + GraphEdgeEditing,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = EdgeListLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next_record()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let header = parse_header(&header)?;

        let mut graph = G::new(header.directed, header.weighted);
        graph.insert_vertices((0..header.number_of_nodes).map(|u| u.to_string()));

        let mut records = 0;
        while records < header.number_of_edges {
            let Some(line) = lines.next_record()? else {
                debug!(
                    "Edge list ended after {records} of {} records",
                    header.number_of_edges
                );
                break;
            };
            records += 1;

            let edge = parse_edge(&line, header.weighted)?;
            if !graph.insert_edge(edge.from, edge.to, edge.weight) {
                warn!(
                    "Skipping edge {} as the graph only has {} nodes",
                    edge.edge(),
                    header.number_of_nodes
                );
            }
        }

        Ok(graph)
    }
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait GraphRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> GraphRead for G
where
    G: GraphNew + GraphVertexEditing + GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// Lines of the input without blank lines and comments
struct EdgeListLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> EdgeListLines<'_, R> {
    /// Returns the next non-empty non-comment-line if it exists or propagate an error
    fn next_record(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) if line.starts_with(self.comment_identifier) => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// Parses a `0`/`1` flag
fn parse_flag(value: u8, name: &str) -> Result<bool> {
    raise_error_unless!(
        value <= 1,
        ErrorKind::InvalidData,
        format!("Flag {name} must be 0 or 1, found {value}.")
    );
    Ok(value == 1)
}

/// Parses the header `n m directed weighted`
pub fn parse_header(line: &str) -> Result<EdgeListHeader> {
    let mut parts = line.split_whitespace();

    let number_of_nodes: NumNodes = parse_next_value!(parts, "Header>Number of nodes");
    let number_of_edges: NumEdges = parse_next_value!(parts, "Header>Number of edges");
    let directed: u8 = parse_next_value!(parts, "Header>Directed");
    let weighted: u8 = parse_next_value!(parts, "Header>Weighted");

    Ok(EdgeListHeader {
        number_of_nodes,
        number_of_edges,
        directed: parse_flag(directed, "directed")?,
        weighted: parse_flag(weighted, "weighted")?,
    })
}

/// Parses a record `u v [weight]`; unweighted records get weight `1`
fn parse_edge(line: &str, weighted: bool) -> Result<WeightedEdge> {
    let mut parts = line.split_whitespace();

    let from: Node = parse_next_value!(parts, "Source node");
    let to: Node = parse_next_value!(parts, "Target node");
    let weight: Weight = if weighted {
        parse_next_value!(parts, "Weight")
    } else {
        1.0
    };

    Ok(Edge(from, to).with_weight(weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::*;

    #[test]
    fn read_weighted_directed() {
        let input = "# a comment\n4 3 1 1\n0 1 2.5\n\n# another one\n1 2 4\n2 3 1\n";

        for graph in [
            AdjList::try_read_edge_list(input.as_bytes()).unwrap(),
            AdjList::try_read_edge_list(input.replace("\n", "\r\n").as_bytes()).unwrap(),
        ] {
            assert!(graph.is_directed());
            assert!(graph.is_weighted());
            assert_eq!(graph.number_of_nodes(), 4);
            assert_eq!(graph.number_of_edges(), 3);
            assert_eq!(graph.weight_of(0, 1), 2.5);
            assert!(!graph.has_edge(1, 0));
            assert_eq!(graph.label_of(3), Some("3"));
        }
    }

    #[test]
    fn unweighted_ignores_weight_column() {
        let input = "3 2 0 0\n0 1 7\n2 1\n";
        let graph = AdjMatrix::try_read_edge_list(input.as_bytes()).unwrap();

        assert!(graph.is_undirected());
        assert_eq!(graph.weight_of(0, 1), 1.0);
        assert_eq!(graph.weight_of(1, 2), 1.0);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn tolerated_anomalies() {
        // only the first 2 records count, one of them is out of range
        let input = "3 2 1 1\n0 5 1\n1 2 3\n0 1 1\n";
        let graph = AdjList::try_read_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(0, 1));

        // missing trailing records
        let graph = AdjList::try_read_edge_list("5 10 0 1\n0 1 2\n".as_bytes()).unwrap();
        assert_eq!(graph.number_of_nodes(), 5);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn custom_comment_identifier() {
        let input = "c header follows\n2 1 1 0\nc edge follows\n1 0\n";
        let graph: AdjList = EdgeListReader::new()
            .comment_identifier("c")
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert!(graph.has_edge(1, 0));
    }

    #[test]
    fn malformed_input() {
        for input in [
            "",
            "# only comments\n",
            "3 1 1\n",
            "3 1 2 0\n",
            "x 1 0 0\n",
            "3 1 0 1\n0 1\n",
            "3 1 0 0\n0 -1\n",
            "3 1 0 1\n0 1 heavy\n",
        ] {
            let err = AdjList::try_read_edge_list(input.as_bytes()).unwrap_err();
            assert!(
                matches!(err.kind(), ErrorKind::InvalidData | ErrorKind::NotFound),
                "{input:?}"
            );
        }
    }

    #[test]
    fn read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"2 1 0 1\n0 1 0.5\n").unwrap();

        let graph = AdjMatrix::try_read_edge_list_file(file.path()).unwrap();
        assert_eq!(graph.weight_of(1, 0), 0.5);

        assert!(AdjMatrix::try_read_edge_list_file(file.path().with_extension("missing")).is_err());
    }
}
