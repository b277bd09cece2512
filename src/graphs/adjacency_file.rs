//! Plain text adjacency files.
//!
//! ```text
//! n=3 m=2
//! 0
//! 1 10
//! 1
//! 2 2
//! ```
//!
//! The header declares the number of vertices `n` and edge lines `m`. A line
//! with a single value starts the block of that vertex, every following line
//! with two values `head weight` is an edge leaving it.

use std::{
    fmt::Display,
    fs::File,
    hash::Hash,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use ahash::{HashSet, HashSetExt};
use indicatif::ProgressIterator;
use itertools::Itertools;
use log::debug;
use thiserror::Error;

use super::{edge::WeightedEdge, hash_graph::HashGraph, Weight};
use crate::utility::get_progressspinner;

#[derive(Debug, Error)]
pub enum AdjacencyFileError {
    #[error("unable to read adjacency file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed header {0:?}, expected `n=<vertices> m=<edges>`")]
    MalformedHeader(String),
    #[error("line {line}: edge found before any vertex")]
    EdgeWithoutTail { line: usize },
    #[error("line {line}: unable to parse weight {weight:?}")]
    InvalidWeight { line: usize, weight: String },
    #[error("line {line}: expected one or two values but found {found}")]
    MalformedLine { line: usize, found: usize },
    #[error(
        "bad format: file declares n = {declared_vertices}, m = {declared_edges} \
         but contains {vertices} vertices and {edges} edges"
    )]
    CountMismatch {
        declared_vertices: usize,
        declared_edges: usize,
        vertices: usize,
        edges: usize,
    },
}

pub fn read_graph_from_adjacency_file<W: Weight>(
    path: &Path,
    symmetric: bool,
) -> Result<HashGraph<String, W>, AdjacencyFileError> {
    let reader = BufReader::new(File::open(path)?);
    let spinner = get_progressspinner("Reading adjacency file");
    let graph = parse_adjacency(reader, symmetric, |lines| lines.progress_with(spinner.clone()));
    spinner.finish_and_clear();
    graph
}

pub fn read_graph_from_adjacency<R: BufRead, W: Weight>(
    reader: R,
    symmetric: bool,
) -> Result<HashGraph<String, W>, AdjacencyFileError> {
    parse_adjacency(reader, symmetric, |lines| lines)
}

fn parse_adjacency<R, W, L, F>(
    reader: R,
    symmetric: bool,
    wrap_lines: F,
) -> Result<HashGraph<String, W>, AdjacencyFileError>
where
    R: BufRead,
    W: Weight,
    L: Iterator<Item = io::Result<String>>,
    F: FnOnce(io::Lines<R>) -> L,
{
    let mut lines = wrap_lines(reader.lines());

    let header = lines.next().transpose()?.unwrap_or_default();
    let (declared_vertices, declared_edges) = parse_header(&header)?;

    let mut graph = HashGraph::new();
    let mut vertices = HashSet::with_capacity(declared_vertices);
    let mut tail: Option<String> = None;
    let mut number_of_edges = 0;

    for (index, line) in lines.enumerate() {
        // the header is line 1
        let line_number = index + 2;
        let line = line?;
        let values = line.split_whitespace().collect_vec();

        match values.as_slice() {
            [] => continue,
            [vertex] => {
                graph.add_vertex(vertex.to_string());
                vertices.insert(vertex.to_string());
                tail = Some(vertex.to_string());
            }
            [head, weight] => {
                let tail = tail.as_ref().ok_or(AdjacencyFileError::EdgeWithoutTail {
                    line: line_number,
                })?;
                let weight: W = weight
                    .parse()
                    .map_err(|_| AdjacencyFileError::InvalidWeight {
                        line: line_number,
                        weight: weight.to_string(),
                    })?;

                let edge = WeightedEdge::new(tail.clone(), head.to_string(), weight);
                if symmetric {
                    graph.set_edge_bidirectional(&edge);
                } else {
                    graph.set_edge(&edge);
                }
                vertices.insert(head.to_string());
                number_of_edges += 1;
            }
            values => {
                return Err(AdjacencyFileError::MalformedLine {
                    line: line_number,
                    found: values.len(),
                })
            }
        }
    }

    if vertices.len() != declared_vertices || number_of_edges != declared_edges {
        return Err(AdjacencyFileError::CountMismatch {
            declared_vertices,
            declared_edges,
            vertices: vertices.len(),
            edges: number_of_edges,
        });
    }

    debug!(
        "parsed {} vertices and {} edge lines",
        vertices.len(),
        number_of_edges
    );

    Ok(graph)
}

/// Parses `n=<vertices> m=<edges>`. Only the order of the two values matters,
/// not the names in front of the `=`.
fn parse_header(header: &str) -> Result<(usize, usize), AdjacencyFileError> {
    let malformed = || AdjacencyFileError::MalformedHeader(header.to_string());

    let counts: Vec<usize> = header
        .split_whitespace()
        .map(|expression| {
            let (_, value) = expression.split_once('=').ok_or_else(malformed)?;
            value.parse().map_err(|_| malformed())
        })
        .collect::<Result<_, _>>()?;

    match counts.as_slice() {
        &[number_of_vertices, number_of_edges] => Ok((number_of_vertices, number_of_edges)),
        _ => Err(malformed()),
    }
}

/// Writes `edges` in adjacency format, one block per tail. Every edge becomes
/// exactly one edge line, so a reader has to pass `symmetric` itself if the
/// edges are meant to be undirected.
pub fn write_adjacency<Wr, V, W>(mut writer: Wr, edges: &[WeightedEdge<V, W>]) -> io::Result<()>
where
    Wr: Write,
    V: Display + Ord + Hash + Eq,
    W: Display,
{
    let vertices: HashSet<&V> = edges
        .iter()
        .flat_map(|edge| [edge.tail(), edge.head()])
        .collect();

    writeln!(writer, "n={} m={}", vertices.len(), edges.len())?;

    let sorted_edges = edges.iter().sorted_by(|a, b| a.tail().cmp(b.tail()));
    for (tail, block) in &sorted_edges.group_by(|edge| edge.tail()) {
        writeln!(writer, "{}", tail)?;
        for edge in block {
            writeln!(writer, "{} {}", edge.head(), edge.weight())?;
        }
    }

    writer.flush()
}
