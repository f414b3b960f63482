//! # FlowNetwork
//!
//! The FlowNetwork-Format consists of a header `n m`, followed by `m` non-comment-lines
//! `u v c` representing a directed edge `(u, v)` with capacity `c`.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Lines, Result, Write},
    path::Path,
};

use super::*;
use crate::prelude::*;

/// A GraphReader for the FlowNetwork-Format
#[derive(Debug, Clone)]
pub struct FlowNetworkReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for FlowNetworkReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl FlowNetworkReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> FlowNetworkReader {
        self.comment_identifier = c.into();
        self
    }

    /// Reads the header and exactly as many edges as announced by it.
    /// Lines after the last announced edge are ignored.
    ///
    /// # Errors
    /// Returns `InvalidData` if a line cannot be parsed and `UnexpectedEof` if the input ends
    /// before all edges were read.
    pub fn try_read_edges<R: BufRead>(
        &self,
        reader: R,
    ) -> Result<(NumNodes, Vec<CapacitatedEdge>)> {
        let mut lines = FlowNetworkLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::UnexpectedEof, "Header not found"))?;
        let (n, m) = parse_header(&header)?;

        // `m` is untrusted; the vector grows with the lines actually present
        let mut edges = Vec::with_capacity(m.min(1 << 16) as usize);
        for i in 0..m {
            let line = lines.next_non_comment_line()?.ok_or(io_error!(
                ErrorKind::UnexpectedEof,
                format!("Expected {m} edges but found only {i}")
            ))?;
            edges.push(parse_edge(&line)?);
        }

        Ok((n, edges))
    }
}

impl GraphReader<ResidualGraph> for FlowNetworkReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<ResidualGraph> {
        let (n, edges) = self.try_read_edges(reader)?;
        ResidualGraph::try_from_edges(n, edges)
            .map_err(|err| io_error!(ErrorKind::InvalidData, err))
    }
}

/// Trait for creating graphs from a FlowNetworkReader.
/// Used as shorthand for default FlowNetworkReader settings
pub trait FlowNetworkRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_flow_network<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_flow_network_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_flow_network(BufReader::new(File::open(path)?))
    }
}

impl FlowNetworkRead for ResidualGraph {
    fn try_read_flow_network<R: BufRead>(reader: R) -> Result<Self> {
        FlowNetworkReader::default().try_read_graph(reader)
    }
}

struct FlowNetworkLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> FlowNetworkLines<'_, R> {
    /// Returns the next non-empty non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line))
                    if !self.comment_identifier.is_empty()
                        && line.starts_with(self.comment_identifier) =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// Parses `n m`
fn parse_header(line: &str) -> Result<(NumNodes, NumEdges)> {
    let mut parts = line.split_whitespace();

    let n = parse_next_value!(parts, "Header>Number of nodes");
    let m = parse_next_value!(parts, "Header>Number of edges");
    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        "Header is longer than expected"
    );

    Ok((n, m))
}

/// Parses `u v c`
fn parse_edge(line: &str) -> Result<CapacitatedEdge> {
    let mut parts = line.split_whitespace();

    let from = parse_next_value!(parts, "Source node");
    let dest = parse_next_value!(parts, "Target node");
    let capacity = parse_next_value!(parts, "Capacity");
    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        format!("Edge line '{line}' is longer than expected")
    );

    Ok(CapacitatedEdge(from, dest, capacity))
}

/// A writer for the FlowNetwork-Format.
/// Writes the input edges (not the reverse arcs) with their capacities in input order.
#[derive(Debug, Clone, Default)]
pub struct FlowNetworkWriter;

impl FlowNetworkWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self
    }
}

impl GraphWriter<ResidualGraph> for FlowNetworkWriter {
    fn try_write_graph<W: Write>(&self, graph: &ResidualGraph, mut writer: W) -> Result<()> {
        writeln!(
            writer,
            "{} {}",
            graph.number_of_nodes(),
            graph.number_of_original_edges()
        )?;

        for CapacitatedEdge(u, v, c) in graph.original_edges() {
            writeln!(writer, "{u} {v} {c}")?;
        }

        Ok(())
    }
}

/// Trait for writing a graph to a writer in the FlowNetwork-Format.
/// Shorthand for default settings.
pub trait FlowNetworkWrite {
    /// Tries to write the graph to a writer
    fn try_write_flow_network<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_flow_network_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_flow_network(writer)
    }
}

impl FlowNetworkWrite for ResidualGraph {
    fn try_write_flow_network<W: Write>(&self, writer: W) -> Result<()> {
        FlowNetworkWriter.try_write_graph(self, writer)
    }
}

/// Writes the value of a flow followed by one line `u v` per cut edge
pub fn write_flow_result<W: Write>(mut writer: W, flow: Capacity, cut: &[Edge]) -> Result<()> {
    writeln!(writer, "{flow}")?;
    for Edge(u, v) in cut {
        writeln!(writer, "{u} {v}")?;
    }
    writer.flush()
}
