//! GML-style graph serialization.
//!
//! Output grammar, line by line:
//!
//! ```text
//! graph [
//! directed <0|1>
//! node [ id <int>
//! <attr-name> <float, 4 decimals>
//! ]
//! edge [ source <int> target <int> weight <float, 4 decimals>
//! ]
//! ]
//! ```
//!
//! One `node` block is written per key of the graph mapping and one `edge`
//! block per stored (source, target) record, so an undirected edge kept in
//! both directions appears twice. The closing `]` has no trailing newline.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Per-node attributes: attribute name → node id → value.
pub type NodeAttributes = BTreeMap<String, BTreeMap<NodeId, f64>>;

/// Writer configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GmlWriter {
    /// Emitted as `directed 1` when set, `directed 0` otherwise.
    pub directed: bool,
}

impl GmlWriter {
    pub fn new(directed: bool) -> Self {
        Self { directed }
    }

    /// Serialize `graph` with the requested node attributes into `out`.
    ///
    /// A node missing from an attribute's map gets no line for that
    /// attribute; the miss is logged and writing continues.
    pub fn write<W: Write>(&self, out: &mut W, graph: &Graph, attributes: &NodeAttributes) -> Result<()> {
        writeln!(out, "graph [")?;
        writeln!(out, "directed {}", u8::from(self.directed))?;
        for node in graph.nodes() {
            writeln!(out, "node [ id {node}")?;
            for (name, values) in attributes {
                match values.get(&node) {
                    Some(value) => writeln!(out, "{name} {value:.4}")?,
                    None => warn!("no {name} for node {node}"),
                }
            }
            writeln!(out, "]")?;
        }
        for (source, target, weight) in graph.arcs() {
            writeln!(out, "edge [ source {source} target {target} weight {weight:.4}")?;
            writeln!(out, "]")?;
        }
        write!(out, "]")?;
        Ok(())
    }

    /// Serialize into the file at `path`, creating or truncating it.
    ///
    /// The file is closed when this returns, whether or not writing succeeded.
    pub fn write_file<P: AsRef<Path>>(&self, path: P, graph: &Graph, attributes: &NodeAttributes) -> Result<()> {
        let path = path.as_ref();
        let mut out = BufWriter::new(File::create(path)?);
        self.write(&mut out, graph, attributes)?;
        out.flush()?;
        debug!(
            "wrote {} nodes, {} edge records to {}",
            graph.num_nodes(),
            graph.num_arcs(),
            path.display()
        );
        Ok(())
    }
}

/// Serialize `graph` into `out`.
pub fn write_gml<W: Write>(out: &mut W, graph: &Graph, directed: bool, attributes: &NodeAttributes) -> Result<()> {
    GmlWriter::new(directed).write(out, graph, attributes)
}

/// Serialize `graph` into the file at `path`.
pub fn write_gml_file<P: AsRef<Path>>(
    path: P,
    graph: &Graph,
    directed: bool,
    attributes: &NodeAttributes,
) -> Result<()> {
    GmlWriter::new(directed).write_file(path, graph, attributes)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GmlNode {
    pub id: NodeId,
    pub attributes: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GmlEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
}

/// A parsed graph document, records kept in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GmlDocument {
    pub directed: bool,
    pub nodes: Vec<GmlNode>,
    pub edges: Vec<GmlEdge>,
}

impl GmlDocument {
    /// Rebuild the mapping-of-mappings graph from the edge records.
    ///
    /// Nodes without edges have no entry in a [`Graph`] and are dropped.
    pub fn to_graph(&self) -> Graph {
        let mut graph = Graph::new();
        for e in &self.edges {
            graph.add_arc(e.source, e.target, e.weight);
        }
        graph
    }

    /// Collect node attributes back into name → node → value form.
    pub fn node_attributes(&self) -> NodeAttributes {
        let mut attrs = NodeAttributes::new();
        for node in &self.nodes {
            for (name, &value) in &node.attributes {
                attrs.entry(name.clone()).or_default().insert(node.id, value);
            }
        }
        attrs
    }
}

enum ParseState {
    Start,
    Graph,
    Node(GmlNode),
    Edge,
    Done,
}

fn parse_error(line: usize, message: impl Into<String>) -> Error {
    Error::Parse {
        line,
        message: message.into(),
    }
}

fn parse_value<T: std::str::FromStr>(line: usize, token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| parse_error(line, format!("invalid number `{token}`")))
}

/// Parse a document produced by [`write_gml`].
pub fn read_gml<R: BufRead>(input: R) -> Result<GmlDocument> {
    let mut doc = GmlDocument::default();
    let mut state = ParseState::Start;
    let mut last_line = 0;

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        last_line = lineno;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        state = match (state, tokens.as_slice()) {
            (ParseState::Start, ["graph", "["]) => ParseState::Graph,
            (ParseState::Graph, ["directed", flag]) => {
                doc.directed = match *flag {
                    "0" => false,
                    "1" => true,
                    other => return Err(parse_error(lineno, format!("invalid directed flag `{other}`"))),
                };
                ParseState::Graph
            }
            (ParseState::Graph, ["node", "[", "id", id]) => ParseState::Node(GmlNode {
                id: parse_value(lineno, id)?,
                attributes: BTreeMap::new(),
            }),
            (ParseState::Graph, ["edge", "[", "source", s, "target", t, "weight", w]) => {
                doc.edges.push(GmlEdge {
                    source: parse_value(lineno, s)?,
                    target: parse_value(lineno, t)?,
                    weight: parse_value(lineno, w)?,
                });
                ParseState::Edge
            }
            (ParseState::Graph, ["]"]) => ParseState::Done,
            (ParseState::Node(node), ["]"]) => {
                doc.nodes.push(node);
                ParseState::Graph
            }
            (ParseState::Node(mut node), [name, value]) => {
                node.attributes.insert((*name).to_string(), parse_value(lineno, value)?);
                ParseState::Node(node)
            }
            (ParseState::Edge, ["]"]) => ParseState::Graph,
            (ParseState::Done, _) => return Err(parse_error(lineno, "content after closing bracket")),
            (_, _) => return Err(parse_error(lineno, format!("unexpected line `{line}`"))),
        };
    }

    match state {
        ParseState::Done => Ok(doc),
        _ => Err(parse_error(last_line, "unterminated graph block")),
    }
}

/// Parse the document stored at `path`.
pub fn read_gml_file<P: AsRef<Path>>(path: P) -> Result<GmlDocument> {
    read_gml(BufReader::new(File::open(path)?))
}
