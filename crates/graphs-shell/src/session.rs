//! Applies commands to a graph and renders the replies

use crate::command::{Command, HELP};
use crate::error::ShellError;
use graphs_core::{Graph, GraphKind, NodeHandle, NodeId, Placement, Undone};
use serde::Serialize;
use tracing::{debug, info};

/// Output style for `info` and `edges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A graph plus the presentation-side state needed to drive it from text.
#[derive(Debug)]
pub struct Session {
    graph: Graph,
    format: OutputFormat,
}

#[derive(Serialize)]
struct EdgeReply {
    from: NodeId,
    to: NodeId,
}

impl Session {
    pub fn new(kind: GraphKind, format: OutputFormat) -> Self {
        info!("Starting {} session", kind);
        Session {
            graph: Graph::new(kind),
            format,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Parse and run one line. Blank lines and comments produce no reply.
    pub fn run_line(&mut self, line: &str) -> Result<Option<String>, ShellError> {
        match Command::parse_line(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    /// Run one command and describe what happened.
    pub fn execute(&mut self, command: Command) -> Result<String, ShellError> {
        debug!("Executing {:?}", command);
        let reply = match command {
            Command::AddNode(None) => {
                let handle = self.graph.add_node();
                format!("added node {}", self.id(handle))
            }
            Command::AddNode(Some(id)) => {
                self.graph.add_node_with_id(id)?;
                format!("added node {id}")
            }
            Command::AddEdge(a, b) => {
                let (ha, hb) = (self.graph.resolve(a)?, self.graph.resolve(b)?);
                if self.graph.add_edge(ha, hb) {
                    format!("added edge {}", self.pair(a, b))
                } else {
                    format!("edge {} unchanged", self.pair(a, b))
                }
            }
            Command::RemoveEdge(a, b) => {
                let (ha, hb) = (self.graph.resolve(a)?, self.graph.resolve(b)?);
                if self.graph.remove_edge(ha, hb) {
                    format!("removed edge {a}-{b}")
                } else {
                    format!("no edge {a}-{b}")
                }
            }
            Command::Press(a) => {
                let handle = self.graph.resolve(a)?;
                self.graph.set_starting_node(handle);
                format!("pressed node {a}")
            }
            Command::Release(b) => {
                let handle = self.graph.resolve(b)?;
                let start = self.graph.starting_node().and_then(|h| self.graph.id_of(h));
                let added = self.graph.add_edge_if_valid(handle);
                match start {
                    Some(a) if added => format!("added edge {}", self.pair(a, b)),
                    _ => "no edge added".to_string(),
                }
            }
            Command::Cancel => {
                self.graph.cancel_pending_edge();
                "cancelled".to_string()
            }
            Command::Undo => match self.graph.undo() {
                Some(Undone {
                    placement: Placement::Node { id, .. },
                    ..
                }) => format!("undid node {id}"),
                Some(Undone {
                    placement: Placement::Edge { source, target },
                    changed,
                }) => {
                    let edge = self.pair(self.id(source), self.id(target));
                    if changed {
                        format!("undid edge {edge}")
                    } else {
                        format!("undid edge {edge} (already removed)")
                    }
                }
                None => "nothing to undo".to_string(),
            },
            Command::Clear => {
                self.graph.clear();
                "cleared".to_string()
            }
            Command::Info => {
                let report = self.graph.info();
                match self.format {
                    OutputFormat::Text => report.to_string().trim_end().to_string(),
                    OutputFormat::Json => serde_json::to_string(&report)?,
                }
            }
            Command::Path(a, b) => {
                let (ha, hb) = (self.graph.resolve(a)?, self.graph.resolve(b)?);
                match self.graph.shortest_path(ha, hb) {
                    Some(d) => format!("{a} -> {b}: {d}"),
                    None => format!("{a} -> {b}: unreachable"),
                }
            }
            Command::Route(a, b) => {
                let (ha, hb) = (self.graph.resolve(a)?, self.graph.resolve(b)?);
                match self.graph.shortest_route(ha, hb) {
                    Some(route) => self.id_list(&route),
                    None => "unreachable".to_string(),
                }
            }
            Command::SearchStart(a) => {
                let handle = self.graph.resolve(a)?;
                self.graph.set_search_start(handle);
                format!("search start {a}")
            }
            Command::SearchEnd(b) => {
                let handle = self.graph.resolve(b)?;
                self.graph.set_search_end(handle);
                format!("search end {b}")
            }
            Command::Nodes => {
                if self.graph.nodes().is_empty() {
                    "(none)".to_string()
                } else {
                    self.id_list(self.graph.nodes())
                }
            }
            Command::Edges => {
                let edges = self.graph.edges();
                match self.format {
                    OutputFormat::Json => {
                        let edges: Vec<EdgeReply> =
                            edges.into_iter().map(|(from, to)| EdgeReply { from, to }).collect();
                        serde_json::to_string(&edges)?
                    }
                    OutputFormat::Text if edges.is_empty() => "(none)".to_string(),
                    OutputFormat::Text => edges
                        .iter()
                        .map(|&(a, b)| self.pair(a, b))
                        .collect::<Vec<_>>()
                        .join(" "),
                }
            }
            Command::Help => HELP.to_string(),
        };
        Ok(reply)
    }

    fn id(&self, handle: NodeHandle) -> NodeId {
        self.graph.id_of(handle).unwrap_or_default()
    }

    fn id_list(&self, handles: &[NodeHandle]) -> String {
        handles
            .iter()
            .filter_map(|&h| self.graph.id_of(h))
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn pair(&self, a: NodeId, b: NodeId) -> String {
        if self.graph.is_directed() {
            format!("{a}->{b}")
        } else {
            format!("{a}-{b}")
        }
    }
}
