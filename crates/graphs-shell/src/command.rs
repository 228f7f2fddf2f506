//! Line command grammar

use crate::error::ShellError;
use graphs_core::NodeId;
use std::str::FromStr;

/// One action a user can take on the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `node [ID]`
    AddNode(Option<NodeId>),
    /// `edge A B`
    AddEdge(NodeId, NodeId),
    /// `remove A B`
    RemoveEdge(NodeId, NodeId),
    /// `press A`: first half of the edge gesture
    Press(NodeId),
    /// `release A`: second half of the edge gesture
    Release(NodeId),
    /// `cancel`: gesture released over empty space
    Cancel,
    Undo,
    Clear,
    Info,
    /// `path A B`
    Path(NodeId, NodeId),
    /// `route A B`
    Route(NodeId, NodeId),
    /// `start A`: mark the search start reported by `info`
    SearchStart(NodeId),
    /// `end A`: mark the search end reported by `info`
    SearchEnd(NodeId),
    Nodes,
    Edges,
    Help,
}

pub const HELP: &str = "\
node [ID]     add a node (next free id unless ID is given)
edge A B      add an edge
remove A B    remove an edge (not undoable)
press A       start an edge gesture on A
release B     finish the gesture on B
cancel        drop a started gesture
undo          undo the last node or edge
clear         remove everything
info          list nodes and neighbors
path A B      shortest path length
route A B     nodes on a shortest path
start A       mark search start for info
end B         mark search end for info
nodes         list node ids
edges         list edges
help          show this text";

impl Command {
    /// Parse one input line. Blank lines and `#` comments yield `None`.
    pub fn parse_line(line: &str) -> Result<Option<Command>, ShellError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let keyword = parts
            .next()
            .ok_or_else(|| ShellError::Parse("empty command".to_string()))?
            .to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        let command = match keyword.as_str() {
            "node" => match args.as_slice() {
                [] => Command::AddNode(None),
                [id] => Command::AddNode(Some(parse_id(id)?)),
                _ => return Err(arity(&keyword, "at most 1")),
            },
            "edge" => {
                let (a, b) = two_ids(&keyword, &args)?;
                Command::AddEdge(a, b)
            }
            "remove" => {
                let (a, b) = two_ids(&keyword, &args)?;
                Command::RemoveEdge(a, b)
            }
            "press" => Command::Press(one_id(&keyword, &args)?),
            "release" => Command::Release(one_id(&keyword, &args)?),
            "path" => {
                let (a, b) = two_ids(&keyword, &args)?;
                Command::Path(a, b)
            }
            "route" => {
                let (a, b) = two_ids(&keyword, &args)?;
                Command::Route(a, b)
            }
            "start" => Command::SearchStart(one_id(&keyword, &args)?),
            "end" => Command::SearchEnd(one_id(&keyword, &args)?),
            other => {
                let command = match other {
                    "cancel" => Command::Cancel,
                    "undo" => Command::Undo,
                    "clear" => Command::Clear,
                    "info" => Command::Info,
                    "nodes" => Command::Nodes,
                    "edges" => Command::Edges,
                    "help" => Command::Help,
                    _ => return Err(ShellError::Parse(format!("unknown command '{other}'"))),
                };
                if !args.is_empty() {
                    return Err(arity(other, "no"));
                }
                command
            }
        };
        Ok(command)
    }
}

fn parse_id(token: &str) -> Result<NodeId, ShellError> {
    token
        .parse::<u64>()
        .map(NodeId)
        .map_err(|_| ShellError::Parse(format!("invalid node id '{token}'")))
}

fn one_id(keyword: &str, args: &[&str]) -> Result<NodeId, ShellError> {
    match args {
        [id] => parse_id(id),
        _ => Err(arity(keyword, "1")),
    }
}

fn two_ids(keyword: &str, args: &[&str]) -> Result<(NodeId, NodeId), ShellError> {
    match args {
        [a, b] => Ok((parse_id(a)?, parse_id(b)?)),
        _ => Err(arity(keyword, "2")),
    }
}

fn arity(keyword: &str, expected: &str) -> ShellError {
    ShellError::Parse(format!("'{keyword}' takes {expected} argument(s)"))
}
