use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    UnknownVertex(String), // Request named a vertex the graph does not contain
    MissingEdge(String),   // Cost query over an ordered pair with no connecting edge
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex(name) => write!(f, "unknown vertex: {name}"),
            GraphError::MissingEdge(pair) => write!(f, "no such edge: {pair}"),
        }
    }
}

impl std::error::Error for GraphError {}
