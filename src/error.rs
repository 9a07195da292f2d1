use thiserror::Error;

/// Failures of graph queries.
///
/// Duplicate vertices or edges are not errors: insertion reports them through a `false`
/// return value instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    /// The queried value or id is not a vertex of the graph
    #[error("no such vertex in graph")]
    NoSuchVertex,

    /// The query needs at least one vertex
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A topological order was requested for a graph that contains a cycle
    #[error("graph contains a cycle")]
    CycleDetected,

    /// Every vertex id of the graph instance has been handed out before
    #[error("vertex ids exhausted")]
    IdsExhausted,
}

/// Result type used throughout the crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
