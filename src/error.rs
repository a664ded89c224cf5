use thiserror::Error;

/// Errors raised while building graphs or starting searches on them.
///
/// Unreachable targets are not errors: [crate::search::ParentMap::path_to]
/// reports them with `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError<V> {
    /// An edge names a vertex which is not in the vertex set.
    #[error("unknown vertex {vertex:?} in edge {edge:?}")]
    UnknownEdgeVertex { vertex: V, edge: (V, V) },

    /// A search, traversal or neighbor query starts from a vertex which is not in the graph.
    #[error("unknown start vertex {0:?}")]
    UnknownStartVertex(V),

    /// An undirected edge joins a vertex to itself.
    #[error("undirected edge joins {0:?} to itself")]
    SelfLoop(V),

    #[error("edge {edge:?} has an invalid weight {weight}")]
    InvalidWeight { edge: (V, V), weight: f64 },

    /// The same pair of vertices is given twice with different weights.
    #[error("edge {edge:?} is given twice with weights {first} and {second}")]
    ConflictingWeight { edge: (V, V), first: f64, second: f64 },

    #[error("edge {edge:?} has a negative weight {weight}")]
    NegativeWeight { edge: (V, V), weight: f64 },

    /// The vertex lies on, or is only reachable through, a directed cycle.
    #[error("graph is cyclic around {0:?}")]
    Cycle(V),
}

pub type Result<T, V> = std::result::Result<T, GraphError<V>>;
