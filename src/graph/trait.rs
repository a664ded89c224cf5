use crate::graph::*;

/// Low-level graphs are only built inside this crate.
/// Once built, they never change.
pub(crate) trait GrowableGraph {
    fn new() -> Self;
    fn add_vertex(&mut self) -> VertexId;
    /// Returns `false` if the edge is already present.
    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> bool;
}

/// Read-only queries over a low-level graph.
///
/// Algorithms in [crate::algorithm] are written against this trait.
pub trait QueryableGraph {
    fn vertex_size(&self) -> usize;
    /// Iterates over vertices in ascending order.
    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;
    fn contains_vertex(&self, v: &VertexId) -> bool;

    /// Number of edges.
    /// An undirected edge counts once.
    fn edge_size(&self) -> usize;
    /// Iterates over edges.
    /// An undirected edge comes out once, with its smaller endpoint as the source.
    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_>;
    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool;

    /// Vertices reachable from `v` by one edge, in ascending order.
    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;
    /// Vertices with an edge into `v`, in ascending order.
    fn in_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_>;
}

pub trait DirectedOrNot {
    const DIRECTED_OR_NOT: bool;
}

/// Low-level graphs whose edges carry real-valued weights.
pub trait WeightedQueryableGraph: QueryableGraph {
    /// Weight of the edge from `source` to `sink`, if there is one.
    fn weight(&self, source: &VertexId, sink: &VertexId) -> Option<f64>;
}
