use super::VertexId;

/// Information about a low-level edge.
///
/// At most one edge connects an ordered pair of vertices,
/// so the endpoints identify the edge.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

impl Edge {
    pub fn new(source: VertexId, sink: VertexId) -> Self {
        Self { source, sink }
    }
}
