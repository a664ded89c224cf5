use crate::{
    algorithm::BreadthFirstSearch,
    error::{GraphError, Result},
    graph::*,
    search::ParentMap,
};

/// Links between low-level graphs and graphs over caller-chosen vertices.
///
/// This is the traversal interface shared by [Graph], [DirectedGraph] and
/// [WeightedGraph]: queries on vertices and adjacency, breadth-first search
/// and path reconstruction.
/// Vertices and neighbors always come out in ascending order.
pub trait TaggedGraph {
    /// type of underlying low-level graph
    type LowerGraph: QueryableGraph + DirectedOrNot;
    /// customized vertex type
    type Vertex: Vertex;

    fn lower_graph(&self) -> &Self::LowerGraph;
    fn vertex_map(&self) -> &VertexMap<Self::Vertex>;

    /// An optional label printed beside an edge by [TaggedGraph::debug].
    fn edge_label(&self, _source: &VertexId, _sink: &VertexId) -> Option<String> {
        None
    }

    fn vertex_by_id(&self, vid: &VertexId) -> Option<&Self::Vertex> {
        self.vertex_map().vertex(vid)
    }

    fn id_by_vertex(&self, vert: &Self::Vertex) -> Option<VertexId> {
        self.vertex_map().id(vert)
    }

    /// The [VertexId] of a vertex a search starts from.
    fn start_id(&self, vert: &Self::Vertex) -> Result<VertexId, Self::Vertex> {
        self.id_by_vertex(vert)
            .ok_or_else(|| GraphError::UnknownStartVertex(vert.clone()))
    }

    fn vertex_size(&self) -> usize {
        self.lower_graph().vertex_size()
    }

    /// Number of edges. An undirected edge counts once.
    fn edge_size(&self) -> usize {
        self.lower_graph().edge_size()
    }

    fn contains_vertex(&self, vert: &Self::Vertex) -> bool {
        self.id_by_vertex(vert).is_some()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Self::Vertex> + '_> {
        Box::new(self.vertex_map().iter().map(|(_, v)| v))
    }

    /// Vertices reachable from `vert` by one edge.
    fn neighbors(
        &self,
        vert: &Self::Vertex,
    ) -> Result<Box<dyn Iterator<Item = &Self::Vertex> + '_>, Self::Vertex> {
        let vid = self.start_id(vert)?;
        let it = self
            .lower_graph()
            .out_neighbors(&vid)
            .filter_map(move |u| self.vertex_by_id(&u));
        Ok(Box::new(it))
    }

    /// Whether an edge goes from `source` to `sink`.
    fn is_adjacent(&self, source: &Self::Vertex, sink: &Self::Vertex) -> bool {
        match (self.id_by_vertex(source), self.id_by_vertex(sink)) {
            (Some(src), Some(snk)) => self.lower_graph().contains_edge(&src, &snk),
            _ => false,
        }
    }

    /// Iterates over edges.
    /// An undirected edge comes out once, with its smaller endpoint first.
    fn edges(&self) -> Box<dyn Iterator<Item = (&Self::Vertex, &Self::Vertex)> + '_> {
        let it = self.lower_graph().iter_edges().filter_map(move |e| {
            match (self.vertex_by_id(&e.source), self.vertex_by_id(&e.sink)) {
                (Some(src), Some(snk)) => Some((src, snk)),
                _ => None,
            }
        });
        Box::new(it)
    }

    /// Breadth-first search from `start`.
    ///
    /// The resulting tree holds a path with the fewest edges from `start`
    /// to every reachable vertex.
    fn bfs(&self, start: &Self::Vertex) -> Result<ParentMap<Self::Vertex>, Self::Vertex> {
        let root = self.start_id(start)?;
        let parents = self.lower_graph().bfs_tree(root);
        tracing::debug!(start = ?start, reached = parents.len(), "breadth-first search");
        Ok(ParentMap::from_ids(self.vertex_map(), root, &parents))
    }

    /// Vertices from the root of `parents` to `target`.
    ///
    /// Returns `None` if `target` is unreachable.
    /// A search tree from any graph will do.
    fn path(
        &self,
        target: &Self::Vertex,
        parents: &ParentMap<Self::Vertex>,
    ) -> Option<Vec<Self::Vertex>> {
        parents.path_to(target)
    }

    /// Inspects the adjacency of a graph, one vertex a line with its
    /// neighbors indented below.
    fn debug(&self) -> GraphDebug<'_, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}
