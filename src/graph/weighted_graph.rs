use crate::{
    algorithm::{Dijkstra, MinimumSpanningTree},
    error::{GraphError, Result},
    graph::*,
    search::{ParentMap, ShortestPaths, SpanningTree},
};

/// An undirected graph with a real-valued weight on every edge.
///
/// `weight(u, v)` always equals `weight(v, u)`.
/// The graph never changes after construction.
///
/// ```rust
/// use graphkit::graph::*;
///
/// let g = WeightedGraph::new(
///     vec!['A', 'B', 'C', 'D', 'E'],
///     vec![
///         ('A', 'B', 4.0),
///         ('A', 'C', 2.0),
///         ('B', 'C', 1.0),
///         ('B', 'D', 3.0),
///         ('C', 'E', 6.0),
///         ('D', 'E', 1.0),
///     ],
/// )
/// .unwrap();
/// let paths = g.dijkstra(&'A').unwrap();
/// assert_eq!(paths.cost(&'E'), Some(7.0));
/// assert_eq!(paths.path_to(&'E'), Some(vec!['A', 'C', 'B', 'D', 'E']));
/// assert_eq!(g.prim(&'A').unwrap().total_weight(), 7.0);
/// ```
#[derive(Clone)]
pub struct WeightedGraph<V: Vertex> {
    vmap: VertexMap<V>,
    graph: undirected::WeightedTreeBackedGraph,
}

impl<V: Vertex> WeightedGraph<V> {
    /// Builds a graph from a set of vertices and weighted edges between them.
    ///
    /// An edge repeated with the same weight collapses into one.
    /// Fails if an edge names an unknown vertex, joins a vertex to itself,
    /// weighs NaN, or connects a pair already connected with another weight.
    pub fn new<I, E>(vertices: I, edges: E) -> Result<Self, V>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V, f64)>,
    {
        let vmap = VertexMap::new(vertices);
        let mut graph = undirected::WeightedTreeBackedGraph::new();
        for _ in 0..vmap.len() {
            graph.add_vertex();
        }
        for (source, sink, weight) in edges {
            let (src, snk) = vmap.edge_ids(&source, &sink)?;
            if src == snk {
                return Err(GraphError::SelfLoop(source));
            }
            if weight.is_nan() {
                return Err(GraphError::InvalidWeight {
                    edge: (source, sink),
                    weight,
                });
            }
            match graph.add_edge(src, snk, weight) {
                Some(first) if first != weight => {
                    return Err(GraphError::ConflictingWeight {
                        edge: (source, sink),
                        first,
                        second: weight,
                    });
                }
                _ => {}
            }
        }
        tracing::debug!(
            vertices = graph.vertex_size(),
            edges = graph.edge_size(),
            "built weighted graph"
        );
        Ok(Self { vmap, graph })
    }

    /// Weight of the edge between `u` and `v`, if there is one.
    pub fn weight(&self, u: &V, v: &V) -> Option<f64> {
        let u = self.vmap.id(u)?;
        let v = self.vmap.id(v)?;
        self.graph.weight(&u, &v)
    }

    /// Dijkstra's algorithm: cheapest paths from `source` to every reachable vertex.
    ///
    /// Fails with [GraphError::NegativeWeight] if any edge weighs less than zero.
    pub fn dijkstra(&self, source: &V) -> Result<ShortestPaths<V>, V> {
        let root = self.start_id(source)?;
        if let Some((e, weight)) = self.graph.negative_edge() {
            return Err(GraphError::NegativeWeight {
                edge: (self.vmap.label(&e.source), self.vmap.label(&e.sink)),
                weight,
            });
        }
        let (parents, costs) = self.graph.dijkstra(root);
        tracing::debug!(source = ?source, reached = costs.len(), "shortest paths");
        let costs = costs
            .iter()
            .map(|(vid, cost)| (self.vmap.label(vid), *cost))
            .collect();
        Ok(ShortestPaths::new(
            ParentMap::from_ids(&self.vmap, root, &parents),
            costs,
        ))
    }

    /// Prim's algorithm: a minimum spanning tree of the component containing `source`.
    ///
    /// Negative weights are fine.
    pub fn prim(&self, source: &V) -> Result<SpanningTree<V>, V> {
        let root = self.start_id(source)?;
        let (parents, total_weight) = self.graph.prim(root);
        tracing::debug!(
            source = ?source,
            spanned = parents.len(),
            total_weight,
            "minimum spanning tree"
        );
        Ok(SpanningTree::new(
            ParentMap::from_ids(&self.vmap, root, &parents),
            total_weight,
        ))
    }
}

impl<V: Vertex> TaggedGraph for WeightedGraph<V> {
    type LowerGraph = undirected::WeightedTreeBackedGraph;
    type Vertex = V;

    fn lower_graph(&self) -> &Self::LowerGraph {
        &self.graph
    }

    fn vertex_map(&self) -> &VertexMap<V> {
        &self.vmap
    }

    fn edge_label(&self, source: &VertexId, sink: &VertexId) -> Option<String> {
        self.graph.weight(source, sink).map(|w| w.to_string())
    }
}

impl<V: Vertex> UndirectedSearch for WeightedGraph<V> {}

impl<V: Vertex> std::fmt::Display for WeightedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display_adjacency(self, f)
    }
}

impl<V: Vertex> std::fmt::Debug for WeightedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}
