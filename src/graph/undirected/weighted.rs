use super::TreeBackedGraph;
use crate::graph::*;
use ahash::RandomState;
use std::collections::HashMap;

/// An undirected adjacency store with a weight on every edge.
///
/// Weights are looked up by ordered pairs of endpoints, and both orders are kept.
#[derive(Clone)]
pub struct WeightedTreeBackedGraph {
    graph: TreeBackedGraph,
    weights: HashMap<(VertexId, VertexId), f64, RandomState>,
}

impl DirectedOrNot for WeightedTreeBackedGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl WeightedTreeBackedGraph {
    pub(crate) fn new() -> Self {
        Self {
            graph: TreeBackedGraph::new(),
            weights: HashMap::default(),
        }
    }

    pub(crate) fn add_vertex(&mut self) -> VertexId {
        self.graph.add_vertex()
    }

    /// Adds an edge, or returns the weight it already has.
    pub(crate) fn add_edge(&mut self, source: VertexId, sink: VertexId, weight: f64) -> Option<f64> {
        if let Some(w) = self.weights.get(&(source, sink)) {
            return Some(*w);
        }
        self.graph.add_edge(source, sink);
        self.weights.insert((source, sink), weight);
        self.weights.insert((sink, source), weight);
        None
    }

    /// Some edge weighing less than zero, if any.
    pub fn negative_edge(&self) -> Option<(Edge, f64)> {
        self.graph
            .iter_edges()
            .filter_map(|e| self.weight(&e.source, &e.sink).map(|w| (e, w)))
            .find(|(_, w)| *w < 0.0)
    }
}

impl QueryableGraph for WeightedTreeBackedGraph {
    fn vertex_size(&self) -> usize {
        self.graph.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.graph.iter_vertices()
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        self.graph.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.graph.edge_size()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        self.graph.iter_edges()
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.graph.contains_edge(source, sink)
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.graph.out_neighbors(v)
    }

    fn in_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.graph.in_neighbors(v)
    }
}

impl WeightedQueryableGraph for WeightedTreeBackedGraph {
    fn weight(&self, source: &VertexId, sink: &VertexId) -> Option<f64> {
        self.weights.get(&(*source, *sink)).copied()
    }
}
