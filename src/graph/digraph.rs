use crate::{
    algorithm::{DepthFirstSearch, DfsEvent, TopologicalSort, VisitedSet},
    error::{GraphError, Result},
    graph::*,
};
use std::collections::{BTreeSet, VecDeque};

/// A directed graph over caller-chosen vertices.
///
/// An edge `(u, v)` goes from `u` to `v` only.
/// The graph never changes after construction.
///
/// ```rust
/// use graphkit::graph::*;
///
/// let g = DirectedGraph::new(
///     vec!["shirt", "tie", "jacket", "belt"],
///     vec![("shirt", "tie"), ("tie", "jacket"), ("belt", "jacket")],
/// )
/// .unwrap();
/// assert_eq!(g.topsort(), vec!["shirt", "tie", "belt", "jacket"]);
/// assert_eq!(g.find_source(), Some(&"belt"));
/// ```
#[derive(Clone)]
pub struct DirectedGraph<V: Vertex> {
    vmap: VertexMap<V>,
    graph: directed::TreeBackedGraph,
}

impl<V: Vertex> DirectedGraph<V> {
    /// Builds a graph from a set of vertices and edges between them.
    ///
    /// Repeated vertices and edges collapse into one.
    /// Self-loops are allowed.
    /// Fails if an edge names an unknown vertex.
    pub fn new<I, E>(vertices: I, edges: E) -> Result<Self, V>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let vmap = VertexMap::new(vertices);
        let mut graph = directed::TreeBackedGraph::new();
        for _ in 0..vmap.len() {
            graph.add_vertex();
        }
        for (source, sink) in edges {
            let (src, snk) = vmap.edge_ids(&source, &sink)?;
            graph.add_edge(src, snk);
        }
        tracing::debug!(
            vertices = graph.vertex_size(),
            edges = graph.edge_size(),
            "built directed graph"
        );
        Ok(Self { vmap, graph })
    }

    /// Depth-first search from `start` along out-edges.
    ///
    /// Discovered vertices go into both `new_marks` and `all_marks`.
    /// Vertices already in `all_marks` are neither revisited nor walked through.
    /// Each discovered vertex is pushed onto the front of `order` once
    /// every vertex reachable from it has been explored.
    pub fn dfs(
        &self,
        start: &V,
        new_marks: &mut BTreeSet<V>,
        all_marks: &mut BTreeSet<V>,
        order: &mut VecDeque<V>,
    ) -> Result<(), V> {
        let start = self.start_id(start)?;
        let mut visited: VisitedSet = all_marks.iter().filter_map(|v| self.vmap.id(v)).collect();
        for ev in self.graph.dfs(start, &mut visited) {
            match ev {
                DfsEvent::Discover(vid) => {
                    let v = self.vmap.label(&vid);
                    new_marks.insert(v.clone());
                    all_marks.insert(v);
                }
                DfsEvent::Finish(vid) => order.push_front(self.vmap.label(&vid)),
            }
        }
        Ok(())
    }

    /// Orders all vertices so that, in an acyclic graph,
    /// every edge goes from an earlier vertex to a later one.
    ///
    /// Cycles are not detected: the result of a cyclic graph is just no
    /// topological order. Use [DirectedGraph::checked_topsort] to detect them.
    pub fn topsort(&self) -> Vec<V> {
        self.labels(self.graph.toposort())
    }

    /// A topological order, or [GraphError::Cycle] if the graph is cyclic.
    pub fn checked_topsort(&self) -> Result<Vec<V>, V> {
        match self.graph.checked_toposort() {
            Ok(order) => Ok(self.labels(order)),
            Err(vid) => Err(GraphError::Cycle(self.vmap.label(&vid))),
        }
    }

    /// The same vertices with every edge flipped.
    pub fn reverse(&self) -> Self {
        Self {
            vmap: self.vmap.clone(),
            graph: self.graph.reversed(),
        }
    }

    /// Strongly connected components, by Kosaraju's algorithm.
    ///
    /// Vertices are taken in topological order of the reversed graph.
    /// Each one not visited yet starts a depth-first search along forward
    /// edges, and the vertices this search newly visits form one component.
    pub fn components(&self) -> BTreeSet<BTreeSet<V>> {
        let order = self.reverse().topsort();
        let mut visited = VisitedSet::default();
        let mut res = BTreeSet::new();
        for v in order.iter() {
            let vid = match self.vmap.id(v) {
                Some(vid) => vid,
                None => continue,
            };
            if !visited.contains(&vid) {
                let component = self
                    .graph
                    .explore(vid, &mut visited)
                    .iter()
                    .map(|u| self.vmap.label(u))
                    .collect();
                res.insert(component);
            }
        }
        tracing::debug!(components = res.len(), "strongly connected components");
        res
    }

    /// A vertex without in-edges, or `None` if every vertex has some.
    ///
    /// The smallest such vertex is returned.
    pub fn find_source(&self) -> Option<&V> {
        self.graph
            .iter_vertices()
            .find(|v| self.graph.in_neighbors(v).next().is_none())
            .and_then(|v| self.vmap.vertex(&v))
    }

    fn labels(&self, vids: Vec<VertexId>) -> Vec<V> {
        vids.iter().map(|vid| self.vmap.label(vid)).collect()
    }
}

impl<V: Vertex> TaggedGraph for DirectedGraph<V> {
    type LowerGraph = directed::TreeBackedGraph;
    type Vertex = V;

    fn lower_graph(&self) -> &Self::LowerGraph {
        &self.graph
    }

    fn vertex_map(&self) -> &VertexMap<V> {
        &self.vmap
    }
}

/// Two graphs are equal if they have the same vertices and the same edges.
impl<V: Vertex> PartialEq for DirectedGraph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertices().eq(other.vertices()) && self.edges().eq(other.edges())
    }
}

impl<V: Vertex> Eq for DirectedGraph<V> {}

impl<V: Vertex> std::fmt::Display for DirectedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display_adjacency(self, f)
    }
}

impl<V: Vertex> std::fmt::Debug for DirectedGraph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}
