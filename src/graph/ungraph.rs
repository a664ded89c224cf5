use crate::{
    algorithm::{DepthFirstSearch, VisitedSet},
    error::{GraphError, Result},
    graph::*,
};
use std::collections::BTreeSet;

/// An undirected graph over caller-chosen vertices.
///
/// The graph never changes after construction.
///
/// ```rust
/// use graphkit::graph::*;
/// use std::collections::BTreeSet;
///
/// let g = Graph::new(
///     1..=9,
///     vec![(1, 2), (1, 5), (2, 3), (2, 5), (3, 4), (4, 5), (5, 9), (6, 7), (6, 8), (7, 8)],
/// )
/// .unwrap();
/// let parents = g.bfs(&1).unwrap();
/// assert_eq!(g.path(&9, &parents), Some(vec![1, 5, 9]));
/// assert_eq!(g.path(&6, &parents), None);
/// assert_eq!(g.dfs(&6).unwrap(), BTreeSet::from([6, 7, 8]));
/// assert_eq!(g.components().len(), 2);
/// ```
#[derive(Clone)]
pub struct Graph<V: Vertex> {
    vmap: VertexMap<V>,
    graph: undirected::TreeBackedGraph,
}

impl<V: Vertex> Graph<V> {
    /// Builds a graph from a set of vertices and edges between them.
    ///
    /// Repeated vertices and edges collapse into one.
    /// Fails if an edge names an unknown vertex or joins a vertex to itself.
    pub fn new<I, E>(vertices: I, edges: E) -> Result<Self, V>
    where
        I: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let vmap = VertexMap::new(vertices);
        let mut graph = undirected::TreeBackedGraph::new();
        for _ in 0..vmap.len() {
            graph.add_vertex();
        }
        for (source, sink) in edges {
            let (src, snk) = vmap.edge_ids(&source, &sink)?;
            if src == snk {
                return Err(GraphError::SelfLoop(source));
            }
            graph.add_edge(src, snk);
        }
        tracing::debug!(
            vertices = graph.vertex_size(),
            edges = graph.edge_size(),
            "built undirected graph"
        );
        Ok(Self { vmap, graph })
    }
}

impl<V: Vertex> TaggedGraph for Graph<V> {
    type LowerGraph = undirected::TreeBackedGraph;
    type Vertex = V;

    fn lower_graph(&self) -> &Self::LowerGraph {
        &self.graph
    }

    fn vertex_map(&self) -> &VertexMap<V> {
        &self.vmap
    }
}

impl<V: Vertex> UndirectedSearch for Graph<V> {}

impl<V: Vertex> std::fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        display_adjacency(self, f)
    }
}

impl<V: Vertex> std::fmt::Debug for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.debug())
    }
}

/// Depth-first search and connected components of undirected graphs.
pub trait UndirectedSearch: TaggedGraph {
    /// All vertices connected to `start`.
    fn dfs(&self, start: &Self::Vertex) -> Result<BTreeSet<Self::Vertex>, Self::Vertex> {
        let mut marks = BTreeSet::new();
        self.dfs_into(start, &mut marks)?;
        Ok(marks)
    }

    /// Adds vertices reachable from `start` to `marks`.
    ///
    /// Vertices already in `marks` are neither revisited nor walked through.
    /// Nothing is added if `start` itself is already marked.
    fn dfs_into(
        &self,
        start: &Self::Vertex,
        marks: &mut BTreeSet<Self::Vertex>,
    ) -> Result<(), Self::Vertex> {
        let start = self.start_id(start)?;
        let mut visited: VisitedSet = marks.iter().filter_map(|v| self.id_by_vertex(v)).collect();
        let vmap = self.vertex_map();
        for vid in self.lower_graph().explore(start, &mut visited) {
            marks.insert(vmap.label(&vid));
        }
        Ok(())
    }

    /// Partitions vertices into maximal connected subsets.
    fn components(&self) -> BTreeSet<BTreeSet<Self::Vertex>> {
        let lower = self.lower_graph();
        let vmap = self.vertex_map();
        let mut visited = VisitedSet::default();
        let mut res = BTreeSet::new();
        for v in lower.iter_vertices() {
            if !visited.contains(&v) {
                let component = lower
                    .explore(v, &mut visited)
                    .iter()
                    .map(|vid| vmap.label(vid))
                    .collect();
                res.insert(component);
            }
        }
        tracing::debug!(components = res.len(), "connected components");
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::Ops;
    use petgraph::graph::{NodeIndex, UnGraph};
    use quickcheck_macros::quickcheck;

    fn sample() -> Graph<u32> {
        Graph::new(
            1..=9,
            vec![
                (1, 2),
                (1, 5),
                (2, 3),
                (2, 5),
                (3, 4),
                (4, 5),
                (5, 9),
                (6, 7),
                (6, 8),
                (7, 8),
            ],
        )
        .unwrap()
    }

    fn from_ops(ops: &Ops) -> Graph<usize> {
        let edges = ops.iter().filter(|(src, snk)| src != snk);
        Graph::new(0..ops.vertex_size, edges).unwrap()
    }

    #[test]
    fn neighbors_are_symmetric() {
        let g = sample();
        assert_eq!(g.vertex_size(), 9);
        assert_eq!(g.edge_size(), 10);
        assert_eq!(
            g.neighbors(&5).unwrap().copied().collect::<Vec<_>>(),
            vec![1, 2, 4, 9]
        );
        assert_eq!(g.neighbors(&9).unwrap().copied().collect::<Vec<_>>(), vec![5]);
        assert!(g.is_adjacent(&9, &5));
        assert!(g.is_adjacent(&5, &9));
        assert!(!g.is_adjacent(&1, &9));
        assert!(matches!(
            g.neighbors(&10),
            Err(GraphError::UnknownStartVertex(10))
        ));
    }

    #[test]
    fn dfs_marks_component() {
        let g = sample();
        assert_eq!(g.dfs(&1).unwrap(), BTreeSet::from([1, 2, 3, 4, 5, 9]));
        assert_eq!(g.dfs(&7).unwrap(), BTreeSet::from([6, 7, 8]));
        assert_eq!(g.dfs(&0), Err(GraphError::UnknownStartVertex(0)));
    }

    #[test]
    fn dfs_into_does_not_walk_through_marks() {
        let g = sample();
        let mut marks = BTreeSet::from([5]);
        g.dfs_into(&9, &mut marks).unwrap();
        assert_eq!(marks, BTreeSet::from([5, 9]));
        g.dfs_into(&9, &mut marks).unwrap();
        assert_eq!(marks, BTreeSet::from([5, 9]));
    }

    #[test]
    fn bfs_and_path() {
        let g = sample();
        let parents = g.bfs(&1).unwrap();
        assert_eq!(parents.root(), &1);
        assert_eq!(parents.parent(&1), Some(&1));
        assert_eq!(parents.len(), 6);
        assert_eq!(g.path(&9, &parents), Some(vec![1, 5, 9]));
        assert_eq!(g.path(&4, &parents), Some(vec![1, 5, 4]));
        assert_eq!(g.path(&1, &parents), Some(vec![1]));
        assert_eq!(g.path(&6, &parents), None);
        assert!(matches!(g.bfs(&42), Err(GraphError::UnknownStartVertex(42))));
    }

    #[test]
    fn components_of_sample() {
        let g = sample();
        let oracle = BTreeSet::from([
            BTreeSet::from([1, 2, 3, 4, 5, 9]),
            BTreeSet::from([6, 7, 8]),
        ]);
        assert_eq!(g.components(), oracle);
    }

    #[test]
    fn rejects_bad_edges() {
        assert_eq!(
            Graph::new(vec!["a", "b"], vec![("a", "c")]).unwrap_err(),
            GraphError::UnknownEdgeVertex {
                vertex: "c",
                edge: ("a", "c")
            }
        );
        assert_eq!(
            Graph::new(vec!["a", "b"], vec![("b", "b")]).unwrap_err(),
            GraphError::SelfLoop("b")
        );
    }

    #[test]
    fn empty_graph() {
        let g = Graph::<u8>::new(vec![], vec![]).unwrap();
        assert_eq!(g.vertex_size(), 0);
        assert!(g.components().is_empty());
        assert_eq!(format!("{}", g), "");
    }

    #[test]
    fn display() {
        let g = Graph::new(vec!['a', 'b', 'c'], vec![('b', 'a'), ('c', 'a')]).unwrap();
        assert_eq!(
            format!("{}", g),
            "'a' -> {'b', 'c'}\n'b' -> {'a'}\n'c' -> {'a'}\n"
        );
        assert_eq!(
            format!("{:?}", g.debug().indent(1, 2)),
            " 'a'\n   -- 'b'\n   -- 'c'\n 'b'\n   -- 'a'\n 'c'\n   -- 'a'\n"
        );
    }

    #[quickcheck]
    fn components_partition_vertices(ops: Ops) {
        let g = from_ops(&ops);
        let components = g.components();
        let mut seen = BTreeSet::new();
        for component in components.iter() {
            for v in component.iter() {
                assert!(seen.insert(*v));
                assert_eq!(&g.dfs(v).unwrap(), component);
            }
        }
        assert_eq!(seen.len(), g.vertex_size());
        for (u, v) in g.edges() {
            assert!(components.iter().any(|c| c.contains(u) && c.contains(v)));
        }
    }

    #[quickcheck]
    fn dfs_is_idempotent(ops: Ops) {
        let g = from_ops(&ops);
        for v in g.vertices() {
            assert_eq!(g.dfs(v).unwrap(), g.dfs(v).unwrap());
        }
    }

    #[quickcheck]
    fn bfs_paths_are_shortest_walks(ops: Ops) {
        let g = from_ops(&ops);
        let mut oracle_graph = UnGraph::<(), ()>::default();
        for _ in g.vertices() {
            oracle_graph.add_node(());
        }
        for (u, v) in g.edges() {
            oracle_graph.add_edge(NodeIndex::new(*u), NodeIndex::new(*v), ());
        }
        let source = 0;
        let parents = g.bfs(&source).unwrap();
        let hops = petgraph::algo::dijkstra(&oracle_graph, NodeIndex::new(source), None, |_| 1usize);
        assert_eq!(parents.len(), hops.len());
        for target in g.vertices() {
            match g.path(target, &parents) {
                None => assert!(!hops.contains_key(&NodeIndex::new(*target))),
                Some(path) => {
                    assert_eq!(path.first(), Some(&source));
                    assert_eq!(path.last(), Some(target));
                    for step in path.windows(2) {
                        assert!(g.is_adjacent(&step[0], &step[1]));
                    }
                    assert_eq!(Some(&(path.len() - 1)), hops.get(&NodeIndex::new(*target)));
                }
            }
        }
    }
}
