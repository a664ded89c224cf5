use crate::graph::*;
use std::collections::BTreeSet;

/// An undirected adjacency store backed by balanced trees.
///
/// Every edge is kept in both directions,
/// so `u` is a neighbor of `v` if and only if `v` is a neighbor of `u`.
/// For all point queries, it is $O(\log n)$; for all iterations, it is amortized $O(1)$.
#[derive(Clone, PartialEq, Eq)]
pub struct TreeBackedGraph {
    vertex_size: usize,
    adjacent_edges: BTreeSet<(VertexId, VertexId)>,
}

impl DirectedOrNot for TreeBackedGraph {
    const DIRECTED_OR_NOT: bool = false;
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        for v in self.iter_vertices() {
            writeln!(f, "{:?}:", v)?;
            for u in self.out_neighbors(&v) {
                writeln!(f, "  -- {:?}", u)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn new() -> Self {
        Self {
            vertex_size: 0,
            adjacent_edges: BTreeSet::new(),
        }
    }

    fn add_vertex(&mut self) -> VertexId {
        let vid = VertexId::new(self.vertex_size);
        self.vertex_size += 1;
        vid
    }

    fn add_edge(&mut self, source: VertexId, sink: VertexId) -> bool {
        debug_assert!(self.contains_vertex(&source));
        debug_assert!(self.contains_vertex(&sink));
        debug_assert_ne!(source, sink);
        self.adjacent_edges.insert((sink, source));
        self.adjacent_edges.insert((source, sink))
    }
}

impl QueryableGraph for TreeBackedGraph {
    fn vertex_size(&self) -> usize {
        self.vertex_size
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_size).map(VertexId::new))
    }

    fn contains_vertex(&self, v: &VertexId) -> bool {
        v.to_raw() < self.vertex_size
    }

    fn edge_size(&self) -> usize {
        self.adjacent_edges.len() / 2
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        let it = self
            .adjacent_edges
            .iter()
            .filter(|(src, snk)| src < snk)
            .map(|(src, snk)| Edge::new(*src, *snk));
        Box::new(it)
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.adjacent_edges.contains(&(*source, *sink))
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        let start = (*v, VertexId::MIN);
        let end = (v.next(), VertexId::MIN);
        let it = self
            .adjacent_edges
            .range(start..end)
            .map(|(_, u)| *u);
        Box::new(it)
    }

    fn in_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        self.out_neighbors(v)
    }
}
