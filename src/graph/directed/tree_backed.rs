use crate::graph::*;
use std::collections::BTreeSet;

/// A directed adjacency store backed by balanced trees.
///
/// |                  | Complexity                                                                    |
/// | ---------------- | ----------------------------------------------------------------------------- |
/// | `add_vertex`     | $O(1)$                                                                        |
/// | `add_edge`       | $O(\log \|E\|)$                                                               |
/// | `vertex_size`    | $O(1)$                                                                        |
/// | `iter_vertices`  | $O(1)$ on each call to `.next`.                                               |
/// | `contains_edge`  | $O(\log \|E\|)$                                                               |
/// | `iter_edges`     | amortized $O(1)$ on each call to `.next`.                                     |
/// | `out_neighbors`  | returns in $O(\log \|E\|)$. amortized $O(1)$ on each call to `.next`.          |
/// | `in_neighbors`   | returns in $O(\log \|E\|)$. amortized $O(1)$ on each call to `.next`.          |
/// | `reversed`       | $O(\|V\| + \|E\|)$                                                            |
#[derive(Clone, PartialEq, Eq)]
pub struct TreeBackedGraph {
    vertex_size: usize,
    in_edges: BTreeSet<(VertexId, VertexId)>,
    out_edges: BTreeSet<(VertexId, VertexId)>,
}

impl DirectedOrNot for TreeBackedGraph {
    const DIRECTED_OR_NOT: bool = true;
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        for v in self.iter_vertices() {
            writeln!(f, "{:?}:", v)?;
            for u in self.out_neighbors(&v) {
                writeln!(f, "  -> {:?}", u)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl TreeBackedGraph {
    /// The same vertices with every edge flipped.
    ///
    /// Vertex IDs are kept, so they can be used interchangeably on both graphs.
    pub fn reversed(&self) -> Self {
        Self {
            vertex_size: self.vertex_size,
            in_edges: self.out_edges.clone(),
            out_edges: self.in_edges.clone(),
        }
    }

    fn range_of<'a>(
        edges: &'a BTreeSet<(VertexId, VertexId)>,
        v: &VertexId,
    ) -> Box<dyn Iterator<Item = VertexId> + 'a> {
        let start = (*v, VertexId::MIN);
        let end = (v.next(), VertexId::MIN);
        Box::new(edges.range(start..end).map(|(_, u)| *u))
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn new() -> Self {
        Self {
            vertex_size: 0,
            in_edges: BTreeSet::new(),
            out_edges: BTreeSet::new(),
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
        self.in_edges.insert((sink, source));
        self.out_edges.insert((source, sink))
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
        self.out_edges.len()
    }

    fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(
            self.out_edges
                .iter()
                .map(|(src, snk)| Edge::new(*src, *snk)),
        )
    }

    fn contains_edge(&self, source: &VertexId, sink: &VertexId) -> bool {
        self.out_edges.contains(&(*source, *sink))
    }

    fn out_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Self::range_of(&self.out_edges, v)
    }

    fn in_neighbors(&self, v: &VertexId) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Self::range_of(&self.in_edges, v)
    }
}
