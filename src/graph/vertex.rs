use crate::error::{GraphError, Result};
use bimap::BiHashMap;
use std::{collections::BTreeSet, fmt::Debug, hash::Hash};

/// ID for vertices in low-level graphs, which is essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub usize);

/// A factory to generate `VertexId` uniquely.
#[derive(Clone)]
pub struct VertexIdFactory(usize);

impl Default for VertexIdFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> VertexId {
        let cur = self.0;
        self.0 += 1;
        VertexId(cur)
    }
}

impl VertexId {
    pub const MIN: VertexId = VertexId(0);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

/// Caller-chosen vertex labels.
///
/// Algorithms only need equality and hashing.
/// Ordering fixes the order in which vertices and neighbors are visited.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Interns caller-chosen vertices to [VertexId]'s.
///
/// IDs are handed out in ascending order of vertices,
/// so that iterating IDs is iterating vertices in order.
#[derive(Clone)]
pub struct VertexMap<V: Vertex> {
    ids: BiHashMap<VertexId, V>,
}

impl<V: Vertex> VertexMap<V> {
    pub(crate) fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let sorted: BTreeSet<V> = vertices.into_iter().collect();
        let mut factory = VertexIdFactory::new();
        let mut ids = BiHashMap::with_capacity(sorted.len());
        for v in sorted {
            ids.insert(factory.one_more(), v);
        }
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn vertex(&self, vid: &VertexId) -> Option<&V> {
        self.ids.get_by_left(vid)
    }

    pub fn id(&self, vert: &V) -> Option<VertexId> {
        self.ids.get_by_right(vert).copied()
    }

    /// Looks up both endpoints of an edge while constructing a graph.
    pub(crate) fn edge_ids(&self, source: &V, sink: &V) -> Result<(VertexId, VertexId), V> {
        let lookup = |vertex: &V| {
            self.id(vertex).ok_or_else(|| GraphError::UnknownEdgeVertex {
                vertex: vertex.clone(),
                edge: (source.clone(), sink.clone()),
            })
        };
        Ok((lookup(source)?, lookup(sink)?))
    }

    /// IDs are dense, so vertices come out in ascending order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (VertexId, &V)> + '_ {
        (0..self.ids.len()).filter_map(move |x| {
            let vid = VertexId::new(x);
            self.ids.get_by_left(&vid).map(|v| (vid, v))
        })
    }

    /// Translates a low-level ID produced by a traversal back to its vertex.
    ///
    /// Every ID reachable in a graph is interned by this map at construction.
    pub(crate) fn label(&self, vid: &VertexId) -> V {
        match self.ids.get_by_left(vid) {
            Some(v) => v.clone(),
            None => unreachable!("{:?} is not interned", vid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_vertex_order() {
        let vmap = VertexMap::new(vec!["c", "a", "b", "a"]);
        assert_eq!(vmap.len(), 3);
        let trial: Vec<_> = vmap.iter().map(|(vid, v)| (vid.to_raw(), *v)).collect();
        assert_eq!(trial, vec![(0, "a"), (1, "b"), (2, "c")]);
        assert_eq!(vmap.id(&"b"), Some(VertexId::new(1)));
        assert_eq!(vmap.id(&"z"), None);
    }

    #[test]
    fn edge_ids_reject_unknown_vertices() {
        let vmap = VertexMap::new(vec![1, 2]);
        assert_eq!(
            vmap.edge_ids(&1, &2),
            Ok((VertexId::new(0), VertexId::new(1)))
        );
        assert_eq!(
            vmap.edge_ids(&1, &3),
            Err(GraphError::UnknownEdgeVertex {
                vertex: 3,
                edge: (1, 3)
            })
        );
    }
}
