//! Owned results of searches.
//!
//! Every search builds and returns a fresh result,
//! so running a search twice never mixes up results.

use crate::graph::{Vertex, VertexId, VertexMap};
use ahash::RandomState;
use std::collections::HashMap;

/// A search tree.
///
/// Maps every reached vertex to the vertex that discovered it.
/// The root maps to itself.
/// Following parents from any vertex ends at the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentMap<V: Vertex> {
    root: V,
    parents: HashMap<V, V, RandomState>,
}

impl<V: Vertex> ParentMap<V> {
    pub(crate) fn from_ids(
        vmap: &VertexMap<V>,
        root: VertexId,
        parents: &HashMap<VertexId, VertexId, RandomState>,
    ) -> Self {
        debug_assert_eq!(parents.get(&root), Some(&root));
        let parents = parents
            .iter()
            .map(|(child, parent)| (vmap.label(child), vmap.label(parent)))
            .collect();
        Self {
            root: vmap.label(&root),
            parents,
        }
    }

    pub fn root(&self) -> &V {
        &self.root
    }

    /// The vertex which discovered `v`.
    pub fn parent(&self, v: &V) -> Option<&V> {
        self.parents.get(v)
    }

    /// Whether `v` was reached by the search.
    pub fn contains(&self, v: &V) -> bool {
        self.parents.contains_key(v)
    }

    /// Number of reached vertices, including the root.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Iterates over `(vertex, parent)` pairs without any specific order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &V)> + '_ {
        self.parents.iter()
    }

    /// Vertices from the root to `target`, both ends included.
    ///
    /// Returns `None` if `target` was not reached.
    ///
    /// ```rust
    /// use graphkit::graph::*;
    ///
    /// let g = Graph::new(1..=4, vec![(1, 2), (2, 3)]).unwrap();
    /// let parents = g.bfs(&1).unwrap();
    /// assert_eq!(parents.path_to(&3), Some(vec![1, 2, 3]));
    /// assert_eq!(parents.path_to(&1), Some(vec![1]));
    /// assert_eq!(parents.path_to(&4), None);
    /// ```
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        let mut cur = self.parents.get_key_value(target)?.0;
        let mut path = vec![cur.clone()];
        while let Some(parent) = self.parents.get(cur) {
            if parent == cur {
                break;
            }
            debug_assert!(path.len() <= self.parents.len());
            path.push(parent.clone());
            cur = parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Cheapest paths from a single source.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths<V: Vertex> {
    parents: ParentMap<V>,
    costs: HashMap<V, f64, RandomState>,
}

impl<V: Vertex> ShortestPaths<V> {
    pub(crate) fn new(parents: ParentMap<V>, costs: HashMap<V, f64, RandomState>) -> Self {
        debug_assert_eq!(parents.len(), costs.len());
        Self { parents, costs }
    }

    pub fn source(&self) -> &V {
        self.parents.root()
    }

    /// One tree of cheapest paths.
    pub fn parents(&self) -> &ParentMap<V> {
        &self.parents
    }

    /// Total weight of a cheapest path from the source to `v`,
    /// or `None` if `v` is unreachable.
    pub fn cost(&self, v: &V) -> Option<f64> {
        self.costs.get(v).copied()
    }

    pub fn costs(&self) -> &HashMap<V, f64, RandomState> {
        &self.costs
    }

    /// A cheapest path from the source to `target`.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        self.parents.path_to(target)
    }
}

/// A minimum spanning tree of the component around its root.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree<V: Vertex> {
    parents: ParentMap<V>,
    total_weight: f64,
}

impl<V: Vertex> SpanningTree<V> {
    pub(crate) fn new(parents: ParentMap<V>, total_weight: f64) -> Self {
        Self {
            parents,
            total_weight,
        }
    }

    pub fn root(&self) -> &V {
        self.parents.root()
    }

    /// Each spanned vertex maps to its neighbor on the tree towards the root.
    pub fn parents(&self) -> &ParentMap<V> {
        &self.parents
    }

    /// Sum of weights over tree edges.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    /// Tree edges as `(parent, child)` pairs, sorted.
    pub fn edges(&self) -> Vec<(V, V)> {
        let mut res: Vec<_> = self
            .parents
            .iter()
            .filter(|(child, parent)| child != parent)
            .map(|(child, parent)| (parent.clone(), child.clone()))
            .collect();
        res.sort();
        res
    }
}
