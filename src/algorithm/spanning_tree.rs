use super::{ParentIds, VisitedSet, Weight};
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::{cmp::Reverse, collections::HashMap};

pub trait MinimumSpanningTree
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Prim's algorithm from `source`.
    ///
    /// Returns a minimum spanning tree of the component containing `source`
    /// and its total weight.
    ///
    /// Each vertex on the frontier is queued once, keyed by the lightest edge
    /// known to connect it to the tree.
    /// That key, and the vertex's parent, only change when a strictly lighter
    /// edge shows up.
    fn prim(&self, source: VertexId) -> (ParentIds, f64) {
        debug_assert!(self.contains_vertex(&source));
        let mut parents = ParentIds::default();
        parents.insert(source, source);
        let mut best: HashMap<VertexId, f64, RandomState> = HashMap::default();
        best.insert(source, 0.0);
        let mut frontier = KeyedPriorityQueue::<VertexId, Reverse<(Weight, VertexId)>, _>::with_capacity_and_hasher(
            self.vertex_size(),
            RandomState::new(),
        );
        frontier.push(source, Reverse((Weight(0.0), source)));
        let mut finished = VisitedSet::default();
        let mut total_weight = 0.0;
        while let Some((current, Reverse((Weight(w), _)))) = frontier.pop() {
            finished.insert(current);
            total_weight += w;
            tracing::trace!(vertex = current.to_raw(), weight = w, "spanned");
            for i in self.out_neighbors(&current) {
                if finished.contains(&i) {
                    continue;
                }
                let w = match self.weight(&current, &i) {
                    Some(w) => w,
                    None => continue,
                };
                if best.get(&i).map_or(true, |known| w < *known) {
                    best.insert(i, w);
                    parents.insert(i, current);
                    frontier.push(i, Reverse((Weight(w), i)));
                }
            }
        }
        (parents, total_weight)
    }
}

impl<G: WeightedQueryableGraph> MinimumSpanningTree for G {}
