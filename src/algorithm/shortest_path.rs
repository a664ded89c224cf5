use super::{ParentIds, VisitedSet, Weight};
use crate::graph::*;
use ahash::RandomState;
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

/// Maps each reached vertex to the total weight of a cheapest path to it.
pub type CostIds = HashMap<VertexId, f64, RandomState>;

pub trait Dijkstra
where
    Self: WeightedQueryableGraph + Sized,
{
    /// Cheapest paths from `source` to every reachable vertex.
    ///
    /// Weights must not be negative.
    /// The frontier is a binary heap without decrease-key:
    /// a cheaper path pushes another entry,
    /// and entries of vertices already settled are skipped when popped.
    fn dijkstra(&self, source: VertexId) -> (ParentIds, CostIds) {
        debug_assert!(self.contains_vertex(&source));
        let mut parents = ParentIds::default();
        let mut costs = CostIds::default();
        parents.insert(source, source);
        costs.insert(source, 0.0);
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse((Weight(0.0), source)));
        let mut settled = VisitedSet::default();
        while let Some(Reverse((Weight(pcost), p))) = frontier.pop() {
            if !settled.insert(p) {
                continue;
            }
            tracing::trace!(vertex = p.to_raw(), cost = pcost, "settled");
            for c in self.out_neighbors(&p) {
                let w = match self.weight(&p, &c) {
                    Some(w) => pcost + w,
                    None => continue,
                };
                if costs.get(&c).map_or(true, |known| w < *known) {
                    parents.insert(c, p);
                    costs.insert(c, w);
                    frontier.push(Reverse((Weight(w), c)));
                }
            }
        }
        (parents, costs)
    }
}

impl<G: WeightedQueryableGraph> Dijkstra for G {}
