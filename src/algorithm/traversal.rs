use crate::graph::*;
use ahash::RandomState;
use std::collections::{hash_map::Entry, HashMap, HashSet, VecDeque};

/// Vertices already visited by one or more traversals.
pub type VisitedSet = HashSet<VertexId, RandomState>;
/// Maps each reached vertex to the one discovering it. The root maps to itself.
pub type ParentIds = HashMap<VertexId, VertexId, RandomState>;

/// Events reported by [DepthFirstSearch::dfs].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// The vertex is entered for the first time.
    Discover(VertexId),
    /// All vertices reachable from the vertex have been explored.
    Finish(VertexId),
}

pub trait DepthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Depth-first traversal from `start` along out-edges,
    /// skipping vertices already in `visited` and adding each discovered one to it.
    ///
    /// An explicit stack is used, so deep graphs cannot overflow the call stack.
    /// Events come out in the same order as a recursive traversal visiting
    /// neighbors in ascending order.
    fn dfs<'a>(&'a self, start: VertexId, visited: &'a mut VisitedSet) -> DfsIter<'a, Self> {
        DfsIter {
            graph: self,
            visited,
            start: Some(start),
            stack: vec![],
        }
    }

    /// Vertices newly discovered from `start`, in discovery order.
    fn explore(&self, start: VertexId, visited: &mut VisitedSet) -> Vec<VertexId> {
        self.dfs(start, visited)
            .filter_map(|ev| match ev {
                DfsEvent::Discover(v) => Some(v),
                DfsEvent::Finish(_) => None,
            })
            .collect()
    }

    /// Pushes vertices newly discovered from `start` onto the front of `order`
    /// as they finish.
    fn finish_into(&self, start: VertexId, visited: &mut VisitedSet, order: &mut VecDeque<VertexId>) {
        for ev in self.dfs(start, visited) {
            if let DfsEvent::Finish(v) = ev {
                order.push_front(v);
            }
        }
    }
}

impl<G: QueryableGraph> DepthFirstSearch for G {}

pub struct DfsIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    visited: &'a mut VisitedSet,
    start: Option<VertexId>,
    stack: Vec<(VertexId, Box<dyn Iterator<Item = VertexId> + 'a>)>,
}

impl<'a, G> DfsIter<'a, G>
where
    G: QueryableGraph,
{
    fn enter(&mut self, v: VertexId) -> Option<DfsEvent> {
        if !self.visited.insert(v) {
            return None;
        }
        let graph = self.graph;
        self.stack.push((v, graph.out_neighbors(&v)));
        Some(DfsEvent::Discover(v))
    }
}

impl<'a, G> Iterator for DfsIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = DfsEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.start.take() {
            debug_assert!(self.graph.contains_vertex(&start));
            return self.enter(start);
        }
        loop {
            let (top, next) = match self.stack.last_mut() {
                None => return None,
                Some((top, neighbors)) => (*top, neighbors.next()),
            };
            match next {
                Some(u) => {
                    if let Some(ev) = self.enter(u) {
                        return Some(ev);
                    }
                }
                None => {
                    self.stack.pop();
                    return Some(DfsEvent::Finish(top));
                }
            }
        }
    }
}

pub trait BreadthFirstSearch
where
    Self: QueryableGraph + Sized,
{
    /// Breadth-first tree from `start` along out-edges.
    ///
    /// Following parents from any reached vertex gives a path back to `start`
    /// with the fewest edges.
    fn bfs_tree(&self, start: VertexId) -> ParentIds {
        debug_assert!(self.contains_vertex(&start));
        let mut parents = ParentIds::default();
        parents.insert(start, start);
        let mut frontier = VecDeque::new();
        frontier.push_back(start);
        while let Some(p) = frontier.pop_front() {
            for c in self.out_neighbors(&p) {
                if let Entry::Vacant(e) = parents.entry(c) {
                    e.insert(p);
                    frontier.push_back(c);
                }
            }
        }
        parents
    }
}

impl<G: QueryableGraph> BreadthFirstSearch for G {}
