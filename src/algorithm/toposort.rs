use super::{DepthFirstSearch, VisitedSet};
use crate::graph::*;
use ahash::RandomState;
use keyed_priority_queue::KeyedPriorityQueue;
use std::{cmp::Reverse, collections::VecDeque};

pub trait TopologicalSort
where
    Self: QueryableGraph + Sized,
{
    /// Orders vertices by depth-first traversals from every vertex not visited yet.
    ///
    /// Each vertex goes to the front as soon as it finishes,
    /// so the result is the reverse of the finishing order.
    /// For an acyclic graph, every edge goes from an earlier vertex to a later one.
    /// For a cyclic graph, the result is no topological order,
    /// and nothing complains; see [TopologicalSort::checked_toposort].
    fn toposort(&self) -> Vec<VertexId> {
        let mut visited = VisitedSet::default();
        let mut order = VecDeque::with_capacity(self.vertex_size());
        for v in self.iter_vertices() {
            if !visited.contains(&v) {
                self.finish_into(v, &mut visited, &mut order);
            }
        }
        order.into()
    }

    /// A topological order by repeatedly removing a vertex without in-edges.
    ///
    /// Among candidates, the smallest vertex goes first.
    /// Fails with a vertex on, or behind, a cycle if the graph is cyclic.
    fn checked_toposort(&self) -> Result<Vec<VertexId>, VertexId> {
        ToposortIter::new(self).collect()
    }
}

impl<G: QueryableGraph> TopologicalSort for G {}

struct ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    graph: &'a G,
    degree_queue: KeyedPriorityQueue<VertexId, Reverse<(usize, VertexId)>, RandomState>,
    cyclic: bool,
}

impl<'a, G> Iterator for ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    type Item = Result<VertexId, VertexId>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cyclic {
            return None;
        }
        let (vert, Reverse((in_degree, _))) = self.degree_queue.pop()?;
        if in_degree > 0 {
            self.cyclic = true;
            return Some(Err(vert));
        }
        for sink in self.graph.out_neighbors(&vert) {
            if let Some(Reverse((in_degree, _))) = self.degree_queue.get_priority(&sink).copied() {
                let _ = self
                    .degree_queue
                    .set_priority(&sink, Reverse((in_degree - 1, sink)));
            }
        }
        Some(Ok(vert))
    }
}

impl<'a, G> ToposortIter<'a, G>
where
    G: QueryableGraph,
{
    fn new(graph: &'a G) -> Self {
        let mut res = Self {
            graph,
            degree_queue: KeyedPriorityQueue::with_capacity_and_hasher(
                graph.vertex_size(),
                RandomState::new(),
            ),
            cyclic: false,
        };
        for v in graph.iter_vertices() {
            let in_degree = graph.in_neighbors(&v).count();
            res.degree_queue.push(v, Reverse((in_degree, v)));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::*;
    use quickcheck_macros::quickcheck;

    fn respects_edges<G: QueryableGraph>(g: &G, order: &[VertexId]) -> bool {
        let mut pos = vec![usize::MAX; g.vertex_size()];
        for (i, v) in order.iter().enumerate() {
            pos[v.to_raw()] = i;
        }
        g.iter_edges().all(|e| pos[e.source.to_raw()] < pos[e.sink.to_raw()])
    }

    #[test]
    fn diamond() {
        // 3 -> 1 -> 0, 3 -> 2 -> 0
        let g: TreeBackedGraph = (&Ops {
            vertex_size: 4,
            edges: vec![(3, 1), (1, 0), (3, 2), (2, 0)],
        })
            .into();
        let v = |x| VertexId::new(x);
        assert_eq!(g.toposort(), vec![v(3), v(2), v(1), v(0)]);
        assert_eq!(g.checked_toposort(), Ok(vec![v(3), v(1), v(2), v(0)]));
    }

    #[test]
    fn cycle_is_only_reported_when_checked() {
        // 0 -> 1 -> 2 -> 1
        let g: TreeBackedGraph = (&Ops {
            vertex_size: 3,
            edges: vec![(0, 1), (1, 2), (2, 1)],
        })
            .into();
        let order = g.toposort();
        assert_eq!(order.len(), 3);
        assert!(!respects_edges(&g, &order));
        assert!(matches!(
            g.checked_toposort(),
            Err(v) if v == VertexId::new(1) || v == VertexId::new(2)
        ));
    }

    #[quickcheck]
    fn toposort_of_dag(ops: Ops) {
        let g: TreeBackedGraph = (&ops.acyclic()).into();
        let order = g.toposort();
        assert_eq!(order.len(), g.vertex_size());
        assert!(respects_edges(&g, &order));
        let checked = g.checked_toposort().unwrap();
        assert_eq!(checked.len(), g.vertex_size());
        assert!(respects_edges(&g, &checked));
    }

    #[quickcheck]
    fn checked_toposort_fails_on_cycles(ops: Ops) {
        let g: TreeBackedGraph = (&ops).into();
        let order = g.toposort();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(sorted, g.iter_vertices().collect::<Vec<_>>());
        match g.checked_toposort() {
            Ok(checked) => assert!(respects_edges(&g, &checked)),
            Err(_) => assert!(!respects_edges(&g, &order)),
        }
    }
}
