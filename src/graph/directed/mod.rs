//! Low-level directed graphs

mod tree_backed;
pub use self::tree_backed::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;
    use quickcheck::{Arbitrary, Gen};
    use rs_quickcheck_util::*;

    /// A random graph over vertices `0..vertex_size`.
    ///
    /// Edges may repeat and may be self-loops.
    #[derive(Clone)]
    pub struct Ops {
        pub vertex_size: usize,
        pub edges: Vec<(usize, usize)>,
    }

    impl std::fmt::Debug for Ops {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} vertices, edges {:?}", self.vertex_size, self.edges)
        }
    }

    impl Ops {
        pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
            self.edges.iter().copied()
        }

        /// Keeps only edges from smaller vertices to larger ones,
        /// which makes the graph acyclic.
        pub fn acyclic(&self) -> Self {
            Self {
                vertex_size: self.vertex_size,
                edges: self.iter().filter(|(src, snk)| src < snk).collect(),
            }
        }
    }

    impl Arbitrary for Ops {
        fn arbitrary(g: &mut Gen) -> Self {
            let vertex_size = usize::arbitrary(g) % 12 + 1;
            let edge_size = gen_bytes(g, b"abcd.", b'.', 0..).len()
                + usize::arbitrary(g) % (2 * vertex_size);
            let edges = (0..edge_size)
                .map(|_| {
                    let src = usize::arbitrary(g) % vertex_size;
                    let snk = usize::arbitrary(g) % vertex_size;
                    (src, snk)
                })
                .collect();
            Self { vertex_size, edges }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let l = self.edges.len();
            let me = self.clone();
            let it = std::iter::successors(Some(l / 2), move |n| {
                let nxt = (n + l) / 2 + 1;
                if nxt >= l {
                    None
                } else {
                    Some(nxt)
                }
            })
            .map(move |n| {
                let mut res = me.clone();
                res.edges = me.edges[0..n].to_vec();
                res
            });
            Box::new(it)
        }
    }

    impl From<&Ops> for super::TreeBackedGraph {
        fn from(ops: &Ops) -> Self {
            let mut g = super::TreeBackedGraph::new();
            let vids: Vec<_> = (0..ops.vertex_size).map(|_| g.add_vertex()).collect();
            for (src, snk) in ops.iter() {
                g.add_edge(vids[src], vids[snk]);
            }
            g
        }
    }
}
