use crate::graph::*;

/// A default implementation of inspecting into a graph with customized indentation.
pub struct GraphDebug<'a, G>
where
    G: TaggedGraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> GraphDebug<'a, G>
where
    G: TaggedGraph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for GraphDebug<'a, G>
where
    G: TaggedGraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dir = if G::LowerGraph::DIRECTED_OR_NOT {
            "->"
        } else {
            "--"
        };
        let lower = self.graph.lower_graph();
        for (vid, vert) in self.graph.vertex_map().iter() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", vert)?;
            for u in lower.out_neighbors(&vid) {
                self.display_indent(f, 1)?;
                write!(f, "{} {:?}", dir, self.graph.vertex_map().label(&u))?;
                if let Some(label) = self.graph.edge_label(&vid, &u) {
                    write!(f, " [{}]", label)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Writes one line per vertex, `v -> {u, w}`,
/// or `v -> {u: label, w: label}` for edges with labels.
pub(crate) fn display_adjacency<G>(graph: &G, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
where
    G: TaggedGraph,
{
    let lower = graph.lower_graph();
    for (vid, vert) in graph.vertex_map().iter() {
        write!(f, "{:?} -> {{", vert)?;
        for (i, u) in lower.out_neighbors(&vid).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", graph.vertex_map().label(&u))?;
            if let Some(label) = graph.edge_label(&vid, &u) {
                write!(f, ": {}", label)?;
            }
        }
        writeln!(f, "}}")?;
    }
    Ok(())
}
