//! Undirected, directed and weighted graphs over caller-chosen vertices.
//!
//! # Low-level graphs and `TaggedGraph`
//!
//! Some graph libraries let algorithms work on customized vertex types directly.
//! But for algorithm authors, these customized types are hard to deal with.
//! Can we copy a vertex?
//! What is the cost of doing that copying?
//!
//! In this crate, algorithms run on low-level graphs, in [directed] and [undirected].
//! Vertices and edges in low-level graphs are lightweight ID's.
//! They are essentially `usize`.
//! Algorithm authors may feel free to copy and store these ID's.
//!
//! [Graph], [DirectedGraph] and [WeightedGraph] wrap a low-level graph together
//! with a [VertexMap] from ID's to caller vertices.
//! [TaggedGraph] is the interface they share.
//!
//! # Ordering
//!
//! ID's are handed out in ascending order of vertices,
//! and low-level graphs keep neighbors sorted by ID.
//! So every traversal visits vertices in ascending order,
//! and its results do not change from run to run.

mod vertex;
pub use self::vertex::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
mod tagged;
pub use self::tagged::*;
mod ungraph;
pub use self::ungraph::*;
mod digraph;
pub use self::digraph::*;
mod weighted_graph;
pub use self::weighted_graph::*;

pub mod directed;
pub mod undirected;
