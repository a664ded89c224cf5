//! Graph algorithms over low-level graphs.
//!
//! Each algorithm is a trait with a blanket implementation,
//! so it is available on every graph satisfying its bounds.
//! Tagged graphs in [crate::graph] translate between caller vertices and
//! [crate::graph::VertexId]'s around these algorithms.
mod traversal;
pub use self::traversal::*;
mod toposort;
pub use self::toposort::*;
mod shortest_path;
pub use self::shortest_path::*;
mod spanning_tree;
pub use self::spanning_tree::*;
mod weight;
pub(crate) use self::weight::*;
