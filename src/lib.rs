//! Undirected, directed and weighted graphs with their classic algorithms.
//!
//! * [graph::Graph]: breadth-first and depth-first search, path reconstruction
//!   and connected components.
//! * [graph::DirectedGraph]: finish-order depth-first search,
//!   topological sort, reversal and strongly connected components.
//! * [graph::WeightedGraph]: Dijkstra's shortest paths and
//!   Prim's minimum spanning tree.
//!
//! All of them are built once from a set of vertices and a list of edges,
//! and never change afterwards.
//! Searches return fresh results instead of accumulating state inside graphs.
//!
//! ```rust
//! use graphkit::graph::*;
//! use std::collections::BTreeSet;
//!
//! let g = DirectedGraph::new(
//!     vec!['a', 'b', 'c', 'd'],
//!     vec![('a', 'b'), ('b', 'a'), ('b', 'c'), ('c', 'd')],
//! )
//! .unwrap();
//! assert_eq!(
//!     g.components(),
//!     BTreeSet::from([
//!         BTreeSet::from(['a', 'b']),
//!         BTreeSet::from(['c']),
//!         BTreeSet::from(['d']),
//!     ])
//! );
//! assert_eq!(g.topsort(), vec!['a', 'b', 'c', 'd']);
//! assert_eq!(g.checked_topsort(), Err(graphkit::error::GraphError::Cycle('a')));
//! ```

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod search;
