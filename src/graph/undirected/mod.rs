//! Low-level undirected graphs

mod tree_backed;
pub use self::tree_backed::*;
mod weighted;
pub use self::weighted::*;

#[cfg(test)]
pub use self::tests::*;
