//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one. Balancing can be switched off at construction, in which case the same
//! insertion code builds a plain binary search tree.

mod node;
mod rotation;
mod set;
mod tree;

pub use self::set::AvlSet;
