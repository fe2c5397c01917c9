//! An ordered set backed by an avl tree.
//!
//! `AvlSet` stores distinct, totally ordered elements and supports insertion, membership tests,
//! height queries and preorder, inorder and postorder traversal. Balancing is a construction-time
//! mode; with it disabled the set behaves as a plain binary search tree.
//!
//! # Examples
//! ```
//! use avl_set::{AvlSet, Set};
//!
//! let mut set = AvlSet::new();
//! for value in vec![5, 3, 8, 1, 4] {
//!     set.add(value);
//! }
//!
//! let mut values = Vec::new();
//! set.inorder(|value| values.push(*value));
//! assert_eq!(values, vec![1, 3, 4, 5, 8]);
//! assert_eq!(set.size(), 5);
//! ```

#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod error;
mod traits;
pub mod avl_tree;

pub use self::avl_tree::AvlSet;
pub use self::error::InvariantError;
pub use self::traits::Set;
