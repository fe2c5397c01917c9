use thiserror::Error;

/// A structural invariant that `AvlSet::validate` found broken.
///
/// None of these can be produced through the public api with an element type whose `Ord` is a
/// total order consistent with `Eq`.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum InvariantError {
    #[error("In-order walk is not strictly increasing.")]
    OutOfOrder,
    #[error("Cached height {found} does not match computed height {expected}.")]
    StaleHeight { expected: isize, found: isize },
    #[error("Balance factor {balance} is out of range for a balanced tree.")]
    Unbalanced { balance: isize },
    #[error("Set reports {found} elements but holds {expected} nodes.")]
    SizeMismatch { expected: usize, found: usize },
}
