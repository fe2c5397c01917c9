use crate::avl_tree::node::{Node, Side};
use crate::avl_tree::rotation::{rotate, Rotation};
use crate::error::InvariantError;
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<Node<T>>>;

pub fn height<T>(tree: &Tree<T>) -> isize {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

/// Result of inserting a value into a subtree.
#[derive(Debug, PartialEq, Eq)]
pub enum Insertion {
    /// The value is already stored; nothing below the subtree root was touched.
    Exists,
    /// A new leaf was linked in. `side` is the branch taken at the subtree root and is `None` when
    /// the subtree root is the new leaf. `rotation` is the rebalancing applied on the way up.
    Added {
        side: Option<Side>,
        rotation: Option<Rotation>,
    },
}

pub fn insert<T>(tree: &mut Tree<T>, value: T, balanced: bool) -> Insertion
where
    T: Ord,
{
    let (side, rotation, needed) = {
        let node = match tree {
            Some(ref mut node) => node,
            None => {
                *tree = Some(Box::new(Node::new(value)));
                return Insertion::Added { side: None, rotation: None };
            },
        };

        let side = match value.cmp(&node.value) {
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
            Ordering::Equal => return Insertion::Exists,
        };

        let (child_side, rotation) = match insert(node.child_mut(side), value, balanced) {
            Insertion::Exists => return Insertion::Exists,
            Insertion::Added { side, rotation } => (side, rotation),
        };

        node.update();

        // The parent of a fresh leaf is never the first unbalanced ancestor of a valid avl tree,
        // so a `None` child side means there is nothing to classify.
        let needed = match child_side {
            Some(child_side) if balanced && node.balance().abs() > 1 => {
                Some(Rotation::classify(side, child_side))
            },
            _ => None,
        };

        (side, rotation, needed)
    };

    if let Some(needed) = needed {
        if let Some(node) = tree.take() {
            *tree = Some(rotate(node, needed));
        }
    }

    Insertion::Added {
        side: Some(side),
        rotation: rotation.or(needed),
    }
}

pub fn contains<T>(tree: &Tree<T>, value: &T) -> bool
where
    T: Ord,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        match value.cmp(&node.value) {
            Ordering::Less => curr = &node.left,
            Ordering::Greater => curr = &node.right,
            Ordering::Equal => return true,
        }
    }
    false
}

pub fn min<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.value
    })
}

pub fn max<T>(tree: &Tree<T>) -> Option<&T> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.value
    })
}

pub fn preorder<'a, T, F>(tree: &'a Tree<T>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(ref node) = tree {
        visit(&node.value);
        preorder(&node.left, visit);
        preorder(&node.right, visit);
    }
}

pub fn inorder<'a, T, F>(tree: &'a Tree<T>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(ref node) = tree {
        inorder(&node.left, visit);
        visit(&node.value);
        inorder(&node.right, visit);
    }
}

pub fn postorder<'a, T, F>(tree: &'a Tree<T>, visit: &mut F)
where
    F: FnMut(&'a T),
{
    if let Some(ref node) = tree {
        postorder(&node.left, visit);
        postorder(&node.right, visit);
        visit(&node.value);
    }
}

/// Frees every node in post-order without recursing, so arbitrarily deep chains are safe to
/// drop. Returns the number of nodes freed.
pub fn destroy<T>(tree: &mut Tree<T>) -> usize {
    let mut stack = match tree.take() {
        Some(node) => vec![node],
        None => return 0,
    };
    let mut freed = 0;

    while let Some(node) = stack.last_mut() {
        if let Some(left) = node.left.take() {
            stack.push(left);
        } else if let Some(right) = node.right.take() {
            stack.push(right);
        } else {
            stack.pop();
            freed += 1;
        }
    }

    freed
}

/// Walks the whole tree checking ordering, cached heights and, if `balanced`, the avl property.
/// Returns the number of nodes.
pub fn validate<T>(tree: &Tree<T>, balanced: bool) -> Result<usize, InvariantError>
where
    T: Ord,
{
    fn walk<'a, T>(
        tree: &'a Tree<T>,
        balanced: bool,
        prev: &mut Option<&'a T>,
        count: &mut usize,
    ) -> Result<isize, InvariantError>
    where
        T: Ord,
    {
        let node = match tree {
            Some(ref node) => node,
            None => return Ok(-1),
        };

        let left_height = walk(&node.left, balanced, prev, count)?;
        if let Some(prev) = *prev {
            if *prev >= node.value {
                return Err(InvariantError::OutOfOrder);
            }
        }
        *prev = Some(&node.value);
        *count += 1;
        let right_height = walk(&node.right, balanced, prev, count)?;

        let expected = 1 + left_height.max(right_height);
        if node.height != expected {
            return Err(InvariantError::StaleHeight { expected, found: node.height });
        }

        let balance = left_height - right_height;
        if balanced && balance.abs() > 1 {
            return Err(InvariantError::Unbalanced { balance });
        }

        Ok(expected)
    }

    let mut prev = None;
    let mut count = 0;
    walk(tree, balanced, &mut prev, &mut count)?;
    Ok(count)
}
