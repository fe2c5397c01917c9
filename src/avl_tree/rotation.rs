use crate::avl_tree::node::{Node, Side};

/// The four imbalance shapes, named by the two branches leading from the unbalanced node towards
/// the newly inserted leaf.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rotation {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

impl Rotation {
    /// Classifies the imbalance at a node from the branch taken at the node (`outer`) and the
    /// branch taken at its heavy child (`inner`).
    ///
    /// Descending left at a node happens exactly when the inserted value is less than the node's
    /// value, so this is the same as comparing the inserted value against the unbalanced node and
    /// against its heavy child. It is only valid while a single insertion grew a single
    /// root-to-leaf path and the tree holds no duplicates.
    pub fn classify(outer: Side, inner: Side) -> Self {
        match (outer, inner) {
            (Side::Left, Side::Left) => Rotation::LeftLeft,
            (Side::Left, Side::Right) => Rotation::LeftRight,
            (Side::Right, Side::Left) => Rotation::RightLeft,
            (Side::Right, Side::Right) => Rotation::RightRight,
        }
    }
}

// A missing child leaves the node as is; classify never selects a rotation through one.
fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => return node,
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => return node,
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

/// Applies `rotation` at `node` and returns the new local root.
pub fn rotate<T>(mut node: Box<Node<T>>, rotation: Rotation) -> Box<Node<T>> {
    trace!("applying {:?} rotation at subtree of height {}", rotation, node.height);
    match rotation {
        Rotation::LeftLeft => rotate_right(node),
        Rotation::RightRight => rotate_left(node),
        Rotation::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        },
        Rotation::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{rotate, Rotation};
    use crate::avl_tree::node::{Node, Side};

    fn leaf(value: u32) -> Option<Box<Node<u32>>> {
        Some(Box::new(Node::new(value)))
    }

    fn branch(value: u32, left: Option<Box<Node<u32>>>, right: Option<Box<Node<u32>>>) -> Box<Node<u32>> {
        let mut node = Box::new(Node::new(value));
        node.left = left;
        node.right = right;
        node.update();
        node
    }

    fn shape(node: &Node<u32>) -> (u32, Option<u32>, Option<u32>) {
        (
            node.value,
            node.left.as_ref().map(|child| child.value),
            node.right.as_ref().map(|child| child.value),
        )
    }

    #[test]
    fn test_classify() {
        assert_eq!(Rotation::classify(Side::Left, Side::Left), Rotation::LeftLeft);
        assert_eq!(Rotation::classify(Side::Left, Side::Right), Rotation::LeftRight);
        assert_eq!(Rotation::classify(Side::Right, Side::Left), Rotation::RightLeft);
        assert_eq!(Rotation::classify(Side::Right, Side::Right), Rotation::RightRight);
    }

    #[test]
    fn test_left_left() {
        let root = branch(3, Some(branch(2, leaf(1), None)), None);
        let root = rotate(root, Rotation::LeftLeft);
        assert_eq!(shape(&root), (2, Some(1), Some(3)));
        assert_eq!(root.height, 1);
    }

    #[test]
    fn test_right_right() {
        let root = branch(1, None, Some(branch(2, None, leaf(3))));
        let root = rotate(root, Rotation::RightRight);
        assert_eq!(shape(&root), (2, Some(1), Some(3)));
        assert_eq!(root.height, 1);
    }

    #[test]
    fn test_left_right() {
        let root = branch(3, Some(branch(1, None, leaf(2))), None);
        let root = rotate(root, Rotation::LeftRight);
        assert_eq!(shape(&root), (2, Some(1), Some(3)));
        assert_eq!(root.height, 1);
    }

    #[test]
    fn test_right_left() {
        let root = branch(1, None, Some(branch(3, leaf(2), None)));
        let root = rotate(root, Rotation::RightLeft);
        assert_eq!(shape(&root), (2, Some(1), Some(3)));
        assert_eq!(root.height, 1);
    }

    #[test]
    fn test_left_right_moves_pivot_subtrees() {
        // 50 is unbalanced; the pivot 30 hands 25 to the old left child and 35 to the old root.
        let pivot = branch(30, leaf(25), leaf(35));
        let left = branch(20, leaf(10), Some(pivot));
        let root = branch(50, Some(left), leaf(60));
        assert_eq!(root.balance(), 2);

        let root = rotate(root, Rotation::LeftRight);
        assert_eq!(shape(&root), (30, Some(20), Some(50)));
        assert_eq!(shape(root.left.as_ref().unwrap()), (20, Some(10), Some(25)));
        assert_eq!(shape(root.right.as_ref().unwrap()), (50, Some(35), Some(60)));
        assert_eq!(root.height, 2);
        assert_eq!(root.left.as_ref().unwrap().height, 1);
        assert_eq!(root.right.as_ref().unwrap().height, 1);
    }

    #[test]
    fn test_missing_child_is_noop() {
        let root = branch(1, leaf(0), None);
        let root = rotate(root, Rotation::RightRight);
        assert_eq!(shape(&root), (1, Some(0), None));
    }
}
