use crate::avl_tree::tree;
use std::cmp;

/// The branch taken below a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A struct representing an internal node of an avl tree.
#[derive(Clone)]
pub struct Node<T> {
    pub value: T,
    pub height: isize,
    pub left: tree::Tree<T>,
    pub right: tree::Tree<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Node {
            value,
            height: 0,
            left: None,
            right: None,
        }
    }

    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    pub fn balance(&self) -> isize {
        tree::height(&self.left) - tree::height(&self.right)
    }

    pub fn child_mut(&mut self, side: Side) -> &mut tree::Tree<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_new_leaf() {
        let node = Node::new(7);
        assert_eq!(node.height, 0);
        assert_eq!(node.balance(), 0);
    }

    #[test]
    fn test_update() {
        let mut node = Node::new(2);
        node.left = Some(Box::new(Node::new(1)));
        node.update();
        assert_eq!(node.height, 1);
        assert_eq!(node.balance(), 1);
    }
}
