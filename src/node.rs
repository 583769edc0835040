use crate::tree::Tree;

/// The child slot of a node that a traversal descended into.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

/// A node of a binary search tree.
///
/// Plain trees use `Node<K>`, whose priority slot is `()`. Treaps use `PriorityNode<K>`, which
/// carries the heap priority. Children are owned outright; there are no parent links.
pub struct Node<K, P = ()> {
    pub(crate) key: K,
    pub(crate) priority: P,
    pub(crate) left: Tree<K, P>,
    pub(crate) right: Tree<K, P>,
}

/// A node of a treap.
pub type PriorityNode<K> = Node<K, i64>;

impl<K, P> Node<K, P> {
    pub(crate) fn new(key: K, priority: P) -> Self {
        Node {
            key,
            priority,
            left: None,
            right: None,
        }
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the left child of this node, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_ref().map(|node| &**node)
    }

    /// Returns the right child of this node, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_ref().map(|node| &**node)
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Tree<K, P> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn attach(&mut self, side: Side, child: Tree<K, P>) {
        *self.child_mut(side) = child;
    }
}

// precondition: `node.right` is `Some`
pub fn rotate_left<K, P>(mut node: Box<Node<K, P>>) -> Box<Node<K, P>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    child.left = Some(node);
    child
}

// precondition: `node.left` is `Some`
pub fn rotate_right<K, P>(mut node: Box<Node<K, P>>) -> Box<Node<K, P>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    child.right = Some(node);
    child
}

#[cfg(test)]
mod tests {
    use super::{rotate_left, rotate_right, Node, Side};

    fn leaf(key: u32) -> Option<Box<Node<u32>>> {
        Some(Box::new(Node::new(key, ())))
    }

    // builds 2(1, 4(3, 5))
    fn right_heavy() -> Box<Node<u32>> {
        let mut right = Box::new(Node::new(4, ()));
        right.left = leaf(3);
        right.right = leaf(5);
        let mut root = Box::new(Node::new(2, ()));
        root.left = leaf(1);
        root.right = Some(right);
        root
    }

    #[test]
    fn test_rotate_left() {
        let root = rotate_left(right_heavy());
        assert_eq!(root.key(), &4);
        assert_eq!(root.right().map(Node::key), Some(&5));

        let left = root.left().unwrap();
        assert_eq!(left.key(), &2);
        assert_eq!(left.left().map(Node::key), Some(&1));
        assert_eq!(left.right().map(Node::key), Some(&3));
    }

    #[test]
    fn test_rotate_right_undoes_rotate_left() {
        let root = rotate_right(rotate_left(right_heavy()));
        assert_eq!(root.key(), &2);
        assert_eq!(root.left().map(Node::key), Some(&1));

        let right = root.right().unwrap();
        assert_eq!(right.key(), &4);
        assert_eq!(right.left().map(Node::key), Some(&3));
        assert_eq!(right.right().map(Node::key), Some(&5));
    }

    #[test]
    fn test_attach() {
        let mut node = Node::new(2, ());
        node.attach(Side::Right, leaf(3));
        assert_eq!(node.right().map(Node::key), Some(&3));
        assert!(node.left().is_none());
    }
}
