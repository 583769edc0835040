use crate::node::{Node, Side};
use std::borrow::Borrow;
use std::cmp::{self, Ordering};

pub type Tree<K, P = ()> = Option<Box<Node<K, P>>>;

// Returns the slot holding `key`, or the empty slot where it would be inserted.
pub fn find_slot<'a, K, P, Q>(mut tree: &'a mut Tree<K, P>, key: &Q) -> &'a mut Tree<K, P>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    loop {
        let side = match tree.as_ref().map(|node| key.cmp(node.key.borrow())) {
            Some(Ordering::Less) => Side::Left,
            Some(Ordering::Greater) => Side::Right,
            _ => return tree,
        };
        tree = match { tree } {
            Some(node) => node.child_mut(side),
            None => unreachable!(),
        };
    }
}

pub fn insert<K, P>(tree: &mut Tree<K, P>, new_node: Node<K, P>) -> bool
where
    K: Ord,
{
    let slot = find_slot(tree, &new_node.key);
    if slot.is_some() {
        return false;
    }
    *slot = Some(Box::new(new_node));
    true
}

pub fn contains<K, P, Q>(tree: &Tree<K, P>, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(node.key.borrow()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

// precondition: there exists a minimum node in the tree
fn remove_min<K, P>(mut tree: &mut Tree<K, P>) -> Box<Node<K, P>> {
    while tree.as_ref().map_or(false, |node| node.left.is_some()) {
        tree = match { tree } {
            Some(node) => &mut node.left,
            None => unreachable!(),
        };
    }

    match tree.take() {
        Some(mut node) => {
            *tree = node.right.take();
            node
        },
        None => unreachable!(),
    }
}

/// Unlinks `node` and returns the subtree that takes its place. A node with two children is
/// replaced by its in-order successor, which is relinked rather than copied.
pub fn splice_out<K, P>(node: &mut Node<K, P>) -> Tree<K, P> {
    match (node.left.take(), node.right.take()) {
        (None, right) => right,
        (left, None) => left,
        (left, right) => {
            let mut right = right;
            let mut successor = remove_min(&mut right);
            successor.left = left;
            successor.right = right;
            Some(successor)
        },
    }
}

pub fn remove<K, P, Q>(tree: &mut Tree<K, P>, key: &Q) -> Option<Box<Node<K, P>>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let slot = find_slot(tree, key);
    let mut node = slot.take()?;
    *slot = splice_out(&mut node);
    Some(node)
}

pub fn min<K, P>(tree: &Tree<K, P>) -> Option<&K> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max<K, P>(tree: &Tree<K, P>) -> Option<&K> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn height<K, P>(tree: &Tree<K, P>) -> usize {
    let mut max_height = 0;
    let mut stack = Vec::new();
    if let Some(ref node) = tree {
        stack.push((&**node, 1));
    }
    while let Some((node, depth)) = stack.pop() {
        max_height = cmp::max(max_height, depth);
        if let Some(ref left_node) = node.left {
            stack.push((&**left_node, depth + 1));
        }
        if let Some(ref right_node) = node.right {
            stack.push((&**right_node, depth + 1));
        }
    }
    max_height
}

/// Drops every node of `tree` using an explicit stack, leaving it empty. Boxed nodes would
/// otherwise be dropped recursively, one stack frame per level.
pub fn clear<K, P>(tree: &mut Tree<K, P>) {
    let mut stack: Vec<Box<Node<K, P>>> = tree.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// An iterator over the keys of a tree.
///
/// This iterator traverses the tree in-order and yields immutable references, using an explicit
/// stack bounded by the height of the tree.
pub struct Iter<'a, K, P = ()>
where
    K: 'a,
    P: 'a,
{
    current: &'a Tree<K, P>,
    stack: Vec<&'a Node<K, P>>,
}

impl<'a, K, P> Iter<'a, K, P>
where
    K: 'a,
    P: 'a,
{
    pub(crate) fn new(tree: &'a Tree<K, P>) -> Self {
        Iter {
            current: tree,
            stack: Vec::new(),
        }
    }
}

impl<'a, K, P> Iterator for Iter<'a, K, P>
where
    K: 'a,
    P: 'a,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ref node) = self.current {
            self.current = &node.left;
            self.stack.push(node);
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}
