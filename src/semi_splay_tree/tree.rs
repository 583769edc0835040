use crate::node::{rotate_left, rotate_right, Node, Side};
use crate::path::{self, Descent, Path};
use crate::tree::{self, Tree};
use std::borrow::Borrow;
use std::cmp::Ordering;

// Restructures a child, its parent and its grandparent and returns the new local root. `side` is
// the side of the parent the child hangs from; `parent_side` is the side of the grandparent the
// parent hangs from. A zig-zig rotates only at the grandparent.
fn splay_step<K>(
    child: Box<Node<K>>,
    mut parent: Box<Node<K>>,
    side: Side,
    mut grandparent: Box<Node<K>>,
    parent_side: Side,
) -> Box<Node<K>> {
    parent.attach(side, Some(child));
    match (parent_side, side) {
        (Side::Left, Side::Left) => {
            grandparent.left = Some(parent);
            rotate_right(grandparent)
        },
        (Side::Right, Side::Right) => {
            grandparent.right = Some(parent);
            rotate_left(grandparent)
        },
        (Side::Left, Side::Right) => {
            grandparent.left = Some(rotate_left(parent));
            rotate_right(grandparent)
        },
        (Side::Right, Side::Left) => {
            grandparent.right = Some(rotate_right(parent));
            rotate_left(grandparent)
        },
    }
}

/// Semi-splays the recorded path ending in `node` and returns the root of the whole tree.
///
/// Starting from the bottom, each step takes `node`, its parent and its grandparent, replaces them
/// with the subtree produced by `splay_step`, and then continues from that subtree, two levels
/// higher. Paths with fewer than three nodes are relinked unchanged.
pub fn semi_splay<K>(mut path: Path<K, ()>, mut node: Box<Node<K>>) -> Box<Node<K>> {
    let mut steps = 0;
    while path.depth() >= 2 {
        let (parent, side) = match path.pop() {
            Some(link) => link,
            None => unreachable!(),
        };
        let (grandparent, parent_side) = match path.pop() {
            Some(link) => link,
            None => unreachable!(),
        };
        node = splay_step(node, parent, side, grandparent, parent_side);
        steps += 1;
    }
    trace!("semi-splayed with {} steps", steps);
    path.reattach(node)
}

pub fn insert<K>(tree: &mut Tree<K>, key: K) -> bool
where
    K: Ord,
{
    let Descent {
        mut path,
        node,
        ordering,
    } = match path::descend(tree, &key) {
        Some(descent) => descent,
        None => {
            *tree = Some(Box::new(Node::new(key, ())));
            return true;
        },
    };

    let side = match ordering {
        Ordering::Less => Side::Left,
        Ordering::Greater => Side::Right,
        Ordering::Equal => {
            *tree = Some(semi_splay(path, node));
            return false;
        },
    };

    path.push(node, side);
    *tree = Some(semi_splay(path, Box::new(Node::new(key, ()))));
    true
}

pub fn search<K, Q>(tree: &mut Tree<K>, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    match path::descend(tree, key) {
        Some(Descent {
            path,
            node,
            ordering,
        }) => {
            *tree = Some(semi_splay(path, node));
            ordering == Ordering::Equal
        },
        None => false,
    }
}

/// Removes `key` and semi-splays the path of its ancestors, whose last node is then the parent of
/// the replacement. Returns the removed key.
pub fn remove<K, Q>(tree: &mut Tree<K>, key: &Q) -> Option<K>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let Descent {
        mut path,
        mut node,
        ordering,
    } = path::descend(tree, key)?;

    if ordering != Ordering::Equal {
        *tree = Some(semi_splay(path, node));
        return None;
    }

    let replacement = tree::splice_out(&mut node);
    *tree = match path.pop() {
        Some((mut parent, side)) => {
            parent.attach(side, replacement);
            Some(semi_splay(path, parent))
        },
        None => replacement,
    };
    let Node { key, .. } = *node;
    Some(key)
}
