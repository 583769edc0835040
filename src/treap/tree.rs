use crate::node::{rotate_left, rotate_right, Node, PriorityNode, Side};
use crate::path::{self, Descent, Path};
use crate::tree::{self, Tree};
use crate::treap::priority::PriorityStrategy;
use std::borrow::Borrow;
use std::cmp::Ordering;

pub type PriorityTree<K> = Tree<K, i64>;

enum RemovalCases {
    RemoveNode,
    RotateLeft,
    RotateRight,
}

/// Rotates `node` up through the recorded `path` while its priority exceeds its parent's, then
/// relinks the rest of the path. Returns the root of the whole tree.
pub fn bubble_up<K>(mut path: Path<K, i64>, mut node: Box<PriorityNode<K>>) -> Box<PriorityNode<K>> {
    let mut levels = 0;
    while let Some((mut parent, side)) = path.pop() {
        let violated = node.priority > parent.priority;
        parent.attach(side, Some(node));
        if !violated {
            trace!("bubbled up {} levels", levels);
            return path.reattach(parent);
        }
        node = match side {
            Side::Left => rotate_right(parent),
            Side::Right => rotate_left(parent),
        };
        levels += 1;
    }
    trace!("bubbled up {} levels to the root", levels);
    node
}

/// Inserts `key`, or records a hit if it is already present. A new node takes `priority` if one
/// is given and otherwise asks `strategy`. Returns `true` if a node was created.
pub fn insert<K, S>(
    tree: &mut PriorityTree<K>,
    key: K,
    strategy: &mut S,
    priority: Option<i64>,
) -> bool
where
    K: Ord,
    S: PriorityStrategy,
{
    let Descent {
        mut path,
        mut node,
        ordering,
    } = match path::descend(tree, &key) {
        Some(descent) => descent,
        None => {
            let priority = priority.unwrap_or_else(|| strategy.initial_priority());
            *tree = Some(Box::new(Node::new(key, priority)));
            return true;
        },
    };

    let side = match ordering {
        Ordering::Less => Side::Left,
        Ordering::Greater => Side::Right,
        Ordering::Equal => {
            if S::ADJUSTS_ON_ACCESS {
                node.priority = strategy.accessed_priority(node.priority);
            }
            *tree = Some(bubble_up(path, node));
            return false;
        },
    };

    path.push(node, side);
    let priority = priority.unwrap_or_else(|| strategy.initial_priority());
    *tree = Some(bubble_up(path, Box::new(Node::new(key, priority))));
    true
}

/// Looks up `key`, raising its priority and bubbling it up if found.
pub fn access<K, Q, S>(tree: &mut PriorityTree<K>, key: &Q, strategy: &S) -> bool
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
    S: PriorityStrategy,
{
    let Descent {
        path,
        mut node,
        ordering,
    } = match path::descend(tree, key) {
        Some(descent) => descent,
        None => return false,
    };

    let found = ordering == Ordering::Equal;
    if found {
        node.priority = strategy.accessed_priority(node.priority);
    }
    *tree = Some(bubble_up(path, node));
    found
}

fn get_removal_rotation_case<K>(node: &PriorityNode<K>) -> RemovalCases {
    match (&node.left, &node.right) {
        (Some(left_node), Some(right_node)) => {
            if left_node.priority > right_node.priority {
                RemovalCases::RotateRight
            } else {
                RemovalCases::RotateLeft
            }
        },
        (Some(_), None) => RemovalCases::RotateRight,
        (None, Some(_)) => RemovalCases::RotateLeft,
        (None, None) => RemovalCases::RemoveNode,
    }
}

/// Removes `key` by rotating its node down until it is a leaf and then unlinking it.
pub fn remove<K, Q>(tree: &mut PriorityTree<K>, key: &Q) -> Option<K>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let mut slot = tree::find_slot(tree, key);
    let mut node = slot.take()?;
    let mut rotations = 0;
    loop {
        // `side` is where `node` ends up below the promoted child.
        let (mut subtree, side) = match get_removal_rotation_case(&node) {
            RemovalCases::RotateRight => (rotate_right(node), Side::Right),
            RemovalCases::RotateLeft => (rotate_left(node), Side::Left),
            RemovalCases::RemoveNode => {
                trace!("rotated {} levels before unlinking", rotations);
                let Node { key, .. } = *node;
                return Some(key);
            },
        };
        rotations += 1;
        node = match subtree.child_mut(side).take() {
            Some(node) => node,
            None => unreachable!(),
        };
        *slot = Some(subtree);
        slot = match { slot } {
            Some(subtree) => subtree.child_mut(side),
            None => unreachable!(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{access, insert, remove, PriorityTree};
    use crate::node::Node;
    use crate::tree::Iter;
    use crate::treap::priority::{LinearFrequency, RandomPriority};

    fn assert_heap<K>(tree: &PriorityTree<K>) {
        if let Some(ref node) = tree {
            for child in [&node.left, &node.right].iter() {
                if let Some(ref child_node) = child {
                    assert!(node.priority >= child_node.priority);
                }
                assert_heap(child);
            }
        }
    }

    #[test]
    fn test_insert_explicit_priorities() {
        let mut tree = None;
        let mut strategy = RandomPriority::new();
        for &(key, priority) in &[(2, 1), (1, 5), (3, 3)] {
            assert!(insert(&mut tree, key, &mut strategy, Some(priority)));
        }
        assert_heap(&tree);

        let root = tree.as_ref().unwrap();
        assert_eq!(root.key(), &1);
        assert_eq!(root.right().map(Node::key), Some(&3));
        assert_eq!(root.right().unwrap().left().map(Node::key), Some(&2));
    }

    #[test]
    fn test_access_bubbles_up() {
        let mut tree = None;
        let mut strategy = LinearFrequency;
        for key in 0..3 {
            insert(&mut tree, key, &mut strategy, None);
        }
        assert!(access(&mut tree, &2, &strategy));
        assert_eq!(tree.as_ref().map(|node| node.key), Some(2));
        assert!(!access(&mut tree, &5, &strategy));
        assert_heap(&tree);
    }

    #[test]
    fn test_remove_rotates_to_leaf() {
        let mut tree = None;
        let mut strategy = RandomPriority::new();
        for &(key, priority) in &[(4, 10), (2, 8), (6, 9), (1, 1), (3, 2), (5, 3), (7, 4)] {
            insert(&mut tree, key, &mut strategy, Some(priority));
        }
        assert_eq!(remove(&mut tree, &4), Some(4));
        assert_heap(&tree);

        let root = tree.as_ref().unwrap();
        assert_eq!(root.key(), &6);
        assert_eq!(root.left().map(Node::key), Some(&2));
        assert_eq!(
            Iter::new(&tree).collect::<Vec<&u32>>(),
            vec![&1, &2, &3, &5, &6, &7],
        );
        assert_eq!(remove(&mut tree, &4), None);
    }
}
