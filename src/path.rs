use crate::node::{Node, Side};
use crate::tree::Tree;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

/// The ancestors visited by a top-down traversal, from the root downwards.
///
/// Each ancestor is detached from the tree together with the side the traversal took out of it;
/// that child slot is left empty until the ancestor is relinked on the way back up. Owning the
/// ancestors outright lets the bottom-up pass rotate them without parent pointers.
pub struct Path<K, P> {
    links: Vec<(Box<Node<K, P>>, Side)>,
}

/// The outcome of a top-down traversal.
pub struct Descent<K, P> {
    /// Detached ancestors of `node`.
    pub path: Path<K, P>,
    /// The last node visited, with both of its children still attached.
    pub node: Box<Node<K, P>>,
    /// How the searched key compares to `node`'s key. `Equal` means the key was found; otherwise
    /// the corresponding child of `node` is empty and is where the key belongs.
    pub ordering: Ordering,
}

impl<K, P> Path<K, P> {
    fn new() -> Self {
        Path { links: Vec::new() }
    }

    /// Returns the number of recorded ancestors, which is the depth of the node below the path.
    pub fn depth(&self) -> usize {
        self.links.len()
    }

    pub fn push(&mut self, node: Box<Node<K, P>>, side: Side) {
        self.links.push((node, side));
    }

    pub fn pop(&mut self) -> Option<(Box<Node<K, P>>, Side)> {
        self.links.pop()
    }

    /// Relinks every remaining ancestor above `subtree` and returns the new root.
    pub fn reattach(mut self, mut subtree: Box<Node<K, P>>) -> Box<Node<K, P>> {
        while let Some((mut parent, side)) = self.links.pop() {
            parent.attach(side, Some(subtree));
            subtree = parent;
        }
        subtree
    }
}

// Owns a partially detached tree while `descend` compares keys. If a comparison panics, dropping
// the guard relinks the path into the original slot so the tree is not lost during unwinding.
struct DescentGuard<'a, K, P> {
    tree: &'a mut Tree<K, P>,
    path: Path<K, P>,
    node: Tree<K, P>,
}

impl<'a, K, P> Drop for DescentGuard<'a, K, P> {
    fn drop(&mut self) {
        if let Some(node) = self.node.take() {
            let path = mem::replace(&mut self.path, Path::new());
            *self.tree = Some(path.reattach(node));
        }
    }
}

/// Walks from the root towards `key`, detaching every node it passes through.
///
/// The tree is left empty; the caller must put it back together from the returned `Descent`.
/// Returns `None` if the tree was already empty. If comparing keys panics, the tree is relinked
/// before the panic propagates.
pub fn descend<K, P, Q>(tree: &mut Tree<K, P>, key: &Q) -> Option<Descent<K, P>>
where
    K: Borrow<Q>,
    Q: Ord + ?Sized,
{
    let root = tree.take()?;
    let mut guard = DescentGuard {
        tree,
        path: Path::new(),
        node: Some(root),
    };
    let ordering = loop {
        let (side, child) = match guard.node {
            Some(ref mut node) => {
                let ordering = key.cmp(node.key.borrow());
                let side = match ordering {
                    Ordering::Less => Side::Left,
                    Ordering::Greater => Side::Right,
                    Ordering::Equal => break ordering,
                };
                match node.child_mut(side).take() {
                    Some(child) => (side, child),
                    None => break ordering,
                }
            },
            None => unreachable!(),
        };
        match mem::replace(&mut guard.node, Some(child)) {
            Some(parent) => guard.path.push(parent, side),
            None => unreachable!(),
        }
    };

    let path = mem::replace(&mut guard.path, Path::new());
    let node = match guard.node.take() {
        Some(node) => node,
        None => unreachable!(),
    };
    Some(Descent {
        path,
        node,
        ordering,
    })
}
