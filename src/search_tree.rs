//! The ordered-container contract shared by every tree in this crate.

use std::borrow::Borrow;

/// An ordered set of unique keys backed by a binary search tree.
///
/// `search` takes `&mut self` because self-adjusting trees restructure themselves on lookups.
/// Trees that do not adjust on access leave their shape untouched.
///
/// # Examples
///
/// ```
/// use adaptive_search_trees::bst::BinarySearchTree;
/// use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
/// use adaptive_search_trees::treap::RandomTreap;
/// use adaptive_search_trees::SearchTree;
///
/// fn fill<T: SearchTree<u32>>(tree: &mut T) {
///     for key in &[3, 1, 2] {
///         tree.add(*key);
///     }
/// }
///
/// let mut bst = BinarySearchTree::new();
/// let mut splay = SemiSplayTree::new();
/// let mut treap = RandomTreap::new();
/// fill(&mut bst);
/// fill(&mut splay);
/// fill(&mut treap);
/// assert_eq!(bst.values(), splay.values());
/// assert_eq!(splay.values(), treap.values());
/// ```
pub trait SearchTree<K>
where
    K: Ord,
{
    /// Inserts a key. Returns `false` if the key was already present.
    fn add(&mut self, key: K) -> bool;

    /// Returns `true` if the key is present.
    fn search<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Removes a key. Returns `false` if the key was not present.
    fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized;

    /// Returns every key in ascending order.
    fn values(&self) -> Vec<&K>;

    /// Returns the number of keys.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
