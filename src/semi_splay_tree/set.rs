use crate::node::Node;
use crate::search_tree::SearchTree;
use crate::semi_splay_tree::tree as splay_tree;
use crate::tree::{self, Iter, Tree};
use std::borrow::Borrow;

/// An ordered set implemented using a semi-splay tree.
///
/// A semi-splay tree is a self-adjusting binary search tree. Every `add`, `search` and `remove`
/// records the path it walked and then restructures that path bottom-up, one splay step per two
/// levels, which roughly halves the depth of the accessed path while doing half the rotations of
/// a full splay.
///
/// # Examples
///
/// ```
/// use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
///
/// let mut tree = SemiSplayTree::new();
/// tree.add(1);
/// tree.add(2);
/// tree.add(3);
///
/// assert_eq!(tree.size(), 3);
/// assert_eq!(tree.root().map(|node| *node.key()), Some(2));
///
/// assert!(tree.search(&3));
/// assert!(tree.remove(&1));
/// assert_eq!(tree.values(), vec![&2, &3]);
/// ```
pub struct SemiSplayTree<K> {
    root: Tree<K>,
    size: usize,
}

impl<K> SemiSplayTree<K> {
    /// Constructs a new, empty `SemiSplayTree<K>`.
    pub fn new() -> Self {
        SemiSplayTree { root: None, size: 0 }
    }

    /// Inserts a key into the tree and semi-splays the path to it. Returns `true` if the key was
    /// not already present; a present key is still splayed.
    pub fn add(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = splay_tree::insert(&mut self.root, key);
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Checks if a key exists in the tree and semi-splays the path walked by the lookup, whether
    /// or not the key was found.
    pub fn search<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        splay_tree::search(&mut self.root, key)
    }

    /// Removes a key from the tree. A node with two children is replaced by its in-order
    /// successor, and the path of the removed node's ancestors is semi-splayed.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = splay_tree::remove(&mut self.root, key).is_some();
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Returns the root node of the tree, or `None` if it is empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_ref().map(|node| &**node)
    }

    /// Returns the keys of the tree in ascending order.
    pub fn values(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Returns the number of keys in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
    ///
    /// let mut tree = SemiSplayTree::new();
    /// tree.add(1);
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
    ///
    /// let tree: SemiSplayTree<u32> = SemiSplayTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Clears the tree, removing all keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
    ///
    /// let mut tree = SemiSplayTree::new();
    /// tree.add(1);
    /// tree.add(2);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.root);
        self.size = 0;
    }

    /// Returns the minimum key of the tree. Returns `None` if it is empty. Does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
    ///
    /// let mut tree = SemiSplayTree::new();
    /// tree.add(1);
    /// tree.add(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the tree. Returns `None` if it is empty. Does not splay.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
    ///
    /// let mut tree = SemiSplayTree::new();
    /// tree.add(1);
    /// tree.add(3);
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&K> {
        tree::max(&self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf, or 0 if the
    /// tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
    ///
    /// let mut tree = SemiSplayTree::new();
    /// assert_eq!(tree.height(), 0);
    /// tree.add(1);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns an iterator over the tree. The iterator yields keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(&self.root)
    }
}

impl<K> SearchTree<K> for SemiSplayTree<K>
where
    K: Ord,
{
    fn add(&mut self, key: K) -> bool {
        SemiSplayTree::add(self, key)
    }

    fn search<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        SemiSplayTree::search(self, key)
    }

    fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        SemiSplayTree::remove(self, key)
    }

    fn values(&self) -> Vec<&K> {
        SemiSplayTree::values(self)
    }

    fn size(&self) -> usize {
        SemiSplayTree::size(self)
    }
}

impl<'a, K> IntoIterator for &'a SemiSplayTree<K>
where
    K: 'a,
{
    type IntoIter = Iter<'a, K>;
    type Item = &'a K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Default for SemiSplayTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for SemiSplayTree<K> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}
