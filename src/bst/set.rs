use crate::node::Node;
use crate::search_tree::SearchTree;
use crate::tree::{self, Iter, Tree};
use std::borrow::Borrow;

/// An ordered set implemented using an unbalanced binary search tree.
///
/// Keys are inserted where the comparison-guided descent ends and never rotated, so the shape of
/// the tree depends entirely on insertion order. Removing a key with two children relinks its
/// in-order successor into its place.
///
/// # Examples
///
/// ```
/// use adaptive_search_trees::bst::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// tree.add(2);
/// tree.add(1);
/// tree.add(3);
///
/// assert_eq!(tree.root().map(|node| *node.key()), Some(2));
/// assert!(tree.search(&1));
/// assert!(tree.remove(&2));
/// assert_eq!(tree.root().map(|node| *node.key()), Some(3));
/// assert_eq!(tree.values(), vec![&1, &3]);
/// ```
pub struct BinarySearchTree<K> {
    root: Tree<K>,
    size: usize,
}

impl<K> BinarySearchTree<K> {
    /// Constructs a new, empty `BinarySearchTree<K>`.
    pub fn new() -> Self {
        BinarySearchTree { root: None, size: 0 }
    }

    /// Inserts a key into the tree. Returns `true` if the key was not already present.
    pub fn add(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = tree::insert(&mut self.root, Node::new(key, ()));
        if inserted {
            self.size += 1;
        }
        inserted
    }

    /// Checks if a key exists in the tree.
    pub fn search<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        tree::contains(&self.root, key)
    }

    /// Removes a key from the tree. Returns `true` if the key was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = tree::remove(&mut self.root, key).is_some();
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
    /// use adaptive_search_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
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
    /// use adaptive_search_trees::bst::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<u32> = BinarySearchTree::new();
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
    /// use adaptive_search_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.add(1);
    /// tree.add(2);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        tree::clear(&mut self.root);
        self.size = 0;
    }

    /// Returns the minimum key of the tree. Returns `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.add(1);
    /// tree.add(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// ```
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the tree. Returns `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
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
    /// use adaptive_search_trees::bst::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
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

impl<K> SearchTree<K> for BinarySearchTree<K>
where
    K: Ord,
{
    fn add(&mut self, key: K) -> bool {
        BinarySearchTree::add(self, key)
    }

    fn search<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        BinarySearchTree::search(self, key)
    }

    fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        BinarySearchTree::remove(self, key)
    }

    fn values(&self) -> Vec<&K> {
        BinarySearchTree::values(self)
    }

    fn size(&self) -> usize {
        BinarySearchTree::size(self)
    }
}

impl<'a, K> IntoIterator for &'a BinarySearchTree<K>
where
    K: 'a,
{
    type IntoIter = Iter<'a, K>;
    type Item = &'a K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for BinarySearchTree<K> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}
