use crate::config::{ConfigError, TreapConfig};
use crate::search_tree::SearchTree;
use crate::tree::{self, Iter};
use crate::treap::node::TreapNodeRef;
use crate::treap::priority::{PriorityStrategy, RandomPriority};
use crate::treap::tree::{self as treap_tree, PriorityTree};
use std::borrow::Borrow;

/// An ordered set implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property.
/// Each node has a key and a priority. The key of any node is greater than all keys in its left
/// subtree and less than all keys in its right subtree, and the priority of a node is at least the
/// priority of each of its children. How priorities are assigned is decided by the strategy `S`:
/// random priorities give an expected height logarithmic in the number of keys, while the
/// frequency and recency strategies pull hot or new keys towards the root.
///
/// # Examples
///
/// ```
/// use adaptive_search_trees::treap::RandomTreap;
///
/// let mut treap = RandomTreap::new();
/// assert!(treap.add(0));
/// assert!(treap.add(3));
/// assert!(!treap.add(3));
///
/// assert_eq!(treap.size(), 2);
/// assert!(treap.search(&3));
/// assert_eq!(treap.min(), Some(&0));
///
/// assert!(treap.remove(&0));
/// assert!(!treap.remove(&1));
/// assert_eq!(treap.values(), vec![&3]);
/// ```
pub struct Treap<K, S = RandomPriority> {
    root: PriorityTree<K>,
    strategy: S,
    size: usize,
}

impl<K, S> Treap<K, S>
where
    S: PriorityStrategy,
{
    /// Constructs a new, empty treap with a default strategy.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::treap::LinearFrequencyTreap;
    ///
    /// let treap: LinearFrequencyTreap<u32> = LinearFrequencyTreap::new();
    /// ```
    pub fn new() -> Self
    where
        S: Default,
    {
        Self::with_strategy(S::default())
    }

    /// Constructs a new, empty treap that assigns priorities with `strategy`.
    pub fn with_strategy(strategy: S) -> Self {
        Treap {
            root: None,
            strategy,
            size: 0,
        }
    }

    /// Constructs a new, empty treap from a configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::config::{ConfigError, TreapConfig};
    /// use adaptive_search_trees::treap::LogFrequencyTreap;
    ///
    /// let config = TreapConfig { log_scale: 0, ..TreapConfig::default() };
    /// let result = LogFrequencyTreap::<u32>::with_config(&config);
    /// assert_eq!(result.err(), Some(ConfigError::ScaleOutOfRange(0)));
    /// ```
    pub fn with_config(config: &TreapConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!("building treap from {:?}", config);
        Ok(Self::with_strategy(S::from_config(config)?))
    }

    /// Inserts a key into the treap. Returns `true` if the key was not already present. Adding a
    /// present key counts as a hit for frequency strategies.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::treap::LinearFrequencyTreap;
    ///
    /// let mut treap = LinearFrequencyTreap::new();
    /// assert!(treap.add(1));
    /// assert!(!treap.add(1));
    /// assert_eq!(treap.root().map(|node| node.priority()), Some(2));
    /// ```
    pub fn add(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let Treap {
            ref mut root,
            ref mut strategy,
            ref mut size,
        } = self;
        let inserted = treap_tree::insert(root, key, strategy, None);
        if inserted {
            *size += 1;
        }
        inserted
    }

    /// Checks if a key exists in the treap. For frequency strategies a hit raises the key's
    /// priority and may rotate it towards the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::treap::RandomTreap;
    ///
    /// let mut treap = RandomTreap::new();
    /// treap.add(1);
    /// assert!(!treap.search(&0));
    /// assert!(treap.search(&1));
    /// ```
    pub fn search<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        if S::ADJUSTS_ON_ACCESS {
            treap_tree::access(&mut self.root, key, &self.strategy)
        } else {
            tree::contains(&self.root, key)
        }
    }

    /// Removes a key from the treap. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::treap::RandomTreap;
    ///
    /// let mut treap = RandomTreap::new();
    /// treap.add(1);
    /// assert!(treap.remove(&1));
    /// assert!(!treap.remove(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = treap_tree::remove(&mut self.root, key).is_some();
        if removed {
            self.size -= 1;
        }
        removed
    }

    /// Returns a read-only handle to the root of the treap, or `None` if it is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::treap::RecencyTreap;
    ///
    /// let mut treap = RecencyTreap::new();
    /// treap.add(5);
    /// treap.add(3);
    /// let root = treap.root().unwrap();
    /// assert_eq!(root.key(), &3);
    /// assert_eq!(root.priority(), 1);
    /// assert_eq!(root.right().map(|node| *node.key()), Some(5));
    /// ```
    pub fn root(&self) -> Option<TreapNodeRef<'_, K, S>> {
        self.root.as_ref().map(|node| TreapNodeRef::new(node))
    }

    /// Returns the priority strategy of the treap.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }
}

impl<K, S> Treap<K, S> {
    /// Returns the keys of the treap in ascending order.
    pub fn values(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Returns the number of keys in the treap.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the treap is empty.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Clears the treap, removing all keys. The strategy keeps its state.
    pub fn clear(&mut self) {
        tree::clear(&mut self.root);
        self.size = 0;
    }

    /// Returns the minimum key of the treap.
    pub fn min(&self) -> Option<&K> {
        tree::min(&self.root)
    }

    /// Returns the maximum key of the treap.
    pub fn max(&self) -> Option<&K> {
        tree::max(&self.root)
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns an iterator over the treap. The iterator yields keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::treap::RandomTreap;
    ///
    /// let mut treap = RandomTreap::new();
    /// treap.add(2);
    /// treap.add(1);
    ///
    /// let mut iterator = treap.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, i64> {
        Iter::new(&self.root)
    }
}

impl<K> Treap<K, RandomPriority>
where
    K: Ord,
{
    /// Inserts a key with an explicit priority instead of a random one. Returns `false`, leaving
    /// the treap unchanged, if the key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::treap::RandomTreap;
    ///
    /// let mut treap = RandomTreap::new();
    /// treap.add_with_priority(1, 5);
    /// treap.add_with_priority(2, 9);
    /// assert_eq!(treap.root().map(|node| *node.key()), Some(2));
    /// ```
    pub fn add_with_priority(&mut self, key: K, priority: i64) -> bool {
        let Treap {
            ref mut root,
            ref mut strategy,
            ref mut size,
        } = self;
        let inserted = treap_tree::insert(root, key, strategy, Some(priority));
        if inserted {
            *size += 1;
        }
        inserted
    }
}

impl<K, S> SearchTree<K> for Treap<K, S>
where
    K: Ord,
    S: PriorityStrategy,
{
    fn add(&mut self, key: K) -> bool {
        Treap::add(self, key)
    }

    fn search<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Treap::search(self, key)
    }

    fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Treap::remove(self, key)
    }

    fn values(&self) -> Vec<&K> {
        Treap::values(self)
    }

    fn size(&self) -> usize {
        Treap::size(self)
    }
}

impl<'a, K, S> IntoIterator for &'a Treap<K, S>
where
    K: 'a,
{
    type IntoIter = Iter<'a, K, i64>;
    type Item = &'a K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, S> Default for Treap<K, S>
where
    S: PriorityStrategy + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> Drop for Treap<K, S> {
    fn drop(&mut self) {
        tree::clear(&mut self.root);
    }
}
