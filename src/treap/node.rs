use crate::node::PriorityNode;
use crate::treap::priority::PriorityStrategy;
use std::marker::PhantomData;

/// A read-only handle to a node of a treap.
///
/// The handle reports the priority as the treap's strategy defines it, so strategies that pack
/// bookkeeping into the stored word expose only the meaningful part.
pub struct TreapNodeRef<'a, K, S>
where
    K: 'a,
{
    node: &'a PriorityNode<K>,
    _strategy: PhantomData<S>,
}

impl<'a, K, S> TreapNodeRef<'a, K, S>
where
    K: 'a,
    S: PriorityStrategy,
{
    pub(crate) fn new(node: &'a PriorityNode<K>) -> Self {
        TreapNodeRef {
            node,
            _strategy: PhantomData,
        }
    }

    /// Returns the key stored in the node.
    pub fn key(&self) -> &'a K {
        &self.node.key
    }

    /// Returns the effective priority of the node.
    pub fn priority(&self) -> i64 {
        S::effective_priority(self.node.priority)
    }

    /// Returns a handle to the left child of the node, if any.
    pub fn left(&self) -> Option<Self> {
        self.node.left().map(TreapNodeRef::new)
    }

    /// Returns a handle to the right child of the node, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use adaptive_search_trees::treap::RandomTreap;
    ///
    /// let mut treap = RandomTreap::new();
    /// treap.add_with_priority(1, 9);
    /// treap.add_with_priority(2, 5);
    ///
    /// let root = treap.root().unwrap();
    /// assert!(root.left().is_none());
    /// assert_eq!(root.right().map(|node| *node.key()), Some(2));
    /// ```
    pub fn right(&self) -> Option<Self> {
        self.node.right().map(TreapNodeRef::new)
    }
}

impl<'a, K, S> Clone for TreapNodeRef<'a, K, S>
where
    K: 'a,
{
    fn clone(&self) -> Self {
        TreapNodeRef {
            node: self.node,
            _strategy: PhantomData,
        }
    }
}

impl<'a, K, S> Copy for TreapNodeRef<'a, K, S> where K: 'a {}
