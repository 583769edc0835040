//! Binary search trees where each node also maintains the heap invariant on a priority.
//!
//! One engine serves every variant; the priority rule is injected as a `PriorityStrategy`.

mod node;
pub mod priority;
mod set;
mod tree;

pub use self::node::TreapNodeRef;
pub use self::priority::{LinearFrequency, LogFrequency, PriorityStrategy, RandomPriority, Recency};
pub use self::set::Treap;

/// A treap with independent uniformly random priorities.
pub type RandomTreap<K> = Treap<K, RandomPriority>;

/// A treap whose priorities grow by one on every hit.
pub type LinearFrequencyTreap<K> = Treap<K, LinearFrequency>;

/// A treap whose priorities grow with the logarithm of the number of hits.
pub type LogFrequencyTreap<K> = Treap<K, LogFrequency>;

/// A treap where the most recently inserted key is always the root.
pub type RecencyTreap<K> = Treap<K, Recency>;
