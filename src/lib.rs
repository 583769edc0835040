//! Ordered in-memory key containers built on self-adjusting binary search trees.
//!
//! Every container implements [`SearchTree`](search_tree/trait.SearchTree.html):
//!
//! - [`BinarySearchTree`](bst/struct.BinarySearchTree.html), an unbalanced tree;
//! - [`Treap`](treap/struct.Treap.html) with a random, linear-frequency, logarithmic-frequency or
//!   recency priority strategy;
//! - [`SemiSplayTree`](semi_splay_tree/struct.SemiSplayTree.html).
//!
//! No node stores a parent link. Operations record the path they walk from the root and
//! rebalance bottom-up along that path.

#[macro_use]
extern crate log;
extern crate rand;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod bst;
pub mod config;
pub mod node;
mod path;
pub mod search_tree;
pub mod semi_splay_tree;
pub mod treap;
mod tree;

pub use self::search_tree::SearchTree;
pub use self::tree::Iter;
