//! Binary search tree without any rebalancing.

mod set;

pub use self::set::BinarySearchTree;
