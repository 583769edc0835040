//! Self-adjusting binary search tree that restructures every accessed path with one splay step
//! per two levels.

mod set;
mod tree;

pub use self::set::SemiSplayTree;
