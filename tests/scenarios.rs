use adaptive_search_trees::semi_splay_tree::SemiSplayTree;
use adaptive_search_trees::treap::{
    LinearFrequencyTreap, LogFrequencyTreap, PriorityStrategy, RandomTreap, RecencyTreap,
    TreapNodeRef,
};
use adaptive_search_trees::config::DEFAULT_LOG_SCALE;
use rand::Rng;

fn key_of<K: Copy, S: PriorityStrategy>(node: Option<TreapNodeRef<'_, K, S>>) -> Option<K> {
    node.map(|node| *node.key())
}

fn assert_treap<K: Ord, S: PriorityStrategy>(node: Option<TreapNodeRef<'_, K, S>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            if let Some(left) = node.left() {
                assert!(left.key() < node.key());
                assert!(left.priority() <= node.priority());
            }
            if let Some(right) = node.right() {
                assert!(right.key() > node.key());
                assert!(right.priority() <= node.priority());
            }
            1 + assert_treap(node.left()) + assert_treap(node.right())
        },
    }
}

#[test]
fn int_test_explicit_priorities() {
    let mut treap = RandomTreap::new();
    for &(key, priority) in &[(50, 15), (30, 5), (70, 10), (20, 2), (40, 4)] {
        assert!(treap.add_with_priority(key, priority));
    }

    let root = treap.root().unwrap();
    assert_eq!(*root.key(), 50);
    assert_eq!(key_of(root.left()), Some(30));
    assert_eq!(key_of(root.right()), Some(70));
    let left = root.left().unwrap();
    assert_eq!(key_of(left.left()), Some(20));
    assert_eq!(key_of(left.right()), Some(40));
    assert_eq!(treap.values(), vec![&20, &30, &40, &50, &70]);

    assert!(treap.add_with_priority(80, 12));
    let root = treap.root().unwrap();
    assert_eq!(*root.key(), 50);
    assert_eq!(key_of(root.left()), Some(30));
    let right = root.right().unwrap();
    assert_eq!(*right.key(), 80);
    assert_eq!(right.priority(), 12);
    assert_eq!(key_of(right.left()), Some(70));
    assert!(right.right().is_none());
    assert_eq!(treap.values(), vec![&20, &30, &40, &50, &70, &80]);
    assert_eq!(assert_treap(treap.root()), 6);
}

#[test]
fn int_test_recency_root_is_newest() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut treap = RecencyTreap::new();
    let mut inserted = 0;

    while inserted < 1000 {
        let key = rng.next_u32();
        if treap.add(key) {
            let root = treap.root().unwrap();
            assert_eq!(*root.key(), key);
            assert_eq!(root.priority(), inserted);
            inserted += 1;
        }
    }
    assert_eq!(assert_treap(treap.root()), 1000);
}

#[test]
fn int_test_recency_sequential_keys_form_a_path() {
    let mut treap = RecencyTreap::new();
    for key in 0..500 {
        treap.add(key);
    }
    assert_eq!(treap.height(), 500);
    assert_eq!(key_of(treap.root()), Some(499));
}

#[test]
fn int_test_drop_deep_recency_treap() {
    let mut treap = RecencyTreap::new();
    for key in 0..300_000u32 {
        treap.add(key);
    }
    assert_eq!(treap.height(), 300_000);
    assert!(treap.search(&0));
    drop(treap);
}

#[test]
fn int_test_clear_deep_recency_treap() {
    let mut treap = RecencyTreap::new();
    for key in 0..300_000u32 {
        treap.add(key);
    }
    treap.clear();
    assert!(treap.is_empty());
    assert!(treap.root().is_none());

    treap.add(1);
    assert_eq!(treap.values(), vec![&1]);
}

#[test]
fn int_test_drop_deep_semi_splay_tree() {
    let mut tree = SemiSplayTree::new();
    for key in 0..300_000u32 {
        tree.add(key);
    }
    assert_eq!(tree.size(), 300_000);
    drop(tree);
}

#[test]
fn int_test_log_frequency_doubling() {
    let mut treap = LogFrequencyTreap::new();
    treap.add(0);

    let mut count = 1;
    let mut previous = treap.root().unwrap().priority();
    assert_eq!(previous, 0);

    for exponent in 1..=12 {
        while count < 1 << exponent {
            assert!(treap.search(&0));
            count += 1;
        }
        let priority = treap.root().unwrap().priority();
        assert_eq!(priority - previous, DEFAULT_LOG_SCALE);
        previous = priority;
    }
}

#[test]
fn int_test_frequency_hot_key_rises() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut linear = LinearFrequencyTreap::new();
    let mut log = LogFrequencyTreap::new();
    for _ in 0..1000 {
        let key = rng.gen_range(0, 10_000);
        linear.add(key);
        log.add(key);
    }
    linear.add(10_000);
    log.add(10_000);

    for _ in 0..64 {
        assert!(linear.search(&10_000));
        assert!(log.search(&10_000));
    }

    assert_eq!(key_of(linear.root()), Some(10_000));
    assert_eq!(key_of(log.root()), Some(10_000));
    assert_eq!(assert_treap(linear.root()), linear.size());
    assert_eq!(assert_treap(log.root()), log.size());
}

macro_rules! treap_invariant_tests {
    ($($test_name:ident: $type_name:ident,)*) => {
        $(
            #[test]
            fn $test_name() {
                let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
                let mut treap: $type_name<u32> = $type_name::new();

                for i in 0..10_000 {
                    let key = rng.gen_range(0, 500);
                    match rng.gen_range(0, 3) {
                        0 => { treap.add(key); },
                        1 => { treap.search(&key); },
                        _ => { treap.remove(&key); },
                    }
                    if i % 101 == 0 {
                        assert_eq!(assert_treap(treap.root()), treap.size());
                    }
                }
                assert_eq!(assert_treap(treap.root()), treap.size());
            }
        )*
    }
}

treap_invariant_tests!(
    int_test_random_treap_invariants: RandomTreap,
    int_test_linear_frequency_treap_invariants: LinearFrequencyTreap,
    int_test_log_frequency_treap_invariants: LogFrequencyTreap,
    int_test_recency_treap_invariants: RecencyTreap,
);

#[test]
fn int_test_semi_splay_two_node_path() {
    let mut tree = SemiSplayTree::new();
    tree.add(10);
    tree.add(5);

    assert!(tree.search(&5));
    let root = tree.root().unwrap();
    assert_eq!(*root.key(), 10);
    assert_eq!(root.left().map(|node| *node.key()), Some(5));
    assert!(root.right().is_none());
}

fn depth_of(tree: &SemiSplayTree<u32>, key: u32) -> Option<usize> {
    let mut curr = tree.root();
    let mut depth = 0;
    while let Some(node) = curr {
        if *node.key() == key {
            return Some(depth);
        }
        curr = if key < *node.key() {
            node.left()
        } else {
            node.right()
        };
        depth += 1;
    }
    None
}

#[test]
fn int_test_semi_splay_repeated_search_shortens_path() {
    let mut tree = SemiSplayTree::new();
    for key in 0..256 {
        tree.add(key);
    }

    let mut depth = depth_of(&tree, 0).unwrap();
    for _ in 0..256 {
        assert!(tree.search(&0));
        let next_depth = depth_of(&tree, 0).unwrap();
        assert!(next_depth <= depth);
        if depth >= 2 {
            assert!(next_depth < depth);
        }
        depth = next_depth;
    }
    assert!(depth <= 1);
    assert_eq!(tree.size(), 256);
}
