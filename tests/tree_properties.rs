//! Black-box property tests for the AVL tree public API.

use arbor::AvlTree;
use rand::seq::SliceRandom;

fn collect(tree: &AvlTree<i32>) -> Vec<i32> {
    tree.iter().copied().collect()
}

#[test]
fn test_ll_case_single_right_rotation() {
    let mut tree = AvlTree::new();
    for key in [30, 20, 10] {
        tree.insert(key);
    }

    let stats = tree.stats();
    assert_eq!(stats.ll_rotations, 1);
    assert_eq!(stats.total_rotations(), 1);
    assert_eq!(tree.root(), Some(&20));
    assert_eq!(collect(&tree), vec![10, 20, 30]);
}

#[test]
fn test_rr_case_single_left_rotation() {
    let mut tree = AvlTree::new();
    for key in [10, 20, 30] {
        tree.insert(key);
    }

    let stats = tree.stats();
    assert_eq!(stats.rr_rotations, 1);
    assert_eq!(stats.total_rotations(), 1);
    assert_eq!(tree.root(), Some(&20));
    assert_eq!(collect(&tree), vec![10, 20, 30]);
}

#[test]
fn test_lr_case_double_rotation() {
    let mut tree = AvlTree::new();
    for key in [30, 10, 20] {
        tree.insert(key);
    }

    let stats = tree.stats();
    assert_eq!(stats.lr_rotations, 1);
    assert_eq!(stats.total_rotations(), 1);
    assert_eq!(tree.root(), Some(&20));
    assert_eq!(collect(&tree), vec![10, 20, 30]);
}

#[test]
fn test_rl_case_double_rotation() {
    let mut tree = AvlTree::new();
    for key in [10, 30, 20] {
        tree.insert(key);
    }

    let stats = tree.stats();
    assert_eq!(stats.rl_rotations, 1);
    assert_eq!(stats.total_rotations(), 1);
    assert_eq!(tree.root(), Some(&20));
    assert_eq!(collect(&tree), vec![10, 20, 30]);
}

#[test]
fn test_in_order_sorted_for_random_orders() {
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let mut keys: Vec<i32> = (0..1000).collect();
        keys.shuffle(&mut rng);

        let mut tree = AvlTree::new();
        for key in &keys {
            tree.insert(*key);
        }

        let sorted = collect(&tree);
        assert_eq!(sorted.len(), 1000);
        assert!(sorted.windows(2).all(|w| w[0] < w[1]), "not strictly ascending");
    }
}

#[test]
fn test_duplicates_leave_traversal_unchanged() {
    let mut tree = AvlTree::new();
    for key in [8, 3, 11, 1, 5] {
        tree.insert(key);
    }
    let before = collect(&tree);

    for key in [3, 11, 8] {
        tree.insert(key);
    }

    assert_eq!(collect(&tree), before);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.stats().rejected_duplicates, 3);
}

#[test]
fn test_height_bound_sequential() {
    let mut tree = AvlTree::new();
    let n = 4096u32;
    for key in 0..n {
        tree.insert(key);
    }

    let bound = (1.44 * f64::from(n + 2).log2()).floor() as u32;
    assert!(
        tree.height() <= bound,
        "height {} exceeds AVL bound {}",
        tree.height(),
        bound
    );
}

#[test]
fn test_height_bound_shuffled() {
    let mut keys: Vec<u32> = (0..4096).collect();
    keys.shuffle(&mut rand::thread_rng());

    let mut tree = AvlTree::new();
    for key in keys {
        tree.insert(key);
    }

    let bound = (1.44 * f64::from(4096u32 + 2).log2()).floor() as u32;
    assert!(tree.height() <= bound);
}

#[test]
fn test_len_tracks_distinct_keys() {
    let mut tree = AvlTree::new();
    assert!(tree.is_empty());

    for key in [1, 2, 2, 3, 3, 3] {
        tree.insert(key);
    }

    assert_eq!(tree.len(), 3);
    assert!(!tree.is_empty());

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(collect(&tree), Vec::<i32>::new());
}

#[test]
fn test_string_records() {
    let mut tree = AvlTree::new();
    for word in ["pear", "apple", "quince", "fig", "mango"] {
        tree.insert(word.to_string());
    }

    let words: Vec<&str> = tree.iter().map(String::as_str).collect();
    assert_eq!(words, vec!["apple", "fig", "mango", "pear", "quince"]);
}
