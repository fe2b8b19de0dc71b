//! The walkthrough `bst-demo` prints, checked value by value.

use unbalanced_bst::Tree;

fn seeded() -> Tree<i32, String> {
    [
        (50, "Root"),
        (30, "Node 30"),
        (70, "Node 70"),
        (20, "Node 20"),
        (40, "Node 40"),
        (60, "Node 60"),
        (80, "Node 80"),
    ]
    .into_iter()
    .map(|(k, v)| (k, v.to_string()))
    .collect()
}

fn keys(tree: &Tree<i32, String>) -> Vec<i32> {
    tree.iter().map(|(k, _)| *k).collect()
}

#[test]
fn insert_and_search() {
    let tree = seeded();

    assert_eq!(tree.search(&40).map(String::as_str), Some("Node 40"));
    assert_eq!(tree.search(&99), None);
    assert_eq!(tree.height(), 3);
    assert!(tree.is_balanced());
}

#[test]
fn deletions_keep_the_tree_connected() {
    let mut tree = seeded();

    // Leaf.
    assert_eq!(tree.delete(&80).as_deref(), Some("Node 80"));
    assert_eq!(tree.search(&80), None);

    // One child: 25 hangs off 20 and must take its place.
    tree.insert(25, "Node 25".to_string());
    assert_eq!(tree.delete(&20).as_deref(), Some("Node 20"));
    assert_eq!(tree.search(&25).map(String::as_str), Some("Node 25"));

    // Two children: 30 has 25 and 40.
    assert_eq!(tree.delete(&30).as_deref(), Some("Node 30"));
    assert_eq!(tree.search(&40).map(String::as_str), Some("Node 40"));
    assert_eq!(tree.search(&30), None);

    assert_eq!(keys(&tree), vec![25, 40, 50, 60, 70]);
    assert_eq!(tree.len(), 5);
}

#[test]
fn deleting_missing_keys_is_a_no_op() {
    let mut tree = seeded();

    assert_eq!(tree.delete(&99), None);
    assert_eq!(tree.delete(&45), None);
    assert_eq!(keys(&tree), vec![20, 30, 40, 50, 60, 70, 80]);
    assert_eq!(tree.height(), 3);
}

#[test]
fn ascending_chain() {
    let chain: Tree<i32, String> = (0..5).map(|i| (i, format!("Val {i}"))).collect();

    assert_eq!(chain.height(), 5);
    assert!(!chain.is_balanced());
    assert_eq!(chain.search(&3).map(String::as_str), Some("Val 3"));
}
