use unbalanced_bst::Tree;

use std::collections::{BTreeSet, HashSet};

/// Builds a tree mapping every key to itself, inserted in the given order.
fn build(xs: &[i8]) -> Tree<i8, i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x, *x);
    }
    tree
}

quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        xs.iter().all(|x| tree.search(x) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.search(x).is_none())
    }

    fn iter_is_strictly_ascending(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();
        let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

        keys == expected && tree.len() == keys.len()
    }

    fn overwrite_keeps_shape(xs: Vec<i8>, key: i8) -> bool {
        let mut tree = build(&xs);
        tree.insert(key, 0);
        let height = tree.height();
        let len = tree.len();
        let balanced = tree.is_balanced();

        tree.insert(key, key.wrapping_add(1));

        tree.height() == height
            && tree.len() == len
            && tree.is_balanced() == balanced
            && tree.search(&key) == Some(&key.wrapping_add(1))
    }

    fn delete_removes_exactly_one_key(xs: Vec<i8>, key: i8) -> bool {
        let mut tree = build(&xs);
        let before: BTreeSet<_> = tree.iter().map(|(k, _)| *k).collect();

        let deleted = tree.delete(&key);

        let after: BTreeSet<_> = tree.iter().map(|(k, _)| *k).collect();
        let mut expected = before.clone();
        let was_present = expected.remove(&key);

        tree.search(&key).is_none()
            && after == expected
            && deleted.is_some() == was_present
            && tree.len() == after.len()
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x) == Some(x))
    }

    fn height_bounds(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let n = tree.len();
        // A tree of n nodes is at least ceil(lg(n + 1)) tall and at most n tall.
        let min_height = (usize::BITS - n.leading_zeros()) as usize;

        tree.height() <= n && tree.height() >= min_height
    }
}

#[test]
fn ascending_inserts_form_a_chain() {
    let xs: Vec<i8> = (0..5).collect();
    let tree = build(&xs);

    assert_eq!(tree.height(), 5);
    assert!(!tree.is_balanced());
}
