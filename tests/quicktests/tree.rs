use unbalanced_bst::{Error, Tree};

use std::collections::BTreeSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.iter().eq(set.iter()) && tree.node_count() == set.len()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let sorted: Vec<_> = tree.iter().collect();

    sorted.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    let mut once: Tree<_> = xs.iter().copied().collect();
    once.insert(x);
    let mut twice = once.copy();
    twice.insert(x);

    twice.equals(&once) && twice.levels() == once.levels()
}

#[quickcheck]
fn insert_then_remove_changes_count_by_one(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    tree.remove(&x);
    let before = tree.node_count();

    let inserted = tree.insert(x) && tree.node_count() == before + 1;
    let removed = tree.remove(&x) && tree.node_count() == before;
    let absent = !tree.remove(&x) && tree.node_count() == before;

    inserted && removed && absent
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - drop each one.
    still_present.retain(|x| !deletes.contains(x));

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn mirror_is_an_involution(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let twice = tree.mirror().mirror();

    twice.equals(&tree) && twice.levels() == tree.levels()
}

#[quickcheck]
fn mirror_is_a_mirror(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.is_mirror(&tree.mirror()) && tree.mirror().is_mirror(&tree)
}

#[quickcheck]
fn copy_is_independent(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let levels_before: Vec<Vec<i8>> = tree
        .levels()
        .into_iter()
        .map(|level| level.into_iter().copied().collect())
        .collect();

    let mut copy = tree.copy();
    let copied_equal = copy.equals(&tree);
    let mut set: BTreeSet<_> = copy.iter().copied().collect();
    do_ops(&ops, &mut copy, &mut set);

    let levels_after: Vec<Vec<i8>> = tree
        .levels()
        .into_iter()
        .map(|level| level.into_iter().copied().collect())
        .collect();

    copied_equal && levels_before == levels_after
}

#[quickcheck]
fn rotations_keep_order(xs: Vec<i8>) -> bool {
    let original: Tree<_> = xs.iter().copied().collect();
    let mut tree = original.copy();

    for x in &xs {
        let _ = tree.rotate_right(x);
        let _ = tree.rotate_left(&x.wrapping_add(1));
    }

    tree.iter().eq(original.iter()) && tree.node_count() == original.node_count()
}

#[quickcheck]
fn min_and_max(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => tree.find_min() == Ok(min) && tree.find_max() == Ok(max),
        _ => tree.find_min() == Err(Error::Underflow) && tree.find_max() == Err(Error::Underflow),
    }
}
