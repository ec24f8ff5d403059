use persistent::tree::Tree;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

#[quickcheck]
fn contains_every_inserted_value(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.len() == distinct.len()
}

#[quickcheck]
fn iter_yields_the_distinct_values_in_ascending_order(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let mut distinct: Vec<_> = xs.into_iter().collect::<HashSet<_>>().into_iter().collect();
    distinct.sort_unstable();

    tree.iter().copied().collect::<Vec<_>>() == distinct
}

#[quickcheck]
fn reinserting_everything_changes_nothing(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let expected = tree.to_string();
    let expected_len = tree.len();

    let again = xs.iter().fold(tree, |t, &x| t.insert(x));

    again.len() == expected_len && again.to_string() == expected
}

#[quickcheck]
fn snapshots_survive_later_inserts(xs: Vec<i8>) -> bool {
    // Keep every intermediate tree alive while inserting and check each one
    // afterwards: a snapshot holds exactly the prefix it was built from.
    let mut snapshots = vec![Tree::new()];
    for &x in &xs {
        let next = snapshots.last().unwrap().insert(x);
        snapshots.push(next);
    }

    snapshots.iter().enumerate().all(|(i, tree)| {
        let prefix: HashSet<_> = xs[..i].iter().copied().collect();
        tree.len() == prefix.len() && prefix.iter().all(|v| tree.contains(v))
    })
}
