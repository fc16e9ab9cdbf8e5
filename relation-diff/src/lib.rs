//! Order-preserving asymmetric difference over relationship lists.
//!
//! Both questions this crate answers ("who am I following that doesn't
//! follow me back?" and "who followed me at snapshot time but doesn't
//! now?") are the same operation with the arguments playing different
//! roles: keep the items of one list that are absent from the other, in
//! the first list's order, each at most once.
//!
//! The item type is generic: callers key on whatever identifier they
//! extracted from their source data, and get owned copies back.

use std::{collections::HashSet, fmt::Debug, hash::Hash};

use itertools::Itertools;

/// Returns every account in `following` that does not appear in
/// `followers`, deduplicated to first occurrence, in `following`'s order.
pub fn not_following_back<T>(following: &[T], followers: &[T]) -> Vec<T>
where
    T: Clone + Debug + Eq + Hash,
{
    absent_from(following, followers)
}

/// Returns every account in `snapshot_followers` that no longer appears in
/// `current_followers`: the accounts that unfollowed between snapshot time
/// and now. Order follows the snapshot list.
pub fn unfollowed<T>(snapshot_followers: &[T], current_followers: &[T]) -> Vec<T>
where
    T: Clone + Debug + Eq + Hash,
{
    absent_from(snapshot_followers, current_followers)
}

/// The shared difference: membership set over `reference`, then one pass
/// over `items` keeping non-members. O(n + m) time, O(m) extra space.
fn absent_from<T>(items: &[T], reference: &[T]) -> Vec<T>
where
    T: Clone + Debug + Eq + Hash,
{
    let members: HashSet<&T> = reference.iter().collect();

    items
        .iter()
        .filter(|item| !members.contains(*item))
        .unique()
        .cloned()
        .collect()
}
