//! Delta computation
//!
//! Given the current listing of one folder and a read-only snapshot of the
//! seen set, produce the items that still need a notification, ordered by
//! creation time ascending. Pure function of its inputs; no side effects.
//!
//! Ordering matters because downstream delivery is sequential and should
//! notify in chronological discovery order rather than arbitrary listing
//! order. Items without a usable `created_at` sort after all well-formed
//! items so a single malformed timestamp never blocks forward progress.

use std::cmp::Ordering;

use super::item::RemoteItem;
use super::seen_set::SeenSet;

/// Computes the ordered delta for one folder listing
///
/// Keeps items whose id is absent from `seen`, sorted by `created_at`
/// ascending. The sort is stable, so items with equal timestamps (and
/// items with no timestamp at all) keep their original listing order.
pub fn compute_delta(items: Vec<RemoteItem>, seen: &SeenSet) -> Vec<RemoteItem> {
    let mut delta: Vec<RemoteItem> = items
        .into_iter()
        .filter(|item| !seen.contains(&item.id))
        .collect();

    delta.sort_by(|a, b| match (a.created_at, b.created_at) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    delta
}
