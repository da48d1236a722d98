//! SeenSet - the durable record of already-notified item identifiers
//!
//! The seen set is the heart of the at-most-once guarantee: an id present
//! in the set must never trigger another notification. The set grows
//! monotonically during normal operation — there is deliberately no
//! removal API on this type.
//!
//! A `BTreeSet` backs the set so that iteration is always in ascending
//! id order, which keeps the persisted form deterministic and
//! diff-friendly without an explicit sort at save time.

use std::collections::BTreeSet;

use super::newtypes::ItemId;

/// Set of item identifiers that have already been notified
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeenSet {
    ids: BTreeSet<ItemId>,
}

impl SeenSet {
    /// Creates an empty seen set (first run, or no history yet)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a seen set from previously persisted identifiers
    pub fn from_ids(ids: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Returns true if the id has already been notified
    pub fn contains(&self, id: &ItemId) -> bool {
        self.ids.contains(id)
    }

    /// Marks an id as notified
    ///
    /// Returns true if the id was newly inserted, false if it was
    /// already present. Marking is the only mutation this type supports.
    pub fn mark(&mut self, id: ItemId) -> bool {
        self.ids.insert(id)
    }

    /// Number of recorded identifiers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no identifiers are recorded
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates identifiers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.ids.iter()
    }

    /// Returns true if every id in `other` is also in `self`
    ///
    /// Used to assert the monotonic-growth property across a run.
    pub fn is_superset_of(&self, other: &SeenSet) -> bool {
        self.ids.is_superset(&other.ids)
    }
}

impl FromIterator<ItemId> for SeenSet {
    fn from_iter<T: IntoIterator<Item = ItemId>>(iter: T) -> Self {
        Self::from_ids(iter)
    }
}
