//! Group-by operator and its grouping view.
//!
//! Groups are discovered lazily, one per distinct key, in first-occurrence
//! order. Each emitted [`Grouping`] is an independent value owning its key;
//! its membership is a fresh filtering pass over a pristine clone of the
//! original source on every enumeration, never a cached partition. Total work
//! is therefore O(distinct-keys x source-length) when every group is fully
//! walked.
//!
//! The source must be cheaply re-enumerable: `Clone` yielding the same
//! elements. A side-effecting source or key function may show different
//! members between the discovery scan and a later walk of a group; that is
//! the contract, not a bug.

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

/// Lazy grouping engine produced by [`Query::group_by`](crate::Query::group_by).
pub struct GroupBy<I, F, K> {
    scan: I,
    original: I,
    key_fn: Rc<F>,
    seen: HashSet<K>,
}

impl<I: Clone, F, K> GroupBy<I, F, K> {
    pub(crate) fn new(source: I, key_fn: F) -> Self {
        Self {
            scan: source.clone(),
            original: source,
            key_fn: Rc::new(key_fn),
            seen: HashSet::new(),
        }
    }
}

impl<I, F, K> Iterator for GroupBy<I, F, K>
where
    I: Iterator + Clone,
    F: Fn(&I::Item) -> K,
    K: Eq + Hash + Clone,
{
    type Item = Grouping<I, F, K>;

    fn next(&mut self) -> Option<Self::Item> {
        // Advance the scan until an element with an unseen key turns up; the
        // grouping it announces captures the pristine source, not the scan.
        for item in self.scan.by_ref() {
            let key = (self.key_fn)(&item);
            if self.seen.insert(key.clone()) {
                return Some(Grouping {
                    key,
                    source: self.original.clone(),
                    key_fn: Rc::clone(&self.key_fn),
                });
            }
        }
        None
    }
}

/// One equivalence class under the key function: the key itself plus a live
/// view of every source element mapping to it.
///
/// Key *equality* decides membership, not identity. The view holds its own
/// clone of the original source, so collecting groupings eagerly and walking
/// them later is safe; no state is shared between groups beyond the key
/// function.
pub struct Grouping<I, F, K> {
    key: K,
    source: I,
    key_fn: Rc<F>,
}

impl<I, F, K> Grouping<I, F, K>
where
    I: Clone,
    K: Clone,
{
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Walk the members of this group.
    ///
    /// Each call re-scans the entire original source and keeps the elements
    /// whose key equals this group's key. Over an infinite source this never
    /// terminates once the last member has been passed.
    pub fn members(&self) -> GroupMembers<I, F, K> {
        GroupMembers {
            source: self.source.clone(),
            key_fn: Rc::clone(&self.key_fn),
            key: self.key.clone(),
        }
    }
}

impl<'a, I, F, K> IntoIterator for &'a Grouping<I, F, K>
where
    I: Iterator + Clone,
    F: Fn(&I::Item) -> K,
    K: Eq + Clone,
{
    type Item = I::Item;
    type IntoIter = GroupMembers<I, F, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.members()
    }
}

/// Lazy member pass produced by [`Grouping::members`].
pub struct GroupMembers<I, F, K> {
    source: I,
    key_fn: Rc<F>,
    key: K,
}

impl<I, F, K> Iterator for GroupMembers<I, F, K>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: Eq,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.source.next()?;
            if (self.key_fn)(&item) == self.key {
                return Some(item);
            }
        }
    }
}
