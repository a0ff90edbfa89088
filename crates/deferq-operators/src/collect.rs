//! Materializers: eager terminal collection into a list or a unique-key map.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use deferq_core::{Error, Result};

/// Pull every element of `source` into a `Vec`, preserving pull order.
///
/// Never returns on an infinite source; that is a caller error.
pub fn to_list<I: Iterator>(source: I) -> Vec<I::Item> {
    source.collect()
}

/// Pull every element of `source` into a map keyed by `key_fn`.
///
/// Fails with [`Error::DuplicateKey`] the moment an element's key collides
/// with a previously inserted one. All-or-nothing: nothing is skipped or
/// overwritten silently, and the partial map is dropped on failure.
pub fn to_dictionary<I, F, K>(source: I, key_fn: F) -> Result<HashMap<K, I::Item>>
where
    I: Iterator,
    F: Fn(&I::Item) -> K,
    K: Eq + Hash + Debug,
{
    let mut map = HashMap::new();
    for item in source {
        match map.entry(key_fn(&item)) {
            Entry::Occupied(occupied) => {
                return Err(Error::DuplicateKey(format!("{:?}", occupied.key())));
            }
            Entry::Vacant(vacant) => {
                vacant.insert(item);
            }
        }
    }
    tracing::trace!(entries = map.len(), "dictionary materialized");
    Ok(map)
}
