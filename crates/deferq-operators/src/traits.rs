//! The `Query` extension trait: the chaining surface for every operator.
//!
//! Blanket-implemented for all iterators, so a chain reads left to right
//! from any source. `select`, `filter_by`, and `group_by`
//! are lazy and build an adapter without pulling anything; `order_by`,
//! `to_list`, and `to_dictionary` drain the source before returning, so the
//! source must be finite.
//!
//! Failures raised by caller-supplied closures propagate unchanged through
//! every wrapping operator to the point of consumption; no operator catches,
//! logs, or retries.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use deferq_core::Result;

use crate::collect;
use crate::filter::FilterBy;
use crate::group::GroupBy;
use crate::select::Select;
use crate::sort::Ordered;

pub trait Query: Iterator {
    /// Lazily transform each element with `selector`.
    fn select<R, F>(self, selector: F) -> Select<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        Select::new(self, selector)
    }

    /// Lazily keep only the elements satisfying `predicate`, in order.
    fn filter_by<P>(self, predicate: P) -> FilterBy<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        FilterBy::new(self, predicate)
    }

    /// Lazily partition into one [`Grouping`](crate::Grouping) per distinct
    /// key, in first-occurrence order.
    ///
    /// `Clone` on the source is the re-enumeration requirement: every group's
    /// membership is a fresh pass over a pristine clone of this iterator.
    fn group_by<K, F>(self, key_fn: F) -> GroupBy<Self, F, K>
    where
        Self: Sized + Clone,
        F: Fn(&Self::Item) -> K,
        K: Eq + Hash + Clone,
    {
        GroupBy::new(self, key_fn)
    }

    /// Drain the source and sort it by `key_fn`, ascending unless
    /// `descending`. Equal keys keep their original relative order.
    fn order_by<K, F>(self, key_fn: F, descending: bool) -> Ordered<Self::Item>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K + 'static,
        K: Ord,
    {
        Ordered::by_key(self, key_fn, descending)
    }

    /// Drain the source into a `Vec`, preserving pull order.
    fn to_list(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        collect::to_list(self)
    }

    /// Drain the source into a unique-key map; see
    /// [`collect::to_dictionary`] for the failure contract.
    fn to_dictionary<K, F>(self, key_fn: F) -> Result<HashMap<K, Self::Item>>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K,
        K: Eq + Hash + Debug,
    {
        collect::to_dictionary(self, key_fn)
    }
}

impl<I: Iterator> Query for I {}
