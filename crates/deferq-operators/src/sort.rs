//! Order-by operator: a comparator-driven, materialized view.
//!
//! Sorting is an adjacent-swap scheme: full passes over the buffer, swapping
//! strictly out-of-order neighbors, until a pass performs no swap. Equal keys
//! are never swapped, which is what makes the sort stable. Quadratic on
//! purpose; the contract here is ordering and stability, not speed.

use std::cmp::Ordering;

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Materialized, ordered view over a fully consumed source.
///
/// Retains the comparator chain that produced it so [`Ordered::then_by`] can
/// compose a true secondary ordering on top of the primary one.
pub struct Ordered<T> {
    items: Vec<T>,
    cmp: Comparator<T>,
}

impl<T> Ordered<T> {
    /// Drain `source` and sort it by `key_fn`, ascending unless `descending`.
    ///
    /// Ties (equal keys) keep their original relative order.
    pub(crate) fn by_key<I, F, K>(source: I, key_fn: F, descending: bool) -> Self
    where
        I: Iterator<Item = T>,
        F: Fn(&T) -> K + 'static,
        K: Ord,
    {
        let cmp = key_comparator(key_fn, descending);
        let mut items: Vec<T> = source.collect();
        sort_until_settled(&mut items, &cmp);
        Self { items, cmp }
    }

    /// Apply a secondary ordering on top of the existing one.
    ///
    /// Elements the current comparator chain considers equal are reordered by
    /// `key_fn`; everything the chain already distinguishes keeps its place.
    /// Remaining ties still keep their original relative order.
    pub fn then_by<F, K>(self, key_fn: F, descending: bool) -> Ordered<T>
    where
        T: 'static,
        F: Fn(&T) -> K + 'static,
        K: Ord,
    {
        let primary = self.cmp;
        let secondary = key_comparator(key_fn, descending);
        let cmp: Comparator<T> =
            Box::new(move |a, b| primary(a, b).then_with(|| secondary(a, b)));

        let mut items = self.items;
        sort_until_settled(&mut items, &cmp);
        Ordered { items, cmp }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Give up the view and keep the sorted elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> IntoIterator for Ordered<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ordered<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn key_comparator<T, F, K>(key_fn: F, descending: bool) -> Comparator<T>
where
    F: Fn(&T) -> K + 'static,
    K: Ord,
{
    Box::new(move |a, b| {
        let ord = key_fn(a).cmp(&key_fn(b));
        if descending {
            ord.reverse()
        } else {
            ord
        }
    })
}

/// Repeated adjacent-swap passes until none swaps. Only strictly
/// out-of-order pairs move, so equal keys never cross.
fn sort_until_settled<T>(items: &mut [T], cmp: &dyn Fn(&T, &T) -> Ordering) {
    let mut passes = 0u64;
    loop {
        passes += 1;
        let mut swapped = false;
        for i in 1..items.len() {
            if cmp(&items[i - 1], &items[i]) == Ordering::Greater {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    tracing::trace!(rows = items.len(), passes, "adjacent-swap sort settled");
}
