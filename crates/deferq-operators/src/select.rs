//! Select operator: lazy per-element transformation.

/// Lazy mapping adapter produced by [`Query::select`](crate::Query::select).
///
/// Pulling the n-th output pulls the n-th source element and applies the
/// selector at that moment; nothing is computed ahead of time and nothing is
/// cached. Cloning the adapter restarts enumeration, re-pulling the source
/// and re-invoking the selector for every element.
#[derive(Clone)]
pub struct Select<I, F> {
    source: I,
    selector: F,
}

impl<I, F> Select<I, F> {
    pub(crate) fn new(source: I, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<I, R, F> Iterator for Select<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.source.next().map(&mut self.selector)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // One output per source element, exactly.
        self.source.size_hint()
    }
}
