//! Filter operator: lazy predicate selection.

/// Lazy filtering adapter produced by
/// [`Query::filter_by`](crate::Query::filter_by).
///
/// Yields the source elements satisfying the predicate, in original relative
/// order. Each pull advances the source until a satisfying element is found
/// or the source is exhausted.
#[derive(Clone)]
pub struct FilterBy<I, P> {
    source: I,
    predicate: P,
}

impl<I, P> FilterBy<I, P> {
    pub(crate) fn new(source: I, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<I, P> Iterator for FilterBy<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let item = self.source.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Anywhere between nothing and everything survives the predicate.
        (0, self.source.size_hint().1)
    }
}
