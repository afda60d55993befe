use core::{fmt, iter::FusedIterator};

use crate::{ArrayBuilder, IntoIter};

/// Yields `[I::Item; N]` chunks of an underlying iterator.
///
/// Created by [`IteratorExt::arrays`](crate::IteratorExt::arrays). When the
/// underlying iterator runs out part-way through a chunk, iteration ends and
/// the leftover items stay available through [`remaining`](Self::remaining)
/// and [`into_remainder`](Self::into_remainder).
pub struct ArrayIterator<I: Iterator, const N: usize> {
    builder: ArrayBuilder<I::Item, N>,
    iter: I,
}

impl<I: Iterator, const N: usize> Iterator for ArrayIterator<I, N> {
    type Item = [I::Item; N];

    fn next(&mut self) -> Option<Self::Item> {
        // a partial chunk from an earlier call is kept and topped up
        if self.builder.fill_from(&mut self.iter) {
            // SAFETY: `fill_from` reported the builder full
            Some(unsafe { self.builder.take().build_unchecked() })
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.builder.len();
        let (lo, hi) = self.iter.size_hint();
        let lo = lo.saturating_add(buffered) / N;
        let hi = hi.and_then(|hi| hi.checked_add(buffered)).map(|hi| hi / N);
        (lo, hi)
    }
}

impl<I: FusedIterator, const N: usize> FusedIterator for ArrayIterator<I, N> {}

impl<I: Iterator, const N: usize> ArrayIterator<I, N> {
    /// # Panics
    ///
    /// Panics if `N` is 0.
    pub fn new(i: impl IntoIterator<IntoIter = I>) -> Self {
        assert!(N != 0, "chunk size must be non-zero");
        Self {
            builder: ArrayBuilder::new(),
            iter: i.into_iter(),
        }
    }

    /// Items buffered towards the next chunk.
    pub fn remaining(&self) -> &[I::Item] {
        &self.builder
    }

    /// Drops the underlying iterator and returns the buffered items.
    pub fn into_remainder(self) -> IntoIter<I::Item, N> {
        self.builder.into_iter()
    }
}

impl<I, const N: usize> fmt::Debug for ArrayIterator<I, N>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayIterator")
            .field("builder", &self.builder)
            .field("iter", &self.iter)
            .finish()
    }
}
