use crate::{ArrayBuilder, ArrayIterator, IntoIter};

/// Collects exactly `N` items from `iter` into an array.
///
/// At most `N` items are pulled. If `iter` runs out first, the items it did
/// produce are returned, in order, as an [`IntoIter`] whose length is
/// strictly less than `N`. Anything left in `iter` after the `N`th item is
/// dropped along with it; use [`IteratorExt::next_array`] to keep it.
///
/// ```
/// use array_try_from_iter::try_from_iter;
///
/// assert_eq!(try_from_iter(1..=5).ok(), Some([1, 2, 3]));
///
/// let rest = try_from_iter::<_, 5>(vec![1, 2, 3]).unwrap_err();
/// assert_eq!(rest.collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn try_from_iter<I, const N: usize>(iter: I) -> Result<[I::Item; N], IntoIter<I::Item, N>>
where
    I: IntoIterator,
{
    iter.into_iter().next_array()
}

/// Array collection methods, available on every [`Iterator`].
pub trait IteratorExt: Iterator {
    /// Pulls the next `N` items into an array.
    ///
    /// Unlike [`try_from_iter`], the iterator is only borrowed, so whatever
    /// follows the `N`th item can still be read from it afterwards.
    ///
    /// ```
    /// use array_try_from_iter::IteratorExt;
    ///
    /// let mut iter = "a b c d e".split(' ');
    /// assert_eq!(iter.next_array().ok(), Some(["a", "b"]));
    /// assert_eq!(iter.next(), Some("c"));
    ///
    /// let rest = iter.next_array::<3>().unwrap_err();
    /// assert_eq!(rest.as_slice(), ["d", "e"]);
    /// ```
    fn next_array<const N: usize>(&mut self) -> Result<[Self::Item; N], IntoIter<Self::Item, N>> {
        let mut builder = ArrayBuilder::new();
        if builder.fill_from(self) {
            // SAFETY: `fill_from` reported the builder full
            Ok(unsafe { builder.build_unchecked() })
        } else {
            Err(builder.into_iter())
        }
    }

    /// Consumes the iterator, see [`try_from_iter`].
    fn try_collect_array<const N: usize>(self) -> Result<[Self::Item; N], IntoIter<Self::Item, N>>
    where
        Self: Sized,
    {
        try_from_iter(self)
    }

    /// Groups the iterator into consecutive `[Self::Item; N]` chunks.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0.
    fn arrays<const N: usize>(self) -> ArrayIterator<Self, N>
    where
        Self: Sized,
    {
        ArrayIterator::new(self)
    }
}

impl<I: Iterator + ?Sized> IteratorExt for I {}
