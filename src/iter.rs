use core::{
    fmt,
    iter::FusedIterator,
    mem::MaybeUninit,
    ops::Range,
    ptr, slice,
};

use crate::ArrayBuilder;

/// An owning iterator over the values held in inline `N`-slot storage.
///
/// This is the failure value of [`try_from_iter`](crate::try_from_iter()): it
/// yields the items that were pulled before the source ran out, in the order
/// they were pulled.
pub struct IntoIter<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    // slots in `alive` are initialised, every other slot is not
    alive: Range<usize>,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// # Safety
    ///
    /// `alive` must lie within `0..N` and cover only initialised slots of `buf`.
    pub(crate) unsafe fn new_unchecked(buf: [MaybeUninit<T>; N], alive: Range<usize>) -> Self {
        debug_assert!(alive.start <= alive.end && alive.end <= N);
        Self { buf, alive }
    }

    /// The values not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        let len = self.alive.end - self.alive.start;
        // SAFETY: every slot in `alive` is initialised
        unsafe { slice::from_raw_parts(self.buf.as_ptr().add(self.alive.start) as *const T, len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.alive.end - self.alive.start;
        // SAFETY: every slot in `alive` is initialised
        unsafe {
            slice::from_raw_parts_mut(self.buf.as_mut_ptr().add(self.alive.start) as *mut T, len)
        }
    }

    /// # Safety
    ///
    /// `idx` must have just been removed from `alive`.
    unsafe fn read(&self, idx: usize) -> T {
        ptr::read(self.buf.as_ptr().add(idx) as *const T)
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let idx = self.alive.next()?;
        // SAFETY: `idx` left the live range, so it is read exactly once
        unsafe { Some(self.read(idx)) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn count(self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        let idx = self.alive.next_back()?;
        // SAFETY: `idx` left the live range, so it is read exactly once
        unsafe { Some(self.read(idx)) }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    fn len(&self) -> usize {
        self.alive.end - self.alive.start
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let items: *mut [T] = self.as_mut_slice();
        self.alive = 0..0;
        // SAFETY: the live range was emptied first, so nothing is dropped twice
        unsafe { ptr::drop_in_place(items) }
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N> {
    fn clone(&self) -> Self {
        let mut builder = ArrayBuilder::<T, N>::new();
        for t in self.as_slice() {
            // SAFETY: at most `N` items are alive
            unsafe { builder.push_unchecked(t.clone()) }
        }
        builder.into_iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
