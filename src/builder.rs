use core::{
    fmt,
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{Deref, DerefMut},
    ptr, slice,
};

use crate::IntoIter;

/// Inline storage for up to `N` values that can be turned into a `[T; N]`
/// once every slot is filled.
///
/// ```
/// use array_try_from_iter::ArrayBuilder;
///
/// let mut builder = ArrayBuilder::<u8, 3>::new();
/// builder.push(1);
/// builder.push(2);
/// assert!(builder.try_push(3).is_ok());
/// assert_eq!(builder.try_push(4), Err(4));
/// assert_eq!(builder.build().ok(), Some([1, 2, 3]));
/// ```
pub struct ArrayBuilder<T, const N: usize> {
    buf: [MaybeUninit<T>; N],
    len: usize,
}

impl<T, const N: usize> Drop for ArrayBuilder<T, N> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T, const N: usize> Deref for ArrayBuilder<T, N> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for ArrayBuilder<T, N> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> Default for ArrayBuilder<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for ArrayBuilder<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone, const N: usize> Clone for ArrayBuilder<T, N> {
    fn clone(&self) -> Self {
        let mut new = Self::new();
        for t in self.iter() {
            // SAFETY: `new` never holds more items than `self`
            unsafe { new.push_unchecked(t.clone()) }
        }
        new
    }
}

impl<T, const N: usize> From<[T; N]> for ArrayBuilder<T, N> {
    fn from(array: [T; N]) -> Self {
        let array = ManuallyDrop::new(array);
        // SAFETY: `[T; N]` and `[MaybeUninit<T>; N]` share a layout, and the
        // source is never dropped so each value has exactly one owner
        let buf = unsafe { ptr::read(&*array as *const [T; N] as *const [MaybeUninit<T>; N]) };
        Self { buf, len: N }
    }
}

impl<T, const N: usize> IntoIterator for ArrayBuilder<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    /// Hands the filled prefix over to an owning iterator.
    fn into_iter(self) -> IntoIter<T, N> {
        let this = ManuallyDrop::new(self);
        // SAFETY: the first `len` slots are initialised and `this` is never
        // dropped, so ownership of them moves to the iterator
        unsafe {
            let buf = ptr::read(&this.buf);
            IntoIter::new_unchecked(buf, 0..this.len)
        }
    }
}

impl<T, const N: usize> ArrayBuilder<T, N> {
    const UNINIT: MaybeUninit<T> = MaybeUninit::uninit();

    pub fn new() -> Self {
        Self {
            buf: [Self::UNINIT; N],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        N
    }

    pub fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialised
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are initialised
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Drops every stored value.
    ///
    /// The length is reset before dropping, so a panicking destructor leaks
    /// the rest instead of dropping anything twice.
    pub fn clear(&mut self) {
        let len = mem::replace(&mut self.len, 0);
        unsafe {
            ptr::drop_in_place(slice::from_raw_parts_mut(self.as_mut_ptr(), len));
        }
    }

    fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as _
    }

    fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as _
    }

    /// # Panics
    ///
    /// Panics if the builder is already full.
    pub fn push(&mut self, t: T) {
        assert!(self.len < N, "ArrayBuilder is full");
        unsafe { self.push_unchecked(t); }
    }

    pub fn try_push(&mut self, t: T) -> Result<(), T> {
        if self.len < N {
            unsafe { self.push_unchecked(t); }
            Ok(())
        } else {
            Err(t)
        }
    }

    /// # Safety
    ///
    /// The builder must not be full.
    pub unsafe fn push_unchecked(&mut self, t: T) {
        ptr::write(self.as_mut_ptr().add(self.len), t);
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.len > 0 {
            unsafe { Some(self.pop_unchecked()) }
        } else {
            None
        }
    }

    /// # Safety
    ///
    /// The builder must not be empty.
    pub unsafe fn pop_unchecked(&mut self) -> T {
        self.len -= 1;
        ptr::read(self.as_ptr().add(self.len))
    }

    /// Pulls items from `iter` until the builder is full or `iter` runs out.
    ///
    /// Returns `true` if the builder is full afterwards. No item is pulled
    /// once the builder is full, so a full builder (or `N == 0`) never
    /// touches `iter`.
    pub fn fill_from<I>(&mut self, iter: &mut I) -> bool
    where
        I: Iterator<Item = T> + ?Sized,
    {
        while self.len < N {
            match iter.next() {
                // SAFETY: checked by the loop condition
                Some(t) => unsafe { self.push_unchecked(t) },
                None => return false,
            }
        }
        true
    }

    pub fn build(self) -> Result<[T; N], Self> {
        if self.len == N {
            unsafe { Ok(self.build_unchecked()) }
        } else {
            Err(self)
        }
    }

    /// # Safety
    ///
    /// The builder must be full.
    pub unsafe fn build_unchecked(self) -> [T; N] {
        let self_ = ManuallyDrop::new(self);
        ptr::read(self_.as_ptr() as *const [T; N])
    }

    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }
}
