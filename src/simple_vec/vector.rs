use core::cmp;
use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;
use core::mem;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;
use core::slice;
use core::slice::SliceIndex;

use super::array_ptr::ArrayPtr;
use crate::types::ErrorReason;
use crate::types::ReserveProxy;
use crate::types::SimpleVecErr;
use crate::types::SimpleVecResult;

/// A growable array that keeps its elements in a single `ArrayPtr` block.
///
/// The block always holds `capacity()` initialized slots. Only the first `len()`
/// of them are part of the vector, the rest are spare room. Growing never
/// touches the block in place, a bigger `ArrayPtr` is filled and swapped in.
pub struct SimpleVec<T> {
    items: ArrayPtr<T>,
    len:   usize,
}

impl<T> SimpleVec<T> {
    /// Creates an empty vector. This does not allocate.
    pub const fn new() -> Self {
        return Self {
            items: ArrayPtr::new(),
            len:   0,
        };
    }

    /// Creates an empty vector with room for `request.capacity()` elements.
    pub fn with_reserve(request: ReserveProxy) -> SimpleVecResult<Self>
    where
        T: Default,
    {
        let mut ret = Self::new();
        ret.reserve(request.capacity())?;
        return Ok(ret);
    }

    /// Creates a vector holding `len` default values. The capacity equals `len`.
    pub fn with_len(len: usize) -> SimpleVecResult<Self>
    where
        T: Default,
    {
        return Ok(Self {
            items: ArrayPtr::with_len(len)?,
            len:   len,
        });
    }

    /// Creates a vector holding `len` clones of `value`. The capacity equals `len`.
    pub fn from_elem(len: usize, value: &T) -> SimpleVecResult<Self>
    where
        T: Clone,
    {
        return Ok(Self {
            items: ArrayPtr::from_fn(len, |_| value.clone())?,
            len:   len,
        });
    }

    /// Creates a vector holding clones of every element of `items`.
    pub fn try_from_slice(items: &[T]) -> SimpleVecResult<Self>
    where
        T: Clone,
    {
        return Ok(Self {
            items: ArrayPtr::from_fn(items.len(), |i| items[i].clone())?,
            len:   items.len(),
        });
    }

    /// Makes a deep copy. The copy's capacity is the length of `self`.
    pub fn try_clone(&self) -> SimpleVecResult<Self>
    where
        T: Clone,
    {
        return Self::try_from_slice(self.as_slice());
    }

    /// Replaces the contents of `self` with clones of `source`.
    ///
    /// The current block is reused when it is big enough, otherwise a block
    /// exactly the length of `source` is allocated. On error `self` is unchanged.
    pub fn try_clone_from(&mut self, source: &Self) -> SimpleVecResult<()>
    where
        T: Clone,
    {
        let len = source.len;
        if len > self.capacity() {
            *self = source.try_clone()?;
            return Ok(());
        }
        let dst = &mut self.items.as_mut_slice()[..len];
        for (dst, src) in dst.iter_mut().zip(source.as_slice()) {
            dst.clone_from(src);
        }
        self.len = len;
        return Ok(());
    }

    /// Moves the contents out, leaving `self` empty with no capacity.
    #[inline]
    pub fn take(&mut self) -> Self {
        return mem::take(self);
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        return self.items.len();
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Checked access, fails with `ErrorReason::OutOfRange` when `index >= len()`.
    pub fn at(&self, index: usize) -> SimpleVecResult<&T> {
        if index >= self.len {
            return Err(SimpleVecErr::new(ErrorReason::OutOfRange));
        }
        return Ok(&self.items[index]);
    }

    /// Mutable form of [`SimpleVec::at`].
    pub fn at_mut(&mut self, index: usize) -> SimpleVecResult<&mut T> {
        if index >= self.len {
            return Err(SimpleVecErr::new(ErrorReason::OutOfRange));
        }
        return Ok(&mut self.items[index]);
    }

    /// Drops every element from the vector's view. The block and the values in
    /// it are left alone, so the capacity stays the same.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Ensures the capacity is at least `capacity`.
    ///
    /// Does nothing if it already is, otherwise the block is replaced by one of
    /// exactly `capacity` slots. Length and elements are not changed.
    pub fn reserve(&mut self, capacity: usize) -> SimpleVecResult<()>
    where
        T: Default,
    {
        if capacity <= self.capacity() {
            return Ok(());
        }
        return self.regrow(capacity);
    }

    /// Changes the length to `new_len`.
    ///
    /// Shrinking resets the slots that fall out of the vector to default values.
    /// Growing fills the new slots with default values. If the capacity is too
    /// small it becomes the larger of `new_len` and twice the old capacity.
    pub fn resize(&mut self, new_len: usize) -> SimpleVecResult<()>
    where
        T: Default,
    {
        let len = self.len;
        if new_len == len {
            return Ok(());
        }

        if new_len < len {
            self.items.as_mut_slice()[new_len..len].fill_with(T::default);
        } else if new_len > self.capacity() {
            // Slots past the old length come out of `regrow` already defaulted.
            self.regrow(self.resize_capacity(new_len))?;
        } else {
            self.items.as_mut_slice()[len..new_len].fill_with(T::default);
        }

        self.len = new_len;
        return Ok(());
    }

    /// Appends `item`, doubling the capacity first if the vector is full.
    ///
    /// On error the vector is unchanged and `item` is dropped.
    pub fn push_back(&mut self, item: T) -> SimpleVecResult<()>
    where
        T: Default,
    {
        if self.len == self.capacity() {
            self.grow_one()?;
        }
        self.items[self.len] = item;
        self.len += 1;
        return Ok(());
    }

    /// Inserts `item` at `index`, shifting everything after it one slot toward the end.
    /// Returns the index of the inserted element.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, item: T) -> SimpleVecResult<usize>
    where
        T: Default,
    {
        let len = self.len;
        assert!(index <= len, "insertion index (is {index}) should be <= len (is {len})");

        if len == self.capacity() {
            self.grow_one()?;
        }
        let items = self.items.as_mut_slice();
        items[len] = item;
        items[index..=len].rotate_right(1);
        self.len += 1;
        return Ok(index);
    }

    /// Removes the last element and returns it, or `None` if the vector is empty.
    /// The vacated slot is reset to a default value.
    pub fn pop_back(&mut self) -> Option<T>
    where
        T: Default,
    {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        return Some(mem::take(&mut self.items[self.len]));
    }

    /// Removes the element at `index`, shifting everything after it one slot toward
    /// the front. Returns `index`, which now refers to the element that followed the
    /// removed one (or the end).
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize
    where
        T: Default,
    {
        let len = self.len;
        assert!(index < len, "removal index (is {index}) should be < len (is {len})");

        let items = self.items.as_mut_slice();
        items[index..len].rotate_left(1);
        items[len - 1] = T::default();
        self.len -= 1;
        return index;
    }

    /// Exchanges the contents of two vectors without allocating.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.items.swap(&mut other.items);
        mem::swap(&mut self.len, &mut other.len);
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        let items = self.items.as_slice();
        return unsafe { slice::from_raw_parts(items.as_ptr(), self.len) };
    }

    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        let items = self.items.as_mut_slice();
        return unsafe { slice::from_raw_parts_mut(items.as_mut_ptr(), len) };
    }

    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.items.as_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        return self.items.as_mut_ptr();
    }

    fn doubled_capacity(&self) -> SimpleVecResult<usize> {
        let Some(cap) = self.capacity().checked_mul(2) else {
            return Err(SimpleVecErr::new(ErrorReason::CapacityOverflow));
        };
        return Ok(cap);
    }

    /// Capacity picked when `resize` outgrows the block. Doubling saturates,
    /// `new_len` alone decides whether the request can be met.
    pub(super) fn resize_capacity(&self, new_len: usize) -> usize {
        return cmp::max(new_len, self.capacity().saturating_mul(2));
    }

    fn grow_one(&mut self) -> SimpleVecResult<()>
    where
        T: Default,
    {
        let cap = cmp::max(1, self.doubled_capacity()?);
        return self.regrow(cap);
    }

    /// Moves the live elements into a new block of `capacity` slots and swaps it in.
    /// The allocation happens before anything is moved, so a failure leaves `self` as is.
    fn regrow(&mut self, capacity: usize) -> SimpleVecResult<()>
    where
        T: Default,
    {
        debug_assert!(capacity >= self.len);
        let len = self.len;
        let old = self.items.as_mut_slice();
        let mut fresh = ArrayPtr::from_fn(capacity, |i| {
            if i < len {
                return mem::take(&mut old[i]);
            }
            return T::default();
        })?;

        log::trace!("simple_vec: capacity {} -> {capacity}, moved {len}", self.items.len());
        self.items.swap(&mut fresh);
        return Ok(());
    }
}

impl<T> Default for SimpleVec<T> {
    #[inline]
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Clone> Clone for SimpleVec<T> {
    /// # Panics
    /// Panics if the copy can't be allocated. Use [`SimpleVec::try_clone`] to
    /// handle that case.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => return copy,
            Err(err) => panic!("failed to clone SimpleVec: {err}"),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if let Err(err) = self.try_clone_from(source) {
            panic!("failed to clone SimpleVec: {err}");
        }
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        return self.as_slice();
    }
}

impl<T> DerefMut for SimpleVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        return self.as_mut_slice();
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVec<T> {
    type Output = I::Output;

    /// Bounded by `len()`, not `capacity()`. Panics past the end.
    #[inline]
    fn index(&self, index: I) -> &I::Output {
        return Index::index(self.as_slice(), index);
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        return IndexMut::index_mut(self.as_mut_slice(), index);
    }
}

impl<T> From<ArrayPtr<T>> for SimpleVec<T> {
    /// Adopts a whole block. Every slot becomes an element, so the vector starts full.
    #[inline]
    fn from(items: ArrayPtr<T>) -> Self {
        let len = items.len();
        return Self {
            items: items,
            len:   len,
        };
    }
}

impl<T: Default, const N: usize> TryFrom<[T; N]> for SimpleVec<T> {
    type Error = SimpleVecErr;

    fn try_from(mut items: [T; N]) -> SimpleVecResult<Self> {
        return Ok(Self {
            items: ArrayPtr::from_fn(N, |i| mem::take(&mut items[i]))?,
            len:   N,
        });
    }
}

impl<T: Clone> TryFrom<&[T]> for SimpleVec<T> {
    type Error = SimpleVecErr;

    #[inline]
    fn try_from(items: &[T]) -> SimpleVecResult<Self> {
        return Self::try_from_slice(items);
    }
}

impl<T: Default> TryFrom<ReserveProxy> for SimpleVec<T> {
    type Error = SimpleVecErr;

    #[inline]
    fn try_from(request: ReserveProxy) -> SimpleVecResult<Self> {
        return Self::with_reserve(request);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}

impl<T: PartialEq> PartialEq for SimpleVec<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: Eq> Eq for SimpleVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for SimpleVec<T> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        return self.as_slice() == other;
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for SimpleVec<T> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        return self.as_slice() == other.as_slice();
    }
}

impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        return self.as_slice().partial_cmp(other.as_slice());
    }
}

impl<T: Ord> Ord for SimpleVec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        return self.as_slice().cmp(other.as_slice());
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        return self.as_slice().iter();
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        return self.as_mut_slice().iter_mut();
    }
}
