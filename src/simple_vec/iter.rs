use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use super::vector::SimpleVec;

/// An iterator that moves the elements out of a `SimpleVec`.
///
/// Each element is taken out of its slot, leaving a default value behind.
/// The block itself is freed once the iterator is dropped.
pub struct IntoIter<T> {
    vec:   SimpleVec<T>,
    front: usize,
    back:  usize,
}

impl<T> IntoIter<T> {
    /// The elements that have not been yielded yet.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        return &self.vec.as_slice()[self.front..self.back];
    }
}

impl<T: Default> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        let item = mem::take(&mut self.vec[self.front]);
        self.front += 1;
        return Some(item);
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.back - self.front;
        return (left, Some(left));
    }
}

impl<T: Default> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        return Some(mem::take(&mut self.vec[self.back]));
    }
}

impl<T: Default> ExactSizeIterator for IntoIter<T> {}

impl<T: Default> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_tuple("IntoIter").field(&self.as_slice()).finish();
    }
}

impl<T: Default> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        let back = self.len();
        return IntoIter {
            vec:   self,
            front: 0,
            back:  back,
        };
    }
}
