/// Carries a requested capacity to pick the reserving constructor.
///
/// ```
/// use simple_vec::SimpleVec;
/// use simple_vec::reserve;
///
/// let vec = SimpleVec::<u32>::with_reserve(reserve(8)).unwrap();
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 8);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    pub const fn new(capacity: usize) -> Self {
        return Self { capacity: capacity };
    }

    pub const fn capacity(self) -> usize {
        return self.capacity;
    }
}

/// Shorthand for `ReserveProxy::new(capacity)`.
#[inline]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    return ReserveProxy::new(capacity);
}
