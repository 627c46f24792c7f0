use core::alloc::Layout;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::Index;
use core::ops::IndexMut;
use core::ptr;
use core::ptr::NonNull;
use core::slice;

use crate::alloc::Global;
use crate::rust_alloc::boxed::Box;
use crate::types::ErrorReason;
use crate::types::SimpleVecErr;
use crate::types::SimpleVecResult;

const fn layout_array(layout: Layout, length: usize) -> SimpleVecResult<Layout> {
    let lay = layout.pad_to_align();
    let Some(len) = length.checked_mul(lay.size()) else {
        return Err(SimpleVecErr::new(ErrorReason::UsizeOverflow));
    };
    let Ok(lay) = Layout::from_size_align(len, layout.align()) else {
        return Err(SimpleVecErr::new(ErrorReason::LayoutFailure));
    };
    return Ok(lay);
}

/// Drops the written prefix of a block and frees it if a generator
/// panics part way through filling it.
struct FillGuard<T> {
    ptr:    NonNull<T>,
    init:   usize,
    layout: Layout,
}

impl<T> Drop for FillGuard<T> {
    fn drop(&mut self) {
        let written = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.init);
        unsafe { ptr::drop_in_place(written) };
        if self.layout.size() != 0 {
            unsafe { Global.deallocate(self.ptr.cast(), self.layout) };
        }
    }
}

/// The exclusive owner of a single fixed length heap block.
///
/// Every slot of an owned block holds an initialized `T`. The block is
/// dropped and freed exactly once when the owner goes away, unless it was
/// handed off with [`ArrayPtr::release`].
///
/// `ArrayPtr` is not `Clone`. Copies of the elements are made by `SimpleVec`,
/// which allocates a new owner for them.
pub struct ArrayPtr<T> {
    ptr: Option<NonNull<T>>,
    len: usize,
    _ph: PhantomData<T>,
}

unsafe impl<T: Send> Send for ArrayPtr<T> {}
unsafe impl<T: Sync> Sync for ArrayPtr<T> {}

impl<T> ArrayPtr<T> {
    const LAYOUT: Layout = Layout::new::<T>();

    /// Creates an owner with no block. This does not allocate.
    pub const fn new() -> Self {
        return Self {
            ptr: None,
            len: 0,
            _ph: PhantomData,
        };
    }

    /// Allocates a block of `len` elements, each produced by calling `f`
    /// with the slot index.
    ///
    /// A `len` of zero allocates nothing and returns an empty owner. If `f`
    /// panics, the elements written so far are dropped and the block is
    /// freed before unwinding continues.
    pub fn from_fn<F>(len: usize, mut f: F) -> SimpleVecResult<Self>
    where
        F: FnMut(usize) -> T,
    {
        if len == 0 {
            return Ok(Self::new());
        }
        let layout = layout_array(Self::LAYOUT, len)?;

        // Zero sized types never touch the allocator.
        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            let Ok(block) = Global.allocate(layout) else {
                return Err(SimpleVecErr::new(ErrorReason::AllocFailure));
            };
            block.cast::<T>()
        };

        let mut guard = FillGuard {
            ptr:    ptr,
            init:   0,
            layout: layout,
        };
        while guard.init < len {
            let item = f(guard.init);
            unsafe { ptr.add(guard.init).write(item) };
            guard.init += 1;
        }
        mem::forget(guard);

        log::trace!("array_ptr: allocated {len} slots ({} bytes)", layout.size());
        return Ok(Self {
            ptr: Some(ptr),
            len: len,
            _ph: PhantomData,
        });
    }

    /// Allocates a block of `len` default values.
    #[inline]
    pub fn with_len(len: usize) -> SimpleVecResult<Self>
    where
        T: Default,
    {
        return Self::from_fn(len, |_| T::default());
    }

    /// Takes ownership of a block allocated elsewhere. No allocation happens.
    ///
    /// # Safety
    /// `raw` must point at `raw.len()` initialized elements that were allocated by the global
    /// allocator with the layout of `[T; raw.len()]`, for example a block returned from
    /// [`ArrayPtr::release`] or `Box::<[T]>::into_raw`. Nothing else may own the block.
    pub unsafe fn from_raw(raw: NonNull<[T]>) -> Self {
        let len = raw.len();
        log::trace!("array_ptr: adopted block of {len} slots");
        return Self {
            ptr: Some(raw.cast::<T>()),
            len: len,
            _ph: PhantomData,
        };
    }

    /// Gives up ownership of the block and returns it, leaving this owner empty.
    ///
    /// The caller becomes responsible for dropping the elements and freeing the
    /// memory, typically by passing it back to [`ArrayPtr::from_raw`].
    #[must_use = "the released block leaks unless it is adopted again"]
    pub fn release(&mut self) -> Option<NonNull<[T]>> {
        let ptr = self.ptr.take()?;
        let len = mem::replace(&mut self.len, 0);
        log::trace!("array_ptr: released block of {len} slots");
        return Some(NonNull::slice_from_raw_parts(ptr, len));
    }

    /// Moves the block out, leaving this owner empty.
    #[inline]
    pub fn take(&mut self) -> Self {
        return mem::take(self);
    }

    /// Exchanges the blocks of two owners. Never allocates.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns `true` if a block is currently owned.
    #[inline]
    pub const fn is_allocated(&self) -> bool {
        return self.ptr.is_some();
    }

    /// Number of slots in the owned block.
    #[inline]
    pub const fn len(&self) -> usize {
        return self.len;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Pointer to the first slot, dangling when nothing is owned.
    /// Ownership is not transferred.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        return self.as_mut_ptr();
    }

    #[inline]
    pub const fn as_mut_ptr(&self) -> *mut T {
        return match self.ptr {
            Some(ptr) => ptr.as_ptr(),
            None => NonNull::dangling().as_ptr(),
        };
    }

    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        return unsafe { slice::from_raw_parts(self.as_ptr(), self.len) };
    }

    #[inline]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        return unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) };
    }

    /// # Safety
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        return unsafe { &*self.as_ptr().add(index) };
    }

    /// # Safety
    /// `index` must be less than `self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        return unsafe { &mut *self.as_mut_ptr().add(index) };
    }
}

impl<T> Drop for ArrayPtr<T> {
    fn drop(&mut self) {
        let Some(ptr) = self.ptr else {
            return;
        };
        let items = ptr::slice_from_raw_parts_mut(ptr.as_ptr(), self.len);
        unsafe { ptr::drop_in_place(items) };

        // Can't fail, the same layout was computed when the block was made.
        let Ok(layout) = layout_array(Self::LAYOUT, self.len) else {
            return;
        };
        if layout.size() != 0 {
            unsafe { Global.deallocate(ptr.cast(), layout) };
        }
    }
}

impl<T> Default for ArrayPtr<T> {
    #[inline]
    fn default() -> Self {
        return Self::new();
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(items: Box<[T]>) -> Self {
        let raw = NonNull::from(Box::leak(items));
        return unsafe { Self::from_raw(raw) };
    }
}

impl<T> Index<usize> for ArrayPtr<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        return &self.as_slice()[index];
    }
}

impl<T> IndexMut<usize> for ArrayPtr<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        return &mut self.as_mut_slice()[index];
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_list().entries(self.as_slice()).finish();
    }
}
