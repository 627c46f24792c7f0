use core::alloc::Layout;
use core::ptr::NonNull;

use super::AllocError;
use crate::rust_alloc::alloc;

/// This is basically a wrapper around the global allocator functions.
///
/// Blocks handed out by it are compatible with `Box<[T]>`, so a block can move
/// between the two as long as the layout matches.
#[derive(Debug, Copy, Clone, Default)]
pub struct Global;

impl Global {
    /// Allocates a chunk of memory with the given layout.
    ///
    /// `alloc::alloc()` requires that the layout size be non-zero so zero sized
    /// requests are rejected here instead of being undefined behavior.
    pub fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Err(AllocError);
        }
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(AllocError);
        };
        return Ok(ptr);
    }

    /// Deallocates the chunk of memory pointed at by `ptr`.
    ///
    /// # Safety
    /// `ptr` must have come from the global allocator with exactly `layout`,
    /// and must not be used afterwards.
    pub unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { alloc::dealloc(ptr.as_ptr(), layout) };
    }
}
