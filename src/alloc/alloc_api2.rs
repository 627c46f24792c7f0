use core::alloc::Layout;
use core::ptr::NonNull;

use allocator_api2::alloc::Allocator;
use allocator_api2::alloc::Global as Api2Global;

use super::AllocError;

/// Wrapper that forwards to `allocator_api2`'s `Global` allocator.
///
/// It exposes the same two functions as the plain wrapper so `ArrayPtr`
/// does not care which one was compiled in.
#[derive(Debug, Copy, Clone, Default)]
pub struct Global;

impl Global {
    /// Allocates a chunk of memory with the given layout. Zero sized layouts are rejected.
    #[inline]
    pub fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if layout.size() == 0 {
            return Err(AllocError);
        }
        let Ok(mem) = Api2Global.allocate(layout) else {
            return Err(AllocError);
        };
        return Ok(mem.cast());
    }

    /// Deallocates the chunk of memory pointed at by `ptr`.
    ///
    /// # Safety
    /// `ptr` must have come from the global allocator with exactly `layout`,
    /// and must not be used afterwards.
    #[inline]
    pub unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        unsafe { Api2Global.deallocate(ptr, layout) };
    }
}
