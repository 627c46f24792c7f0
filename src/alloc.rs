//! Contains the allocation backend used by `ArrayPtr` and the `AllocError` type it reports.
//!
//! Every heap block is obtained from and returned to the global allocator through the
//! `Global` type in this module. There is no way to plug in another allocator.
//!
//! If built with the `alloc_api2` feature, `Global` forwards to `allocator_api2::alloc::Global`,
//! otherwise it calls `alloc::alloc::alloc` and `alloc::alloc::dealloc` directly.

#[cfg(feature = "alloc_api2")]
mod alloc_api2;
#[cfg(not(feature = "alloc_api2"))]
mod global;

#[cfg(feature = "alloc_api2")]
pub use alloc_api2::Global;
#[cfg(not(feature = "alloc_api2"))]
pub use global::Global;
pub use alloc_error::AllocError;

mod alloc_error {
    use core::error::Error;
    use core::fmt;

    /// This indicates the global allocator could not hand out a block.
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct AllocError;

    impl Error for AllocError {}

    impl fmt::Display for AllocError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("A memory allocation error occurred.")
        }
    }
}
