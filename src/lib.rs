//! # Simple Vector
//!
//! The `simple_vec` crate provides a `#[no_std]` growable array, `SimpleVec`, built on top of
//! a tiny exclusive owner of a heap block, `ArrayPtr`.
//!
//! `ArrayPtr` owns zero or one fixed-length block of initialized elements. It can't be cloned,
//! it can hand its block to the caller with `release`, and it can adopt a block again with
//! `from_raw`. `SimpleVec` never allocates on its own. Whenever it needs more room it builds a
//! new `ArrayPtr`, moves its elements over and swaps it in.
//!
//! Like `FlexArr` every operation that may allocate is fallible. Instead of aborting when memory
//! can't be obtained an error is returned and the vector is left exactly as it was.
//!
//! Capacity grows by doubling (with a floor of one), so `n` appends cause `O(log n)`
//! reallocations.
//!
//! ```
//! use simple_vec::SimpleVec;
//!
//! let mut vec = SimpleVec::try_from([1, 2, 3]).unwrap();
//! vec.insert(1, 99).unwrap();
//! assert_eq!(vec, [1, 99, 2, 3]);
//!
//! vec.erase(1);
//! assert_eq!(vec, [1, 2, 3]);
//! assert!(vec.at(5).is_err());
//! ```
//!
//! # Feature Flags
//! * `alloc_api2` - Route all allocations through `allocator_api2::alloc::Global` instead of
//! calling `alloc::alloc` directly. Both end up in the global allocator.

#![no_std]

extern crate alloc as rust_alloc;
#[cfg(test)]
extern crate std;

pub mod alloc;
mod simple_vec;
pub mod types;

pub use simple_vec::ArrayPtr;
pub use simple_vec::IntoIter;
pub use simple_vec::SimpleVec;
pub use types::reserve;
