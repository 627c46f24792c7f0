use core::error::Error;
use core::fmt;

/// This enum lets one figure out what kind of error occurred during
/// a `SimpleVec` or `ArrayPtr` operation.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorReason {
    /// Doubling the capacity overflowed `usize`.
    CapacityOverflow = 1,
    /// The size of the requested block in bytes overflowed `usize`.
    UsizeOverflow,
    /// The requested block can't be described by a `Layout`.
    LayoutFailure,
    /// The global allocator could not provide the block.
    AllocFailure,
    /// A checked access was made at or past the length.
    OutOfRange,
}

/// A type alias for `Result<T, SimpleVecErr>`
pub type SimpleVecResult<T> = Result<T, SimpleVecErr>;

/// This is used to indicate an error during a `SimpleVec` operation.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SimpleVecErr(ErrorReason);

impl SimpleVecErr {
    pub(crate) const fn new(reason: ErrorReason) -> Self {
        return Self(reason);
    }
    pub const fn reason(self) -> ErrorReason {
        return self.0;
    }
}

impl Error for SimpleVecErr {}

impl fmt::Display for SimpleVecErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            ErrorReason::CapacityOverflow => f.write_str("Capacity overflowed."),
            ErrorReason::UsizeOverflow => f.write_str("usize overflowed."),
            ErrorReason::LayoutFailure => f.write_str("Failed to create layout."),
            ErrorReason::AllocFailure => f.write_str("An allocation failure occurred."),
            ErrorReason::OutOfRange => f.write_str("Index out of range."),
        }
    }
}
