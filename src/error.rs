//! Error types for buffer and heap operations

use std::fmt;

/// Error type for [`DynamicBuffer`](crate::buffer::DynamicBuffer) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The index was outside the range valid for the operation
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Logical length of the buffer at the time of the call
        len: usize,
    },
    /// The allocator could not provide the requested number of slots
    AllocationFailed {
        /// Capacity that was requested
        requested: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for buffer of length {len}")
            }
            BufferError::AllocationFailed { requested } => {
                write!(f, "failed to allocate storage for {requested} elements")
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The backing buffer rejected the operation; the heap is unchanged
    Storage(BufferError),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Storage(err) => write!(f, "heap storage error: {err}"),
        }
    }
}

impl std::error::Error for HeapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeapError::Storage(err) => Some(err),
        }
    }
}

impl From<BufferError> for HeapError {
    fn from(err: BufferError) -> Self {
        HeapError::Storage(err)
    }
}
