//! Growable contiguous storage
//!
//! [`DynamicBuffer`] is the unordered sequence that backs the heaps in this
//! crate. It owns a single contiguous block of slots and tracks two numbers:
//!
//! - `len`: live elements, stored in slots `[0, len)`
//! - `capacity`: allocated slots, always `>= len`
//!
//! Capacity is bookkept by the buffer itself rather than read back from the
//! allocator, so it reports exactly the value produced by the growth policy:
//! doubling when full, or [`DEFAULT_CAPACITY`] when growing from zero. The
//! buffer never shrinks on its own; [`DynamicBuffer::trim_to_len`] and
//! [`DynamicBuffer::resize`] are the only ways to release slots.
//!
//! Allocation failure is reported as [`BufferError::AllocationFailed`] and
//! leaves the buffer exactly as it was before the call.
//!
//! # Example
//!
//! ```rust
//! use array_heaps::buffer::DynamicBuffer;
//!
//! let mut buf = DynamicBuffer::with_capacity(2);
//! buf.insert_at(0, "b").unwrap();
//! buf.insert_at(0, "a").unwrap();
//! buf.insert_at(2, "c").unwrap(); // grows to 4 slots
//!
//! assert_eq!(buf.as_slice(), &["a", "b", "c"]);
//! assert_eq!(buf.capacity(), 4);
//! assert_eq!(buf.remove_at(1), Ok("b"));
//! assert_eq!(buf.get(1), Some(&"c"));
//! ```

use crate::error::BufferError;

/// Capacity used when a constructor is given `0`, and when growing an empty allocation
pub const DEFAULT_CAPACITY: usize = 10;

/// A contiguous, growable sequence with index-based insert and remove
#[derive(Debug)]
pub struct DynamicBuffer<T> {
    /// Live elements; the vector's own spare room is never consulted
    data: Vec<T>,
    /// Logical number of allocated slots
    capacity: usize,
}

impl<T> DynamicBuffer<T> {
    /// Creates an empty buffer with [`DEFAULT_CAPACITY`] slots
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty buffer with room for `capacity` elements
    ///
    /// A capacity of `0` is replaced by [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns the number of live elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of allocated slots
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if the buffer holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the live elements in stored order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a reference to the element at `index`, or `None` if `index >= len`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Overwrites the element at `index`
    ///
    /// # Errors
    /// Returns [`BufferError::IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        let len = self.len();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(BufferError::IndexOutOfBounds { index, len }),
        }
    }

    /// Inserts `value` at `index`, shifting `[index, len)` one slot to the right
    ///
    /// `index == len` appends. If the buffer is full it grows first; when that
    /// growth fails nothing is shifted and the buffer is unchanged.
    ///
    /// # Errors
    /// - [`BufferError::IndexOutOfBounds`] if `index > len`
    /// - [`BufferError::AllocationFailed`] if growth was needed and failed
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), BufferError> {
        let len = self.len();
        if index > len {
            return Err(BufferError::IndexOutOfBounds { index, len });
        }
        self.ensure_capacity()?;
        self.data.insert(index, value);
        Ok(())
    }

    /// Appends `value` after the last live element
    ///
    /// # Errors
    /// Returns [`BufferError::AllocationFailed`] if growth was needed and failed.
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        self.ensure_capacity()?;
        self.data.push(value);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting `[index + 1, len)` left
    ///
    /// # Errors
    /// Returns [`BufferError::IndexOutOfBounds`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, BufferError> {
        let len = self.len();
        if index >= len {
            return Err(BufferError::IndexOutOfBounds { index, len });
        }
        Ok(self.data.remove(index))
    }

    /// Exchanges the elements at `a` and `b`
    ///
    /// # Errors
    /// Returns [`BufferError::IndexOutOfBounds`] for the first index `>= len`;
    /// nothing is moved in that case.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<(), BufferError> {
        let len = self.len();
        if let Some(&index) = [a, b].iter().find(|&&i| i >= len) {
            return Err(BufferError::IndexOutOfBounds { index, len });
        }
        self.data.swap(a, b);
        Ok(())
    }

    /// Removes and returns the last element, or `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Changes the number of allocated slots to `new_capacity`
    ///
    /// Elements beyond `new_capacity` are dropped and `len` is clamped to the
    /// new capacity. Shrinking never fails.
    ///
    /// # Errors
    /// Returns [`BufferError::AllocationFailed`] if the allocator cannot
    /// provide the slots; the buffer is left unchanged.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), BufferError> {
        let old_capacity = self.capacity;
        let len = self.len();

        if new_capacity > len {
            self.data
                .try_reserve_exact(new_capacity - len)
                .map_err(|_| {
                    log::warn!(
                        "buffer allocation failed: {old_capacity} -> {new_capacity} slots"
                    );
                    BufferError::AllocationFailed {
                        requested: new_capacity,
                    }
                })?;
        } else {
            self.data.truncate(new_capacity);
        }
        self.data.shrink_to(new_capacity);
        self.capacity = new_capacity;

        log::trace!("buffer resized: {old_capacity} -> {new_capacity} slots (len {})", self.len());
        Ok(())
    }

    /// Shrinks the capacity to exactly the current length
    ///
    /// Equivalent to `resize(len)`; a no-op when already trimmed.
    ///
    /// # Errors
    /// Never fails in practice, since it only ever shrinks; the signature
    /// mirrors [`resize`](Self::resize).
    pub fn trim_to_len(&mut self) -> Result<(), BufferError> {
        if self.capacity == self.len() {
            return Ok(());
        }
        self.resize(self.len())
    }

    /// Guarantees room for one more element, growing by doubling if full
    pub(crate) fn ensure_capacity(&mut self) -> Result<(), BufferError> {
        if self.len() < self.capacity {
            return Ok(());
        }
        let grown = if self.capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            self.capacity.checked_mul(2).ok_or_else(|| {
                log::warn!("buffer cannot double past {} slots", self.capacity);
                BufferError::AllocationFailed {
                    requested: usize::MAX,
                }
            })?
        };
        self.resize(grown)
    }
}

#[cfg(test)]
impl DynamicBuffer<()> {
    /// A full unit buffer whose capacity cannot be doubled
    pub(crate) fn saturated() -> Self {
        let capacity = usize::MAX / 2 + 1;
        let mut data = Vec::new();
        // SAFETY: `()` is zero-sized, so every length is backed by valid storage
        // and there is nothing to initialize
        unsafe { data.set_len(capacity) };
        Self { data, capacity }
    }
}

impl<T> Default for DynamicBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Element-wise copy that keeps the source's capacity
impl<T: Clone> Clone for DynamicBuffer<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
        }
    }
}
