//! Common trait for the heap types in this crate
//!
//! [`Heap`] is the operation surface shared by every ordering of
//! [`BinaryHeap`](crate::binary::BinaryHeap). Elements are compared directly;
//! there is no separate priority key.

use crate::error::HeapError;

/// Base trait for array-backed priority structures
///
/// # Example
///
/// ```rust
/// use array_heaps::Heap;
/// use array_heaps::binary::MinHeap;
///
/// let mut heap: MinHeap<i32> = MinHeap::new();
/// heap.insert(3);
/// heap.insert(1);
/// heap.insert(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.extract_root(), Some(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub trait Heap<T> {
    /// Creates a new empty heap with the default capacity
    fn new() -> Self;

    /// Creates a new empty heap with room for `capacity` elements
    ///
    /// A capacity of `0` selects the default capacity.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns the number of allocated slots, always `>= len()`
    fn capacity(&self) -> usize;

    /// Inserts an element, growing storage if needed
    ///
    /// # Errors
    /// Returns [`HeapError::Storage`] if storage growth fails; the heap is
    /// left unchanged.
    ///
    /// # Time Complexity
    /// O(log n), amortized over growth.
    fn try_insert(&mut self, value: T) -> Result<(), HeapError>;

    /// Inserts an element, growing storage if needed
    ///
    /// # Panics
    /// Panics if storage cannot grow. Use [`try_insert`](Self::try_insert)
    /// to handle allocation failure.
    fn insert(&mut self, value: T);

    /// Returns the highest-priority element without removing it
    ///
    /// Returns `None` on an empty heap.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the highest-priority element
    ///
    /// Returns `None` on an empty heap.
    ///
    /// # Time Complexity
    /// O(log n)
    fn extract_root(&mut self) -> Option<T>;
}
