//! Array-backed binary heap
//!
//! [`BinaryHeap`] keeps its elements in a [`DynamicBuffer`] laid out as an
//! implicit complete binary tree: the children of slot `i` live at `2i + 1`
//! and `2i + 2`. The ordering policy `O` decides which element belongs nearer
//! the root, so [`MinHeap`] and [`MaxHeap`] are the same engine with a
//! different type parameter.
//!
//! # Time Complexity
//!
//! | Operation      | Complexity              |
//! |----------------|-------------------------|
//! | `insert`       | O(log n) amortized      |
//! | `extract_root` | O(log n)                |
//! | `peek`         | O(1)                    |
//! | `clone`        | O(n)                    |
//!
//! # Example
//!
//! ```rust
//! use array_heaps::Heap;
//! use array_heaps::binary::{MaxHeap, MinHeap};
//!
//! let mut min: MinHeap<i32> = MinHeap::with_capacity(4);
//! let mut max: MaxHeap<i32> = MaxHeap::with_capacity(4);
//! for v in [5, 3, 8, 1, 9, 2] {
//!     min.insert(v);
//!     max.insert(v);
//! }
//!
//! assert_eq!(min.capacity(), 8);
//! assert_eq!(min.extract_root(), Some(1));
//! assert_eq!(max.extract_root(), Some(9));
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::buffer::DynamicBuffer;
use crate::error::HeapError;
use crate::order::{HeapOrder, MaxOrder, MinOrder};
use crate::traits::Heap;

/// A binary heap whose root is chosen by the ordering policy `O`
pub struct BinaryHeap<T, O = MinOrder> {
    /// Heap-ordered storage; the live length is the heap size
    data: DynamicBuffer<T>,
    _order: PhantomData<fn() -> O>,
}

/// Binary heap with the smallest element at the root
pub type MinHeap<T> = BinaryHeap<T, MinOrder>;

/// Binary heap with the largest element at the root
pub type MaxHeap<T> = BinaryHeap<T, MaxOrder>;

impl<T, O: HeapOrder<T>> Heap<T> for BinaryHeap<T, O> {
    fn new() -> Self {
        Self {
            data: DynamicBuffer::new(),
            _order: PhantomData,
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        Self {
            data: DynamicBuffer::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn capacity(&self) -> usize {
        self.data.capacity()
    }

    fn try_insert(&mut self, value: T) -> Result<(), HeapError> {
        let previous = self.data.capacity();
        self.data.push(value)?;
        if self.data.capacity() != previous {
            log::debug!("heap grew: {previous} -> {} slots", self.data.capacity());
        }

        let last = self.data.len() - 1;
        self.sift_up(last);
        Ok(())
    }

    fn insert(&mut self, value: T) {
        if let Err(err) = self.try_insert(value) {
            panic!("binary heap insert failed: {err}");
        }
    }

    fn peek(&self) -> Option<&T> {
        self.data.get(0)
    }

    fn extract_root(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.data.swap(0, last).ok()?;
        let root = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        root
    }
}

impl<T, O: HeapOrder<T>> BinaryHeap<T, O> {
    /// Checks that no child outranks its parent
    ///
    /// Every public operation preserves this; it is exposed for tests and
    /// debug assertions.
    pub fn verify_heap_property(&self) -> bool {
        let data = self.data.as_slice();
        (1..data.len()).all(|i| !O::outranks(&data[i], &data[(i - 1) / 2]))
    }

    /// Move element at index up until its parent is not outranked
    fn sift_up(&mut self, mut index: usize) {
        let data = self.data.as_mut_slice();
        while index > 0 {
            let parent = (index - 1) / 2;
            if O::outranks(&data[index], &data[parent]) {
                data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down until neither child outranks it
    fn sift_down(&mut self, mut index: usize) {
        let data = self.data.as_mut_slice();
        let len = data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;

            // Left wins only when it strictly outranks right
            let child = if right < len && !O::outranks(&data[left], &data[right]) {
                right
            } else {
                left
            };

            if O::outranks(&data[child], &data[index]) {
                data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }
}

impl<T, O: HeapOrder<T>> Default for BinaryHeap<T, O> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy construction: same capacity, element-wise copy of the live elements
impl<T: Clone, O> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        log::debug!(
            "copying heap: {} elements, {} slots",
            self.data.len(),
            self.data.capacity()
        );
        Self {
            data: self.data.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("data", &self.data.as_slice())
            .field("capacity", &self.data.capacity())
            .finish()
    }
}
