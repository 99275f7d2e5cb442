//! Array-Backed Binary Heaps for Rust
//!
//! This crate provides a growable contiguous buffer and a binary heap built on
//! top of it. The heap is a single generic engine parameterized by an ordering
//! policy, so min- and max-heaps share all of their code.
//!
//! # Features
//!
//! - **DynamicBuffer**: contiguous storage with insert/remove at any index and
//!   amortized doubling growth; allocation failure is reported, never aborts
//! - **BinaryHeap**: O(log n) insert and extract-root, O(1) peek
//! - **MinHeap / MaxHeap**: the engine with ascending or descending order
//! - **Copy construction**: `Clone` produces a fully independent heap
//!
//! # Example
//!
//! ```rust
//! use array_heaps::{Heap, MaxHeap, MinHeap};
//!
//! let mut min: MinHeap<i32> = MinHeap::new();
//! let mut max: MaxHeap<i32> = MaxHeap::new();
//! for v in [5, 3, 8, 1, 9, 2] {
//!     min.insert(v);
//!     max.insert(v);
//! }
//!
//! let copy = min.clone();
//! assert_eq!(min.extract_root(), Some(1));
//! assert_eq!(max.extract_root(), Some(9));
//! assert_eq!(copy.len(), 6);
//! ```

pub mod binary;
pub mod buffer;
pub mod error;
pub mod order;
pub mod traits;

// Re-export the main types for convenience
pub use binary::{BinaryHeap, MaxHeap, MinHeap};
pub use buffer::{DynamicBuffer, DEFAULT_CAPACITY};
pub use error::{BufferError, HeapError};
pub use order::{HeapOrder, MaxOrder, MinOrder};
pub use traits::Heap;
