//! Ordering policies for [`BinaryHeap`](crate::binary::BinaryHeap)
//!
//! A policy decides which of two elements belongs closer to the root. It is a
//! type parameter of the heap, so the comparison is resolved at compile time
//! and carries no state.
//!
//! The comparison follows [`std::cmp::Ordering`]:
//!
//! | Result    | Meaning                                   |
//! |-----------|-------------------------------------------|
//! | `Less`    | `a` strictly outranks `b` (nearer root)   |
//! | `Equal`   | same rank; never causes a swap            |
//! | `Greater` | `b` outranks `a`                          |
//!
//! Since equal ranks never swap, extraction order among equal elements is
//! unspecified.

use std::cmp::Ordering;

/// Strategy deciding which of two elements has higher priority
pub trait HeapOrder<T> {
    /// Three-way rank comparison; `Less` means `a` belongs nearer the root
    fn compare(a: &T, b: &T) -> Ordering;

    /// Returns true if `a` strictly outranks `b`
    #[inline]
    fn outranks(a: &T, b: &T) -> bool {
        Self::compare(a, b) == Ordering::Less
    }
}

/// Ascending order: the smallest element is the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord> HeapOrder<T> for MinOrder {
    #[inline]
    fn compare(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order: the largest element is the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord> HeapOrder<T> for MaxOrder {
    #[inline]
    fn compare(a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}
