//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap and buffer invariants are always maintained.

use proptest::prelude::*;
use array_heaps::{BinaryHeap, DynamicBuffer, Heap, HeapOrder, MaxHeap, MinHeap, DEFAULT_CAPACITY};

/// Smallest capacity reachable by doubling from the starting hint that holds `n`
fn expected_capacity(hint: usize, n: usize) -> usize {
    let mut capacity = if hint == 0 { DEFAULT_CAPACITY } else { hint };
    while capacity < n {
        capacity *= 2;
    }
    capacity
}

/// Test that insert and extract maintain the heap property and size accounting
fn test_operation_invariant<O: HeapOrder<i32>>(ops: Vec<(bool, i32)>) -> Result<(), TestCaseError> {
    let mut heap: BinaryHeap<i32, O> = BinaryHeap::new();
    let mut inserted = 0usize;
    let mut extracted = 0usize;

    for (should_extract, value) in ops {
        if should_extract && !heap.is_empty() {
            prop_assert!(heap.extract_root().is_some());
            extracted += 1;
        } else {
            heap.insert(value);
            inserted += 1;
        }

        prop_assert!(heap.verify_heap_property());
        prop_assert_eq!(heap.len(), inserted - extracted);
        prop_assert!(heap.capacity() >= heap.len());
    }

    Ok(())
}

/// Test that extraction yields the inserted multiset in policy order
fn test_sorted_extraction<O: HeapOrder<i32>>(values: Vec<i32>, descending: bool) -> Result<(), TestCaseError> {
    let mut heap: BinaryHeap<i32, O> = BinaryHeap::new();
    for &v in &values {
        heap.insert(v);
    }

    let mut out = Vec::with_capacity(values.len());
    while let Some(v) = heap.extract_root() {
        out.push(v);
    }

    let mut expected = values;
    expected.sort_unstable();
    if descending {
        expected.reverse();
    }
    prop_assert_eq!(out, expected);

    Ok(())
}

proptest! {
    #[test]
    fn test_min_heap_operation_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_operation_invariant::<array_heaps::MinOrder>(ops)?;
    }

    #[test]
    fn test_max_heap_operation_invariant(ops in prop::collection::vec((any::<bool>(), -100i32..100), 0..200)) {
        test_operation_invariant::<array_heaps::MaxOrder>(ops)?;
    }

    #[test]
    fn test_min_heap_sorted_extraction(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_sorted_extraction::<array_heaps::MinOrder>(values, false)?;
    }

    #[test]
    fn test_max_heap_sorted_extraction(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        test_sorted_extraction::<array_heaps::MaxOrder>(values, true)?;
    }

    #[test]
    fn test_capacity_growth(hint in 0usize..20, n in 0usize..300) {
        let mut heap: MinHeap<usize> = MinHeap::with_capacity(hint);
        let mut last = heap.capacity();
        for i in 0..n {
            heap.insert(i);
            prop_assert!(heap.capacity() >= last);
            last = heap.capacity();
        }
        prop_assert_eq!(heap.capacity(), expected_capacity(hint, n));
    }

    #[test]
    fn test_copy_independence(values in prop::collection::vec(any::<i32>(), 0..100), extra in any::<i32>()) {
        let mut a: MaxHeap<i32> = MaxHeap::new();
        for &v in &values {
            a.insert(v);
        }
        let mut b = a.clone();

        while a.extract_root().is_some() {}
        prop_assert_eq!(b.len(), values.len());
        prop_assert!(b.verify_heap_property());

        b.insert(extra);
        prop_assert!(a.is_empty());

        let mut expected = values;
        expected.push(extra);
        expected.sort_unstable_by(|x, y| y.cmp(x));
        let mut out = Vec::new();
        while let Some(v) = b.extract_root() {
            out.push(v);
        }
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn test_buffer_matches_vec(ops in prop::collection::vec((0u8..3, 0usize..40, any::<i16>()), 0..150)) {
        let mut buf = DynamicBuffer::with_capacity(1);
        let mut model: Vec<i16> = Vec::new();

        for (op, index, value) in ops {
            match op {
                0 => {
                    let result = buf.insert_at(index, value);
                    if index <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(index, value);
                        prop_assert_eq!(buf.get(index), Some(&value));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                1 => {
                    let result = buf.remove_at(index);
                    if index < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(index)));
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                _ => {
                    let result = buf.set(index, value);
                    if index < model.len() {
                        prop_assert!(result.is_ok());
                        model[index] = value;
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
            }
            prop_assert_eq!(buf.as_slice(), model.as_slice());
            prop_assert!(buf.capacity() >= buf.len());
        }
    }

    #[test]
    fn test_buffer_resize_clamps(values in prop::collection::vec(any::<u32>(), 0..50), new_capacity in 0usize..60) {
        let mut buf = DynamicBuffer::new();
        for &v in &values {
            buf.push(v).unwrap();
        }
        buf.resize(new_capacity).unwrap();

        let kept = values.len().min(new_capacity);
        prop_assert_eq!(buf.capacity(), new_capacity);
        prop_assert_eq!(buf.as_slice(), &values[..kept]);
    }
}
