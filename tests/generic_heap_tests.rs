//! Generic tests for the `Heap` trait
//!
//! These helpers only use the trait interface, so they exercise `MinHeap`
//! exactly as downstream generic code would.

use binary_minheap::{Heap, MinHeap};

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<String, i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();

    heap.push(5, "five");
    heap.push(1, "one");
    heap.push(10, "ten");
    heap.push(3, "three");

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some((&1, &"one")));

    assert_eq!(heap.pop(), Some((1, "one")));
    assert_eq!(heap.pop(), Some((3, "three")));
    assert_eq!(heap.pop(), Some((5, "five")));
    assert_eq!(heap.pop(), Some((10, "ten")));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test that duplicates are all extracted before any larger key
fn test_duplicate_priorities<H: Heap<char, i32>>() {
    let mut heap = H::new();

    heap.push(3, 'c');
    heap.push(2, 'a');
    heap.push(2, 'b');

    let (p1, i1) = heap.pop().unwrap();
    let (p2, i2) = heap.pop().unwrap();
    assert_eq!((p1, p2), (2, 2));
    let mut items = [i1, i2];
    items.sort();
    assert_eq!(items, ['a', 'b']);

    assert_eq!(heap.pop(), Some((3, 'c')));
}

/// Test alternating insert and pop
fn test_alternating_ops<H: Heap<i32, i32>>() {
    let mut heap = H::new();

    for i in 0..200 {
        heap.push(i * 2, i);
        heap.push(i * 2 + 1, i + 1000);
        assert_eq!(heap.pop().map(|(p, _)| p), Some(i));
    }

    assert_eq!(heap.len(), 200);
    let mut last = i32::MIN;
    while let Some((p, _)) = heap.pop() {
        assert!(p >= last);
        last = p;
    }
}

/// Test extreme priority values
fn test_extreme_priorities<H: Heap<u8, i64>>() {
    let mut heap = H::new();

    heap.push(i64::MAX, 3);
    heap.push(0, 2);
    heap.push(i64::MIN, 1);

    assert_eq!(heap.pop(), Some((i64::MIN, 1)));
    assert_eq!(heap.pop(), Some((0, 2)));
    assert_eq!(heap.pop(), Some((i64::MAX, 3)));
}

#[test]
fn test_min_heap_empty() {
    test_empty_heap::<MinHeap<i32, String>>();
}

#[test]
fn test_min_heap_basic() {
    test_basic_operations::<MinHeap<i32, &'static str>>();
}

#[test]
fn test_min_heap_duplicates() {
    test_duplicate_priorities::<MinHeap<i32, char>>();
}

#[test]
fn test_min_heap_alternating() {
    test_alternating_ops::<MinHeap<i32, i32>>();
}

#[test]
fn test_min_heap_extremes() {
    test_extreme_priorities::<MinHeap<i64, u8>>();
}
