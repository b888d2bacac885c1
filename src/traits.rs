//! Common traits and small shared types
//!
//! - [`Heap`]: the base priority-queue interface, shaped like the standard
//!   `BinaryHeap` API but storing (priority, item) pairs
//! - [`SiftDownPolicy`]: how sift-down treats a node with a single child
//! - [`HeapError`]: returned by structural validation

use std::fmt;

/// Error type for heap diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The entry at `child` has a smaller key than the entry at `parent`
    HeapPropertyViolated { parent: usize, child: usize },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::HeapPropertyViolated { parent, child } => {
                write!(
                    f,
                    "heap property violated: key at index {child} is less than its parent at index {parent}"
                )
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Controls how sift-down handles a node whose right child is missing.
///
/// The two policies only disagree when the node being sifted has a left
/// child but no right child, which happens at most once per heap (the last
/// internal node of a heap with an even number of entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SiftDownPolicy {
    /// Compare against the lone left child and swap when it is smaller.
    /// Always preserves the min-heap property.
    #[default]
    Complete,
    /// Stop as soon as either child index is out of range.
    ///
    /// A lone left child is never swapped with its parent, so a `remove`
    /// can leave the heap with one out-of-order pair. This reproduces only
    /// the historical lone-child stop; ties between equal keys still follow
    /// the left-first rule, so orders among equal keys may differ from the
    /// historical ones.
    Legacy,
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element (returns `()`)
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use binary_minheap::Heap;
/// use binary_minheap::MinHeap;
///
/// let mut heap: MinHeap<i32, &str> = Heap::new();
/// heap.push(3, "three");
/// heap.push(1, "one");
/// heap.push(2, "two");
///
/// assert_eq!(Heap::peek(&heap), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// # Time Complexity
    /// O(log n)
    fn push(&mut self, priority: P, item: T);

    /// Returns the minimum priority and associated item without removing it
    ///
    /// Note that `BinaryHeap` is a max-heap, while these heaps are min-heaps.
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Option<(P, T)>;
}
