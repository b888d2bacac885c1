//! Binary min-heap
//!
//! A priority queue backed by a single dense `Vec`, interpreted as a
//! complete binary tree. Insertion and extraction of the minimum are both
//! O(log n); peeking and the emptiness check are O(1).
//!
//! # Features
//!
//! - **[`MinHeap`]**: (key, value) entries, value defaulting to the key via
//!   [`MinHeap::add_key`]
//! - **[`SiftDownPolicy`]**: choose textbook sift-down (the default) or the
//!   legacy behaviour that never swaps with a lone left child
//! - **[`Heap`]**: trait over push/pop/peek so callers can stay generic
//!
//! # Example
//!
//! ```rust
//! use binary_minheap::MinHeap;
//!
//! let mut heap: MinHeap<i32> = MinHeap::new();
//! heap.add_key(5);
//! heap.add_key(3);
//! heap.add_key(8);
//! heap.add_key(1);
//!
//! assert_eq!(heap.remove(), Some(1));
//! assert_eq!(heap.remove(), Some(3));
//! assert_eq!(heap.remove(), Some(5));
//! assert_eq!(heap.remove(), Some(8));
//! assert!(heap.is_empty());
//! ```

mod entry;
pub mod min_heap;
pub mod traits;

// Re-export the main types for convenience
pub use min_heap::MinHeap;
pub use traits::{Heap, HeapError, SiftDownPolicy};
