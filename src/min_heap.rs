//! Array-backed binary min-heap
//!
//! Entries live in a single dense `Vec`, read as a complete binary tree:
//! the root is at index 0 and the node at index `i` has children at
//! `2i + 1` and `2i + 2`. Insertion appends and sifts up, removal swaps the
//! root with the last entry, pops it, and sifts the new root down.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity    |
//! |-------------|---------------|
//! | `add`       | O(log n)      |
//! | `remove`    | O(log n)      |
//! | `peek`      | O(1)          |
//! | `is_empty`  | O(1)          |
//! | `merge`     | O(m log(n+m)) |
//!
//! # Example
//!
//! ```rust
//! use binary_minheap::MinHeap;
//!
//! let mut heap = MinHeap::new();
//! heap.add(5, "five");
//! heap.add(3, "three");
//! heap.add(8, "eight");
//!
//! assert_eq!(heap.to_string(), "[three, five, eight]");
//! assert_eq!(heap.remove(), Some("three"));
//! assert_eq!(heap.remove(), Some("five"));
//! assert_eq!(heap.remove(), Some("eight"));
//! assert_eq!(heap.remove(), None);
//! ```

use std::fmt;

use log::{debug, trace};

use crate::entry::Entry;
use crate::traits::{Heap, HeapError, SiftDownPolicy};

/// A binary min-heap of (key, value) entries
///
/// The entry with the smallest key is always at the root. When the value is
/// the key itself, use `MinHeap<K>` and [`add_key`](MinHeap::add_key).
///
/// The sift-down behaviour for a node with a single child is chosen at
/// construction, see [`SiftDownPolicy`]. [`MinHeap::new`] uses
/// [`SiftDownPolicy::Complete`].
#[derive(Debug, Clone)]
pub struct MinHeap<K, V = K> {
    /// Entries in implicit tree order
    data: Vec<Entry<K, V>>,
    policy: SiftDownPolicy,
}

impl<K: Ord, V> MinHeap<K, V> {
    /// Creates an empty heap with the default sift-down policy
    pub fn new() -> Self {
        Self::with_policy(SiftDownPolicy::default())
    }

    /// Creates an empty heap with the given sift-down policy
    pub fn with_policy(policy: SiftDownPolicy) -> Self {
        Self {
            data: Vec::new(),
            policy,
        }
    }

    /// Creates an empty heap with room for `capacity` entries before
    /// reallocating. The heap still grows past `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_policy(capacity, SiftDownPolicy::default())
    }

    /// Creates an empty heap with preallocated storage and the given
    /// sift-down policy
    pub fn with_capacity_and_policy(capacity: usize, policy: SiftDownPolicy) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            policy,
        }
    }

    /// Returns the sift-down policy chosen at construction
    pub fn policy(&self) -> SiftDownPolicy {
        self.policy
    }

    /// Returns true if the heap holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Inserts `value` under `key`
    pub fn add(&mut self, key: K, value: V) {
        self.data.push(Entry::new(key, value));
        if self.data.len() == 1 {
            return;
        }
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the entry with the smallest key and returns its value
    ///
    /// Returns `None` on an empty heap, leaving it unchanged.
    pub fn remove(&mut self) -> Option<V> {
        self.remove_entry().map(|(_, value)| value)
    }

    /// Removes the entry with the smallest key and returns both key and value
    pub fn remove_entry(&mut self) -> Option<(K, V)> {
        if self.data.is_empty() {
            return None;
        }

        let last = self.data.len() - 1;
        self.swap(0, last);
        let result = self.data.pop();

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        result.map(Entry::into_pair)
    }

    /// Returns the value at the root without removing it
    pub fn peek_minimum(&self) -> Option<&V> {
        self.data.first().map(Entry::value)
    }

    /// Returns the smallest key and its value without removing them
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.data.first().map(Entry::as_pair)
    }

    /// Drops every entry, keeping the allocation and policy
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Moves every entry of `other` into this heap
    ///
    /// Entries are re-inserted one by one, so this is O(m log(n + m)).
    /// `other`'s policy is discarded.
    pub fn merge(&mut self, other: Self) {
        self.data.reserve(other.data.len());
        for entry in other.data {
            let (key, value) = entry.into_pair();
            self.add(key, value);
        }
    }

    /// Drains the heap into a vector in extraction order
    ///
    /// Under [`SiftDownPolicy::Legacy`] the result is not guaranteed to be
    /// sorted.
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(pair) = self.remove_entry() {
            out.push(pair);
        }
        out
    }

    /// Checks the min-heap property over every parent/child pair
    ///
    /// Reports the first violation found in array order.
    pub fn validate(&self) -> Result<(), HeapError> {
        for child in 1..self.data.len() {
            let parent = (child - 1) / 2;
            if self.data[child].key() < self.data[parent].key() {
                return Err(HeapError::HeapPropertyViolated { parent, child });
            }
        }
        Ok(())
    }

    /// Move the entry at `index` toward the root while it is smaller than
    /// its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index].key() < self.data[parent].key() {
                trace!("sift_up: swapping index {index} with parent {parent}");
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the entry at `index` toward the leaves while a child is smaller
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;

            if left >= len {
                break;
            }

            if right >= len && self.policy == SiftDownPolicy::Legacy {
                if self.data[left].key() < self.data[index].key() {
                    debug!(
                        "sift_down: legacy policy leaves smaller lone child at {left} under {index}"
                    );
                }
                break;
            }

            // Right wins only when strictly smaller, so ties go left.
            let child = if right < len && self.data[right].key() < self.data[left].key() {
                right
            } else {
                left
            };

            if self.data[child].key() >= self.data[index].key() {
                break;
            }

            trace!("sift_down: swapping index {index} with child {child}");
            self.swap(index, child);
            index = child;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }
}

impl<K: Ord + Clone> MinHeap<K, K> {
    /// Inserts `key` as both the key and the value
    pub fn add_key(&mut self, key: K) {
        self.add(key.clone(), key);
    }
}

impl<K: Ord, V> Heap<V, K> for MinHeap<K, V> {
    fn new() -> Self {
        MinHeap::new()
    }

    fn is_empty(&self) -> bool {
        MinHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        MinHeap::len(self)
    }

    fn push(&mut self, priority: K, item: V) {
        self.add(priority, item);
    }

    fn peek(&self) -> Option<(&K, &V)> {
        MinHeap::peek(self)
    }

    fn pop(&mut self) -> Option<(K, V)> {
        self.remove_entry()
    }
}

impl<K: Ord, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> Extend<(K, V)> for MinHeap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MinHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

/// Lists values in array order, not sorted order: `[v1, v2, ..., vn]`.
impl<K, V: fmt::Display> fmt::Display for MinHeap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entry) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", entry.value())?;
        }
        write!(f, "]")
    }
}
