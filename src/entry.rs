//! Heap entries

/// A (key, value) pair stored in a [`MinHeap`](crate::MinHeap).
///
/// Entries are never mutated after insertion; the heap only moves them
/// between positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates an entry from its key and value
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// The ordering key
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The payload returned by `remove`
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Borrows key and value together
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Splits the entry into its key and value
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}
