//! `MinHeap` — fixed-capacity binary min-heap over arena indices.
//!
//! The heap stores `usize` indices; the priority of an index is looked up
//! through [`HeapKeys`] on every comparison.  That lets A* keep its scores
//! in the node arena and mutate them freely between heap operations.
//!
//! There is no decrease-key.  After scores change, call
//! [`rebuild`](MinHeap::rebuild) to restore heap order over the current
//! contents.
//!
//! # Layout
//!
//! Standard 0-indexed array heap:
//!
//! ```text
//! parent(i) = (i - 1) / 2      left(i) = 2i + 1      right(i) = 2i + 2
//! ```
//!
//! Child slots are only valid while they are `< len`.

use crate::SearchNode;

/// Priority lookup for heap items.
pub trait HeapKeys {
    fn key(&self, item: usize) -> f32;
}

impl HeapKeys for [SearchNode] {
    #[inline]
    fn key(&self, item: usize) -> f32 {
        self[item].f()
    }
}

impl HeapKeys for [f32] {
    #[inline]
    fn key(&self, item: usize) -> f32 {
        self[item]
    }
}

#[inline]
fn parent(i: usize) -> usize {
    (i - 1) / 2
}

#[inline]
fn left(i: usize) -> usize {
    2 * i + 1
}

#[inline]
fn right(i: usize) -> usize {
    2 * i + 2
}

/// Binary min-heap of arena indices with a capacity fixed at construction.
#[derive(Debug, Clone)]
pub struct MinHeap {
    slots: Vec<usize>,
    capacity: usize,
}

impl MinHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: Vec::with_capacity(capacity), capacity }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held items in heap-array order.
    pub fn items(&self) -> &[usize] {
        &self.slots
    }

    /// The minimum item without removing it.
    pub fn peek_min(&self) -> Option<usize> {
        self.slots.first().copied()
    }

    /// Append `item` and sift it up.
    ///
    /// # Panics
    /// Panics if the heap is already at capacity.
    pub fn insert<K: HeapKeys + ?Sized>(&mut self, item: usize, keys: &K) {
        assert!(
            self.slots.len() < self.capacity,
            "MinHeap overflow: capacity {} exhausted",
            self.capacity
        );
        self.slots.push(item);
        self.sift_up(self.slots.len() - 1, keys);
    }

    /// Remove and return the item with the smallest key.
    pub fn extract_min<K: HeapKeys + ?Sized>(&mut self, keys: &K) -> Option<usize> {
        let last = self.slots.pop()?;
        if self.slots.is_empty() {
            return Some(last);
        }
        let min = std::mem::replace(&mut self.slots[0], last);
        self.sift_down(0, keys);
        Some(min)
    }

    /// Re-establish heap order after keys changed, by reinserting every held
    /// item into an empty heap of the same capacity.
    pub fn rebuild<K: HeapKeys + ?Sized>(&mut self, keys: &K) {
        let held = std::mem::replace(&mut self.slots, Vec::with_capacity(self.capacity));
        for item in held {
            self.insert(item, keys);
        }
    }

    /// `true` if no parent's key exceeds its child's.
    pub fn is_heap_ordered<K: HeapKeys + ?Sized>(&self, keys: &K) -> bool {
        (1..self.slots.len())
            .all(|i| keys.key(self.slots[parent(i)]) <= keys.key(self.slots[i]))
    }

    fn sift_up<K: HeapKeys + ?Sized>(&mut self, mut i: usize, keys: &K) {
        while i > 0 {
            let p = parent(i);
            if keys.key(self.slots[p]) > keys.key(self.slots[i]) {
                self.slots.swap(p, i);
                i = p;
            } else {
                break;
            }
        }
    }

    fn sift_down<K: HeapKeys + ?Sized>(&mut self, mut i: usize, keys: &K) {
        let len = self.slots.len();
        loop {
            let mut smallest = i;
            for child in [left(i), right(i)] {
                if child < len && keys.key(self.slots[child]) < keys.key(self.slots[smallest]) {
                    smallest = child;
                }
            }
            if smallest == i {
                break;
            }
            self.slots.swap(i, smallest);
            i = smallest;
        }
    }
}
