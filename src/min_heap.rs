use std::fmt;

use crate::error::{HeapError, Result};
use crate::node::{Node, Priority};

/// Slots allocated by [`MinHeap::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Factor applied to the capacity whenever a push finds the heap full.
pub const GROWTH_FACTOR: usize = 2;

/// A minimum priority queue backed by a binary heap.
///
/// Elements are moved in on [`push`](MinHeap::push) and handed back by value
/// on [`pop`](MinHeap::pop). The node with the smallest priority always sits
/// at index 0. Elements sharing a priority come out in an unspecified order.
pub struct MinHeap<T> {
    data: Vec<Node<T>>,
    capacity: usize,
}

impl<T> MinHeap<T> {
    /// Create an empty heap with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        MinHeap {
            data: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Create an empty heap with room for `capacity` nodes before the first
    /// growth.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)?;
        Ok(MinHeap { data, capacity })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of nodes the heap can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The element with the lowest priority, if any.
    pub fn peek(&self) -> Option<&T> {
        self.data.first().map(|node| &node.element)
    }

    pub fn peek_priority(&self) -> Option<Priority> {
        self.data.first().map(|node| node.priority)
    }

    pub fn peek_node(&self) -> Option<&Node<T>> {
        self.data.first()
    }

    /// Insert `element` with the given priority.
    ///
    /// A full heap doubles its capacity first. If that fails the heap is
    /// left exactly as it was and the error is returned.
    pub fn push(&mut self, element: T, priority: Priority) -> Result<()> {
        if self.data.len() == self.capacity {
            self.grow()?;
        }
        let idx = self.data.len();
        self.data.push(Node::new(element, priority));
        self.sift_up(idx);
        Ok(())
    }

    /// Remove and return the element with the lowest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_node().map(|node| node.element)
    }

    /// Like [`pop`](MinHeap::pop), but keeps the priority alongside the
    /// element.
    pub fn pop_node(&mut self) -> Option<Node<T>> {
        if self.data.is_empty() {
            return None;
        }
        // Last leaf takes the root's place.
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// Make room for at least `additional` more nodes without further growth.
    pub fn reserve(&mut self, additional: usize) -> Result<()> {
        let target = self
            .data
            .len()
            .checked_add(additional)
            .ok_or(HeapError::CapacityOverflow {
                current: self.capacity,
            })?;
        if target <= self.capacity {
            return Ok(());
        }
        self.resize(target)
    }

    fn grow(&mut self) -> Result<()> {
        let target = self
            .capacity
            .checked_mul(GROWTH_FACTOR)
            .ok_or(HeapError::CapacityOverflow {
                current: self.capacity,
            })?;
        self.resize(target)
    }

    /// Reallocate the backing storage to hold `target` nodes. Existing nodes
    /// are preserved; on failure nothing changes.
    fn resize(&mut self, target: usize) -> Result<()> {
        let additional = target - self.data.len();
        if let Err(e) = self.data.try_reserve_exact(additional) {
            log::warn!(
                "heap growth from {} to {} slots failed: {}",
                self.capacity,
                target,
                e
            );
            return Err(e.into());
        }
        log::trace!("heap grew from {} to {} slots", self.capacity, target);
        self.capacity = target;
        Ok(())
    }

    /// Restore heap order upward from index `idx`.
    ///
    /// A child moves up only while its parent has a strictly greater
    /// priority.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.data[parent].priority <= self.data[idx].priority {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    /// Restore heap order downward from index `idx`.
    ///
    /// On equal priorities the left child is preferred and the current node
    /// stays put.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.data[left].priority < self.data[smallest].priority {
                smallest = left;
            }
            if right < len && self.data[right].priority < self.data[smallest].priority {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.data.swap(idx, smallest);
            idx = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| self.data[(i - 1) / 2].priority <= self.data[i].priority)
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for MinHeap<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend(self.data.iter().cloned());
        MinHeap {
            data,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for MinHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("nodes", &self.data)
            .finish()
    }
}
