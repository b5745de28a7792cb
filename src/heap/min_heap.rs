//! Binary min-heap with comparator-driven ordering
//!
//! The ordering is supplied as a comparator so callers can key the heap on
//! externally tracked, mutable state: the comparator re-reads that state
//! on every comparison, and `update` re-establishes heap order after the
//! driving key of an element has changed. Prim's minimum spanning tree
//! keys the heap on its mutable key map this way.

use std::cmp::Ordering;

use crate::error::HeapError;

/// Array-backed binary min-heap
pub struct MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    cmp: C,
}

impl<T: Ord> MinHeap<T, fn(&T, &T) -> Ordering> {
    /// Creates a heap ordered by the element type's natural ordering
    pub fn new() -> Self {
        Self::with_comparator(T::cmp as fn(&T, &T) -> Ordering)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, T::cmp as fn(&T, &T) -> Ordering)
    }
}

impl<T: Ord> Default for MinHeap<T, fn(&T, &T) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Creates a heap whose order is decided by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            items: Vec::new(),
            cmp,
        }
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the minimum element without removing it
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::Empty)
    }

    /// Adds an element, growing the backing storage when full
    pub fn push(&mut self, item: T) {
        self.grow_if_full();
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum element
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let result = self.items.pop().ok_or(HeapError::Empty)?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(result)
    }

    /// Linear membership scan by equality
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(item)
    }

    /// Removes the first element equal to `item`; no-op when absent
    ///
    /// The vacated slot is filled with the last element, which may violate
    /// the heap property in either direction, so both sifts run.
    pub fn remove(&mut self, item: &T)
    where
        T: PartialEq,
    {
        let Some(index) = self.items.iter().position(|i| i == item) else {
            return;
        };

        let last = self.items.len() - 1;
        self.items.swap(index, last);
        self.items.pop();

        if index < self.items.len() {
            self.sift_down(index);
            self.sift_up(index);
        }
    }

    /// Re-establishes heap order for an element whose externally tracked
    /// key changed; no-op when absent
    ///
    /// The caller may have decreased or increased the driving key, so the
    /// element is sifted in both directions.
    pub fn update(&mut self, item: &T)
    where
        T: PartialEq,
    {
        let Some(index) = self.items.iter().position(|i| i == item) else {
            return;
        };
        self.sift_up(index);
        self.sift_down(index);
    }

    /// Defensive copy of the current contents, in heap order
    pub fn elements(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Doubles the backing capacity (minimum 1) when full; never shrinks
    fn grow_if_full(&mut self) {
        if self.items.len() == self.items.capacity() {
            let target = (self.items.capacity() * 2).max(1);
            self.items.reserve_exact(target - self.items.len());
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.cmp)(&self.items[index], &self.items[parent]) == Ordering::Less {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            if left >= self.items.len() {
                break;
            }

            let right = left + 1;
            let mut smallest = left;
            if right < self.items.len()
                && (self.cmp)(&self.items[right], &self.items[left]) == Ordering::Less
            {
                smallest = right;
            }

            if (self.cmp)(&self.items[smallest], &self.items[index]) == Ordering::Less {
                self.items.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}
