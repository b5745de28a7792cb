//! Array-backed binary min-heap

pub mod min_heap;

pub use min_heap::MinHeap;
