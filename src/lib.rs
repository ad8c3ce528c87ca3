//! An array-backed binary min-heap keyed by integer priority.
//!
//! ```
//! use minheap::MinHeap;
//!
//! let mut queue = MinHeap::with_capacity(2)?;
//! queue.push("write report", 5)?;
//! queue.push("fix outage", 1)?;
//! queue.push("lunch", 3)?;
//!
//! assert_eq!(queue.pop(), Some("fix outage"));
//! assert_eq!(queue.peek(), Some(&"lunch"));
//! # Ok::<(), minheap::HeapError>(())
//! ```

mod error;
mod min_heap;
mod node;

pub use error::{HeapError, Result};
pub use min_heap::{MinHeap, DEFAULT_CAPACITY, GROWTH_FACTOR};
pub use node::{Node, Priority};
