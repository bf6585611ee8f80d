//! Sort Engine subsystem for memberdb
//!
//! Three algorithms, each bound to a fixed sort key and order:
//!
//! - Quick sort: full name ascending, case-insensitive. Lomuto last-pivot
//!   partition, recursive, no size cutoff. O(n log n) average, O(n^2) on
//!   adversarial input (accepted; callers needing guaranteed bounds use
//!   merge sort). Not stable.
//! - Merge sort: rating descending, stable. O(n log n) worst case, O(n)
//!   auxiliary space.
//! - Heap sort: computed monthly fee descending, in-place. O(n log n)
//!   worst case, O(1) auxiliary space. Not stable.
//!
//! # Invariants
//!
//! - Inputs are never mutated; every sort works on a private copy
//! - Every call records exactly one performance sample

mod engine;
mod heap;
mod merge;
mod quick;

pub use engine::SortEngine;
pub use heap::sort_by_fee_desc;
pub use merge::sort_by_rating_desc;
pub use quick::sort_by_name;
