//! Index Store subsystem for memberdb
//!
//! Owns the canonical record collection plus two auxiliary indices
//! (by-id, by-name) and one invalidatable cache (by-rating).
//!
//! # Design Principles
//!
//! - Single source of truth: only store methods mutate state; the sort and
//!   search engines read through it
//! - Derived state: indices mirror the canonical collection, never the
//!   other way around
//! - Atomic from the caller's view: no partial-index state is observable
//!
//! # Invariants
//!
//! - Every live record has exactly one id-index and one name-index entry
//!   keyed by its current id/name
//! - Every mutating operation marks the rating cache stale
//! - The canonical collection preserves insertion order, so stable sorts
//!   and rating-tie scans observe it

mod errors;
mod store;

pub use errors::{StoreError, StoreResult};
pub use store::MemberStore;
