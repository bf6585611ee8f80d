//! Search Engine subsystem for memberdb
//!
//! Four strategies, all reading through the index store, never mutating
//! it:
//!
//! - Direct id lookup through the id index, O(1) average
//! - Ordered prefix lookup through the name index, O(log n + k)
//! - Exact-rating binary search over the lazily rebuilt rating view,
//!   O(log n + m) for m matches
//! - Multi-criteria conjunctive filter in fixed selectivity order
//!
//! Absence is a normal result everywhere: a missing id is `None`, a
//! no-match query is an empty sequence, never an error.

mod criteria;
mod engine;

pub use criteria::SearchCriteria;
pub use engine::SearchEngine;
