//! memberdb - a strict, deterministic, in-memory membership record store
//!
//! The store keeps several synchronized indices over one record set and
//! offers interchangeable sorting/searching strategies, every algorithmic
//! call timed through a performance monitor.
//!
//! # Subsystems
//!
//! - [`model`] - the member record, its membership variants, fee policy
//! - [`store`] - canonical collection plus id/name indices and the lazily
//!   rebuilt rating cache
//! - [`sort`] - quick / merge / heap sorts, each bound to a fixed key
//! - [`search`] - hash, prefix, binary and multi-criteria searches
//! - [`perf`] - per-operation timing accumulator
//! - [`stats`] - aggregate membership statistics
//! - [`bench`] - seeded data generation and algorithm benchmarking
//! - [`manager`] - the facade collaborators call
//!
//! # Invariants
//!
//! - A member id is unique across the live record set at all times
//! - Every live record has exactly one entry per auxiliary index
//! - Every mutation marks the rating cache stale; readers rebuild it lazily
//! - Engines never mutate the store; only store methods mutate state

pub mod bench;
pub mod manager;
pub mod model;
pub mod observability;
pub mod perf;
pub mod search;
pub mod sort;
pub mod stats;
pub mod store;

pub use manager::MemberManager;
pub use model::{FeePolicy, Member, Membership, MembershipKind, StandardRates};
pub use search::SearchCriteria;
pub use store::MemberStore;
