//! Algorithm benchmarking for memberdb
//!
//! Generates deterministic seeded record sets and times each sorting and
//! searching strategy across doubling data sizes. Results are raw
//! measurements; interpretation (complexity fitting, charting) stays a
//! collaborator concern.

mod data;
mod harness;

pub use data::generate_members;
pub use harness::{BenchmarkResults, BenchmarkRunner};
