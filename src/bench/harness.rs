//! Doubling-size benchmark harness
//!
//! Runs every sorting strategy plus linear-vs-hash id search over data
//! sizes doubling from 100 up to a configured maximum, recording wall
//! durations per (algorithm, size).

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{FeePolicy, Member, StandardRates};
use crate::sort;
use crate::store::MemberStore;

use super::data::generate_members;

/// Per-algorithm duration tables keyed by data size
#[derive(Debug, Clone, Default)]
pub struct BenchmarkResults {
    /// Sorting algorithm -> (size -> elapsed)
    pub sorting: BTreeMap<String, BTreeMap<usize, Duration>>,
    /// Searching algorithm -> (size -> elapsed)
    pub searching: BTreeMap<String, BTreeMap<usize, Duration>>,
}

impl BenchmarkResults {
    fn add_sorting(&mut self, algorithm: &str, size: usize, elapsed: Duration) {
        self.sorting
            .entry(algorithm.to_string())
            .or_default()
            .insert(size, elapsed);
    }

    fn add_searching(&mut self, algorithm: &str, size: usize, elapsed: Duration) {
        self.searching
            .entry(algorithm.to_string())
            .or_default()
            .insert(size, elapsed);
    }

    /// Human-readable results table
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("Benchmark Results\n");
        out.push_str("=================\n\n");

        out.push_str("Sorting Algorithm Performance:\n");
        Self::render_section(&mut out, &self.sorting);

        out.push_str("\nSearching Algorithm Performance:\n");
        Self::render_section(&mut out, &self.searching);

        out
    }

    fn render_section(out: &mut String, section: &BTreeMap<String, BTreeMap<usize, Duration>>) {
        for (algorithm, results) in section {
            out.push_str(&format!("{:<12}: ", algorithm));
            for (size, elapsed) in results {
                out.push_str(&format!(
                    "n={}:{:.2}ms ",
                    size,
                    elapsed.as_secs_f64() * 1_000.0
                ));
            }
            out.push('\n');
        }
    }
}

/// Benchmark driver over doubling data sizes
pub struct BenchmarkRunner {
    max_size: usize,
    seed: u64,
    fees: StandardRates,
}

impl BenchmarkRunner {
    /// Sizes run 100, 200, 400, ... while <= `max_size`
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            seed: 0,
            fees: StandardRates::default(),
        }
    }

    /// Use a specific data-generation seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Run the full matrix and collect results
    pub fn run(&self) -> BenchmarkResults {
        let mut results = BenchmarkResults::default();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut size = 100;
        while size <= self.max_size {
            let data = generate_members(size, self.seed);

            results.add_sorting("QuickSort", size, time(|| sort::sort_by_name(&data)));
            results.add_sorting("MergeSort", size, time(|| sort::sort_by_rating_desc(&data)));
            results.add_sorting("HeapSort", size, {
                let fees: &dyn FeePolicy = &self.fees;
                time(|| sort::sort_by_fee_desc(&data, fees))
            });

            let target = data[rng.gen_range(0..data.len())].id().to_string();
            results.add_searching("LinearSearch", size, time(|| linear_search(&data, &target)));

            // The hash probe is timed against a pre-built store, as the id
            // index would already exist in normal operation.
            let mut store = MemberStore::new();
            for member in &data {
                // Generated ids are unique by construction.
                let _ = store.add(member.clone());
            }
            results.add_searching("HashSearch", size, time(|| store.by_id(&target).cloned()));

            size *= 2;
        }

        results
    }
}

fn time<T>(f: impl FnOnce() -> T) -> Duration {
    let start = Instant::now();
    let _ = f();
    start.elapsed()
}

fn linear_search<'a>(members: &'a [Member], id: &str) -> Option<&'a Member> {
    members.iter().find(|member| member.id() == id)
}
