//! Performance Monitor subsystem for memberdb
//!
//! A pure accumulator: it knows operation names and durations, nothing
//! about what the operations do.
//!
//! # Design Principles
//!
//! - `record` is the sole mutator, called once per completed engine call
//! - [`PerfMonitor::time`] is the decorator that brackets a call with a
//!   monotonic clock, keeping the algorithms themselves free of timing code
//! - Retained state is per-name cumulative totals plus the single most
//!   recent sample, never a full history

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Fixed operation names the engines record under
pub mod ops {
    /// Partition-exchange sort by full name
    pub const SORT_QUICK: &str = "sort.quick";
    /// Stable merge sort by rating, descending
    pub const SORT_MERGE: &str = "sort.merge";
    /// Heap sort by computed monthly fee, descending
    pub const SORT_HEAP: &str = "sort.heap";
    /// Direct id lookup through the id index
    pub const SEARCH_HASH: &str = "search.hash";
    /// Ordered prefix lookup through the name index
    pub const SEARCH_PREFIX: &str = "search.prefix";
    /// Exact-rating binary search over the rating view
    pub const SEARCH_BINARY: &str = "search.binary";
    /// Multi-criteria conjunctive filter
    pub const SEARCH_ADVANCED: &str = "search.advanced";
}

#[derive(Debug, Default)]
struct MonitorState {
    /// Operation name -> cumulative elapsed time
    totals: HashMap<String, Duration>,
    /// Most recent completed operation
    last: Option<(String, Duration)>,
}

/// Accumulates per-operation timing statistics
#[derive(Debug, Default)]
pub struct PerfMonitor {
    state: Mutex<MonitorState>,
}

impl PerfMonitor {
    /// Creates a monitor with no recorded samples
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed operation
    pub fn record(&self, name: &str, elapsed: Duration) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        *state.totals.entry(name.to_string()).or_default() += elapsed;
        state.last = Some((name.to_string(), elapsed));
    }

    /// Run `f`, timing it and recording the sample under `name`.
    ///
    /// This is the only place engine calls get bracketed with a clock.
    pub fn time<T>(&self, name: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let result = f();
        self.record(name, start.elapsed());
        result
    }

    /// The most recent operation, if any has completed
    pub fn last_operation(&self) -> Option<(String, Duration)> {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last
            .clone()
    }

    /// Cumulative totals, ascending by duration (ties broken by name so
    /// the order is deterministic)
    pub fn report(&self) -> Vec<(String, Duration)> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<(String, Duration)> = state
            .totals
            .iter()
            .map(|(name, total)| (name.clone(), *total))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        entries
    }

    /// Human-readable summary of the accumulated statistics
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("Algorithm Performance Statistics\n");
        out.push_str("================================\n");

        if let Some((name, elapsed)) = self.last_operation() {
            out.push_str(&format!(
                "Last Operation: {} ({:.3} ms)\n",
                name,
                elapsed.as_secs_f64() * 1_000.0
            ));
        }

        out.push_str("\nCumulative Performance (total time in ms):\n");
        for (name, total) in self.report() {
            out.push_str(&format!(
                "{:<15}: {:.3} ms\n",
                name,
                total.as_secs_f64() * 1_000.0
            ));
        }

        out
    }
}
