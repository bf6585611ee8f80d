//! Sort engine facade
//!
//! Binds each algorithm to its operation name and routes every call
//! through the performance monitor's timing decorator. The engine never
//! mutates the store; it sorts the snapshot handed to it.

use std::sync::Arc;

use crate::model::{FeePolicy, Member};
use crate::perf::{ops, PerfMonitor};

use super::{heap, merge, quick};

/// Sorting strategies over member snapshots
pub struct SortEngine {
    monitor: Arc<PerfMonitor>,
    fees: Arc<dyn FeePolicy + Send + Sync>,
}

impl SortEngine {
    /// Create an engine reporting to `monitor` and pricing fees with `fees`
    pub fn new(monitor: Arc<PerfMonitor>, fees: Arc<dyn FeePolicy + Send + Sync>) -> Self {
        Self { monitor, fees }
    }

    /// Quick sort by full name, ascending, case-insensitive. Not stable.
    pub fn by_name(&self, members: &[Member]) -> Vec<Member> {
        self.monitor
            .time(ops::SORT_QUICK, || quick::sort_by_name(members))
    }

    /// Merge sort by rating, descending, stable
    pub fn by_rating_desc(&self, members: &[Member]) -> Vec<Member> {
        self.monitor
            .time(ops::SORT_MERGE, || merge::sort_by_rating_desc(members))
    }

    /// Heap sort by computed monthly fee, descending. Not stable.
    pub fn by_fee_desc(&self, members: &[Member]) -> Vec<Member> {
        self.monitor.time(ops::SORT_HEAP, || {
            heap::sort_by_fee_desc(members, self.fees.as_ref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Membership, StandardRates};

    fn engine() -> SortEngine {
        SortEngine::new(
            Arc::new(PerfMonitor::new()),
            Arc::new(StandardRates::default()),
        )
    }

    fn make_member(id: &str, first: &str, rating: u8) -> Member {
        let mut member = Member::new(
            id,
            first,
            "Last",
            "x@example.com",
            "555",
            Membership::Standard,
        );
        member.set_rating(rating);
        member
    }

    #[test]
    fn test_each_sort_records_its_operation_name() {
        let monitor = Arc::new(PerfMonitor::new());
        let engine = SortEngine::new(Arc::clone(&monitor), Arc::new(StandardRates::default()));
        let members = vec![make_member("1", "Bob", 2), make_member("2", "Alice", 8)];

        let _ = engine.by_name(&members);
        assert_eq!(monitor.last_operation().unwrap().0, "sort.quick");

        let _ = engine.by_rating_desc(&members);
        assert_eq!(monitor.last_operation().unwrap().0, "sort.merge");

        let _ = engine.by_fee_desc(&members);
        assert_eq!(monitor.last_operation().unwrap().0, "sort.heap");

        assert_eq!(monitor.report().len(), 3);
    }

    #[test]
    fn test_sorts_return_new_sequences() {
        let engine = engine();
        let members = vec![make_member("1", "Bob", 2), make_member("2", "Alice", 8)];

        let by_name = engine.by_name(&members);
        assert_eq!(by_name[0].id(), "2");
        // Input order untouched.
        assert_eq!(members[0].id(), "1");

        let by_rating = engine.by_rating_desc(&members);
        assert_eq!(by_rating[0].id(), "2");
    }
}
