//! The facade collaborators call
//!
//! `MemberManager` wires the index store, the sort and search engines and
//! the shared performance monitor into the narrow interface the excluded
//! UI/CLI layers consume. Mutations emit structured lifecycle events;
//! reads stay silent.

use std::sync::Arc;
use std::time::Duration;

use crate::model::{FeePolicy, Member, StandardRates};
use crate::observability::Logger;
use crate::perf::PerfMonitor;
use crate::search::{SearchCriteria, SearchEngine};
use crate::sort::SortEngine;
use crate::stats::MembershipStats;
use crate::store::{MemberStore, StoreResult};

/// Membership record store with interchangeable sort/search strategies
/// and built-in performance measurement
pub struct MemberManager {
    store: MemberStore,
    monitor: Arc<PerfMonitor>,
    sorter: SortEngine,
    searcher: SearchEngine,
    fees: Arc<dyn FeePolicy + Send + Sync>,
}

impl MemberManager {
    /// Empty manager with the stock rate card
    pub fn new() -> Self {
        Self::with_fee_policy(Arc::new(StandardRates::default()))
    }

    /// Empty manager pricing fees with the supplied policy
    pub fn with_fee_policy(fees: Arc<dyn FeePolicy + Send + Sync>) -> Self {
        let monitor = Arc::new(PerfMonitor::new());
        Self {
            store: MemberStore::new(),
            sorter: SortEngine::new(Arc::clone(&monitor), Arc::clone(&fees)),
            searcher: SearchEngine::new(Arc::clone(&monitor)),
            monitor,
            fees,
        }
    }

    // ==================== MUTATION ====================

    /// Insert a record; `DuplicateId` if the id is already live
    pub fn add(&mut self, member: Member) -> StoreResult<()> {
        let id = member.id().to_string();
        match self.store.add(member) {
            Ok(()) => {
                Logger::info("MEMBER_ADD", &[("id", id.as_str())]);
                Ok(())
            }
            Err(err) => {
                Logger::warn(
                    "MEMBER_ADD_REJECTED",
                    &[("id", id.as_str()), ("reason", "duplicate id")],
                );
                Err(err)
            }
        }
    }

    /// Remove by id; `false` if absent
    pub fn remove(&mut self, id: &str) -> bool {
        let removed = self.store.remove(id);
        if removed {
            Logger::info("MEMBER_REMOVE", &[("id", id)]);
        }
        removed
    }

    /// Change a record's name, re-keying the name index; `false` if absent
    pub fn rename(&mut self, id: &str, new_first: &str, new_last: &str) -> bool {
        let renamed = self.store.rename(id, new_first, new_last);
        if renamed {
            Logger::info(
                "MEMBER_RENAME",
                &[("first", new_first), ("id", id), ("last", new_last)],
            );
        }
        renamed
    }

    /// Assign a rating under the reject-on-out-of-range contract;
    /// `false` if the id is absent
    pub fn set_rating(&mut self, id: &str, rating: u8) -> bool {
        self.store.set_rating(id, rating)
    }

    /// Set the goal-achieved flag; `false` if the id is absent
    pub fn set_goal_achieved(&mut self, id: &str, achieved: bool) -> bool {
        self.store.set_goal_achieved(id, achieved)
    }

    /// Replace contact attributes; `false` if the id is absent
    pub fn set_contact(&mut self, id: &str, email: &str, phone: &str) -> bool {
        self.store.set_contact(id, email, phone)
    }

    // ==================== STORE READS ====================

    /// Direct store lookup (untimed; use [`search_by_id`] to record a
    /// performance sample)
    ///
    /// [`search_by_id`]: Self::search_by_id
    pub fn by_id(&self, id: &str) -> Option<&Member> {
        self.store.by_id(id)
    }

    /// Ordered case-insensitive prefix scan (untimed)
    pub fn by_name_prefix(&self, prefix: &str) -> Vec<Member> {
        self.store.by_name_prefix(prefix)
    }

    /// Cloned snapshot of the record set in insertion order
    pub fn all(&self) -> Vec<Member> {
        self.store.all()
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    // ==================== SORTING ====================

    /// Quick sort by full name, ascending, case-insensitive
    pub fn sort_by_name(&self, members: &[Member]) -> Vec<Member> {
        self.sorter.by_name(members)
    }

    /// Stable merge sort by rating, descending
    pub fn sort_by_rating_desc(&self, members: &[Member]) -> Vec<Member> {
        self.sorter.by_rating_desc(members)
    }

    /// Heap sort by computed monthly fee, descending
    pub fn sort_by_fee_desc(&self, members: &[Member]) -> Vec<Member> {
        self.sorter.by_fee_desc(members)
    }

    // ==================== SEARCHING ====================

    /// Direct id lookup through the id index
    pub fn search_by_id(&self, id: &str) -> Option<Member> {
        self.searcher.by_id(&self.store, id)
    }

    /// Ordered prefix lookup through the name index
    pub fn search_by_name_prefix(&self, prefix: &str) -> Vec<Member> {
        self.searcher.by_name_prefix(&self.store, prefix)
    }

    /// Exact-rating binary search over the rating view
    pub fn search_by_rating(&self, rating: u8) -> Vec<Member> {
        self.searcher.by_rating(&self.store, rating)
    }

    /// Multi-criteria conjunctive filter
    pub fn search_advanced(&self, criteria: &SearchCriteria) -> Vec<Member> {
        self.searcher.advanced(&self.store, criteria)
    }

    // ==================== PERFORMANCE & STATISTICS ====================

    /// Cumulative per-operation totals, ascending by duration
    pub fn performance_report(&self) -> Vec<(String, Duration)> {
        self.monitor.report()
    }

    /// The most recent timed operation, if any
    pub fn last_operation(&self) -> Option<(String, Duration)> {
        self.monitor.last_operation()
    }

    /// Human-readable performance summary
    pub fn performance_summary(&self) -> String {
        self.monitor.summary()
    }

    /// Aggregate statistics over the current record set
    pub fn stats(&self) -> MembershipStats {
        MembershipStats::collect(&self.store.all(), self.fees.as_ref())
    }
}

impl Default for MemberManager {
    fn default() -> Self {
        Self::new()
    }
}
