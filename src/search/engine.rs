//! Search engine facade
//!
//! Each strategy reads through the store and records one performance
//! sample under its fixed operation name. Absence is success: missing ids
//! are `None`, empty matches are empty vectors.

use std::sync::Arc;

use crate::model::Member;
use crate::perf::{ops, PerfMonitor};
use crate::store::MemberStore;

use super::criteria::SearchCriteria;

/// Search strategies over the index store
pub struct SearchEngine {
    monitor: Arc<PerfMonitor>,
}

impl SearchEngine {
    /// Create an engine reporting to `monitor`
    pub fn new(monitor: Arc<PerfMonitor>) -> Self {
        Self { monitor }
    }

    /// Direct lookup through the id index.
    ///
    /// O(1) average. An empty id, like an unknown one, is `None`.
    pub fn by_id(&self, store: &MemberStore, id: &str) -> Option<Member> {
        self.monitor.time(ops::SEARCH_HASH, || {
            if id.is_empty() {
                return None;
            }
            store.by_id(id).cloned()
        })
    }

    /// Ordered prefix lookup through the name index, case-insensitive
    pub fn by_name_prefix(&self, store: &MemberStore, prefix: &str) -> Vec<Member> {
        self.monitor
            .time(ops::SEARCH_PREFIX, || store.by_name_prefix(prefix))
    }

    /// Exact-rating search over the rating-ascending view.
    ///
    /// Binary-searches for the first index whose rating equals the target
    /// (continuing left on a hit to land on the earliest occurrence), then
    /// scans forward while the rating stays equal: O(log n + m) for m
    /// matches. Ties come back in insertion order because the view's sort
    /// is stable.
    pub fn by_rating(&self, store: &MemberStore, rating: u8) -> Vec<Member> {
        self.monitor.time(ops::SEARCH_BINARY, || {
            let view = store.rating_view();

            let Some(first) = first_occurrence(&view, rating) else {
                return Vec::new();
            };

            view[first..]
                .iter()
                .take_while(|member| member.rating() == rating)
                .cloned()
                .collect()
        })
    }

    /// Multi-criteria conjunctive filter.
    ///
    /// Predicates run in fixed selectivity order: exact id first (a single
    /// index probe), then rating range, variant kind, goal flag, and the
    /// name substring last. An empty candidate set short-circuits the
    /// remaining predicates.
    pub fn advanced(&self, store: &MemberStore, criteria: &SearchCriteria) -> Vec<Member> {
        self.monitor.time(ops::SEARCH_ADVANCED, || {
            let mut candidates = match &criteria.member_id {
                Some(id) if criteria.exact_id => store.by_id(id).cloned().into_iter().collect(),
                Some(id) => {
                    let needle = id.to_lowercase();
                    let mut all = store.all();
                    all.retain(|member| member.id().to_lowercase().contains(&needle));
                    all
                }
                None => store.all(),
            };
            if candidates.is_empty() {
                return candidates;
            }

            if criteria.min_rating.is_some() || criteria.max_rating.is_some() {
                let min = criteria.min_rating.unwrap_or(u8::MIN);
                let max = criteria.max_rating.unwrap_or(u8::MAX);
                candidates.retain(|member| (min..=max).contains(&member.rating()));
                if candidates.is_empty() {
                    return candidates;
                }
            }

            if let Some(kind) = criteria.kind {
                candidates.retain(|member| member.kind() == kind);
                if candidates.is_empty() {
                    return candidates;
                }
            }

            if let Some(achieved) = criteria.goal_achieved {
                candidates.retain(|member| member.goal_achieved() == achieved);
                if candidates.is_empty() {
                    return candidates;
                }
            }

            if let Some(name) = &criteria.name {
                let needle = name.to_lowercase();
                candidates.retain(|member| member.full_name().to_lowercase().contains(&needle));
            }

            candidates
        })
    }
}

/// Index of the earliest element with this rating, if any.
///
/// Standard binary search refined to keep searching the left half on a
/// match so it lands on the first occurrence.
fn first_occurrence(view: &[Member], rating: u8) -> Option<usize> {
    let mut left = 0usize;
    let mut right = view.len();
    let mut found = None;

    while left < right {
        let mid = left + (right - left) / 2;
        let mid_rating = view[mid].rating();

        if mid_rating == rating {
            found = Some(mid);
            right = mid;
        } else if mid_rating < rating {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    found
}
