//! Multi-criteria search filters
//!
//! A conjunction of optional predicates: every absent field is
//! unconstrained, so the default (all-absent) criteria match every record.

use serde::{Deserialize, Serialize};

use crate::model::MembershipKind;

/// Conjunctive filter over the record set.
///
/// Build with the `with_*` methods:
///
/// ```
/// use memberdb::SearchCriteria;
/// use memberdb::MembershipKind;
///
/// let criteria = SearchCriteria::new()
///     .with_rating_range(Some(7), Some(10))
///     .with_kind(MembershipKind::Coached)
///     .with_goal_achieved(true);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Id predicate: substring match, or exact when `exact_id` is set
    pub member_id: Option<String>,
    /// Treat `member_id` as an exact key instead of a substring
    pub exact_id: bool,
    /// Case-insensitive full-name substring
    pub name: Option<String>,
    /// Inclusive lower rating bound
    pub min_rating: Option<u8>,
    /// Inclusive upper rating bound
    pub max_rating: Option<u8>,
    /// Membership variant tag
    pub kind: Option<MembershipKind>,
    /// Goal-achieved flag
    pub goal_achieved: Option<bool>,
}

impl SearchCriteria {
    /// Criteria with every predicate absent (matches every record)
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain to ids containing `id` (case-insensitive)
    pub fn with_id_substring(mut self, id: impl Into<String>) -> Self {
        self.member_id = Some(id.into());
        self.exact_id = false;
        self
    }

    /// Constrain to exactly this id
    pub fn with_id_exact(mut self, id: impl Into<String>) -> Self {
        self.member_id = Some(id.into());
        self.exact_id = true;
        self
    }

    /// Constrain to full names containing `name` (case-insensitive)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Constrain the rating to `[min, max]`; either bound may be open
    pub fn with_rating_range(mut self, min: Option<u8>, max: Option<u8>) -> Self {
        self.min_rating = min;
        self.max_rating = max;
        self
    }

    /// Constrain to one membership variant
    pub fn with_kind(mut self, kind: MembershipKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Constrain to a goal-achieved state
    pub fn with_goal_achieved(mut self, achieved: bool) -> Self {
        self.goal_achieved = Some(achieved);
        self
    }

    /// Whether no predicate is set (matches every record)
    pub fn is_unconstrained(&self) -> bool {
        self.member_id.is_none()
            && self.name.is_none()
            && self.min_rating.is_none()
            && self.max_rating.is_none()
            && self.kind.is_none()
            && self.goal_achieved.is_none()
    }
}
